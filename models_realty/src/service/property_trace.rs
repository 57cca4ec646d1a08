//! Service layer property trace model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Historical sale/tax record attached to a property (service representation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyTrace {
    pub id_property_trace: String,
    pub id_property: String,
    pub date_sale: DateTime<Utc>,
    /// Buyer or event label for the sale.
    pub name: String,
    pub value: Decimal,
    pub tax: Decimal,
}
