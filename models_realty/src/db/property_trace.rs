//! Database layer property trace model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sale/tax history record model (database representation).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyTrace {
    pub id_property_trace: String,
    pub id_property: String,
    pub date_sale: DateTime<Utc>,
    pub name: String,
    pub value: Decimal,
    pub tax: Decimal,
}

// ===== Conversions =====

impl From<PropertyTrace> for crate::service::property_trace::PropertyTrace {
    fn from(db: PropertyTrace) -> Self {
        Self {
            id_property_trace: db.id_property_trace,
            id_property: db.id_property,
            date_sale: db.date_sale,
            name: db.name,
            value: db.value,
            tax: db.tax,
        }
    }
}
