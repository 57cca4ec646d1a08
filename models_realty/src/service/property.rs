//! Service layer property model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::service::{Owner, PropertyImage, PropertyTrace};

/// Property listing with its related entities attached (service representation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub id_owner: Option<String>,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub code_internal: String,
    pub year: i32,
    /// Owning party, when the property references an existing owner row.
    pub owner: Option<Owner>,
    /// Images for the property, enabled entries first.
    pub images: Vec<PropertyImage>,
    /// Sale history, most recent sale first.
    pub traces: Vec<PropertyTrace>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
