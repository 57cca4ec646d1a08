//! Database layer property model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Property listing model (database representation).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: String,
    pub id_owner: Option<String>,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub code_internal: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Property> for crate::service::property::Property {
    fn from(db: Property) -> Self {
        Self {
            id: db.id,
            id_owner: db.id_owner,
            name: db.name,
            address: db.address,
            price: db.price,
            code_internal: db.code_internal,
            year: db.year,
            // Related entities are attached per query by the db client,
            // never read from the properties table itself.
            owner: None,
            images: Vec::new(),
            traces: Vec::new(),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
