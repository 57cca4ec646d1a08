//! Database layer owner model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner model (database representation).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Owner {
    pub id_owner: String,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthday: DateTime<Utc>,
}

// ===== Conversions =====

impl From<Owner> for crate::service::owner::Owner {
    fn from(db: Owner) -> Self {
        Self {
            id_owner: db.id_owner,
            name: db.name,
            address: db.address,
            photo: db.photo,
            birthday: db.birthday,
        }
    }
}
