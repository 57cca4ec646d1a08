//! Database layer property image model.

use serde::{Deserialize, Serialize};

/// Property image model (database representation).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyImage {
    pub id_property_image: String,
    pub id_property: String,
    pub file: String,
    pub enabled: bool,
}

// ===== Conversions =====

impl From<PropertyImage> for crate::service::property_image::PropertyImage {
    fn from(db: PropertyImage) -> Self {
        Self {
            id_property_image: db.id_property_image,
            id_property: db.id_property,
            file: db.file,
            enabled: db.enabled,
        }
    }
}
