//! Service layer property image model.

use serde::{Deserialize, Serialize};

/// Image attached to a property (service representation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id_property_image: String,
    pub id_property: String,
    pub file: String,
    pub enabled: bool,
}
