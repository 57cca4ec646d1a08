//! Service layer owner model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner of one or more properties (service representation).
///
/// Owners have an independent lifecycle: properties reference them but never
/// own them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id_owner: String,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthday: DateTime<Utc>,
}
