//! Database errors for realty operations

use thiserror::Error;

/// Errors that can occur during database operations
///
/// A well-formed query that matches nothing is not an error: absent rows
/// surface as `Ok(None)` or an empty vector.
#[derive(Debug, Error)]
pub enum RealtyDbError {
    #[error("property id must not be empty or blank")]
    BlankPropertyId,

    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),
}
