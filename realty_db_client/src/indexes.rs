//! Best-effort index bootstrap for the properties table.

use sqlx::PgPool;

const PROPERTY_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS properties_name_idx ON properties (name)",
    "CREATE INDEX IF NOT EXISTS properties_address_idx ON properties (address)",
    "CREATE INDEX IF NOT EXISTS properties_price_idx ON properties (price)",
    "CREATE INDEX IF NOT EXISTS properties_id_owner_idx ON properties (id_owner)",
    "CREATE UNIQUE INDEX IF NOT EXISTS properties_code_internal_idx ON properties (code_internal)",
];

/// Creates the query indexes for the properties table where missing, plus the
/// uniqueness index on the internal business code.
///
/// Startup maintenance only: a failed statement is logged and skipped rather
/// than propagated, and queries keep working against the unindexed table.
#[tracing::instrument(skip(pool))]
pub async fn ensure_property_indexes(pool: &PgPool) {
    for statement in PROPERTY_INDEXES.iter().copied() {
        if let Err(error) = sqlx::query(statement).execute(pool).await {
            tracing::warn!(%error, statement, "failed to create property index");
        }
    }
}
