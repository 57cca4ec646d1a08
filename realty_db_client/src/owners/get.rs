//! Owner get operations.

use crate::error::RealtyDbError;
use models_realty::db;
use models_realty::service::Owner;
use sqlx::PgPool;

type Result<T> = std::result::Result<T, RealtyDbError>;

/// Gets the owners whose ids appear in `owner_ids`.
///
/// An empty id set returns no rows without touching the database.
#[tracing::instrument(skip(pool))]
pub async fn get_owners_by_ids(pool: &PgPool, owner_ids: &[String]) -> Result<Vec<Owner>> {
    if owner_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, db::Owner>(
        r#"
        SELECT id_owner, name, address, photo, birthday
        FROM owners
        WHERE id_owner = ANY($1)
        ORDER BY id_owner ASC
        "#,
    )
    .bind(owner_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Owner::from).collect())
}
