//! Property image get operations.

use crate::error::RealtyDbError;
use models_realty::db;
use models_realty::service::PropertyImage;
use sqlx::PgPool;

type Result<T> = std::result::Result<T, RealtyDbError>;

/// Gets all images belonging to the given property ids.
///
/// Rows come back in primary-key order so later stable sorts keep a
/// deterministic tiebreak. An empty id set returns no rows without touching
/// the database.
#[tracing::instrument(skip(pool))]
pub async fn get_images_by_property_ids(
    pool: &PgPool,
    property_ids: &[String],
) -> Result<Vec<PropertyImage>> {
    if property_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, db::PropertyImage>(
        r#"
        SELECT id_property_image, id_property, file, enabled
        FROM property_images
        WHERE id_property = ANY($1)
        ORDER BY id_property_image ASC
        "#,
    )
    .bind(property_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PropertyImage::from).collect())
}
