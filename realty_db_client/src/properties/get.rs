//! Property get operations.

use std::collections::HashMap;

use models_realty::db;
use models_realty::service::{Owner, Property, PropertyFilter, PropertyImage, PropertyTrace};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::RealtyDbError;
use crate::normalize::build_insensitive_pattern;
use crate::{owners, property_images, property_traces};

type Result<T> = std::result::Result<T, RealtyDbError>;

/// Gets the properties matching `filter`, sorted by name ascending, each with
/// its owner, images, and sale traces attached.
///
/// Absent filter fields impose no constraint, so `None` (or an empty filter)
/// returns every property. A query that matches nothing is an empty vector,
/// not an error.
#[tracing::instrument(skip(pool))]
pub async fn get_properties(
    pool: &PgPool,
    filter: Option<&PropertyFilter>,
) -> Result<Vec<Property>> {
    let mut query = QueryBuilder::<Postgres>::new(
        "SELECT id, id_owner, name, address, price, code_internal, year, created_at, updated_at \
         FROM properties",
    );

    if let Some(filter) = filter {
        let name_pattern = filter
            .name
            .as_deref()
            .map(build_insensitive_pattern)
            .filter(|pattern| !pattern.is_empty());
        let address_pattern = filter
            .address
            .as_deref()
            .map(build_insensitive_pattern)
            .filter(|pattern| !pattern.is_empty());

        let mut has_condition = false;

        if let Some(pattern) = name_pattern {
            query.push(" WHERE name ~* ").push_bind(pattern);
            has_condition = true;
        }

        if let Some(pattern) = address_pattern {
            query.push(if has_condition { " AND " } else { " WHERE " });
            query.push("address ~* ").push_bind(pattern);
            has_condition = true;
        }

        if let Some(min_price) = filter.min_price {
            query.push(if has_condition { " AND " } else { " WHERE " });
            query.push("price >= ").push_bind(min_price);
            has_condition = true;
        }

        if let Some(max_price) = filter.max_price {
            query.push(if has_condition { " AND " } else { " WHERE " });
            query.push("price <= ").push_bind(max_price);
        }
    }

    query.push(" ORDER BY name ASC");

    let rows: Vec<db::Property> = query.build_query_as().fetch_all(pool).await?;

    let properties = rows.into_iter().map(Property::from).collect();
    load_related(pool, properties).await
}

/// Gets a single property by id with its related entities attached.
///
/// A blank id is rejected before any query is issued; an unknown id is
/// `Ok(None)`.
#[tracing::instrument(skip(pool))]
pub async fn get_property_by_id(pool: &PgPool, id: &str) -> Result<Option<Property>> {
    if id.trim().is_empty() {
        return Err(RealtyDbError::BlankPropertyId);
    }

    let row = sqlx::query_as::<_, db::Property>(
        r#"
        SELECT id, id_owner, name, address, price, code_internal, year, created_at, updated_at
        FROM properties
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let enriched = load_related(pool, vec![Property::from(row)]).await?;
    Ok(enriched.into_iter().next())
}

/// Attaches owner, images, and traces to every property in the batch.
///
/// The three lookups are batched over the whole batch's key sets and run
/// concurrently; the first failing lookup fails the call and drops its
/// siblings, so a partially enriched batch is never returned.
async fn load_related(pool: &PgPool, properties: Vec<Property>) -> Result<Vec<Property>> {
    if properties.is_empty() {
        return Ok(properties);
    }

    let mut owner_ids: Vec<String> = properties
        .iter()
        .filter_map(|property| property.id_owner.as_deref())
        .filter(|id| !id.trim().is_empty())
        .map(str::to_owned)
        .collect();
    owner_ids.sort_unstable();
    owner_ids.dedup();

    let mut property_ids: Vec<String> =
        properties.iter().map(|property| property.id.clone()).collect();
    property_ids.sort_unstable();
    property_ids.dedup();

    let (owners, images, traces) = tokio::try_join!(
        owners::get::get_owners_by_ids(pool, &owner_ids),
        property_images::get::get_images_by_property_ids(pool, &property_ids),
        property_traces::get::get_traces_by_property_ids(pool, &property_ids),
    )?;

    Ok(attach_related(properties, owners, images, traces))
}

/// Single in-memory pass attaching looked-up rows onto each property.
///
/// Images keep enabled entries first and traces the most recent sale first.
/// Both sorts are stable over rows fetched in primary-key order, so ties keep
/// an id-ascending order.
fn attach_related(
    mut properties: Vec<Property>,
    owners: Vec<Owner>,
    images: Vec<PropertyImage>,
    traces: Vec<PropertyTrace>,
) -> Vec<Property> {
    let owners: HashMap<String, Owner> = owners
        .into_iter()
        .map(|owner| (owner.id_owner.clone(), owner))
        .collect();

    let mut images_by_property: HashMap<String, Vec<PropertyImage>> = HashMap::new();
    for image in images {
        images_by_property
            .entry(image.id_property.clone())
            .or_default()
            .push(image);
    }
    for group in images_by_property.values_mut() {
        group.sort_by(|a, b| b.enabled.cmp(&a.enabled));
    }

    let mut traces_by_property: HashMap<String, Vec<PropertyTrace>> = HashMap::new();
    for trace in traces {
        traces_by_property
            .entry(trace.id_property.clone())
            .or_default()
            .push(trace);
    }
    for group in traces_by_property.values_mut() {
        group.sort_by(|a, b| b.date_sale.cmp(&a.date_sale));
    }

    for property in &mut properties {
        property.owner = property
            .id_owner
            .as_ref()
            .and_then(|id| owners.get(id))
            .cloned();
        property.images = images_by_property.remove(&property.id).unwrap_or_default();
        property.traces = traces_by_property.remove(&property.id).unwrap_or_default();
    }

    properties
}
