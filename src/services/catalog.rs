//! Fetch boundary: the only place a "no objects" answer is turned into an
//! empty list. Every other store failure propagates.

use serde::de::DeserializeOwned;

use crate::cms::{ContentSource, ObjectQuery};
use crate::errors::AppError;
use crate::models::{MenuItem, Order, Restaurant};
use crate::services::normalize::normalize;

/// Props needed to render an order row.
const ORDER_PROPS: &[&str] = &["id", "title", "metadata", "created_at"];

/// Props needed to render a restaurant or menu item card.
const CARD_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

/// Ids only, enough for counting.
pub fn restaurant_ids_query() -> ObjectQuery {
    ObjectQuery::new(Restaurant::OBJECT_TYPE).props(&["id"])
}

pub fn menu_item_ids_query() -> ObjectQuery {
    ObjectQuery::new(MenuItem::OBJECT_TYPE).props(&["id"])
}

pub fn restaurants_query() -> ObjectQuery {
    ObjectQuery::new(Restaurant::OBJECT_TYPE)
        .props(CARD_PROPS)
        .depth(1)
}

pub fn menu_items_query() -> ObjectQuery {
    ObjectQuery::new(MenuItem::OBJECT_TYPE)
        .props(CARD_PROPS)
        .depth(1)
}

pub fn orders_query() -> ObjectQuery {
    ObjectQuery::new(Order::OBJECT_TYPE)
        .props(ORDER_PROPS)
        .depth(1)
}

/// Run one query and normalize the result. A not-found answer yields an
/// empty list.
pub async fn fetch_all<T: DeserializeOwned>(
    source: &dyn ContentSource,
    query: &ObjectQuery,
) -> Result<Vec<T>, AppError> {
    match source.find_objects(query).await {
        Ok(page) => {
            let records: Vec<T> = normalize(page.objects)?;
            tracing::debug!(
                object_type = %query.object_type,
                count = records.len(),
                total = page.total,
                "Fetched objects"
            );
            Ok(records)
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!(object_type = %query.object_type, "No objects found, using empty list");
            Ok(Vec::new())
        }
        Err(e) => {
            tracing::warn!(object_type = %query.object_type, error = %e, "Object fetch failed");
            Err(e.into())
        }
    }
}

pub async fn list_restaurants(source: &dyn ContentSource) -> Result<Vec<Restaurant>, AppError> {
    fetch_all(source, &restaurants_query()).await
}

pub async fn list_menu_items(source: &dyn ContentSource) -> Result<Vec<MenuItem>, AppError> {
    fetch_all(source, &menu_items_query()).await
}

/// Orders in fetch order. Callers decide how to sort.
pub async fn list_orders(source: &dyn ContentSource) -> Result<Vec<Order>, AppError> {
    fetch_all(source, &orders_query()).await
}
