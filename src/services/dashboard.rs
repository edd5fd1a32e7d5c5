//! Dashboard statistics and derived order views.
//!
//! Everything here is computed from a [`DashboardContext`] fetched fresh for
//! each request; nothing is cached between renders.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cms::ContentSource;
use crate::errors::AppError;
use crate::models::money;
use crate::models::{MenuItem, Order, Restaurant};
use crate::services::catalog;

/// How many orders the "recent orders" panel shows.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Aggregated statistics for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_restaurants: usize,
    pub active_orders: usize,
    pub total_menu_items: usize,
    /// Paid revenue for orders created today, two decimals.
    pub today_revenue: String,
}

/// All records one dashboard render works from.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub restaurants: Vec<Restaurant>,
    pub orders: Vec<Order>,
    pub menu_items: Vec<MenuItem>,
    /// UTC calendar date revenue is computed for.
    pub today: NaiveDate,
}

impl DashboardContext {
    /// Fetch restaurants, orders, and menu items concurrently.
    pub async fn load(source: &dyn ContentSource, today: NaiveDate) -> Result<Self, AppError> {
        let restaurant_query = catalog::restaurant_ids_query();
        let order_query = catalog::orders_query();
        let menu_item_query = catalog::menu_item_ids_query();

        let (restaurants, orders, menu_items) = tokio::try_join!(
            catalog::fetch_all::<Restaurant>(source, &restaurant_query),
            catalog::fetch_all::<Order>(source, &order_query),
            catalog::fetch_all::<MenuItem>(source, &menu_item_query),
        )?;

        Ok(Self {
            restaurants,
            orders,
            menu_items,
            today,
        })
    }

    pub fn stats(&self) -> DashboardStats {
        compute_stats(self)
    }

    pub fn recent_orders(&self) -> Vec<Order> {
        recent_orders(&self.orders)
    }
}

pub fn compute_stats(ctx: &DashboardContext) -> DashboardStats {
    DashboardStats {
        total_restaurants: ctx.restaurants.len(),
        active_orders: active_order_count(&ctx.orders),
        total_menu_items: ctx.menu_items.len(),
        today_revenue: today_revenue(&ctx.orders, ctx.today),
    }
}

/// Orders still in progress (Pending, Preparing, Ready, Out for Delivery).
pub fn active_order_count(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.is_active()).count()
}

/// Sum of paid totals for orders created on `today` (UTC).
pub fn today_revenue(orders: &[Order], today: NaiveDate) -> String {
    let total = orders
        .iter()
        .filter(|o| o.created_date() == Some(today) && o.is_paid())
        .fold(0.0, |acc, o| acc + o.total_amount());
    money::format_amount(total)
}

/// Newest first. Stable, so equal timestamps keep fetch order; orders with
/// an unreadable timestamp go last.
pub fn sort_by_recency(orders: &mut [Order]) {
    orders.sort_by_cached_key(|o| Reverse(o.created_at()));
}

/// The [`RECENT_ORDERS_LIMIT`] newest orders.
pub fn recent_orders(orders: &[Order]) -> Vec<Order> {
    let mut newest = orders.to_vec();
    sort_by_recency(&mut newest);
    newest.truncate(RECENT_ORDERS_LIMIT);
    newest
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Days;
    use serde_json::{json, Value};

    use super::*;
    use crate::cms::{CmsError, FixtureSource, ObjectPage, ObjectQuery};

    fn order(id: &str, created_at: &str, metadata: Value) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "title": id,
            "created_at": created_at,
            "metadata": metadata,
        }))
        .unwrap()
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn active_orders_exclude_finished_and_missing() {
        let orders = vec![
            order("a", "", json!({"order_status": "Pending"})),
            order("b", "", json!({"order_status": "Preparing"})),
            order("c", "", json!({"order_status": "Ready"})),
            order("d", "", json!({"order_status": "Out for Delivery"})),
            order("e", "", json!({"order_status": "Delivered"})),
            order("f", "", json!({"order_status": "Cancelled"})),
            order("g", "", json!({})),
            order("h", "", json!({"order_status": "Refunded"})),
        ];
        assert_eq!(active_order_count(&orders), 4);
    }

    #[test]
    fn revenue_counts_only_paid_orders_from_today() {
        let orders = vec![
            order("a", "2024-01-03T09:00:00Z", json!({"payment_status": "Paid", "total": "10.25"})),
            order("b", "2024-01-03T23:59:59Z", json!({"payment_status": "Paid", "total": "4.75"})),
            order("c", "2024-01-03T12:00:00Z", json!({"payment_status": "Not Paid", "total": "99.00"})),
            order("d", "2024-01-02T12:00:00Z", json!({"payment_status": "Paid", "total": "50.00"})),
        ];
        assert_eq!(today_revenue(&orders, today()), "15.00");
    }

    #[test]
    fn revenue_uses_utc_date() {
        // 2024-01-03 01:00 at +02:00 is still 2024-01-02 in UTC.
        let orders = vec![order(
            "a",
            "2024-01-03T01:00:00+02:00",
            json!({"payment_status": "Paid", "total": "8.00"}),
        )];
        assert_eq!(today_revenue(&orders, today()), "0.00");
    }

    #[test]
    fn missing_or_bad_total_counts_as_zero() {
        let orders = vec![
            order("a", "2024-01-03T09:00:00Z", json!({"payment_status": "Paid"})),
            order("b", "2024-01-03T09:00:00Z", json!({"payment_status": "Paid", "total": "n/a"})),
            order("c", "2024-01-03T09:00:00Z", json!({"payment_status": "Paid", "total": "3.10"})),
        ];
        assert_eq!(today_revenue(&orders, today()), "3.10");
    }

    #[test]
    fn no_orders_means_zero_revenue() {
        assert_eq!(today_revenue(&[], today()), "0.00");
    }

    #[test]
    fn recency_sort_is_descending() {
        let mut orders = vec![
            order("t1", "2024-01-01T00:00:00Z", json!({})),
            order("t2", "2024-01-03T00:00:00Z", json!({})),
            order("t3", "2024-01-02T00:00:00Z", json!({})),
        ];
        sort_by_recency(&mut orders);
        assert_eq!(ids(&orders), ["t2", "t3", "t1"]);
    }

    #[test]
    fn recency_sort_is_stable_and_puts_undated_last() {
        let mut orders = vec![
            order("undated-1", "", json!({})),
            order("same-1", "2024-01-02T08:00:00Z", json!({})),
            order("newest", "2024-01-03T08:00:00Z", json!({})),
            order("undated-2", "not a date", json!({})),
            order("same-2", "2024-01-02T08:00:00Z", json!({})),
        ];
        sort_by_recency(&mut orders);
        assert_eq!(
            ids(&orders),
            ["newest", "same-1", "same-2", "undated-1", "undated-2"]
        );
    }

    #[test]
    fn recent_orders_takes_five_newest() {
        let orders: Vec<Order> = (1..=8)
            .map(|day| order(&format!("d{day}"), &format!("2024-01-0{day}T10:00:00Z"), json!({})))
            .collect();
        let recent = recent_orders(&orders);
        assert_eq!(ids(&recent), ["d8", "d7", "d6", "d5", "d4"]);
        assert_eq!(orders.len(), 8);
    }

    #[test]
    fn recent_orders_follow_recency_sort() {
        let orders = vec![
            order("undated", "", json!({})),
            order("tie-1", "2024-01-02T08:00:00Z", json!({})),
            order("old", "2024-01-01T08:00:00Z", json!({})),
            order("tie-2", "2024-01-02T08:00:00Z", json!({})),
            order("new", "2024-01-03T08:00:00Z", json!({})),
            order("older", "2023-12-31T08:00:00Z", json!({})),
        ];
        let mut sorted = orders.clone();
        sort_by_recency(&mut sorted);

        let recent = recent_orders(&orders);
        assert_eq!(ids(&recent), ["new", "tie-1", "tie-2", "old", "older"]);
        assert_eq!(ids(&recent), ids(&sorted[..RECENT_ORDERS_LIMIT]));
    }

    #[test]
    fn recent_orders_with_few_orders() {
        let orders = vec![order("only", "2024-01-01T00:00:00Z", json!({}))];
        assert_eq!(recent_orders(&orders).len(), 1);
        assert!(recent_orders(&[]).is_empty());
    }

    #[test]
    fn end_to_end_stats() {
        let today = today();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
        let orders = vec![
            order(
                "O1",
                &format!("{today}T09:00:00Z"),
                json!({"payment_status": "Paid", "total": "12.50", "order_status": "Delivered"}),
            ),
            order(
                "O2",
                &format!("{today}T11:00:00Z"),
                json!({"payment_status": "Not Paid", "total": "8.00", "order_status": "Preparing"}),
            ),
            order(
                "O3",
                &format!("{yesterday}T18:00:00Z"),
                json!({"payment_status": "Paid", "total": "20.00", "order_status": "Pending"}),
            ),
        ];

        let ctx = DashboardContext {
            restaurants: vec![Restaurant::default(), Restaurant::default()],
            orders,
            menu_items: vec![MenuItem::default()],
            today,
        };

        assert_eq!(
            ctx.stats(),
            DashboardStats {
                total_restaurants: 2,
                active_orders: 2,
                total_menu_items: 1,
                today_revenue: "12.50".to_string(),
            }
        );
        assert_eq!(ids(&ctx.recent_orders()), ["O2", "O1", "O3"]);
    }

    struct OrdersDown;

    #[async_trait]
    impl ContentSource for OrdersDown {
        async fn find_objects(&self, query: &ObjectQuery) -> Result<ObjectPage, CmsError> {
            if query.object_type == "orders" {
                return Err(CmsError::Unauthorized);
            }
            Err(CmsError::NotFound {
                object_type: query.object_type.clone(),
            })
        }
    }

    #[tokio::test]
    async fn load_degrades_each_type_independently() {
        let source = FixtureSource::new().with_objects(
            "restaurants",
            vec![json!({"id": "r1", "title": "Taco Town"}), json!({"id": "r2"})],
        );

        let ctx = DashboardContext::load(&source, today()).await.unwrap();
        let stats = ctx.stats();
        assert_eq!(stats.total_restaurants, 2);
        assert_eq!(stats.active_orders, 0);
        assert_eq!(stats.total_menu_items, 0);
        assert_eq!(stats.today_revenue, "0.00");
        assert!(ctx.recent_orders().is_empty());
    }

    #[tokio::test]
    async fn load_propagates_other_failures() {
        let err = DashboardContext::load(&OrdersDown, today()).await.unwrap_err();
        assert!(matches!(err, AppError::Cms(CmsError::Unauthorized)));
    }
}
