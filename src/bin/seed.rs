//! Seed script for development: writes a fixture set for offline mode.
//!
//! Usage: `cargo run --bin seed -- [PATH]` (default `fixtures/demo.json`),
//! then start the server with `CMS_FIXTURES_PATH` pointing at the file.
//!
//! Order timestamps are relative to now so "today's revenue" has data.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use serde_json::{json, Value};

fn main() -> anyhow::Result<()> {
    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/demo.json".to_string())
        .into();

    println!("=== Foodie Seed Script ===");

    let restaurants = seed_restaurants();
    let menu_items = seed_menu_items(&restaurants);
    let orders = seed_orders(&restaurants);

    println!("[done] {} restaurants", restaurants.len());
    println!("[done] {} menu items", menu_items.len());
    println!("[done] {} orders", orders.len());

    let fixtures = json!({
        "restaurants": restaurants,
        "menu-items": menu_items,
        "orders": orders,
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(&fixtures)?)?;

    println!("\n=== Seed complete! ===");
    println!("Run with: CMS_FIXTURES_PATH={} cargo run", path.display());

    Ok(())
}

fn seed_restaurants() -> Vec<Value> {
    vec![
        json!({
            "id": "rest-taco-town",
            "slug": "taco-town",
            "title": "Taco Town",
            "metadata": {
                "short_description": "Street tacos and fresh salsas",
                "city": "Austin",
                "country": "USA",
                "cuisine_types": ["Mexican", "Street Food"],
                "rating": 4.6,
                "delivery_time": "20-30 min",
                "status": "Active"
            }
        }),
        json!({
            "id": "rest-noodle-bar",
            "slug": "noodle-bar",
            "title": "Noodle Bar",
            "metadata": {
                "short_description": "Hand-pulled noodles",
                "city": "Portland",
                "cuisine_types": ["Chinese", "Noodles", "Soup", "Vegan"],
                "rating": 4.3,
                "delivery_time": "25-40 min",
                "status": "Active"
            }
        }),
        json!({
            "id": "rest-le-bistro",
            "slug": "le-bistro",
            "title": "Le Bistro",
            "metadata": {
                "city": "Lyon",
                "country": "France",
                "cuisine_types": ["French"],
                "status": "Inactive"
            }
        }),
    ]
}

fn seed_menu_items(restaurants: &[Value]) -> Vec<Value> {
    let items: [(&str, &str, &str, Option<&str>, bool, usize); 5] = [
        ("al-pastor", "Al Pastor Taco", "4.50", Some("3.99"), true, 0),
        ("carnitas", "Carnitas Taco", "4.25", None, true, 0),
        ("dan-dan", "Dan Dan Noodles", "12.00", None, true, 1),
        ("wonton-soup", "Wonton Soup", "9.50", None, false, 1),
        ("coq-au-vin", "Coq au Vin", "24.00", None, true, 2),
    ];

    items
        .iter()
        .map(|(slug, title, price, discounted, available, restaurant)| {
            json!({
                "id": format!("item-{slug}"),
                "slug": slug,
                "title": title,
                "metadata": {
                    "price": price,
                    "discounted_price": discounted,
                    "available": available,
                    "tags": ["house-favourite"],
                    "restaurant": restaurants[*restaurant].clone()
                }
            })
        })
        .collect()
}

fn seed_orders(restaurants: &[Value]) -> Vec<Value> {
    let now = Utc::now();
    let orders: [(&str, &str, i64, &str, &str, &str, usize); 6] = [
        // (number, customer, hours ago, total, status, payment, restaurant)
        ("1001", "Ada Lovelace", 1, "18.40", "Preparing", "Paid", 0),
        ("1002", "Alan Turing", 2, "26.00", "Out for Delivery", "Paid", 1),
        ("1003", "Grace Hopper", 3, "9.50", "Pending", "Not Paid", 1),
        ("1004", "Edsger Dijkstra", 30, "48.00", "Delivered", "Paid", 2),
        ("1005", "Barbara Liskov", 50, "12.75", "Cancelled", "Not Paid", 0),
        ("1006", "Ken Thompson", 75, "31.20", "Delivered", "Paid", 1),
    ];

    orders
        .iter()
        .map(|(number, customer, hours_ago, total, status, payment, restaurant)| {
            let created_at = now - Duration::hours(*hours_ago);
            json!({
                "id": format!("order-{number}"),
                "title": format!("Order {number}"),
                "created_at": created_at.to_rfc3339(),
                "metadata": {
                    "order_number": format!("#{number}"),
                    "customer_name": customer,
                    "customer_phone": "+1 555 0100",
                    "restaurant": restaurants[*restaurant].clone(),
                    "order_items": [
                        {"menu_item": "item-al-pastor", "quantity": "2", "price": "4.50"}
                    ],
                    "subtotal": total,
                    "delivery_fee": "2.99",
                    "total": total,
                    "order_status": status,
                    "payment_status": payment,
                    "payment_method": "Card"
                }
            })
        })
        .collect()
}
