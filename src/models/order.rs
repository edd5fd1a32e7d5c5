//! Customer order model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::money;
use super::object::{lenient, lenient_decimal, nullable, parse_timestamp, Relation};
use super::restaurant::Restaurant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
    /// A status label this dashboard does not know about.
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Other(label) => label,
        }
    }

    /// Still in progress: not delivered, cancelled, or unrecognized.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Preparing | Self::Ready | Self::OutForDelivery
        )
    }

    /// Colour of the status pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Delivered => "badge-green",
            Self::Cancelled => "badge-red",
            Self::OutForDelivery => "badge-blue",
            Self::Ready => "badge-purple",
            Self::Preparing => "badge-yellow",
            Self::Pending | Self::Other(_) => "badge-gray",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Pending" => Self::Pending,
            "Preparing" => Self::Preparing,
            "Ready" => Self::Ready,
            "Out for Delivery" => Self::OutForDelivery,
            "Delivered" => Self::Delivered,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(label),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Paid,
    NotPaid,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "Paid",
            Self::NotPaid => "Not Paid",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Paid" => Self::Paid,
            "Not Paid" => Self::NotPaid,
            _ => Self::Other(label),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// One line of an order. Every field is optional in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub menu_item: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub customer_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub customer_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub delivery_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub restaurant: Option<Relation<Restaurant>>,
    #[serde(default, deserialize_with = "lenient")]
    pub order_items: Option<Vec<OrderItem>>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub subtotal: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub delivery_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub order_status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: OrderMetadata,
}

impl Order {
    pub const OBJECT_TYPE: &'static str = "orders";

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// UTC calendar date the order was placed on.
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at().map(|ts| ts.date_naive())
    }

    pub fn is_active(&self) -> bool {
        self.metadata
            .order_status
            .as_ref()
            .is_some_and(OrderStatus::is_active)
    }

    pub fn is_paid(&self) -> bool {
        self.metadata.payment_status == Some(PaymentStatus::Paid)
    }

    /// Parsed order total; missing or malformed totals count as zero.
    pub fn total_amount(&self) -> f64 {
        money::parse_amount(self.metadata.total.as_deref())
    }

    // -- Display accessors --

    pub fn display_number(&self) -> &str {
        non_empty(self.metadata.order_number.as_deref()).unwrap_or(&self.title)
    }

    pub fn display_created_at(&self) -> String {
        self.created_at()
            .map(|ts| ts.format("%b %-d, %Y, %I:%M %p").to_string())
            .unwrap_or_default()
    }

    pub fn customer_name(&self) -> &str {
        non_empty(self.metadata.customer_name.as_deref()).unwrap_or("N/A")
    }

    pub fn customer_phone(&self) -> &str {
        non_empty(self.metadata.customer_phone.as_deref()).unwrap_or("N/A")
    }

    pub fn restaurant_title(&self) -> &str {
        self.metadata
            .restaurant
            .as_ref()
            .and_then(Relation::expanded)
            .and_then(|r| non_empty(Some(r.title.as_str())))
            .unwrap_or("N/A")
    }

    pub fn item_count(&self) -> usize {
        self.metadata.order_items.as_ref().map_or(0, Vec::len)
    }

    pub fn display_total(&self) -> &str {
        non_empty(self.metadata.total.as_deref()).unwrap_or("0.00")
    }

    pub fn delivery_fee(&self) -> Option<&str> {
        non_empty(self.metadata.delivery_fee.as_deref())
    }

    pub fn status_label(&self) -> &str {
        self.metadata
            .order_status
            .as_ref()
            .map_or("Pending", OrderStatus::as_str)
    }

    pub fn status_badge(&self) -> &'static str {
        self.metadata
            .order_status
            .as_ref()
            .map_or("badge-gray", OrderStatus::badge_class)
    }

    pub fn payment_label(&self) -> &str {
        self.metadata
            .payment_status
            .as_ref()
            .map_or("Not Paid", PaymentStatus::as_str)
    }

    pub fn payment_badge(&self) -> &'static str {
        if self.is_paid() {
            "badge-green"
        } else {
            "badge-red"
        }
    }

    pub fn payment_method(&self) -> Option<&str> {
        non_empty(self.metadata.payment_method.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
