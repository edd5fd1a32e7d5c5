//! Restaurant model.

use serde::{Deserialize, Serialize};

use super::object::{lenient, lenient_f64, lenient_strings, nullable, Media};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RestaurantStatus {
    Active,
    Inactive,
    Other(String),
}

impl From<String> for RestaurantStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Active" => Self::Active,
            "Inactive" => Self::Inactive,
            _ => Self::Other(label),
        }
    }
}

impl From<RestaurantStatus> for String {
    fn from(status: RestaurantStatus) -> Self {
        match status {
            RestaurantStatus::Active => "Active".to_string(),
            RestaurantStatus::Inactive => "Inactive".to_string(),
            RestaurantStatus::Other(label) => label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub cover_image: Option<Media>,
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<Media>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub opening_hours: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub delivery_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub cuisine_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<RestaurantStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: RestaurantMetadata,
}

impl Restaurant {
    pub const OBJECT_TYPE: &'static str = "restaurants";

    pub fn is_active(&self) -> bool {
        self.metadata.status == Some(RestaurantStatus::Active)
    }

    /// Anything other than an explicit `Active` shows as inactive.
    pub fn status_label(&self) -> &'static str {
        if self.is_active() {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn short_description(&self) -> &str {
        self.metadata
            .short_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("No description")
    }

    /// "City, Country", or just the city. `None` without a city.
    pub fn location(&self) -> Option<String> {
        let city = self.metadata.city.as_deref().filter(|c| !c.is_empty())?;
        Some(match self.metadata.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{city}, {country}"),
            None => city.to_string(),
        })
    }

    pub fn cuisine_preview(&self) -> &[String] {
        let shown = self.metadata.cuisine_types.len().min(3);
        &self.metadata.cuisine_types[..shown]
    }

    /// Rating, if present and non-negative.
    pub fn rating(&self) -> Option<f64> {
        self.metadata.rating.filter(|r| *r >= 0.0)
    }

    pub fn display_rating(&self) -> Option<String> {
        self.rating().map(|r| format!("{r:.1}"))
    }

    pub fn delivery_time(&self) -> Option<&str> {
        self.metadata
            .delivery_time
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    pub fn cover_url(&self) -> Option<String> {
        self.metadata
            .cover_image
            .as_ref()
            .and_then(|m| m.thumbnail(600, 400))
    }

    pub fn logo_url(&self) -> Option<String> {
        self.metadata.logo.as_ref().and_then(|m| m.thumbnail(80, 80))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_restaurant() {
        let restaurant: Restaurant = serde_json::from_value(json!({
            "id": "r1",
            "slug": "taco-town",
            "title": "Taco Town",
            "metadata": {
                "cover_image": {"url": "https://cdn/c.jpg", "imgix_url": "https://imgix/c.jpg"},
                "short_description": "Tacos all day",
                "city": "Austin",
                "country": "USA",
                "cuisine_types": ["Mexican", "Street Food", "Vegan", "Tex-Mex"],
                "rating": 4.26,
                "delivery_time": "25-35 min",
                "status": "Active"
            }
        }))
        .unwrap();

        assert!(restaurant.is_active());
        assert_eq!(restaurant.status_label(), "Active");
        assert_eq!(restaurant.short_description(), "Tacos all day");
        assert_eq!(restaurant.location().as_deref(), Some("Austin, USA"));
        assert_eq!(restaurant.cuisine_preview(), ["Mexican", "Street Food", "Vegan"]);
        assert_eq!(restaurant.display_rating().as_deref(), Some("4.3"));
        assert_eq!(restaurant.delivery_time(), Some("25-35 min"));
        assert_eq!(
            restaurant.cover_url().as_deref(),
            Some("https://imgix/c.jpg?w=600&h=400&fit=crop&auto=format,compress")
        );
        assert!(restaurant.logo_url().is_none());
    }

    #[test]
    fn sparse_restaurant_defaults() {
        let restaurant: Restaurant =
            serde_json::from_value(json!({"id": "r2", "title": "Noodle Bar"})).unwrap();

        assert!(!restaurant.is_active());
        assert_eq!(restaurant.status_label(), "Inactive");
        assert_eq!(restaurant.short_description(), "No description");
        assert!(restaurant.location().is_none());
        assert!(restaurant.cuisine_preview().is_empty());
        assert!(restaurant.rating().is_none());
    }

    #[test]
    fn rating_as_string_and_negative_rating() {
        let as_string: Restaurant =
            serde_json::from_value(json!({"metadata": {"rating": "4.8"}})).unwrap();
        assert_eq!(as_string.rating(), Some(4.8));

        let negative: Restaurant =
            serde_json::from_value(json!({"metadata": {"rating": -1}})).unwrap();
        assert!(negative.rating().is_none());
    }

    #[test]
    fn unknown_status_reads_inactive() {
        let restaurant: Restaurant =
            serde_json::from_value(json!({"metadata": {"status": "Paused", "city": "Lyon"}}))
                .unwrap();
        assert_eq!(
            restaurant.metadata.status,
            Some(RestaurantStatus::Other("Paused".to_string()))
        );
        assert_eq!(restaurant.status_label(), "Inactive");
        assert_eq!(restaurant.location().as_deref(), Some("Lyon"));
    }
}
