//! Menu items and the categories they are filed under.

use serde::{Deserialize, Serialize};

use super::object::{lenient, lenient_decimal, lenient_strings, nullable, Media, Relation};
use super::restaurant::Restaurant;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCategoryMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<Media>,
    #[serde(default, deserialize_with = "lenient")]
    pub restaurant: Option<Relation<Restaurant>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: MenuCategoryMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo: Option<Media>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discounted_price: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ingredients: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub available: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<Relation<MenuCategory>>,
    #[serde(default, deserialize_with = "lenient")]
    pub restaurant: Option<Relation<Restaurant>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: MenuItemMetadata,
}

impl MenuItem {
    pub const OBJECT_TYPE: &'static str = "menu-items";

    /// Only an explicit `false` marks an item unavailable.
    pub fn is_available(&self) -> bool {
        self.metadata.available != Some(false)
    }

    pub fn display_price(&self) -> &str {
        self.metadata
            .price
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("0.00")
    }

    pub fn discounted_price(&self) -> Option<&str> {
        self.metadata
            .discounted_price
            .as_deref()
            .filter(|p| !p.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn restaurant_title(&self) -> Option<&str> {
        self.metadata
            .restaurant
            .as_ref()
            .and_then(Relation::expanded)
            .map(|r| r.title.as_str())
            .filter(|t| !t.is_empty())
    }

    pub fn category_title(&self) -> Option<&str> {
        self.metadata
            .category
            .as_ref()
            .and_then(Relation::expanded)
            .map(|c| c.title.as_str())
            .filter(|t| !t.is_empty())
    }

    pub fn tag_preview(&self) -> &[String] {
        let shown = self.metadata.tags.len().min(3);
        &self.metadata.tags[..shown]
    }

    pub fn photo_url(&self) -> Option<String> {
        self.metadata
            .photo
            .as_ref()
            .and_then(|m| m.thumbnail(600, 400))
    }
}
