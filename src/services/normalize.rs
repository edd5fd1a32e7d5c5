//! Maps raw CMS records onto the typed entity models.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cms::CmsError;

/// Cast every raw record to `T`.
///
/// Entity fields are all optional, so this only fails when a record is not
/// shaped like an object at all. Missing fields get their defaults when read.
pub fn normalize<T: DeserializeOwned>(objects: Vec<Value>) -> Result<Vec<T>, CmsError> {
    objects
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(CmsError::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{MenuItem, Order, Restaurant};

    #[test]
    fn id_only_projection_normalizes() {
        let restaurants: Vec<Restaurant> =
            normalize(vec![json!({"id": "r1"}), json!({"id": "r2"})]).unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[1].id, "r2");
        assert_eq!(restaurants[1].title, "");
    }

    #[test]
    fn malformed_nested_fields_are_tolerated() {
        let items: Vec<MenuItem> = normalize(vec![json!({
            "id": "m1",
            "metadata": {
                "photo": "not-an-object",
                "category": 12,
                "tags": "spicy",
                "available": "nope"
            }
        })])
        .unwrap();

        let item = &items[0];
        assert!(item.metadata.photo.is_none());
        assert!(item.category_title().is_none());
        assert!(item.metadata.tags.is_empty());
        assert!(item.is_available());
    }

    #[test]
    fn non_object_record_is_malformed() {
        let result: Result<Vec<Order>, _> = normalize(vec![json!({"id": "o1"}), json!("o2")]);
        assert!(matches!(result, Err(CmsError::Decode(_))));
    }
}
