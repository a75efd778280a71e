//! Item record and the views returned by the item routes

use serde::{Deserialize, Deserializer, Serialize, de::Error};

pub const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

/// Item body accepted by `PUT /items/{item_id}` and `POST /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub tax: Option<f64>,
}

/// Amounts arrive either as JSON numbers or as numeric strings like `"35.4"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    fn into_f64<E: Error>(self) -> Result<f64, E> {
        match self {
            Amount::Number(value) => Ok(value),
            Amount::Text(text) => text.trim().parse().map_err(|_| {
                E::custom("Input should be a valid number, unable to parse string as a number")
            }),
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Amount::deserialize(deserializer)?.into_f64()
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Amount>::deserialize(deserializer)?
        .map(Amount::into_f64)
        .transpose()
}

impl Item {
    /// `price + tax`, or `None` when there is no tax to add.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax
            .filter(|tax| *tax != 0.0)
            .map(|tax| self.price + tax)
    }
}

/// Item echoed back by `POST /items`
#[derive(Debug, Serialize)]
pub struct CreatedItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

impl From<Item> for CreatedItem {
    fn from(item: Item) -> Self {
        let price_with_tax = item.price_with_tax();
        Self {
            item,
            price_with_tax,
        }
    }
}

/// Item stored under an id by `PUT /items/{item_id}`
#[derive(Debug, Serialize)]
pub struct UpdatedItem {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
}

/// Response of the item read routes.
///
/// Keys are emitted in declaration order; absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl ItemView {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            owner_id: None,
            q: None,
            description: None,
        }
    }

    pub fn owned_by(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Attach the search term; an empty one counts as missing.
    pub fn with_query(mut self, q: Option<String>) -> Self {
        self.q = q.filter(|q| !q.is_empty());
        self
    }

    /// Attach the long description unless a short view was requested.
    pub fn with_description(mut self, short: bool) -> Self {
        self.description = (!short).then_some(LONG_DESCRIPTION);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample_item(tax: Option<f64>) -> Item {
        Item {
            name: "Foo".to_string(),
            description: None,
            price: 50.5,
            tax,
        }
    }

    #[test]
    fn test_item_optional_fields_default() {
        let item: Item = serde_json::from_value(json!({"name": "Foo", "price": 1.5})).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.tax, None);
    }

    #[test]
    fn test_item_requires_name_and_price() {
        let missing_price: Result<Item, _> = serde_json::from_value(json!({"name": "Foo"}));
        assert!(missing_price.is_err());

        let missing_name: Result<Item, _> = serde_json::from_value(json!({"price": 2.0}));
        assert!(missing_name.is_err());

        let bad_price: Result<Item, _> =
            serde_json::from_value(json!({"name": "Foo", "price": "cheap"}));
        assert!(bad_price.is_err());
    }

    #[test]
    fn test_item_accepts_numeric_strings() {
        let item: Item =
            serde_json::from_value(json!({"name": "Foo", "price": "35.4", "tax": " 2 "})).unwrap();
        assert_eq!(item.price, 35.4);
        assert_eq!(item.tax, Some(2.0));

        let item: Item =
            serde_json::from_value(json!({"name": "Foo", "price": 3, "tax": null})).unwrap();
        assert_eq!(item.price, 3.0);
        assert_eq!(item.tax, None);
    }

    #[test]
    fn test_item_serializes_nulls() {
        let value = serde_json::to_value(sample_item(None)).unwrap();
        assert_eq!(
            value,
            json!({"name": "Foo", "description": null, "price": 50.5, "tax": null})
        );
    }

    #[test]
    fn test_price_with_tax() {
        assert_eq!(sample_item(Some(10.0)).price_with_tax(), Some(60.5));
        assert_eq!(sample_item(Some(0.0)).price_with_tax(), None);
        assert_eq!(sample_item(None).price_with_tax(), None);
    }

    #[test]
    fn test_created_item_adds_price_with_tax() {
        let value = serde_json::to_value(CreatedItem::from(sample_item(Some(10.0)))).unwrap();
        assert_eq!(value["price_with_tax"], json!(60.5));

        let value = serde_json::to_value(CreatedItem::from(sample_item(None))).unwrap();
        assert!(value.get("price_with_tax").is_none());
    }

    #[test]
    fn test_updated_item_key_order() {
        let updated = UpdatedItem {
            item_id: 7,
            item: sample_item(Some(1.0)),
        };
        let Value::Object(map) = serde_json::to_value(updated).unwrap() else {
            panic!("Expected object");
        };

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["item_id", "name", "description", "price", "tax"]);
    }

    #[test]
    fn test_item_view_full() {
        let view = ItemView::new("foo")
            .owned_by(3)
            .with_query(Some("x".to_string()))
            .with_description(false);

        let Value::Object(map) = serde_json::to_value(view).unwrap() else {
            panic!("Expected object");
        };
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["item_id", "owner_id", "q", "description"]);
        assert_eq!(map["description"], json!(LONG_DESCRIPTION));
    }

    #[test]
    fn test_item_view_short_and_empty_query() {
        let view = ItemView::new("foo")
            .with_query(Some(String::new()))
            .with_description(true);

        assert_eq!(serde_json::to_value(view).unwrap(), json!({"item_id": "foo"}));
    }
}
