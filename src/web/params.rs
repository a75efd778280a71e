//! Path and query parameter types for web handlers

use serde::{Deserialize, Deserializer, de::Error};

/// `/items/{item_id}` on the read route, where any string is an id
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub item_id: String,
}

/// `/items/{item_id}` on the update route, where the id must be an integer
#[derive(Debug, Deserialize)]
pub struct ItemIdPath {
    pub item_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserPath {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserItemPath {
    pub user_id: i64,
    pub item_id: String,
}

/// Raw model segment, checked against `ModelName` by the handler
#[derive(Debug, Deserialize)]
pub struct ModelPath {
    pub model_name: String,
}

/// Everything after `/files/`, slashes included
#[derive(Debug, Deserialize)]
pub struct FilePath {
    pub file_path: String,
}

/// Query string shared by the item read routes
///
/// # Example
/// ```
/// use items_api::web::params::ItemQuery;
/// use serde_json::json;
///
/// // From URL query: ?q=search&short=yes
/// let query: ItemQuery = serde_json::from_value(json!({"q": "search", "short": "yes"})).unwrap();
/// assert_eq!(query.q.as_deref(), Some("search"));
/// assert!(query.short);
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub q: Option<String>,

    /// Drop the long description from the response
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub short: bool,
}

/// Interpret the textual spellings of a boolean accepted in query strings.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_flag(&raw).ok_or_else(|| {
        Error::custom(format!(
            "Input should be a valid boolean, unable to interpret input '{raw}'"
        ))
    })
}
