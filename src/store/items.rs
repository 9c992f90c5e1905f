/**
 * Item Record
 *
 * Catalog records: title, author, and ISBN as free-text strings. The store
 * enforces no schema beyond field presence; in particular there is no
 * uniqueness constraint on ISBN, so duplicates are permitted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog item record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    /// Unique item ID (UUID)
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// ISBN, free text, duplicates allowed
    pub isbn: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// The mutable field set of an item
///
/// Shared between the HTML form submissions and the JSON API bodies. Every
/// field defaults to the empty string, so a missing field never rejects the
/// request; there is no validation of field shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFields {
    /// Book title
    #[serde(default)]
    pub title: String,
    /// Book author
    #[serde(default)]
    pub author: String,
    /// ISBN
    #[serde(default)]
    pub isbn: String,
}

impl Item {
    /// Build a fresh record from a field set, stamping id and creation time.
    pub fn new(fields: ItemFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            author: fields.author,
            isbn: fields.isbn,
            created_at: Utc::now(),
        }
    }

    /// Whether the item matches a catalog search string.
    ///
    /// The match is a case-insensitive, unanchored substring test over title
    /// and author. The empty string matches every item.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, author: &str) -> Item {
        Item::new(ItemFields {
            title: title.to_string(),
            author: author.to_string(),
            isbn: String::new(),
        })
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let it = item("The Go Programming Language", "Donovan");
        assert!(it.matches("go"));
        assert!(it.matches("GO"));
        assert!(it.matches("the go"));
    }

    #[test]
    fn test_match_covers_author() {
        let it = item("Some Book", "Ursula K. Le Guin");
        assert!(it.matches("le guin"));
    }

    #[test]
    fn test_empty_search_matches_all() {
        let it = item("Anything", "Anyone");
        assert!(it.matches(""));
    }

    #[test]
    fn test_no_match() {
        let it = item("The Go Programming Language", "Donovan");
        assert!(!it.matches("xyz"));
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let fields: ItemFields = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(fields.title, "Dune");
        assert_eq!(fields.author, "");
        assert_eq!(fields.isbn, "");
    }
}
