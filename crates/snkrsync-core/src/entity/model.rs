//! Shoe domain model.

use serde::{Deserialize, Serialize};

/// A trackable sneaker listing as returned by the tracking API.
///
/// The re-scrape core keys on `article` (the wire protocol correlates
/// responses by article, not by database id) and `parsed_from` (the source
/// shop a re-scrape should be run against). The remaining fields are display
/// data that round-trips through scrape payloads untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    /// Database identifier, unique per listing
    pub id: i64,
    /// Manufacturer article code; correlation key on the scrape channel
    pub article: String,
    /// Human-readable model/colorway name
    pub name: String,
    /// Last known price
    pub price: f64,
    /// Source shop this listing was originally scraped from
    pub parsed_from: String,
    /// Product page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Product image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Raw size list as stored by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

impl Shoe {
    /// Creates a shoe with only the fields the re-scrape core needs.
    ///
    /// Display fields are left empty; useful for tests and for callers that
    /// only carry the correlation data.
    pub fn new(
        id: i64,
        article: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        parsed_from: impl Into<String>,
    ) -> Self {
        Self {
            id,
            article: article.into(),
            name: name.into(),
            price,
            parsed_from: parsed_from.into(),
            url: None,
            image: None,
            sizes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_missing_display_fields() {
        let json = r#"{
            "id": 42,
            "article": "DD1391-100",
            "name": "Dunk Low Panda",
            "price": 119.99,
            "parsed_from": "Nike"
        }"#;

        let shoe: Shoe = serde_json::from_str(json).unwrap();
        assert_eq!(shoe.article, "DD1391-100");
        assert_eq!(shoe.url, None);
    }

    #[test]
    fn test_serialize_skips_empty_display_fields() {
        let shoe = Shoe::new(1, "A123", "Test", 100.0, "Adidas");
        let json = serde_json::to_string(&shoe).unwrap();
        assert!(!json.contains("\"url\""));
        assert!(!json.contains("\"sizes\""));
    }
}
