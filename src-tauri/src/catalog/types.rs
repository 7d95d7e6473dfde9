//! Catalog Wire Types
//!
//! Response envelopes of the catalog service: every body wraps its payload
//! in a `data` field, and list endpoints add a `pagination` field. List
//! envelopes decode leniently so a partial body degrades to an empty page
//! rather than an error.

use serde::{Deserialize, Serialize};

/// Single-record response body
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// List response body with paging info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub current_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Anime;

    #[test]
    fn test_page_decode() {
        let page: Page<Anime> = serde_json::from_str(
            r#"{
                "data": [{"mal_id": 21, "title": "One Piece"}],
                "pagination": {"has_next_page": true, "current_page": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].mal_id, 21);
        assert!(page.pagination.has_next_page);
        assert_eq!(page.pagination.current_page, 2);
    }

    #[test]
    fn test_page_decode_without_pagination() {
        // Fixed-path list endpoints omit the pagination field entirely.
        let page: Page<Anime> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn test_envelope_decode() {
        let body: Envelope<Anime> =
            serde_json::from_str(r#"{"data": {"mal_id": 1, "title": "Cowboy Bebop"}}"#).unwrap();
        assert_eq!(body.data.title, "Cowboy Bebop");
    }
}
