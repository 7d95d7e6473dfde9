//! Episode Record

use serde::{Deserialize, Serialize};

/// A single episode of a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub mal_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub aired: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub filler: bool,
    #[serde(default)]
    pub recap: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_episode() {
        let ep: Episode = serde_json::from_str(r#"{"mal_id": 1, "title": "Asteroid Blues"}"#).unwrap();
        assert_eq!(ep.title, "Asteroid Blues");
        assert!(!ep.filler);
        assert!(ep.aired.is_none());
    }
}
