//! Anime Record
//!
//! Typed view of a catalog title. The upstream service omits or nulls
//! fields freely, so everything except the id is optional or defaulted
//! and malformed values decode to the default instead of failing.

use serde::{Deserialize, Serialize};

/// A catalog title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    #[serde(default)]
    pub mal_id: u32,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<AnimeImages>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    /// Known episode count; None while airing or unknown
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub aired: Option<AiredDates>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Anime {
    /// Best available poster URL, preferring the jpg set
    pub fn poster_url(&self) -> Option<&str> {
        let images = self.images.as_ref()?;
        images
            .jpg
            .as_ref()
            .and_then(|set| set.image_url.as_deref())
            .or_else(|| images.webp.as_ref().and_then(|set| set.image_url.as_deref()))
    }

    /// Best available large poster URL, falling back to the small one
    pub fn large_poster_url(&self) -> Option<&str> {
        let images = self.images.as_ref()?;
        images
            .jpg
            .as_ref()
            .and_then(|set| set.large_image_url.as_deref())
            .or_else(|| images.webp.as_ref().and_then(|set| set.large_image_url.as_deref()))
            .or_else(|| self.poster_url())
    }
}

/// Per-format image sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeImages {
    #[serde(default)]
    pub jpg: Option<ImageSet>,
    #[serde(default)]
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub mal_id: u32,
    #[serde(default)]
    pub name: String,
}

/// Airing range; only the preformatted string is rendered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiredDates {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
}

/// A "viewers also liked" entry for a title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub entry: Anime,
    #[serde(default)]
    pub votes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_prefers_jpg() {
        let anime = Anime {
            images: Some(AnimeImages {
                jpg: Some(ImageSet {
                    image_url: Some("jpg.jpg".into()),
                    large_image_url: None,
                }),
                webp: Some(ImageSet {
                    image_url: Some("webp.webp".into()),
                    large_image_url: None,
                }),
            }),
            ..Default::default()
        };
        assert_eq!(anime.poster_url(), Some("jpg.jpg"));
    }

    #[test]
    fn test_large_poster_falls_back_to_small() {
        let anime = Anime {
            images: Some(AnimeImages {
                jpg: Some(ImageSet {
                    image_url: Some("small.jpg".into()),
                    large_image_url: None,
                }),
                webp: None,
            }),
            ..Default::default()
        };
        assert_eq!(anime.large_poster_url(), Some("small.jpg"));
    }

    #[test]
    fn test_decode_with_nulled_fields() {
        let anime: Anime = serde_json::from_str(
            r#"{"mal_id": 5, "title": "X", "episodes": null, "score": null, "genres": [{"mal_id": 1, "name": "Action"}]}"#,
        )
        .unwrap();
        assert_eq!(anime.mal_id, 5);
        assert_eq!(anime.episodes, None);
        assert_eq!(anime.genres.len(), 1);
        assert!(anime.poster_url().is_none());
    }
}
