//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Catalog title (matches backend)
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
    pub fn poster_url(&self) -> Option<String> {
        let images = self.images.as_ref()?;
        images
            .jpg
            .as_ref()
            .and_then(|set| set.image_url.clone())
            .or_else(|| images.webp.as_ref().and_then(|set| set.image_url.clone()))
    }

    pub fn large_poster_url(&self) -> Option<String> {
        let images = self.images.as_ref()?;
        images
            .jpg
            .as_ref()
            .and_then(|set| set.large_image_url.clone())
            .or_else(|| images.webp.as_ref().and_then(|set| set.large_image_url.clone()))
            .or_else(|| self.poster_url())
    }

    /// English or Japanese title when it differs from the main one
    pub fn secondary_title(&self) -> Option<String> {
        match &self.title_english {
            Some(english) if *english != self.title => Some(english.clone()),
            _ => match &self.title_japanese {
                Some(japanese) if *japanese != self.title => Some(japanese.clone()),
                _ => None,
            },
        }
    }
}

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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiredDates {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
}

/// Episode of a title (matches backend)
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRole {
    #[serde(default)]
    pub character: CharacterInfo,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterInfo {
    #[serde(default)]
    pub mal_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Option<AnimeImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(default)]
    pub person: PersonInfo,
    #[serde(default)]
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    #[serde(default)]
    pub mal_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Option<AnimeImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub entry: Anime,
    #[serde(default)]
    pub votes: u32,
}

/// Paged catalog listing (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub current_page: u32,
}

/// Tracked title (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub id: u32,
    pub title: String,
    pub image: Option<String>,
    pub total_episodes: Option<u32>,
    pub progress: u32,
    pub status: String,
    pub added_at: i64,
}

/// The closed status set, in display order
pub const WATCH_STATUSES: [&str; 5] =
    ["Watching", "Completed", "On Hold", "Dropped", "Plan to Watch"];
