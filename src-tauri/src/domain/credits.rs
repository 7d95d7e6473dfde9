//! Cast & Staff Records
//!
//! Character and staff listings for a title. Same decode policy as the
//! other catalog records: optional everywhere, default on malformed.

use serde::{Deserialize, Serialize};

use super::anime::AnimeImages;

/// A character appearing in a title, with its billing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRole {
    #[serde(default)]
    pub character: CharacterInfo,
    /// "Main" or "Supporting"
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

/// A staff member credited on a title
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
