//! Watch Entry
//!
//! A user's personal tracking record for a title: episodes watched plus a
//! status from a fixed set. At most one entry exists per title id.

use serde::{Deserialize, Serialize};

use super::anime::Anime;
use super::entity::Entity;

/// Tracking status for a watchlist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WatchStatus {
    Watching,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Dropped,
    #[default]
    #[serde(rename = "Plan to Watch")]
    PlanToWatch,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 5] = [
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::OnHold,
        WatchStatus::Dropped,
        WatchStatus::PlanToWatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::OnHold => "On Hold",
            WatchStatus::Dropped => "Dropped",
            WatchStatus::PlanToWatch => "Plan to Watch",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Watching" => WatchStatus::Watching,
            "Completed" => WatchStatus::Completed,
            "On Hold" => WatchStatus::OnHold,
            "Dropped" => WatchStatus::Dropped,
            _ => WatchStatus::PlanToWatch,
        }
    }
}

/// A tracked title with watch progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEntry {
    /// Catalog title id
    pub id: u32,
    pub title: String,
    /// Poster URL captured at add time
    pub image: Option<String>,
    /// Known episode count; None while airing or unknown
    pub total_episodes: Option<u32>,
    /// Episodes watched, never above total_episodes when that is known
    pub progress: u32,
    pub status: WatchStatus,
    /// Creation timestamp, epoch milliseconds
    pub added_at: i64,
}

impl WatchEntry {
    /// Build a fresh entry from a catalog record
    pub fn from_anime(anime: &Anime, added_at: i64) -> Self {
        Self {
            id: anime.mal_id,
            title: anime.title.clone(),
            image: anime.poster_url().map(str::to_owned),
            total_episodes: anime.episodes,
            progress: 0,
            status: WatchStatus::PlanToWatch,
            added_at,
        }
    }

    /// Clamp a requested progress value against the known episode count
    pub fn clamp_progress(&self, progress: u32) -> u32 {
        match self.total_episodes {
            Some(total) => progress.min(total),
            None => progress,
        }
    }
}

impl Entity for WatchEntry {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_anime_defaults() {
        let anime = Anime {
            mal_id: 5,
            title: "X".to_string(),
            episodes: Some(12),
            ..Default::default()
        };
        let entry = WatchEntry::from_anime(&anime, 1_000);
        assert_eq!(entry.id(), 5);
        assert_eq!(entry.progress, 0);
        assert_eq!(entry.status, WatchStatus::PlanToWatch);
        assert_eq!(entry.total_episodes, Some(12));
        assert_eq!(entry.added_at, 1_000);
    }

    #[test]
    fn test_clamp_progress() {
        let anime = Anime {
            mal_id: 1,
            title: "Y".to_string(),
            episodes: Some(24),
            ..Default::default()
        };
        let entry = WatchEntry::from_anime(&anime, 0);
        assert_eq!(entry.clamp_progress(30), 24);
        assert_eq!(entry.clamp_progress(7), 7);

        let open_ended = WatchEntry::from_anime(&Anime { mal_id: 2, ..Default::default() }, 0);
        assert_eq!(open_ended.clamp_progress(500), 500);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(WatchStatus::OnHold.as_str(), "On Hold");
        assert_eq!(WatchStatus::from_str("Plan to Watch"), WatchStatus::PlanToWatch);
        assert_eq!(WatchStatus::from_str("garbage"), WatchStatus::PlanToWatch);

        let json = serde_json::to_string(&WatchStatus::OnHold).unwrap();
        assert_eq!(json, r#""On Hold""#);
        let back: WatchStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WatchStatus::OnHold);
    }
}
