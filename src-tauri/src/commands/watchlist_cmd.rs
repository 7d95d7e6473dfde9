//! Tauri Commands for the watchlist
//!
//! Mutations go through the repository; the frontend re-reads the list
//! after each one instead of trusting an in-memory echo.

use tauri::State;

use crate::domain::{Anime, WatchEntry, WatchStatus};
use crate::repository::Repository;
use crate::AppState;

/// List all tracked titles, newest first
#[tauri::command]
pub async fn get_watchlist(state: State<'_, AppState>) -> Result<Vec<WatchEntry>, String> {
    state.watchlist.list().await.map_err(|e| e.to_string())
}

/// Start tracking a title; a no-op if it is already tracked
#[tauri::command]
pub async fn add_to_watchlist(
    state: State<'_, AppState>,
    anime: Anime,
) -> Result<WatchEntry, String> {
    let entry = WatchEntry::from_anime(&anime, chrono::Utc::now().timestamp_millis());
    state.watchlist.create(&entry).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_from_watchlist(state: State<'_, AppState>, mal_id: u32) -> Result<(), String> {
    state.watchlist.delete(mal_id).await.map_err(|e| e.to_string())
}

/// Set episodes watched for a tracked title
#[tauri::command]
pub async fn update_progress(
    state: State<'_, AppState>,
    mal_id: u32,
    progress: u32,
) -> Result<Option<WatchEntry>, String> {
    state.watchlist.update_progress(mal_id, progress).await.map_err(|e| e.to_string())
}

/// Move a tracked title to a different status
#[tauri::command]
pub async fn update_status(
    state: State<'_, AppState>,
    mal_id: u32,
    status: WatchStatus,
) -> Result<Option<WatchEntry>, String> {
    state.watchlist.update_status(mal_id, status).await.map_err(|e| e.to_string())
}
