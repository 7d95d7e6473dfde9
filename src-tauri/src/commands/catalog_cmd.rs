//! Tauri Commands for catalog queries
//!
//! Read-only lookups against the remote catalog. Failures are surfaced to
//! the frontend as strings; screens fall back to empty states.

use tauri::State;

use crate::catalog::Page;
use crate::domain::{Anime, CharacterRole, Episode, Recommendation, StaffMember};
use crate::AppState;

/// Text search, best-scored first
#[tauri::command]
pub async fn search_anime(
    state: State<'_, AppState>,
    query: String,
    page: u32,
) -> Result<Page<Anime>, String> {
    state.catalog.search(&query, page).await.map_err(|e| e.to_string())
}

/// Full record for one title
#[tauri::command]
pub async fn get_anime(state: State<'_, AppState>, mal_id: u32) -> Result<Anime, String> {
    state.catalog.full(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_anime_episodes(
    state: State<'_, AppState>,
    mal_id: u32,
) -> Result<Vec<Episode>, String> {
    state.catalog.episodes(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_anime_characters(
    state: State<'_, AppState>,
    mal_id: u32,
) -> Result<Vec<CharacterRole>, String> {
    state.catalog.characters(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_anime_staff(
    state: State<'_, AppState>,
    mal_id: u32,
) -> Result<Vec<StaffMember>, String> {
    state.catalog.staff(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_anime_recommendations(
    state: State<'_, AppState>,
    mal_id: u32,
) -> Result<Vec<Recommendation>, String> {
    state.catalog.recommendations(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_popular_anime(
    state: State<'_, AppState>,
    page: u32,
) -> Result<Page<Anime>, String> {
    state.catalog.popular(page).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_season_now(state: State<'_, AppState>) -> Result<Page<Anime>, String> {
    state.catalog.season_now().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_top_anime(state: State<'_, AppState>, page: u32) -> Result<Page<Anime>, String> {
    state.catalog.top(page).await.map_err(|e| e.to_string())
}
