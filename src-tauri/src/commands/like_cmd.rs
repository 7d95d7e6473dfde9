//! Tauri Commands for likes

use tauri::State;

use crate::AppState;

/// Flip the like for a title; returns whether it is liked afterwards
#[tauri::command]
pub async fn toggle_like(state: State<'_, AppState>, mal_id: u32) -> Result<bool, String> {
    state.likes.toggle(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn is_liked(state: State<'_, AppState>, mal_id: u32) -> Result<bool, String> {
    state.likes.is_liked(mal_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_likes(state: State<'_, AppState>) -> Result<Vec<u32>, String> {
    state.likes.all().await.map_err(|e| e.to_string())
}
