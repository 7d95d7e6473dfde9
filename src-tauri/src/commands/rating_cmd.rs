//! Tauri Commands for ratings

use tauri::State;

use crate::domain::DomainError;
use crate::AppState;

/// Rate a title 1-5; a new rating overwrites the previous one
#[tauri::command]
pub async fn add_rating(state: State<'_, AppState>, mal_id: u32, rating: u8) -> Result<(), String> {
    if !(1..=5).contains(&rating) {
        return Err(DomainError::InvalidInput(format!("rating {} out of range", rating)).to_string());
    }
    state.ratings.set(mal_id, rating).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_rating(state: State<'_, AppState>, mal_id: u32) -> Result<Option<u8>, String> {
    state.ratings.get(mal_id).await.map_err(|e| e.to_string())
}

/// All ratings as (title id, rating) pairs
#[tauri::command]
pub async fn get_ratings(state: State<'_, AppState>) -> Result<Vec<(u32, u8)>, String> {
    let ratings = state.ratings.all().await.map_err(|e| e.to_string())?;
    Ok(ratings.into_iter().collect())
}
