//! Tauri Commands for comments

use tauri::State;

use crate::domain::DomainError;
use crate::AppState;

/// Append a comment to a title's thread; returns the updated thread
#[tauri::command]
pub async fn add_comment(
    state: State<'_, AppState>,
    mal_id: u32,
    text: String,
) -> Result<Vec<String>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("empty comment".to_string()).to_string());
    }
    state.comments.append(mal_id, trimmed.to_string()).await.map_err(|e| e.to_string())
}

/// All comments for a title, oldest first
#[tauri::command]
pub async fn get_comments(state: State<'_, AppState>, mal_id: u32) -> Result<Vec<String>, String> {
    state.comments.for_title(mal_id).await.map_err(|e| e.to_string())
}
