//! Preference Commands
//!
//! Frontend bindings for ratings, comments, and likes.

use serde::Serialize;

use super::{invoke_typed, to_js};

#[derive(Serialize)]
struct MalIdArgs {
    #[serde(rename = "malId")]
    mal_id: u32,
}

#[derive(Serialize)]
struct RatingArgs {
    #[serde(rename = "malId")]
    mal_id: u32,
    rating: u8,
}

#[derive(Serialize)]
struct CommentArgs<'a> {
    #[serde(rename = "malId")]
    mal_id: u32,
    text: &'a str,
}

// ========================
// Ratings
// ========================

pub async fn add_rating(mal_id: u32, rating: u8) -> Result<(), String> {
    let args = to_js(&RatingArgs { mal_id, rating })?;
    invoke_typed("add_rating", args).await
}

pub async fn get_rating(mal_id: u32) -> Result<Option<u8>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_rating", args).await
}

pub async fn get_ratings() -> Result<Vec<(u32, u8)>, String> {
    invoke_typed("get_ratings", wasm_bindgen::JsValue::NULL).await
}

// ========================
// Comments
// ========================

pub async fn add_comment(mal_id: u32, text: &str) -> Result<Vec<String>, String> {
    let args = to_js(&CommentArgs { mal_id, text })?;
    invoke_typed("add_comment", args).await
}

pub async fn get_comments(mal_id: u32) -> Result<Vec<String>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_comments", args).await
}

// ========================
// Likes
// ========================

pub async fn toggle_like(mal_id: u32) -> Result<bool, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("toggle_like", args).await
}

pub async fn is_liked(mal_id: u32) -> Result<bool, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("is_liked", args).await
}

pub async fn get_likes() -> Result<Vec<u32>, String> {
    invoke_typed("get_likes", wasm_bindgen::JsValue::NULL).await
}
