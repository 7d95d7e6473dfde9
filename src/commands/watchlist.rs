//! Watchlist Commands
//!
//! Frontend bindings for watchlist mutations. Callers re-read the list
//! (via the reload trigger) after every mutation.

use serde::Serialize;

use crate::models::{Anime, WatchEntry};

use super::{invoke_typed, to_js};

#[derive(Serialize)]
struct AddArgs<'a> {
    anime: &'a Anime,
}

#[derive(Serialize)]
struct MalIdArgs {
    #[serde(rename = "malId")]
    mal_id: u32,
}

#[derive(Serialize)]
struct ProgressArgs {
    #[serde(rename = "malId")]
    mal_id: u32,
    progress: u32,
}

#[derive(Serialize)]
struct StatusArgs<'a> {
    #[serde(rename = "malId")]
    mal_id: u32,
    status: &'a str,
}

pub async fn get_watchlist() -> Result<Vec<WatchEntry>, String> {
    invoke_typed("get_watchlist", wasm_bindgen::JsValue::NULL).await
}

pub async fn add_to_watchlist(anime: &Anime) -> Result<WatchEntry, String> {
    let args = to_js(&AddArgs { anime })?;
    invoke_typed("add_to_watchlist", args).await
}

pub async fn remove_from_watchlist(mal_id: u32) -> Result<(), String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("remove_from_watchlist", args).await
}

pub async fn update_progress(mal_id: u32, progress: u32) -> Result<Option<WatchEntry>, String> {
    let args = to_js(&ProgressArgs { mal_id, progress })?;
    invoke_typed("update_progress", args).await
}

pub async fn update_status(mal_id: u32, status: &str) -> Result<Option<WatchEntry>, String> {
    let args = to_js(&StatusArgs { mal_id, status })?;
    invoke_typed("update_status", args).await
}
