//! Catalog Commands
//!
//! Frontend bindings for remote catalog lookups.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::{Anime, CharacterRole, Episode, Page, Recommendation, StaffMember};

use super::{invoke_typed, to_js};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
    page: u32,
}

#[derive(Serialize)]
struct MalIdArgs {
    #[serde(rename = "malId")]
    mal_id: u32,
}

#[derive(Serialize)]
struct PageArgs {
    page: u32,
}

// ========================
// Commands
// ========================

pub async fn search_anime(query: &str, page: u32) -> Result<Page<Anime>, String> {
    let args = to_js(&SearchArgs { query, page })?;
    invoke_typed("search_anime", args).await
}

pub async fn get_anime(mal_id: u32) -> Result<Anime, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_anime", args).await
}

pub async fn get_anime_episodes(mal_id: u32) -> Result<Vec<Episode>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_anime_episodes", args).await
}

pub async fn get_anime_characters(mal_id: u32) -> Result<Vec<CharacterRole>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_anime_characters", args).await
}

pub async fn get_anime_staff(mal_id: u32) -> Result<Vec<StaffMember>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_anime_staff", args).await
}

pub async fn get_anime_recommendations(mal_id: u32) -> Result<Vec<Recommendation>, String> {
    let args = to_js(&MalIdArgs { mal_id })?;
    invoke_typed("get_anime_recommendations", args).await
}

pub async fn get_popular_anime(page: u32) -> Result<Page<Anime>, String> {
    let args = to_js(&PageArgs { page })?;
    invoke_typed("get_popular_anime", args).await
}

pub async fn get_season_now() -> Result<Page<Anime>, String> {
    invoke_typed("get_season_now", JsValue::NULL).await
}

pub async fn get_top_anime(page: u32) -> Result<Page<Anime>, String> {
    let args = to_js(&PageArgs { page })?;
    invoke_typed("get_top_anime", args).await
}

pub async fn open_external(url: &str) -> Result<(), String> {
    #[derive(Serialize)]
    struct UrlArgs<'a> {
        url: &'a str,
    }
    let args = to_js(&UrlArgs { url })?;
    invoke_typed("open_external", args).await
}
