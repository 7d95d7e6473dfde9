//! AniDex Backend
//!
//! Layered architecture:
//! - domain: Catalog records and locally-tracked entities
//! - catalog: Remote catalog HTTP client
//! - repository: Local preference store (watchlist, ratings, comments, likes)
//! - commands: Tauri command handlers

use std::path::PathBuf;

use tauri::Manager;

mod catalog;
mod commands;
mod config;
mod domain;
mod repository;

use catalog::CatalogClient;
use config::CatalogConfig;
use repository::{
    init_db, CommentRepository, LikeRepository, RatingRepository, WatchlistRepository,
};

/// Application state shared across commands
pub struct AppState {
    pub catalog: CatalogClient,
    pub watchlist: WatchlistRepository,
    pub ratings: RatingRepository,
    pub comments: CommentRepository,
    pub likes: LikeRepository,
}

/// Get preference store path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().expect("failed to resolve app data dir");
    std::fs::create_dir_all(&app_dir).expect("failed to create app data dir");
    app_dir.join("anidex.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            tracing_subscriber::fmt().with_target(false).init();

            let db_path = get_db_path(app.handle());
            let conn = init_db(&db_path).expect("failed to open preference store");
            tracing::info!(path = %db_path.display(), "preference store ready");

            app.manage(AppState {
                catalog: CatalogClient::new(CatalogConfig::default()),
                watchlist: WatchlistRepository::new(conn.clone()),
                ratings: RatingRepository::new(conn.clone()),
                comments: CommentRepository::new(conn.clone()),
                likes: LikeRepository::new(conn),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog lookups
            commands::search_anime,
            commands::get_anime,
            commands::get_anime_episodes,
            commands::get_anime_characters,
            commands::get_anime_staff,
            commands::get_anime_recommendations,
            commands::get_popular_anime,
            commands::get_season_now,
            commands::get_top_anime,
            // Watchlist
            commands::get_watchlist,
            commands::add_to_watchlist,
            commands::remove_from_watchlist,
            commands::update_progress,
            commands::update_status,
            // Ratings
            commands::add_rating,
            commands::get_rating,
            commands::get_ratings,
            // Comments
            commands::add_comment,
            commands::get_comments,
            // Likes
            commands::toggle_like,
            commands::is_liked,
            commands::get_likes,
            // External links
            commands::open_external,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
