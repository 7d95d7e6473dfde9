//! Tauri Commands for external links

use tauri_plugin_shell::ShellExt;

/// Open a catalog page in the system browser
#[tauri::command]
pub async fn open_external(app: tauri::AppHandle, url: String) -> Result<(), String> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(format!("refusing to open non-http url: {}", url));
    }
    app.shell().open(url, None).map_err(|e| e.to_string())
}
