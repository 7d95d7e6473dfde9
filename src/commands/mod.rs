//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by concern.

mod catalog;
mod prefs;
mod watchlist;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a backend command and decode its result; command failures come
/// back as the backend's error string
async fn invoke_typed<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()),
        Err(err) => Err(serde_wasm_bindgen::from_value::<String>(err.clone())
            .unwrap_or_else(|_| format!("{:?}", err))),
    }
}

fn to_js<T: serde::Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

// Re-export all public items
pub use catalog::*;
pub use prefs::*;
pub use watchlist::*;
