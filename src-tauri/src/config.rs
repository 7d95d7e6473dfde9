//! Application Configuration
//!
//! Explicit configuration values handed to the components that need them
//! at setup time; nothing reads configuration through globals.

use serde::{Deserialize, Serialize};

pub const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Settings for the remote catalog client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog service, no trailing slash
    pub base_url: String,
    /// Ask the catalog to filter adult entries out of list results
    pub sfw_only: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: JIKAN_BASE_URL.to_string(),
            sfw_only: true,
        }
    }
}
