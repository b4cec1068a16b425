use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    env::var("KAMI_API_URL")
        .unwrap_or_else(|_| "https://ai-menu-translator-server.onrender.com".to_string())
}

fn default_timeout_seconds() -> u64 {
    env::var("KAMI_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Translation endpoint, one POST per target language
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout; the service itself imposes none
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
