use std::env;

use serde::{Deserialize, Serialize};

fn default_theme() -> String {
    "dark".to_string()
}

fn default_prefs_path() -> String {
    env::var("KAMI_PREFS_PATH").unwrap_or_else(|_| "kami-prefs.json".to_string())
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Theme used when no preference has been persisted yet
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Key-value preference store backing file
    #[serde(default = "default_prefs_path")]
    pub prefs_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            prefs_path: default_prefs_path(),
        }
    }
}
