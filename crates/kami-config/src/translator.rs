use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "menu-api".to_string()
}

fn default_mode() -> FanoutMode {
    FanoutMode::Sequential
}

fn default_request_delay_ms() -> u64 {
    1500
}

fn default_force_target() -> bool {
    true
}

fn default_targets() -> Vec<String> {
    vec!["kk".to_string()]
}

/// How per-target requests are issued within one submission. Both modes
/// give the same per-target outcome guarantees; sequential spaces requests
/// out to stay under the service's rate limits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FanoutMode {
    Parallel,
    Sequential,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// "menu-api" for the remote service, "dummy" for the offline echo
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_mode")]
    pub mode: FanoutMode,
    /// Pause between successive requests in sequential mode
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Ask the service not to re-detect/override the target language
    #[serde(default = "default_force_target")]
    pub force_target: bool,
    /// Targets pre-selected at startup
    #[serde(default = "default_targets")]
    pub default_targets: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            mode: default_mode(),
            request_delay_ms: default_request_delay_ms(),
            force_target: default_force_target(),
            default_targets: default_targets(),
        }
    }
}
