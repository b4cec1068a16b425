use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod network;
pub mod translator;
pub mod ui;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            translator: TranslatorConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
