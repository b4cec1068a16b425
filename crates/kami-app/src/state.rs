use std::sync::Arc;

use kami_config::Config;
use kami_types::Theme;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub theme: RwLock<Theme>,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            theme: RwLock::new(theme),
        }
    }
}
