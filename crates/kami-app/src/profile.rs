use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use kami_config::Config;

/// Resolution order: CLI flag, KAMI_CONFIG, repo-local config.json.
fn config_path(cli_override: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    env::var("KAMI_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"))
}

/// Load the config file, falling back to env-driven defaults when the file
/// is absent. A present-but-broken file is an error rather than a silent
/// fallback.
pub fn load_config(cli_override: Option<&Path>) -> anyhow::Result<Config> {
    let path = config_path(cli_override);

    if path.exists() {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    } else {
        tracing::warn!(
            "Config file {} not found, using environment defaults",
            path.display()
        );
        Ok(Config::new())
    }
}
