use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use kami_config::Config;
use kami_io::prefs::PrefStore;
use kami_translator::{DummyTranslator, MenuTranslator, Translator};
use kami_types::Theme;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod oneshot;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::state::AppState;

/// Menu translation orchestrator
#[derive(Parser)]
#[command(name = "kami", version, about)]
struct Args {
    /// Translate this text once and exit
    #[arg(long)]
    text: Option<String>,

    /// Comma-separated target language tags for --text mode
    #[arg(long, value_delimiter = ',')]
    targets: Vec<String>,

    /// Config file path (default: $KAMI_CONFIG, then ./config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let args = Args::parse();
    let config = profile::load_config(args.config.as_deref())?;
    let translator = build_translator(&config)?;

    if let Some(text) = args.text {
        return oneshot::run(&config, text, args.targets, translator).await;
    }

    // Theme preference survives restarts; the config only supplies the
    // first-run default
    let theme = PrefStore::new(config.ui.prefs_path.clone())
        .get("theme")
        .as_deref()
        .and_then(Theme::parse)
        .or_else(|| Theme::parse(&config.ui.theme))
        .unwrap_or(Theme::Dark);

    let state = Arc::new(AppState::new(config, theme));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(translator);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("Task finished"),
                Some(Ok(Err(e))) => tracing::error!("Task failed: {e}"),
                Some(Err(e)) => tracing::error!("Task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}

fn build_translator(config: &Config) -> anyhow::Result<Arc<dyn Translator>> {
    match config.translator.provider.as_str() {
        "dummy" => Ok(Arc::new(DummyTranslator)),
        _ => {
            let translator = MenuTranslator::new(
                config.network.endpoint.clone(),
                Duration::from_secs(config.network.timeout_seconds),
                config.translator.force_target,
            )?;
            Ok(Arc::new(translator))
        }
    }
}
