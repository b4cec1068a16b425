use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use kami_config::translator::{FanoutMode, TranslatorConfig};
use kami_core::detect::detect;
use kami_core::preprocess::{MenuPreprocessor, Preprocessor};
use kami_core::selection::TargetSelection;
use kami_core::session::TranslationSession;
use kami_core::translit::to_latin_approx;
use kami_translator::{TranslationRequest, Translator};
use kami_types::{AppEvent, LanguageTag, TranslationOutcome};
use tokio_util::sync::CancellationToken;

use crate::events::snapshot;
use crate::state::AppState;

/// How one submission's per-target requests are issued.
#[derive(Debug, Clone, Copy)]
pub enum FanoutPolicy {
    /// All targets at once, each settling independently
    Parallel,
    /// One target at a time with a fixed pause in between, to stay under
    /// the service's rate limits
    Sequential { delay: Duration },
}

impl FanoutPolicy {
    pub fn from_config(config: &TranslatorConfig) -> Self {
        match config.mode {
            FanoutMode::Parallel => FanoutPolicy::Parallel,
            FanoutMode::Sequential => FanoutPolicy::Sequential {
                delay: Duration::from_millis(config.request_delay_ms),
            },
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_submit(
    state: &Arc<AppState>,
    text: String,
    session: &mut TranslationSession,
    selection: &TargetSelection,
    translator: Arc<dyn Translator>,
    in_flight: &mut CancellationToken,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let prepared = MenuPreprocessor.process(&text);
    if prepared.is_empty() {
        tracing::debug!("Ignoring empty submission");
        return Ok(());
    }

    if selection.is_empty() {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: "no target languages selected".to_string(),
                busy: false,
            })
            .await?;
        return Ok(());
    }

    // Supersede whatever is still in flight before touching the session
    in_flight.cancel();
    *in_flight = CancellationToken::new();

    let source = detect(&prepared).to_string();
    let targets = selection.snapshot();
    let seq = session.begin(source.clone(), targets.clone());

    tracing::info!(seq, source = %source, targets = targets.len(), "Starting submission");

    app_to_ui_tx
        .send(AppEvent::ShowResults(snapshot(session)))
        .await?;
    app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: format!("translating into {} language(s)", targets.len()),
            busy: true,
        })
        .await?;

    let policy = {
        let config = state.config.read().await;
        FanoutPolicy::from_config(&config.translator)
    };

    spawn_fanout(
        seq,
        prepared,
        source,
        targets,
        translator,
        policy,
        in_flight.child_token(),
        loopback_tx.clone(),
    );

    Ok(())
}

/// Issue one translation per target. Outcomes come back as
/// `OutcomeSettled` events; nothing here mutates shared state.
#[allow(clippy::too_many_arguments)]
pub fn spawn_fanout(
    seq: u64,
    text: String,
    source: LanguageTag,
    targets: Vec<LanguageTag>,
    translator: Arc<dyn Translator>,
    policy: FanoutPolicy,
    cancel: CancellationToken,
    outcome_tx: AsyncSender<AppEvent>,
) {
    match policy {
        FanoutPolicy::Parallel => {
            for target in targets {
                let request = TranslationRequest {
                    text: text.clone(),
                    source: source.clone(),
                    target,
                };
                tokio::spawn(run_target(
                    seq,
                    request,
                    translator.clone(),
                    cancel.clone(),
                    outcome_tx.clone(),
                ));
            }
        }
        FanoutPolicy::Sequential { delay } => {
            tokio::spawn(async move {
                for (index, target) in targets.into_iter().enumerate() {
                    if index > 0 {
                        tokio::select! {
                            _ = cancel.cancelled() => break,
                            _ = tokio::time::sleep(delay) => {}
                        }
                    }
                    let request = TranslationRequest {
                        text: text.clone(),
                        source: source.clone(),
                        target,
                    };
                    run_target(
                        seq,
                        request,
                        translator.clone(),
                        cancel.clone(),
                        outcome_tx.clone(),
                    )
                    .await;
                }
            });
        }
    }
}

/// One target, one terminal outcome. Failures become data; they never
/// propagate and never affect sibling targets.
async fn run_target(
    seq: u64,
    request: TranslationRequest,
    translator: Arc<dyn Translator>,
    cancel: CancellationToken,
    outcome_tx: AsyncSender<AppEvent>,
) {
    let target = request.target.clone();

    let outcome = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(seq, target = %target, "Request dropped, submission superseded");
            return;
        }
        result = translator.translate(&request) => match result {
            Ok(translation) => {
                let text = if target == "tr" {
                    to_latin_approx(&translation.text)
                } else {
                    translation.text
                };
                TranslationOutcome::Success(text)
            }
            Err(e) => {
                tracing::warn!(seq, target = %target, "Translation failed: {e}");
                TranslationOutcome::Failure(e.to_string())
            }
        }
    };

    if let Err(e) = outcome_tx
        .send(AppEvent::OutcomeSettled {
            seq,
            target,
            outcome,
        })
        .await
    {
        tracing::error!(seq, "Failed to report settled outcome: {e}");
    }
}
