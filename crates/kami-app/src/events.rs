use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kami_core::catalog;
use kami_core::selection::TargetSelection;
use kami_core::session::{Applied, TranslationSession};
use kami_io::prefs::PrefStore;
use kami_translator::Translator;
use kami_types::{AppEvent, DisplayEntry, TranslationOutcome, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod copy_result;
pub mod submit;

use copy_result::handle_copy;
use submit::handle_submit;

/// App's main loop: the single writer of the selection and the current
/// translation session. Per-target tasks never touch either, they only send
/// `OutcomeSettled` back through `loopback_tx`.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    translator: Arc<dyn Translator>,
) -> anyhow::Result<()> {
    let (prefs, mut selection) = {
        let config = state.config.read().await;
        (
            PrefStore::new(config.ui.prefs_path.clone()),
            TargetSelection::from_tags(config.translator.default_targets.clone()),
        )
    };

    let mut session = TranslationSession::new();
    let mut in_flight = CancellationToken::new();

    // Let the UI render the pre-selected targets
    let _ = app_to_ui_tx
        .send(AppEvent::SelectionChanged(selection.snapshot()))
        .await;

    tracing::info!("Event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;

        if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
            break;
        }

        // Handler failures are operation-level: reported once, globally,
        // without touching any per-target slot or killing the loop.
        if let Err(e) = handle_events(
            &state,
            &mut session,
            &mut selection,
            &mut in_flight,
            &translator,
            &prefs,
            &loopback_tx,
            &app_to_ui_tx,
            event,
        )
        .await
        {
            tracing::error!("Event handling failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::OperationError {
                    message: e.to_string(),
                })
                .await;
        }
    }

    in_flight.cancel();
    tracing::info!("Event loop stopped");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_events(
    state: &Arc<AppState>,
    session: &mut TranslationSession,
    selection: &mut TargetSelection,
    in_flight: &mut CancellationToken,
    translator: &Arc<dyn Translator>,
    prefs: &PrefStore,
    loopback_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(UiEvent::SubmitText(text)) => {
            handle_submit(
                state,
                text,
                session,
                selection,
                translator.clone(),
                in_flight,
                loopback_tx,
                app_to_ui_tx,
            )
            .await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleTarget(tag)) => {
            selection.toggle(&tag);
            tracing::debug!("Selection now {:?}", selection.snapshot());
            app_to_ui_tx
                .send(AppEvent::SelectionChanged(selection.snapshot()))
                .await?;
        }
        AppEvent::UiEvent(UiEvent::Reset) => {
            // Explicit reset: drop the selection, the result set and any
            // in-flight work (toggle never does this)
            in_flight.cancel();
            session.reset();
            selection.clear();
            app_to_ui_tx
                .send(AppEvent::SelectionChanged(selection.snapshot()))
                .await?;
            app_to_ui_tx.send(AppEvent::ShowResults(Vec::new())).await?;
            app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "cleared".to_string(),
                    busy: false,
                })
                .await?;
        }
        AppEvent::UiEvent(UiEvent::CopyResult(tag)) => {
            handle_copy(session, &tag, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleTheme) => {
            let theme = {
                let mut theme = state.theme.write().await;
                *theme = theme.toggled();
                *theme
            };
            if let Err(e) = prefs.set("theme", theme.as_str()) {
                tracing::warn!("Failed to persist theme preference: {e}");
            }
            app_to_ui_tx.send(AppEvent::ThemeChanged(theme)).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            // Handled by the loop itself
        }
        AppEvent::OutcomeSettled {
            seq,
            target,
            outcome,
        } => match session.record(seq, &target, outcome) {
            Applied::Recorded => {
                tracing::debug!(
                    seq,
                    target = %target,
                    "Outcome recorded ({}/{})",
                    session.settled_count(),
                    session.entries().count(),
                );
                app_to_ui_tx
                    .send(AppEvent::ShowResults(snapshot(session)))
                    .await?;

                if session.is_settled() {
                    tracing::info!(seq, "Submission settled");
                    app_to_ui_tx
                        .send(AppEvent::StatusUpdate {
                            status: "done".to_string(),
                            busy: false,
                        })
                        .await?;
                }
            }
            Applied::Stale => {
                tracing::debug!(seq, target = %target, "Discarding outcome of superseded submission");
            }
            Applied::Rejected => {
                tracing::warn!(seq, target = %target, "Outcome for settled or unknown slot dropped");
            }
        },
        // Render-side events, nothing to do here
        AppEvent::SelectionChanged(_)
        | AppEvent::ShowResults(_)
        | AppEvent::StatusUpdate { .. }
        | AppEvent::OperationError { .. }
        | AppEvent::ThemeChanged(_) => {}
    }

    Ok(())
}

/// Result rows in submission order, decorated with catalog names.
pub fn snapshot(session: &TranslationSession) -> Vec<DisplayEntry> {
    session
        .entries()
        .map(|(tag, outcome)| DisplayEntry {
            target: tag.to_string(),
            language: catalog::name_for(tag).to_string(),
            outcome: outcome.clone(),
        })
        .collect()
}

/// One-line rendering of an outcome, shared by the terminal UI and the
/// one-shot mode.
pub fn outcome_label(outcome: &TranslationOutcome) -> String {
    match outcome {
        TranslationOutcome::Pending => "…".to_string(),
        TranslationOutcome::Success(text) => text.clone(),
        TranslationOutcome::Failure(reason) => format!("error: {reason}"),
    }
}
