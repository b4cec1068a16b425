use kanal::AsyncSender;
use kami_core::session::TranslationSession;
use kami_types::{AppEvent, TranslationOutcome};

/// Copy one settled result to the system clipboard.
pub async fn handle_copy(
    session: &TranslationSession,
    target: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let status = match session.outcome(target) {
        Some(TranslationOutcome::Success(text)) => {
            let text = text.clone();
            // arboard is blocking
            match tokio::task::spawn_blocking(move || kami_io::clipboard::copy_text(&text)).await?
            {
                Ok(()) => format!("copied {target} result"),
                Err(e) => {
                    tracing::warn!("Clipboard copy failed: {e}");
                    format!("copy failed: {e}")
                }
            }
        }
        _ => format!("nothing to copy for {target}"),
    };

    app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status,
            busy: false,
        })
        .await?;

    Ok(())
}
