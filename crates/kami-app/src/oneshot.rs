use std::sync::Arc;

use kami_config::Config;
use kami_core::catalog;
use kami_core::detect::detect;
use kami_core::preprocess::{MenuPreprocessor, Preprocessor};
use kami_core::selection::TargetSelection;
use kami_core::session::TranslationSession;
use kami_translator::Translator;
use kami_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::events::outcome_label;
use crate::events::submit::{FanoutPolicy, spawn_fanout};

/// Single submission from the command line: fan out, wait until every
/// target settles, print the outcomes in selection order.
pub async fn run(
    config: &Config,
    text: String,
    targets: Vec<String>,
    translator: Arc<dyn Translator>,
) -> anyhow::Result<()> {
    let prepared = MenuPreprocessor.process(&text);
    if prepared.is_empty() {
        tracing::warn!("Nothing to translate");
        return Ok(());
    }

    let selection = if targets.is_empty() {
        TargetSelection::from_tags(config.translator.default_targets.clone())
    } else {
        TargetSelection::from_tags(targets)
    };
    if selection.is_empty() {
        tracing::warn!("No target languages selected");
        return Ok(());
    }

    let source = detect(&prepared).to_string();
    tracing::info!(source = %source, targets = selection.len(), "One-shot submission");

    let mut session = TranslationSession::new();
    let seq = session.begin(source.clone(), selection.snapshot());

    let (tx, rx) = kanal::bounded_async(64);
    spawn_fanout(
        seq,
        prepared,
        source,
        selection.snapshot(),
        translator,
        FanoutPolicy::from_config(&config.translator),
        CancellationToken::new(),
        tx,
    );

    while !session.is_settled() {
        if let AppEvent::OutcomeSettled {
            seq,
            target,
            outcome,
        } = rx.recv().await?
        {
            session.record(seq, &target, outcome);
        }
    }

    for (tag, outcome) in session.entries() {
        println!("{}: {}", catalog::name_for(tag), outcome_label(outcome));
    }

    Ok(())
}
