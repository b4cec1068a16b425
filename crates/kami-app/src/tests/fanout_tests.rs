use std::sync::Arc;
use std::time::Duration;

use kami_core::session::TranslationSession;
use kami_types::{AppEvent, TranslationOutcome};
use kanal::AsyncReceiver;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::ScriptedTranslator;
use crate::events::submit::{FanoutPolicy, spawn_fanout};

/// Apply settled outcomes until every slot is terminal, returning the
/// targets in arrival order.
async fn drain(
    session: &mut TranslationSession,
    rx: &AsyncReceiver<AppEvent>,
) -> Vec<String> {
    let mut arrival = Vec::new();
    while !session.is_settled() {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("fan-out timed out")
            .expect("channel closed");
        if let AppEvent::OutcomeSettled {
            seq,
            target,
            outcome,
        } = event
        {
            arrival.push(target.clone());
            session.record(seq, &target, outcome);
        }
    }
    arrival
}

#[tokio::test]
async fn parallel_display_order_ignores_arrival_order() {
    // "tr" is slow, so "ru" settles first; entries must still be tr, ru
    let translator = Arc::new(
        ScriptedTranslator::new()
            .ok("tr", "çorba")
            .delay("tr", Duration::from_millis(80))
            .ok("ru", "суп"),
    );

    let mut session = TranslationSession::new();
    let targets = vec!["tr".to_string(), "ru".to_string()];
    let seq = session.begin("en".to_string(), targets.clone());

    let (tx, rx) = kanal::unbounded_async();
    spawn_fanout(
        seq,
        "soup".to_string(),
        "en".to_string(),
        targets,
        translator,
        FanoutPolicy::Parallel,
        CancellationToken::new(),
        tx,
    );

    let arrival = drain(&mut session, &rx).await;
    assert_eq!(arrival, vec!["ru", "tr"]);

    let display: Vec<&str> = session.entries().map(|(tag, _)| tag).collect();
    assert_eq!(display, vec!["tr", "ru"]);
    assert!(session.entries().all(|(_, o)| matches!(o, TranslationOutcome::Success(_))));
}

#[tokio::test]
async fn one_failing_target_never_affects_siblings() {
    let translator = Arc::new(
        ScriptedTranslator::new()
            .ok("en", "Caesar salad")
            .fail("kk", "quota exceeded")
            .ok("fr", "Salade César"),
    );

    let mut session = TranslationSession::new();
    let targets = vec!["en".to_string(), "kk".to_string(), "fr".to_string()];
    let seq = session.begin("ru".to_string(), targets.clone());

    let (tx, rx) = kanal::unbounded_async();
    spawn_fanout(
        seq,
        "Салат Цезарь".to_string(),
        "ru".to_string(),
        targets,
        translator,
        FanoutPolicy::Parallel,
        CancellationToken::new(),
        tx,
    );

    drain(&mut session, &rx).await;

    assert_eq!(
        session.outcome("en"),
        Some(&TranslationOutcome::Success("Caesar salad".to_string()))
    );
    assert_eq!(
        session.outcome("fr"),
        Some(&TranslationOutcome::Success("Salade César".to_string()))
    );
    match session.outcome("kk") {
        Some(TranslationOutcome::Failure(reason)) => {
            assert!(reason.contains("quota exceeded"), "reason was {reason:?}");
        }
        other => panic!("expected failure for kk, got {other:?}"),
    }
}

#[tokio::test]
async fn turkish_success_is_transliterated_before_recording() {
    let translator = Arc::new(
        ScriptedTranslator::new()
            .ok("en", "Caesar salad")
            .ok("tr", "Сезар салатасы"),
    );

    let mut session = TranslationSession::new();
    let targets = vec!["en".to_string(), "tr".to_string()];
    let seq = session.begin("ru".to_string(), targets.clone());

    let (tx, rx) = kanal::unbounded_async();
    spawn_fanout(
        seq,
        "Салат Цезарь".to_string(),
        "ru".to_string(),
        targets,
        translator.clone(),
        FanoutPolicy::Parallel,
        CancellationToken::new(),
        tx,
    );

    drain(&mut session, &rx).await;

    // Confusable Cyrillic swapped, the rest untouched
    assert_eq!(
        session.outcome("tr"),
        Some(&TranslationOutcome::Success("Seзar saлatasы".to_string()))
    );
    // Non-Turkish targets are left exactly as returned
    assert_eq!(
        session.outcome("en"),
        Some(&TranslationOutcome::Success("Caesar salad".to_string()))
    );

    // Every request shares the one detected source
    assert!(translator.requests().iter().all(|r| r.source == "ru"));
}

#[tokio::test]
async fn sequential_mode_settles_every_target_in_order() {
    let translator = Arc::new(
        ScriptedTranslator::new()
            .ok("kk", "сорпа")
            .ok("uz", "sho'rva")
            .ok("az", "şorba"),
    );

    let mut session = TranslationSession::new();
    let targets = vec!["kk".to_string(), "uz".to_string(), "az".to_string()];
    let seq = session.begin("ru".to_string(), targets.clone());

    let (tx, rx) = kanal::unbounded_async();
    spawn_fanout(
        seq,
        "суп".to_string(),
        "ru".to_string(),
        targets,
        translator,
        FanoutPolicy::Sequential {
            delay: Duration::from_millis(10),
        },
        CancellationToken::new(),
        tx,
    );

    let arrival = drain(&mut session, &rx).await;
    assert_eq!(arrival, vec!["kk", "uz", "az"]);
    assert!(session.is_settled());
}

#[tokio::test]
async fn cancelled_fanout_reports_nothing() {
    let translator = Arc::new(
        ScriptedTranslator::new()
            .ok("en", "slow")
            .delay("en", Duration::from_secs(5)),
    );

    let mut session = TranslationSession::new();
    let targets = vec!["en".to_string()];
    let seq = session.begin("ru".to_string(), targets.clone());

    let cancel = CancellationToken::new();
    let (tx, rx) = kanal::unbounded_async();
    // Mirror the real event loop, which keeps its own sender alive; without
    // this the lone cancelled task drops the last sender and `recv` resolves
    // with a channel-closed error instead of the intended timeout.
    let _keep_channel_open = tx.clone();
    spawn_fanout(
        seq,
        "борщ".to_string(),
        "ru".to_string(),
        targets,
        translator,
        FanoutPolicy::Parallel,
        cancel.child_token(),
        tx,
    );

    cancel.cancel();

    let result = timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(result.is_err(), "superseded request still reported an outcome");
    assert!(!session.is_settled());
}
