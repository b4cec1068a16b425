use std::collections::HashMap;

use kami_types::{LanguageTag, TranslationOutcome};

/// One submission lifecycle: the detected source, the targets captured at
/// submission time, and an outcome slot per target.
///
/// The event loop is the single writer. Per-target tasks report through the
/// channel and are identified by the sequence number handed out by
/// [`TranslationSession::begin`]; anything carrying an older number is a
/// leftover of a superseded submission and must be discarded.
#[derive(Debug, Default)]
pub struct TranslationSession {
    seq: u64,
    source: LanguageTag,
    targets: Vec<LanguageTag>,
    outcomes: HashMap<LanguageTag, TranslationOutcome>,
}

/// What happened to a reported outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Recorded,
    /// Sequence number belongs to a superseded submission.
    Stale,
    /// Slot already terminal, or target unknown to this submission.
    Rejected,
}

impl TranslationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission: bump the sequence number, capture the target
    /// list, and reset every slot to Pending.
    pub fn begin(&mut self, source: LanguageTag, targets: Vec<LanguageTag>) -> u64 {
        self.seq += 1;
        self.source = source;
        self.outcomes = targets
            .iter()
            .map(|t| (t.clone(), TranslationOutcome::Pending))
            .collect();
        self.targets = targets;
        self.seq
    }

    /// Drop all results without starting a new submission (explicit reset).
    /// The sequence number still advances so that in-flight outcomes of the
    /// cleared submission cannot resurface.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.source = LanguageTag::new();
        self.targets.clear();
        self.outcomes.clear();
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_active(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Apply a settled outcome. Terminal slots are never overwritten.
    pub fn record(&mut self, seq: u64, target: &str, outcome: TranslationOutcome) -> Applied {
        if seq != self.seq {
            return Applied::Stale;
        }
        match self.outcomes.get_mut(target) {
            Some(slot) if !slot.is_terminal() => {
                *slot = outcome;
                Applied::Recorded
            }
            _ => Applied::Rejected,
        }
    }

    pub fn outcome(&self, target: &str) -> Option<&TranslationOutcome> {
        self.outcomes.get(target)
    }

    /// All targets terminal. An empty session counts as settled.
    pub fn is_settled(&self) -> bool {
        self.targets
            .iter()
            .all(|t| self.outcomes.get(t).is_some_and(|o| o.is_terminal()))
    }

    pub fn settled_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| self.outcomes.get(*t).is_some_and(|o| o.is_terminal()))
            .count()
    }

    /// Outcomes in submission-time selection order, never arrival order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TranslationOutcome)> {
        static PENDING: TranslationOutcome = TranslationOutcome::Pending;
        self.targets
            .iter()
            .map(|t| (t.as_str(), self.outcomes.get(t).unwrap_or(&PENDING)))
    }
}

#[cfg(test)]
mod tests {
    use kami_types::TranslationOutcome;

    use super::{Applied, TranslationSession};

    fn success(text: &str) -> TranslationOutcome {
        TranslationOutcome::Success(text.to_string())
    }

    #[test]
    fn begin_resets_slots_and_bumps_seq() {
        let mut session = TranslationSession::new();
        let first = session.begin("ru".into(), vec!["en".into(), "tr".into()]);
        assert_eq!(
            session.record(first, "en", success("one")),
            Applied::Recorded
        );

        let second = session.begin("ru".into(), vec!["en".into()]);
        assert!(second > first);
        assert_eq!(session.outcome("en"), Some(&TranslationOutcome::Pending));
        assert!(!session.is_settled());
    }

    #[test]
    fn stale_seq_is_discarded() {
        let mut session = TranslationSession::new();
        let old = session.begin("ru".into(), vec!["en".into()]);
        session.begin("ru".into(), vec!["en".into()]);

        assert_eq!(session.record(old, "en", success("late")), Applied::Stale);
        assert_eq!(session.outcome("en"), Some(&TranslationOutcome::Pending));
    }

    #[test]
    fn terminal_slot_is_never_overwritten() {
        let mut session = TranslationSession::new();
        let seq = session.begin("auto".into(), vec!["en".into()]);
        assert_eq!(session.record(seq, "en", success("first")), Applied::Recorded);
        assert_eq!(
            session.record(seq, "en", success("second")),
            Applied::Rejected
        );
        assert_eq!(session.outcome("en"), Some(&success("first")));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let mut session = TranslationSession::new();
        let seq = session.begin("auto".into(), vec!["en".into()]);
        assert_eq!(session.record(seq, "fr", success("x")), Applied::Rejected);
    }

    #[test]
    fn entries_follow_submission_order_not_arrival_order() {
        let mut session = TranslationSession::new();
        let seq = session.begin("ru".into(), vec!["tr".into(), "ru".into()]);

        // "ru" settles first, "tr" second
        session.record(seq, "ru", success("щи"));
        session.record(seq, "tr", success("çorba"));

        let order: Vec<&str> = session.entries().map(|(tag, _)| tag).collect();
        assert_eq!(order, vec!["tr", "ru"]);
    }

    #[test]
    fn settled_only_when_every_target_is_terminal() {
        let mut session = TranslationSession::new();
        let seq = session.begin("ru".into(), vec!["en".into(), "kk".into()]);
        assert_eq!(session.settled_count(), 0);

        session.record(seq, "kk", TranslationOutcome::Failure("server error".into()));
        assert!(!session.is_settled());
        assert_eq!(session.settled_count(), 1);

        session.record(seq, "en", success("done"));
        assert!(session.is_settled());
    }

    #[test]
    fn reset_clears_results_and_invalidates_in_flight_outcomes() {
        let mut session = TranslationSession::new();
        let seq = session.begin("ru".into(), vec!["en".into()]);
        session.reset();

        assert!(!session.is_active());
        assert_eq!(session.record(seq, "en", success("late")), Applied::Stale);
        assert_eq!(session.entries().count(), 0);
    }
}
