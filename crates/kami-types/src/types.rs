use serde::{Deserialize, Serialize};

/// Opaque short language code ("ru", "kk", "tr", "auto"). Passed through to
/// the translation service as-is, no registry validation.
pub type LanguageTag = String;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// A per-target translation task settled. `seq` identifies the
    /// submission the outcome belongs to; the event loop discards it when a
    /// newer submission has started since.
    OutcomeSettled {
        seq: u64,
        target: LanguageTag,
        outcome: TranslationOutcome,
    },
    SelectionChanged(Vec<LanguageTag>),
    ShowResults(Vec<DisplayEntry>),
    StatusUpdate {
        status: String,
        busy: bool,
    },
    /// Failure outside any single target's control (orchestration setup).
    OperationError {
        message: String,
    },
    ThemeChanged(Theme),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SubmitText(String),
    ToggleTarget(LanguageTag),
    CopyResult(LanguageTag),
    ToggleTheme,
    Reset,
    Close,
}

/// Per-target result slot. Exactly one per target per submission; settles
/// at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Pending,
    Success(String),
    Failure(String),
}

impl TranslationOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TranslationOutcome::Pending)
    }
}

/// One row of the rendered result set, in selection order.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub target: LanguageTag,
    pub language: String,
    pub outcome: TranslationOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}
