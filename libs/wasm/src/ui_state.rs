//! JSON payloads exchanged with the page.
//!
//! The page re-renders its controls from [`UiSnapshot`] after every call and
//! builds the prompt form from [`UiText`].

use config::constants::{accept_attribute, PROMPT_PLACEHOLDER, PROMPT_TITLE};
use serde::Serialize;
use tiptop_viewer::{PromptField, StartOutcome, UiSnapshot};

/// Static labels for the page.
///
/// # Examples
/// ```
/// let text = tiptop_wasm::ui_state::ui_text();
/// assert_eq!(text.accept, ".stl,.stp,.iges,.igs");
/// assert_eq!(text.prompt_labels.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiText {
    pub prompt_title: &'static str,
    pub prompt_labels: Vec<&'static str>,
    pub prompt_placeholder: &'static str,
    /// Value for the file input's `accept` attribute.
    pub accept: String,
}

pub fn ui_text() -> UiText {
    UiText {
        prompt_title: PROMPT_TITLE,
        prompt_labels: PromptField::ALL.iter().map(|field| field.label()).collect(),
        prompt_placeholder: PROMPT_PLACEHOLDER,
        accept: accept_attribute(),
    }
}

/// Serializes a snapshot for `uiState()`.
///
/// # Errors
/// Returns the serializer error; snapshots hold only plain data, so this is
/// not expected in practice.
pub fn snapshot_json(snapshot: &UiSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshot)
}

/// Stable name for a start outcome, returned by `submitPrompt`.
pub fn outcome_name(outcome: StartOutcome) -> &'static str {
    match outcome {
        StartOutcome::Started => "started",
        StartOutcome::AlreadyRunning => "alreadyRunning",
        StartOutcome::AlreadyCompleted => "alreadyCompleted",
        StartOutcome::Cancelled => "cancelled",
        StartOutcome::NotReady => "notReady",
    }
}
