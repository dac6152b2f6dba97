//! The three-field prompt shown before a run.

use std::fmt;

use config::constants::PROMPT_LABELS;
use serde::Deserialize;

use crate::error::ValidationError;

/// One prompt field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptField {
    ForceScaling,
    Resolution,
    VolumeFractionLimit,
}

impl PromptField {
    /// Fields in display order.
    pub const ALL: [PromptField; 3] = [
        PromptField::ForceScaling,
        PromptField::Resolution,
        PromptField::VolumeFractionLimit,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            PromptField::ForceScaling => PROMPT_LABELS[0],
            PromptField::Resolution => PROMPT_LABELS[1],
            PromptField::VolumeFractionLimit => PROMPT_LABELS[2],
        }
    }
}

impl fmt::Display for PromptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text answers. Only checked for non-emptiness; nothing reads the values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnswers {
    pub force_scaling: String,
    pub resolution: String,
    pub volume_fraction_limit: String,
}

impl PromptAnswers {
    pub fn new(
        force_scaling: impl Into<String>,
        resolution: impl Into<String>,
        volume_fraction_limit: impl Into<String>,
    ) -> Self {
        Self {
            force_scaling: force_scaling.into(),
            resolution: resolution.into(),
            volume_fraction_limit: volume_fraction_limit.into(),
        }
    }

    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::ForceScaling => &self.force_scaling,
            PromptField::Resolution => &self.resolution,
            PromptField::VolumeFractionLimit => &self.volume_fraction_limit,
        }
    }

    /// Fails on the first empty answer. Whitespace counts as an answer.
    ///
    /// # Examples
    /// ```
    /// use tiptop_viewer::{PromptAnswers, PromptField, ValidationError};
    ///
    /// assert!(PromptAnswers::new("1.0", "64", "0.3").validate().is_ok());
    /// assert_eq!(
    ///     PromptAnswers::new("1.0", "", "0.3").validate(),
    ///     Err(ValidationError::MissingAnswer { field: PromptField::Resolution })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        match PromptField::ALL
            .into_iter()
            .find(|&field| self.get(field).is_empty())
        {
            Some(field) => Err(ValidationError::MissingAnswer { field }),
            None => Ok(()),
        }
    }
}
