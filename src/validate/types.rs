//! Core types for prompt validation results and warnings.

use serde::Serialize;
use std::fmt;

/// Category of a validation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A word appears cut off mid-way, or the prompt stops abruptly.
    Truncation,
    /// Two sentences are near-identical.
    DuplicateSentence,
    /// Editorial-camera and phone-camera vocabulary both appear.
    Contradiction,
    /// A captured outfit item is missing from the Outfit section.
    MissingOutfitItem,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Truncation => write!(f, "truncation"),
            WarningKind::DuplicateSentence => write!(f, "duplicate_sentence"),
            WarningKind::Contradiction => write!(f, "contradiction"),
            WarningKind::MissingOutfitItem => write!(f, "missing_outfit_item"),
        }
    }
}

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Result of prompt validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptValidationResult {
    /// True when no warnings were raised.
    pub valid: bool,
    pub warnings: Vec<ValidationWarning>,
}

impl PromptValidationResult {
    /// Create a result from collected warnings.
    pub fn from_warnings(warnings: Vec<ValidationWarning>) -> Self {
        Self {
            valid: warnings.is_empty(),
            warnings,
        }
    }

    /// Whether any warning of `kind` was raised.
    pub fn has(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    /// Warnings as plain strings.
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Format the result as a user-facing report.
    ///
    /// ```text
    /// Prompt validation raised 2 warning(s)
    ///
    ///   [truncation] possible truncated word "sneak"
    ///   [contradiction] prompt mixes editorial camera and phone portrait-mode terms
    /// ```
    pub fn format_report(&self) -> String {
        if self.valid {
            return String::new();
        }

        let mut msg = format!(
            "Prompt validation raised {} warning(s)\n\n",
            self.warnings.len()
        );
        for warning in &self.warnings {
            msg.push_str(&format!("  {}\n", warning));
        }
        msg
    }
}
