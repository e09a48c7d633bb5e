// ============================================================================
// Report Configuration
// Labels and separators of the textual per-pair report
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout of one report record.
///
/// A record is written as
/// `{input_label}{first}{separator}{second}{line_break}{body}{record_terminator}`
/// where `body` is `{sum_label}{sum}` for a summed pair and
/// `{invalid_message}` for a rejected one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportConfig {
    /// Written before the first token (e.g. "Input: ")
    pub input_label: String,

    /// Written between the two tokens (e.g. " , ")
    pub separator: String,

    /// Written between the echoed tokens and the result
    pub line_break: String,

    /// Written before the sum (e.g. "Sum: ")
    pub sum_label: String,

    /// Written instead of a sum when either token is malformed
    pub invalid_message: String,

    /// Written after every record; must end with a newline
    pub record_terminator: String,
}

impl ReportConfig {
    /// Create a configuration from explicit labels
    pub fn new(
        input_label: impl Into<String>,
        separator: impl Into<String>,
        sum_label: impl Into<String>,
        invalid_message: impl Into<String>,
    ) -> Self {
        Self {
            input_label: input_label.into(),
            separator: separator.into(),
            line_break: "\n".to_string(),
            sum_label: sum_label.into(),
            invalid_message: invalid_message.into(),
            record_terminator: "\n\n".to_string(),
        }
    }

    /// Builder method: Set the text between the echoed tokens and the result
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    /// Builder method: Set the text written after each record
    pub fn with_record_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.record_terminator = terminator.into();
        self
    }

    /// Builder method: Set the message for rejected pairs
    pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() {
            return Err("Separator cannot be empty".to_string());
        }

        if self.line_break.is_empty() {
            return Err("Line break cannot be empty".to_string());
        }

        if self.invalid_message.is_empty() {
            return Err("Invalid-pair message cannot be empty".to_string());
        }

        if !self.record_terminator.ends_with('\n') {
            return Err("Record terminator must end with a newline".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ReportConfig {
    /// Two lines per pair followed by a blank line
    ///
    /// ```text
    /// Input: 2.5 , 0.5
    /// Sum: 3
    ///
    /// ```
    pub fn classic() -> Self {
        Self::new("Input: ", " , ", "Sum: ", "Invalid double format detected.")
    }

    /// One line per pair
    ///
    /// ```text
    /// 2.5 + 0.5 = 3
    /// ```
    pub fn compact() -> Self {
        Self::new("", " + ", "= ", "=> invalid")
            .with_line_break(" ")
            .with_record_terminator("\n")
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::classic()
    }
}
