//! Diagnostics as data
//!
//! Expected business conditions (a missing header, a sheet the backend
//! could not return) are reported as [`Message`] values accumulated into
//! lists, never thrown. Only programmer errors use [`Error`](crate::Error).

use std::fmt;

use chrono::Utc;

/// Severity of a [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageLevel {
    /// Informational, no action needed
    Info,
    /// Something is off but the operation proceeded
    Warning,
    /// The operation could not produce a correct result
    Error,
}

impl MessageLevel {
    /// Get the display string for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Info => "INFO",
            MessageLevel::Warning => "WARNING",
            MessageLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One diagnostic produced by validation or orchestration
///
/// Immutable once created. `time` is unix seconds at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity
    pub level: MessageLevel,
    /// Category, e.g. "headers", "backend"
    pub category: String,
    /// Human-readable text
    pub text: String,
    /// Unix timestamp (seconds) when the message was created
    pub time: i64,
}

impl Message {
    /// Create a message at the given level
    pub fn new<C, T>(level: MessageLevel, category: C, text: T) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        Self {
            level,
            category: category.into(),
            text: text.into(),
            time: Utc::now().timestamp(),
        }
    }

    /// Create an info message
    pub fn info<C: Into<String>, T: Into<String>>(category: C, text: T) -> Self {
        Self::new(MessageLevel::Info, category, text)
    }

    /// Create a warning message
    pub fn warning<C: Into<String>, T: Into<String>>(category: C, text: T) -> Self {
        Self::new(MessageLevel::Warning, category, text)
    }

    /// Create an error message
    pub fn error<C: Into<String>, T: Into<String>>(category: C, text: T) -> Self {
        Self::new(MessageLevel::Error, category, text)
    }

    /// Check whether this message is an error
    pub fn is_error(&self) -> bool {
        self.level == MessageLevel::Error
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.category, self.text)
    }
}

/// Outcome of a validation pass
///
/// Errors make the result invalid; warnings do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validated subject can be used as-is
    pub is_valid: bool,
    /// Fatal problems
    pub errors: Vec<String>,
    /// Advisory problems
    pub warnings: Vec<String>,
}

// An empty result has no errors, so it passes.
impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl ValidationResult {
    /// A passing result with no diagnostics
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A failing result with a single error
    pub fn fail<S: Into<String>>(error: S) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    /// Build a result from accumulated messages
    ///
    /// Error-level messages become errors and mark the result invalid;
    /// warnings stay advisory; info messages are dropped.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut result = ValidationResult::ok();
        for message in messages {
            match message.level {
                MessageLevel::Error => {
                    result.is_valid = false;
                    result.errors.push(message.text.clone());
                }
                MessageLevel::Warning => result.warnings.push(message.text.clone()),
                MessageLevel::Info => {}
            }
        }
        result
    }

    /// Merge another result into this one
    ///
    /// Both error and warning lists are unioned; the merged result is valid
    /// only if both sides were.
    pub fn merge(&mut self, other: ValidationResult) {
        self.is_valid = self.is_valid && other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_display() {
        let m = Message::error("headers", "Missing column [Date]");
        assert_eq!(m.to_string(), "[ERROR] headers: Missing column [Date]");
        assert!(m.is_error());
        assert!(m.time > 0);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut a = ValidationResult::ok();
        a.warnings.push("w1".into());

        let b = ValidationResult::fail("e1");
        a.merge(b);

        assert!(!a.is_valid);
        assert_eq!(a.errors, vec!["e1".to_string()]);
        assert_eq!(a.warnings, vec!["w1".to_string()]);

        let mut c = ValidationResult::ok();
        c.merge(ValidationResult::ok());
        assert!(c.is_valid);
    }

    #[test]
    fn test_validation_result_default_is_valid() {
        assert_eq!(ValidationResult::default(), ValidationResult::ok());
        assert!(ValidationResult::default().is_valid);
    }

    #[test]
    fn test_from_messages() {
        let messages = vec![
            Message::info("x", "fyi"),
            Message::warning("x", "heads up"),
            Message::error("x", "broken"),
        ];
        let result = ValidationResult::from_messages(&messages);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["broken".to_string()]);
        assert_eq!(result.warnings, vec!["heads up".to_string()]);
    }
}
