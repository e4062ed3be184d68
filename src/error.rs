//! Error types for session loading.
//!
//! The formatter and classifier never fail: missing information degrades to
//! the `"N/A"` / `"Unknown"` sentinels. Errors only arise where session data
//! is read from disk or parsed, and every variant carries enough context to
//! report the failure upstream.
//!
//! ```rust
//! use pitboard::PitboardError;
//!
//! let error = PitboardError::source_failed("snapshot feed stalled");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionKey;

/// Result type alias for session operations.
pub type Result<T, E = PitboardError> = std::result::Result<T, E>;

/// Main error type for session loading and parsing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PitboardError {
    #[error("Session file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("No session data found for {key}")]
    SessionNotFound { key: SessionKey },

    #[error("Invalid session key: {reason}")]
    InvalidSessionKey { reason: String },

    #[error("Session source failed: {reason}")]
    Source {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PitboardError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            PitboardError::Source { .. } => true,
            PitboardError::SessionNotFound { .. } => true,
            PitboardError::File { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::WouldBlock
                    | std::io::ErrorKind::TimedOut
            ),
            PitboardError::Parse { .. } => false,
            PitboardError::InvalidSessionKey { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            PitboardError::File { .. } => vec![
                "Check the snapshot file exists and is readable",
                "Verify the snapshot directory layout (<year>/<round>/<kind>.yaml)",
                "Check file permissions",
            ],
            PitboardError::Parse { .. } => vec![
                "Check the snapshot is valid YAML or JSON",
                "Verify field names match the session snapshot schema",
                "Re-export the session from the data source",
            ],
            PitboardError::SessionNotFound { .. } => vec![
                "Try another round or year",
                "Wait for the session to start publishing data",
            ],
            PitboardError::InvalidSessionKey { .. } => vec![
                "Use a season from 2018 onwards",
                "Use a round number between 1 and 24",
            ],
            PitboardError::Source { .. } => vec![
                "Retry after the refresh interval",
                "Check the session source is reachable",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        PitboardError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        PitboardError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for invalid session keys.
    pub fn invalid_session_key(reason: impl Into<String>) -> Self {
        PitboardError::InvalidSessionKey { reason: reason.into() }
    }

    /// Helper constructor for source failures.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        PitboardError::Source { reason: reason.into(), source: None }
    }

    /// Helper constructor for source failures with an underlying cause.
    pub fn source_failed_with(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        PitboardError::Source { reason: reason.into(), source: Some(source) }
    }
}

impl From<serde_yaml_ng::Error> for PitboardError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        PitboardError::Parse { context: "YAML deserialization".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionKind;

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_messages_carry_their_context(
                reason in ".*",
                context in "\\w+",
                details in ".*"
            ) {
                let source_msg = PitboardError::source_failed(reason.clone()).to_string();
                prop_assert!(source_msg.contains(&reason));

                let parse_msg = PitboardError::parse_error(context.clone(), details.clone()).to_string();
                prop_assert!(parse_msg.contains(&context));
                prop_assert!(parse_msg.contains(&details));

                let key_msg = PitboardError::invalid_session_key(reason.clone()).to_string();
                prop_assert!(key_msg.contains(&reason));
            }
        }
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<PitboardError>();

        let error = PitboardError::source_failed("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn retry_classification() {
        let key = SessionKey::new(2024, 3, SessionKind::Race).unwrap();
        assert!(PitboardError::SessionNotFound { key }.is_retryable());
        assert!(PitboardError::source_failed("feed").is_retryable());
        assert!(!PitboardError::parse_error("snapshot", "bad yaml").is_retryable());
        assert!(!PitboardError::invalid_session_key("round 0").is_retryable());

        let missing = PitboardError::file_error(
            PathBuf::from("/nope.yaml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!missing.is_retryable());

        let interrupted = PitboardError::file_error(
            PathBuf::from("/busy.yaml"),
            std::io::Error::new(std::io::ErrorKind::Interrupted, "signal"),
        );
        assert!(interrupted.is_retryable());
    }

    #[test]
    fn recovery_suggestions_are_descriptive() {
        let errors = [
            PitboardError::source_failed("x"),
            PitboardError::parse_error("x", "y"),
            PitboardError::invalid_session_key("x"),
        ];
        for error in &errors {
            let suggestions = error.recovery_suggestions();
            assert!(!suggestions.is_empty());
            assert!(suggestions.iter().all(|s| s.len() > 5));
        }
    }

    #[test]
    fn source_chain_is_preserved() {
        let io = std::io::Error::other("disk unplugged");
        let error = PitboardError::source_failed_with("reload failed", Box::new(io));
        let source = std::error::Error::source(&error).expect("source attached");
        assert!(source.to_string().contains("disk unplugged"));
    }

    #[test]
    fn yaml_errors_convert_to_parse() {
        let err = serde_yaml_ng::from_str::<Vec<u32>>("[1, two]").unwrap_err();
        let converted: PitboardError = err.into();
        assert!(matches!(converted, PitboardError::Parse { .. }));
    }
}
