//! Error types for timer-chime.
//!
//! Every failure surfaces as a [`ChimeError`] carrying an [`ErrorCode`],
//! a message with context and, for I/O problems, the underlying cause.

use std::fmt;

/// Error codes identifying the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A synthesis or envelope parameter is out of range.
    /// Trigger: non-positive or non-finite duration/frequency, zero sample rate.
    InvalidParameter,

    /// The output file could not be created, written or finalized.
    /// Trigger: permissions, missing parent directory, disk full.
    IoFailure,

    /// A configuration file could not be read or parsed, or the summary
    /// could not be encoded as JSON.
    /// Trigger: missing file, malformed JSON, wrong field types, non-UTF-8 path.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::IoFailure => "IO_FAILURE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "Synthesis parameter is out of range",
            ErrorCode::IoFailure => "Failed to write the audio file",
            ErrorCode::InvalidConfig => "Configuration is unreadable, malformed or not encodable",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => {
                "Use a positive duration and frequency and a non-zero sample rate \
                 (e.g., --duration 1.0 --frequency 800 --sample-rate 44100)"
            }
            ErrorCode::IoFailure => {
                "Check that the parent directory exists and is writable, \
                 and that there is free disk space"
            }
            ErrorCode::InvalidConfig => {
                "Check that the config file exists and is valid JSON \
                 (e.g., {\"tone\": {\"duration\": 1.0}})"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for chime generation.
#[derive(Debug)]
pub struct ChimeError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ChimeError {
    /// Creates a new ChimeError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new ChimeError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_PARAMETER error naming the offending parameter.
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParameter,
            format!("Invalid {}: {}", name, reason.into()),
        )
    }

    /// Creates an IO_FAILURE error wrapping the underlying cause.
    pub fn io_failure(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let context = context.into();
        let message = format!("{}: {}", context, source);
        Self::with_source(ErrorCode::IoFailure, message, source)
    }

    /// Creates an INVALID_CONFIG error wrapping the underlying cause.
    pub fn invalid_config(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let context = context.into();
        let message = format!("{}: {}", context, source);
        Self::with_source(ErrorCode::InvalidConfig, message, source)
    }
}

impl fmt::Display for ChimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}. Recovery: {}",
            self.code,
            self.code.description(),
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for ChimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using ChimeError.
pub type Result<T> = std::result::Result<T, ChimeError>;
