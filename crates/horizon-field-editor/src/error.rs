//! Error types for the field editor.
//!
//! Rendering never fails. Errors only come from loading configuration and
//! from widget events that do not fit the strategy they were delivered to.

use std::path::PathBuf;

use crate::dispatcher::FieldKind;

/// Result type alias for field editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the field editor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON configuration could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a known configuration format.
    #[error("Unsupported configuration format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A widget delivered an event its strategy cannot interpret.
    #[error("{kind} editor cannot handle a {event} event")]
    EventMismatch { kind: FieldKind, event: &'static str },

    /// A dropdown reported a key that is not part of the lookup table.
    #[error("Key '{key}' is not part of the lookup table")]
    UnknownLookupKey { key: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create an event mismatch error.
    pub fn event_mismatch(kind: FieldKind, event: &'static str) -> Self {
        Self::EventMismatch { kind, event }
    }

    /// Create an unknown lookup key error.
    pub fn unknown_lookup_key(key: impl Into<String>) -> Self {
        Self::UnknownLookupKey { key: key.into() }
    }

    /// Returns `true` if the error was caused by a widget event rather than
    /// by configuration.
    pub fn is_event_error(&self) -> bool {
        matches!(
            self,
            Self::EventMismatch { .. } | Self::UnknownLookupKey { .. }
        )
    }
}
