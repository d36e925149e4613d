use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving, editing or persisting themes.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No theme is registered under the key.
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    /// The key does not name a theme field.
    #[error("unknown theme field `{0}`")]
    UnknownField(String),

    /// The value is not legal for the field's kind.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("theme json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors from a [`ThemeStorage`](crate::storage::ThemeStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read `{key}` from {path}")]
    Read {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{key}` to {path}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

/// Errors from the remote save endpoint.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("theme save request failed: {0}")]
    Transport(String),

    #[error("failed to encode theme: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for SaveError {
    fn from(err: reqwest::Error) -> Self {
        SaveError::Transport(err.to_string())
    }
}
