//! Error types for spec conversion.
//!
//! Content problems (missing sections, wrong counts, unknown tokens) are not
//! raised one at a time. Every parser pushes them into an [`ErrorLog`] and the
//! pipeline keeps going, so a single run reports everything that is wrong with
//! all three locale files. Only at the end is a non-empty log turned into
//! [`ConvertError::Invalid`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a whole conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// One or more content errors were accumulated. No output is written.
    #[error("{} content error(s) found", .0.len())]
    Invalid(Vec<String>),

    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize spec: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// The accumulated messages, if this is a content failure.
    pub fn messages(&self) -> &[String] {
        match self {
            ConvertError::Invalid(messages) => messages,
            _ => &[],
        }
    }
}

/// Ordered collector of human-readable error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    messages: Vec<String>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True if any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// `Ok(value)` when nothing was logged, otherwise every message as
    /// [`ConvertError::Invalid`].
    pub fn into_result<T>(self, value: T) -> Result<T, ConvertError> {
        if self.messages.is_empty() {
            Ok(value)
        } else {
            Err(ConvertError::Invalid(self.messages))
        }
    }
}
