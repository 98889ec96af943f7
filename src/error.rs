//! Error types shared by the producer, the renderer and the configuration loader.

use std::path::PathBuf;

use thiserror::Error;

/// Send or receive on a channel whose other end (or this end) has been closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("channel closed")]
pub struct ChannelClosed;

/// A record from a sample source that could not be turned into channel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed sample {record:?}: {reason}")]
pub struct MalformedSample {
    pub record: String,
    pub reason: String,
}

impl MalformedSample {
    pub fn new(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

/// Failure loading or validating a [`crate::config::PlotterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}
