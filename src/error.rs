use std::path::PathBuf;
use thiserror::Error;

use crate::canvas::PrimitiveId;

/// Errors reported by a [`Canvas`](crate::canvas::Canvas) implementation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// The handle does not refer to a primitive currently on the canvas
    #[error("No primitive {0} on the canvas")]
    UnknownPrimitive(PrimitiveId),
}

/// Errors that can occur while loading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
