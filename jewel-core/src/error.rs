use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while enumerating, evaluating or persisting jewel data.
#[derive(Debug, Error)]
pub enum JewelError {
    #[error("invalid {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },
    #[error("seed range invalid (min {min} > max {max} or scaled bound overflows)")]
    InvalidRange { min: u32, max: u32 },
    #[error("i/o failure on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to (de)serialize {}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JewelError {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by unrecognized user input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
