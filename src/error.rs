use std::io;

use thiserror::Error;

/// Error returned when a bulk load cannot be applied.
///
/// A failed load never leaves the registry partially updated: either every record of the source
/// is merged, or none is.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("flag source unavailable: {source}")]
    SourceUnavailable {
        #[source]
        source: io::Error,
    },

    /// The source was read but its content is not an array of flag records.
    #[error("malformed flag source: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True when the failure came from opening or reading the source.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, LoadError::SourceUnavailable { .. })
    }

    /// True when the source content could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode { .. })
    }
}

impl From<io::Error> for LoadError {
    fn from(source: io::Error) -> Self {
        LoadError::SourceUnavailable { source }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        // serde_json reports failures of the underlying reader through its own error type
        if source.is_io() {
            LoadError::SourceUnavailable {
                source: source.into(),
            }
        } else {
            LoadError::Decode { source }
        }
    }
}

/// Error returned by [crate::Registry::get_flag] when no flag is stored under the name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("flag not found: {name}")]
pub struct NotFound {
    /// Name that was looked up.
    pub name: String,
}
