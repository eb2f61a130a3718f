//! # Page Store Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Page store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been saved under this title
    #[error("page does not exist: {0}")]
    NotExist(String),

    #[error("I/O error for page {title}: {source}")]
    Io {
        title: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot create storage root {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn io(title: impl Into<String>, source: io::Error) -> Self {
        StoreError::Io {
            title: title.into(),
            source,
        }
    }

    /// Map a backend read error, singling out "not found"
    pub fn from_read(title: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotExist(title.into())
        } else {
            Self::io(title, source)
        }
    }

    pub fn is_not_exist(&self) -> bool {
        matches!(self, StoreError::NotExist(_))
    }
}
