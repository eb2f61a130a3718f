//! # Render Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for template operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Template loading and rendering errors
///
/// The first three only occur while loading the template set at startup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read template directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile template {name}: {source}")]
    Compile {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("missing required template: {0}")]
    MissingTemplate(String),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}
