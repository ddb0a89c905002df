use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depsight operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepsightError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dependency edge is missing its requested selector or carries a
    /// malformed one.
    #[error("Invalid dependency edge ({edge}): {message}")]
    #[diagnostic(help("Every edge needs a requested selector and module versions may not be empty"))]
    InvalidEdge {
        edge: String,
        message: String,
    },

    /// A selector or identifier is neither a project nor a module component.
    #[error("Unexpected component kind '{kind}' for dependency edge: {edge}")]
    #[diagnostic(help("Only project (':path') and module ('group:module:version') components can be ordered"))]
    UnsupportedSelectorKind { edge: String, kind: String },

    /// An edge report could not be read or parsed.
    #[error("Edge report error: {message}")]
    Report { message: String },

    /// Invalid or unreadable configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.depsight/config.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepsightResult<T> = miette::Result<T>;
