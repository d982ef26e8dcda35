use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("page handle does not refer to a page in this document")]
    /// A page handle was used with a document that does not own it
    PageMissing,

    #[error("invalid report configuration: {0}")]
    /// [serde_json] failed to parse a configuration file
    Config(#[from] serde_json::Error),
}
