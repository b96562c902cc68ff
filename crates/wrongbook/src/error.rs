//! CLI error types.

use wrongbook_config::ConfigError;
use wrongbook_record::RecordError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Record(#[from] RecordError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
