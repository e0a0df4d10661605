//! Error types for the cipher crate.

use thiserror::Error;

/// Problems found while turning plugin parameters into a `DecoderConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown message position '{0}'. Expected Top, Middle or Bottom.")]
    UnknownPosition(String),

    #[error("Unknown message background '{0}'. Expected Opaque, Transparent or Invisible.")]
    UnknownBackground(String),

    #[error("Output line length must be at least 1")]
    ZeroLineWidth,

    #[error("Non-decode entry '{0}' is not a single character")]
    InvalidNonDecodeCharacter(String),
}

/// A plugin command that was recognized but could not be carried out.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command '{command}' is missing its {argument} argument")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
}

/// Failures while writing or reading a save payload.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save payload could not be encoded or decoded: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Could not move the save file into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// The umbrella error for everything the crate can report.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// A convenience `Result` type alias using the crate's `CipherError` type.
pub type Result<T> = std::result::Result<T, CipherError>;
