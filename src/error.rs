//! Error types for todo.

use thiserror::Error;

/// All error types that can occur in todo.
#[derive(Error, Debug)]
pub enum TodoError {
    // Input errors (exit code: 1)
    /// The command token is not one of the recognized commands.
    #[error("Unknown command: {0} (expected one of: list, add, complete, edit, delete)")]
    UnknownCommand(String),

    /// A required positional argument was not supplied.
    #[error("Todo {0} is missing")]
    MissingArgument(&'static str),

    /// The id argument is not an integer.
    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    /// No todo has the requested id.
    #[error("Todo with id {0} not found")]
    NotFound(u32),

    /// Every id up to the maximum is taken, so no new todo can be added.
    #[error("No todo ids left: highest id is already {0}")]
    IdsExhausted(u32),

    /// Rendering the command output failed.
    #[error("Failed to format output")]
    Output(#[source] serde_json::Error),

    // Storage errors (exit code: 2)
    /// The backing file could not be read, written, or parsed.
    #[error("Failed to access todo file: {path}")]
    Storage {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    // Config errors (exit code: 3)
    /// Failed to read or parse the configuration file.
    #[error("Failed to read configuration: {0}")]
    ConfigError(String),
}

impl TodoError {
    /// Wraps any error raised while touching the backing file.
    pub fn storage(path: &std::path::Path, source: impl Into<anyhow::Error>) -> Self {
        Self::Storage {
            path: path.to_string_lossy().into_owned(),
            source: source.into(),
        }
    }

    /// Returns the process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand(_)
            | Self::MissingArgument(_)
            | Self::InvalidId(_)
            | Self::NotFound(_)
            | Self::IdsExhausted(_)
            | Self::Output(_) => 1,

            Self::Storage { .. } => 2,

            Self::ConfigError(_) => 3,
        }
    }
}
