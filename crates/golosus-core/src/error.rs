//! Unified error types for the golosus generator.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while preparing or generating a project.
///
/// Filesystem variants always carry the path that failed. Generation is not
/// transactional: when one of them is returned, everything written before the
/// failure stays on disk and the run can simply be repeated once the cause is
/// fixed.
#[derive(Error, Debug)]
pub enum GolosusError {
    // --- Input ---

    /// The project name or author identifier was rejected by validation.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    // --- Configuration ---

    /// An explicitly requested configuration file could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Materialization ---

    /// A project folder could not be created.
    #[error(
        "failed to create directory {path} (generation stopped; files written so far were kept, re-run after fixing the cause)"
    )]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project file could not be created or truncated.
    #[error(
        "failed to create file {path} (generation stopped; files written so far were kept, re-run after fixing the cause)"
    )]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project file was created but its content could not be written.
    #[error(
        "failed to write file {path} (generation stopped; files written so far were kept, re-run after fixing the cause)"
    )]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, GolosusError>`.
pub type Result<T> = std::result::Result<T, GolosusError>;
