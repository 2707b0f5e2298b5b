//! Error handling for the indigo application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for indigo operations.
///
/// This enum represents all possible errors that can occur within the indigo
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Represents errors in the interactive prompt flow
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents missing or invalid environment configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a failure to reach the database catalog
    #[error("Database connection error: {0}.")]
    ConnectionError(sqlx::Error),

    /// Represents a failure of the catalog metadata query itself
    #[error("Catalog query error: {0}.")]
    CatalogError(sqlx::Error),
}

/// Convenience type alias for Results with indigo's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
