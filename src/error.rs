use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}.")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required field '{0}'.")]
    MissingField(&'static str),

    /// The message format is matched on by callers and must not change.
    #[error("invalid backend type: {0}")]
    InvalidBackendType(String),

    #[error("Failed to resolve working directory: {0}.")]
    PathResolution(std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// A template referenced a value that is not present in the render context.
    #[error("Unresolved reference in template '{template}': {reason}")]
    UnresolvedReference { template: String, reason: String },

    #[error("Failed to traverse template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateNotFound { template_dir: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with liftoff's [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
