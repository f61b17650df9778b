use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to build archive. Original error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// A tool declares a handler kind the generator has no body for.
    #[error("Tool '{tool}' has unsupported handler type '{handler_type}'. Expected 'static' or 'api'.")]
    UnsupportedHandler { tool: String, handler_type: String },

    #[error("No project file found in '{project_dir}'. Tried: {project_files}.")]
    ProjectNotFound { project_dir: String, project_files: String },

    /// The project document does not have the expected shape.
    #[error("Invalid project definition: {0}")]
    ProjectSchemaError(String),

    /// Upstream validation rejected the project.
    #[error("Project validation failed:\n{}", .errors.join("\n"))]
    ValidationError { errors: Vec<String> },

    #[error("Cannot proceed: output '{output}' already exists. Use --force to overwrite it.")]
    OutputExistsError { output: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with toolsmith's Error as the error type.
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
