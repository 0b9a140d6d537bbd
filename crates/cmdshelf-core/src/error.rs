//! Error types and handling for cmdshelf-core operations.
//!
//! Every fallible operation in the core returns [`Result<T>`]. Errors are
//! grouped into a small number of categories so the CLI can map them onto
//! exit codes without matching on message text.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading or writing collection and configuration files
//! - **Not Found**: a collection that exists in no configured directory
//! - **Parse Errors**: collection or configuration files that do not decode
//! - **Invalid Names**: collection names that are unsafe as file names
//! - **Template Errors**: templates the scanner refuses (nested blocks)
//! - **Unresolved Input**: a required parameter with no value and no default
//!
//! ```rust
//! use cmdshelf_core::Error;
//!
//! let err = Error::UnresolvedInput { parameter: "host".to_string() };
//! assert_eq!(err.category(), "unresolved_input");
//! ```

use thiserror::Error;

/// The main error type for cmdshelf-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading and writing collection files, the configuration file,
    /// and creating directories. The underlying `std::io::Error` is kept so
    /// callers can inspect the kind.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested collection or file does not exist in any configured location.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collection or configuration file does not decode into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Home directory cannot be determined
    #[error("Configuration error: {0}")]
    Config(String),

    /// Collection name cannot be used as a file name.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// Template could not be scanned.
    ///
    /// Raised for nested optional blocks, which the scanner does not support.
    #[error("Template error: {0}")]
    Template(String),

    /// A required parameter has neither a supplied value nor a default.
    ///
    /// Callers that can prompt should ask again and retry the expansion.
    #[error("Missing value for required parameter '{parameter}'")]
    UnresolvedInput {
        /// Name of the parameter that could not be resolved.
        parameter: String,
    },

    /// Serialization of a collection or configuration failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Used for structured log fields and for exit code mapping in the CLI.
    ///
    /// - `"io"` - File system operations
    /// - `"not_found"` - Missing collections or files
    /// - `"parse"` - Undecodable collection or configuration content
    /// - `"config"` - Configuration location problems
    /// - `"invalid_name"` - Unsafe collection names
    /// - `"template"` - Template scanning failures
    /// - `"unresolved_input"` - Required parameter without a value
    /// - `"serialization"` - Encoding failures
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::NotFound(_) => "not_found",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::InvalidName(_) => "invalid_name",
            Self::Template(_) => "template",
            Self::UnresolvedInput { .. } => "unresolved_input",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
