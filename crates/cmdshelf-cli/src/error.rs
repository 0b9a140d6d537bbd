//! CLI error handling with semantic exit codes.
//!
//! Every failure that reaches `main` is mapped onto a small set of exit
//! codes so scripts can tell a missing collection from a broken file.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid names, arguments or configuration |
//! | 3 | `NotFound` | Collection or export snapshot not found |
//! | 4 | `Parse` | Collection, configuration or template does not decode |
//! | 5 | `Io` | Filesystem failure |
//! | 6 | `UnresolvedInput` | Required parameter left without a value |
//!
//! When a command is executed, its own exit status is propagated instead.
//!
//! # Usage
//!
//! ```bash
//! cmdshelf list -c missing
//! case $? in
//!     0) echo "Success" ;;
//!     3) echo "Collection not found" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments, names or configuration (exit code 2).
    Usage = 2,

    /// Requested collection or file not found (exit code 3).
    NotFound = 3,

    /// Collection, configuration or template content is malformed (exit code 4).
    Parse = 4,

    /// Filesystem failure (exit code 5).
    Io = 5,

    /// A required parameter has no value (exit code 6).
    UnresolvedInput = 6,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Parse => "parse error",
            Self::Io => "i/o error",
            Self::UnresolvedInput => "unresolved input",
        }
    }

    /// Map a core error onto its category.
    #[must_use]
    pub const fn from_core(err: &cmdshelf_core::Error) -> Self {
        use cmdshelf_core::Error;
        match err {
            Error::Io(_) => Self::Io,
            Error::NotFound(_) => Self::NotFound,
            Error::Parse(_) | Error::Template(_) => Self::Parse,
            Error::Config(_) | Error::InvalidName(_) => Self::Usage,
            Error::UnresolvedInput { .. } => Self::UnresolvedInput,
            Error::Serialization(_) => Self::Internal,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that carry neither a `CliError` nor a core error.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("not found")
            || msg_lower.contains("no such")
            || msg_lower.contains("does not exist")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("parse error")
            || msg_lower.contains("failed to parse")
            || msg_lower.contains("invalid toml")
        {
            return Self::Parse;
        }

        if msg_lower.contains("missing value") || msg_lower.contains("required parameter") {
            return Self::UnresolvedInput;
        }

        if msg_lower.contains("permission denied")
            || msg_lower.contains("io error")
            || msg_lower.contains("read-only")
        {
            return Self::Io;
        }

        if msg_lower.contains("invalid argument")
            || msg_lower.contains("invalid name")
            || msg_lower.contains("invalid value")
            || msg_lower.contains("cannot use")
        {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// ```rust,ignore
/// use cmdshelf_cli::error::CliError;
///
/// let err = CliError::usage(anyhow::anyhow!("--name is required when not interactive"));
/// assert_eq!(err.exit_code(), 2);
/// ```
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

// Display already shows the wrapped error, so the chain continues below it.
impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// Walks the error chain looking for a `CliError`, then for a core error,
/// and falls back to inferring the category from the message.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
        if let Some(core_err) = cause.downcast_ref::<cmdshelf_core::Error>() {
            return ErrorCategory::from_core(core_err).exit_code();
        }
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}
