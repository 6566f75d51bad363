use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text-utils
///
/// The string helpers themselves are total and never fail; only loading
/// configuration can produce an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error came from the filesystem rather than the config contents
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("expected a table");
        assert_eq!(err.to_string(), "Configuration error: expected a table");

        let err = Error::validation("delimiters must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: delimiters must not be empty"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(err.is_io());
        assert!(err.to_string().starts_with("IO error:"));
        assert!(!Error::config("x").is_io());
    }
}
