use crate::Value;
use std::{error, fmt};
use thiserror::Error;

/// The different error types that can be produced by the value model
#[derive(Error, Clone, Debug)]
pub enum ErrorKind {
    /// A plain message, usually built via [value_error!](crate::value_error)
    #[error("{0}")]
    Message(String),
    /// A value of the wrong type was supplied to an operation
    #[error("expected {expected}, found {}", unexpected.type_as_str())]
    UnexpectedType {
        /// A description of the expected type
        expected: String,
        /// The value that was encountered instead
        unexpected: Value,
    },
    /// A string couldn't be converted into a number
    #[error("unable to parse '{input}' as a number")]
    InvalidNumber {
        /// The rejected input
        input: String,
    },
}

/// An error produced by the value model
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error's kind
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Modifies message errors to include the given prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        use ErrorKind::Message;

        self.kind = match self.kind {
            Message(message) => Message(format!("{prefix}: {message}")),
            other => other,
        };

        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl error::Error for Error {}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::new(ErrorKind::Message(error))
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Self::new(ErrorKind::Message(error.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The Result type used by the value model
pub type Result<T> = std::result::Result<T, Error>;

/// Creates an [Error] from a message (with format-like behaviour), wrapped in `Err`
#[macro_export]
macro_rules! value_error {
    ($error:literal) => {
        Err($crate::Error::from(format!($error)))
    };
    ($error:expr) => {
        Err($crate::Error::from($error))
    };
    ($error:literal, $($y:expr),+ $(,)?) => {
        Err($crate::Error::from(format!($error, $($y),+)))
    };
}

/// Creates an error that describes a type mismatch
pub fn unexpected_type<T>(expected: &str, unexpected: &Value) -> Result<T> {
    Err(ErrorKind::UnexpectedType {
        expected: expected.into(),
        unexpected: unexpected.clone(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_can_be_prefixed() {
        let error = Error::from("went wrong").with_prefix("setup");
        assert_eq!(error.to_string(), "setup: went wrong");
    }

    #[test]
    fn type_mismatches_name_the_offending_type() {
        let error = unexpected_type::<()>("a number", &Value::from("nope")).unwrap_err();
        assert_eq!(error.to_string(), "expected a number, found String");
    }
}
