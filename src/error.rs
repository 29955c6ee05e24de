//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned whenever a node of the
//! introspection document doesn't have the shape that the schema view expects.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which document lookup failures are converted into.
///
/// The error is split into a general message and a context string. For lookups, the context
/// string names the introspection node that was being read, e.g. the `__Type` or `__Field` whose
/// key was missing, which makes it easier to locate the problem in large introspection results.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] represents.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// A required key is absent from a document node.
    MissingField,
    /// A key is present but holds a value of the wrong JSON type or an unknown enum name.
    UnexpectedValue,
    /// The source text passed to [crate::schema::parse_document] isn't valid JSON.
    Syntax,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>, C: Into<String>>(
        message: S,
        context: C,
        error_type: ErrorType,
    ) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the context of the current error, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the kind of the current error.
    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::MissingField => {
                format!("Missing Field: {}", self.message)
            }
            ErrorType::UnexpectedValue => {
                format!("Unexpected Value: {}", self.message)
            }
            ErrorType::Syntax => {
                format!("Syntax Error: {}", self.message)
            }
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n  in {}", formatted, context),
            _ => formatted,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new_with_context(
            err.to_string(),
            format!("line {}, column {}", err.line(), err.column()),
            ErrorType::Syntax,
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_with_context() {
        let err = Error::new_with_context("`queryType`", "__schema", ErrorType::MissingField);
        assert_eq!(err.print(false), "Missing Field: `queryType`");
        assert_eq!(err.print(true), "Missing Field: `queryType`\n  in __schema");
        assert_eq!(err.to_string(), err.print(true));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ \"data\": ").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.error_type(), ErrorType::Syntax);
        assert!(err.context().unwrap().starts_with("line 1"));
    }
}
