use thiserror::Error;

/// The kind of an [`Error`].
///
/// Input errors are raised while building frameworks and extensions.
/// Request errors are raised when the engine is asked for something it does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data used to build a framework or an extension is malformed
    InvalidInput,
    /// The requested computation is not supported
    InvalidRequest,
}

/// The errors returned by the library.
///
/// Computations that legitimately have no extension never fail;
/// they return an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument name is not made of exactly one letter.
    #[error(r#"invalid argument name "{0}" (expected exactly one letter)"#)]
    InvalidArgumentName(String),

    /// A directional edge label is not made of exactly two letters.
    #[error(r#"invalid edge label "{0}" (expected exactly two letters)"#)]
    InvalidEdgeLabel(String),

    /// An attack string contains a character that is not a letter.
    #[error(r#"invalid character {1:?} in the attacks of argument {0}"#)]
    InvalidAttackString(char, char),

    /// Two arguments share the same name.
    #[error("argument {0} is defined more than once")]
    DuplicateArgument(char),

    /// An attack refers to an argument that does not exist.
    #[error("cannot add an attack from {0} to {1}: no such argument {2}")]
    UnknownAttackEndpoint(char, char, char),

    /// An argument does not belong to the framework an extension is built on.
    #[error("argument {0} does not belong to the framework")]
    ForeignArgument(char),

    /// The semantics is unknown or not supported.
    #[error(r#"unsupported semantics "{0}""#)]
    UnsupportedSemantics(String),

    /// The query is unknown.
    #[error(r#"undefined query "{0}""#)]
    UndefinedQuery(String),

    /// A problem string is not of the form `QUERY-SEMANTICS`.
    #[error(r#"invalid problem string "{0}""#)]
    InvalidProblemString(String),

    /// The framework is too large to enumerate its subsets.
    #[error("the framework has {0} arguments, which exceeds the limit of {1}")]
    TooManyArguments(usize, usize),
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgumentName(_)
            | Error::InvalidEdgeLabel(_)
            | Error::InvalidAttackString(_, _)
            | Error::DuplicateArgument(_)
            | Error::UnknownAttackEndpoint(_, _, _)
            | Error::ForeignArgument(_) => ErrorKind::InvalidInput,
            Error::UnsupportedSemantics(_)
            | Error::UndefinedQuery(_)
            | Error::InvalidProblemString(_)
            | Error::TooManyArguments(_, _) => ErrorKind::InvalidRequest,
        }
    }
}

/// A result type whose error is an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            ErrorKind::InvalidInput,
            Error::InvalidArgumentName("ab".to_string()).kind()
        );
        assert_eq!(
            ErrorKind::InvalidInput,
            Error::UnknownAttackEndpoint('A', 'Z', 'Z').kind()
        );
        assert_eq!(
            ErrorKind::InvalidRequest,
            Error::UnsupportedSemantics("SST".to_string()).kind()
        );
        assert_eq!(ErrorKind::InvalidRequest, Error::TooManyArguments(30, 16).kind());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            "cannot add an attack from A to Z: no such argument Z",
            Error::UnknownAttackEndpoint('A', 'Z', 'Z').to_string()
        );
        assert_eq!(
            r#"invalid edge label "ABC" (expected exactly two letters)"#,
            Error::InvalidEdgeLabel("ABC".to_string()).to_string()
        );
    }
}
