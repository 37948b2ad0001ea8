use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if the error reports a caller-side misuse of a positional
    /// accessor: the position was out of range, the element was null, or the
    /// stored element has a different kind than the one requested.
    ///
    /// These errors indicate that the producer and the consumer of a value
    /// disagree about its logical type or size.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::PositionOutOfRange { .. }
                | ErrorKind::NullElement { .. }
                | ErrorKind::TypeMismatch { .. }
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn position_out_of_range(position: usize, len: usize) -> Error {
        Error(ErrorKind::PositionOutOfRange { position, len }.into())
    }

    pub fn null_element(position: usize) -> Error {
        Error(ErrorKind::NullElement { position }.into())
    }

    pub fn type_mismatch(
        position: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Error {
        Error(
            ErrorKind::TypeMismatch {
                position,
                expected: expected.into(),
                actual: actual.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("position {position} is out of range for {len} elements")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("element at position {position} is null")]
    NullElement { position: usize },

    #[error("element at position {position} is {actual}, requested {expected}")]
    TypeMismatch {
        position: usize,
        expected: String,
        actual: String,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_kinds() {
        assert!(Error::position_out_of_range(3, 3).is_contract_violation());
        assert!(Error::null_element(0).is_contract_violation());
        assert!(Error::type_mismatch(1, "Int", "Long").is_contract_violation());
        assert!(!Error::invalid_arg("data", "missing").is_contract_violation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::type_mismatch(2, "Boolean", "String").to_string(),
            "element at position 2 is String, requested Boolean"
        );
        assert_eq!(
            Error::position_out_of_range(5, 2).to_string(),
            "position 5 is out of range for 2 elements"
        );
        assert_eq!(
            Error::invalid_arg("scale", "scale <= precision").to_string(),
            "invalid argument scale: scale <= precision"
        );
    }

    #[test]
    fn test_into_kind() {
        match Error::null_element(7).into_kind() {
            ErrorKind::NullElement { position } => assert_eq!(position, 7),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
