use thiserror::Error;

/// Result type returned by every fallible `BigInt` operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when an operand or a rendering request is rejected.
///
/// The receiver of a failed operation is never modified.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A native number is too large to carry integer precision, is not an
    /// integer, or a value does not fit a narrowing conversion.
    #[error("{reason}")]
    OutOfRange {
        reason: String,
    },

    /// A string is not a valid numeral.
    #[error("value '{input}' is malformed: {reason}")]
    Parse {
        input: String,
        reason: &'static str,
    },

    /// An argument to a rendering or parsing call is not supported.
    #[error("{reason}")]
    InvalidArgument {
        reason: String,
        /// Zero-based position of the rejected argument.
        argument: usize,
        /// Kind of value supplied, for superfluous arguments.
        type_name: Option<&'static str>,
    },
}

/// Category of an [`Error`], for programmatic dispatch.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    OutOfRange,
    Parse,
    InvalidArgument,
}

impl ErrorKind {
    /// Name under which errors of this kind are reported.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::OutOfRange => "OutOfRangeError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::InvalidArgument => "InvalidArgumentError",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind().name()`.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub(crate) fn out_of_range(reason: impl Into<String>) -> Self {
        Error::OutOfRange { reason: reason.into() }
    }

    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Error::Parse { input: input.to_owned(), reason }
    }

    pub(crate) fn bad_radix(radix: u32, argument: usize) -> Self {
        Error::InvalidArgument {
            reason: format!("radix {} is outside the supported range 2..=36", radix),
            argument,
            type_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Error::out_of_range("x").name(), "OutOfRangeError");
        assert_eq!(Error::parse("x", "y").name(), "ParseError");
        assert_eq!(Error::bad_radix(1, 0).name(), "InvalidArgumentError");
    }

    #[test]
    fn test_messages() {
        let e = Error::parse("12z", "invalid digit");
        assert_eq!(e.to_string(), "value '12z' is malformed: invalid digit");

        let e = Error::bad_radix(37, 0);
        assert_eq!(e.to_string(), "radix 37 is outside the supported range 2..=36");
        assert!(matches!(e, Error::InvalidArgument { argument: 0, type_name: None, .. }));
    }
}
