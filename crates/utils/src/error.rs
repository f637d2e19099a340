//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
/// The error type for `femtools_utils`
pub enum Error {
    /// Ran out of tokens before the expected value
    UnexpectedEndOfInput {
        /// Description of the value that was expected
        expected: String,
        /// 1-based position of the missing token
        position: usize,
    },

    /// A token could not be interpreted as the expected value
    InvalidToken {
        /// Description of the value that was expected
        expected: String,
        /// The offending token
        found: String,
        /// 1-based position of the token
        position: usize,
    },
}

// error boilerplate, these end up in front of users so keep them readable
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::UnexpectedEndOfInput { expected, position } => {
                write!(fmt, "missing {expected} (token {position})")
            }
            Self::InvalidToken {
                expected,
                found,
                position,
            } => write!(fmt, "expected {expected} but found \"{found}\" (token {position})"),
        }
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
