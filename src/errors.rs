use std::{error, fmt};

/// Errors returned by [parse](crate::parse) and [parse_with](crate::parse_with).
///
/// Malformed cookie text never produces an error: segments without `=` are
/// dropped, duplicates are ignored and undecodable values are kept as they
/// are. The only failure is a caller passing something that is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input is absent (`None`) or is not valid UTF-8.
    InvalidArgument,
}

impl Error {
    /// Returns the fixed, matchable message for this error.
    pub const fn message(&self) -> &'static str {
        match self {
            Error::InvalidArgument => "argument str must be a string",
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors produced by the strict percent decoder [decode](crate::decode::percent::decode).
///
/// The default [PercentDecoder](crate::decode::PercentDecoder) swallows these and
/// returns the undecoded value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` is not followed by two hexadecimal digits.
    ///
    /// # Fields
    /// - `position`: byte offset of the offending `%`
    MalformedEscape { position: usize },

    /// The decoded bytes are not valid UTF-8 (e.g. `%FF`).
    InvalidUtf8,
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedEscape { position } => {
                write!(f, "Malformed percent escape: position={}", position)
            }
            DecodeError::InvalidUtf8 => {
                write!(f, "Percent-decoded bytes are not valid UTF-8")
            }
        }
    }
}
