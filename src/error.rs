use core::fmt;

/// Error type for the library.
///
/// The convenience entry points ([`format`](crate::format) and the
/// [`NumberFormatter`](crate::NumberFormatter) methods) never surface these:
/// they map every failure to an empty [`FormattedObject`](crate::FormattedObject).
/// [`try_format`](crate::try_format) exposes them for callers that want to
/// distinguish bad input from a legitimately empty rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input was empty or contained no digits after sanitization.
    EmptyInput,
    /// The input could not be tokenized as a decimal string, e.g. it carried
    /// two decimal separators or an interior sign.
    Unparseable(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyInput => f.pad("Input contains no digits"),
            Self::Unparseable(ref input) => write!(f, "Input is not a decimal string: {input}"),
        }
    }
}
