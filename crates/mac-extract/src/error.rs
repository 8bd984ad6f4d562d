/// Errors raised while building a [`Matcher`](crate::Matcher).
///
/// Matching itself never fails; only construction can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Every address format was disabled on the builder.
    #[error("no MAC address formats selected")]
    NoFormats,

    /// A generated pattern failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] regex_automata::meta::BuildError),
}

/// Convenience type alias for Results using the library error.
pub type Result<T> = std::result::Result<T, Error>;
