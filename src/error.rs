use std::path::PathBuf;

/// Error types for the macsed library.
///
/// "No addresses found" is never an error; these cover only failures to
/// obtain the text or to build the matcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input path exists but could not be read.
    #[error("failed to read file {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matcher could not be built from the selected formats.
    #[error(transparent)]
    Matcher(#[from] mac_extract::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the library error.
pub type Result<T> = std::result::Result<T, Error>;
