use camino::Utf8PathBuf;
use std::fmt;
use std::io::{self, Read};

use crate::error::Result;
use crate::files;

/// A source that can be either a file or stdin.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum FileOrStdin {
    /// Input from a file.
    File(Utf8PathBuf),
    /// Input from stdin.
    #[default]
    Stdin,
}

impl fmt::Display for FileOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOrStdin::File(path) => write!(f, "{}", path),
            FileOrStdin::Stdin => write!(f, "<stdin>"),
        }
    }
}

impl FileOrStdin {
    /// Create a new FileOrStdin from a path.
    ///
    /// If the path is "-", stdin is used.
    pub fn from_path(path: Utf8PathBuf) -> Self {
        if path.as_str() == "-" {
            FileOrStdin::Stdin
        } else {
            FileOrStdin::File(path)
        }
    }

    /// Read the entire source as text, replacing invalid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        match self {
            FileOrStdin::File(path) => files::read_text(path.as_std_path()),
            FileOrStdin::Stdin => {
                let mut content = Vec::new();
                io::stdin().lock().read_to_end(&mut content)?;
                Ok(files::decode_lossy(content, self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(FileOrStdin::from_path("-".into()), FileOrStdin::Stdin);
        assert_eq!(
            FileOrStdin::from_path("arp.txt".into()),
            FileOrStdin::File("arp.txt".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FileOrStdin::Stdin.to_string(), "<stdin>");
        assert_eq!(FileOrStdin::File("a/b.log".into()).to_string(), "a/b.log");
    }
}
