use std::fs;
use std::io::Write;
use std::path::Path;

use mac_extract::{Extraction, Matcher};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Decode bytes as UTF-8, replacing invalid sequences instead of failing.
pub(crate) fn decode_lossy(content: Vec<u8>, source: &dyn std::fmt::Display) -> String {
    match String::from_utf8(content) {
        Ok(text) => text,
        Err(err) => {
            warn!(%source, "input is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Read the whole file at `path` as text.
///
/// Invalid UTF-8 is replaced rather than reported. A missing path yields
/// [`Error::FileNotFound`]; any other failure yields [`Error::ReadFailed`].
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read(path).map_err(|source| Error::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input file");

    Ok(decode_lossy(content, &path.display()))
}

/// Read the file at `path` and extract MAC addresses from its contents.
pub fn extract_from_file(matcher: &Matcher, path: &Path) -> Result<Extraction> {
    let text = read_text(path)?;
    Ok(matcher.extract(&text))
}

/// Read the file at `path` and write its candidates as a line of tagged JSON.
pub fn tag_file(matcher: &Matcher, path: &Path, output: &mut dyn Write) -> Result<()> {
    let text = read_text(path)?;
    let mut tagged = matcher.tag(&text);
    tagged.write_json(output)?;
    writeln!(output)?;
    Ok(())
}
