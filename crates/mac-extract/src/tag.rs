use serde::Serialize;
use std::io::{self, Write};
use std::ops::Range;

use crate::AddressFormat;

/// A tag representing a MAC address candidate found in text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// The candidate text itself.
    value: String,
    /// The byte range in the original text where the candidate was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<Range<usize>>,
    /// Whether the candidate passed strict validation.
    valid: bool,
    /// The strict format the candidate matched, if any.
    format: Option<AddressFormat>,
}

impl Tag {
    /// Create a new, not yet validated tag for a candidate.
    #[inline]
    pub fn new<S: Into<String>>(value: S) -> Tag {
        Tag {
            value: value.into(),
            range: None,
            valid: false,
            format: None,
        }
    }

    /// Set the byte range [start, end) where this tag was found in the original text.
    #[inline]
    #[must_use]
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Record the outcome of strict validation. `None` marks the candidate invalid.
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: Option<AddressFormat>) -> Self {
        self.valid = format.is_some();
        self.format = format;
        self
    }

    /// Get the candidate text.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the range of this tag in the original text, if available.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Option<&Range<usize>> {
        self.range.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    #[must_use]
    pub fn format(&self) -> Option<AddressFormat> {
        self.format
    }
}

/// A text with its candidate tags.
#[derive(Clone, Debug, Serialize)]
pub struct Tagged {
    #[serde(skip_serializing)]
    text: String,
    tags: Vec<Tag>,
    #[serde(rename = "data")]
    text_data: Option<TextData>,
}

/// Represents the text data for JSON serialization.
#[derive(Clone, Debug, Serialize)]
pub struct TextData {
    /// The original text.
    pub text: String,
}

impl Tagged {
    /// Create a new `Tagged` container for a text.
    #[inline]
    #[must_use]
    pub fn new(text: &str) -> Tagged {
        Tagged {
            text: text.to_owned(),
            tags: Vec::new(),
            text_data: None,
        }
    }

    /// Adds a tag to this text.
    ///
    /// The tag should contain a range that corresponds to its position in `self.text()`.
    #[inline]
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Get the tags in this text, in scan order.
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Iterate over the tags that passed strict validation.
    pub fn valid_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|tag| tag.is_valid())
    }

    /// Get the original text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the `Tagged` object as a single-line JSON object to the given writer.
    pub fn write_json<W: Write + ?Sized>(&mut self, wtr: &mut W) -> io::Result<()> {
        if self.text_data.is_none() {
            self.text_data = Some(TextData {
                text: self.text.clone(),
            });
        }
        serde_json::to_writer(wtr, self)?;
        Ok(())
    }
}
