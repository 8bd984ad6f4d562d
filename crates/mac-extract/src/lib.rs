//! Two-stage MAC address extraction and validation engine.
//!
//! `mac-extract` finds MAC-address-shaped tokens in unstructured text and tells
//! you which of them are legal addresses. It works in two independent stages:
//!
//! - **Candidate scan**: a permissive pattern accepts any ASCII letter or digit
//!   at digit positions, so near misses like `00:1B:44:11:3A:GG` are surfaced.
//! - **Strict validation**: an anchored, hex-only pattern decides whether a
//!   token is a legal address.
//!
//! Three layouts are understood: `00:1B:44:11:3A:B8` (or `-` separated),
//! `BC4F.19C1.7A6E` and `0123456789AB`.
//!
//! ## Quick Start
//!
//! ```
//! let result = mac_extract::extract("gw 00:1B:44:11:3A:B8, bogus 00:1B:44:11:3A:GG");
//! assert_eq!(result.all_found, ["00:1B:44:11:3A:B8", "00:1B:44:11:3A:GG"]);
//! assert_eq!(result.valid, ["00:1B:44:11:3A:B8"]);
//!
//! assert!(mac_extract::is_valid("  BC4F.19C1.7A6E\n"));
//! assert!(!mac_extract::is_valid("11:22:33:44:55"));
//! ```
//!
//! ## Configuration
//!
//! Use [`MatcherBuilder`] to restrict the accepted layouts:
//!
//! ```
//! use mac_extract::MatcherBuilder;
//!
//! # fn main() -> Result<(), mac_extract::Error> {
//! let matcher = MatcherBuilder::new()
//!     .bare(false)                 // Skip 12-digit runs
//!     .consistent_delimiters(true) // Reject 00:1B-44:11-3A:B8
//!     .build()?;
//!
//! assert!(matcher.is_valid("00-1B-44-11-3A-B8"));
//! assert!(!matcher.is_valid("00:1B-44:11-3A:B8"));
//! assert!(!matcher.is_valid("001B44113AB8"));
//! # Ok(())
//! # }
//! ```

use std::ops::Range;
use std::sync::OnceLock;

use regex_automata::meta::Regex;
use regex_automata::MatchKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;
mod format;
mod tag;

pub use error::{Error, Result};
pub use format::AddressFormat;
pub use tag::{Tag, Tagged, TextData};

use format::{HEX_DIGIT, SCAN_DIGIT};

static DEFAULT_MATCHER: OnceLock<Matcher> = OnceLock::new();

fn default_matcher() -> &'static Matcher {
    DEFAULT_MATCHER.get_or_init(|| {
        MatcherBuilder::new()
            .build()
            .expect("built-in MAC patterns compile")
    })
}

/// The outcome of scanning a text: every candidate, and the ones that are valid.
///
/// `valid` is always a subsequence of `all_found`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Candidates that passed strict validation, in scan order.
    pub valid: Vec<String>,
    /// Every candidate found, in scan order, duplicates included.
    pub all_found: Vec<String>,
}

impl Extraction {
    /// Number of candidates found, duplicates included.
    #[inline]
    pub fn found_count(&self) -> usize {
        self.all_found.len()
    }

    /// Number of candidates that passed strict validation.
    #[inline]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Returns true when no candidate was found at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all_found.is_empty()
    }

    /// Candidates that failed strict validation, in scan order.
    ///
    /// Walks `all_found` against `valid`: since `valid` is a subsequence, any
    /// candidate that is not the next expected valid entry was rejected.
    pub fn invalid(&self) -> Vec<&str> {
        let mut pending = self.valid.iter().peekable();
        let mut invalid =
            Vec::with_capacity(self.all_found.len().saturating_sub(self.valid.len()));
        for candidate in &self.all_found {
            if pending.peek() == Some(&candidate) {
                pending.next();
            } else {
                invalid.push(candidate.as_str());
            }
        }
        invalid
    }
}

/// The MAC address matcher.
///
/// A `Matcher` holds two compiled patterns: a permissive one used to scan for
/// candidates and a strict, anchored one used to validate tokens. It is
/// immutable once built and cheap to clone, so it can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct Matcher {
    candidates: Regex,
    strict: Regex,
    /// Enabled formats, indexed by pattern id in both regexes.
    formats: Vec<AddressFormat>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Return a matcher accepting all three layouts with permissive delimiters.
    pub fn new() -> Matcher {
        default_matcher().clone()
    }

    /// Shortcut for [`MatcherBuilder::new`].
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    /// The layouts this matcher accepts, in scan priority order.
    pub fn formats(&self) -> &[AddressFormat] {
        &self.formats
    }

    /// Find all candidates in `text`.
    ///
    /// Returns an iterator of byte ranges `[start, end)` pointing to each
    /// candidate, left to right and non-overlapping. A match is part of a
    /// longer run, and skipped, when the byte next to it on either side is an
    /// ASCII letter or digit, or is one of its layout's separators followed by
    /// a letter or digit. Scanning resumes after a skipped match.
    ///
    /// # Example
    ///
    /// ```
    /// let matcher = mac_extract::Matcher::new();
    /// let text = "port1 0123456789AB port2 0123456789ABCDEF id 00:11:22:33:44:55:66";
    /// let found: Vec<&str> = matcher.find_iter(text).map(|r| &text[r]).collect();
    /// assert_eq!(found, ["0123456789AB"]);
    /// ```
    #[inline]
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        let bytes = text.as_bytes();
        self.candidates.find_iter(text).filter_map(move |m| {
            let (start, end) = (m.start(), m.end());
            let separators = self.formats[m.pattern().as_usize()].separators();
            let before = |n: usize| start.checked_sub(n).and_then(|i| bytes.get(i)).copied();
            let after = |n: usize| bytes.get(end + n - 1).copied();

            // Left boundary: reject if the run extends to the left
            if extends(before(1), before(2), separators) {
                return None;
            }

            // Right boundary: reject if the run extends to the right
            if extends(after(1), after(2), separators) {
                return None;
            }

            Some(start..end)
        })
    }

    /// Find all candidates in `text`, in order of appearance, duplicates included.
    pub fn find_candidates(&self, text: &str) -> Vec<String> {
        self.find_iter(text)
            .map(|range| text[range].to_string())
            .collect()
    }

    /// Check whether `token`, once surrounding whitespace is trimmed, is a
    /// valid MAC address in one of the accepted layouts.
    #[inline]
    pub fn is_valid(&self, token: &str) -> bool {
        self.strict.is_match(token.trim())
    }

    /// Return the layout a valid `token` uses, or `None` if it is invalid.
    pub fn classify(&self, token: &str) -> Option<AddressFormat> {
        let m = self.strict.find(token.trim())?;
        Some(self.formats[m.pattern().as_usize()])
    }

    /// Scan `text` for candidates and split out the valid ones.
    pub fn extract(&self, text: &str) -> Extraction {
        let all_found = self.find_candidates(text);
        let valid: Vec<String> = all_found
            .iter()
            .filter(|candidate| self.is_valid(candidate))
            .cloned()
            .collect();

        debug!(
            found = all_found.len(),
            valid = valid.len(),
            "extracted MAC address candidates"
        );

        Extraction { valid, all_found }
    }

    /// Scan `text` and return every candidate as a positioned, validated [`Tag`].
    pub fn tag(&self, text: &str) -> Tagged {
        let mut tagged = Tagged::new(text);
        for range in self.find_iter(text) {
            let value = &text[range.clone()];
            let format = self.classify(value);
            tagged = tagged.tag(Tag::new(value).with_range(range).with_format(format));
        }
        tagged
    }
}

/// A builder for configuring which MAC address layouts are accepted.
///
/// Every layout is enabled by default and the delimited layout accepts `:` and
/// `-` independently at each separator.
///
/// # Example
///
/// ```
/// use mac_extract::{AddressFormat, MatcherBuilder};
///
/// let matcher = MatcherBuilder::new().dotted(false).build().unwrap();
/// assert_eq!(matcher.formats(), [AddressFormat::Delimited, AddressFormat::Bare]);
/// ```
#[derive(Clone, Debug)]
pub struct MatcherBuilder {
    include_delimited: bool,
    include_dotted: bool,
    include_bare: bool,
    consistent_delimiters: bool,
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Delimited (`00:1B:44:11:3A:B8`): enabled
    /// - Dotted (`BC4F.19C1.7A6E`): enabled
    /// - Bare (`0123456789AB`): enabled
    /// - Consistent delimiters: disabled
    pub fn new() -> Self {
        Self {
            include_delimited: true,
            include_dotted: true,
            include_bare: true,
            consistent_delimiters: false,
        }
    }

    /// Enable or disable the `:`/`-` separated six-group layout.
    pub fn delimited(&mut self, include: bool) -> &mut Self {
        self.include_delimited = include;
        self
    }

    /// Enable or disable the `.` separated three-group layout.
    pub fn dotted(&mut self, include: bool) -> &mut Self {
        self.include_dotted = include;
        self
    }

    /// Enable or disable the twelve-digit layout without separators.
    pub fn bare(&mut self, include: bool) -> &mut Self {
        self.include_bare = include;
        self
    }

    /// Require all five separators of a delimited address to be the same
    /// character. Applies to both the candidate scan and validation.
    ///
    /// Default: `false`
    pub fn consistent_delimiters(&mut self, consistent: bool) -> &mut Self {
        self.consistent_delimiters = consistent;
        self
    }

    fn includes(&self, format: AddressFormat) -> bool {
        match format {
            AddressFormat::Delimited => self.include_delimited,
            AddressFormat::Dotted => self.include_dotted,
            AddressFormat::Bare => self.include_bare,
        }
    }

    /// Build and return a [`Matcher`] with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFormats`] if every layout is disabled.
    pub fn build(&self) -> Result<Matcher> {
        let formats: Vec<AddressFormat> = AddressFormat::ALL
            .into_iter()
            .filter(|&format| self.includes(format))
            .collect();

        if formats.is_empty() {
            return Err(Error::NoFormats);
        }

        let consistent = self.consistent_delimiters;
        let scan_patterns: Vec<String> = formats
            .iter()
            .map(|format| format.pattern(SCAN_DIGIT, consistent))
            .collect();
        let strict_patterns: Vec<String> = formats
            .iter()
            .map(|format| format.anchored_pattern(HEX_DIGIT, consistent))
            .collect();

        // Leftmost-first so that pattern order decides ties at the same offset
        let candidates = Regex::builder()
            .configure(Regex::config().match_kind(MatchKind::LeftmostFirst))
            .build_many(&scan_patterns)?;
        let strict = Regex::new_many(&strict_patterns)?;

        debug!(?formats, consistent_delimiters = consistent, "built MAC matcher");

        Ok(Matcher {
            candidates,
            strict,
            formats,
        })
    }
}

/// Whether a match continues into `next`, with `beyond` the byte after that.
#[inline(always)]
fn extends(next: Option<u8>, beyond: Option<u8>, separators: &[u8]) -> bool {
    match next {
        Some(b) if b.is_ascii_alphanumeric() => true,
        Some(b) if separators.contains(&b) => beyond.is_some_and(|b| b.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Find all candidates in `text` using the default matcher.
pub fn find_candidates(text: &str) -> Vec<String> {
    default_matcher().find_candidates(text)
}

/// Check `token` against the default matcher's strict grammar.
pub fn is_valid(token: &str) -> bool {
    default_matcher().is_valid(token)
}

/// Classify `token` with the default matcher.
pub fn classify(token: &str) -> Option<AddressFormat> {
    default_matcher().classify(token)
}

/// Scan `text` with the default matcher.
pub fn extract(text: &str) -> Extraction {
    default_matcher().extract(text)
}
