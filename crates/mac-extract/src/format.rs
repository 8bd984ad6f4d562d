use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class accepted at digit positions while scanning for candidates.
///
/// Wider than hex: near misses such as `00:1B:44:11:3A:GG` are candidates
/// that then fail validation.
pub(crate) const SCAN_DIGIT: &str = "[0-9A-Za-z]";

/// Character class accepted at digit positions by strict validation.
pub(crate) const HEX_DIGIT: &str = "[0-9A-Fa-f]";

/// The textual layouts a MAC address may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// Six two-digit groups separated by `:` or `-`, e.g. `00:1B:44:11:3A:B8`.
    Delimited,
    /// Three four-digit groups separated by `.`, e.g. `BC4F.19C1.7A6E`.
    Dotted,
    /// Twelve digits with no separators, e.g. `0123456789AB`.
    Bare,
}

impl AddressFormat {
    /// All formats, in the priority order used when scanning.
    pub const ALL: [AddressFormat; 3] = [
        AddressFormat::Delimited,
        AddressFormat::Dotted,
        AddressFormat::Bare,
    ];

    /// Short lowercase name of the format.
    pub fn name(self) -> &'static str {
        match self {
            AddressFormat::Delimited => "delimited",
            AddressFormat::Dotted => "dotted",
            AddressFormat::Bare => "bare",
        }
    }

    /// Separator bytes joining the groups of this layout.
    pub(crate) fn separators(self) -> &'static [u8] {
        match self {
            AddressFormat::Delimited => b":-",
            AddressFormat::Dotted => b".",
            AddressFormat::Bare => b"",
        }
    }

    /// Unanchored pattern for this layout using `digit` as the digit class.
    ///
    /// With `consistent` set, the delimited layout only accepts addresses whose
    /// five separators are all the same character.
    pub(crate) fn pattern(self, digit: &str, consistent: bool) -> String {
        let d = digit;
        match self {
            AddressFormat::Delimited if consistent => {
                format!("(?:{d}{{2}}:){{5}}{d}{{2}}|(?:{d}{{2}}-){{5}}{d}{{2}}")
            }
            AddressFormat::Delimited => format!("(?:{d}{{2}}[:-]){{5}}{d}{{2}}"),
            AddressFormat::Dotted => format!("{d}{{4}}\\.{d}{{4}}\\.{d}{{4}}"),
            AddressFormat::Bare => format!("{d}{{12}}"),
        }
    }

    /// Pattern for this layout anchored at both ends of the haystack.
    pub(crate) fn anchored_pattern(self, digit: &str, consistent: bool) -> String {
        format!("^(?:{})$", self.pattern(digit, consistent))
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
