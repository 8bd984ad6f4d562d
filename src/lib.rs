//! The macsed library: finding and validating MAC addresses in text and files.
//!
//! The matching engine lives in the [`mac_extract`] crate; this crate wraps it
//! with text sources (files or stdin), result reporting and an interactive menu.
//!
//! # Examples
//!
//! ```rust,no_run
//! use macsed::{files, Matcher};
//! use std::path::Path;
//!
//! # fn main() -> macsed::Result<()> {
//! let matcher = Matcher::new();
//! let extraction = files::extract_from_file(&matcher, Path::new("/var/log/arp.log"))?;
//! println!("found {}, valid {}", extraction.found_count(), extraction.valid_count());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod files;
pub mod input;
pub mod menu;
pub mod report;

pub use crate::error::{Error, Result};
pub use mac_extract::{AddressFormat, Extraction, Matcher, MatcherBuilder, Tag, Tagged};
