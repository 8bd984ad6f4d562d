use std::io::{self, Write};

use mac_extract::{AddressFormat, Extraction};
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

/// Which outcome a line of output describes, for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Valid,
    Invalid,
}

impl Outcome {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Outcome::Valid => spec.set_fg(Some(Color::Green)),
            Outcome::Invalid => spec.set_fg(Some(Color::Red)),
        };
        spec
    }
}

#[derive(Serialize)]
struct ExtractionRecord<'a> {
    source: &'a str,
    #[serde(flatten)]
    extraction: &'a Extraction,
}

#[derive(Serialize)]
struct ValidationRecord<'a> {
    address: &'a str,
    valid: bool,
    format: Option<AddressFormat>,
}

/// Writes extraction and validation results for people or for machines.
///
/// Plain output is colored through any [`WriteColor`] sink; pass a
/// `termcolor::NoColor` or a stream built with `ColorChoice::Never` to
/// disable color.
pub struct Report<W> {
    out: W,
    json: bool,
    show_invalid: bool,
}

impl<W: WriteColor> Report<W> {
    pub fn new(out: W) -> Self {
        Report {
            out,
            json: false,
            show_invalid: false,
        }
    }

    /// Emit one JSON object per result instead of text.
    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Also list candidates that failed validation.
    #[must_use]
    pub fn show_invalid(mut self, show: bool) -> Self {
        self.show_invalid = show;
        self
    }

    fn colored(&mut self, outcome: Outcome, text: &str) -> io::Result<()> {
        self.out.set_color(&outcome.spec())?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    /// Report the result of validating a single address.
    pub fn validation(&mut self, address: &str, format: Option<AddressFormat>) -> io::Result<()> {
        let address = address.trim();
        if self.json {
            let record = ValidationRecord {
                address,
                valid: format.is_some(),
                format,
            };
            serde_json::to_writer(&mut self.out, &record)?;
            return writeln!(self.out);
        }

        write!(self.out, "{}: ", address)?;
        match format {
            Some(format) => self.colored(Outcome::Valid, &format!("valid ({})", format))?,
            None => self.colored(Outcome::Invalid, "invalid")?,
        }
        writeln!(self.out)
    }

    /// Report the candidates found in one source and which of them are valid.
    pub fn extraction(&mut self, source: &str, extraction: &Extraction) -> io::Result<()> {
        if self.json {
            let record = ExtractionRecord { source, extraction };
            serde_json::to_writer(&mut self.out, &record)?;
            return writeln!(self.out);
        }

        writeln!(
            self.out,
            "{}: found {}, valid {}",
            source,
            extraction.found_count(),
            extraction.valid_count()
        )?;

        if extraction.is_empty() {
            return writeln!(self.out, "No MAC addresses found.");
        }

        if !extraction.valid.is_empty() {
            writeln!(self.out, "Valid MAC addresses:")?;
            for (i, address) in extraction.valid.iter().enumerate() {
                write!(self.out, "  {}. ", i + 1)?;
                self.colored(Outcome::Valid, address)?;
                writeln!(self.out)?;
            }
        }

        let invalid = extraction.invalid();
        if self.show_invalid && !invalid.is_empty() {
            writeln!(self.out, "Invalid candidates:")?;
            for (i, candidate) in invalid.iter().enumerate() {
                write!(self.out, "  {}. ", i + 1)?;
                self.colored(Outcome::Invalid, candidate)?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
