use std::error::Error as _;
use std::io::{BufRead, Write};
use std::path::Path;

use mac_extract::Matcher;
use termcolor::WriteColor;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::files;
use crate::report::Report;

const MENU: &str = "\
MAC address finder
  1. Validate a MAC address
  2. Find MAC addresses in text
  3. Find MAC addresses in a file
  0. Exit
";

/// A line-mode interactive menu over any input and output.
///
/// Reads one line per prompt. End of input exits the menu cleanly, and a
/// failure inside an action (e.g. a missing file) is reported without ending
/// the session. The binary installs a Ctrl-C handler before running the
/// menu, which prints `interrupted` and exits with status 130.
pub struct Menu<'m, R, W> {
    matcher: &'m Matcher,
    input: R,
    report: Report<W>,
}

impl<'m, R: BufRead, W: WriteColor> Menu<'m, R, W> {
    pub fn new(matcher: &'m Matcher, input: R, report: Report<W>) -> Self {
        Menu {
            matcher,
            input,
            report,
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.report.get_mut(), "\n{}", MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };

            match choice.trim() {
                "1" => {
                    let Some(address) = self.prompt("MAC address: ")? else {
                        break;
                    };
                    self.report
                        .validation(&address, self.matcher.classify(&address))?;
                }
                "2" => {
                    let Some(text) = self.prompt("Text: ")? else {
                        break;
                    };
                    self.report
                        .extraction("<text>", &self.matcher.extract(&text))?;
                }
                "3" => {
                    let Some(path) = self.prompt("File path: ")? else {
                        break;
                    };
                    let path = path.trim();
                    match files::extract_from_file(self.matcher, Path::new(path)) {
                        Ok(extraction) => self.report.extraction(path, &extraction)?,
                        Err(err) => self.report_error(&err)?,
                    }
                }
                "0" | "q" | "quit" | "exit" => break,
                "" => continue,
                other => writeln!(self.report.get_mut(), "Unknown choice: {}", other)?,
            }
            self.report.flush()?;
        }

        debug!("interactive menu finished");
        Ok(())
    }

    /// Print `label` and read one line. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        let out = self.report.get_mut();
        write!(out, "{}", label)?;
        out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn report_error(&mut self, err: &Error) -> Result<()> {
        warn!(error = %err, "menu action failed");
        let out = self.report.get_mut();
        write!(out, "Error: {}", err)?;
        let mut source = err.source();
        while let Some(cause) = source {
            write!(out, ": {}", cause)?;
            source = cause.source();
        }
        writeln!(out)?;
        Ok(())
    }
}
