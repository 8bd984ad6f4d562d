use anyhow::{Context, Error, Result};
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use termcolor::{BufferedStandardStream, ColorChoice};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Use modules from the library instead of redefining them
use macsed::menu::Menu;
use macsed::report::Report;
use macsed::{files, input, Matcher, MatcherBuilder};
use input::FileOrStdin;

/// Find the first I/O error in the chain, looking inside library errors too.
fn io_error_kind(err: &Error) -> Option<io::ErrorKind> {
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        if let Some(macsed::Error::Io(io_err)) = cause.downcast_ref::<macsed::Error>() {
            return Some(io_err.kind());
        }
    }
    None
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Validate a single MAC address. May be given more than once; exits
    /// nonzero if any address is invalid
    #[clap(short, long, value_name = "ADDR")]
    address: Vec<String>,

    /// Find and validate MAC addresses in the given text. May be given more than once
    #[clap(short, long, value_name = "TEXT")]
    text: Vec<String>,

    /// Run the interactive menu (default when no input is given and stdin is a terminal)
    #[clap(short, long, conflicts_with_all = &["address", "text", "input", "json", "tag"])]
    interactive: bool,

    /// Output results as JSON, one object per line
    #[clap(long)]
    json: bool,

    /// Output every candidate with its position and validity as JSON, one line per input
    #[clap(long, conflicts_with_all = &["json", "address"])]
    tag: bool,

    /// Also list candidates that failed validation
    #[clap(long)]
    all: bool,

    /// Use markers to highlight valid and invalid addresses
    #[clap(short = 'C', long, value_enum, default_value_t = ArgsColorChoice::Auto, env = "MACSED_COLOR")]
    color: ArgsColorChoice,

    /// Do not accept six-group addresses separated by ':' or '-'
    #[clap(long)]
    no_delimited: bool,

    /// Do not accept three-group addresses separated by '.'
    #[clap(long)]
    no_dotted: bool,

    /// Do not accept twelve hex digits without separators
    #[clap(long)]
    no_bare: bool,

    /// Require the same separator throughout a ':'/'-' delimited address
    #[clap(long)]
    strict_delimiters: bool,

    /// Increase logging verbosity (-v debug, -vv trace). RUST_LOG also works
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file(s) to process. Use "-" to read from stdin
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    input: Vec<Utf8PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum ArgsColorChoice {
    Always,
    Never,
    Auto,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Finish the prompt line and say why the menu stopped.
fn report_interrupt(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "interrupted")?;
    out.flush()
}

fn main() -> ExitCode {
    // Use a separate run function to handle the actual work
    let err = match run_main() {
        Ok(code) => return code,
        Err(err) => err,
    };

    match io_error_kind(&err) {
        // Handle broken pipe errors gracefully
        Some(io::ErrorKind::BrokenPipe) => return ExitCode::SUCCESS,
        Some(io::ErrorKind::Interrupted) => {
            let _ = writeln!(&mut io::stderr(), "interrupted");
            return ExitCode::from(130);
        }
        _ => {}
    }

    // Print detailed error information based on environment variables
    if std::env::var("RUST_BACKTRACE").is_ok_and(|v| v == "1")
        && std::env::var("RUST_LIB_BACKTRACE").map_or(true, |v| v == "1")
    {
        let _ = writeln!(&mut io::stderr(), "{:?}", err);
    } else {
        let _ = writeln!(&mut io::stderr(), "{:#}", err);
    }

    ExitCode::FAILURE
}

fn run_main() -> Result<ExitCode> {
    let mut args = Args::parse();
    init_logging(args.verbose);

    let matcher = MatcherBuilder::new()
        .delimited(!args.no_delimited)
        .dotted(!args.no_dotted)
        .bare(!args.no_bare)
        .consistent_delimiters(args.strict_delimiters)
        .build()
        .context("failed to build MAC matcher")?;

    // determine appropriate colormode. auto simply
    // tests if stdout is a tty (if so, then yes color)
    // or otherwise don't color if it's to a file or another pipe
    let colormode = match args.color {
        ArgsColorChoice::Auto => {
            if io::stdout().is_terminal() {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            }
        }
        ArgsColorChoice::Always => ColorChoice::Always,
        ArgsColorChoice::Never => ColorChoice::Never,
    };

    let nothing_requested = args.address.is_empty() && args.text.is_empty() && args.input.is_empty();
    let report = Report::new(BufferedStandardStream::stdout(colormode))
        .json(args.json)
        .show_invalid(args.all);

    if args.interactive || (nothing_requested && io::stdin().is_terminal()) {
        debug!("starting interactive menu");
        ctrlc::set_handler(|| {
            let _ = report_interrupt(&mut io::stderr());
            std::process::exit(130);
        })
        .context("failed to install Ctrl-C handler")?;
        let stdin = io::stdin();
        let mut menu = Menu::new(&matcher, stdin.lock(), report);
        menu.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    // if nothing else was asked for, read stdin
    if nothing_requested {
        args.input.push(Utf8PathBuf::from("-"));
    }

    run(args, &matcher, report)
}

fn run(args: Args, matcher: &Matcher, mut report: Report<BufferedStandardStream>) -> Result<ExitCode> {
    let mut all_valid = true;

    for address in &args.address {
        let format = matcher.classify(address);
        all_valid &= format.is_some();
        report.validation(address, format)?;
    }

    for text in &args.text {
        if args.tag {
            let out = report.get_mut();
            matcher.tag(text).write_json(out)?;
            writeln!(out)?;
        } else {
            report.extraction("<text>", &matcher.extract(text))?;
        }
    }

    for path in args.input {
        let source = FileOrStdin::from_path(path);
        debug!(%source, "processing input");

        match (&source, args.tag) {
            (FileOrStdin::File(path), true) => {
                files::tag_file(matcher, path.as_std_path(), report.get_mut())
                    .with_context(|| format!("failed to read {}", source))?;
            }
            (_, true) => {
                let text = source
                    .read_text()
                    .with_context(|| format!("failed to read {}", source))?;
                let out = report.get_mut();
                matcher.tag(&text).write_json(out)?;
                writeln!(out)?;
            }
            (_, false) => {
                let text = source
                    .read_text()
                    .with_context(|| format!("failed to read {}", source))?;
                report.extraction(&source.to_string(), &matcher.extract(&text))?;
            }
        }
        report.flush()?;
    }

    report.flush()?;

    if all_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
