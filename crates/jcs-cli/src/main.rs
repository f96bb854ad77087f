//! Command-line front end for `jcs`: `canonicalize` and `verify` over a
//! file or stdin, with exit-code mapping for scripting.
//!
//! This binary is a thin I/O and argument-parsing shell around the `jcs`
//! crate. It carries no canonicalization logic of its own: every decision
//! about what counts as valid or canonical JSON lives in the library.

use std::io::{IsTerminal, Read, Write};
use std::process::ExitCode;

use bpaf::Bpaf;
use jcs::{canonicalize, verify, CanonError, CanonicalizeOptions, Envelope};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LogLevel {
    #[default]
    None,
    Debug,
    Info,
    Warn,
    Error,
}

impl core::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!(
                "expected 'none', 'debug', 'info', 'warn', or 'error', got '{s}'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum EnvelopeArg {
    #[default]
    None,
    TrailingLf,
}

impl core::str::FromStr for EnvelopeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "trailing-lf" => Ok(Self::TrailingLf),
            _ => Err(format!("expected 'none' or 'trailing-lf', got '{s}'")),
        }
    }
}

impl From<EnvelopeArg> for Envelope {
    fn from(arg: EnvelopeArg) -> Self {
        match arg {
            EnvelopeArg::None => Self::None,
            EnvelopeArg::TrailingLf => Self::TrailingLf,
        }
    }
}

/// Options shared by `canonicalize` and `verify`: bound overrides, the
/// envelope switch, verbosity, and the input path.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(generate(global_options))]
struct GlobalOptions {
    /// Suppress the "ok" success token `verify` prints to stderr.
    #[bpaf(long("quiet"), switch)]
    quiet: bool,

    /// Require (verify) or produce (canonicalize) the named envelope
    /// variant instead of a bare canonical body: `none` or `trailing-lf`.
    #[bpaf(long("envelope"), argument("VARIANT"), fallback(EnvelopeArg::None))]
    envelope: EnvelopeArg,

    /// Logging verbosity, falling back to the `JCS_LOG` env var when unset.
    #[bpaf(long("log-level"), argument("LEVEL"), fallback(LogLevel::None))]
    log_level: LogLevel,

    #[bpaf(long("max-input-bytes"), argument("BYTES"), optional)]
    max_input_bytes: Option<usize>,
    #[bpaf(long("max-depth"), argument("DEPTH"), optional)]
    max_depth: Option<usize>,
    #[bpaf(long("max-object-members"), argument("COUNT"), optional)]
    max_object_members: Option<usize>,
    #[bpaf(long("max-array-elements"), argument("COUNT"), optional)]
    max_array_elements: Option<usize>,
    #[bpaf(long("max-string-bytes"), argument("BYTES"), optional)]
    max_string_bytes: Option<usize>,
    #[bpaf(long("max-number-token"), argument("CHARS"), optional)]
    max_number_token: Option<usize>,
    #[bpaf(long("max-value-count"), argument("COUNT"), optional)]
    max_value_count: Option<usize>,

    /// Input file, or `-` for stdin.
    #[bpaf(positional("PATH"), fallback(String::from("-")))]
    path: String,
}

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
enum Command {
    #[bpaf(command("canonicalize"))]
    /// Parse input and emit its canonical JCS bytes to stdout
    Canonicalize(#[bpaf(external(global_options))] GlobalOptions),

    #[bpaf(command("verify"))]
    /// Confirm that input is already in canonical form
    Verify(#[bpaf(external(global_options))] GlobalOptions),
}

fn main() -> ExitCode {
    match command().run() {
        Command::Canonicalize(global) => run_canonicalize(&global),
        Command::Verify(global) => run_verify(&global),
    }
}

fn run_canonicalize(global: &GlobalOptions) -> ExitCode {
    setup_tracing(global.log_level);
    let input = match read_input(&global.path) {
        Ok(bytes) => bytes,
        Err(code) => return code,
    };

    match canonicalize(&input, build_options(global)) {
        Ok(canonical) => {
            tracing::debug!(bytes = canonical.len(), "canonicalized");
            if std::io::stdout().write_all(&canonical).is_err() {
                return internal_io_error("failed to write canonical output to stdout");
            }
            ExitCode::SUCCESS
        }
        Err(err) => domain_error(&err),
    }
}

fn run_verify(global: &GlobalOptions) -> ExitCode {
    setup_tracing(global.log_level);
    let input = match read_input(&global.path) {
        Ok(bytes) => bytes,
        Err(code) => return code,
    };

    match verify(&input, build_options(global)) {
        Ok(_) => {
            if !global.quiet {
                eprintln!("ok");
            }
            ExitCode::SUCCESS
        }
        Err(err) => domain_error(&err),
    }
}

/// Reads the whole of `path`, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<Vec<u8>, ExitCode> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| internal_io_error(&format!("failed to read stdin: {e}")))?;
        Ok(buf)
    } else {
        std::fs::read(path).map_err(|e| internal_io_error(&format!("failed to read {path}: {e}")))
    }
}

fn build_options(global: &GlobalOptions) -> CanonicalizeOptions {
    let mut options = CanonicalizeOptions::default();
    if let Some(v) = global.max_input_bytes {
        options.max_input_bytes = v;
    }
    if let Some(v) = global.max_depth {
        options.max_depth = v;
    }
    if let Some(v) = global.max_object_members {
        options.max_object_members = v;
    }
    if let Some(v) = global.max_array_elements {
        options.max_array_elements = v;
    }
    if let Some(v) = global.max_string_bytes {
        options.max_string_bytes = v;
    }
    if let Some(v) = global.max_number_token {
        options.max_number_token = v;
    }
    if let Some(v) = global.max_value_count {
        options.max_value_count = v;
    }
    options.envelope = global.envelope.into();
    options
}

/// Any [`CanonError`] (grammar, UTF-8, I-JSON, bound, or not-canonical) maps
/// to exit code 2, per the external exit-code contract.
fn domain_error(err: &CanonError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(2)
}

/// I/O and other unexpected-state failures at the CLI boundary are a
/// disjoint class from anything the core can produce; they map to exit
/// code 10.
fn internal_io_error(message: &str) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::from(10)
}

fn setup_tracing(level: LogLevel) {
    let filter = match level {
        LogLevel::None => match tracing_subscriber::EnvFilter::try_from_env("JCS_LOG") {
            Ok(f) => f,
            Err(_) => return,
        },
        LogLevel::Debug => tracing_subscriber::EnvFilter::new("debug"),
        LogLevel::Info => tracing_subscriber::EnvFilter::new("info"),
        LogLevel::Warn => tracing_subscriber::EnvFilter::new("warn"),
        LogLevel::Error => tracing_subscriber::EnvFilter::new("error"),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .init();
}
