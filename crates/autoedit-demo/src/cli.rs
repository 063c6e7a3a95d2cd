#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `AUTOEDIT_DEMO_*` prefix; explicit flags win
//! over the environment.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
autoedit demo: logs an edit field's text on every change

USAGE:
    autoedit-demo [OPTIONS] < input.txt

Each input line replaces the field's text. Lines starting with ':' are
commands.

OPTIONS:
    --label=TEXT         Label drawn left of the text
    --density=F          Display density for dip conversion (default: 1.0)
    --style=PATH         JSON file with field style overrides
    --width=N            Field width in px (default: 320)
    --height=N           Field height in px (default: 48)
    --log=FILTER         Log filter, RUST_LOG syntax
                         (default: info,autoedit_text=debug)
    --help, -h           Show this help message
    --version, -V        Show version

COMMANDS:
    :focus               Focus the field
    :blur                Unfocus the field
    :draw                Print the field's drawing commands
    :clear               Clear the text
    :quit                Exit

ENVIRONMENT VARIABLES:
    AUTOEDIT_DEMO_LABEL      Override --label
    AUTOEDIT_DEMO_DENSITY    Override --density
    AUTOEDIT_DEMO_STYLE      Override --style
    RUST_LOG                 Log filter when --log is not given";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Label text; replaces the style file's label when set.
    pub label: Option<String>,
    /// Display density.
    pub density: f32,
    /// Optional JSON style file.
    pub style_path: Option<PathBuf>,
    /// Field width in px.
    pub width: f32,
    /// Field height in px.
    pub height: f32,
    /// Log filter directive.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            label: None,
            density: 1.0,
            style_path: None,
            width: 320.0,
            height: 48.0,
            log_filter: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("autoedit-demo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(2);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("AUTOEDIT_DEMO_LABEL") {
            opts.label = Some(val);
        }
        if let Some(val) = get_env("AUTOEDIT_DEMO_DENSITY")
            && let Some(n) = parse_positive(&val)
        {
            opts.density = n;
        }
        if let Some(val) = get_env("AUTOEDIT_DEMO_STYLE")
            && !val.trim().is_empty()
        {
            opts.style_path = Some(PathBuf::from(val));
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--label=") {
                        opts.label = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--density=") {
                        opts.density = parse_positive(val).ok_or(ParseError::InvalidValue {
                            flag: "--density",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--style=") {
                        opts.style_path = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_positive(val).ok_or(ParseError::InvalidValue {
                            flag: "--width",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        opts.height = parse_positive(val).ok_or(ParseError::InvalidValue {
                            flag: "--height",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log_filter = Some(val.to_string());
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }
}

fn parse_positive(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
