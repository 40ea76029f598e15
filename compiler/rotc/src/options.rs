//! Command-line options for `rotc`.
//!
//! Parsing is hand-rolled over `std::env::args` like the rest of the
//! driver; every flag is a plain switch or a `--name=value` pair.

use rot_diagnostic::emitter::ColorMode;

/// How diagnostics are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    /// Source snippet with caret underline.
    #[default]
    Human,
    /// One JSON object per diagnostic.
    Json,
}

/// Options for compiling one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub path: String,
    /// Stop after lexing.
    pub lex_only: bool,
    /// Print every token to stdout after a successful lex.
    pub dump_tokens: bool,
    /// Print how long lexing took.
    pub timer: bool,
    pub color: ColorMode,
    pub error_format: ErrorFormat,
}

impl CompileOptions {
    pub fn new(path: impl Into<String>) -> Self {
        CompileOptions {
            path: path.into(),
            lex_only: false,
            dump_tokens: false,
            timer: false,
            color: ColorMode::Auto,
            error_format: ErrorFormat::Human,
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Compile(CompileOptions),
    Help,
    Version,
}

/// Command-line errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("missing input file")]
    MissingFile,
    #[error("unexpected extra input file '{0}'")]
    ExtraFile(String),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("invalid value '{value}' for '{flag}' (expected {expected})")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Parse the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, CliError> {
    let mut path: Option<String> = None;
    let mut options = CompileOptions::new("");

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--lex-only" => options.lex_only = true,
            "--debug" | "--log" => options.dump_tokens = true,
            "--timer" => options.timer = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = parse_color(value)?;
                } else if let Some(value) = arg.strip_prefix("--error-format=") {
                    options.error_format = parse_error_format(value)?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(CliError::UnknownFlag(arg.to_string()));
                } else if path.is_some() {
                    return Err(CliError::ExtraFile(arg.to_string()));
                } else {
                    path = Some(arg.to_string());
                }
            }
        }
    }

    options.path = path.ok_or(CliError::MissingFile)?;
    Ok(Command::Compile(options))
}

fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(CliError::InvalidValue {
            flag: "--color",
            value: value.to_string(),
            expected: "auto, always or never",
        }),
    }
}

fn parse_error_format(value: &str) -> Result<ErrorFormat, CliError> {
    match value {
        "human" => Ok(ErrorFormat::Human),
        "json" => Ok(ErrorFormat::Json),
        _ => Err(CliError::InvalidValue {
            flag: "--error-format",
            value: value.to_string(),
            expected: "human or json",
        }),
    }
}

pub const USAGE: &str = "\
Usage: rotc <file.rot> [options]

Options:
  --lex-only               Stop after lexing
  --debug, --log           Print every token after lexing
  --timer                  Print how long lexing took
  --color=<when>           auto, always, never (default: auto)
  --error-format=<fmt>     human, json (default: human)
  -h, --help               Print this help
  -V, --version            Print the version

Set RUST_LOG (e.g. RUST_LOG=rot_lexer=debug) for internal tracing.";

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
