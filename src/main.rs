//! Purpose: `bunplate` CLI entry point and command definitions.
//! Role: Binary crate root; parses args, runs helpers, emits JSON on stdout.
//! Invariants: Successful commands print exactly one JSON value on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

use bunplate::api::{
    AppConfig, Breakpoints, Error, ErrorKind, INVALID_DATE, Locale, Record, Theme, capitalize,
    chunk, format_bytes_with_decimals, format_date, format_relative_time, generate_random_string,
    is_valid_email, is_valid_url, localized_path, merge_classes, negotiate, omit, parse_date, pick,
    range, slugify, to_exit_code, unique,
};

mod command_dispatch;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Run `bunplate --help` for usage."));
            }
        },
    };

    command_dispatch::dispatch_command(cli.command, cli.pretty)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first
        .strip_prefix("error: ")
        .unwrap_or(first)
        .to_string()
}

#[derive(Parser, Debug)]
#[command(
    name = "bunplate",
    version,
    about = "BunPlate utility helpers from the command line",
    long_about = r#"Run the BunPlate utility helpers from the command line.

Every command prints a single JSON value on stdout. Errors go to stderr as JSON
(or plain text on a terminal) and set a non-zero exit code."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Format a byte count (e.g. 1536 -> 1.5 KB)")]
    Bytes {
        bytes: u64,
        #[arg(long, default_value_t = 2, help = "Fractional digits before trimming")]
        decimals: usize,
    },
    #[command(about = "Turn free text into a URL slug")]
    Slug { text: String },
    #[command(about = "Upper-case the first character")]
    Capitalize { text: String },
    #[command(about = "Render a date as `December 25, 2023`")]
    Date { date: String },
    #[command(about = "Describe a timestamp relative to now")]
    Relative { date: String },
    #[command(about = "Check an email address")]
    Email { address: String },
    #[command(about = "Check an absolute http(s) URL")]
    Url { url: String },
    #[command(about = "Generate a random alphanumeric string")]
    Random {
        #[arg(default_value_t = 16)]
        length: usize,
    },
    #[command(about = "List 0..n")]
    Range { n: usize },
    #[command(about = "Split items into groups of --size")]
    Chunk {
        #[arg(long)]
        size: usize,
        items: Vec<String>,
    },
    #[command(about = "Drop duplicate items, keeping first occurrences")]
    Unique { items: Vec<String> },
    #[command(about = "Keep only the given keys of a JSON object")]
    Pick { object: String, keys: Vec<String> },
    #[command(about = "Drop the given keys from a JSON object")]
    Omit { object: String, keys: Vec<String> },
    #[command(about = "Merge class lists; later classes override conflicting ones")]
    Classes { classes: Vec<String> },
    #[command(arg_required_else_help = true, about = "Locale helpers")]
    Locale {
        #[command(subcommand)]
        command: LocaleCommand,
    },
    #[command(about = "Resolve (and optionally toggle) a theme preference")]
    Theme {
        #[arg(default_value = "system")]
        theme: String,
        #[arg(long, help = "The OS reports a dark color scheme")]
        prefers_dark: bool,
        #[arg(long, help = "Apply one toggle press")]
        toggle: bool,
    },
    #[command(about = "Classify a viewport width into layout breakpoints")]
    Breakpoint { width: u32 },
    #[command(about = "Show the effective app configuration")]
    Config {
        #[arg(long, help = "Fail on invalid settings instead of falling back to defaults")]
        strict: bool,
    },
    #[command(about = "Generate shell completions")]
    Completion { shell: Shell },
    #[command(about = "Print version info as JSON")]
    Version,
}

#[derive(Subcommand, Debug)]
enum LocaleCommand {
    #[command(about = "List supported locales")]
    List,
    #[command(about = "Prefix a path with a locale")]
    Path {
        path: String,
        #[arg(long)]
        locale: String,
    },
    #[command(about = "Pick a locale from an Accept-Language header value")]
    Negotiate { header: String },
}

fn parse_record(raw: &str) -> Result<Record, Error> {
    let value: Value = serde_json::from_str(raw).map_err(|err| {
        Error::new(ErrorKind::InvalidArgument)
            .with_message("object is not valid JSON")
            .with_source(err)
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::new(ErrorKind::InvalidArgument)
            .with_message("expected a JSON object")
            .with_hint("Pass an object such as '{\"a\":1,\"b\":2}'.")),
    }
}

fn emit_json(value: Value, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(err.kind().as_str()));
    inner.insert(
        "message".to_string(),
        json!(err.message().unwrap_or(err.kind().as_str())),
    );
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    json!({ "error": Value::Object(inner) })
}

fn error_text(err: &Error) -> String {
    let mut text = format!("error: {err}");
    if let Some(hint) = err.hint() {
        text.push_str(&format!("\nhint: {hint}"));
    }
    text
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }
    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}
