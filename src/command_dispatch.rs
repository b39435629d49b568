//! Purpose: Hold top-level CLI command dispatch for `bunplate`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Each arm emits exactly one JSON value or returns an `Error`.
//! Invariants: Library sentinels (e.g. `INVALID_DATE`) are turned into errors here, not passed through.

use super::*;

pub(super) fn dispatch_command(command: Command, pretty: bool) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "bunplate", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_json(
                json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }),
                pretty,
            );
            Ok(RunOutcome::ok())
        }
        Command::Bytes { bytes, decimals } => {
            emit_json(
                json!({
                    "bytes": bytes,
                    "decimals": decimals,
                    "formatted": format_bytes_with_decimals(bytes, decimals),
                }),
                pretty,
            );
            Ok(RunOutcome::ok())
        }
        Command::Slug { text } => {
            let slug = slugify(&text);
            emit_json(json!({ "input": text, "slug": slug }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Capitalize { text } => {
            let output = capitalize(&text);
            emit_json(json!({ "input": text, "output": output }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Date { date } => {
            let formatted = format_date(&date);
            if formatted == INVALID_DATE {
                return Err(invalid_date(&date));
            }
            emit_json(json!({ "input": date, "formatted": formatted }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Relative { date } => {
            let Some(instant) = parse_date(&date) else {
                return Err(invalid_date(&date));
            };
            emit_json(
                json!({ "input": date, "relative": format_relative_time(instant) }),
                pretty,
            );
            Ok(RunOutcome::ok())
        }
        Command::Email { address } => {
            let valid = is_valid_email(&address);
            emit_json(json!({ "input": address, "valid": valid }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Url { url } => {
            let valid = is_valid_url(&url);
            emit_json(json!({ "input": url, "valid": valid }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Random { length } => {
            let value = generate_random_string(length)?;
            emit_json(json!({ "length": length, "value": value }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Range { n } => {
            emit_json(json!({ "range": range(n) }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Chunk { size, items } => {
            let chunks = chunk(&items, size)?;
            emit_json(json!({ "size": size, "chunks": chunks }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Unique { items } => {
            emit_json(json!({ "items": unique(&items) }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Pick { object, keys } => {
            let record = parse_record(&object)?;
            emit_json(Value::Object(pick(&record, &keys)), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Omit { object, keys } => {
            let record = parse_record(&object)?;
            emit_json(Value::Object(omit(&record, &keys)), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Classes { classes } => {
            emit_json(json!({ "classes": merge_classes(&classes) }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Locale { command } => dispatch_locale(command, pretty),
        Command::Theme {
            theme,
            prefers_dark,
            toggle,
        } => {
            let mut theme: Theme = theme.parse()?;
            if toggle {
                theme = theme.toggled(prefers_dark);
            }
            emit_json(
                json!({
                    "theme": theme,
                    "resolved": theme.resolve(prefers_dark),
                    "prefers_dark": prefers_dark,
                }),
                pretty,
            );
            Ok(RunOutcome::ok())
        }
        Command::Breakpoint { width } => {
            emit_json(
                json!({ "width": width, "breakpoints": Breakpoints::for_width(width) }),
                pretty,
            );
            Ok(RunOutcome::ok())
        }
        Command::Config { strict } => {
            let config = if strict {
                AppConfig::from_env()?
            } else {
                AppConfig::global().clone()
            };
            emit_json(json!({ "config": config }), pretty);
            Ok(RunOutcome::ok())
        }
    }
}

fn dispatch_locale(command: LocaleCommand, pretty: bool) -> Result<RunOutcome, Error> {
    match command {
        LocaleCommand::List => {
            let locales = Locale::ALL
                .iter()
                .map(|locale| {
                    json!({
                        "code": locale.code(),
                        "name": locale.display_name(),
                        "default": *locale == Locale::default(),
                    })
                })
                .collect::<Vec<_>>();
            emit_json(json!({ "locales": locales }), pretty);
        }
        LocaleCommand::Path { path, locale } => {
            let locale: Locale = locale.parse()?;
            emit_json(
                json!({
                    "path": path,
                    "locale": locale,
                    "localized": localized_path(&path, locale),
                }),
                pretty,
            );
        }
        LocaleCommand::Negotiate { header } => {
            let locale = negotiate(&header);
            emit_json(json!({ "header": header, "locale": locale }), pretty);
        }
    }
    Ok(RunOutcome::ok())
}

fn invalid_date(input: &str) -> Error {
    Error::new(ErrorKind::InvalidArgument)
        .with_message(format!("could not parse date {input:?}"))
        .with_hint("Use an ISO date (2023-12-25) or RFC 3339 timestamp (2023-12-25T10:00:00Z).")
}
