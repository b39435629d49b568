//! Purpose: Supported UI locales and the path/header helpers built on them.
//! Exports: `Locale`, `DEFAULT_LOCALE`, `split_locale`, `localized_path`, `negotiate`.
//! Role: Pure string logic behind the language switcher and locale-prefixed URLs.
//! Invariants: Locale codes are lowercase two-letter tags; parsing is case-insensitive.
//! Invariants: Negotiation always yields a supported locale (falls back to `DEFAULT_LOCALE`).
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Cs,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Cs];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cs => "cs",
        }
    }

    /// Name of the language in that language, as shown by the switcher.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Cs => "Čeština",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Locale::from_code(value.trim()).ok_or_else(|| {
            let supported = Locale::ALL
                .iter()
                .map(|locale| locale.code())
                .collect::<Vec<_>>()
                .join(", ");
            Error::new(ErrorKind::InvalidArgument)
                .with_message(format!("unsupported locale {value:?}"))
                .with_hint(format!("Supported locales: {supported}."))
        })
    }
}

/// Splits a leading locale segment off `path`.
///
/// `/cs/about` yields `(Some(Cs), "/about")`; `/cs` yields `(Some(Cs), "/")`.
/// Paths without a locale segment are returned unchanged.
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    match Locale::from_code(first) {
        Some(locale) if rest.is_empty() => (Some(locale), "/"),
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

/// Rewrites `path` so it is prefixed with `locale`, replacing any existing prefix.
pub fn localized_path(path: &str, locale: Locale) -> String {
    let (_, rest) = split_locale(path);
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{rest}", locale.code())
    }
}

/// Picks the best supported locale from an `Accept-Language` header value.
///
/// Region subtags are ignored (`cs-CZ` counts as `cs`). Entries with `q=0` or a
/// malformed weight are skipped; ties go to the earlier entry.
pub fn negotiate(accept_language: &str) -> Locale {
    let mut best: Option<(Locale, f32)> = None;
    for entry in accept_language.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        let mut quality = 1.0_f32;
        for param in parts {
            if let Some(raw) = param.trim().strip_prefix("q=") {
                quality = match raw.trim().parse::<f32>() {
                    Ok(q) if (0.0..=1.0).contains(&q) => q,
                    _ => 0.0,
                };
            }
        }
        if quality <= 0.0 {
            continue;
        }
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        let Some(locale) = Locale::from_code(primary) else {
            continue;
        };
        if best.is_none_or(|(_, current)| quality > current) {
            best = Some((locale, quality));
        }
    }
    best.map_or(DEFAULT_LOCALE, |(locale, _)| locale)
}
