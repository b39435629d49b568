//! Purpose: Define the stable public Rust API boundary for bunplate.
//! Exports: Helper functions and types needed by the CLI and downstream crates.
//! Role: Public, additive-only surface; module paths under `utils` may move.
//! Invariants: Everything re-exported here keeps its signature within a minor release.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::config::AppConfig;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::locale::{DEFAULT_LOCALE, Locale, localized_path, negotiate, split_locale};
pub use crate::theme::{ResolvedTheme, Theme};
pub use crate::utils::classes::merge_classes;
pub use crate::utils::collections::{Record, chunk, group_by, omit, pick, range, unique};
pub use crate::utils::format::{
    DateInput, INVALID_DATE, capitalize, format_bytes, format_bytes_with_decimals, format_date,
    format_relative_time, format_relative_time_at, parse_date, slugify,
};
pub use crate::utils::random::generate_random_string;
pub use crate::utils::timing::{Debounce, Throttle, sleep};
pub use crate::utils::validation::{is_valid_email, is_valid_url};
pub use crate::viewport::Breakpoints;
