//! Purpose: Classify a viewport width into the layout breakpoints used by the UI.
//! Exports: `Breakpoints`, `MOBILE_MAX_WIDTH`, `TABLET_MAX_WIDTH`, `LARGE_MIN_WIDTH`.
//! Role: Same thresholds as the UI's media queries, usable where no browser is present.
//! Invariants: Exactly one of mobile/tablet/desktop holds for any width; `is_large` implies desktop.
use serde::Serialize;

pub const MOBILE_MAX_WIDTH: u32 = 640;
pub const TABLET_MAX_WIDTH: u32 = 1024;
pub const LARGE_MIN_WIDTH: u32 = 1280;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Breakpoints {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_large: bool,
}

impl Breakpoints {
    pub fn for_width(width: u32) -> Self {
        Self {
            is_mobile: width <= MOBILE_MAX_WIDTH,
            is_tablet: width > MOBILE_MAX_WIDTH && width <= TABLET_MAX_WIDTH,
            is_desktop: width > TABLET_MAX_WIDTH,
            is_large: width >= LARGE_MIN_WIDTH,
        }
    }
}
