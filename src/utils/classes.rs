//! Purpose: Merge utility-class lists so later classes override conflicting earlier ones.
//! Exports: `merge_classes`.
//! Role: Server-side counterpart of the UI's class-name combiner.
//! Invariants: Output keeps first-to-last order; a class survives only if no later class conflicts with it.
//! Invariants: Two classes conflict only under the same variant prefix (`hover:`, `md:`, ...).
//! Invariants: Classes outside the group table conflict only with an identical class.

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "flow-root",
    "contents",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_SIZE: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHT: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_WIDTH: &[&str] = &["0", "2", "4", "8"];
const BORDER_STYLE: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SPACING: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "m", "mx", "my", "mt", "mr", "mb", "ml",
    "ms", "me",
];

/// Joins class lists left to right, dropping any earlier class that a later one overrides.
///
/// Empty inputs and repeated whitespace are ignored, so conditional classes can be
/// passed as `if cond { "x" } else { "" }`.
pub fn merge_classes<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = Vec::new();
    for input in inputs {
        for class in input.as_ref().split_whitespace() {
            let incoming = Slot::of(class);
            merged.retain(|existing| !incoming.overrides(&Slot::of(existing)));
            merged.push(class.to_string());
        }
    }
    merged.join(" ")
}

/// A class split into its variant prefix and the conflict group of its utility.
struct Slot<'a> {
    class: &'a str,
    variants: &'a str,
    group: Option<&'static str>,
}

impl<'a> Slot<'a> {
    fn of(class: &'a str) -> Self {
        let (variants, utility) = split_variants(class);
        let base = utility.strip_prefix('-').unwrap_or(utility);
        Self {
            class,
            variants,
            group: class_group(base),
        }
    }

    fn overrides(&self, earlier: &Slot<'_>) -> bool {
        if self.variants != earlier.variants {
            return false;
        }
        match (self.group, earlier.group) {
            (Some(group), Some(other)) => group == other || narrower_groups(group).contains(&other),
            _ => self.class == earlier.class,
        }
    }
}

/// Splits `hover:md:px-2` into `("hover:md:", "px-2")`, ignoring colons inside `[...]`.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = 0;
    for (idx, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = idx + 1,
            _ => {}
        }
    }
    class.split_at(split)
}

fn class_group(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    let (head, value) = base.split_once('-').unwrap_or((base, ""));
    if value.starts_with('[') {
        // Arbitrary values are not classified.
        return None;
    }
    match head {
        "flex" => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => Some("flex-direction"),
            "wrap" | "wrap-reverse" | "nowrap" => Some("flex-wrap"),
            "1" | "auto" | "initial" | "none" => Some("flex"),
            _ => None,
        },
        "text" if TEXT_ALIGN.contains(&value) => Some("text-align"),
        "text" if TEXT_SIZE.contains(&value.split('/').next().unwrap_or(value)) => {
            Some("font-size")
        }
        "text" if !value.is_empty() => Some("text-color"),
        "font" if FONT_WEIGHT.contains(&value) => Some("font-weight"),
        "font" if !value.is_empty() => Some("font-family"),
        "border" => border_group(value),
        "bg" if !value.is_empty() => Some("bg-color"),
        "w" => Some("width"),
        "h" => Some("height"),
        "size" => Some("size"),
        "min" | "max" => match (head, value.split_once('-').map(|(axis, _)| axis)) {
            ("min", Some("w")) => Some("min-width"),
            ("min", Some("h")) => Some("min-height"),
            ("max", Some("w")) => Some("max-width"),
            ("max", Some("h")) => Some("max-height"),
            _ => None,
        },
        "gap" => match value.split_once('-') {
            Some(("x", _)) => Some("gap-x"),
            Some(("y", _)) => Some("gap-y"),
            _ => Some("gap"),
        },
        "items" => Some("align-items"),
        "justify" if !value.starts_with("items-") && !value.starts_with("self-") => {
            Some("justify-content")
        }
        "leading" => Some("line-height"),
        "tracking" => Some("letter-spacing"),
        "opacity" => Some("opacity"),
        "z" => Some("z-index"),
        "shadow" => Some("shadow"),
        "rounded" if value.is_empty() || (!value.contains('-') && !is_corner(value)) => {
            Some("rounded")
        }
        _ if !value.is_empty() => SPACING.iter().copied().find(|group| *group == head),
        _ => None,
    }
}

fn border_group(value: &str) -> Option<&'static str> {
    if value.is_empty() || BORDER_WIDTH.contains(&value) {
        return Some("border-w");
    }
    if BORDER_STYLE.contains(&value) {
        return Some("border-style");
    }
    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    let side_width = rest.is_empty() || BORDER_WIDTH.contains(&rest);
    match side {
        "x" if side_width => Some("border-w-x"),
        "y" if side_width => Some("border-w-y"),
        "t" if side_width => Some("border-w-t"),
        "r" if side_width => Some("border-w-r"),
        "b" if side_width => Some("border-w-b"),
        "l" if side_width => Some("border-w-l"),
        "s" if side_width => Some("border-w-s"),
        "e" if side_width => Some("border-w-e"),
        "x" | "y" | "t" | "r" | "b" | "l" | "s" | "e" => None,
        _ => Some("border-color"),
    }
}

fn is_corner(value: &str) -> bool {
    matches!(
        value,
        "t" | "r" | "b" | "l" | "s" | "e" | "tl" | "tr" | "br" | "bl" | "ss" | "se" | "es" | "ee"
    )
}

/// Groups that a shorthand group also covers: `p-4` replaces an earlier `px-2`,
/// but `px-2` leaves an earlier `p-4` in place.
fn narrower_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l", "border-w-s", "border-w-e"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["width", "height"],
        _ => &[],
    }
}
