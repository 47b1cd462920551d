//! Display-name resolution and text-direction classification.
//!
//! # Responsibility
//! - Resolve the one rendering name every other feature (search, sorting,
//!   breadcrumbs) builds on.
//! - Classify resolved text as right-to-left for Arabic/Urdu labels.
//!
//! # Invariants
//! - `resolve_display_name` is pure, total, and never panics.
//! - Fallback order is fixed: display name, first+last, raw id, sentinel.

use crate::model::person::Person;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel returned when no person is available at all.
pub const UNKNOWN_NAME: &str = "Unknown";

static ARABIC_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{0600}-\u{06FF}]").expect("static pattern must compile"));

/// Resolves the name used to render a person everywhere.
///
/// Priority: `display_name` when non-blank, else the space-joined non-blank
/// `first_name`/`last_name`, else the raw `id`. `None` resolves to
/// [`UNKNOWN_NAME`].
pub fn resolve_display_name(person: Option<&Person>) -> String {
    let Some(person) = person else {
        return UNKNOWN_NAME.to_string();
    };

    if let Some(display_name) = non_blank(person.display_name.as_deref()) {
        return display_name.to_string();
    }

    let joined = [
        non_blank(person.first_name.as_deref()),
        non_blank(person.last_name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    if !joined.is_empty() {
        return joined;
    }

    person.id.clone()
}

/// Returns whether `text` contains any character of the Arabic Unicode
/// block (U+0600..=U+06FF), used to switch rendering to right-to-left.
pub fn is_right_to_left(text: &str) -> bool {
    ARABIC_BLOCK.is_match(text)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
