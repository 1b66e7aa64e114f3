// src/edition.rs
use std::sync::OnceLock;

use regex::Regex;

static FIRST_INT: OnceLock<Regex> = OnceLock::new();

/// First embedded integer in a free-text edition label ("Edition 42" → 42).
/// `None` when the label carries no number.
pub fn parse_edition(label: &str) -> Option<u32> {
    let re = FIRST_INT.get_or_init(|| Regex::new(r"\d+").unwrap());
    re.find(label)?.as_str().parse().ok()
}

/// Newest edition number across a set of labels.
pub fn max_edition<'a, I>(labels: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    labels.into_iter().filter_map(parse_edition).max()
}
