// src/roster.rs
//
// Roster extraction: marker-prefixed list entries with a flag image each.
// Output is deduplicated and alphabetically sorted, with the diacritic
// tie-skip rule in `roster_cmp`.

use std::cmp::Ordering;
use std::collections::HashSet;

use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};

use crate::sanitize::normalize_ws;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    /// Key for emoji lookup, derived from the flag image path. May differ
    /// from the display name; empty when no usable image reference exists.
    pub flag_key: String,
}

/// Pull the (name, flag key) pairs out of one page's list markup.
pub fn extract_roster(html: &str) -> Vec<RosterEntry> {
    let doc = Html::parse_document(html);
    let content_sel = Selector::parse("div.mw-parser-output ul li").unwrap();
    let any_sel = Selector::parse("ul li").unwrap();
    let a_sel = Selector::parse("a").unwrap();
    let img_sel = Selector::parse("img").unwrap();

    let mut items: Vec<_> = doc.select(&content_sel).collect();
    if items.is_empty() {
        // Fixture pages and odd skins don't always carry the content wrapper.
        items = doc.select(&any_sel).collect();
    }

    let mut entries = Vec::new();
    for li in items {
        let name = li
            .select(&a_sel)
            .map(|a| normalize_ws(&a.text().collect::<String>()))
            .find(|t| !t.is_empty());
        let Some(name) = name else { continue };

        let flag_key = li
            .select(&img_sel)
            .next()
            .and_then(|img| img.value().attr("src").or_else(|| img.value().attr("data-src")))
            .map(flag_key_from_src)
            .unwrap_or_default();

        entries.push(RosterEntry { name, flag_key });
    }

    dedup_entries(&mut entries);
    sort_by_name(&mut entries, |e| &e.name);
    entries
}

/// Stable insertion sort over `roster_cmp`. The comparator is deliberately
/// not a total order (diacritic pairs compare Equal), which the std sorts
/// are allowed to reject, so the sort is spelled out here.
pub fn sort_by_name<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && roster_cmp(name(&items[j - 1]), name(&items[j])) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Flag key from an image reference path: last image-named segment,
/// URL-decoded, format suffix stripped, `Flag_of_` prefix dropped,
/// underscores replaced with spaces. Empty string when nothing matches.
pub fn flag_key_from_src(src: &str) -> String {
    let seg = src.split('/').find(|s| {
        let l = s.to_ascii_lowercase();
        ["svg", "png", "gif", "jpg", "jpeg"]
            .iter()
            .any(|ext| l.ends_with(&format!(".{ext}")))
    });
    let Some(seg) = seg else { return String::new() };

    let decoded = percent_decode_str(seg).decode_utf8_lossy().into_owned();
    let stem = match decoded.rfind('.') {
        Some(i) => &decoded[..i],
        None => decoded.as_str(),
    };
    let stem = stem.strip_prefix("Flag_of_").unwrap_or(stem);
    stem.replace('_', " ")
}

/// Equality on the full (name, flag key) pair; first occurrence wins.
fn dedup_entries(entries: &mut Vec<RosterEntry>) {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    entries.retain(|e| seen.insert((e.name.clone(), e.flag_key.clone())));
}

/// Case-insensitive name comparison, with one deliberate quirk: any pair
/// where either name carries a combining diacritical mark compares Equal,
/// so a stable sort leaves accented names in their original relative order.
/// Upstream collation of accented names is inconsistent; do not "fix" this.
pub fn roster_cmp(a: &str, b: &str) -> Ordering {
    if has_combining_mark(a) || has_combining_mark(b) {
        return Ordering::Equal;
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn has_combining_mark(s: &str) -> bool {
    s.chars().any(|c| ('\u{0300}'..='\u{036F}').contains(&c))
}
