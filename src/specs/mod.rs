// src/specs/mod.rs
//
// Page-specific extraction specs. Each spec knows where its page keeps the
// roster list and the per-entity history tables, and shapes them into a
// bundle the aggregation layer can fold. Specs only extract; fetching,
// aggregation and report formatting live with the runner.
//
// Both specs are pure over an HTML string so they stay testable offline
// against saved pages.

pub mod countries;
pub mod members;

use crate::tables::PageTable;

/// History table for one entity: the table under the section headline that
/// matches the entity's display name. Headlines sometimes carry decoration
/// after the name ("Norway (host)"), so an exact match is tried first and a
/// name-prefix match second; the prefix must end at a word boundary so
/// "Norge" never claims "Norgeland". Entities without a table get an empty
/// history, never an error, but the miss is logged.
pub(crate) fn table_for<'a>(tables: &'a [PageTable], name: &str) -> Option<&'a PageTable> {
    let found = tables.iter().find(|t| t.heading == name).or_else(|| {
        tables.iter().find(|t| {
            t.heading
                .strip_prefix(name)
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| !c.is_alphanumeric())
        })
    });
    if found.is_none() {
        log::warn!("No history table found for {name}");
    }
    found
}

/// Index of the first header containing `needle`, case-insensitive.
pub(crate) fn column_index(headers: &[String], needle: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(needle))
}

pub(crate) fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
