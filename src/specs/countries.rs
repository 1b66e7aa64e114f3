// src/specs/countries.rs

use std::error::Error;

use crate::net::Client;
use crate::params::COUNTRIES_PAGE;
use crate::roster::{self, RosterEntry};
use crate::stats::HistoryRow;
use crate::tables::{self, PageTable};

use super::{cell, column_index, table_for};

pub struct CountryBundle {
    pub roster: Vec<RosterEntry>,
    /// Parallel to `roster`, one history vector per country.
    pub histories: Vec<Vec<HistoryRow>>,
}

pub fn fetch_and_extract(client: &Client) -> Result<CountryBundle, Box<dyn Error>> {
    let html = client.fetch_page(COUNTRIES_PAGE)?;
    Ok(extract(&html))
}

pub fn extract(html: &str) -> CountryBundle {
    let roster = roster::extract_roster(html);
    let tables = tables::parse_tables(html);
    let histories = roster
        .iter()
        .map(|entry| history_rows(&tables, &entry.name))
        .collect();
    CountryBundle { roster, histories }
}

/// Country tables: Edition | Song | Points | Place (column order varies on
/// older sections, hence the header lookup with positional fallback).
fn history_rows(tables: &[PageTable], name: &str) -> Vec<HistoryRow> {
    let Some(table) = table_for(tables, name) else {
        log::debug!("No history table for {name}");
        return Vec::new();
    };

    let edition = column_index(&table.headers, "edition").unwrap_or(0);
    let points = column_index(&table.headers, "points").unwrap_or(2);
    let place = column_index(&table.headers, "place").unwrap_or(3);

    table
        .rows
        .iter()
        .map(|row| HistoryRow {
            edition: cell(row, edition),
            points: cell(row, points),
            final_place: cell(row, place),
            semi_place: String::new(),
        })
        .collect()
}
