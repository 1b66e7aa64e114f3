// src/specs/members.rs

use std::error::Error;

use crate::net::Client;
use crate::params::MEMBERS_PAGE;
use crate::roster::{self, RosterEntry};
use crate::stats::HistoryRow;
use crate::tables::{self, PageTable};

use super::{cell, column_index, table_for};

pub struct MemberBundle {
    pub roster: Vec<RosterEntry>,
    pub histories: Vec<Vec<HistoryRow>>,
}

pub fn fetch_and_extract(client: &Client) -> Result<MemberBundle, Box<dyn Error>> {
    let html = client.fetch_page(MEMBERS_PAGE)?;
    Ok(extract(&html))
}

pub fn extract(html: &str) -> MemberBundle {
    let roster = roster::extract_roster(html);
    let tables = tables::parse_tables(html);
    let histories = roster
        .iter()
        .map(|entry| history_rows(&tables, &entry.name))
        .collect();
    MemberBundle { roster, histories }
}

/// Member tables: Edition | Song | Final | Semi-final. "Final" must not match
/// the semi column, so it gets its own lookup.
fn history_rows(tables: &[PageTable], name: &str) -> Vec<HistoryRow> {
    let Some(table) = table_for(tables, name) else {
        log::debug!("No history table for {name}");
        return Vec::new();
    };

    let edition = column_index(&table.headers, "edition").unwrap_or(0);
    let semi = column_index(&table.headers, "semi").unwrap_or(3);
    let grand = grand_final_index(&table.headers).unwrap_or(2);

    table
        .rows
        .iter()
        .map(|row| HistoryRow {
            edition: cell(row, edition),
            points: String::new(),
            final_place: cell(row, grand),
            semi_place: cell(row, semi),
        })
        .collect()
}

fn grand_final_index(headers: &[String]) -> Option<usize> {
    headers.iter().position(|h| {
        let l = h.to_lowercase();
        l.contains("final") && !l.contains("semi")
    })
}
