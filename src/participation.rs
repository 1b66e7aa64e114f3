// src/participation.rs
//
// Per-entity "editions missed" report: last edition attended at or before
// the reference edition, and the gap to it.

use crate::edition::parse_edition;
use crate::flags::FlagTable;
use crate::params::ParticipationOrder;
use crate::roster::{sort_by_name, RosterEntry};
use crate::stats::HistoryRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipationRecord {
    pub name: String,
    pub flag_key: String,
    /// 0 = never entered.
    pub last_edition: u32,
    pub missed: u32,
}

/// Most recent edition found in `rows`. With `bounded`, editions after the
/// reference are ignored (the two historical report variants disagreed here,
/// so both behaviors stay available).
pub fn last_participation(rows: &[HistoryRow], reference: u32, bounded: bool) -> u32 {
    rows.iter()
        .filter_map(|r| parse_edition(&r.edition))
        .filter(|&e| !bounded || e <= reference)
        .max()
        .unwrap_or(0)
}

/// One record per roster entity, always, even for entities that never entered.
pub fn records(
    roster: &[RosterEntry],
    histories: &[Vec<HistoryRow>],
    reference: u32,
    bounded: bool,
) -> Vec<ParticipationRecord> {
    roster
        .iter()
        .zip(histories)
        .map(|(entry, rows)| {
            let last_edition = last_participation(rows, reference, bounded);
            ParticipationRecord {
                name: entry.name.clone(),
                flag_key: entry.flag_key.clone(),
                last_edition,
                missed: reference.saturating_sub(last_edition),
            }
        })
        .collect()
}

/// Render one line per entity. Entrants of the reference edition itself are
/// emphasized; the missed-count suffix is omitted when it would read "+0".
pub fn format_report(
    records: &[ParticipationRecord],
    reference: u32,
    order: ParticipationOrder,
    flags: &FlagTable,
) -> String {
    let mut sorted: Vec<&ParticipationRecord> = records.iter().collect();
    match order {
        ParticipationOrder::ByMissedDesc => sorted.sort_by(|a, b| b.missed.cmp(&a.missed)),
        ParticipationOrder::ByName => sort_by_name(&mut sorted, |r| &r.name),
    }

    let mut out = String::new();
    for rec in sorted {
        let mut line = format!("{} {} - ", flags.glyph(&rec.flag_key), rec.name);
        if rec.last_edition == 0 {
            line.push_str("never entered");
        } else {
            line.push_str(&format!("last entered edition {}", rec.last_edition));
        }
        if rec.missed > 0 {
            line.push_str(&format!(" (+{} editions missed)", rec.missed));
        }
        if rec.last_edition == reference {
            line = format!("**{line}**");
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
