// src/stats.rs
//
// Folds per-entity history rows into ordered summary records. Pure passes
// over already-fetched data; the caller decides how to surface notices.

use crate::edition::parse_edition;
use crate::params::{ESTABLISHED_APPEARANCES, MIN_FINALS_FOR_AVERAGE, VETERAN_APPEARANCES};
use crate::roster::RosterEntry;

/// One historical appearance, fields kept as the raw cell strings.
/// Country tables fill `points` (and `final_place` for context); member
/// tables fill the two placement-stage fields.
#[derive(Clone, Debug, Default)]
pub struct HistoryRow {
    pub edition: String,
    pub points: String,
    pub final_place: String,
    pub semi_place: String,
}

/// Per-entity aggregate. `value` is the sort key; only created when the
/// underlying total is non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    pub value: f64,
    pub flag_key: String,
    pub veteran: bool,
    /// Share of appearances that reached the grand final (member track).
    pub qualified_pct: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Established,
    Veteran,
}

/// Notable transition observed while aggregating, returned alongside the
/// result instead of printed from in here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub name: String,
    pub status: Status,
}

pub struct CountryStats {
    /// Descending by total points.
    pub totals: Vec<(String, ScoreRecord)>,
    /// Descending by per-entry average, one decimal.
    pub averages: Vec<(String, ScoreRecord)>,
}

pub struct MemberStats {
    /// Ascending by average grand-final placement (lower is better).
    pub placements: Vec<(String, ScoreRecord)>,
    pub notices: Vec<Notice>,
}

/// Country track. A row counts iff its edition parses, is within the
/// ceiling, and its points cell is a pure non-zero unsigned integer.
pub fn country_stats(
    roster: &[RosterEntry],
    histories: &[Vec<HistoryRow>],
    ceiling: Option<u32>,
) -> CountryStats {
    let mut totals = Vec::new();
    let mut averages = Vec::new();

    for (entry, rows) in roster.iter().zip(histories) {
        let mut total = 0u64;
        let mut count = 0usize;
        for row in rows {
            if !within_ceiling(&row.edition, ceiling) {
                continue;
            }
            let Some(points) = parse_uint(&row.points) else { continue };
            if points == 0 {
                continue;
            }
            total += points;
            count += 1;
        }
        if total == 0 {
            // Never scored: not reported at all.
            continue;
        }

        let record = |value: f64| ScoreRecord {
            value,
            flag_key: entry.flag_key.clone(),
            veteran: false,
            qualified_pct: None,
        };
        totals.push((entry.name.clone(), record(total as f64)));
        averages.push((entry.name.clone(), record(round1(total as f64 / count as f64))));
    }

    totals.sort_by(|a, b| b.1.value.total_cmp(&a.1.value));
    averages.sort_by(|a, b| b.1.value.total_cmp(&a.1.value));
    CountryStats { totals, averages }
}

/// Member track. A row counts iff its edition parses, is within the ceiling,
/// and at least one placement-stage cell is present. Only numeric grand-final
/// placements feed the average; semi-final-only rows never do.
pub fn member_stats(
    roster: &[RosterEntry],
    histories: &[Vec<HistoryRow>],
    ceiling: Option<u32>,
) -> MemberStats {
    let mut placements = Vec::new();
    let mut notices = Vec::new();

    for (entry, rows) in roster.iter().zip(histories) {
        // Status thresholds look at the raw appearance count, pre-filter.
        match rows.len() {
            ESTABLISHED_APPEARANCES => notices.push(Notice {
                name: entry.name.clone(),
                status: Status::Established,
            }),
            VETERAN_APPEARANCES => notices.push(Notice {
                name: entry.name.clone(),
                status: Status::Veteran,
            }),
            _ => {}
        }

        let mut entered = 0usize;
        let mut finals_reached = 0usize;
        let mut finals_counted = 0usize;
        let mut place_total = 0u64;

        for row in rows {
            if !within_ceiling(&row.edition, ceiling) {
                continue;
            }
            let in_final = !row.final_place.trim().is_empty();
            let in_semi = !row.semi_place.trim().is_empty();
            if !in_final && !in_semi {
                continue;
            }
            entered += 1;
            if in_final {
                finals_reached += 1;
                if let Some(place) = parse_uint(&row.final_place) {
                    place_total += place;
                    finals_counted += 1;
                }
            }
        }

        if place_total == 0 || finals_counted < MIN_FINALS_FOR_AVERAGE {
            continue;
        }

        let qualified_pct = (entered > 0)
            .then(|| ((finals_reached * 100) as f64 / entered as f64).round() as u32);

        placements.push((
            entry.name.clone(),
            ScoreRecord {
                value: round1(place_total as f64 / finals_counted as f64),
                flag_key: entry.flag_key.clone(),
                veteran: rows.len() >= VETERAN_APPEARANCES,
                qualified_pct,
            },
        ));
    }

    placements.sort_by(|a, b| a.1.value.total_cmp(&b.1.value));
    MemberStats { placements, notices }
}

fn within_ceiling(label: &str, ceiling: Option<u32>) -> bool {
    match parse_edition(label) {
        Some(edition) => ceiling.is_none_or(|cap| edition <= cap),
        None => false,
    }
}

/// Pure non-negative integer cell, e.g. "12" but not "12*", "-3" or "".
fn parse_uint(s: &str) -> Option<u64> {
    let t = s.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse().ok()
}

/// One-decimal rounding, half away from zero on the scaled value
/// (101/3 → 33.7).
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
