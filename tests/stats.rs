// tests/stats.rs

use contest_scrape::params::{
    ESTABLISHED_APPEARANCES, MIN_FINALS_FOR_AVERAGE, VETERAN_APPEARANCES,
};
use contest_scrape::roster::RosterEntry;
use contest_scrape::stats::{country_stats, member_stats, round1, HistoryRow, Status};

fn who(name: &str) -> RosterEntry {
    RosterEntry { name: name.to_string(), flag_key: name.to_string() }
}

fn country_row(edition: &str, points: &str) -> HistoryRow {
    HistoryRow { edition: edition.into(), points: points.into(), ..Default::default() }
}

fn member_row(edition: &str, final_place: &str, semi_place: &str) -> HistoryRow {
    HistoryRow {
        edition: edition.into(),
        final_place: final_place.into(),
        semi_place: semi_place.into(),
        ..Default::default()
    }
}

#[test]
fn round1_rounds_half_away_from_zero_on_the_scaled_value() {
    assert_eq!(round1(101.0 / 3.0), 33.7);
    assert_eq!(round1(2.25), 2.3);
    assert_eq!(round1(2.0), 2.0);
}

#[test]
fn country_total_and_average() {
    let roster = vec![who("Aland")];
    let rows = vec![vec![
        country_row("Edition 1", "50"),
        country_row("Edition 2", "30"),
        country_row("Edition 3", "21"),
    ]];
    let stats = country_stats(&roster, &rows, None);
    assert_eq!(stats.totals[0].1.value, 101.0);
    assert_eq!(stats.averages[0].1.value, 33.7);
}

#[test]
fn country_rows_are_filtered_not_fatal() {
    let roster = vec![who("Aland")];
    let rows = vec![vec![
        country_row("Edition 1", "10"),
        country_row("Edition 2", "0"),     // zero points: skipped
        country_row("Edition 3", "12*"),   // malformed: skipped
        country_row("Edition 4", "-3"),    // not a non-negative integer: skipped
        country_row("no number here", "8"),// no edition: skipped
        country_row("Edition 5", " 7 "),   // whitespace tolerated
    ]];
    let stats = country_stats(&roster, &rows, None);
    assert_eq!(stats.totals[0].1.value, 17.0);
    // Two rows counted, 17/2 = 8.5.
    assert_eq!(stats.averages[0].1.value, 8.5);
}

#[test]
fn country_edition_ceiling_applies() {
    let roster = vec![who("Aland")];
    let rows = vec![vec![
        country_row("Edition 3", "10"),
        country_row("Edition 7", "20"),
    ]];
    let stats = country_stats(&roster, &rows, Some(5));
    assert_eq!(stats.totals[0].1.value, 10.0);
}

#[test]
fn zero_total_country_is_not_reported() {
    let roster = vec![who("Aland"), who("Borduria")];
    let rows = vec![
        vec![country_row("Edition 1", "0")],
        vec![country_row("Edition 1", "5")],
    ];
    let stats = country_stats(&roster, &rows, None);
    assert_eq!(stats.totals.len(), 1);
    assert_eq!(stats.totals[0].0, "Borduria");
    assert_eq!(stats.averages.len(), 1);
}

#[test]
fn country_maps_are_sorted_descending() {
    let roster = vec![who("Aland"), who("Borduria"), who("Carpathia")];
    let rows = vec![
        vec![country_row("Edition 1", "5")],
        vec![country_row("Edition 1", "50")],
        vec![country_row("Edition 1", "20")],
    ];
    let stats = country_stats(&roster, &rows, None);
    let order: Vec<&str> = stats.totals.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(order, vec!["Borduria", "Carpathia", "Aland"]);
}

#[test]
fn member_placement_average_counts_finals_only() {
    let roster = vec![who("Alice")];
    let rows = vec![vec![
        member_row("Edition 1", "1", ""),
        member_row("Edition 2", "2", ""),
        member_row("Edition 3", "4", ""),
        member_row("Edition 4", "", "5"), // semi-only: no placement contribution
    ]];
    let stats = member_stats(&roster, &rows, None);
    assert_eq!(stats.placements.len(), 1);
    let rec = &stats.placements[0].1;
    // (1+2+4)/3 = 2.333… → 2.3
    assert_eq!(rec.value, 2.3);
    // 3 of 4 filtered appearances reached the final.
    assert_eq!(rec.qualified_pct, Some(75));
}

#[test]
fn member_below_min_finals_is_not_reported() {
    assert!(MIN_FINALS_FOR_AVERAGE > 2);
    let roster = vec![who("Alice")];
    let rows = vec![vec![
        member_row("Edition 1", "1", ""),
        member_row("Edition 2", "2", ""),
    ]];
    let stats = member_stats(&roster, &rows, None);
    assert!(stats.placements.is_empty());
}

#[test]
fn member_placements_sorted_ascending_best_first() {
    let roster = vec![who("Alice"), who("Bea")];
    let rows = vec![
        vec![
            member_row("Edition 1", "8", ""),
            member_row("Edition 2", "9", ""),
            member_row("Edition 3", "10", ""),
        ],
        vec![
            member_row("Edition 1", "1", ""),
            member_row("Edition 2", "2", ""),
            member_row("Edition 3", "3", ""),
        ],
    ];
    let stats = member_stats(&roster, &rows, None);
    assert_eq!(stats.placements[0].0, "Bea");
    assert_eq!(stats.placements[1].0, "Alice");
}

#[test]
fn status_notice_fires_exactly_on_the_threshold() {
    let at = |n: usize| -> Vec<HistoryRow> {
        (1..=n).map(|i| member_row(&format!("Edition {i}"), "1", "")).collect()
    };
    let roster = vec![who("Ten"), who("Eleven"), who("TwentyFive")];
    let rows = vec![
        at(ESTABLISHED_APPEARANCES),
        at(ESTABLISHED_APPEARANCES + 1),
        at(VETERAN_APPEARANCES),
    ];
    let stats = member_stats(&roster, &rows, None);
    let names: Vec<(&str, Status)> =
        stats.notices.iter().map(|n| (n.name.as_str(), n.status)).collect();
    assert_eq!(names, vec![("Ten", Status::Established), ("TwentyFive", Status::Veteran)]);
}

#[test]
fn veteran_flag_set_at_or_above_threshold() {
    let rows: Vec<HistoryRow> =
        (1..=VETERAN_APPEARANCES + 2).map(|i| member_row(&format!("Edition {i}"), "1", "")).collect();
    let roster = vec![who("Old Hand")];
    let stats = member_stats(&roster, &[rows], None);
    assert!(stats.placements[0].1.veteran);
}
