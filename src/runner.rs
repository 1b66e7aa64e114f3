// src/runner.rs
//
// Top-level run: fetch the fixed page set (concurrently), fold histories
// into stats, render the four reports, write them out. A failed fetch
// aborts the whole run before anything is written; there is no
// partial-result mode.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::thread;

use crate::{
    edition, file,
    flags::FlagTable,
    leaderboard::{self, LeaderStyle},
    net::Client,
    params::{
        Params, AVERAGES_FILE, COUNTRIES_PAGE, DEFAULT_OUT_DIR, FLAG_OVERRIDES_FILE,
        MEMBERS_PAGE, PARTICIPATION_FILE, PLACINGS_FILE, TOTALS_FILE,
    },
    participation, specs,
    stats::{self, Status},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub reference_edition: u32,
}

pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let flags = match &params.flags_file {
        Some(path) => FlagTable::load(path)?,
        None => FlagTable::load(Path::new(FLAG_OVERRIDES_FILE))?,
    };

    let client = Client::new()?;

    // The two pages are independent, so fetch them side by side. Errors are
    // carried as strings across the thread boundary.
    let (countries, members) = thread::scope(|scope| {
        let countries = scope.spawn(|| {
            specs::countries::fetch_and_extract(&client).map_err(|e| e.to_string())
        });
        let members = scope.spawn(|| {
            specs::members::fetch_and_extract(&client).map_err(|e| e.to_string())
        });
        (
            countries.join().expect("countries fetch panicked"),
            members.join().expect("members fetch panicked"),
        )
    });
    let countries = countries.map_err(|e| {
        log::error!("Fetching {COUNTRIES_PAGE}: {e}");
        e
    })?;
    let members = members.map_err(|e| {
        log::error!("Fetching {MEMBERS_PAGE}: {e}");
        e
    })?;
    log::info!(
        "Extracted {} countries, {} members",
        countries.roster.len(),
        members.roster.len()
    );

    // Reference edition: explicit override, else the newest edition seen in
    // any history row. The ceiling only binds when given explicitly.
    let ceiling = params.edition;
    let reference = match params.edition {
        Some(e) => e,
        None => edition::max_edition(
            countries
                .histories
                .iter()
                .chain(members.histories.iter())
                .flatten()
                .map(|r| r.edition.as_str()),
        )
        .ok_or("no edition numbers found in any history table")?,
    };
    log::info!("Reference edition: {reference}");

    let country_stats = stats::country_stats(&countries.roster, &countries.histories, ceiling);
    let member_stats = stats::member_stats(&members.roster, &members.histories, ceiling);

    for notice in &member_stats.notices {
        let status = match notice.status {
            Status::Established => "an established member",
            Status::Veteran => "a veteran",
        };
        log::info!("{} is now {status}", notice.name);
    }

    let totals = leaderboard::format_leaderboard(&country_stats.totals, LeaderStyle::Points, &flags);
    let averages =
        leaderboard::format_leaderboard(&country_stats.averages, LeaderStyle::Points, &flags);
    let placings =
        leaderboard::format_leaderboard(&member_stats.placements, LeaderStyle::Placement, &flags);

    let part_records = participation::records(
        &countries.roster,
        &countries.histories,
        reference,
        params.bounded_last,
    );
    let part_report =
        participation::format_report(&part_records, reference, params.order, &flags);

    let outdir = params
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let files_written = vec![
        file::write_report(&outdir, TOTALS_FILE, &totals)?,
        file::write_report(&outdir, AVERAGES_FILE, &averages)?,
        file::write_report(&outdir, PLACINGS_FILE, &placings)?,
        file::write_report(&outdir, PARTICIPATION_FILE, &part_report)?,
    ];

    Ok(RunSummary { files_written, reference_edition: reference })
}
