// src/params.rs
use std::path::PathBuf;

pub const WIKI_BASE: &str = "https://songcontest.fandom.com/wiki/";
pub const COUNTRIES_PAGE: &str = "Participating_countries";
pub const MEMBERS_PAGE: &str = "Members";

pub const DEFAULT_OUT_DIR: &str = "out";
pub const TOTALS_FILE: &str = "all_time_points.txt";
pub const AVERAGES_FILE: &str = "average_points.txt";
pub const PLACINGS_FILE: &str = "average_placings.txt";
pub const PARTICIPATION_FILE: &str = "participation.txt";

/// Optional local override table (entity name → flag glyph), loaded once.
pub const FLAG_OVERRIDES_FILE: &str = "flags.json";

// Appearance-count thresholds for status notices. A notice fires only when the
// count lands exactly on the threshold, so repeat runs on grown data stay quiet.
pub const ESTABLISHED_APPEARANCES: usize = 10;
pub const VETERAN_APPEARANCES: usize = 25;

/// Minimum counted grand finals before a placement average is reported.
pub const MIN_FINALS_FOR_AVERAGE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipationOrder {
    /// Most editions missed first. Surfaces entrants at risk of lapsing.
    ByMissedDesc,
    ByName,
}

#[derive(Clone)]
pub struct Params {
    pub edition: Option<u32>,        // edition ceiling + reference; None = infer from data
    pub out: Option<PathBuf>,        // output directory
    pub flags_file: Option<PathBuf>, // flag override table; None = FLAG_OVERRIDES_FILE if present
    pub order: ParticipationOrder,
    pub bounded_last: bool,          // apply the edition ceiling to "last participation" too
}

impl Params {
    pub fn new() -> Self {
        Self {
            edition: None,
            out: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            flags_file: None,
            order: ParticipationOrder::ByMissedDesc,
            bounded_last: true,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
