// src/leaderboard.rs
//
// Ranked, medal-annotated, tie-aware rendering of a score-ordered sequence.
// The tie rule is a two-hop check (successor OR predecessor), carried over
// verbatim from the historical output; see the notes on `format_leaderboard`.

use crate::flags::FlagTable;
use crate::stats::ScoreRecord;

pub const MEDALS: [&str; 3] = ["\u{1F947}", "\u{1F948}", "\u{1F949}"];
pub const TIE_MARKER: &str = "(=)";
pub const VETERAN_BADGE: &str = "\u{2705}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderStyle {
    /// Country reports: value is a points total/average, suffixed " points".
    Points,
    /// Member reports: value is an average placement, optionally suffixed
    /// with the qualification rate.
    Placement,
}

/// Render one line per entry, in the caller's (already sorted) order.
///
/// Single forward pass. The rank counter increments once per entry no matter
/// what; an entry is "tied" when its score equals the next OR the previous
/// one; a tied entry displays the rank its tie-block started at, obtained by
/// subtracting the running tie-streak. Only an untied rank 1–3 gets a medal
/// and emphasis. The streak itself advances on the forward comparison only
/// and resets as soon as the forward tie breaks, which is what keeps two
/// back-to-back tie-blocks from borrowing each other's start rank.
pub fn format_leaderboard(
    entries: &[(String, ScoreRecord)],
    style: LeaderStyle,
    flags: &FlagTable,
) -> String {
    let mut out = String::new();
    let mut rank = 1usize;
    let mut prev_value: Option<f64> = None;
    let mut tie_streak = 0usize;

    for (i, (name, rec)) in entries.iter().enumerate() {
        let next_value = entries.get(i + 1).map(|(_, r)| r.value);
        let tied = next_value == Some(rec.value) || prev_value == Some(rec.value);
        let podium = rank <= 3 && !tied;

        let mut line = String::new();
        if podium {
            line.push_str(MEDALS[rank - 1]);
        } else if tied {
            // Escaped dot: tied labels repeat a number and would otherwise
            // re-trigger list formatting downstream.
            line.push_str(&format!("{}\\.", rank - tie_streak));
        } else {
            line.push_str(&format!("{rank}."));
        }
        line.push(' ');

        if tied {
            line.push_str(TIE_MARKER);
            line.push(' ');
        }

        line.push_str(&flags.glyph(&rec.flag_key));
        line.push(' ');
        line.push_str(name);
        line.push_str(" - ");
        if rec.veteran {
            line.push_str(VETERAN_BADGE);
            line.push(' ');
        }
        line.push_str(&format_value(rec.value));
        match style {
            LeaderStyle::Points => line.push_str(" points"),
            LeaderStyle::Placement => {
                if let Some(pct) = rec.qualified_pct {
                    line.push_str(&format!(" ({pct}% GF)"));
                }
            }
        }

        if podium {
            line = format!("**{line}**");
        }
        out.push_str(&line);
        out.push('\n');

        tie_streak = if next_value == Some(rec.value) { tie_streak + 1 } else { 0 };
        prev_value = Some(rec.value);
        rank += 1;
    }

    out
}

/// Totals print as integers, averages keep their one decimal.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
