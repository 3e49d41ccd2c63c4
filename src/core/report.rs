//! Stdout reports for the `rank` and `longest` subcommands.

use crate::core::filter::TargetMonth;
use crate::models::ranking::RankedEntry;
use crate::models::session::LongestSession;
use crate::ui::messages::warning;
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Podium colors, top three ranks only.
fn color_for_rank(rank: usize) -> Option<Colour> {
    match rank {
        1 => Some(Colour::Green),
        2 => Some(Colour::Yellow),
        3 => Some(Colour::Cyan),
        _ => None,
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Print the attendance ranking as an aligned table, podium colored.
    pub fn print_rank(ranking: &[RankedEntry], month: &TargetMonth) {
        println!("📅 Attendance ranking for {}:\n", month.label());

        if ranking.is_empty() {
            warning("No attendance data for this month.");
            return;
        }

        let user_w = ranking
            .iter()
            .map(|e| UnicodeWidthStr::width(e.user_id.as_str()))
            .max()
            .unwrap_or(0)
            .max("User".len());

        let mut table = Table::new(vec![
            Column {
                header: "Rank".to_string(),
                width: 4,
            },
            Column {
                header: "User".to_string(),
                width: user_w,
            },
            Column {
                header: "Hours".to_string(),
                width: 8,
            },
            Column {
                header: "Days".to_string(),
                width: 4,
            },
            Column {
                header: "Avg/Day".to_string(),
                width: 7,
            },
        ]);

        for entry in ranking {
            table.add_row(vec![
                entry.rank.to_string(),
                entry.user_id.clone(),
                format!("{:.2}", entry.total_hours),
                entry.days_present.to_string(),
                format!("{:.2}", entry.average_per_day),
            ]);
        }

        for (i, line) in table.render().lines().enumerate() {
            if i == 0 {
                println!("{}", Colour::White.bold().paint(line));
                continue;
            }

            match color_for_rank(ranking[i - 1].rank) {
                Some(colour) => println!("{}", colour.paint(line)),
                None => println!("{}", line),
            }
        }
    }

    /// Print the single longest work session across all users.
    pub fn print_longest(winner: &Option<LongestSession>, month: &TargetMonth) {
        match winner {
            Some(w) => println!(
                "🏆 Longest work session in {}: {} → {} ({} s)",
                month.label(),
                w.user_id,
                hours2readable(w.seconds, false),
                w.seconds
            ),
            None => warning(format!("No completed work session found in {}.", month.label())),
        }
    }
}
