//! stats.txt, the plain text summary Elma writes next to state.dat on exit.

use crate::constants::{NUM_INTERNALS, REPORT_COLUMN_WIDTH};
use crate::state::State;
use crate::utils::{format_time, internal_name};
use constcat::concat;
use std::fmt::Write as _;

const GAME_VERSION: &str = "1.3";
const HEADER: &str = concat!(
	"This text file is generated automatically each time you quit the\n",
	"ELMA.EXE program. If you modify this file, you will loose the\n",
	"changes next time you run the game. This is only an output file, the\n",
	"best times are stored in the STATE.DAT binary file.\n",
	"Registered version ",
	GAME_VERSION,
);
const PENALTY_NOTE: &str = "If a player doesn't have a time in the top ten for a level, this\n\
	will add ten minutes to the total time.\n";
const SINGLE_TOTALS_INTRO: &str = concat!(
	"The following are the single player total times for individual players.\n",
	PENALTY_NOTE,
);
const COMBINED_TOTALS_INTRO: &str = "The following are the combined total times for individual players. For each\n\
	level the best time is choosen of either the player's single player best\n\
	time, or the best multiplayer time where the player was one of the two\n\
	players.\n\
	If a player doesn't have such a time for a level, this will add ten\n\
	minutes to the total time.\n";
const ANONYMOUS_INTRO: &str = "The following is the anonymous total time of the best single player\n\
	times. If there is no single player time for a level, this will\n\
	add ten minutes to the total time.\n";
const ANONYMOUS_COMBINED_INTRO: &str = "The following is the anonymous combined total time of the best\n\
	single or multiplayer times. If there is no single or multiplayer\n\
	time for a level, this will add ten minutes to the total time.\n";

/// Indent of the top10 lines under each level heading.
const TOP10_INDENT: usize = 4;

impl State {
	/// Renders the same stats.txt the game writes when it closes: every
	/// internal top10 followed by the player and anonymous total times.
	pub fn stats_txt(&self) -> String {
		let mut out = String::from(HEADER);
		for (title, single) in [("Single player", true), ("Multiplayer", false)] {
			let _ = write!(out, "\n\n{title} times:\n");
			for (i, top10) in self.times.iter().take(NUM_INTERNALS).enumerate() {
				let entries = top10.formatted(single, TOP10_INDENT);
				let spacer = if entries.is_empty() { "" } else { "\n" };
				let name = internal_name(i as i64, true, ",");
				let _ = write!(out, "\nLevel {name}:\n{entries}{spacer}");
			}
		}
		out.push('\n');
		out += SINGLE_TOTALS_INTRO;
		out += &self.player_totals(false);
		out += "\n\n";
		out += COMBINED_TOTALS_INTRO;
		out += &self.player_totals(true);
		out += "\n\n";
		out += ANONYMOUS_INTRO;
		out += &format_time(self.total_time(None, false), true, ":");
		out += "\n\n";
		out += ANONYMOUS_COMBINED_INTRO;
		out += &format_time(self.total_time(None, true), true, ":");
		out += "\n\n";
		out
	}

	fn player_totals(&self, combined: bool) -> String {
		self.named_players()
			.map(|p| {
				let total = format_time(self.total_time(Some(p.name.as_str()), combined), true, ":");
				format!("{total:<width$}{}", p.name, width = REPORT_COLUMN_WIDTH)
			})
			.collect::<Vec<_>>()
			.join("\n")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::player::PlayerEntry;
	use crate::top10::TopTime;

	fn sample() -> State {
		let mut state = State::default();
		state.players.push(PlayerEntry::new("AB"));
		state.players.push(PlayerEntry::new("CD"));
		state.times[0].single.insert(TopTime::single(1433, "AB"));
		state.times[0].single.insert(TopTime::single(1500, "CD"));
		state.times[1].multi.insert(TopTime::multi(2000, "AB", "CD"));
		state
	}

	#[test]
	fn starts_with_header() {
		let text = sample().stats_txt();
		assert!(text.starts_with("This text file is generated automatically"));
		assert!(text.contains("Registered version 1.3\n\nSingle player times:\n"));
	}

	#[test]
	fn lists_every_internal_per_mode() {
		let text = sample().stats_txt();
		assert_eq!(text.matches("\nLevel 1, Warm Up:\n").count(), 2);
		assert_eq!(text.matches("\nLevel 54, Pipe:\n").count(), 2);
		assert_eq!(text.matches("\nLevel ").count(), 2 * NUM_INTERNALS);
		assert!(!text.contains("More Levels"));
		assert!(text.contains("\nLevel 1, Warm Up:\n    00:14:33    AB\n    00:15:00    CD\n\nLevel 2"));
		assert!(text.contains("\nLevel 2, Flat Track:\n    00:20:00    AB, CD\n"));
	}

	#[test]
	fn lists_totals() {
		let text = sample().stats_txt();
		// AB: 14.33 + 53 penalties; combined adds the 20.00 multi time
		let single = format!("{:<12}AB", format_time(1433 + 53 * 60_000, true, ":"));
		let combined = format!("{:<12}AB", format_time(1433 + 2000 + 52 * 60_000, true, ":"));
		assert!(text.contains(&format!("will add ten minutes to the total time.\n{single}\n")));
		assert!(text.contains(&format!("minutes to the total time.\n{combined}\n")));
		let anonymous = format_time(1433 + 53 * 60_000, true, ":");
		assert!(text.contains(&format!("add ten minutes to the total time.\n{anonymous}\n\n")));
		assert!(text.ends_with(&format!(
			"{}\n\n",
			format_time(1433 + 2000 + 52 * 60_000, true, ":")
		)));
	}
}
