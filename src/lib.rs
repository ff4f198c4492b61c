pub(crate) mod codec;
pub mod constants;
pub mod crypt;
pub mod error;
pub mod player;
pub mod state;
pub mod stats;
pub mod top10;
pub mod types;
pub mod utils;

pub use constants::*;
pub use crypt::{crypt_state, crypt_top10};
pub use error::*;
pub use player::*;
pub use state::*;
pub use top10::*;
pub use types::*;
pub use utils::{format_time, internal_name};

use std::path::Path;

pub fn list_players(state_path: &Path) -> Result<Vec<String>> {
	let state = State::load(state_path)?;
	Ok(state.players.iter().map(|p| p.name.to_string()).collect())
}

/// Renames a player inside a state.dat on disk and writes it back in place.
pub fn rename_player_in_file(state_path: &Path, old_name: &str, new_name: &str) -> Result<State> {
	let mut state = State::load(state_path)?;
	state.rename_player(old_name, new_name)?;
	state.save(state_path, true, false)?;
	Ok(state)
}

/// Writes the stats.txt of `state` to `out_path`.
pub fn write_stats_txt(state: &State, out_path: &Path, allow_overwrite: bool) -> Result<()> {
	utils::check_writable_file(out_path, allow_overwrite, false)?;
	std::fs::write(out_path, state.stats_txt())?;
	Ok(())
}
