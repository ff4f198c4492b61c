use crate::codec::{Reader, Writer};
use crate::constants::{
	LEVEL_NAME_SIZE, NUM_INTERNALS, NUM_LEVELS, NUM_PLAYERS, PENALTY_TIME, PLAYER_NAME_SIZE,
	PLAYER_STRUCT_SIZE, STATE_SIZE, STATE_VERSION, TOP10_SIZE,
};
use crate::crypt::crypt_state;
use crate::error::{Error, Result};
use crate::player::{PlayerEntry, PlayerKeys};
use crate::top10::Top10;
use crate::types::{PlayMode, Registration, SoundOptimization, VideoDetail};
use crate::utils::{check_writable_file, format_time};
use compact_str::CompactString;
use std::{fmt, fs, path::Path};
use tracing::{debug, info};

/// An Elasto Mania state.dat: best times, players, options and keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
	pub version: u32,
	/// One slot per level; the first [`NUM_INTERNALS`] are the internals.
	pub times: [Top10; NUM_LEVELS],
	/// The players in use. state.dat always has room for [`NUM_PLAYERS`];
	/// the unused slots are not kept here.
	pub players: Vec<PlayerEntry>,
	pub player_a_name: CompactString,
	pub player_b_name: CompactString,
	pub sound_enabled: bool,
	pub sound_optimization: SoundOptimization,
	pub play_mode: PlayMode,
	pub flag_tag: bool,
	/// Player A rides the "101" bike instead of the "8" bike. Stored inverted.
	pub swap_bikes: bool,
	/// High detail shows grass, pictures and textures.
	pub video_detail: VideoDetail,
	pub animated_objects: bool,
	pub animated_menus: bool,
	pub player_a_keys: PlayerKeys,
	pub player_b_keys: PlayerKeys,
	pub inc_screen_size_key: u32,
	pub dec_screen_size_key: u32,
	pub screenshot_key: u32,
	/// Level last opened in the editor, with its .lev extension.
	pub last_edited_lev_name: CompactString,
	pub last_played_external: CompactString,
	pub registration: Registration,
}

impl Default for State {
	fn default() -> Self {
		Self {
			version: STATE_VERSION,
			times: std::array::from_fn(|_| Top10::default()),
			players: Vec::new(),
			player_a_name: CompactString::default(),
			player_b_name: CompactString::default(),
			sound_enabled: true,
			sound_optimization: SoundOptimization::BestQuality,
			play_mode: PlayMode::Single,
			flag_tag: false,
			swap_bikes: false,
			video_detail: VideoDetail::High,
			animated_objects: true,
			animated_menus: true,
			player_a_keys: PlayerKeys::DEFAULT_A,
			player_b_keys: PlayerKeys::DEFAULT_B,
			inc_screen_size_key: 13,
			dec_screen_size_key: 12,
			screenshot_key: 23,
			last_edited_lev_name: CompactString::default(),
			last_played_external: CompactString::default(),
			registration: Registration::Registered,
		}
	}
}

impl State {
	pub fn player_count(&self) -> usize {
		self.players.len()
	}

	pub fn player(&self, name: &str) -> Option<&PlayerEntry> {
		self.players.iter().find(|p| p.name == name)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(Error::NotFound(path.to_path_buf()));
		}
		let state = Self::unpack(&fs::read(path)?)?;
		info!("loaded {} with {} players", path.display(), state.player_count());
		Ok(state)
	}

	pub fn save(
		&self,
		path: impl AsRef<Path>,
		allow_overwrite: bool,
		create_dirs: bool,
	) -> Result<()> {
		let path = path.as_ref();
		check_writable_file(path, allow_overwrite, create_dirs)?;
		let packed = self.pack()?;
		fs::write(path, packed)?;
		info!("saved {}", path.display());
		Ok(())
	}

	/// Serializes to the encrypted on-disk form, exactly [`STATE_SIZE`] bytes.
	pub fn pack(&self) -> Result<Vec<u8>> {
		if self.players.len() > NUM_PLAYERS {
			return Err(Error::TooManyPlayers(self.players.len()));
		}
		let mut w = Writer::with_capacity(STATE_SIZE);
		w.u32(self.version);
		for top10 in &self.times {
			w.bytes(&top10.to_buffer());
		}
		let filler = PlayerEntry::default();
		for i in 0..NUM_PLAYERS {
			self.players.get(i).unwrap_or(&filler).write(&mut w);
		}
		w.u32(self.players.len() as u32);
		w.string(&self.player_a_name, PLAYER_NAME_SIZE);
		w.string(&self.player_b_name, PLAYER_NAME_SIZE);
		w.bool32(self.sound_enabled);
		w.u32(self.sound_optimization.value());
		w.u32(self.play_mode.value());
		w.bool32(self.flag_tag);
		w.bool32(!self.swap_bikes);
		w.u32(self.video_detail.value());
		w.bool32(self.animated_objects);
		w.bool32(self.animated_menus);
		self.player_a_keys.write(&mut w);
		self.player_b_keys.write(&mut w);
		w.u32(self.inc_screen_size_key);
		w.u32(self.dec_screen_size_key);
		w.u32(self.screenshot_key);
		w.string(&self.last_edited_lev_name, LEVEL_NAME_SIZE);
		w.string(&self.last_played_external, LEVEL_NAME_SIZE);
		w.u32(self.registration.value());

		let mut buf = w.into_inner();
		assert_eq!(buf.len(), STATE_SIZE, "packed state.dat has the wrong size");
		crypt_state(&mut buf);
		debug!("packed state.dat with {} players", self.players.len());
		Ok(buf)
	}

	/// Parses the encrypted on-disk form.
	pub fn unpack(packed: &[u8]) -> Result<Self> {
		if packed.len() != STATE_SIZE {
			return Err(Error::SizeMismatch(packed.len()));
		}
		let mut buf = packed.to_vec();
		crypt_state(&mut buf);
		let mut r = Reader::new(&buf);

		let version = r.u32();
		if version != STATE_VERSION {
			return Err(Error::UnsupportedVersion(version));
		}
		let mut times: [Top10; NUM_LEVELS] = std::array::from_fn(|_| Top10::default());
		for top10 in &mut times {
			*top10 = Top10::from_buffer(&r.array::<TOP10_SIZE>())?;
		}

		let mut player_block = Reader::new(r.bytes(NUM_PLAYERS * PLAYER_STRUCT_SIZE));
		let player_count = r.u32();
		if player_count as usize > NUM_PLAYERS {
			return Err(Error::CapacityExceeded(player_count));
		}
		let players = (0..player_count).map(|_| PlayerEntry::read(&mut player_block)).collect();

		let player_a_name = r.string(PLAYER_NAME_SIZE);
		let player_b_name = r.string(PLAYER_NAME_SIZE);
		let sound_enabled = r.bool32();
		let sound_optimization = SoundOptimization::try_from(r.u32())?;
		let play_mode = PlayMode::try_from(r.u32())?;
		let flag_tag = r.bool32();
		let swap_bikes = !r.bool32();
		let video_detail = VideoDetail::try_from(r.u32())?;
		let animated_objects = r.bool32();
		let animated_menus = r.bool32();
		let player_a_keys = PlayerKeys::read(&mut r);
		let player_b_keys = PlayerKeys::read(&mut r);
		let inc_screen_size_key = r.u32();
		let dec_screen_size_key = r.u32();
		let screenshot_key = r.u32();
		let last_edited_lev_name = r.string(LEVEL_NAME_SIZE);
		let last_played_external = r.string(LEVEL_NAME_SIZE);
		let registration = Registration::try_from(r.u32())?;
		debug_assert_eq!(r.remaining(), 0);
		debug!("unpacked state.dat with {player_count} players");

		Ok(Self {
			version,
			times,
			players,
			player_a_name,
			player_b_name,
			sound_enabled,
			sound_optimization,
			play_mode,
			flag_tag,
			swap_bikes,
			video_detail,
			animated_objects,
			animated_menus,
			player_a_keys,
			player_b_keys,
			inc_screen_size_key,
			dec_screen_size_key,
			screenshot_key,
			last_edited_lev_name,
			last_played_external,
			registration,
		})
	}

	/// Total time of `player` over all internals in hundredths, or the
	/// anonymous total for `None`. Levels without a time, or with a time over
	/// ten minutes, count as ten minutes. With `combined`, each level takes
	/// the better of the single player and multiplayer time.
	pub fn total_time(&self, player: Option<&str>, combined: bool) -> i64 {
		let capped = |time: Option<i32>| time.filter(|&t| t <= PENALTY_TIME).unwrap_or(PENALTY_TIME);
		self.times
			.iter()
			.take(NUM_INTERNALS)
			.map(|top10| {
				let single = capped(top10.best_time(player, true));
				let level = if combined {
					single.min(capped(top10.best_time(player, false)))
				} else {
					single
				};
				i64::from(level)
			})
			.sum()
	}

	/// Renames a player, including their best times and the selected
	/// player names. `new_name` must not belong to another player, but may
	/// already appear in the best times.
	pub fn rename_player(&mut self, old_name: &str, new_name: &str) -> Result<()> {
		if self.player(new_name).is_some() {
			return Err(Error::DuplicatePlayer(new_name.to_string()));
		}
		if let Some(player) = self.players.iter_mut().find(|p| p.name == old_name) {
			player.name = new_name.into();
		}
		for top10 in &mut self.times {
			top10.rename(old_name, new_name);
		}
		if self.player_a_name == old_name {
			self.player_a_name = new_name.into();
		}
		if self.player_b_name == old_name {
			self.player_b_name = new_name.into();
		}
		info!("renamed player {old_name} to {new_name}");
		Ok(())
	}

	/// Players with a non-empty name.
	pub(crate) fn named_players(&self) -> impl Iterator<Item = &PlayerEntry> {
		self.players.iter().filter(|p| !p.name.is_empty())
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let names: Vec<&str> = self.named_players().map(|p| p.name.as_str()).collect();
		let totals: Vec<String> = self
			.named_players()
			.map(|p| {
				let total = self.total_time(Some(p.name.as_str()), false);
				format!("{} {}", format_time(total, true, ":"), p.name)
			})
			.collect();
		let details: Vec<String> = self.named_players().map(|p| p.to_string()).collect();
		writeln!(f, "players: {}", names.join(", "))?;
		writeln!(f, "player count: {}", self.player_count())?;
		writeln!(f, "total times: {}", totals.join(", "))?;
		writeln!(f, "player details: {}", details.join(", "))
	}
}
