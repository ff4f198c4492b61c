use crate::codec::{Reader, Writer};
use crate::constants::{
	KEYS_SIZE, NUM_INTERNALS, PLAYER_ENTRY_NAME_SIZE, PLAYER_ENTRY_PADDING, PLAYER_STRUCT_SIZE,
};
use crate::utils::internal_name;
use compact_str::CompactString;
use std::fmt;

/// A player and their progress through the internal levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
	pub name: CompactString,
	/// Indexed by internal number - 1.
	pub skipped_internals: [bool; NUM_INTERNALS],
	/// Internal number - 1 of the last level reached.
	pub last_unlocked_internal: u32,
	/// Internal number - 1 of the selected level, or -1 when an external
	/// level was played last.
	pub selected_internal: i32,
}

impl Default for PlayerEntry {
	fn default() -> Self {
		Self {
			name: CompactString::default(),
			skipped_internals: [false; NUM_INTERNALS],
			last_unlocked_internal: 0,
			selected_internal: 0,
		}
	}
}

impl PlayerEntry {
	pub fn new(name: &str) -> Self {
		Self { name: name.into(), ..Self::default() }
	}

	pub(crate) fn read(r: &mut Reader) -> Self {
		let name = r.string(PLAYER_ENTRY_NAME_SIZE);
		let mut skipped_internals = [false; NUM_INTERNALS];
		for (slot, skipped) in skipped_internals.iter_mut().zip(r.bools(NUM_INTERNALS)) {
			*slot = skipped;
		}
		r.skip(PLAYER_ENTRY_PADDING);
		let last_unlocked_internal = r.u32();
		let selected_internal = r.i32();
		Self { name, skipped_internals, last_unlocked_internal, selected_internal }
	}

	pub(crate) fn write(&self, w: &mut Writer) {
		w.string(&self.name, PLAYER_ENTRY_NAME_SIZE);
		w.bools(&self.skipped_internals, NUM_INTERNALS);
		w.zeros(PLAYER_ENTRY_PADDING);
		w.u32(self.last_unlocked_internal);
		w.i32(self.selected_internal);
	}

	pub fn to_buffer(&self) -> [u8; PLAYER_STRUCT_SIZE] {
		let mut w = Writer::with_capacity(PLAYER_STRUCT_SIZE);
		self.write(&mut w);
		let mut out = [0u8; PLAYER_STRUCT_SIZE];
		out.copy_from_slice(&w.into_inner());
		out
	}

	pub fn from_buffer(buf: &[u8; PLAYER_STRUCT_SIZE]) -> Self {
		Self::read(&mut Reader::new(buf))
	}
}

impl fmt::Display for PlayerEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let skips: Vec<String> = self
			.skipped_internals
			.iter()
			.enumerate()
			.filter(|(_, skipped)| **skipped)
			.map(|(i, _)| internal_name(i as i64, true, "."))
			.collect();
		let selected = internal_name(self.selected_internal.into(), true, ".");
		write!(
			f,
			"PlayerEntry(name: {}, skipped internals: {}, last unlocked internal: {}, selected internal: {})",
			self.name,
			if skips.is_empty() { "None".to_string() } else { skips.join(", ") },
			internal_name(self.last_unlocked_internal.into(), true, "."),
			if selected.is_empty() { "None" } else { selected.as_str() },
		)
	}
}

/// Key bindings of player A or player B, as DirectInput scan codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerKeys {
	pub throttle: u32,
	pub brake: u32,
	pub rotate_right: u32,
	pub rotate_left: u32,
	pub change_direction: u32,
	pub toggle_navigator: u32,
	pub toggle_timer: u32,
	/// Shows or hides this player's half of the split screen.
	pub toggle_show_hide: u32,
}

impl PlayerKeys {
	pub const DEFAULT_A: Self = Self::from_array([200, 208, 205, 203, 57, 47, 20, 2]);
	pub const DEFAULT_B: Self = Self::from_array([76, 80, 81, 79, 82, 48, 21, 3]);

	pub const fn from_array(keys: [u32; 8]) -> Self {
		Self {
			throttle: keys[0],
			brake: keys[1],
			rotate_right: keys[2],
			rotate_left: keys[3],
			change_direction: keys[4],
			toggle_navigator: keys[5],
			toggle_timer: keys[6],
			toggle_show_hide: keys[7],
		}
	}

	pub const fn to_array(&self) -> [u32; 8] {
		[
			self.throttle,
			self.brake,
			self.rotate_right,
			self.rotate_left,
			self.change_direction,
			self.toggle_navigator,
			self.toggle_timer,
			self.toggle_show_hide,
		]
	}

	pub(crate) fn read(r: &mut Reader) -> Self {
		let mut keys = [0u32; 8];
		for key in &mut keys {
			*key = r.u32();
		}
		Self::from_array(keys)
	}

	pub(crate) fn write(&self, w: &mut Writer) {
		let start = w.len();
		for key in self.to_array() {
			w.u32(key);
		}
		debug_assert_eq!(w.len() - start, KEYS_SIZE);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn player_entry_layout() {
		let mut player = PlayerEntry::new("AB");
		player.skipped_internals[2] = true;
		player.last_unlocked_internal = 7;
		player.selected_internal = -1;
		let buf = player.to_buffer();
		assert_eq!(&buf[..3], b"AB\0");
		assert_eq!(buf[PLAYER_ENTRY_NAME_SIZE + 2], 1);
		let padding = PLAYER_ENTRY_NAME_SIZE + NUM_INTERNALS;
		assert!(buf[padding..padding + PLAYER_ENTRY_PADDING].iter().all(|&b| b == 0));
		assert_eq!(buf[108..112], 7u32.to_le_bytes());
		assert_eq!(buf[112..116], (-1i32).to_le_bytes());
		assert_eq!(PlayerEntry::from_buffer(&buf), player);
	}

	#[test]
	fn padding_ignored_on_read() {
		let mut buf = PlayerEntry::new("X").to_buffer();
		buf[PLAYER_ENTRY_NAME_SIZE + NUM_INTERNALS] = 0xFF;
		assert_eq!(PlayerEntry::from_buffer(&buf), PlayerEntry::new("X"));
	}

	#[test]
	fn long_name_is_clipped() {
		let player = PlayerEntry::new("ABCDEFGHIJKLMNOPQRS");
		let decoded = PlayerEntry::from_buffer(&player.to_buffer());
		assert_eq!(decoded.name, "ABCDEFGHIJKLMNOP");
	}

	#[test]
	fn display_lists_progress() {
		let mut player = PlayerEntry::new("AB");
		player.skipped_internals[0] = true;
		player.skipped_internals[3] = true;
		player.last_unlocked_internal = 4;
		player.selected_internal = -1;
		assert_eq!(
			player.to_string(),
			"PlayerEntry(name: AB, skipped internals: 1. Warm Up, 4. Over and Under, \
			 last unlocked internal: 5. Uphill Battle, selected internal: None)"
		);
	}

	#[test]
	fn keys_keep_field_order() {
		let keys = PlayerKeys::DEFAULT_B;
		assert_eq!(keys.throttle, 76);
		assert_eq!(keys.toggle_show_hide, 3);
		let mut w = Writer::default();
		keys.write(&mut w);
		let buf = w.into_inner();
		assert_eq!(buf[4..8], 80u32.to_le_bytes());
		assert_eq!(PlayerKeys::read(&mut Reader::new(&buf)), keys);
	}
}
