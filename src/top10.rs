use crate::codec::{Reader, Writer};
use crate::constants::{
	PLAYER_NAME_SIZE, REPORT_COLUMN_WIDTH, TOP10_ENTRIES, TOP10_LIST_SIZE, TOP10_SIZE,
};
use crate::crypt::crypt_top10;
use crate::error::{Error, Result};
use crate::utils::format_time;
use compact_str::CompactString;
use std::fmt::Write as _;

/// One leaderboard entry. In single player lists `kuski2` repeats `kuski`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopTime {
	/// Hundredths of a second.
	pub time: i32,
	pub kuski: CompactString,
	pub kuski2: CompactString,
}

impl TopTime {
	pub fn single(time: i32, kuski: &str) -> Self {
		Self { time, kuski: kuski.into(), kuski2: kuski.into() }
	}

	pub fn multi(time: i32, kuski: &str, kuski2: &str) -> Self {
		Self { time, kuski: kuski.into(), kuski2: kuski2.into() }
	}

	fn involves(&self, player: &str) -> bool {
		self.kuski == player || self.kuski2 == player
	}
}

/// A ranked list of at most [`TOP10_ENTRIES`] times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopList {
	entries: Vec<TopTime>,
}

impl TopList {
	pub fn entries(&self) -> &[TopTime] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Inserts `entry` in rank order. Returns false if it did not make the list.
	pub fn insert(&mut self, entry: TopTime) -> bool {
		let rank = self.entries.partition_point(|e| e.time <= entry.time);
		if rank >= TOP10_ENTRIES {
			return false;
		}
		self.entries.insert(rank, entry);
		self.entries.truncate(TOP10_ENTRIES);
		true
	}

	/// Best time of `player`, or of anyone when `player` is `None`.
	pub fn best_time(&self, player: Option<&str>) -> Option<i32> {
		self.entries
			.iter()
			.filter(|e| player.is_none_or(|p| e.involves(p)))
			.map(|e| e.time)
			.min()
	}

	fn read(r: &mut Reader) -> Result<Self> {
		let count = r.u32();
		if count as usize > TOP10_ENTRIES {
			return Err(Error::InvalidTop10Count(count));
		}
		let count = count as usize;
		let times: Vec<i32> = (0..TOP10_ENTRIES).map(|_| r.i32()).collect();
		let kuskis: Vec<CompactString> =
			(0..TOP10_ENTRIES).map(|_| r.string(PLAYER_NAME_SIZE)).collect();
		let kuskis2: Vec<CompactString> =
			(0..TOP10_ENTRIES).map(|_| r.string(PLAYER_NAME_SIZE)).collect();
		let entries = times
			.into_iter()
			.zip(kuskis)
			.zip(kuskis2)
			.take(count)
			.map(|((time, kuski), kuski2)| TopTime { time, kuski, kuski2 })
			.collect();
		Ok(Self { entries })
	}

	fn write(&self, w: &mut Writer) {
		let entries = &self.entries[..self.entries.len().min(TOP10_ENTRIES)];
		w.u32(entries.len() as u32);
		for i in 0..TOP10_ENTRIES {
			w.i32(entries.get(i).map_or(0, |e| e.time));
		}
		for i in 0..TOP10_ENTRIES {
			w.string(entries.get(i).map_or("", |e| e.kuski.as_str()), PLAYER_NAME_SIZE);
		}
		for i in 0..TOP10_ENTRIES {
			w.string(entries.get(i).map_or("", |e| e.kuski2.as_str()), PLAYER_NAME_SIZE);
		}
	}
}

/// Single and multiplayer best times of one level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Top10 {
	pub single: TopList,
	pub multi: TopList,
}

impl Top10 {
	pub fn from_buffer(buf: &[u8; TOP10_SIZE]) -> Result<Self> {
		let mut r = Reader::new(buf);
		let single = TopList::read(&mut r)?;
		let multi = TopList::read(&mut r)?;
		Ok(Self { single, multi })
	}

	pub fn to_buffer(&self) -> [u8; TOP10_SIZE] {
		let mut w = Writer::with_capacity(TOP10_SIZE);
		self.single.write(&mut w);
		self.multi.write(&mut w);
		debug_assert_eq!(w.len(), 2 * TOP10_LIST_SIZE);
		let mut out = [0u8; TOP10_SIZE];
		out.copy_from_slice(&w.into_inner());
		out
	}

	/// Decodes a top10 stored on its own, encrypted with the top10 key.
	pub fn from_encrypted_buffer(buf: &[u8; TOP10_SIZE]) -> Result<Self> {
		let mut plain = *buf;
		crypt_top10(&mut plain);
		Self::from_buffer(&plain)
	}

	pub fn to_encrypted_buffer(&self) -> [u8; TOP10_SIZE] {
		let mut buf = self.to_buffer();
		crypt_top10(&mut buf);
		buf
	}

	pub fn list(&self, single: bool) -> &TopList {
		if single { &self.single } else { &self.multi }
	}

	/// Best time of `player` (or of anyone for `None`) in single or multiplayer.
	pub fn best_time(&self, player: Option<&str>, single: bool) -> Option<i32> {
		self.list(single).best_time(player)
	}

	pub fn rename(&mut self, old_name: &str, new_name: &str) {
		for t in &mut self.single.entries {
			if t.kuski == old_name {
				t.kuski = new_name.into();
				t.kuski2 = new_name.into();
			}
		}
		for t in &mut self.multi.entries {
			if t.kuski == old_name {
				t.kuski = new_name.into();
			}
			if t.kuski2 == old_name {
				t.kuski2 = new_name.into();
			}
		}
	}

	/// One line per entry, each indented by `indent` spaces. Empty for an
	/// empty list.
	pub fn formatted(&self, single: bool, indent: usize) -> String {
		let mut out = String::new();
		for (i, t) in self.list(single).entries().iter().enumerate() {
			if i > 0 {
				out.push('\n');
			}
			let time = format_time(t.time.into(), true, ":");
			let width = REPORT_COLUMN_WIDTH;
			let _ = write!(out, "{:indent$}{time:<width$}{}", "", t.kuski);
			if !single {
				let _ = write!(out, ", {}", t.kuski2);
			}
		}
		out
	}
}
