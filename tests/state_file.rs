use elma_state::{
	list_players, rename_player_in_file, write_stats_txt, Error, ErrorKind, PlayerEntry, State,
	TopTime, STATE_SIZE,
};
use std::fs;
use tempfile::tempdir;

fn sample() -> State {
	let mut state = State::default();
	state.players.push(PlayerEntry::new("ABC"));
	state.players.push(PlayerEntry::new("DEF"));
	state.player_a_name = "ABC".into();
	state.times[0].single.insert(TopTime::single(1433, "ABC"));
	state.times[0].single.insert(TopTime::single(1500, "DEF"));
	state.times[4].multi.insert(TopTime::multi(4000, "DEF", "ABC"));
	state
}

#[test]
fn save_and_load() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.dat");
	let state = sample();
	state.save(&path, false, false).unwrap();
	assert_eq!(fs::metadata(&path).unwrap().len(), STATE_SIZE as u64);
	assert_eq!(State::load(&path).unwrap(), state);
	assert_eq!(list_players(&path).unwrap(), ["ABC", "DEF"]);
}

#[test]
fn load_missing_file() {
	let dir = tempdir().unwrap();
	let err = State::load(dir.path().join("nope.dat")).unwrap_err();
	assert!(matches!(err, Error::NotFound(_)));
	assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn load_truncated_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.dat");
	fs::write(&path, vec![0u8; 1000]).unwrap();
	assert!(matches!(State::load(&path), Err(Error::SizeMismatch(1000))));
}

#[test]
fn save_respects_overwrite_flag() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.dat");
	fs::write(&path, b"keep").unwrap();
	let err = sample().save(&path, false, false).unwrap_err();
	assert!(matches!(err, Error::AlreadyExists(_)));
	assert_eq!(fs::read(&path).unwrap(), b"keep");

	sample().save(&path, true, false).unwrap();
	assert_eq!(State::load(&path).unwrap(), sample());
}

#[test]
fn save_respects_create_dirs_flag() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("eol").join("state.dat");
	let err = sample().save(&path, false, false).unwrap_err();
	assert!(matches!(err, Error::ParentMissing(_)));
	assert!(!path.exists());

	sample().save(&path, false, true).unwrap();
	assert!(path.exists());
}

#[test]
fn rename_on_disk() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.dat");
	sample().save(&path, false, false).unwrap();

	rename_player_in_file(&path, "ABC", "XYZ").unwrap();
	let state = State::load(&path).unwrap();
	assert_eq!(state.players[0].name, "XYZ");
	assert_eq!(state.player_a_name, "XYZ");
	assert_eq!(state.times[0].single.entries()[0], TopTime::single(1433, "XYZ"));
	assert_eq!(state.times[4].multi.entries()[0], TopTime::multi(4000, "DEF", "XYZ"));

	let before = fs::read(&path).unwrap();
	let err = rename_player_in_file(&path, "XYZ", "DEF").unwrap_err();
	assert!(matches!(err, Error::DuplicatePlayer(_)));
	assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn rename_loaded_state_and_save_in_place() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.dat");
	sample().save(&path, false, false).unwrap();

	let mut state = State::load(&path).unwrap();
	state.rename_player("DEF", "GHI").unwrap();
	state.save(&path, true, false).unwrap();
	let reloaded = State::load(&path).unwrap();
	assert_eq!(reloaded, state);
	assert_eq!(reloaded.times[4].multi.entries()[0], TopTime::multi(4000, "GHI", "ABC"));
}

#[test]
fn stats_txt_to_file() {
	let dir = tempdir().unwrap();
	let out = dir.path().join("stats.txt");
	let state = sample();
	write_stats_txt(&state, &out, false).unwrap();
	let text = fs::read_to_string(&out).unwrap();
	assert_eq!(text, state.stats_txt());
	assert!(text.contains("\nLevel 5, Uphill Battle:\n    00:40:00    DEF, ABC\n"));
	assert!(matches!(write_stats_txt(&state, &out, false), Err(Error::AlreadyExists(_))));
}
