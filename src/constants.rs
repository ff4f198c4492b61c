/// Size of a complete state.dat file in bytes.
pub const STATE_SIZE: usize = 67910;
/// The only state.dat version written by Elma 1.3.
pub const STATE_VERSION: u32 = 200;

/// Leaderboard slots stored in state.dat (internals plus unused slots).
pub const NUM_LEVELS: usize = 90;
pub const NUM_INTERNALS: usize = 54;
pub const TOP10_ENTRIES: usize = 10;
pub const TOP10_LIST_SIZE: usize = 4 + TOP10_ENTRIES * (4 + 2 * PLAYER_NAME_SIZE);
pub const TOP10_SIZE: usize = 2 * TOP10_LIST_SIZE;

pub const NUM_PLAYERS: usize = 50;
pub const PLAYER_STRUCT_SIZE: usize = 116;
pub const PLAYER_ENTRY_NAME_SIZE: usize = 16;
pub const PLAYER_ENTRY_PADDING: usize = 38;
pub const PLAYER_NAME_SIZE: usize = 15;
pub const LEVEL_NAME_SIZE: usize = 20;
pub const KEYS_SIZE: usize = 32;

pub const REGISTERED_MARKER: u32 = 123_432_221;
pub const SHAREWARE_MARKER: u32 = 123_432_112;

/// Ten minutes in hundredths, counted for every level without a usable time.
pub const PENALTY_TIME: i32 = 60_000;
pub const REPORT_COLUMN_WIDTH: usize = 12;

const _: () = assert!(
	PLAYER_STRUCT_SIZE == PLAYER_ENTRY_NAME_SIZE + NUM_INTERNALS + PLAYER_ENTRY_PADDING + 4 + 4
);
const _: () = assert!(TOP10_SIZE == 688);
const _: () = assert!(
	STATE_SIZE
		== 4 + NUM_LEVELS * TOP10_SIZE
			+ NUM_PLAYERS * PLAYER_STRUCT_SIZE
			+ 4 + 2 * PLAYER_NAME_SIZE
			+ 8 * 4 + 2 * KEYS_SIZE
			+ 3 * 4 + 2 * LEVEL_NAME_SIZE
			+ 4
);

/// Display names of the internal levels, 0-indexed. The last entry is the
/// "More Levels" menu item, which is not a playable internal.
pub const INTERNAL_NAMES: [&str; NUM_INTERNALS + 1] = [
	"Warm Up",
	"Flat Track",
	"Twin Peaks",
	"Over and Under",
	"Uphill Battle",
	"Long Haul",
	"Hi Flyer",
	"Tag",
	"Tunnel Terror",
	"The Steppes",
	"Gravity Ride",
	"Islands in the Sky",
	"Hill Legend",
	"Loop-de-Loop",
	"Serpents Tale",
	"New Wave",
	"Labyrinth",
	"Spiral",
	"Turnaround",
	"Upside Down",
	"Hangman",
	"Slalom",
	"Quick Round",
	"Ramp Frenzy",
	"Precarious",
	"Circuitous",
	"Shelf Life",
	"Bounce Back",
	"Headbanger",
	"On the Rocks",
	"Sky Scraper",
	"Hang Tight",
	"Apple Harvest",
	"Steep Corner",
	"Zig-Zag",
	"Bumpy Journey",
	"Labyrinth Pro",
	"Fruit in the Den",
	"Jaws",
	"Curvaceous",
	"Haircut",
	"Double Trouble",
	"Framework",
	"Enduro",
	"He He",
	"Freefall",
	"Sink",
	"Bowling",
	"Enigma",
	"Downhill",
	"What the Heck",
	"Expert System",
	"Tricks Abound",
	"Pipe",
	"More Levels",
];
