use crate::constants::{NUM_PLAYERS, STATE_SIZE, TOP10_ENTRIES};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The buffer does not have the shape of a state.dat at all.
	Structural,
	/// A field holds a value the game never writes.
	Format,
	/// The caller asked for something the file cannot represent.
	Precondition,
	Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("state.dat must be {size} bytes, got {0}", size = STATE_SIZE)]
	SizeMismatch(usize),
	#[error("unsupported state.dat version {0}")]
	UnsupportedVersion(u32),
	#[error("player count {0} exceeds the {max} player slots", max = NUM_PLAYERS)]
	CapacityExceeded(u32),
	#[error("invalid {field} value {value}")]
	InvalidEnum { field: &'static str, value: u32 },
	#[error("invalid registration marker {0}")]
	InvalidRegistrationMarker(u32),
	#[error("top10 list claims {0} entries, at most {max} fit", max = TOP10_ENTRIES)]
	InvalidTop10Count(u32),
	#[error("player '{0}' already exists")]
	DuplicatePlayer(String),
	#[error("{0} players do not fit in the {max} player slots", max = NUM_PLAYERS)]
	TooManyPlayers(usize),
	#[error("file {} not found", .0.display())]
	NotFound(PathBuf),
	#[error("file {} already exists", .0.display())]
	AlreadyExists(PathBuf),
	#[error("directory {} not found", .0.display())]
	ParentMissing(PathBuf),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::SizeMismatch(_) => ErrorKind::Structural,
			Self::UnsupportedVersion(_)
			| Self::CapacityExceeded(_)
			| Self::InvalidEnum { .. }
			| Self::InvalidRegistrationMarker(_)
			| Self::InvalidTop10Count(_) => ErrorKind::Format,
			Self::DuplicatePlayer(_) | Self::TooManyPlayers(_) => ErrorKind::Precondition,
			Self::NotFound(_) | Self::AlreadyExists(_) | Self::ParentMissing(_) | Self::Io(_) => {
				ErrorKind::Io
			}
		}
	}
}
