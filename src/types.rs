use crate::constants::{REGISTERED_MARKER, SHAREWARE_MARKER};
use crate::error::Error;

macro_rules! option_enum {
	($name:ident, $field:literal { $($variant:ident = $value:literal),* $(,)? }) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant),*
		}

		impl $name {
			pub fn value(&self) -> u32 {
				match self {
					$(Self::$variant => $value),*
				}
			}
		}

		impl TryFrom<u32> for $name {
			type Error = Error;

			fn try_from(value: u32) -> Result<Self, Error> {
				match value {
					$($value => Ok(Self::$variant),)*
					_ => Err(Error::InvalidEnum { field: $field, value }),
				}
			}
		}
	};
}

option_enum!(SoundOptimization, "sound optimization" {
	Compatibility = 1,
	BestQuality = 0,
});

option_enum!(PlayMode, "play mode" {
	Single = 1,
	Multi = 0,
});

option_enum!(VideoDetail, "video detail" {
	Low = 0,
	High = 1,
});

/// Edition marker stored unencrypted at the end of state.dat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registration {
	Registered,
	Shareware,
}

impl Registration {
	pub fn value(&self) -> u32 {
		match self {
			Self::Registered => REGISTERED_MARKER,
			Self::Shareware => SHAREWARE_MARKER,
		}
	}
}

impl TryFrom<u32> for Registration {
	type Error = Error;

	fn try_from(value: u32) -> Result<Self, Error> {
		match value {
			REGISTERED_MARKER => Ok(Self::Registered),
			SHAREWARE_MARKER => Ok(Self::Shareware),
			_ => Err(Error::InvalidRegistrationMarker(value)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn values_match_the_game() {
		assert_eq!(SoundOptimization::Compatibility.value(), 1);
		assert_eq!(SoundOptimization::BestQuality.value(), 0);
		assert_eq!(PlayMode::Single.value(), 1);
		assert_eq!(PlayMode::Multi.value(), 0);
		assert_eq!(VideoDetail::Low.value(), 0);
		assert_eq!(VideoDetail::High.value(), 1);
		assert_eq!(Registration::Shareware.value(), SHAREWARE_MARKER);
	}

	#[test]
	fn unknown_values_are_rejected() {
		assert!(matches!(
			VideoDetail::try_from(2),
			Err(Error::InvalidEnum { field: "video detail", value: 2 })
		));
		assert!(matches!(PlayMode::try_from(7), Err(Error::InvalidEnum { .. })));
		assert!(matches!(Registration::try_from(0), Err(Error::InvalidRegistrationMarker(0))));
		assert_eq!(Registration::try_from(REGISTERED_MARKER).ok(), Some(Registration::Registered));
	}
}
