use crate::constants::INTERNAL_NAMES;
use crate::error::{Error, Result};
use std::{fs, path::Path};
use tracing::debug;

/// Formats hundredths of a second as `[hours:]minutes:seconds:hundredths`.
///
/// With `pad`, hours are shown only when non-zero and the other units are
/// two digits wide (`01:05:33`). Without it, leading zero units are dropped
/// (`1:05:33`, `5:33`).
pub fn format_time(hundredths: i64, pad: bool, sep: &str) -> String {
	let (secs, hundredths) = (hundredths.div_euclid(100), hundredths.rem_euclid(100));
	let (mins, secs) = (secs.div_euclid(60), secs.rem_euclid(60));
	let (hours, mins) = (mins.div_euclid(60), mins.rem_euclid(60));
	if pad {
		let hours = if hours > 0 { format!("{hours:02}{sep}") } else { String::new() };
		format!("{hours}{mins:02}{sep}{secs:02}{sep}{hundredths:02}")
	} else {
		let hours_str = if hours > 0 { format!("{hours}{sep}") } else { String::new() };
		let (mins_str, secs_str) = if mins > 0 {
			(format!("{mins}{sep}"), format!("{secs:02}{sep}"))
		} else {
			(String::new(), format!("{secs}{sep}"))
		};
		format!("{hours_str}{mins_str}{secs_str}{hundredths:02}")
	}
}

/// Name of the internal level at 0-based `index`, e.g. `"1. Warm Up"` with
/// `include_number` and `sep = "."`. Empty for unknown indices.
pub fn internal_name(index: i64, include_number: bool, sep: &str) -> String {
	let Some(name) = usize::try_from(index).ok().and_then(|i| INTERNAL_NAMES.get(i)) else {
		return String::new();
	};
	if include_number {
		format!("{}{sep} {name}", index + 1)
	} else {
		name.to_string()
	}
}

/// Checks that `file` may be written, optionally creating its parent
/// directories.
pub fn check_writable_file(file: &Path, allow_overwrite: bool, create_dirs: bool) -> Result<()> {
	if file.exists() && !allow_overwrite {
		return Err(Error::AlreadyExists(file.to_path_buf()));
	}
	let parent = match file.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};
	if create_dirs {
		debug!("creating {}", parent.display());
		fs::create_dir_all(parent)?;
	} else if !parent.is_dir() {
		return Err(Error::ParentMissing(parent.to_path_buf()));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn padded_times() {
		assert_eq!(format_time(0, true, ":"), "00:00:00");
		assert_eq!(format_time(1433, true, ":"), "00:14:33");
		assert_eq!(format_time(60_000, true, ":"), "10:00:00");
		assert_eq!(format_time(360_000 + 6133, true, ":"), "01:01:01:33");
	}

	#[test]
	fn unpadded_times() {
		assert_eq!(format_time(1433, false, ":"), "14:33");
		assert_eq!(format_time(533, false, ":"), "5:33");
		assert_eq!(format_time(6533, false, ":"), "1:05:33");
		assert_eq!(format_time(360_000 + 33, false, "."), "1.0.33");
		assert_eq!(format_time(360_000 + 6133, false, ":"), "1:1:01:33");
	}

	#[test]
	fn internal_names() {
		assert_eq!(internal_name(0, true, "."), "1. Warm Up");
		assert_eq!(internal_name(53, false, "."), "Pipe");
		assert_eq!(internal_name(1, true, ","), "2, Flat Track");
		assert_eq!(internal_name(-1, true, "."), "");
		assert_eq!(internal_name(55, false, "."), "");
	}
}
