//! The XOR stream Elma uses to obfuscate state.dat and top10 lists.
//!
//! The stream is restarted for every piece of the buffer, and the same call
//! both encrypts and decrypts.

use crate::constants::{
	KEYS_SIZE, LEVEL_NAME_SIZE, NUM_LEVELS, NUM_PLAYERS, PLAYER_NAME_SIZE, PLAYER_STRUCT_SIZE,
	TOP10_SIZE,
};

/// Keystream parameters `(a, b, c, d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptKey {
	pub a: i64,
	pub b: i64,
	pub c: i64,
	pub d: i64,
}

pub const TOP10_KEY: CryptKey = CryptKey { a: 21, b: 9783, c: 3389, d: 31 };
pub const STATE_KEY: CryptKey = CryptKey { a: 23, b: 9782, c: 3391, d: 31 };

/// Piece lengths of state.dat, in file order. The trailing registration
/// marker is not part of any piece and stays in clear.
pub const STATE_PIECES: &[usize] = &[
	4, // version
	NUM_LEVELS * TOP10_SIZE,
	NUM_PLAYERS * PLAYER_STRUCT_SIZE,
	4, // player count
	PLAYER_NAME_SIZE,
	PLAYER_NAME_SIZE,
	4, 4, 4, 4, 4, 4, 4, 4, // options
	KEYS_SIZE,
	KEYS_SIZE,
	4, 4, 4, // screen size and screenshot keys
	LEVEL_NAME_SIZE,
	LEVEL_NAME_SIZE,
];

/// Remainder of the low 16 bits of `a`, read as an `i16`, with the sign of a
/// C-style `%`.
pub fn signed_mod(a: i64, b: i64) -> i64 {
	let a = a & 0xFFFF;
	let r = a % b;
	if a > 0x7FFF {
		-b + (r - 0x10000).rem_euclid(b)
	} else {
		r
	}
}

/// Encrypts or decrypts one piece in place.
pub fn crypt_piece(piece: &mut [u8], key: CryptKey) {
	let Some((first, rest)) = piece.split_first_mut() else {
		return;
	};
	*first ^= key.a as u8;
	// only the low 16 bits feed back into the stream, so wrapping is exact
	let mut x = key
		.b
		.wrapping_add(key.a.wrapping_mul(key.c))
		.wrapping_mul(key.d)
		.wrapping_add(key.c);
	for byte in rest {
		*byte ^= (x & 0xFF) as u8;
		x = x.wrapping_add(signed_mod(x, key.c).wrapping_mul(key.c).wrapping_mul(key.d));
	}
}

/// Applies [`crypt_piece`] to consecutive pieces of `buf`. Bytes past the
/// last piece are left untouched, and so is a piece cut short by the end of
/// the buffer.
pub fn crypt_pieces(buf: &mut [u8], pieces: &[usize], key: CryptKey) {
	let mut offset = 0;
	for &len in pieces {
		let Some(piece) = buf.get_mut(offset..offset + len) else {
			break;
		};
		crypt_piece(piece, key);
		offset += len;
	}
}

/// Encrypts or decrypts a whole state.dat buffer in place.
pub fn crypt_state(buf: &mut [u8]) {
	crypt_pieces(buf, STATE_PIECES, STATE_KEY);
}

/// Encrypts or decrypts a standalone top10 buffer (single and multi lists).
pub fn crypt_top10(buf: &mut [u8]) {
	crypt_piece(buf, TOP10_KEY);
}
