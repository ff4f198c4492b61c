//! Fixed-width little-endian fields, as laid out in state.dat.
//!
//! Strings are single-byte Latin-1. Every [`Reader`] in the crate is built
//! over a buffer whose size was checked against the layout first.

use compact_str::CompactString;

pub struct Reader<'a> {
	buf: &'a [u8],
}

impl<'a> Reader<'a> {
	pub fn new(buf: &'a [u8]) -> Self {
		Self { buf }
	}

	pub fn remaining(&self) -> usize {
		self.buf.len()
	}

	pub fn bytes(&mut self, len: usize) -> &'a [u8] {
		let (head, tail) = self.buf.split_at(len);
		self.buf = tail;
		head
	}

	pub fn array<const N: usize>(&mut self) -> [u8; N] {
		let mut out = [0u8; N];
		out.copy_from_slice(self.bytes(N));
		out
	}

	pub fn u32(&mut self) -> u32 {
		u32::from_le_bytes(self.array())
	}

	pub fn i32(&mut self) -> i32 {
		i32::from_le_bytes(self.array())
	}

	pub fn bool32(&mut self) -> bool {
		self.u32() != 0
	}

	/// Reads a `len` byte field up to its first zero byte.
	pub fn string(&mut self, len: usize) -> CompactString {
		decode_string(self.bytes(len))
	}

	pub fn bools(&mut self, len: usize) -> Vec<bool> {
		self.bytes(len).iter().map(|&b| b != 0).collect()
	}

	pub fn skip(&mut self, len: usize) {
		self.bytes(len);
	}
}

#[derive(Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	pub fn with_capacity(capacity: usize) -> Self {
		Self { buf: Vec::with_capacity(capacity) }
	}

	pub fn len(&self) -> usize {
		self.buf.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	pub fn bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	pub fn zeros(&mut self, len: usize) {
		self.buf.resize(self.buf.len() + len, 0);
	}

	pub fn u32(&mut self, value: u32) {
		self.bytes(&value.to_le_bytes());
	}

	pub fn i32(&mut self, value: i32) {
		self.bytes(&value.to_le_bytes());
	}

	pub fn bool32(&mut self, value: bool) {
		self.u32(u32::from(value));
	}

	/// Writes exactly `len` bytes: `value` clipped to `len`, then zero padding.
	pub fn string(&mut self, value: &str, len: usize) {
		let start = self.buf.len();
		self.buf.extend(value.chars().take(len).map(latin1_byte));
		self.zeros(len - (self.buf.len() - start));
	}

	/// Writes exactly `len` bytes of `0x00`/`0x01`, clipping or zero padding.
	pub fn bools(&mut self, values: &[bool], len: usize) {
		let start = self.buf.len();
		self.buf.extend(values.iter().take(len).map(|&b| u8::from(b)));
		self.zeros(len - (self.buf.len() - start));
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.buf
	}
}

pub fn decode_string(field: &[u8]) -> CompactString {
	let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
	field[..end].iter().map(|&b| char::from(b)).collect()
}

fn latin1_byte(c: char) -> u8 {
	u8::try_from(u32::from(c)).unwrap_or(b'?')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn string_is_padded_and_clipped() {
		let mut w = Writer::default();
		w.string("AB", 4);
		w.string("ABCDEFGH", 4);
		assert_eq!(w.into_inner(), b"AB\0\0ABCD");
	}

	#[test]
	fn string_reads_to_first_zero() {
		let mut r = Reader::new(b"AB\0CDEFGH");
		assert_eq!(r.string(4), "AB");
		assert_eq!(r.string(5), "DEFGH");
		assert_eq!(r.remaining(), 0);
	}

	#[test]
	fn latin1_survives() {
		let mut w = Writer::default();
		w.string("Åke", 5);
		let buf = w.into_inner();
		assert_eq!(buf, [0xC5, b'k', b'e', 0, 0]);
		assert_eq!(decode_string(&buf), "Åke");
	}

	#[test]
	fn non_latin1_becomes_question_mark() {
		let mut w = Writer::default();
		w.string("a€", 3);
		assert_eq!(w.into_inner(), b"a?\0");
	}

	#[test]
	fn integers_are_little_endian() {
		let mut w = Writer::default();
		w.u32(0x0102_0304);
		w.i32(-1);
		w.bool32(true);
		let buf = w.into_inner();
		assert_eq!(buf[..4], [4, 3, 2, 1]);
		let mut r = Reader::new(&buf);
		assert_eq!(r.u32(), 0x0102_0304);
		assert_eq!(r.i32(), -1);
		assert!(r.bool32());
	}

	#[test]
	fn bools_are_single_bytes() {
		let mut w = Writer::default();
		w.bools(&[true, false, true], 5);
		let buf = w.into_inner();
		assert_eq!(buf, [1, 0, 1, 0, 0]);
		assert_eq!(Reader::new(&buf).bools(5), [true, false, true, false, false]);
	}
}
