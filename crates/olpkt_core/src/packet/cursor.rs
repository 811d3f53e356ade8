use crate::packet::{PacketError, Result};

/// Fixed-width little-endian scalar readable from a [`Cursor`].
pub trait Scalar: Sized {
	/// Encoded width in bytes.
	const SIZE: usize;

	/// Decode from exactly [`Self::SIZE`] little-endian bytes.
	fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
	($($ty:ty),*) => {
		$(
			impl Scalar for $ty {
				const SIZE: usize = std::mem::size_of::<$ty>();

				fn from_le_slice(bytes: &[u8]) -> Self {
					let mut buf = [0_u8; std::mem::size_of::<$ty>()];
					buf.copy_from_slice(bytes);
					<$ty>::from_le_bytes(buf)
				}
			}
		)*
	};
}

impl_scalar!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Bounded, rewindable cursor over an immutable byte slice.
///
/// Every read and skip is checked against the slice end; a failed read leaves the position
/// untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor positioned `start` bytes into `bytes`.
	pub fn at(bytes: &'a [u8], start: usize) -> Result<Self> {
		let mut cursor = Self::new(bytes);
		cursor.seek(start)?;
		Ok(cursor)
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total length of the underlying bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return `true` when the underlying slice is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Restore an absolute position previously obtained from [`Cursor::pos`].
	pub fn seek(&mut self, pos: usize) -> Result<()> {
		if pos > self.bytes.len() {
			return Err(PacketError::SeekOutOfBounds { to: pos, len: self.bytes.len() });
		}
		self.pos = pos;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PacketError::OutOfBounds {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Copy `out.len()` bytes into caller storage and advance cursor.
	pub fn read_into(&mut self, out: &mut [u8]) -> Result<()> {
		let raw = self.read_exact(out.len())?;
		out.copy_from_slice(raw);
		Ok(())
	}

	/// Advance `n` bytes without reading them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read one little-endian scalar.
	pub fn read<T: Scalar>(&mut self) -> Result<T> {
		let raw = self.read_exact(T::SIZE)?;
		Ok(T::from_le_slice(raw))
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		self.read()
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		self.read()
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		self.read()
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		self.read()
	}

	/// Read an `n`-byte text field, stopping at the first NUL.
	pub fn read_fixed_str(&mut self, n: usize) -> Result<String> {
		let raw = self.read_exact(n)?;
		let end = raw.iter().position(|byte| *byte == 0).unwrap_or(raw.len());
		Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
	}

	/// Read one byte that must equal `sentinel`.
	pub fn expect_u8(&mut self, decoder: &'static str, field: &'static str, sentinel: u8) -> Result<()> {
		let at = self.pos;
		let got = self.read_u8()?;
		if got != sentinel {
			return Err(PacketError::SchemaInvariant {
				decoder,
				field,
				at,
				expected: u64::from(sentinel),
				got: u64::from(got),
			});
		}
		Ok(())
	}

	/// Read records until a terminator discriminator or `max` records.
	///
	/// Before each record the byte at `probe` bytes past the record start is peeked. When it
	/// equals `terminator` the probe region is consumed and the list ends; otherwise the
	/// cursor is rewound to the record start and `read_item` parses the full record.
	pub fn read_until_sentinel<T>(&mut self, max: usize, probe: usize, terminator: u8, mut read_item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		let mut items = Vec::new();
		while items.len() < max {
			let mark = self.pos;
			self.skip(probe)?;
			let discriminator = self.read_u8()?;
			if discriminator == terminator {
				return Ok(items);
			}
			self.seek(mark)?;
			items.push(read_item(self)?);
		}
		Ok(items)
	}
}
