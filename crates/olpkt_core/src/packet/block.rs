use crate::packet::{Cursor, PacketError, PacketType, Result};

/// Borrowed view over one classified packet block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
	/// Block type tag.
	pub packet_type: u16,
	/// Raw payload bytes; the block length is the payload length.
	pub payload: &'a [u8],
}

impl<'a> Block<'a> {
	/// Create a block from a type tag and payload.
	pub fn new(packet_type: u16, payload: &'a [u8]) -> Self {
		Self { packet_type, payload }
	}

	/// Create a block, rejecting a producer-declared length that disagrees with the payload.
	pub fn with_declared_len(packet_type: u16, declared: usize, payload: &'a [u8]) -> Result<Self> {
		if declared != payload.len() {
			return Err(PacketError::LengthMismatch {
				declared,
				actual: payload.len(),
			});
		}
		Ok(Self::new(packet_type, payload))
	}

	/// Block length in bytes.
	pub fn len(&self) -> usize {
		self.payload.len()
	}

	/// Return `true` for an empty payload.
	pub fn is_empty(&self) -> bool {
		self.payload.is_empty()
	}

	/// Payload byte at `index`, if present.
	pub fn byte(&self, index: usize) -> Option<u8> {
		self.payload.get(index).copied()
	}

	/// Extended tag carried in the first two payload bytes of an extended block.
	pub fn extended_type(&self) -> Option<u16> {
		if self.packet_type != PacketType::EXTENDED {
			return None;
		}
		match self.payload {
			[lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
			_ => None,
		}
	}

	/// Cursor at the start of the payload.
	pub fn cursor(&self) -> Cursor<'a> {
		Cursor::new(self.payload)
	}

	/// Cursor positioned `offset` bytes into the payload.
	pub fn cursor_at(&self, offset: usize) -> Result<Cursor<'a>> {
		Cursor::at(self.payload, offset)
	}
}
