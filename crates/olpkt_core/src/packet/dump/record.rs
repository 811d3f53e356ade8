use crate::packet::{Block, Channel, Cursor, PacketError, Result};

/// Parsed per-record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHead {
	/// Block packet type.
	pub packet_type: u16,
	/// Raw capture channel id.
	pub channel: u8,
	/// Payload byte length.
	pub len: u32,
}

impl RecordHead {
	/// Encoded header size in bytes.
	pub const SIZE: usize = 7;

	/// Parse a record header from cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let packet_type = cursor.read_u16_le()?;
		let channel = cursor.read_u8()?;
		let len = cursor.read_u32_le()?;
		Ok(Self { packet_type, channel, len })
	}

	/// Channel label for this record.
	pub fn channel(&self) -> Channel {
		Channel::from_id(self.channel)
	}
}

/// Borrowed view over one dump record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
	/// Parsed record header.
	pub head: RecordHead,
	/// Raw payload bytes.
	pub payload: &'a [u8],
	/// Absolute byte offset where this record header starts.
	pub file_offset: usize,
}

impl<'a> Record<'a> {
	/// Classified block handed to decoders.
	pub fn block(&self) -> Block<'a> {
		Block::new(self.head.packet_type, self.payload)
	}
}

/// Iterator over contiguous dump records.
///
/// Stops after the first malformed record.
pub struct RecordIter<'a> {
	cursor: Cursor<'a>,
	offset_base: usize,
	done: bool,
}

impl<'a> RecordIter<'a> {
	/// Create an iterator over records starting at `offset`.
	pub fn new(bytes: &'a [u8], offset: usize) -> Self {
		let slice = bytes.get(offset..).unwrap_or(&[]);
		Self {
			cursor: Cursor::new(slice),
			offset_base: offset,
			done: false,
		}
	}
}

impl<'a> Iterator for RecordIter<'a> {
	type Item = Result<Record<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let file_offset = self.offset_base + self.cursor.pos();
		let head = match RecordHead::parse(&mut self.cursor) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		let rem = self.cursor.remaining();
		let payload_len = match usize::try_from(head.len) {
			Ok(value) if value <= rem => value,
			_ => {
				self.done = true;
				return Some(Err(PacketError::RecordLenOutOfRange {
					at: file_offset,
					len: u64::from(head.len),
					rem,
				}));
			}
		};

		let payload = match self.cursor.read_exact(payload_len) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		Some(Ok(Record { head, payload, file_offset }))
	}
}
