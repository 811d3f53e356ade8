use crate::packet::{Cursor, PacketError, Result};

/// Parsed block-dump file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpHeader {
	/// Container format version.
	pub version: u16,
}

impl DumpHeader {
	/// Leading file magic.
	pub const MAGIC: &'static [u8; 8] = b"OLBLOCKS";
	/// Only supported container version.
	pub const VERSION: u16 = 1;
	/// Header size in bytes.
	pub const SIZE: usize = 10;

	/// Parse the header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let magic = cursor.read_exact(Self::MAGIC.len()).map_err(|_| PacketError::InvalidDumpHeader)?;
		if magic != Self::MAGIC {
			return Err(PacketError::InvalidDumpHeader);
		}

		let version = cursor.read_u16_le().map_err(|_| PacketError::InvalidDumpHeader)?;
		if version != Self::VERSION {
			return Err(PacketError::UnsupportedDumpVersion { version });
		}

		Ok(Self { version })
	}

	/// Encode this header.
	pub fn to_bytes(&self) -> [u8; Self::SIZE] {
		let mut out = [0_u8; Self::SIZE];
		out[..8].copy_from_slice(Self::MAGIC);
		out[8..].copy_from_slice(&self.version.to_le_bytes());
		out
	}
}
