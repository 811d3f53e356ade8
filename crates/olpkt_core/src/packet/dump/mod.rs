//! Framed container of captured blocks.
//!
//! Layout: `OLBLOCKS` magic, `u16` version, then records of `u16` packet type, `u8`
//! channel, `u32` payload length and the payload, until end of file. All integers are
//! little-endian.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

mod header;
mod record;

pub use header::DumpHeader;
pub use record::{Record, RecordHead, RecordIter};

use crate::packet::Result;

/// Opened block dump with parsed header.
pub struct BlockDump {
	/// Parsed file header.
	pub header: DumpHeader,
	bytes: Vec<u8>,
}

impl BlockDump {
	/// Read and parse a block dump from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse a block dump held in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = DumpHeader::parse(&bytes)?;
		Ok(Self { header, bytes })
	}

	/// Return raw bytes backing this dump.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate all records after the header.
	pub fn records(&self) -> RecordIter<'_> {
		RecordIter::new(&self.bytes, DumpHeader::SIZE)
	}

	/// Scan record counts per packet type.
	pub fn scan_stats(&self) -> Result<DumpStats> {
		let mut stats = DumpStats::default();
		for record in self.records() {
			let record = record?;
			stats.record_count += 1;
			stats.payload_bytes += u64::from(record.head.len);
			*stats.types.entry(record.head.packet_type).or_insert(0) += 1;
		}
		Ok(stats)
	}
}

/// Aggregate record-level counts from a linear scan.
#[derive(Debug, Clone, Default)]
pub struct DumpStats {
	/// Number of parsed records.
	pub record_count: u32,
	/// Sum of payload lengths.
	pub payload_bytes: u64,
	/// Frequency table by packet type.
	pub types: BTreeMap<u16, u32>,
}
