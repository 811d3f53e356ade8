use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PacketError>;

/// Errors produced while reading blocks, decoding packets, and manipulating value trees.
#[derive(Debug, Error)]
pub enum PacketError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read or skip.
	#[error("out of bounds at offset {at}, need {need} bytes, remaining {rem}")]
	OutOfBounds {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Cursor seek target lies past the end of the block.
	#[error("seek out of bounds: offset {to}, block length {len}")]
	SeekOutOfBounds {
		/// Requested absolute offset.
		to: usize,
		/// Block length in bytes.
		len: usize,
	},
	/// A field expected to hold a fixed sentinel value did not.
	#[error("{decoder}: schema invariant violated for {field} at offset {at}: expected 0x{expected:02x}, got 0x{got:02x}")]
	SchemaInvariant {
		/// Decoder that detected the mismatch.
		decoder: &'static str,
		/// Field or region label.
		field: &'static str,
		/// Byte offset of the checked field.
		at: usize,
		/// Expected sentinel value.
		expected: u64,
		/// Value actually present.
		got: u64,
	},
	/// Decoder was handed a block whose size matches none of its known layouts.
	#[error("{decoder}: unsupported layout for block length {len}")]
	UnsupportedLayout {
		/// Decoder name.
		decoder: &'static str,
		/// Offending block length.
		len: usize,
	},
	/// Unsigned integer does not fit the large-integer range of the value tree.
	#[error("value {value} does not fit in 61 bits")]
	ValueOverflow {
		/// Rejected value.
		value: u64,
	},
	/// Object lookup for a missing key.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// Requested key.
		key: String,
	},
	/// Array access past the last element.
	#[error("index {index} out of range for array of length {len}")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Array length.
		len: usize,
	},
	/// Container access on a value of a different kind.
	#[error("expected {expected}, got {got}")]
	NotAContainer {
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// `destroy` was called on a value that is already undefined.
	#[error("value already destroyed")]
	AlreadyDestroyed,
	/// No registered decoder accepted the block.
	#[error("no decoder matched packet type 0x{packet_type:02x} (len {len})")]
	NoDecoderMatched {
		/// Block packet type.
		packet_type: u16,
		/// Block length in bytes.
		len: usize,
	},
	/// Two registered decoders share a name.
	#[error("duplicate decoder name: {name}")]
	DuplicateDecoder {
		/// Repeated decoder name.
		name: &'static str,
	},
	/// Block-dump file does not start with the expected magic.
	#[error("invalid block dump header")]
	InvalidDumpHeader,
	/// Block-dump container version is not supported.
	#[error("unsupported block dump version {version} (expected 1)")]
	UnsupportedDumpVersion {
		/// Parsed container version.
		version: u16,
	},
	/// Record payload would exceed remaining dump data.
	#[error("record length {len} at offset {at} exceeds remaining {rem}")]
	RecordLenOutOfRange {
		/// Record header file offset.
		at: usize,
		/// Declared payload length.
		len: u64,
		/// Remaining bytes in cursor.
		rem: usize,
	},
	/// Declared block length disagrees with the supplied payload.
	#[error("declared block length {declared} does not match payload length {actual}")]
	LengthMismatch {
		/// Length announced by the producer.
		declared: usize,
		/// Bytes actually supplied.
		actual: usize,
	},
	/// Hex byte argument was invalid.
	#[error("invalid hex literal: {value}")]
	InvalidHexLiteral {
		/// User-provided text.
		value: String,
	},
	/// Packet type argument was invalid.
	#[error("invalid packet type literal: {value}")]
	InvalidTypeLiteral {
		/// User-provided text.
		value: String,
	},
}
