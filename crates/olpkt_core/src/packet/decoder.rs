use crate::packet::{Block, Result, Value};

/// Decoder for one packet shape.
///
/// Implementations are stateless. `test` may only inspect the block type, the block length,
/// and for shared type tags a fixed set of leading discriminator bytes. `decode` is only
/// called after `test` accepted the block and reads fields in the layout's physical order.
pub trait Decoder: Sync {
	/// Stable human-readable label used in diagnostics.
	fn name(&self) -> &'static str;

	/// Return `true` when this decoder understands `block`.
	fn test(&self, block: &Block<'_>) -> bool;

	/// Decode `block` into an object keyed by field name.
	fn decode(&self, block: &Block<'_>) -> Result<Value>;
}
