use crate::packet::{Block, DEFAULT_DECODERS, Decoder, PacketError, PacketType, Result, Value};

/// Outcome of dispatching one block.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
	/// A decoder accepted and decoded the block.
	Decoded {
		/// Name of the accepting decoder.
		decoder: &'static str,
		/// Decoded value tree.
		value: Value,
	},
	/// No decoder accepted the block.
	Unknown {
		/// Block packet type.
		packet_type: u16,
		/// Block length in bytes.
		len: usize,
	},
}

/// Ordered decoder list tried front to back.
///
/// Order matters when several decoders share a type tag and differ by length or content
/// discriminator; the first decoder whose `test` accepts a block wins.
pub struct Registry {
	decoders: Vec<&'static dyn Decoder>,
}

impl Registry {
	/// Build a registry, rejecting duplicate decoder names.
	pub fn new(decoders: impl IntoIterator<Item = &'static dyn Decoder>) -> Result<Self> {
		let mut registry = Self { decoders: Vec::new() };
		for decoder in decoders {
			registry = registry.with(decoder)?;
		}
		Ok(registry)
	}

	/// Append a decoder after the existing ones.
	pub fn with(mut self, decoder: &'static dyn Decoder) -> Result<Self> {
		let name = decoder.name();
		if self.decoders.iter().any(|item| item.name() == name) {
			return Err(PacketError::DuplicateDecoder { name });
		}
		self.decoders.push(decoder);
		Ok(self)
	}

	/// Registered decoders in dispatch order.
	pub fn decoders(&self) -> &[&'static dyn Decoder] {
		&self.decoders
	}

	/// Return the first decoder accepting `block`.
	pub fn find(&self, block: &Block<'_>) -> Option<&'static dyn Decoder> {
		self.decoders.iter().copied().find(|decoder| {
			let accepted = decoder.test(block);
			tracing::trace!(decoder = decoder.name(), packet_type = block.packet_type, len = block.len(), accepted, "test");
			accepted
		})
	}

	/// Select the accepting decoder and decode `block`.
	///
	/// An unmatched block is a regular outcome, not an error. Errors only come from the
	/// selected decoder.
	pub fn dispatch(&self, block: &Block<'_>) -> Result<Dispatch> {
		let Some(decoder) = self.find(block) else {
			tracing::debug!(
				packet_type = block.packet_type,
				name = PacketType::name(block.packet_type).unwrap_or("unknown"),
				len = block.len(),
				"no decoder matched"
			);
			return Ok(Dispatch::Unknown {
				packet_type: block.packet_type,
				len: block.len(),
			});
		};

		tracing::debug!(decoder = decoder.name(), packet_type = block.packet_type, len = block.len(), "decoding");
		let value = decoder.decode(block)?;
		Ok(Dispatch::Decoded {
			decoder: decoder.name(),
			value,
		})
	}

	/// Dispatch and treat an unmatched block as [`PacketError::NoDecoderMatched`].
	pub fn decode_strict(&self, block: &Block<'_>) -> Result<(&'static str, Value)> {
		match self.dispatch(block)? {
			Dispatch::Decoded { decoder, value } => Ok((decoder, value)),
			Dispatch::Unknown { packet_type, len } => Err(PacketError::NoDecoderMatched { packet_type, len }),
		}
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self {
			decoders: DEFAULT_DECODERS.to_vec(),
		}
	}
}
