use crate::packet::{Block, Decoder, Object, PacketType, Result, Value};

/// Experience awarded to a unit for a kill.
pub struct ExpGain;

impl ExpGain {
	/// Exact block length.
	pub const LEN: usize = 0xC;
}

impl Decoder for ExpGain {
	fn name(&self) -> &'static str {
		"ExpGain"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::EXP_GAIN && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		data.set("receiverEnt", cursor.read_u32_le()?);
		data.set("killedEnt", cursor.read_u32_le()?);
		data.set("amount", cursor.read_f32_le()?);

		Ok(data.into())
	}
}

/// Gold awarded to a unit.
pub struct GoldGain;

impl GoldGain {
	/// Exact block length.
	pub const LEN: usize = 0x8;
}

impl Decoder for GoldGain {
	fn name(&self) -> &'static str {
		"GoldGain"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::GOLD_GAIN && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		data.set("receiverEnt", cursor.read_u32_le()?);
		data.set("amount", cursor.read_f32_le()?);

		Ok(data.into())
	}
}
