use crate::packet::{Block, Decoder, Object, PacketType, Result, Value};

/// Ability rank-up: ability slot and new level, followed by a zero pad byte.
pub struct SetAbilityLevel;

impl SetAbilityLevel {
	/// Exact block length.
	pub const LEN: usize = 0x3;
}

impl Decoder for SetAbilityLevel {
	fn name(&self) -> &'static str {
		"SetAbilityLevel"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::SET_ABILITY_LEVEL && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		data.set("abilityId", cursor.read_u8()?);
		data.set("level", cursor.read_u8()?);
		cursor.expect_u8(self.name(), "padding", 0x00)?;

		Ok(data.into())
	}
}
