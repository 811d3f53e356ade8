use crate::packet::{Block, Decoder, Object, PacketType, Result, Value};

/// Champion spawn announcing the summoner and champion names.
pub struct HeroSpawn;

impl HeroSpawn {
	/// Exact block length.
	pub const LEN: usize = 0xC3;
	const SUMMONER_NAME_LEN: usize = 0x80;
	const CHAMPION_NAME_LEN: usize = 0x10;
}

impl Decoder for HeroSpawn {
	fn name(&self) -> &'static str {
		"HeroSpawn"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::HERO_SPAWN && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		data.set("entityId", cursor.read_u32_le()?);
		data.set("clientId", cursor.read_u32_le()?);
		cursor.skip(0xA)?; // unknown
		data.set("summonerName", cursor.read_fixed_str(Self::SUMMONER_NAME_LEN)?);
		data.set("championName", cursor.read_fixed_str(Self::CHAMPION_NAME_LEN)?);
		cursor.skip(0x21)?; // unknown

		Ok(data.into())
	}
}
