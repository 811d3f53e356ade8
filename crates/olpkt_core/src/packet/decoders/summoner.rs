use crate::packet::{Array, Block, Cursor, Decoder, Object, PacketType, Result, Value};

const RUNE_SLOTS: usize = 30;
const MAX_MASTERIES: usize = 79;
/// Offset of the discriminator byte inside a mastery record.
const MASTERY_PROBE: usize = 2;
const MASTERY_MARKER: u8 = 0x03;
/// Discriminator value of the empty record that ends the mastery list.
const MASTERY_TERMINATOR: u8 = 0x00;
const LEVEL_OFFSET: usize = 0x210;

/// Summoner loadout: runes, summoner spells, masteries and level.
///
/// The mastery count is not stored; the list ends at the first record whose marker byte
/// holds the terminator instead of [`MASTERY_MARKER`].
pub struct SummonerData;

impl SummonerData {
	/// Exact block length.
	pub const LEN: usize = 0x212;
}

impl Decoder for SummonerData {
	fn name(&self) -> &'static str {
		"SummonerData"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::SUMMONER_DATA && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		let mut runes = Array::new();
		for _ in 0..RUNE_SLOTS {
			runes.push(cursor.read_u32_le()?);
		}
		data.set("runes", runes);

		data.set("spell1", cursor.read_u32_le()?);
		data.set("spell2", cursor.read_u32_le()?);

		let masteries = cursor.read_until_sentinel(MAX_MASTERIES, MASTERY_PROBE, MASTERY_TERMINATOR, |cursor| self.read_mastery(cursor))?;
		data.set("masteries", masteries.into_iter().collect::<Array>());

		cursor.seek(LEVEL_OFFSET)?;
		data.set("level", cursor.read_u8()?);

		Ok(data.into())
	}
}

impl SummonerData {
	fn read_mastery(&self, cursor: &mut Cursor<'_>) -> Result<Object> {
		let mut entry = Object::new();
		entry.set("id", cursor.read_u8()?);
		entry.set("tree", cursor.read_u8()?);
		cursor.expect_u8(self.name(), "masteryMarker", MASTERY_MARKER)?;
		cursor.expect_u8(self.name(), "masteryPadding", 0x00)?;
		entry.set("pointsSpent", cursor.read_u8()?);
		Ok(entry)
	}
}
