use Slot::{F32, JungleU32, Skip, U32};

use crate::packet::{Block, Cursor, Decoder, Object, PacketError, PacketType, Result, Value};

/// One step of the stats layout.
enum Slot {
	U32(&'static str),
	F32(&'static str),
	/// Present only in the larger layout.
	JungleU32(&'static str),
	Skip(usize),
}

/// Physical field order. Key spellings are part of the output contract.
const LAYOUT: &[Slot] = &[
	U32("assists"),
	Skip(0x4),
	U32("kills"),
	Skip(0x4),
	U32("doubleKills"),
	Skip(3 * 0x4),
	U32("unrealKills"),
	F32("goldEarned"),
	F32("goldSpent"),
	Skip(10 * 0x4),
	U32("currentKillingSpree"),
	F32("largestCriticalStrike"),
	U32("largestKillingSpree"),
	U32("largestMultiKill"),
	Skip(0x4),
	F32("longestTimeSpentLiving"),
	F32("magicDamageDealt"),
	F32("magicDamageDealtToChampions"),
	F32("magicDamageTaken"),
	U32("minionsKilled"),
	Skip(0x2),
	U32("neutralMinionsKilled"),
	JungleU32("neutralMinionsKilledInEnemyJungle"),
	JungleU32("neutralMinionsKilledInTeamJungle"),
	U32("deaths"),
	U32("pentaKills"),
	F32("physicalDamageDealt"),
	F32("physicalDamageDealtToChampions"),
	F32("physicalDamageTaken"),
	Skip(0x4),
	U32("quadraKills"),
	Skip(9 * 0x4),
	U32("teamId"),
	Skip(3 * 0x4),
	F32("totalDamageDealt"),
	F32("totalDamageDealtToChamptions"),
	F32("totalDamageTaken"),
	U32("totalHeal"),
	F32("totalTimeCrowdControlDealt"),
	F32("totalTimeSpentDead"),
	U32("totalUnitsHealed"),
	U32("tripleKills"),
	F32("trueDamageDealt"),
	F32("trueDamageDealtToChamptions"),
	F32("trueDamageTaken"),
	U32("towerKills"),
	U32("inhibitorKills"),
	Skip(0x4),
	U32("wardsKilled"),
	U32("wardsPlaced"),
	Skip(2 * 0x4),
	Skip(0x2),
];

/// End-of-game statistics for one player.
///
/// Two layouts share the type tag; the larger one adds jungle minion counters after
/// `neutralMinionsKilled`. The block length selects the layout.
pub struct PlayerStats;

impl PlayerStats {
	/// Block length of the layout without jungle counters.
	pub const LEN: usize = 0x120;
	/// Block length of the layout with jungle counters.
	pub const LEN_WITH_JUNGLE: usize = 0x128;

	fn has_jungle_stats(&self, block: &Block<'_>) -> Result<bool> {
		match block.len() {
			Self::LEN => Ok(false),
			Self::LEN_WITH_JUNGLE => Ok(true),
			len => Err(PacketError::UnsupportedLayout { decoder: self.name(), len }),
		}
	}
}

impl Decoder for PlayerStats {
	fn name(&self) -> &'static str {
		"PlayerStats"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::PLAYER_STATS && matches!(block.len(), Self::LEN | Self::LEN_WITH_JUNGLE)
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let has_jungle_stats = self.has_jungle_stats(block)?;
		let mut cursor = block.cursor();
		let mut data = Object::new();

		for slot in LAYOUT {
			read_slot(&mut cursor, &mut data, slot, has_jungle_stats)?;
		}

		Ok(data.into())
	}
}

fn read_slot(cursor: &mut Cursor<'_>, data: &mut Object, slot: &Slot, has_jungle_stats: bool) -> Result<()> {
	match slot {
		U32(name) => {
			data.set(name, cursor.read_u32_le()?);
		}
		F32(name) => {
			data.set(name, cursor.read_f32_le()?);
		}
		JungleU32(name) => {
			if has_jungle_stats {
				data.set(name, cursor.read_u32_le()?);
			}
		}
		Skip(n) => cursor.skip(*n)?,
	}
	Ok(())
}
