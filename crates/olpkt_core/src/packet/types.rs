/// Packet type tags observed on the game stream.
///
/// Tags up to `0xFF` travel in the block type field directly. Extended tags share the
/// [`PacketType::EXTENDED`] block type and carry their real id in the first two payload bytes.
pub struct PacketType;

impl PacketType {
	/// Entity ownership change.
	pub const SET_OWNERSHIP: u16 = 0x07;
	/// Experience gained by a unit.
	pub const EXP_GAIN: u16 = 0x10;
	/// End of the initial spawn burst.
	pub const END_SPAWN: u16 = 0x11;
	/// Ability rank-up.
	pub const SET_ABILITY_LEVEL: u16 = 0x15;
	/// Gold gained by a unit.
	pub const GOLD_GAIN: u16 = 0x22;
	/// Summoner runes, spells and masteries.
	pub const SUMMONER_DATA: u16 = 0x2A;
	/// Champion respawn.
	pub const CHAMPION_RESPAWN: u16 = 0x2F;
	/// Champion level change.
	pub const SET_LEVEL: u16 = 0x3F;
	/// Map ping.
	pub const ATTENTION_PING: u16 = 0x40;
	/// Emote.
	pub const PLAY_EMOTE: u16 = 0x42;
	/// End-of-game player statistics.
	pub const PLAYER_STATS: u16 = 0x46;
	/// Champion spawn with summoner and champion names.
	pub const HERO_SPAWN: u16 = 0x4C;
	/// Death timer update.
	pub const SET_DEATH_TIMER: u16 = 0x5E;
	/// Batched movement.
	pub const MOVEMENT_GROUP: u16 = 0x61;
	/// Start of the initial spawn burst.
	pub const START_SPAWN: u16 = 0x62;
	/// Damage event.
	pub const DAMAGE_DONE: u16 = 0x65;
	/// Item bought.
	pub const ITEM_PURCHASE: u16 = 0x6F;
	/// Summoner disconnected.
	pub const SUMMONER_DISCONNECT: u16 = 0x98;
	/// Turret spawn.
	pub const TURRET_SPAWN: u16 = 0x9D;
	/// Item stack count change.
	pub const SET_ITEM_STACKS: u16 = 0x9F;
	/// Health update.
	pub const SET_HEALTH: u16 = 0xAE;
	/// Batched attribute update.
	pub const ATTRIBUTE_GROUP: u16 = 0xC4;
	/// Team assignment.
	pub const SET_TEAM: u16 = 0xE0;
	/// Block type shared by all extended tags.
	pub const EXTENDED: u16 = 0xFE;
	/// Full inventory snapshot (extended).
	pub const SET_INVENTORY: u16 = 0x010C;

	/// Human-readable name of a known tag, for diagnostics.
	pub fn name(tag: u16) -> Option<&'static str> {
		Some(match tag {
			Self::SET_OWNERSHIP => "SetOwnership",
			Self::EXP_GAIN => "ExpGain",
			Self::END_SPAWN => "EndSpawn",
			Self::SET_ABILITY_LEVEL => "SetAbilityLevel",
			Self::GOLD_GAIN => "GoldGain",
			Self::SUMMONER_DATA => "SummonerData",
			Self::CHAMPION_RESPAWN => "ChampionRespawn",
			Self::SET_LEVEL => "SetLevel",
			Self::ATTENTION_PING => "AttentionPing",
			Self::PLAY_EMOTE => "PlayEmote",
			Self::PLAYER_STATS => "PlayerStats",
			Self::HERO_SPAWN => "HeroSpawn",
			Self::SET_DEATH_TIMER => "SetDeathTimer",
			Self::MOVEMENT_GROUP => "MovementGroup",
			Self::START_SPAWN => "StartSpawn",
			Self::DAMAGE_DONE => "DamageDone",
			Self::ITEM_PURCHASE => "ItemPurchase",
			Self::SUMMONER_DISCONNECT => "SummonerDisconnect",
			Self::TURRET_SPAWN => "TurretSpawn",
			Self::SET_ITEM_STACKS => "SetItemStacks",
			Self::SET_HEALTH => "SetHealth",
			Self::ATTRIBUTE_GROUP => "AttributeGroup",
			Self::SET_TEAM => "SetTeam",
			Self::EXTENDED => "Extended",
			Self::SET_INVENTORY => "SetInventory",
			_ => return None,
		})
	}
}

/// Transport channel a record was captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
	/// Connection handshake.
	Handshake,
	/// Client to server.
	C2S,
	/// Gameplay traffic.
	Gameplay,
	/// Server to client.
	S2C,
	/// Low-priority traffic.
	LowPriority,
	/// Chat and communication.
	Communication,
	/// Loading screen traffic.
	LoadingScreen,
	/// Channel id with no known label.
	Other(u8),
}

impl Channel {
	/// Map a raw channel id.
	pub fn from_id(id: u8) -> Self {
		match id {
			0 => Self::Handshake,
			1 => Self::C2S,
			2 => Self::Gameplay,
			3 => Self::S2C,
			4 => Self::LowPriority,
			5 => Self::Communication,
			7 => Self::LoadingScreen,
			other => Self::Other(other),
		}
	}

	/// Stable label used in CLI output.
	pub fn label(&self) -> String {
		match self {
			Self::Handshake => "handshake".to_owned(),
			Self::C2S => "c2s".to_owned(),
			Self::Gameplay => "gameplay".to_owned(),
			Self::S2C => "s2c".to_owned(),
			Self::LowPriority => "low_priority".to_owned(),
			Self::Communication => "communication".to_owned(),
			Self::LoadingScreen => "loading_screen".to_owned(),
			Self::Other(id) => format!("channel_{id}"),
		}
	}
}
