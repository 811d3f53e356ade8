//! Hand-written decoders for the packet shapes understood so far.
//!
//! Each decoder pins its type tag and exact block length in `test`. Layout quirks handled
//! here: sentinel bytes checked as invariants, multi-pass field runs (`SetInventory`),
//! sentinel-terminated record lists (`SummonerData`), and size-selected optional sections
//! (`PlayerStats`).

mod ability;
mod inventory;
mod rewards;
mod spawn;
mod stats;
mod summoner;

pub use ability::SetAbilityLevel;
pub use inventory::{ItemPurchase, SetInventory};
pub use rewards::{ExpGain, GoldGain};
pub use spawn::HeroSpawn;
pub use stats::PlayerStats;
pub use summoner::SummonerData;

use crate::packet::Decoder;

/// Built-in decoders in dispatch order.
pub static DEFAULT_DECODERS: &[&dyn Decoder] = &[
	&SetAbilityLevel,
	&ExpGain,
	&GoldGain,
	&SetInventory,
	&ItemPurchase,
	&HeroSpawn,
	&SummonerData,
	&PlayerStats,
];

#[cfg(test)]
mod tests;
