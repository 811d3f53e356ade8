mod block;
mod cursor;
mod decoder;
mod decoders;
mod dump;
mod error;
mod registry;
mod types;
mod value;

/// Classified block view.
pub use block::Block;
/// Bounded rewindable cursor and scalar reads.
pub use cursor::{Cursor, Scalar};
/// Decoder contract.
pub use decoder::Decoder;
/// Built-in packet decoders and their static registration table.
pub use decoders::{DEFAULT_DECODERS, ExpGain, GoldGain, HeroSpawn, ItemPurchase, PlayerStats, SetAbilityLevel, SetInventory, SummonerData};
/// Block-dump container reading.
pub use dump::{BlockDump, DumpHeader, DumpStats, Record, RecordHead, RecordIter};
/// Error and result aliases.
pub use error::{PacketError, Result};
/// Decoder dispatch.
pub use registry::{Dispatch, Registry};
/// Packet type tags and channel labels.
pub use types::{Channel, PacketType};
/// Dynamic decoded value tree.
pub use value::{Array, Object, Value};
