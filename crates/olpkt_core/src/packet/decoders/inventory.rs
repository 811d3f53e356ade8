use crate::packet::{Array, Block, Decoder, Object, PacketType, Result, Value};

const ITEM_SLOTS: usize = 10;

/// Full inventory snapshot carried on the extended block type.
///
/// The payload stores one run per field kind rather than one record per slot: all item
/// headers, then all cooldowns, then all base cooldowns. Slot objects are assembled by index
/// across the three passes.
pub struct SetInventory;

impl SetInventory {
	/// Exact block length.
	pub const LEN: usize = 0x98;
	/// Bytes taken by the extended tag before the first item header.
	const BODY_OFFSET: usize = 0x2;
}

impl Decoder for SetInventory {
	fn name(&self) -> &'static str {
		"SetInventory"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.len() == Self::LEN && block.extended_type() == Some(PacketType::SET_INVENTORY)
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor_at(Self::BODY_OFFSET)?;
		let mut items: Vec<Object> = (0..ITEM_SLOTS).map(|_| Object::new()).collect();

		for item in &mut items {
			item.set("itemId", cursor.read_u32_le()?);
			item.set("slotId", cursor.read_u8()?);
			item.set("quantity", cursor.read_u8()?);
			item.set("charges", cursor.read_u8()?);
		}

		for item in &mut items {
			item.set("cooldown", cursor.read_f32_le()?);
		}

		for item in &mut items {
			item.set("baseCooldown", cursor.read_f32_le()?);
		}

		let mut data = Object::new();
		data.set("items", items.into_iter().collect::<Array>());
		Ok(data.into())
	}
}

/// Item bought from the shop.
pub struct ItemPurchase;

impl ItemPurchase {
	/// Exact block length.
	pub const LEN: usize = 0x8;
	const TRAILER: u8 = 0x40;
}

impl Decoder for ItemPurchase {
	fn name(&self) -> &'static str {
		"ItemPurchase"
	}

	fn test(&self, block: &Block<'_>) -> bool {
		block.packet_type == PacketType::ITEM_PURCHASE && block.len() == Self::LEN
	}

	fn decode(&self, block: &Block<'_>) -> Result<Value> {
		let mut cursor = block.cursor();
		let mut data = Object::new();

		data.set("itemId", cursor.read_u32_le()?);
		data.set("slot", cursor.read_u8()?);
		data.set("quantity", cursor.read_u16_le()?);
		cursor.expect_u8(self.name(), "trailer", Self::TRAILER)?;

		Ok(data.into())
	}
}
