use crate::packet::{Block, Decoder, ExpGain, GoldGain, HeroSpawn, ItemPurchase, PacketError, PacketType, PlayerStats, SetAbilityLevel, SetInventory, SummonerData, Value};

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
	buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_f32(buf: &mut [u8], at: usize, value: f32) {
	buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn set_ability_level_decodes_fields() {
	let payload = [0x04_u8, 0x02, 0x00];
	let block = Block::new(PacketType::SET_ABILITY_LEVEL, &payload);
	assert!(SetAbilityLevel.test(&block));

	let value = SetAbilityLevel.decode(&block).expect("decodes");
	assert_eq!(value.get("abilityId").expect("abilityId"), &Value::Integer(4));
	assert_eq!(value.get("level").expect("level"), &Value::Integer(2));
	assert_eq!(value.as_object().expect("object").len(), 2);
}

#[test]
fn set_ability_level_rejects_bad_padding() {
	let payload = [0x04_u8, 0x02, 0x01];
	let block = Block::new(PacketType::SET_ABILITY_LEVEL, &payload);
	let err = SetAbilityLevel.decode(&block).expect_err("pad byte must be zero");
	assert!(matches!(
		err,
		PacketError::SchemaInvariant {
			decoder: "SetAbilityLevel",
			at: 2,
			expected: 0,
			got: 1,
			..
		}
	));
}

#[test]
fn set_ability_level_test_checks_length() {
	let payload = [0x04_u8, 0x02];
	assert!(!SetAbilityLevel.test(&Block::new(PacketType::SET_ABILITY_LEVEL, &payload)));
	assert!(!SetAbilityLevel.test(&Block::new(PacketType::GOLD_GAIN, &[0, 0, 0])));
}

#[test]
fn gold_gain_decodes_entity_and_amount() {
	let mut payload = [0_u8; GoldGain::LEN];
	put_u32(&mut payload, 0, 1001);
	put_f32(&mut payload, 4, 250.0);
	let block = Block::new(PacketType::GOLD_GAIN, &payload);
	assert!(GoldGain.test(&block));

	let value = GoldGain.decode(&block).expect("decodes");
	assert_eq!(value.get("receiverEnt").expect("receiverEnt"), &Value::Integer(1001));
	assert_eq!(value.get("amount").expect("amount"), &Value::Float(250.0));
	assert_eq!(value.to_text(), "{\n\t\"receiverEnt\": 1001,\n\t\"amount\": 250\n}");
}

#[test]
fn exp_gain_promotes_large_entity_ids() {
	let mut payload = [0_u8; ExpGain::LEN];
	put_u32(&mut payload, 0, 0x4000_0001);
	put_u32(&mut payload, 4, 0xff00_0000);
	put_f32(&mut payload, 8, 42.5);
	let block = Block::new(PacketType::EXP_GAIN, &payload);
	assert!(ExpGain.test(&block));

	let value = ExpGain.decode(&block).expect("decodes");
	assert_eq!(value.get("receiverEnt").expect("receiverEnt"), &Value::Integer(0x4000_0001));
	assert_eq!(value.get("killedEnt").expect("killedEnt"), &Value::LargeInteger(0xff00_0000));
	assert_eq!(value.get("amount").expect("amount"), &Value::Float(42.5));
}

#[test]
fn item_purchase_checks_trailer() {
	let mut payload = [0_u8; ItemPurchase::LEN];
	put_u32(&mut payload, 0, 3031);
	payload[4] = 2;
	payload[5..7].copy_from_slice(&1_u16.to_le_bytes());
	payload[7] = 0x40;
	let block = Block::new(PacketType::ITEM_PURCHASE, &payload);
	assert!(ItemPurchase.test(&block));

	let value = ItemPurchase.decode(&block).expect("decodes");
	assert_eq!(value.get("itemId").expect("itemId"), &Value::Integer(3031));
	assert_eq!(value.get("slot").expect("slot"), &Value::Integer(2));
	assert_eq!(value.get("quantity").expect("quantity"), &Value::Integer(1));

	payload[7] = 0x41;
	let block = Block::new(PacketType::ITEM_PURCHASE, &payload);
	let err = ItemPurchase.decode(&block).expect_err("trailer mismatch");
	assert!(matches!(err, PacketError::SchemaInvariant { field: "trailer", at: 7, .. }));
}

fn inventory_payload() -> Vec<u8> {
	let mut payload = vec![0_u8; SetInventory::LEN];
	payload[0] = 0x0C;
	payload[1] = 0x01;
	for slot in 0..10 {
		let header = 2 + slot * 7;
		put_u32(&mut payload, header, 1000 + slot as u32);
		payload[header + 4] = slot as u8;
		payload[header + 5] = 1;
		payload[header + 6] = (slot % 3) as u8;
		put_f32(&mut payload, 72 + slot * 4, slot as f32);
		put_f32(&mut payload, 112 + slot * 4, 60.0 + slot as f32);
	}
	payload
}

#[test]
fn set_inventory_assembles_slots_across_passes() {
	let payload = inventory_payload();
	let block = Block::new(PacketType::EXTENDED, &payload);
	assert_eq!(block.extended_type(), Some(PacketType::SET_INVENTORY));
	assert!(SetInventory.test(&block));

	let value = SetInventory.decode(&block).expect("decodes");
	let items = value.get("items").expect("items").as_array().expect("array");
	assert_eq!(items.len(), 10);

	let slot7 = items.at(7).expect("slot 7");
	assert_eq!(slot7.get("itemId").expect("itemId"), &Value::Integer(1007));
	assert_eq!(slot7.get("slotId").expect("slotId"), &Value::Integer(7));
	assert_eq!(slot7.get("quantity").expect("quantity"), &Value::Integer(1));
	assert_eq!(slot7.get("charges").expect("charges"), &Value::Integer(1));
	assert_eq!(slot7.get("cooldown").expect("cooldown"), &Value::Float(7.0));
	assert_eq!(slot7.get("baseCooldown").expect("baseCooldown"), &Value::Float(67.0));
	let keys: Vec<&str> = slot7.as_object().expect("object").keys().collect();
	assert_eq!(keys, vec!["itemId", "slotId", "quantity", "charges", "cooldown", "baseCooldown"]);
}

#[test]
fn set_inventory_requires_discriminator() {
	let mut payload = inventory_payload();
	payload[1] = 0x02;
	assert!(!SetInventory.test(&Block::new(PacketType::EXTENDED, &payload)));
	let payload = inventory_payload();
	assert!(!SetInventory.test(&Block::new(PacketType::SET_ABILITY_LEVEL, &payload)));
}

#[test]
fn hero_spawn_reads_padded_names() {
	let mut payload = vec![0_u8; HeroSpawn::LEN];
	put_u32(&mut payload, 0, 0x4000_001e);
	put_u32(&mut payload, 4, 3);
	payload[18..18 + 6].copy_from_slice(b"Faker1");
	payload[146..146 + 4].copy_from_slice(b"Ahri");
	let block = Block::new(PacketType::HERO_SPAWN, &payload);
	assert!(HeroSpawn.test(&block));

	let value = HeroSpawn.decode(&block).expect("decodes");
	assert_eq!(value.get("entityId").expect("entityId"), &Value::Integer(0x4000_001e));
	assert_eq!(value.get("clientId").expect("clientId"), &Value::Integer(3));
	assert_eq!(value.get("summonerName").expect("summonerName"), &Value::string("Faker1"));
	assert_eq!(value.get("championName").expect("championName"), &Value::string("Ahri"));
}

fn summoner_payload(masteries: &[[u8; 5]]) -> Vec<u8> {
	let mut payload = vec![0_u8; SummonerData::LEN];
	for rune in 0..30 {
		put_u32(&mut payload, rune * 4, 5000 + rune as u32);
	}
	put_u32(&mut payload, 120, 0x0649_6EA8);
	put_u32(&mut payload, 124, 0x0636_4F24);
	for (idx, record) in masteries.iter().enumerate() {
		let at = 128 + idx * 5;
		payload[at..at + 5].copy_from_slice(record);
	}
	payload[0x210] = 30;
	payload
}

#[test]
fn summoner_data_reads_terminated_mastery_list() {
	let payload = summoner_payload(&[[65, 1, 0x03, 0x00, 4], [66, 2, 0x03, 0x00, 1], [70, 3, 0x03, 0x00, 3]]);
	let block = Block::new(PacketType::SUMMONER_DATA, &payload);
	assert!(SummonerData.test(&block));

	let value = SummonerData.decode(&block).expect("decodes");
	let runes = value.get("runes").expect("runes").as_array().expect("array");
	assert_eq!(runes.len(), 30);
	assert_eq!(runes.at(29).expect("last rune"), &Value::Integer(5029));
	assert_eq!(value.get("spell1").expect("spell1"), &Value::Integer(0x0649_6EA8));
	assert_eq!(value.get("spell2").expect("spell2"), &Value::Integer(0x0636_4F24));

	let masteries = value.get("masteries").expect("masteries").as_array().expect("array");
	assert_eq!(masteries.len(), 3);
	let second = masteries.at(1).expect("second mastery");
	assert_eq!(second.get("id").expect("id"), &Value::Integer(66));
	assert_eq!(second.get("tree").expect("tree"), &Value::Integer(2));
	assert_eq!(second.get("pointsSpent").expect("pointsSpent"), &Value::Integer(1));

	assert_eq!(value.get("level").expect("level"), &Value::Integer(30));
}

#[test]
fn summoner_data_accepts_empty_mastery_list() {
	let payload = summoner_payload(&[]);
	let value = SummonerData.decode(&Block::new(PacketType::SUMMONER_DATA, &payload)).expect("decodes");
	assert!(value.get("masteries").expect("masteries").as_array().expect("array").is_empty());
}

#[test]
fn summoner_data_rejects_bad_mastery_padding() {
	let payload = summoner_payload(&[[65, 1, 0x03, 0x07, 4]]);
	let err = SummonerData.decode(&Block::new(PacketType::SUMMONER_DATA, &payload)).expect_err("padding mismatch");
	assert!(matches!(
		err,
		PacketError::SchemaInvariant {
			field: "masteryPadding",
			at: 131,
			got: 7,
			..
		}
	));
}

#[test]
fn player_stats_switches_on_length() {
	let mut short = vec![0_u8; PlayerStats::LEN];
	put_u32(&mut short, 0, 7);
	put_u32(&mut short, 8, 3);
	put_f32(&mut short, 36, 12000.5);
	put_u32(&mut short, 126, 40);
	put_u32(&mut short, 130, 2);
	put_u32(&mut short, 270, 15);

	let value = PlayerStats.decode(&Block::new(PacketType::PLAYER_STATS, &short)).expect("short layout");
	assert_eq!(value.get("assists").expect("assists"), &Value::Integer(7));
	assert_eq!(value.get("kills").expect("kills"), &Value::Integer(3));
	assert_eq!(value.get("goldEarned").expect("goldEarned"), &Value::Float(12000.5));
	assert_eq!(value.get("neutralMinionsKilled").expect("neutral"), &Value::Integer(40));
	assert_eq!(value.get("deaths").expect("deaths"), &Value::Integer(2));
	assert_eq!(value.get("wardsPlaced").expect("wardsPlaced"), &Value::Integer(15));
	assert!(matches!(value.get("neutralMinionsKilledInEnemyJungle"), Err(PacketError::KeyNotFound { .. })));

	let mut long = vec![0_u8; PlayerStats::LEN_WITH_JUNGLE];
	put_u32(&mut long, 126, 40);
	put_u32(&mut long, 130, 11);
	put_u32(&mut long, 134, 29);
	put_u32(&mut long, 138, 2);
	put_u32(&mut long, 278, 15);

	let value = PlayerStats.decode(&Block::new(PacketType::PLAYER_STATS, &long)).expect("jungle layout");
	assert_eq!(value.get("neutralMinionsKilledInEnemyJungle").expect("enemy"), &Value::Integer(11));
	assert_eq!(value.get("neutralMinionsKilledInTeamJungle").expect("team"), &Value::Integer(29));
	assert_eq!(value.get("deaths").expect("deaths"), &Value::Integer(2));
	assert_eq!(value.get("wardsPlaced").expect("wardsPlaced"), &Value::Integer(15));

	let keys: Vec<&str> = value.as_object().expect("object").keys().collect();
	let neutral = keys.iter().position(|key| *key == "neutralMinionsKilled").expect("neutral key");
	assert_eq!(keys[neutral + 1], "neutralMinionsKilledInEnemyJungle");
}

#[test]
fn player_stats_rejects_unknown_sizes() {
	let odd = vec![0_u8; 0x124];
	let block = Block::new(PacketType::PLAYER_STATS, &odd);
	assert!(!PlayerStats.test(&block));
	let err = PlayerStats.decode(&block).expect_err("unsupported size");
	assert!(matches!(err, PacketError::UnsupportedLayout { decoder: "PlayerStats", len: 0x124 }));
}
