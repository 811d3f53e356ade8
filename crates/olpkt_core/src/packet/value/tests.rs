use proptest::prelude::*;

use crate::packet::{Array, Object, PacketError, Value};

#[test]
fn unsigned_narrow_values_widen_to_integer() {
	assert_eq!(Value::from(0xff_u8), Value::Integer(255));
	assert_eq!(Value::from(0xffff_u16), Value::Integer(65535));
	assert_eq!(Value::from(-3_i8), Value::Integer(-3));
}

#[test]
fn u32_promotion_boundary() {
	assert_eq!(Value::from(0x7fff_ffff_u32), Value::Integer(i32::MAX));
	assert_eq!(Value::from(0x8000_0000_u32), Value::LargeInteger(2_147_483_648));
	assert_eq!(Value::from(u32::MAX), Value::LargeInteger(4_294_967_295));
}

#[test]
fn u64_rejects_top_three_bits() {
	assert_eq!(Value::from_u64((1 << 61) - 1).expect("61-bit value fits"), Value::LargeInteger((1 << 61) - 1));
	for bit in 61..64 {
		let err = Value::from_u64(1_u64 << bit).expect_err("top bits overflow");
		assert!(matches!(err, PacketError::ValueOverflow { value } if value == 1_u64 << bit));
	}
	assert!(Value::try_from(u64::MAX).is_err());
}

#[test]
fn object_set_overwrites_in_place() {
	let mut obj = Object::new();
	assert!(obj.set("a", 1_i32).is_none());
	obj.set("b", 2_i32);
	let previous = obj.set("a", 3_i32);

	assert_eq!(previous, Some(Value::Integer(1)));
	assert_eq!(obj.len(), 2);
	assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
	assert_eq!(obj.get("a").expect("a present"), &Value::Integer(3));
}

#[test]
fn missing_key_and_index_are_reported() {
	let obj = Object::new();
	let err = obj.get("nope").expect_err("missing key");
	assert!(matches!(err, PacketError::KeyNotFound { ref key } if key == "nope"));

	let arr: Array = [1_i32, 2].into_iter().collect();
	assert_eq!(arr.at(1).expect("index 1"), &Value::Integer(2));
	let err = arr.at(2).expect_err("past end");
	assert!(matches!(err, PacketError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn container_access_on_scalar_fails() {
	let err = Value::int(1).get("x").expect_err("scalar is not an object");
	assert!(matches!(err, PacketError::NotAContainer { expected: "object", got: "integer" }));
}

#[test]
fn serializes_nested_object_with_tabs() {
	let mut inner = Object::new();
	inner.set("id", 7_u8);
	inner.set("name", "Annie");

	let mut list = Array::new();
	list.push(1_u8);
	list.push(Value::float(2.5));
	list.push(true);

	let mut root = Object::new();
	root.set("inner", inner);
	root.set("list", list);
	root.set("empty", Object::new());
	root.set("big", 0x8000_0000_u32);

	let text = Value::from(root).to_text();
	let expected = "{\n\t\"inner\": {\n\t\t\"id\": 7,\n\t\t\"name\": \"Annie\"\n\t},\n\t\"list\": [1,2.5,true],\n\t\"empty\": {},\n\t\"big\": 2147483648\n}";
	assert_eq!(text, expected);
}

#[test]
fn scalars_serialize_plainly() {
	assert_eq!(Value::float(250.0).to_text(), "250");
	assert_eq!(Value::bool(false).to_text(), "false");
	assert_eq!(Value::string("x y").to_text(), "\"x y\"");
	assert_eq!(Value::array().to_text(), "[]");
	assert_eq!(Value::Undefined.to_text(), "");
	assert_eq!(format!("{}", Value::int(-4)), "-4");
}

#[test]
fn destroy_releases_every_node_once() {
	let mut inner = Object::new();
	inner.set("a", 1_u8);
	inner.set("b", Value::Undefined);
	let mut list = Array::new();
	list.push(inner);
	list.push("s");
	let mut root = Object::new();
	root.set("list", list);
	root.set("n", 3_u16);

	let mut value = Value::from(root);
	let released = value.destroy().expect("first destroy");

	// root, list, inner, a, b, "s", n
	assert_eq!(released, 7);
	assert!(value.is_undefined());
	assert_eq!(value.to_text(), "");
	assert!(matches!(value.destroy(), Err(PacketError::AlreadyDestroyed)));
}

proptest! {
	#[test]
	fn u32_promotion_preserves_value(v in any::<u32>()) {
		let value = Value::from(v);
		if v < (1 << 31) {
			prop_assert!(matches!(value, Value::Integer(_)));
		} else {
			prop_assert!(matches!(value, Value::LargeInteger(_)));
		}
		let parsed: u64 = value.to_text().parse().expect("decimal text");
		prop_assert_eq!(parsed, u64::from(v));
	}

	#[test]
	fn u64_conversion_matches_61_bit_rule(v in any::<u64>()) {
		match Value::from_u64(v) {
			Ok(value) => {
				prop_assert_eq!(v >> 61, 0);
				prop_assert_eq!(value.to_text(), v.to_string());
			}
			Err(err) => {
				prop_assert_ne!(v >> 61, 0);
				let overflow = matches!(err, PacketError::ValueOverflow { .. });
				prop_assert!(overflow);
			}
		}
	}
}
