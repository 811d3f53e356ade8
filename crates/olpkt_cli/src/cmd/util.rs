use olpkt::packet::{PacketError, PacketType, Result, Value};
use serde_json::{Map, Number};

/// Rendering selected for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
	/// Canonical text serialization.
	Text,
	/// JSON on stdout.
	Json,
}

impl OutputFormat {
	/// Map the `--json` flag.
	pub(crate) fn from_json_flag(json: bool) -> Self {
		if json { Self::Json } else { Self::Text }
	}
}

/// Parse decimal or `0x`-prefixed hex packet type literal.
pub(crate) fn parse_packet_type(value: &str) -> Result<u16> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u16::from_str_radix(stripped, 16)
	} else {
		value.parse::<u16>()
	};

	parsed.map_err(|_| PacketError::InvalidTypeLiteral { value: value.to_owned() })
}

/// Parse hex byte string; whitespace between digits is ignored.
pub(crate) fn parse_hex(value: &str) -> Result<Vec<u8>> {
	let digits: String = value.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
	hex::decode(&digits).map_err(|_| PacketError::InvalidHexLiteral { value: value.to_owned() })
}

/// Render packet type as `0x..` plus known name.
pub(crate) fn type_label(packet_type: u16) -> String {
	match PacketType::name(packet_type) {
		Some(name) => format!("0x{packet_type:02x} {name}"),
		None => format!("0x{packet_type:02x}"),
	}
}

/// Render packet type as bare hex literal.
pub(crate) fn type_hex(packet_type: u16) -> String {
	format!("0x{packet_type:02x}")
}

/// Convert a decoded value tree to JSON, keeping object key order.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Object(item) => {
			let mut map = Map::new();
			for (key, child) in item.iter() {
				map.insert(key.to_owned(), value_to_json(child));
			}
			serde_json::Value::Object(map)
		}
		Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::String(text) => serde_json::Value::String(text.clone()),
		Value::Integer(number) => serde_json::Value::from(*number),
		Value::LargeInteger(number) => serde_json::Value::from(*number),
		Value::Float(number) => Number::from_f64(f64::from(*number)).map_or(serde_json::Value::Null, serde_json::Value::Number),
		Value::Bool(flag) => serde_json::Value::Bool(*flag),
		Value::Undefined => serde_json::Value::Null,
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}
