use olpkt::packet::{Block, Dispatch, Registry, Result};

use crate::cmd::util::{OutputFormat, emit_json, parse_hex, parse_packet_type, type_hex, type_label, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	/// Packet type, decimal or `0x` hex.
	#[arg(long = "type", value_name = "TYPE")]
	pub packet_type: String,
	/// Payload bytes as hex; whitespace is ignored.
	#[arg(long)]
	pub hex: String,
	/// Declared block length; must match the payload byte count.
	#[arg(long)]
	pub len: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Decode a single block given on the command line.
pub fn run(args: Args) -> Result<()> {
	let Args { packet_type, hex, len, json } = args;

	let packet_type = parse_packet_type(&packet_type)?;
	let payload = parse_hex(&hex)?;
	let block = match len {
		Some(declared) => Block::with_declared_len(packet_type, declared, &payload)?,
		None => Block::new(packet_type, &payload),
	};

	let registry = Registry::default();
	let dispatch = registry.dispatch(&block)?;

	match OutputFormat::from_json_flag(json) {
		OutputFormat::Json => {
			let payload = match &dispatch {
				Dispatch::Decoded { decoder, value } => DecodeJson {
					packet_type: type_hex(packet_type),
					len: block.len(),
					decoder: Some(*decoder),
					value: value_to_json(value),
				},
				Dispatch::Unknown { .. } => DecodeJson {
					packet_type: type_hex(packet_type),
					len: block.len(),
					decoder: None,
					value: serde_json::Value::Null,
				},
			};
			emit_json(&payload);
		}
		OutputFormat::Text => match dispatch {
			Dispatch::Decoded { decoder, value } => {
				println!("decoder: {decoder}");
				println!("{value}");
			}
			Dispatch::Unknown { packet_type, len } => {
				println!("no decoder matched type {} (len {len})", type_label(packet_type));
			}
		},
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson<'a> {
	#[serde(rename = "type")]
	packet_type: String,
	len: usize,
	decoder: Option<&'a str>,
	value: serde_json::Value,
}
