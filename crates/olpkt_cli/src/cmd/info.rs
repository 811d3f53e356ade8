use std::path::PathBuf;

use olpkt::packet::{BlockDump, PacketType, Result};

use crate::cmd::util::{emit_json, type_hex};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print dump header and per-type record counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let dump = BlockDump::open(&path)?;
	let stats = dump.scan_stats()?;

	let mut entries: Vec<_> = stats.types.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: dump.header.version,
			record_count: stats.record_count,
			payload_bytes: stats.payload_bytes,
			types: entries
				.iter()
				.map(|(packet_type, count)| TypeCountJson {
					packet_type: type_hex(*packet_type),
					name: PacketType::name(*packet_type),
					count: *count,
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("version: {}", dump.header.version);
	println!("record_count: {}", stats.record_count);
	println!("payload_bytes: {}", stats.payload_bytes);

	println!("types:");
	for (packet_type, count) in entries {
		println!("  {} {}: {}", type_hex(packet_type), PacketType::name(packet_type).unwrap_or("-"), count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TypeCountJson {
	#[serde(rename = "type")]
	packet_type: String,
	name: Option<&'static str>,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	version: u16,
	record_count: u32,
	payload_bytes: u64,
	types: Vec<TypeCountJson>,
}
