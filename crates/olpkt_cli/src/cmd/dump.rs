use std::path::PathBuf;

use olpkt::packet::{BlockDump, Dispatch, PacketError, Record, Registry, Result};
use tracing::warn;

use crate::cmd::util::{OutputFormat, emit_json, parse_packet_type, type_hex, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Also report records no decoder accepted.
	#[arg(long)]
	pub include_unknown: bool,
	/// Abort on the first decode failure instead of reporting it and continuing.
	#[arg(long)]
	pub stop_on_error: bool,
	/// Shorthand for `--include-unknown --stop-on-error`.
	#[arg(long)]
	pub strict: bool,
	/// Only process records of this packet type.
	#[arg(long = "type", value_name = "TYPE")]
	pub packet_type: Option<String>,
	/// Stop after this many records have been processed.
	#[arg(long = "limit", value_name = "N")]
	pub max_records: Option<usize>,
}

/// Record selection and failure policy for a dump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
	/// Report records no decoder accepted.
	pub include_unknown: bool,
	/// Abort on the first decode failure.
	pub stop_on_error: bool,
	/// Restrict to one packet type.
	pub type_filter: Option<u16>,
	/// Maximum number of records processed after filtering.
	pub max_records: Option<usize>,
}

impl DumpOptions {
	/// Fail fast and report every record, matched or not.
	pub fn strict() -> Self {
		Self {
			include_unknown: true,
			stop_on_error: true,
			..Self::default()
		}
	}

	fn accepts(&self, record: &Record<'_>) -> bool {
		self.type_filter.is_none_or(|packet_type| record.head.packet_type == packet_type)
	}
}

/// Dispatch every record of a block dump and print decoded values.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		include_unknown,
		stop_on_error,
		strict,
		packet_type,
		max_records,
	} = args;

	let base = if strict { DumpOptions::strict() } else { DumpOptions::default() };
	let options = DumpOptions {
		include_unknown: base.include_unknown || include_unknown,
		stop_on_error: base.stop_on_error || stop_on_error,
		type_filter: packet_type.as_deref().map(parse_packet_type).transpose()?,
		max_records,
	};
	let format = OutputFormat::from_json_flag(json);

	let dump = BlockDump::open(&path)?;
	let registry = Registry::default();
	let DumpRun { entries, summary, abort } = decode_records(&dump, &registry, options);

	match format {
		OutputFormat::Json => emit_json(&entries),
		OutputFormat::Text => {
			for entry in &entries {
				print_entry(entry);
			}
		}
	}

	eprintln!(
		"records: {} decoded: {} unknown: {} failed: {} malformed: {}",
		summary.processed, summary.decoded, summary.unknown, summary.failed, summary.malformed
	);

	match abort {
		Some(err) => Err(err),
		None => Ok(()),
	}
}

#[derive(Debug, Default)]
struct DumpSummary {
	processed: usize,
	decoded: usize,
	unknown: usize,
	failed: usize,
	/// Records the container reader could not frame; the scan ends at the first one.
	malformed: usize,
}

/// Entries collected before the scan ended, plus the error that aborted it in fail-fast mode.
struct DumpRun {
	entries: Vec<DumpEntry>,
	summary: DumpSummary,
	abort: Option<PacketError>,
}

fn decode_records(dump: &BlockDump, registry: &Registry, options: DumpOptions) -> DumpRun {
	let mut entries = Vec::new();
	let mut summary = DumpSummary::default();
	let mut abort = None;

	for (index, record) in dump.records().enumerate() {
		let record = match record {
			Ok(record) => record,
			Err(err) => {
				warn!(index, error = %err, "malformed record; stopping scan");
				summary.malformed += 1;
				if options.stop_on_error {
					abort = Some(err);
				}
				break;
			}
		};
		if !options.accepts(&record) {
			continue;
		}
		if options.max_records.is_some_and(|max| summary.processed >= max) {
			break;
		}
		summary.processed += 1;

		let block = record.block();
		let mut entry = DumpEntry {
			index,
			offset: record.file_offset,
			packet_type: type_hex(record.head.packet_type),
			channel: record.head.channel().label(),
			len: block.len(),
			decoder: None,
			value: None,
			text: None,
			error: None,
		};

		match registry.dispatch(&block) {
			Ok(Dispatch::Decoded { decoder, value }) => {
				summary.decoded += 1;
				entry.decoder = Some(decoder);
				entry.value = Some(value_to_json(&value));
				entry.text = Some(value.to_text());
				entries.push(entry);
			}
			Ok(Dispatch::Unknown { .. }) => {
				summary.unknown += 1;
				if options.include_unknown {
					entries.push(entry);
				}
			}
			Err(err) => {
				let decoder = registry.find(&block).map(|item| item.name());
				warn!(index, offset = record.file_offset, decoder, error = %err, "decode failed");
				summary.failed += 1;
				entry.decoder = decoder;
				entry.error = Some(err.to_string());
				entries.push(entry);
				if options.stop_on_error {
					abort = Some(err);
					break;
				}
			}
		}
	}

	DumpRun { entries, summary, abort }
}

fn print_entry(entry: &DumpEntry) {
	let decoder = entry.decoder.unwrap_or("unknown");
	println!("#{} {} (type {}, len {})", entry.index, decoder, entry.packet_type, entry.len);
	if let Some(text) = &entry.text {
		println!("{text}");
	}
	if let Some(error) = &entry.error {
		println!("error: {error}");
	}
}

#[derive(serde::Serialize)]
struct DumpEntry {
	index: usize,
	offset: usize,
	#[serde(rename = "type")]
	packet_type: String,
	channel: String,
	len: usize,
	decoder: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<serde_json::Value>,
	#[serde(skip)]
	text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}
