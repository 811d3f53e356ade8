//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// One record to frame into a block dump.
pub struct DumpRecord<'a> {
	/// Block packet type.
	pub packet_type: u16,
	/// Capture channel id.
	pub channel: u8,
	/// Raw payload.
	pub payload: &'a [u8],
}

/// Encode records as a version-1 block dump.
pub fn encode_dump(records: &[DumpRecord<'_>]) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(b"OLBLOCKS");
	out.extend_from_slice(&1_u16.to_le_bytes());
	for record in records {
		out.extend_from_slice(&record.packet_type.to_le_bytes());
		out.push(record.channel);
		out.extend_from_slice(&(record.payload.len() as u32).to_le_bytes());
		out.extend_from_slice(record.payload);
	}
	out
}

/// Write `bytes` to a scratch file under the target directory and return its path.
pub fn write_scratch(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("olpkt-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path
}

/// Parse command stdout as JSON.
pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).expect("stdout should be valid json")
}
