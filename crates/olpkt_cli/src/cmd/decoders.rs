use olpkt::packet::{Registry, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// List registered decoders in dispatch order.
pub fn run(args: Args) -> Result<()> {
	let registry = Registry::default();
	let names: Vec<_> = registry.decoders().iter().map(|decoder| decoder.name()).collect();

	if args.json {
		emit_json(&names);
		return Ok(());
	}

	for (index, name) in names.iter().enumerate() {
		println!("{index}: {name}");
	}
	Ok(())
}
