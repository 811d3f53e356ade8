#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "olpkt", about = "Captured game-stream packet block inspection tools")]
struct Cli {
	/// Enable debug logging (overridden by RUST_LOG).
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode one block given on the command line.
	Decode(cmd::decode::Args),
	/// Decode every record of a block dump.
	Dump(cmd::dump::Args),
	/// Summarize a block dump.
	Info(cmd::info::Args),
	/// List registered decoders in dispatch order.
	Decoders(cmd::decoders::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
		.with_writer(std::io::stderr)
		.init();
}

fn run(command: Commands) -> olpkt::packet::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Decoders(args) => cmd::decoders::run(args),
	}
}
