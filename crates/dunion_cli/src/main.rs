#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "dunion", about = "Discriminated union encoding and dispatch demos")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Load an animal array and dispatch over every entry.
	Animals(cmd::animals::Args),
	/// Load a point array and dispatch over every entry.
	Points(cmd::points::Args),
	/// Build one animal and hand it to the console sink.
	Add(cmd::add::Args),
	/// Decode one tagged object and print its canonical encoding.
	Decode(cmd::decode::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> dunion::union::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Animals(args) => cmd::animals::run(args),
		Commands::Points(args) => cmd::points::run(args),
		Commands::Add(args) => cmd::add::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
