use dunion::union::{Animal, Point, Result, TaggedCodec, decode, encode, encode_pretty};

/// Union to decode into.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum UnionKind {
	Animal,
	Point,
}

#[derive(clap::Args)]
pub struct Args {
	#[arg(value_enum)]
	pub union: UnionKind,
	pub text: String,
	#[arg(long)]
	pub pretty: bool,
}

/// Decode one tagged object and print its canonical encoding.
pub fn run(args: Args) -> Result<()> {
	let Args { union, text, pretty } = args;

	let encoded = match union {
		UnionKind::Animal => reencode::<Animal>(&text, pretty)?,
		UnionKind::Point => reencode::<Point>(&text, pretty)?,
	};
	println!("{encoded}");

	Ok(())
}

fn reencode<U: TaggedCodec>(text: &str, pretty: bool) -> Result<String> {
	let union: U = decode(text)?;
	if pretty { encode_pretty(&union) } else { encode(&union) }
}
