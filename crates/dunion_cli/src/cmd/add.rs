use dunion::union::{Animal, AnimalValue, Cat, Dog, Result};

use crate::cmd::service::ConsoleSink;

/// Animal kind to build.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Kind {
	Dog,
	Cat,
}

#[derive(clap::Args)]
pub struct Args {
	#[arg(value_enum)]
	pub kind: Kind,
	#[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
	pub likes: bool,
	#[arg(long)]
	pub bare: bool,
}

/// Build one animal and display it through the console sink.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, likes, bare } = args;

	let animal = match kind {
		Kind::Dog => Animal::new(Dog { likes_to_woof: likes }),
		Kind::Cat => Animal::new(Cat { likes_to_meow: likes }),
	};

	let mut sink = ConsoleSink::stdout();
	if !bare {
		return sink.add(&animal);
	}

	match animal.value() {
		AnimalValue::Dog(dog) => sink.add_bare("dog", dog),
		AnimalValue::Cat(cat) => sink.add_bare("cat", cat),
	}
}
