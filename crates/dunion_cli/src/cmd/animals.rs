use std::cell::Cell;
use std::path::{Path, PathBuf};

use dunion::union::{Animal, AnimalType, AnimalValue, Result};

use crate::cmd::service::JsonFileSource;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Load animals and resolve each one through every dispatch style.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let source = JsonFileSource::<Animal>::new(&path);
	let animals = source.load_all()?;
	let reports = animals.iter().enumerate().map(|(index, animal)| describe(index, animal)).collect::<Result<Vec<_>>>()?;

	if json {
		return print_json(source.path(), &reports);
	}

	println!("path: {}", source.path().display());
	println!("animals: {}", reports.len());
	println!("idx\ttype\tvalue\tmatch\tvisit\tis\tas\tlikes");
	for report in &reports {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
			report.index, report.by_type, report.by_value, report.by_match, report.by_visit, report.by_predicate, report.by_cast, report.likes
		);
	}

	Ok(())
}

#[derive(Debug, serde::Serialize)]
struct AnimalReport {
	index: usize,
	by_type: &'static str,
	by_value: &'static str,
	by_match: &'static str,
	by_visit: &'static str,
	by_predicate: &'static str,
	by_cast: &'static str,
	likes: bool,
	animal: Animal,
}

fn describe(index: usize, animal: &Animal) -> Result<AnimalReport> {
	let by_type = match animal.animal_type() {
		AnimalType::Dog => "Dog",
		AnimalType::Cat => "Cat",
	};

	let by_value = match animal.value() {
		AnimalValue::Dog(_) => "Dog",
		AnimalValue::Cat(_) => "Cat",
	};

	let by_match = animal.match_with(|_| "Dog", |_| "Cat");

	let visited = Cell::new("");
	animal.visit(|_| visited.set("Dog"), |_| visited.set("Cat"));

	let by_predicate = if animal.is_dog() { "Dog" } else { "Cat" };

	let (by_cast, likes) = if animal.is_dog() {
		("Dog", animal.as_dog()?.likes_to_woof)
	} else {
		("Cat", animal.as_cat()?.likes_to_meow)
	};

	Ok(AnimalReport {
		index,
		by_type,
		by_value,
		by_match,
		by_visit: visited.get(),
		by_predicate,
		by_cast,
		likes,
		animal: *animal,
	})
}

#[derive(serde::Serialize)]
struct AnimalsJson<'a> {
	path: String,
	count: usize,
	animals: &'a [AnimalReport],
}

fn print_json(path: &Path, reports: &[AnimalReport]) -> Result<()> {
	emit_json(&AnimalsJson {
		path: path.display().to_string(),
		count: reports.len(),
		animals: reports,
	})
}
