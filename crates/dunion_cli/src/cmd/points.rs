use std::cell::Cell;
use std::path::{Path, PathBuf};

use dunion::union::{Point, Result, TaggedUnion, TwoDimensionalPoint, TwoDimensionalPointWithName, UnionExt};

use crate::cmd::service::JsonFileSource;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Load points, dispatch over each one, and query shared capabilities.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let source = JsonFileSource::<Point>::new(&path);
	let points = source.load_all()?;
	let reports: Vec<PointReport> = points.iter().enumerate().map(|(index, point)| describe(index, point)).collect();

	if json {
		return print_json(source.path(), &reports);
	}

	println!("path: {}", source.path().display());
	println!("points: {}", reports.len());
	println!("idx\ttype\tvariant\tmatch\tvisit\tflat\tx\ty\tz\tw\tname");
	for report in &reports {
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
			report.index,
			report.tag,
			report.by_variant,
			report.by_match,
			report.by_visit,
			report.flat,
			report.x,
			report.y,
			opt_label(report.z),
			opt_label(report.w),
			report.name.as_deref().unwrap_or("-")
		);
	}

	Ok(())
}

#[derive(Debug, serde::Serialize)]
struct PointReport {
	index: usize,
	tag: &'static str,
	by_variant: &'static str,
	by_match: &'static str,
	by_visit: &'static str,
	flat: bool,
	x: i32,
	y: i32,
	z: Option<i32>,
	w: Option<i32>,
	name: Option<String>,
	point: Point,
}

fn describe(index: usize, point: &Point) -> PointReport {
	let by_variant = match point {
		Point::TwoDimensional(_) => "2d",
		Point::TwoDimensionalWithName(_) => "2dNamed",
		Point::ThreeDimensional(_) => "3d",
		Point::FourDimensional(_) => "4d",
	};

	let by_match = point.match_with(|_| "2d", |_| "2dNamed", |_| "3d", |_| "4d", || "?");

	let visited = Cell::new("");
	point.visit(|_| visited.set("2d"), |_| visited.set("2dNamed"), |_| visited.set("3d"), |_| visited.set("4d"), || visited.set("?"));

	let flat = point
		.dispatch()
		.on::<TwoDimensionalPoint>(|_| true)
		.on::<TwoDimensionalPointWithName>(|_| true)
		.otherwise(|_| false);

	let planar = point.as_planar();
	PointReport {
		index,
		tag: point.tag(),
		by_variant,
		by_match,
		by_visit: visited.get(),
		flat,
		x: planar.x(),
		y: planar.y(),
		z: point.as_spatial().map(|spatial| spatial.z()),
		w: point.as_four_dimensional().map(|point| point.w()),
		name: point.as_named().map(|named| named.name().to_owned()),
		point: point.clone(),
	}
}

fn opt_label(value: Option<i32>) -> String {
	value.map_or_else(|| "-".to_owned(), |item| item.to_string())
}

#[derive(serde::Serialize)]
struct PointsJson<'a> {
	path: String,
	count: usize,
	points: &'a [PointReport],
}

fn print_json(path: &Path, reports: &[PointReport]) -> Result<()> {
	emit_json(&PointsJson {
		path: path.display().to_string(),
		count: reports.len(),
		points: reports,
	})
}
