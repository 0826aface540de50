use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use dunion::union::{Result, TaggedCodec, decode_all, encode_pretty};
use serde::Serialize;
use tracing::{debug, info};

/// Data source reading a JSON array of tagged `U` objects from one file.
pub struct JsonFileSource<U> {
	path: PathBuf,
	_union: PhantomData<fn() -> U>,
}

impl<U: TaggedCodec> JsonFileSource<U> {
	/// Create a source for `path`. Nothing is read until [`Self::load_all`].
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			_union: PhantomData,
		}
	}

	/// Backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read and decode every element. Fails when the file is missing or any element is invalid.
	pub fn load_all(&self) -> Result<Vec<U>> {
		debug!(path = %self.path.display(), union = U::NAME, "reading tagged array");
		let text = fs::read_to_string(&self.path)?;
		let items = decode_all::<U>(&text)?;
		info!(path = %self.path.display(), union = U::NAME, count = items.len(), "loaded tagged array");
		Ok(items)
	}
}

/// Sink that displays added values and never persists them.
pub struct ConsoleSink<W> {
	out: W,
}

impl ConsoleSink<io::Stdout> {
	/// Sink writing to stdout.
	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}
}

impl<W: Write> ConsoleSink<W> {
	/// Sink writing to `out`.
	pub fn new(out: W) -> Self {
		Self { out }
	}

	/// Display one union value as pretty tagged JSON.
	pub fn add<U: TaggedCodec>(&mut self, union: &U) -> Result<()> {
		let text = encode_pretty(union)?;
		debug!(union = U::NAME, tag = union.tag(), "adding tagged value");
		self.write_entry(&U::NAME.to_lowercase(), &text)
	}

	/// Display one bare variant (no discriminator) as pretty JSON.
	pub fn add_bare<V: Serialize>(&mut self, label: &str, variant: &V) -> Result<()> {
		let text = serde_json::to_string_pretty(variant)?;
		debug!(label, "adding bare value");
		self.write_entry(label, &text)
	}

	/// Recover the underlying writer.
	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out
	}

	fn write_entry(&mut self, label: &str, text: &str) -> Result<()> {
		writeln!(self.out, "Added {label}:")?;
		writeln!(self.out, "{text}")?;
		Ok(())
	}
}
