use crate::union::{Member, Result, TaggedUnion, UnionError};

/// Callback dispatch over a subset of a union's variants.
///
/// Callbacks are tried in registration order; the first one whose variant is held runs,
/// later ones are skipped. Finish with [`Dispatch::otherwise`] to supply a fallback, or
/// with [`Dispatch::finish`] to fail when nothing matched.
#[must_use = "a dispatch does nothing until finished"]
pub struct Dispatch<'a, U, T> {
	union: &'a U,
	out: Option<T>,
}

impl<'a, U: TaggedUnion, T> Dispatch<'a, U, T> {
	/// Create a dispatch with no callbacks registered.
	pub fn new(union: &'a U) -> Self {
		Self { union, out: None }
	}

	/// Register a callback for variant `V`.
	pub fn on<V: Member<U> + 'a>(mut self, callback: impl FnOnce(&'a V) -> T) -> Self {
		if self.out.is_none()
			&& let Some(variant) = V::peek(self.union)
		{
			self.out = Some(callback(variant));
		}
		self
	}

	/// Whether a registered callback already ran.
	pub fn is_handled(&self) -> bool {
		self.out.is_some()
	}

	/// Return the callback result, or run `fallback` when no callback covered the held variant.
	pub fn otherwise(self, fallback: impl FnOnce(&'a U) -> T) -> T {
		match self.out {
			Some(out) => out,
			None => fallback(self.union),
		}
	}

	/// Return the callback result, failing when no callback covered the held variant.
	pub fn finish(self) -> Result<T> {
		self.out.ok_or(UnionError::UnhandledVariant {
			union: U::NAME,
			tag: self.union.tag(),
		})
	}
}

#[cfg(test)]
mod tests;
