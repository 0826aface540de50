use crate::union::{Dispatch, Result, UnionError};

pub(crate) mod sealed {
	/// Restricts [`super::Member`] to the variant types declared in this crate.
	pub trait Sealed {}
}

/// A closed set of variants written with one discriminator field on the wire.
pub trait TaggedUnion: Sized {
	/// Union name used in error messages.
	const NAME: &'static str;
	/// Wire name of the discriminator field.
	const TAG_FIELD: &'static str;
	/// Every registered discriminator, in wire-contract order.
	const TAGS: &'static [&'static str];

	/// Discriminator of the held variant.
	fn tag(&self) -> &'static str;
}

/// A variant type that belongs to union `U`.
///
/// Sealed: the member set of every union is fixed by this crate.
pub trait Member<U: TaggedUnion>: Into<U> + sealed::Sealed {
	/// Discriminator written for this variant.
	const TAG: &'static str;

	/// Borrow the payload when `union` holds this variant.
	fn peek(union: &U) -> Option<&Self>;

	/// Move the payload out when `union` holds this variant, returning the union otherwise.
	fn take(union: U) -> std::result::Result<Self, U>;
}

/// Generic predicate, narrowing, and dispatch helpers for every [`TaggedUnion`].
pub trait UnionExt: TaggedUnion {
	/// Whether the held variant is `V`.
	fn is<V: Member<Self>>(&self) -> bool {
		V::peek(self).is_some()
	}

	/// Borrow the held variant as `V`.
	fn cast<V: Member<Self>>(&self) -> Result<&V> {
		V::peek(self).ok_or(UnionError::InvalidCast {
			union: Self::NAME,
			expected: V::TAG,
			got: self.tag(),
		})
	}

	/// Consume the union and return the held variant as `V`.
	fn into_variant<V: Member<Self>>(self) -> Result<V> {
		V::take(self).map_err(|union| UnionError::InvalidCast {
			union: Self::NAME,
			expected: V::TAG,
			got: union.tag(),
		})
	}

	/// Start a partial dispatch over the held variant.
	fn dispatch<T>(&self) -> Dispatch<'_, Self, T> {
		Dispatch::new(self)
	}
}

impl<U: TaggedUnion> UnionExt for U {}
