use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, UnionError>;

/// Errors produced while constructing, dispatching over, and (de)serializing unions.
#[derive(Debug, Error)]
pub enum UnionError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Explicit tag and payload named different variants.
	#[error("invalid {union} variant: tag {tag:?} does not match payload {payload:?}")]
	InvalidVariant {
		/// Union type name.
		union: &'static str,
		/// Tag supplied by the caller.
		tag: &'static str,
		/// Tag derived from the payload.
		payload: &'static str,
	},
	/// Decoded object carried a discriminator that no variant registers.
	#[error("unknown {union} discriminator {field}={tag:?} (expected one of {expected:?})")]
	UnknownDiscriminator {
		/// Union type name.
		union: &'static str,
		/// Discriminator wire field.
		field: &'static str,
		/// Offending tag value.
		tag: String,
		/// Registered tags.
		expected: &'static [&'static str],
	},
	/// Decoded value lacked a string discriminator field.
	#[error("missing {union} discriminator: expected string field {field:?} on a JSON object")]
	MissingDiscriminator {
		/// Union type name.
		union: &'static str,
		/// Discriminator wire field.
		field: &'static str,
	},
	/// Variant fields were missing or mistyped.
	#[error("malformed {variant} payload: {source}")]
	MalformedPayload {
		/// Variant type name.
		variant: &'static str,
		/// Structural mapping failure.
		source: serde_json::Error,
	},
	/// Dispatch finished without a callback or fallback for the held variant.
	#[error("unhandled {union} variant {tag:?}")]
	UnhandledVariant {
		/// Union type name.
		union: &'static str,
		/// Held variant tag.
		tag: &'static str,
	},
	/// Narrowing requested a variant other than the held one.
	#[error("invalid {union} cast: expected {expected:?}, got {got:?}")]
	InvalidCast {
		/// Union type name.
		union: &'static str,
		/// Requested variant tag.
		expected: &'static str,
		/// Held variant tag.
		got: &'static str,
	},
	/// Payload could not be written as a tagged JSON object.
	#[error("cannot serialize {union} variant {tag:?}: {reason}")]
	Serialization {
		/// Union type name.
		union: &'static str,
		/// Held variant tag.
		tag: &'static str,
		/// Failure detail.
		reason: String,
	},
	/// One element of a sequence failed to decode.
	#[error("element {index}: {source}")]
	InvalidElement {
		/// Zero-based element index.
		index: usize,
		/// Element decode failure.
		source: Box<UnionError>,
	},
}
