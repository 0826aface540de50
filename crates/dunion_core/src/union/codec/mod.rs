//! Discriminator-tagged JSON codec.
//!
//! Variant structs never declare the discriminator. Encoding serializes the payload
//! with its own field mapping and then writes a new object whose first key is the
//! union's tag field; decoding removes the tag field, picks the variant it names,
//! and maps the remaining fields onto that variant.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::union::{Result, TaggedUnion, UnionError};

/// Payload (de)serialization hooks used by the tagged codec.
pub trait TaggedCodec: TaggedUnion {
	/// Serialize the held variant's own fields, without the discriminator.
	fn encode_payload(&self) -> serde_json::Result<Value>;

	/// Parse `payload` as the variant registered under `tag`.
	///
	/// The discriminator field has already been removed from `payload`.
	fn decode_payload(tag: &str, payload: Value) -> Result<Self>;
}

/// Encode a union as a tagged JSON value (discriminator first).
pub fn encode_value<U: TaggedCodec>(union: &U) -> Result<Value> {
	let serialization = |reason: String| UnionError::Serialization {
		union: U::NAME,
		tag: union.tag(),
		reason,
	};

	let fields = match union.encode_payload() {
		Ok(Value::Object(fields)) => fields,
		Ok(other) => return Err(serialization(format!("payload is a JSON {}, not an object", json_kind(&other)))),
		Err(err) => return Err(serialization(err.to_string())),
	};
	if fields.contains_key(U::TAG_FIELD) {
		return Err(serialization(format!("payload already has a {:?} field", U::TAG_FIELD)));
	}

	let mut out = Map::with_capacity(fields.len() + 1);
	out.insert(U::TAG_FIELD.to_owned(), Value::String(union.tag().to_owned()));
	out.extend(fields);
	Ok(Value::Object(out))
}

/// Encode a union as compact tagged JSON text.
pub fn encode<U: TaggedCodec>(union: &U) -> Result<String> {
	Ok(serde_json::to_string(&encode_value(union)?)?)
}

/// Encode a union as two-space indented tagged JSON text.
pub fn encode_pretty<U: TaggedCodec>(union: &U) -> Result<String> {
	Ok(serde_json::to_string_pretty(&encode_value(union)?)?)
}

/// Encode a slice of unions as a compact JSON array of tagged objects.
pub fn encode_all<U: TaggedCodec>(unions: &[U]) -> Result<String> {
	let items = unions.iter().map(encode_value).collect::<Result<Vec<_>>>()?;
	Ok(serde_json::to_string(&items)?)
}

/// Decode a union from an already-parsed JSON value.
pub fn decode_value<U: TaggedCodec>(value: Value) -> Result<U> {
	let missing = || UnionError::MissingDiscriminator {
		union: U::NAME,
		field: U::TAG_FIELD,
	};

	let Value::Object(mut fields) = value else {
		return Err(missing());
	};
	let tag = match fields.remove(U::TAG_FIELD) {
		Some(Value::String(tag)) => tag,
		_ => return Err(missing()),
	};
	if !U::TAGS.contains(&tag.as_str()) {
		return Err(unknown_discriminator::<U>(&tag));
	}

	U::decode_payload(&tag, Value::Object(fields))
}

/// Decode a union from tagged JSON text.
pub fn decode<U: TaggedCodec>(text: &str) -> Result<U> {
	let value: Value = serde_json::from_str(text)?;
	decode_value(value)
}

/// Decode a JSON array of tagged objects. The first failing element aborts the decode.
pub fn decode_all<U: TaggedCodec>(text: &str) -> Result<Vec<U>> {
	let items: Vec<Value> = serde_json::from_str(text)?;
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			decode_value(item).map_err(|err| UnionError::InvalidElement {
				index,
				source: Box::new(err),
			})
		})
		.collect()
}

/// Encode a bare variant: its own fields only, no discriminator.
pub fn encode_bare<V: Serialize>(variant: &V) -> Result<String> {
	Ok(serde_json::to_string(variant)?)
}

/// Decode a bare variant from its own fields, without discriminator lookup.
pub fn decode_bare<V: DeserializeOwned>(text: &str) -> Result<V> {
	let value: Value = serde_json::from_str(text)?;
	parse_payload(short_type_name::<V>(), value)
}

/// Map a discriminator-free payload onto variant `V`.
pub(crate) fn parse_payload<V: DeserializeOwned>(variant: &'static str, payload: Value) -> Result<V> {
	serde_json::from_value(payload).map_err(|source| UnionError::MalformedPayload { variant, source })
}

pub(crate) fn unknown_discriminator<U: TaggedUnion>(tag: &str) -> UnionError {
	UnionError::UnknownDiscriminator {
		union: U::NAME,
		field: U::TAG_FIELD,
		tag: tag.to_owned(),
		expected: U::TAGS,
	}
}

fn short_type_name<V>() -> &'static str {
	let full = std::any::type_name::<V>();
	full.rsplit("::").next().unwrap_or(full)
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Implement serde `Serialize`/`Deserialize` for a union by routing through the tagged codec.
macro_rules! tagged_serde {
	($union:ty) => {
		impl serde::Serialize for $union {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				let value = $crate::union::encode_value(self).map_err(serde::ser::Error::custom)?;
				serde::Serialize::serialize(&value, serializer)
			}
		}

		impl<'de> serde::Deserialize<'de> for $union {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
				let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
				$crate::union::decode_value(value).map_err(serde::de::Error::custom)
			}
		}
	};
}

pub(crate) use tagged_serde;
