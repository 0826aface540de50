use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::union::codec::{parse_payload, tagged_serde, unknown_discriminator};
use crate::union::member::sealed::Sealed;
use crate::union::{Member, Result, TaggedCodec, TaggedUnion, UnionError, UnionExt};

/// Dog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
	/// Wire name `likesToWoof`.
	pub likes_to_woof: bool,
}

/// Cat variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
	/// Wire name `likesToMeow`.
	pub likes_to_meow: bool,
}

/// Explicit animal kind tag carried by [`Animal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalType {
	/// Tag `"Dog"`.
	Dog,
	/// Tag `"Cat"`.
	Cat,
}

impl AnimalType {
	/// All kinds in declaration order.
	pub const ALL: [Self; 2] = [Self::Dog, Self::Cat];

	/// Stable wire discriminator.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dog => "Dog",
			Self::Cat => "Cat",
		}
	}

	/// Look up a kind by exact (case-sensitive) wire discriminator.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
	}
}

impl fmt::Display for AnimalType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Payload slot holding any animal variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalValue {
	/// Dog payload.
	Dog(Dog),
	/// Cat payload.
	Cat(Cat),
}

impl AnimalValue {
	/// Kind of the held payload.
	pub fn animal_type(&self) -> AnimalType {
		match self {
			Self::Dog(_) => AnimalType::Dog,
			Self::Cat(_) => AnimalType::Cat,
		}
	}
}

impl From<Dog> for AnimalValue {
	fn from(dog: Dog) -> Self {
		Self::Dog(dog)
	}
}

impl From<Cat> for AnimalValue {
	fn from(cat: Cat) -> Self {
		Self::Cat(cat)
	}
}

/// Wrapper-form animal union: an explicit [`AnimalType`] tag next to an [`AnimalValue`] payload.
///
/// Fields are private; every constructor derives or validates the tag, so `animal_type()`
/// and the payload kind always agree. Encodes as `{"animalType": ..., <payload fields>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animal {
	animal_type: AnimalType,
	value: AnimalValue,
}

impl Animal {
	/// Wrap a payload, deriving the tag from it.
	pub fn new(value: impl Into<AnimalValue>) -> Self {
		let value = value.into();
		Self {
			animal_type: value.animal_type(),
			value,
		}
	}

	/// Wrap a payload under an explicit tag, failing when they disagree.
	pub fn from_parts(animal_type: AnimalType, value: AnimalValue) -> Result<Self> {
		let payload = value.animal_type();
		if payload != animal_type {
			return Err(UnionError::InvalidVariant {
				union: Self::NAME,
				tag: animal_type.as_str(),
				payload: payload.as_str(),
			});
		}
		Ok(Self { animal_type, value })
	}

	/// Explicit kind tag.
	pub fn animal_type(&self) -> AnimalType {
		self.animal_type
	}

	/// Borrow the payload.
	pub fn value(&self) -> &AnimalValue {
		&self.value
	}

	/// Unwrap into the payload.
	pub fn into_value(self) -> AnimalValue {
		self.value
	}

	/// Whether a dog is held.
	pub fn is_dog(&self) -> bool {
		self.animal_type == AnimalType::Dog
	}

	/// Whether a cat is held.
	pub fn is_cat(&self) -> bool {
		self.animal_type == AnimalType::Cat
	}

	/// Borrow the held dog, failing with [`UnionError::InvalidCast`] otherwise.
	pub fn as_dog(&self) -> Result<&Dog> {
		self.cast()
	}

	/// Borrow the held cat, failing with [`UnionError::InvalidCast`] otherwise.
	pub fn as_cat(&self) -> Result<&Cat> {
		self.cast()
	}

	/// Run the callback for the held variant and return its result.
	pub fn match_with<T>(&self, on_dog: impl FnOnce(&Dog) -> T, on_cat: impl FnOnce(&Cat) -> T) -> T {
		match &self.value {
			AnimalValue::Dog(dog) => on_dog(dog),
			AnimalValue::Cat(cat) => on_cat(cat),
		}
	}

	/// Run the side-effecting callback for the held variant.
	pub fn visit(&self, on_dog: impl FnOnce(&Dog), on_cat: impl FnOnce(&Cat)) {
		self.match_with(on_dog, on_cat)
	}
}

impl From<AnimalValue> for Animal {
	fn from(value: AnimalValue) -> Self {
		Self::new(value)
	}
}

impl From<Dog> for Animal {
	fn from(dog: Dog) -> Self {
		Self::new(dog)
	}
}

impl From<Cat> for Animal {
	fn from(cat: Cat) -> Self {
		Self::new(cat)
	}
}

impl TryFrom<Animal> for Dog {
	type Error = UnionError;

	fn try_from(animal: Animal) -> Result<Self> {
		animal.into_variant()
	}
}

impl TryFrom<Animal> for Cat {
	type Error = UnionError;

	fn try_from(animal: Animal) -> Result<Self> {
		animal.into_variant()
	}
}

impl TaggedUnion for Animal {
	const NAME: &'static str = "Animal";
	const TAG_FIELD: &'static str = "animalType";
	const TAGS: &'static [&'static str] = &["Dog", "Cat"];

	fn tag(&self) -> &'static str {
		self.animal_type.as_str()
	}
}

impl TaggedCodec for Animal {
	fn encode_payload(&self) -> serde_json::Result<Value> {
		match &self.value {
			AnimalValue::Dog(dog) => serde_json::to_value(dog),
			AnimalValue::Cat(cat) => serde_json::to_value(cat),
		}
	}

	fn decode_payload(tag: &str, payload: Value) -> Result<Self> {
		match AnimalType::from_tag(tag) {
			Some(AnimalType::Dog) => parse_payload::<Dog>("Dog", payload).map(Self::from),
			Some(AnimalType::Cat) => parse_payload::<Cat>("Cat", payload).map(Self::from),
			None => Err(unknown_discriminator::<Self>(tag)),
		}
	}
}

tagged_serde!(Animal);

impl Sealed for Dog {}
impl Sealed for Cat {}

impl Member<Animal> for Dog {
	const TAG: &'static str = "Dog";

	fn peek(union: &Animal) -> Option<&Self> {
		match &union.value {
			AnimalValue::Dog(dog) => Some(dog),
			AnimalValue::Cat(_) => None,
		}
	}

	fn take(union: Animal) -> std::result::Result<Self, Animal> {
		match union.value {
			AnimalValue::Dog(dog) => Ok(dog),
			AnimalValue::Cat(_) => Err(union),
		}
	}
}

impl Member<Animal> for Cat {
	const TAG: &'static str = "Cat";

	fn peek(union: &Animal) -> Option<&Self> {
		match &union.value {
			AnimalValue::Cat(cat) => Some(cat),
			AnimalValue::Dog(_) => None,
		}
	}

	fn take(union: Animal) -> std::result::Result<Self, Animal> {
		match union.value {
			AnimalValue::Cat(cat) => Ok(cat),
			AnimalValue::Dog(_) => Err(union),
		}
	}
}

#[cfg(test)]
mod tests;
