use std::cell::Cell;

use crate::union::{Animal, AnimalType, AnimalValue, Cat, Dog, TaggedUnion, UnionError, UnionExt, decode, decode_bare, encode, encode_bare, encode_pretty};

const CAT_PRETTY: &str = "{\n  \"animalType\": \"Cat\",\n  \"likesToMeow\": true\n}";

#[test]
fn serializes_wrapped_cat_with_discriminator_first() {
	let animal = Animal::new(Cat { likes_to_meow: true });
	assert_eq!(encode_pretty(&animal).expect("cat encodes"), CAT_PRETTY);
	assert_eq!(encode(&animal).expect("cat encodes"), r#"{"animalType":"Cat","likesToMeow":true}"#);
}

#[test]
fn bare_variant_converted_to_animal_carries_discriminator() {
	let animal: Animal = Cat { likes_to_meow: true }.into();
	assert_eq!(encode_pretty(&animal).expect("cat encodes"), CAT_PRETTY);
}

#[test]
fn bare_cat_has_no_discriminator() {
	assert_eq!(encode_bare(&Cat { likes_to_meow: true }).expect("bare cat encodes"), r#"{"likesToMeow":true}"#);

	let cat: Cat = decode_bare(r#"{ "likesToMeow": true }"#).expect("bare cat decodes");
	assert_eq!(cat, Cat { likes_to_meow: true });
}

#[test]
fn decodes_tagged_cat_into_wrapper() {
	let animal: Animal = decode(CAT_PRETTY).expect("cat decodes");

	assert_eq!(animal.animal_type(), AnimalType::Cat);
	assert!(matches!(animal.value(), AnimalValue::Cat(_)));
	assert!(animal.is_cat());
	assert!(!animal.is_dog());
	assert!(animal.as_cat().expect("cat cast").likes_to_meow);
}

#[test]
fn tagged_text_converts_back_to_bare_variant() {
	let animal: Animal = decode(CAT_PRETTY).expect("cat decodes");
	let cat = Cat::try_from(animal).expect("animal holds a cat");
	assert_eq!(cat, Cat { likes_to_meow: true });
}

#[test]
fn wrong_cast_is_rejected() {
	let animal = Animal::new(Dog { likes_to_woof: true });

	assert!(animal.is_dog());
	assert!(!animal.is_cat());
	let err = animal.as_cat().expect_err("dog is not a cat");
	assert!(matches!(
		err,
		UnionError::InvalidCast {
			union: "Animal",
			expected: "Cat",
			got: "Dog"
		}
	));
	assert!(matches!(Cat::try_from(animal), Err(UnionError::InvalidCast { .. })));
}

#[test]
fn match_and_visit_pick_the_held_variant() {
	let animal: Animal = decode(CAT_PRETTY).expect("cat decodes");

	assert!(animal.match_with(|_| false, |_| true));

	let seen = Cell::new(None);
	animal.visit(|_| seen.set(Some(AnimalType::Dog)), |_| seen.set(Some(AnimalType::Cat)));
	assert_eq!(seen.get(), Some(AnimalType::Cat));
}

#[test]
fn tag_agrees_with_every_dispatch_style() {
	for animal in [Animal::new(Dog { likes_to_woof: false }), Animal::new(Cat { likes_to_meow: false })] {
		let matched = animal.match_with(|_| AnimalType::Dog, |_| AnimalType::Cat);
		assert_eq!(animal.animal_type(), matched);
		assert_eq!(animal.value().animal_type(), matched);
		assert_eq!(animal.tag(), matched.as_str());
		assert_eq!(animal.is::<Dog>(), animal.is_dog());
		assert_eq!(animal.is::<Cat>(), animal.is_cat());
	}
}

#[test]
fn from_parts_rejects_mismatched_tag() {
	let err = Animal::from_parts(AnimalType::Dog, AnimalValue::Cat(Cat { likes_to_meow: true })).expect_err("tag mismatch should fail");
	assert!(matches!(
		err,
		UnionError::InvalidVariant {
			union: "Animal",
			tag: "Dog",
			payload: "Cat"
		}
	));

	let animal = Animal::from_parts(AnimalType::Dog, AnimalValue::Dog(Dog { likes_to_woof: true })).expect("matching tag succeeds");
	assert_eq!(animal, Animal::new(Dog { likes_to_woof: true }));
}

#[test]
fn discriminator_lookup_is_case_sensitive() {
	let err = decode::<Animal>(r#"{"animalType":"cat","likesToMeow":true}"#).expect_err("lowercase tag should fail");
	assert!(matches!(err, UnionError::UnknownDiscriminator { ref tag, .. } if tag == "cat"));
	assert_eq!(AnimalType::from_tag("Cat"), Some(AnimalType::Cat));
	assert_eq!(AnimalType::from_tag("CAT"), None);
}

#[test]
fn missing_payload_field_is_malformed() {
	let err = decode::<Animal>(r#"{"animalType":"Dog"}"#).expect_err("missing likesToWoof should fail");
	assert!(matches!(err, UnionError::MalformedPayload { variant: "Dog", .. }));

	let err = decode::<Animal>(r#"{"animalType":"Dog","likesToWoof":"yes"}"#).expect_err("mistyped likesToWoof should fail");
	assert!(matches!(err, UnionError::MalformedPayload { variant: "Dog", .. }));
}

#[test]
fn serde_integration_handles_nested_sequences() {
	let animals = vec![Animal::new(Dog { likes_to_woof: true }), Animal::new(Cat { likes_to_meow: false })];
	let text = serde_json::to_string(&animals).expect("vec encodes");
	assert_eq!(text, r#"[{"animalType":"Dog","likesToWoof":true},{"animalType":"Cat","likesToMeow":false}]"#);

	let back: Vec<Animal> = serde_json::from_str(&text).expect("vec decodes");
	assert_eq!(back, animals);
}
