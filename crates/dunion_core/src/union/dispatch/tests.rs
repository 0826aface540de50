use crate::union::{Animal, Cat, Dog, FourDimensionalPoint, Point, ThreeDimensionalPoint, TwoDimensionalPoint, TwoDimensionalPointWithName, UnionError, UnionExt};

#[test]
fn first_matching_callback_wins() {
	let animal = Animal::new(Cat { likes_to_meow: true });
	let out = animal
		.dispatch()
		.on::<Dog>(|_| "dog")
		.on::<Cat>(|cat| if cat.likes_to_meow { "meow" } else { "quiet" })
		.finish()
		.expect("cat is handled");
	assert_eq!(out, "meow");
}

#[test]
fn fallback_runs_for_unregistered_variant() {
	let point = Point::from(FourDimensionalPoint { x: 1, y: 2, z: 3, w: 4 });
	let out = point.dispatch().on::<TwoDimensionalPoint>(|_| 2).on::<ThreeDimensionalPoint>(|_| 3).otherwise(|_| 0);
	assert_eq!(out, 0);
}

#[test]
fn fallback_is_skipped_once_handled() {
	let point = Point::from(ThreeDimensionalPoint { x: 1, y: 2, z: 3 });
	let dispatch = point.dispatch().on::<ThreeDimensionalPoint>(|p| p.z);
	assert!(dispatch.is_handled());
	assert_eq!(dispatch.otherwise(|_| -1), 3);
}

#[test]
fn missing_callback_without_fallback_is_unhandled() {
	let point = Point::from(FourDimensionalPoint { x: 1, y: 2, z: 3, w: 4 });
	let err = point.dispatch::<()>().on::<TwoDimensionalPoint>(|_| ()).finish().expect_err("4d has no callback");
	assert!(matches!(err, UnionError::UnhandledVariant { union: "Point", tag: "4d" }));
}

#[test]
fn callback_may_return_borrows_of_the_variant() {
	let point = Point::from(TwoDimensionalPointWithName {
		name: "root".to_owned(),
		x: 1,
		y: 2,
	});
	let name: &str = point.dispatch().on::<TwoDimensionalPointWithName>(|p| p.name.as_str()).otherwise(|_| "-");
	assert_eq!(name, "root");
}
