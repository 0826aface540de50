use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::union::codec::{parse_payload, tagged_serde, unknown_discriminator};
use crate::union::member::sealed::Sealed;
use crate::union::{Member, Result, TaggedCodec, TaggedUnion};

/// Points that carry `x` and `y`.
pub trait Planar {
	/// X coordinate.
	fn x(&self) -> i32;
	/// Y coordinate.
	fn y(&self) -> i32;
}

/// Points that also carry `z`.
pub trait Spatial: Planar {
	/// Z coordinate.
	fn z(&self) -> i32;
}

/// Points that also carry `w`.
pub trait FourDimensional: Spatial {
	/// W coordinate.
	fn w(&self) -> i32;
}

/// Values that carry a display name.
pub trait Named {
	/// Name field.
	fn name(&self) -> &str;
}

/// Point with `x`, `y`. Tag `"2d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwoDimensionalPoint {
	/// X coordinate.
	pub x: i32,
	/// Y coordinate.
	pub y: i32,
}

/// Point with `x`, `y`, `z`. Tag `"3d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreeDimensionalPoint {
	/// X coordinate.
	pub x: i32,
	/// Y coordinate.
	pub y: i32,
	/// Z coordinate.
	pub z: i32,
}

/// Point with `x`, `y`, `z`, `w`. Tag `"4d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourDimensionalPoint {
	/// X coordinate.
	pub x: i32,
	/// Y coordinate.
	pub y: i32,
	/// Z coordinate.
	pub z: i32,
	/// W coordinate.
	pub w: i32,
}

/// Named point with `name`, `x`, `y`. Tag `"2dNamed"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TwoDimensionalPointWithName {
	/// Display name.
	pub name: String,
	/// X coordinate.
	pub x: i32,
	/// Y coordinate.
	pub y: i32,
}

macro_rules! impl_planar {
	($($ty:ty),+) => {
		$(impl Planar for $ty {
			fn x(&self) -> i32 {
				self.x
			}

			fn y(&self) -> i32 {
				self.y
			}
		})+
	};
}

impl_planar!(TwoDimensionalPoint, ThreeDimensionalPoint, FourDimensionalPoint, TwoDimensionalPointWithName);

impl Spatial for ThreeDimensionalPoint {
	fn z(&self) -> i32 {
		self.z
	}
}

impl Spatial for FourDimensionalPoint {
	fn z(&self) -> i32 {
		self.z
	}
}

impl FourDimensional for FourDimensionalPoint {
	fn w(&self) -> i32 {
		self.w
	}
}

impl Named for TwoDimensionalPointWithName {
	fn name(&self) -> &str {
		&self.name
	}
}

/// Closed-hierarchy point union.
///
/// No tag is stored; [`TaggedUnion::tag`] derives it from the held variant and the codec
/// writes it as the `"type"` field ahead of the variant's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
	/// Tag `"2d"`.
	TwoDimensional(TwoDimensionalPoint),
	/// Tag `"2dNamed"`.
	TwoDimensionalWithName(TwoDimensionalPointWithName),
	/// Tag `"3d"`.
	ThreeDimensional(ThreeDimensionalPoint),
	/// Tag `"4d"`.
	FourDimensional(FourDimensionalPoint),
}

impl Point {
	/// Run the callback for the held variant and return its result.
	///
	/// `_on_fallback` covers variants outside the four listed; the enum is closed, so it never runs.
	pub fn match_with<T>(
		&self,
		on_two_dimensional: impl FnOnce(&TwoDimensionalPoint) -> T,
		on_two_dimensional_with_name: impl FnOnce(&TwoDimensionalPointWithName) -> T,
		on_three_dimensional: impl FnOnce(&ThreeDimensionalPoint) -> T,
		on_four_dimensional: impl FnOnce(&FourDimensionalPoint) -> T,
		_on_fallback: impl FnOnce() -> T,
	) -> T {
		match self {
			Self::TwoDimensional(point) => on_two_dimensional(point),
			Self::TwoDimensionalWithName(point) => on_two_dimensional_with_name(point),
			Self::ThreeDimensional(point) => on_three_dimensional(point),
			Self::FourDimensional(point) => on_four_dimensional(point),
		}
	}

	/// Run the side-effecting callback for the held variant.
	pub fn visit(
		&self,
		on_two_dimensional: impl FnOnce(&TwoDimensionalPoint),
		on_two_dimensional_with_name: impl FnOnce(&TwoDimensionalPointWithName),
		on_three_dimensional: impl FnOnce(&ThreeDimensionalPoint),
		on_four_dimensional: impl FnOnce(&FourDimensionalPoint),
		on_fallback: impl FnOnce(),
	) {
		self.match_with(on_two_dimensional, on_two_dimensional_with_name, on_three_dimensional, on_four_dimensional, on_fallback)
	}

	/// Every point has `x` and `y`.
	pub fn as_planar(&self) -> &dyn Planar {
		match self {
			Self::TwoDimensional(point) => point,
			Self::TwoDimensionalWithName(point) => point,
			Self::ThreeDimensional(point) => point,
			Self::FourDimensional(point) => point,
		}
	}

	/// `x`, `y`, `z` view for 3D and 4D points.
	pub fn as_spatial(&self) -> Option<&dyn Spatial> {
		match self {
			Self::ThreeDimensional(point) => Some(point),
			Self::FourDimensional(point) => Some(point),
			Self::TwoDimensional(_) | Self::TwoDimensionalWithName(_) => None,
		}
	}

	/// Four-coordinate view for 4D points.
	pub fn as_four_dimensional(&self) -> Option<&dyn FourDimensional> {
		match self {
			Self::FourDimensional(point) => Some(point),
			_ => None,
		}
	}

	/// Name view for named points.
	pub fn as_named(&self) -> Option<&dyn Named> {
		match self {
			Self::TwoDimensionalWithName(point) => Some(point),
			_ => None,
		}
	}
}

impl TaggedUnion for Point {
	const NAME: &'static str = "Point";
	const TAG_FIELD: &'static str = "type";
	const TAGS: &'static [&'static str] = &["2d", "3d", "4d", "2dNamed"];

	fn tag(&self) -> &'static str {
		match self {
			Self::TwoDimensional(_) => <TwoDimensionalPoint as Member<Self>>::TAG,
			Self::TwoDimensionalWithName(_) => <TwoDimensionalPointWithName as Member<Self>>::TAG,
			Self::ThreeDimensional(_) => <ThreeDimensionalPoint as Member<Self>>::TAG,
			Self::FourDimensional(_) => <FourDimensionalPoint as Member<Self>>::TAG,
		}
	}
}

impl TaggedCodec for Point {
	fn encode_payload(&self) -> serde_json::Result<Value> {
		match self {
			Self::TwoDimensional(point) => serde_json::to_value(point),
			Self::TwoDimensionalWithName(point) => serde_json::to_value(point),
			Self::ThreeDimensional(point) => serde_json::to_value(point),
			Self::FourDimensional(point) => serde_json::to_value(point),
		}
	}

	fn decode_payload(tag: &str, payload: Value) -> Result<Self> {
		match tag {
			"2d" => parse_payload::<TwoDimensionalPoint>("TwoDimensionalPoint", payload).map(Self::from),
			"3d" => parse_payload::<ThreeDimensionalPoint>("ThreeDimensionalPoint", payload).map(Self::from),
			"4d" => parse_payload::<FourDimensionalPoint>("FourDimensionalPoint", payload).map(Self::from),
			"2dNamed" => parse_payload::<TwoDimensionalPointWithName>("TwoDimensionalPointWithName", payload).map(Self::from),
			_ => Err(unknown_discriminator::<Self>(tag)),
		}
	}
}

tagged_serde!(Point);

macro_rules! point_member {
	($ty:ident, $variant:ident, $tag:literal) => {
		impl Sealed for $ty {}

		impl From<$ty> for Point {
			fn from(point: $ty) -> Self {
				Self::$variant(point)
			}
		}

		impl TryFrom<Point> for $ty {
			type Error = crate::union::UnionError;

			fn try_from(point: Point) -> Result<Self> {
				crate::union::UnionExt::into_variant(point)
			}
		}

		impl Member<Point> for $ty {
			const TAG: &'static str = $tag;

			fn peek(union: &Point) -> Option<&Self> {
				match union {
					Point::$variant(point) => Some(point),
					_ => None,
				}
			}

			fn take(union: Point) -> std::result::Result<Self, Point> {
				match union {
					Point::$variant(point) => Ok(point),
					other => Err(other),
				}
			}
		}
	};
}

point_member!(TwoDimensionalPoint, TwoDimensional, "2d");
point_member!(ThreeDimensionalPoint, ThreeDimensional, "3d");
point_member!(FourDimensionalPoint, FourDimensional, "4d");
point_member!(TwoDimensionalPointWithName, TwoDimensionalWithName, "2dNamed");
