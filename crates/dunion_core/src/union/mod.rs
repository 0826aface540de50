mod animal;
mod codec;
mod dispatch;
mod error;
mod member;
mod point;

/// Wrapper-form animal union and its variants.
pub use animal::{Animal, AnimalType, AnimalValue, Cat, Dog};
/// Discriminator-tagged codec entry points.
pub use codec::{TaggedCodec, decode, decode_all, decode_bare, decode_value, encode, encode_all, encode_bare, encode_pretty, encode_value};
/// Partial dispatch builder.
pub use dispatch::Dispatch;
/// Error and result aliases.
pub use error::{Result, UnionError};
/// Union membership traits and generic narrowing helpers.
pub use member::{Member, TaggedUnion, UnionExt};
/// Closed-hierarchy point union, its variants, and capability traits.
pub use point::{FourDimensional, FourDimensionalPoint, Named, Planar, Point, Spatial, ThreeDimensionalPoint, TwoDimensionalPoint, TwoDimensionalPointWithName};
