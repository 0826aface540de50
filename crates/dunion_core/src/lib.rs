//! Closed variant sets (discriminated unions) with a tag-injecting JSON codec.

/// Union types, dispatch helpers, and the discriminator-tagged codec.
pub mod union;
