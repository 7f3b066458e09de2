//! Variant registry and palette for badge styling.
//!
//! - [`Variant`] / [`Size`]: tagged selectors for badge appearance
//! - [`Palette`]: fixed color rotation for list items
//! - [`VariantRegistry`]: immutable mapping from selectors to base tokens

mod palette;
mod registry;
mod variant;

pub use palette::Palette;
pub use registry::{VariantRegistry, VariantRegistryBuilder};
pub use variant::{Size, Variant};
