//! Style tokens and their merge rules.
//!
//! - [`PropertyGroup`]: the category a token affects, derived from its syntax
//! - [`merge_classes`]: right-most-wins resolution of ordered token sources
//! - [`StyleError`]: strict variant/size name parsing failures

mod error;
mod group;
mod merge;

pub use error::StyleError;
pub use group::{classify, classify_utility, parse_token, ParsedToken, PropertyGroup};
pub use merge::{merge_classes, merge_token_lists};
