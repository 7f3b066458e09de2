//! Badge variant and size selectors.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::style::StyleError;

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Default,
        Variant::Secondary,
        Variant::Destructive,
        Variant::Outline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Secondary => "secondary",
            Variant::Destructive => "destructive",
            Variant::Outline => "outline",
        }
    }

    /// Looks up a variant by name, falling back to [`Variant::Default`].
    ///
    /// A missing or unrecognized name is not an error.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None => Variant::default(),
            Some(name) => name.parse().unwrap_or_else(|_| {
                debug!("unknown badge variant '{}', using default", name);
                Variant::default()
            }),
        }
    }
}

impl FromStr for Variant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| StyleError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additive size modifier. An unset size is `Option::<Size>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Looks up a size by name; unknown names resolve to no size.
    pub fn from_name(name: Option<&str>) -> Option<Self> {
        let name = name?;
        match name.parse() {
            Ok(size) => Some(size),
            Err(_) => {
                debug!("unknown badge size '{}', ignoring", name);
                None
            }
        }
    }
}

impl FromStr for Size {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| StyleError::UnknownSize {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
