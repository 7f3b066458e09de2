//! Immutable registry of badge variant, size and palette tokens.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::palette::Palette;
use super::variant::{Size, Variant};

const BADGE_BASE: &str = "inline-flex items-center rounded-md border px-2 py-0.5 text-xs \
    font-semibold font-mono transition-colors focus:outline-none focus:ring-2 \
    focus:ring-ring focus:ring-offset-2 text-nowrap";

static STANDARD: Lazy<VariantRegistry> = Lazy::new(|| {
    VariantRegistry::builder()
        .base(BADGE_BASE)
        .variant(
            Variant::Default,
            "border-transparent bg-primary/80 text-primary-foreground hover:bg-primary/60",
        )
        .variant(
            Variant::Secondary,
            "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/60",
        )
        .variant(
            Variant::Destructive,
            "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80",
        )
        .variant(Variant::Outline, "text-foreground")
        .size(Size::Small, "text-[10px]")
        .size(Size::Medium, "text-[14px]")
        .size(Size::Large, "text-[18px]")
        .palette(Palette::standard())
        .build()
});

/// Maps variant and size selectors to their base style tokens.
///
/// A registry is built once and then only read; renderers receive it by
/// reference rather than looking it up.
///
/// # Example
///
/// ```rust
/// use folio::{Size, Variant, VariantRegistry};
///
/// let registry = VariantRegistry::standard();
/// let tokens = registry.resolve(Some(Variant::Outline), Some(Size::Large));
/// assert_eq!(tokens.last(), Some(&"text-[18px]"));
/// ```
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    base: Vec<String>,
    variants: HashMap<Variant, Vec<String>>,
    sizes: HashMap<Size, Vec<String>>,
    palette: Palette,
}

impl VariantRegistry {
    /// The process-wide registry holding the portfolio's badge styles.
    pub fn standard() -> &'static VariantRegistry {
        &STANDARD
    }

    pub fn builder() -> VariantRegistryBuilder {
        VariantRegistryBuilder::default()
    }

    /// Resolves tokens for a variant/size pair.
    ///
    /// Returns the shared base tokens, then the variant's tokens, then the
    /// size tokens. `None` selects the default variant and no size. A variant
    /// the registry was built without resolves like [`Variant::Default`].
    pub fn resolve(&self, variant: Option<Variant>, size: Option<Size>) -> Vec<&str> {
        let variant = variant.unwrap_or_default();
        let variant_tokens = self
            .variants
            .get(&variant)
            .or_else(|| self.variants.get(&Variant::Default))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let size_tokens = size
            .and_then(|size| self.sizes.get(&size))
            .map(Vec::as_slice)
            .unwrap_or_default();

        self.base
            .iter()
            .chain(variant_tokens)
            .chain(size_tokens)
            .map(String::as_str)
            .collect()
    }

    /// Like [`resolve`](Self::resolve), taking loosely-typed names.
    ///
    /// Unknown variant names fall back to the default variant; unknown size
    /// names add no size tokens.
    pub fn resolve_named(&self, variant: Option<&str>, size: Option<&str>) -> Vec<&str> {
        self.resolve(Some(Variant::from_name(variant)), Size::from_name(size))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Builder for a custom [`VariantRegistry`].
#[derive(Debug, Default)]
pub struct VariantRegistryBuilder {
    base: Vec<String>,
    variants: HashMap<Variant, Vec<String>>,
    sizes: HashMap<Size, Vec<String>>,
    palette: Option<Palette>,
}

impl VariantRegistryBuilder {
    /// Sets the tokens shared by every variant.
    pub fn base(mut self, tokens: &str) -> Self {
        self.base = split_tokens(tokens);
        self
    }

    pub fn variant(mut self, variant: Variant, tokens: &str) -> Self {
        self.variants.insert(variant, split_tokens(tokens));
        self
    }

    pub fn size(mut self, size: Size, tokens: &str) -> Self {
        self.sizes.insert(size, split_tokens(tokens));
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Freezes the registry. Without an explicit palette, the standard one is used.
    ///
    /// Badges resolve to a non-empty class string only if the registry has
    /// base tokens or default-variant tokens; custom registries must supply
    /// one of them.
    pub fn build(self) -> VariantRegistry {
        VariantRegistry {
            base: self.base,
            variants: self.variants,
            sizes: self.sizes,
            palette: self.palette.unwrap_or_default(),
        }
    }
}

fn split_tokens(tokens: &str) -> Vec<String> {
    tokens.split_whitespace().map(str::to_string).collect()
}
