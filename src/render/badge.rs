//! Single labeled badge.

use super::node::{Element, Node};
use crate::style::merge_classes;
use crate::theme::{Size, Variant, VariantRegistry};

/// Accessible-name prefix used when the caller gives none.
pub const DEFAULT_LABEL_PREFIX: &str = "tag: ";

/// Builds the accessible name `prefix + label`.
///
/// An empty label yields an empty name rather than a bare prefix.
pub fn accessible_name(prefix: &str, label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!("{prefix}{label}")
    }
}

/// A labeled badge with layered style sources.
///
/// Tokens are merged lowest precedence first: registry base and variant,
/// size, palette entry, caller override.
///
/// # Example
///
/// ```rust
/// use folio::{Badge, Size, VariantRegistry};
///
/// let node = Badge::new("Rust")
///     .size(Size::Small)
///     .palette_index(1)
///     .render(VariantRegistry::standard());
/// assert_eq!(node.attr("aria-label"), Some("tag: Rust"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Badge<'a> {
    label: &'a str,
    variant: Option<Variant>,
    size: Option<Size>,
    palette_index: Option<usize>,
    class: Option<&'a str>,
    aria_label: Option<String>,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Selects a variant by name; unknown names use the default variant.
    pub fn variant_name(mut self, name: Option<&str>) -> Self {
        self.variant = Some(Variant::from_name(name));
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Selects a size by name; unknown names leave the size unset.
    pub fn size_name(mut self, name: Option<&str>) -> Self {
        self.size = Size::from_name(name);
        self
    }

    /// Layers the palette entry for list position `index`.
    pub fn palette_index(mut self, index: usize) -> Self {
        self.palette_index = Some(index);
        self
    }

    /// Caller tokens; they win over every other source.
    pub fn class(mut self, tokens: &'a str) -> Self {
        self.class = Some(tokens);
        self
    }

    /// Replaces the default `"tag: {label}"` accessible name.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Resolves the final class string against a registry.
    pub fn classes(&self, registry: &VariantRegistry) -> String {
        let palette = self
            .palette_index
            .and_then(|index| registry.palette().entry(index));

        merge_classes(
            registry
                .resolve(self.variant, self.size)
                .into_iter()
                .chain(palette)
                .chain(self.class),
        )
    }

    pub fn render(&self, registry: &VariantRegistry) -> Node {
        let name = self
            .aria_label
            .clone()
            .unwrap_or_else(|| accessible_name(DEFAULT_LABEL_PREFIX, self.label));

        Element::new("button")
            .attr("class", self.classes(registry))
            .attr("aria-label", name)
            .text(self.label)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palette;
    use std::collections::BTreeSet;

    fn registry() -> &'static VariantRegistry {
        VariantRegistry::standard()
    }

    fn tokens(node: &Node) -> BTreeSet<&str> {
        node.as_element().unwrap().class_tokens()
    }

    #[test]
    fn test_default_badge() {
        let node = Badge::new("Rust").render(registry());
        let element = node.as_element().unwrap();
        assert_eq!(element.tag, "button");
        assert_eq!(node.attr("aria-label"), Some("tag: Rust"));
        assert_eq!(node.text_content(), "Rust");
        assert!(tokens(&node).contains("bg-primary/80"));
        assert!(tokens(&node).contains("text-xs"));
    }

    #[test]
    fn test_size_overrides_base_font_size() {
        let node = Badge::new("Rust").size(Size::Large).render(registry());
        let set = tokens(&node);
        assert!(set.contains("text-[18px]"));
        assert!(!set.contains("text-xs"));
    }

    #[test]
    fn test_palette_overrides_variant_colors() {
        let node = Badge::new("Rust").palette_index(0).render(registry());
        let set = tokens(&node);
        assert!(set.contains("bg-blue-100"));
        assert!(set.contains("text-blue-800"));
        assert!(!set.contains("bg-primary/80"));
        assert!(!set.contains("text-primary-foreground"));
        // hover background is a separate conflict key
        assert!(set.contains("hover:bg-primary/60"));
    }

    #[test]
    fn test_caller_override_wins_over_palette() {
        let node = Badge::new("Rust")
            .palette_index(3)
            .class("bg-gray-100 rounded-full")
            .render(registry());
        let set = tokens(&node);
        assert!(set.contains("bg-gray-100"));
        assert!(!set.contains("bg-red-100"));
        assert!(set.contains("text-red-800"));
        assert!(set.contains("rounded-full"));
        assert!(!set.contains("rounded-md"));
    }

    #[test]
    fn test_unknown_variant_name_matches_default() {
        let unknown = Badge::new("x").variant_name(Some("glow")).classes(registry());
        let default = Badge::new("x").classes(registry());
        assert_eq!(unknown, default);
    }

    #[test]
    fn test_outline_variant() {
        let node = Badge::new("x").variant(Variant::Outline).render(registry());
        let set = tokens(&node);
        assert!(set.contains("text-foreground"));
        assert!(set.contains("border"));
        assert!(!set.contains("border-transparent"));
    }

    #[test]
    fn test_custom_aria_label() {
        let node = Badge::new("Go").aria_label("Skill: Go").render(registry());
        assert_eq!(node.attr("aria-label"), Some("Skill: Go"));
    }

    #[test]
    fn test_empty_label_renders_with_empty_name() {
        let node = Badge::new("").render(registry());
        assert_eq!(node.attr("aria-label"), Some(""));
        assert_eq!(node.text_content(), "");
        assert!(!node.attr("class").unwrap().is_empty());
    }

    #[test]
    fn test_empty_palette_is_skipped() {
        let registry = VariantRegistry::builder()
            .base("badge")
            .palette(Palette::new(Vec::<String>::new()))
            .build();
        assert_eq!(Badge::new("x").palette_index(2).classes(&registry), "badge");
    }

    #[test]
    fn test_size_name_lookup() {
        let small = Badge::new("x").size_name(Some("small")).classes(registry());
        assert!(small.split_whitespace().any(|t| t == "text-[10px]"));
        let unknown = Badge::new("x").size_name(Some("tiny")).classes(registry());
        assert_eq!(unknown, Badge::new("x").classes(registry()));
    }
}
