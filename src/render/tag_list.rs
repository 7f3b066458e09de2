//! Ordered badge lists with palette rotation.

use super::badge::{accessible_name, Badge};
use super::node::{Element, Node};
use crate::style::merge_classes;
use crate::theme::VariantRegistry;

/// Presentation of one tag-list call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagListStyle<'a> {
    /// `aria-label` of the list container.
    pub container_label: &'a str,
    /// Prefix of each badge's accessible name.
    pub label_prefix: &'a str,
    pub container_class: String,
    /// Caller override layered over each badge's palette entry.
    pub badge_class: &'a str,
    /// Heading id for `aria-labelledby`, if the list is labelled by one.
    pub labelled_by: Option<&'a str>,
}

impl<'a> TagListStyle<'a> {
    /// Technology tags of a project card.
    pub fn technologies() -> Self {
        Self {
            container_label: "Technologies used",
            label_prefix: "tag: ",
            container_class: "mt-4 flex list-none flex-wrap gap-2 p-0".to_string(),
            badge_class: "bg-gray-100 text-gray-800 rounded-full px-3 py-1 text-xs font-medium \
                shadow hover:bg-gray-200 hover:scale-105 transition-transform",
            labelled_by: None,
        }
    }

    /// The skills list under the skills heading.
    pub fn skills() -> Self {
        Self {
            container_label: "List of skills",
            label_prefix: "Skill: ",
            container_class: "flex list-none flex-wrap gap-1 p-0".to_string(),
            badge_class: "print:text-[10px] transition-transform duration-200 hover:scale-110 \
                hover:shadow-md",
            labelled_by: Some("skills-section"),
        }
    }

    /// Merges extra container tokens over the preset ones.
    pub fn class(mut self, tokens: &str) -> Self {
        self.container_class = merge_classes([self.container_class.as_str(), tokens]);
        self
    }
}

/// Renders labels as an ordered list of badges.
///
/// Returns `None` for an empty list so no empty landmark is emitted. Badge
/// `i` uses palette entry `i mod len`. Each item is keyed by its label, so
/// duplicate labels share a key.
pub fn render_tag_list<S: AsRef<str>>(
    items: &[S],
    style: &TagListStyle<'_>,
    registry: &VariantRegistry,
) -> Option<Node> {
    if items.is_empty() {
        return None;
    }

    let entries = items.iter().enumerate().map(|(index, item)| {
        let label = item.as_ref();
        let badge = Badge::new(label)
            .palette_index(index)
            .class(style.badge_class)
            .aria_label(accessible_name(style.label_prefix, label))
            .render(registry);
        Element::new("li").attr("data-key", label).child(badge)
    });

    let mut list = Element::new("ul")
        .attr("class", style.container_class.as_str())
        .attr("aria-label", style.container_label);
    if let Some(id) = style.labelled_by {
        list = list.attr("aria-labelledby", id);
    }

    Some(list.children(entries).into())
}
