//! UI fragment tree emitted by the renderers.

use std::collections::BTreeSet;

use serde::Serialize;

/// One attribute of an element. Attribute order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attrs.push(Attr { name, value }),
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// The `class` attribute as a token set; empty when absent.
    pub fn class_tokens(&self) -> BTreeSet<&str> {
        self.get_attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// A node of the emitted fragment tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } => None,
        }
    }

    /// Shorthand for the attribute of an element node.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.get_attr(name))
    }

    /// All elements with the given tag, this node included, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut |e: &Element| e.tag == tag, &mut found);
        found
    }

    /// All elements carrying an attribute with the given value, in document order.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&mut |e: &Element| e.get_attr(name) == Some(value), &mut found);
        found
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { text } => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    fn collect<'a>(&'a self, pred: &mut dyn FnMut(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if pred(element) {
                out.push(element);
            }
            for child in &element.children {
                child.collect(pred, out);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("ul")
            .attr("aria-label", "Technologies used")
            .child(Element::new("li").child(Element::new("button").text("Rust")))
            .child(Element::new("li").child(Element::new("button").text("Go")))
            .into()
    }

    #[test]
    fn test_attr_replaces_existing() {
        let element = Element::new("a").attr("class", "x").attr("class", "y");
        assert_eq!(element.attrs.len(), 1);
        assert_eq!(element.get_attr("class"), Some("y"));
    }

    #[test]
    fn test_find_all_in_document_order() {
        let node = sample();
        let buttons = node.find_all("button");
        assert_eq!(buttons.len(), 2);
        assert_eq!(Node::from(buttons[1].clone()).text_content(), "Go");
    }

    #[test]
    fn test_find_by_attr() {
        let node = sample();
        assert_eq!(node.find_by_attr("aria-label", "Technologies used").len(), 1);
        assert!(node.find_by_attr("aria-label", "nope").is_empty());
    }

    #[test]
    fn test_text_content_concatenates() {
        assert_eq!(sample().text_content(), "RustGo");
    }

    #[test]
    fn test_class_tokens() {
        let element = Element::new("span").attr("class", " a  b a ");
        assert_eq!(element.class_tokens(), BTreeSet::from(["a", "b"]));
        assert!(Element::new("span").class_tokens().is_empty());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let node: Node = Element::new("p").text("hi").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["text"], "hi");
    }
}
