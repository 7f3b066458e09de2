//! HTML serialization of fragment trees.

use minijinja::value::{Rest, Value};
use minijinja::{context, Environment};
use serde::Serialize;

use super::node::Node;
use super::project_link::normalize_domain;
use super::sections::render_resume;
use crate::data::Resume;
use crate::error::RenderError;
use crate::style::merge_classes;
use crate::theme::VariantRegistry;

// No extension: autoescape stays off and values go through `esc` explicitly,
// so the recursive loop output is not escaped a second time.
const FRAGMENT_TEMPLATE_NAME: &str = "fragment";

const FRAGMENT_TEMPLATE: &str = r#"{% for node in nodes recursive -%}
{% if node.kind == "text" %}{{ node.text | esc }}{% else %}<{{ node.tag }}{% for a in node.attrs %} {{ a.name }}="{{ a.value | esc }}"{% endfor %}>{{ loop(node.children) }}</{{ node.tag }}>{% endif %}
{%- endfor %}"#;

/// Escapes text for use in element content and double-quoted attributes.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Registers the style filters available to page templates.
fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("esc", |value: String| -> Value {
        Value::from_safe_string(escape_html(&value))
    });
    // {{ "px-2 bg-red-100" | merge_classes("bg-blue-100") }}
    env.add_filter(
        "merge_classes",
        |value: String, extra: Rest<String>| -> String {
            merge_classes(std::iter::once(value).chain(extra.0))
        },
    );
    env.add_filter("domain", |value: String| -> String {
        normalize_domain(&value)
    });
}

/// Serializes fragment trees to HTML.
///
/// Text and attribute values are HTML-escaped. Host page templates can be
/// registered alongside and use the `merge_classes` and `domain` filters.
///
/// # Example
///
/// ```rust
/// use folio::render::{Element, HtmlRenderer};
///
/// let renderer = HtmlRenderer::new().unwrap();
/// let node = Element::new("span").attr("class", "x").text("a < b").into();
/// assert_eq!(renderer.render(&node).unwrap(), r#"<span class="x">a &lt; b</span>"#);
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer with the fragment template compiled.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template(FRAGMENT_TEMPLATE_NAME, FRAGMENT_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.render_all(std::slice::from_ref(node))
    }

    /// Serializes sibling nodes in order.
    pub fn render_all(&self, nodes: &[Node]) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(FRAGMENT_TEMPLATE_NAME)?;
        Ok(tmpl.render(context! { nodes => nodes })?)
    }

    /// Renders the skills and projects sections of a dataset as HTML.
    pub fn render_resume(
        &self,
        resume: &Resume,
        registry: &VariantRegistry,
    ) -> Result<String, RenderError> {
        self.render_all(&render_resume(resume, registry))
    }

    /// Registers a host page template.
    ///
    /// Names ending in `.html` are autoescaped. Embed rendered fragments
    /// with `{{ fragment | safe }}`.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered host template with the given data.
    pub fn render_template<T: Serialize>(
        &self,
        name: &str,
        data: &T,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}
