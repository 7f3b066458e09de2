//! Project title, linked or plain.

use super::node::{Element, Node};

const ANCHOR_CLASS: &str = "inline-flex items-center gap-1 hover:underline";
const INDICATOR_CLASS: &str = "size-1 rounded-full bg-green-500";
const SIDECAR_CLASS: &str = "hidden font-mono text-xs underline print:visible";

/// Shortens a project URL for the print-only sidecar.
///
/// Steps, in order: drop a leading `https://`, drop a leading `www.`, then
/// remove the first `/` that remains. Only that one slash is removed, so
/// deeper path separators survive:
///
/// ```rust
/// use folio::normalize_domain;
///
/// assert_eq!(normalize_domain("https://www.example.com/"), "example.com");
/// assert_eq!(
///     normalize_domain("https://www.example.com/path/more"),
///     "example.compath/more"
/// );
/// ```
pub fn normalize_domain(url: &str) -> String {
    let rest = url.strip_prefix("https://").unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.replacen('/', "", 1)
}

/// Renders a project title.
///
/// Without a link (or with an empty one) the title is a plain `<span>`.
/// With a link the output is
/// an anchor opening in a new tab, carrying a decorative "active" indicator,
/// followed by a print-only sidecar holding [`normalize_domain`] of the URL.
pub fn render_project_link(title: &str, link: Option<&str>) -> Vec<Node> {
    let Some(href) = link.filter(|href| !href.is_empty()) else {
        return vec![Element::new("span").text(title).into()];
    };

    let indicator = Element::new("span")
        .attr("class", INDICATOR_CLASS)
        .attr("aria-label", "Active project indicator")
        .attr("aria-hidden", "true");

    let anchor = Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("class", ANCHOR_CLASS)
        .attr("aria-label", format!("{title} project (opens in new tab)"))
        .text(title)
        .child(indicator);

    let sidecar = Element::new("div")
        .attr("class", SIDECAR_CLASS)
        .attr("aria-hidden", "true")
        .text(normalize_domain(href));

    vec![anchor.into(), sidecar.into()]
}
