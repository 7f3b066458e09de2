//! Dataset-specific views composed from badges, tag lists and project links.

use super::node::{Element, Node};
use super::project_link::render_project_link;
use super::tag_list::{render_tag_list, TagListStyle};
use crate::data::{Project, Resume};
use crate::style::merge_classes;
use crate::theme::VariantRegistry;

/// Heading id the projects feed is labelled by.
pub const PROJECTS_HEADING_ID: &str = "side-projects";
/// Heading id the skills list is labelled by.
pub const SKILLS_HEADING_ID: &str = "skills-section";

const SECTION_CLASS: &str = "flex min-h-0 flex-col gap-y-3";
const CARD_BASE_CLASS: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
const CARD_CLASS: &str = "flex h-full flex-col overflow-hidden rounded-lg border bg-white \
    shadow-md hover:shadow-lg transition-shadow duration-300";
const CARD_HEADER_CLASS: &str = "flex flex-col space-y-1.5";
const CARD_TITLE_CLASS: &str = "text-lg font-bold text-gray-800 hover:text-blue-600 transition-colors";
const CARD_DESCRIPTION_CLASS: &str = "mt-2 text-sm text-gray-600";
const CARD_CONTENT_CLASS: &str = "mt-auto";
const FEED_CLASS: &str = "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3";

fn section(class: &str, extra: Option<&str>) -> Element {
    Element::new("section").attr(
        "class",
        merge_classes([SECTION_CLASS, class].into_iter().chain(extra)),
    )
}

/// Renders one project as an article card.
///
/// The card holds the title (linked or plain), the description and, when
/// the project lists any technologies, their tag list.
pub fn render_project_card(project: &Project, registry: &VariantRegistry) -> Node {
    let title = Element::new("h3")
        .attr("class", CARD_TITLE_CLASS)
        .children(render_project_link(&project.title, project.link.as_deref()));

    let description = Element::new("p")
        .attr("class", CARD_DESCRIPTION_CLASS)
        .attr("aria-label", "Project description")
        .text(project.description.as_str());

    let header = Element::new("div")
        .attr("class", CARD_HEADER_CLASS)
        .child(title)
        .child(description);

    let tags = render_tag_list(&project.tech_stack, &TagListStyle::technologies(), registry);

    let mut card = Element::new("div")
        .attr("class", merge_classes([CARD_BASE_CLASS, CARD_CLASS]))
        .attr("role", "article")
        .child(header);
    if let Some(tags) = tags {
        card = card.child(
            Element::new("div")
                .attr("class", CARD_CONTENT_CLASS)
                .child(tags),
        );
    }

    Element::new("article")
        .attr("class", "h-full")
        .attr("data-key", project.title.as_str())
        .child(card)
        .into()
}

/// Renders the side-projects section: heading plus a feed of cards.
///
/// The feed is omitted when there are no projects.
pub fn render_projects_section(
    projects: &[Project],
    registry: &VariantRegistry,
    class: Option<&str>,
) -> Node {
    let heading = Element::new("h2")
        .attr("class", "mb-8 text-center text-3xl font-extrabold text-gray-900")
        .attr("id", PROJECTS_HEADING_ID)
        .text("Side Projects");

    let mut node = section("py-12 bg-gray-50", class).child(heading);
    if !projects.is_empty() {
        let feed = Element::new("div")
            .attr("class", FEED_CLASS)
            .attr("role", "feed")
            .attr("aria-labelledby", PROJECTS_HEADING_ID)
            .children(projects.iter().map(|p| render_project_card(p, registry)));
        node = node.child(feed);
    }
    node.into()
}

/// Renders the skills section: heading plus the skills tag list.
pub fn render_skills_section<S: AsRef<str>>(
    skills: &[S],
    registry: &VariantRegistry,
    class: Option<&str>,
) -> Node {
    let heading = Element::new("h2")
        .attr("class", "text-xl font-bold")
        .attr("id", SKILLS_HEADING_ID)
        .text("Skills");

    let mut node = section("", class).child(heading);
    if let Some(list) = render_tag_list(skills, &TagListStyle::skills(), registry) {
        node = node.child(list);
    }
    node.into()
}

/// Renders the whole dataset: the skills section, then the projects section.
pub fn render_resume(resume: &Resume, registry: &VariantRegistry) -> Vec<Node> {
    vec![
        render_skills_section(&resume.skills, registry, None),
        render_projects_section(&resume.projects, registry, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static VariantRegistry {
        VariantRegistry::standard()
    }

    #[test]
    fn test_card_with_link_and_tags() {
        let project = Project::new("Folio", "Portfolio renderer")
            .tech_stack(["Rust", "HTML"])
            .link("https://www.folio.dev/");
        let card = render_project_card(&project, registry());

        assert_eq!(card.as_element().unwrap().tag, "article");
        assert_eq!(card.find_by_attr("role", "article").len(), 1);
        assert_eq!(card.find_all("a").len(), 1);
        assert_eq!(card.find_all("button").len(), 2);
        assert_eq!(
            card.find_by_attr("aria-label", "Project description").len(),
            1
        );
        assert!(card.text_content().contains("Portfolio renderer"));
    }

    #[test]
    fn test_card_class_merges_over_base() {
        let card = render_project_card(&Project::new("A", "a"), registry());
        let inner = card.find_by_attr("role", "article")[0];
        let tokens = inner.class_tokens();
        assert!(tokens.contains("bg-white"));
        assert!(!tokens.contains("bg-card"));
        assert!(tokens.contains("shadow-md"));
        assert!(!tokens.contains("shadow-sm"));
    }

    #[test]
    fn test_card_without_tags_has_no_list() {
        let card = render_project_card(&Project::new("A", "a"), registry());
        assert!(card.find_all("ul").is_empty());
        assert!(card.find_all("a").is_empty());
        assert_eq!(card.find_all("span").len(), 1);
    }

    #[test]
    fn test_card_with_empty_link_has_no_anchor() {
        let card = render_project_card(&Project::new("A", "a").link(""), registry());
        assert!(card.find_all("a").is_empty());
        assert!(card
            .find_by_attr("aria-label", "Active project indicator")
            .is_empty());
    }

    #[test]
    fn test_projects_section_preserves_order() {
        let projects = vec![
            Project::new("First", "1"),
            Project::new("Second", "2"),
            Project::new("Third", "3"),
        ];
        let node = render_projects_section(&projects, registry(), None);
        let feed = node.find_by_attr("role", "feed");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].get_attr("aria-labelledby"), Some("side-projects"));

        let keys: Vec<_> = node
            .find_all("article")
            .iter()
            .filter_map(|a| a.get_attr("data-key"))
            .collect();
        assert_eq!(keys, vec!["First", "Second", "Third"]);

        let heading = node.find_all("h2");
        assert_eq!(heading[0].get_attr("id"), Some("side-projects"));
    }

    #[test]
    fn test_projects_section_without_projects() {
        let node = render_projects_section(&[], registry(), None);
        assert!(node.find_by_attr("role", "feed").is_empty());
        assert_eq!(node.text_content(), "Side Projects");
    }

    #[test]
    fn test_skills_section() {
        let node = render_skills_section(&["Rust", "Go"], registry(), Some("print:gap-y-1"));
        assert_eq!(node.find_all("h2")[0].get_attr("id"), Some("skills-section"));
        let list = node.find_all("ul");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].get_attr("aria-labelledby"), Some("skills-section"));
        assert!(node
            .as_element()
            .unwrap()
            .class_tokens()
            .contains("print:gap-y-1"));
    }

    #[test]
    fn test_skills_section_empty_has_heading_only() {
        let skills: Vec<String> = Vec::new();
        let node = render_skills_section(&skills, registry(), None);
        assert!(node.find_all("ul").is_empty());
        assert_eq!(node.text_content(), "Skills");
    }

    #[test]
    fn test_section_caller_class_wins() {
        let node = render_projects_section(&[], registry(), Some("py-4"));
        let tokens = node.as_element().unwrap().class_tokens();
        assert!(tokens.contains("py-4"));
        assert!(!tokens.contains("py-12"));
        assert!(tokens.contains("bg-gray-50"));
    }

    #[test]
    fn test_render_resume_order() {
        let resume = Resume {
            skills: vec!["Rust".into()],
            projects: vec![Project::new("Folio", "site")],
        };
        let nodes = render_resume(&resume, registry());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].find_all("h2")[0].get_attr("id"), Some("skills-section"));
        assert_eq!(nodes[1].find_all("h2")[0].get_attr("id"), Some("side-projects"));
    }
}
