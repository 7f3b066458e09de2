//! Renderers producing UI fragment trees.
//!
//! Every renderer is a pure function of its inputs and a borrowed
//! [`VariantRegistry`](crate::VariantRegistry):
//!
//! - [`Badge`]: one labeled, styled element
//! - [`render_tag_list`]: badges with palette rotation, nothing for an empty list
//! - [`render_project_link`]: plain title or linked title with indicator and sidecar
//! - [`render_project_card`], [`render_projects_section`], [`render_skills_section`]:
//!   the dataset views
//! - [`HtmlRenderer`]: serializes trees to HTML

mod badge;
mod html;
mod node;
mod project_link;
mod sections;
mod tag_list;

pub use badge::{accessible_name, Badge, DEFAULT_LABEL_PREFIX};
pub use html::HtmlRenderer;
pub use node::{Attr, Element, Node};
pub use project_link::{normalize_domain, render_project_link};
pub use sections::{
    render_project_card, render_projects_section, render_resume, render_skills_section,
    PROJECTS_HEADING_ID, SKILLS_HEADING_ID,
};
pub use tag_list::{render_tag_list, TagListStyle};
