//! # Folio - accessible portfolio fragments
//!
//! Folio renders a resume dataset (skills and side projects) into UI
//! fragment trees of styled, accessible elements, and serializes them to
//! HTML.
//!
//! The interesting part is deciding which style token wins when several
//! sources apply to one element. Sources are layered from lowest to highest
//! precedence:
//!
//! 1. the badge base and variant tokens from the [`VariantRegistry`]
//! 2. the size modifier
//! 3. the palette entry for the item's list position
//! 4. the caller's override
//!
//! [`merge_classes`] resolves them: within one property group (text color,
//! background, font size, spacing, ...) the right-most token wins,
//! disjoint groups accumulate, and exact duplicates collapse.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{HtmlRenderer, Project, Resume, VariantRegistry};
//!
//! let resume = Resume {
//!     skills: vec!["Rust".into(), "SQL".into()],
//!     projects: vec![Project::new("Folio", "Portfolio renderer")
//!         .tech_stack(["Rust"])
//!         .link("https://www.folio.dev/")],
//! };
//!
//! let html = HtmlRenderer::new()
//!     .unwrap()
//!     .render_resume(&resume, VariantRegistry::standard())
//!     .unwrap();
//! assert!(html.contains(r#"aria-label="Skill: Rust""#));
//! assert!(html.contains(r#"aria-label="Folio project (opens in new tab)""#));
//! ```
//!
//! ## Empty and degenerate input
//!
//! Rendering never fails. An empty tag list renders nothing at all, an
//! unknown variant name uses the default variant, a project without a link
//! renders its title as plain text, and an empty label renders a badge with
//! an empty accessible name.

pub mod data;
pub mod error;
pub mod render;
pub mod style;
pub mod theme;

pub use data::{Project, Resume};
pub use error::{DataError, RenderError};
pub use render::{
    normalize_domain, render_project_card, render_project_link, render_projects_section,
    render_resume, render_skills_section, render_tag_list, Badge, Element, HtmlRenderer, Node,
    TagListStyle,
};
pub use style::{merge_classes, merge_token_lists, PropertyGroup, StyleError};
pub use theme::{Palette, Size, Variant, VariantRegistry};
