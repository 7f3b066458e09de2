//! Resume dataset: skills and side projects.
//!
//! Datasets deserialize from JSON or YAML. A project's `link` may be a
//! plain URL string or an object with an `href` field; an empty URL counts
//! as no link.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DataError;

/// The whole dataset consumed by the section renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Display order is list order. Duplicates are kept.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// One side project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn tech_stack<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkRepr {
    Url(String),
    Object { href: String },
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let link = Option::<LinkRepr>::deserialize(deserializer)?.map(|repr| match repr {
        LinkRepr::Url(url) => url,
        LinkRepr::Object { href } => href,
    });
    Ok(link.filter(|url| !url.is_empty()))
}

impl Resume {
    pub fn from_json(source: &str) -> Result<Self, DataError> {
        let resume: Resume = serde_json::from_str(source)?;
        resume.validate()?;
        Ok(resume)
    }

    pub fn from_yaml(source: &str) -> Result<Self, DataError> {
        let resume: Resume = serde_yaml::from_str(source)?;
        resume.validate()?;
        Ok(resume)
    }

    /// Loads a dataset, choosing the format by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> Result<Resume, DataError> = match extension.as_str() {
            "json" => Resume::from_json,
            "yaml" | "yml" => Resume::from_yaml,
            _ => return Err(DataError::UnsupportedFormat { extension }),
        };

        let source = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resume = parse(&source)?;
        debug!(
            "loaded resume from {}: {} skills, {} projects",
            path.display(),
            resume.skills.len(),
            resume.projects.len()
        );
        Ok(resume)
    }

    /// Checks constraints serde cannot express.
    ///
    /// Project titles must be non-empty. Empty skill labels are accepted;
    /// they render as badges with an empty accessible name.
    pub fn validate(&self) -> Result<(), DataError> {
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(DataError::Invalid(format!(
                "project #{} has an empty title",
                index + 1
            )));
        }
        Ok(())
    }
}
