//! Materials attached to a lecture.

use serde::{Deserialize, Serialize};

use super::named::Named;

/// Kind of material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// A PDF document
    Pdf,

    /// A link to an external page
    Link,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::Pdf => write!(f, "pdf"),
            MaterialKind::Link => write!(f, "link"),
        }
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(MaterialKind::Pdf),
            "link" | "url" => Ok(MaterialKind::Link),
            _ => anyhow::bail!("Unknown material kind: {}", s),
        }
    }
}

/// A named piece of supporting material with a source locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    kind: MaterialKind,
    name: String,
    url: String,
}

impl Material {
    pub fn new(kind: MaterialKind, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            url: url.into(),
        }
    }

    /// Create a PDF material
    pub fn pdf(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(MaterialKind::Pdf, name, url)
    }

    /// Create a link material
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(MaterialKind::Link, name, url)
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Named for Material {
    fn name(&self) -> &str {
        &self.name
    }
}
