//! Course plans: read-only documents that describe a course and the edits
//! to run against it.
//!
//! # Document layout
//!
//! ```yaml
//! name: azure-devops
//! description: Continuous Delivery and DevOps with Azure DevOps
//! modules:
//!   - name: Fundamentals
//!     lectures:
//!       - name: Branching
//!         video_url: https://youtube.com/1234
//!         materials:
//!           - kind: pdf
//!             name: Branching
//!             url: https://storage/branching.pdf
//! ```
//!
//! Documents are YAML (`.yaml`, `.yml`) or JSON (`.json`). Nothing here ever
//! writes a document back.

pub mod edits;
pub mod outline;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::domain::{CollectionError, Course, Lecture, Material, Module};

pub use edits::{apply_edits, Edit, EditFailure, EditReport};
pub use outline::{render, render_json, render_text, OutputFormat};

/// Errors raised while loading plans or applying edits
#[derive(Debug, Error)]
pub enum PlanError {
    /// A document described two siblings with the same name
    #[error("{path}: {source}")]
    Build {
        path: String,
        #[source]
        source: CollectionError,
    },

    /// An edit was rejected by the course
    #[error("edit #{index} ({op}) failed: {source}")]
    Edit {
        /// 1-based index in the edit list
        index: usize,
        op: &'static str,
        #[source]
        source: CollectionError,
    },

    #[error("Failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialization format of a plan document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(PlanError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a document in this format
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, PlanError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }
}

/// Document shape of a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePlan {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<ModulePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulePlan {
    pub name: String,
    #[serde(default)]
    pub lectures: Vec<LecturePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LecturePlan {
    pub name: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub materials: Vec<Material>,
}

impl CoursePlan {
    /// Build the course, adding every member in document order.
    ///
    /// A repeated sibling name fails with [`PlanError::Build`], whose `path`
    /// points at the offending entry (e.g. `modules[0].lectures[2]`).
    pub fn build(self) -> Result<Course, PlanError> {
        let mut course = Course::new(self.name, self.description);

        for (m, module_plan) in self.modules.into_iter().enumerate() {
            let mut module = Module::new(module_plan.name);

            for (l, lecture_plan) in module_plan.lectures.into_iter().enumerate() {
                let mut lecture = Lecture::new(lecture_plan.name, lecture_plan.video_url);

                for (i, material) in lecture_plan.materials.into_iter().enumerate() {
                    lecture.add(material).map_err(|source| PlanError::Build {
                        path: format!("modules[{m}].lectures[{l}].materials[{i}]"),
                        source,
                    })?;
                }

                module.add(lecture).map_err(|source| PlanError::Build {
                    path: format!("modules[{m}].lectures[{l}]"),
                    source,
                })?;
            }

            course.add(module).map_err(|source| PlanError::Build {
                path: format!("modules[{m}]"),
                source,
            })?;
        }

        Ok(course)
    }
}

/// Parse a course document from text
pub fn parse_course(text: &str, format: DocumentFormat) -> Result<Course, PlanError> {
    format.parse::<CoursePlan>(text)?.build()
}

/// Parse an edit list from text
pub fn parse_edits(text: &str, format: DocumentFormat) -> Result<Vec<Edit>, PlanError> {
    format.parse(text)
}

async fn read_document(path: &Path) -> Result<(String, DocumentFormat), PlanError> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path).await.map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((text, format))
}

/// Load a course document from disk
pub async fn load_course(path: &Path) -> Result<Course, PlanError> {
    let (text, format) = read_document(path).await?;
    parse_course(&text, format)
}

/// Load an edit list from disk
pub async fn load_edits(path: &Path) -> Result<Vec<Edit>, PlanError> {
    let (text, format) = read_document(path).await?;
    parse_edits(&text, format)
}
