//! Outline rendering of a course.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::{Course, Named};

/// How an outline is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Indented tree with positions
    #[default]
    Text,

    /// Pretty-printed JSON snapshot
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "tree" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Render `course` in the given format
pub fn render(course: &Course, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(course)),
        OutputFormat::Json => render_json(course),
    }
}

/// Indented tree, one line per member, prefixed with its position
pub fn render_text(course: &Course) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    if course.description().is_empty() {
        let _ = writeln!(out, "{}", course.name());
    } else {
        let _ = writeln!(out, "{}: {}", course.name(), course.description());
    }

    for (m, module) in course.modules().positioned() {
        let _ = writeln!(out, "  {}. {}", m, module.name());

        for (l, lecture) in module.lectures().positioned() {
            let _ = write!(out, "     {}. {}", l, lecture.name());
            if !lecture.video_url().is_empty() {
                let _ = write!(out, " <{}>", lecture.video_url());
            }
            out.push('\n');

            for (i, material) in lecture.materials().positioned() {
                let _ = writeln!(
                    out,
                    "        {}. [{}] {} <{}>",
                    i,
                    material.kind(),
                    material.name(),
                    material.url()
                );
            }
        }
    }

    out
}

/// Pretty JSON snapshot of the whole course
pub fn render_json(course: &Course) -> serde_json::Result<String> {
    serde_json::to_string_pretty(course)
}
