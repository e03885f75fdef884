//! coursekit - ordered course outlines
//!
//! A course is a hierarchy: a Course holds ordered Modules, a Module holds
//! ordered Lectures, a Lecture holds ordered Materials (PDFs, links).
//!
//! # Architecture
//!
//! Every level reuses one container, [`OrderedCollection`]:
//! - Members are identified by name and unique within their parent
//! - Positions are 1-based and dense
//! - Out-of-range target positions are clamped, never rejected
//! - Failed operations leave the collection untouched
//!
//! # Modules
//!
//! - `domain`: Collection, relocation and the course entities
//! - `plan`: Course documents, scripted edits, outline rendering
//! - `config`: Configuration resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Print a course outline
//! coursekit show course.yaml
//!
//! # Dry-run a list of edits against it
//! coursekit apply course.yaml edits.yaml --format json
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod plan;

// Re-export main types at crate root for convenience
pub use domain::{
    relocate, CollectionError, Course, Lecture, Material, MaterialKind, Module, Named,
    OrderedCollection,
};
pub use plan::{apply_edits, Edit, EditReport, OutputFormat, PlanError};
