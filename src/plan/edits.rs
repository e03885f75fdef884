//! Scripted edits applied to a loaded course.
//!
//! An edit list is a sequence of tagged operations:
//!
//! ```yaml
//! - op: add_module
//!   name: Course Overview
//! - op: move_module
//!   module: Course Overview
//!   position: 1
//! - op: relocate_lecture
//!   lecture: Branching
//!   from: Fundamentals
//!   to: git
//!   position: 1
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::PlanError;
use crate::domain::{CollectionError, Course, Lecture, Material, Module};

/// One operation against a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    AddModule {
        name: String,
    },
    RemoveModule {
        module: String,
    },
    MoveModule {
        module: String,
        position: i64,
    },
    AddLecture {
        module: String,
        name: String,
        #[serde(default)]
        video_url: String,
    },
    RemoveLecture {
        module: String,
        lecture: String,
    },
    MoveLecture {
        module: String,
        lecture: String,
        position: i64,
    },
    /// Move a lecture into a different module of the same course
    RelocateLecture {
        lecture: String,
        from: String,
        to: String,
        position: i64,
    },
    AddMaterial {
        module: String,
        lecture: String,
        material: Material,
    },
    RemoveMaterial {
        module: String,
        lecture: String,
        material: String,
    },
    MoveMaterial {
        module: String,
        lecture: String,
        material: String,
        position: i64,
    },
    /// Move a material into a different lecture of the same module
    RelocateMaterial {
        module: String,
        material: String,
        from: String,
        to: String,
        position: i64,
    },
}

impl Edit {
    /// Tag used in documents and reports
    pub fn op(&self) -> &'static str {
        match self {
            Edit::AddModule { .. } => "add_module",
            Edit::RemoveModule { .. } => "remove_module",
            Edit::MoveModule { .. } => "move_module",
            Edit::AddLecture { .. } => "add_lecture",
            Edit::RemoveLecture { .. } => "remove_lecture",
            Edit::MoveLecture { .. } => "move_lecture",
            Edit::RelocateLecture { .. } => "relocate_lecture",
            Edit::AddMaterial { .. } => "add_material",
            Edit::RemoveMaterial { .. } => "remove_material",
            Edit::MoveMaterial { .. } => "move_material",
            Edit::RelocateMaterial { .. } => "relocate_material",
        }
    }

    /// Apply this edit. On error the course is unchanged.
    pub fn apply(&self, course: &mut Course) -> Result<(), CollectionError> {
        match self {
            Edit::AddModule { name } => course.add(Module::new(name.as_str())),
            Edit::RemoveModule { module } => course.remove(module),
            Edit::MoveModule { module, position } => course.move_to(module, *position),
            Edit::AddLecture {
                module,
                name,
                video_url,
            } => course
                .module_or_err(module)?
                .add(Lecture::new(name.as_str(), video_url.as_str())),
            Edit::RemoveLecture { module, lecture } => {
                course.module_or_err(module)?.remove(lecture)
            }
            Edit::MoveLecture {
                module,
                lecture,
                position,
            } => course.module_or_err(module)?.move_to(lecture, *position),
            Edit::RelocateLecture {
                lecture,
                from,
                to,
                position,
            } => course.move_lecture(lecture, from, to, *position),
            Edit::AddMaterial {
                module,
                lecture,
                material,
            } => course
                .module_or_err(module)?
                .lecture_or_err(lecture)?
                .add(material.clone()),
            Edit::RemoveMaterial {
                module,
                lecture,
                material,
            } => course
                .module_or_err(module)?
                .lecture_or_err(lecture)?
                .remove(material),
            Edit::MoveMaterial {
                module,
                lecture,
                material,
                position,
            } => course
                .module_or_err(module)?
                .lecture_or_err(lecture)?
                .move_to(material, *position),
            Edit::RelocateMaterial {
                module,
                material,
                from,
                to,
                position,
            } => course
                .module_or_err(module)?
                .move_material(material, from, to, *position),
        }
    }
}

/// An edit that was rejected while running with `keep_going`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFailure {
    /// 1-based index in the edit list
    pub index: usize,
    pub op: &'static str,
    pub error: CollectionError,
}

/// Outcome of [`apply_edits`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    pub applied: usize,
    pub failures: Vec<EditFailure>,
}

impl EditReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply `edits` in order.
///
/// Without `keep_going` the first rejected edit stops the run and is
/// returned as [`PlanError::Edit`]; edits before it stay applied. With
/// `keep_going` rejected edits are logged and collected in the report.
pub fn apply_edits(
    course: &mut Course,
    edits: &[Edit],
    keep_going: bool,
) -> Result<EditReport, PlanError> {
    let mut report = EditReport::default();

    for (i, edit) in edits.iter().enumerate() {
        let index = i + 1;
        match edit.apply(course) {
            Ok(()) => {
                debug!(index, op = edit.op(), "Edit applied");
                report.applied += 1;
            }
            Err(error) if keep_going => {
                warn!(index, op = edit.op(), element = error.name(), "Edit rejected: {}", error);
                report.failures.push(EditFailure {
                    index,
                    op: edit.op(),
                    error,
                });
            }
            Err(source) => {
                return Err(PlanError::Edit {
                    index,
                    op: edit.op(),
                    source,
                });
            }
        }
    }

    Ok(report)
}
