//! Courses: the root of the hierarchy.

use serde::{Deserialize, Serialize};

use super::collection::{OrderedCollection, Result};
use super::errors::CollectionError;
use super::module::Module;
use super::named::Named;
use super::relocation::relocate;

/// A course and its ordered modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    modules: OrderedCollection<Module>,
}

impl Course {
    /// Create a course with no modules
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            modules: OrderedCollection::new(),
        }
    }

    /// Builder form of [`add`](Self::add)
    pub fn with_module(mut self, module: Module) -> Result<Self> {
        self.add(module)?;
        Ok(self)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add(&mut self, module: Module) -> Result<()> {
        self.modules.add(module)
    }

    pub fn remove<N: Named + ?Sized>(&mut self, module: &N) -> Result<()> {
        self.modules.remove(module)
    }

    pub fn move_to<N: Named + ?Sized>(&mut self, module: &N, target: i64) -> Result<()> {
        self.modules.move_to(module, target)
    }

    pub fn position<N: Named + ?Sized>(&self, module: &N) -> Result<usize> {
        self.modules.position(module)
    }

    pub fn includes<N: Named + ?Sized>(&self, module: &N) -> bool {
        self.modules.includes(module)
    }

    pub fn number_of_modules(&self) -> usize {
        self.modules.count()
    }

    pub fn module<N: Named + ?Sized>(&self, module: &N) -> Option<&Module> {
        self.modules.get(module)
    }

    pub fn module_mut<N: Named + ?Sized>(&mut self, module: &N) -> Option<&mut Module> {
        self.modules.get_mut(module)
    }

    pub fn modules(&self) -> &OrderedCollection<Module> {
        &self.modules
    }

    /// Move a lecture from one of this course's modules into another.
    ///
    /// `target` is clamped to `[1, lectures in to_module + 1]`. Missing
    /// modules report [`CollectionError::UnexistingElement`]. If `to_module`
    /// already has a lecture with that name the call fails with
    /// [`CollectionError::ExistingElement`] and `from_module` keeps the
    /// lecture. Naming the same module twice is a plain move within it.
    pub fn move_lecture<L, F, T>(
        &mut self,
        lecture: &L,
        from_module: &F,
        to_module: &T,
        target: i64,
    ) -> Result<()>
    where
        L: Named + ?Sized,
        F: Named + ?Sized,
        T: Named + ?Sized,
    {
        let from = self.modules.require(from_module)?;
        let to = self.modules.require(to_module)?;

        if from == to {
            return self.modules.get_at_mut(from).move_to(lecture, target);
        }

        let (source, destination) = self.modules.pair_at_mut(from, to);
        relocate(lecture, source.lectures_mut(), destination.lectures_mut(), target)
    }

    pub(crate) fn module_or_err<N: Named + ?Sized>(&mut self, module: &N) -> Result<&mut Module> {
        self.modules
            .get_mut(module)
            .ok_or_else(|| CollectionError::unexisting(module.name()))
    }
}

impl Named for Course {
    fn name(&self) -> &str {
        &self.name
    }
}
