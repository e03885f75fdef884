//! Modules: ordered lectures within a course.

use serde::{Deserialize, Serialize};

use super::collection::{OrderedCollection, Result};
use super::errors::CollectionError;
use super::lecture::Lecture;
use super::named::Named;
use super::relocation::relocate;

/// A module inside a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    name: String,
    #[serde(default)]
    lectures: OrderedCollection<Lecture>,
}

impl Module {
    /// Create a module with no lectures
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lectures: OrderedCollection::new(),
        }
    }

    /// Builder form of [`add`](Self::add)
    pub fn with_lecture(mut self, lecture: Lecture) -> Result<Self> {
        self.add(lecture)?;
        Ok(self)
    }

    pub fn add(&mut self, lecture: Lecture) -> Result<()> {
        self.lectures.add(lecture)
    }

    pub fn remove<N: Named + ?Sized>(&mut self, lecture: &N) -> Result<()> {
        self.lectures.remove(lecture)
    }

    pub fn move_to<N: Named + ?Sized>(&mut self, lecture: &N, target: i64) -> Result<()> {
        self.lectures.move_to(lecture, target)
    }

    pub fn position<N: Named + ?Sized>(&self, lecture: &N) -> Result<usize> {
        self.lectures.position(lecture)
    }

    pub fn includes<N: Named + ?Sized>(&self, lecture: &N) -> bool {
        self.lectures.includes(lecture)
    }

    pub fn number_of_lectures(&self) -> usize {
        self.lectures.count()
    }

    pub fn lecture<N: Named + ?Sized>(&self, lecture: &N) -> Option<&Lecture> {
        self.lectures.get(lecture)
    }

    pub fn lecture_mut<N: Named + ?Sized>(&mut self, lecture: &N) -> Option<&mut Lecture> {
        self.lectures.get_mut(lecture)
    }

    pub fn lectures(&self) -> &OrderedCollection<Lecture> {
        &self.lectures
    }

    /// Move a material from one of this module's lectures to another.
    ///
    /// Naming the same lecture twice is a plain move within that lecture.
    pub fn move_material<M, F, T>(
        &mut self,
        material: &M,
        from_lecture: &F,
        to_lecture: &T,
        target: i64,
    ) -> Result<()>
    where
        M: Named + ?Sized,
        F: Named + ?Sized,
        T: Named + ?Sized,
    {
        let from = self.lectures.require(from_lecture)?;
        let to = self.lectures.require(to_lecture)?;

        if from == to {
            return self.lectures.get_at_mut(from).move_to(material, target);
        }

        let (source, destination) = self.lectures.pair_at_mut(from, to);
        relocate(material, source.materials_mut(), destination.materials_mut(), target)
    }

    pub(crate) fn lectures_mut(&mut self) -> &mut OrderedCollection<Lecture> {
        &mut self.lectures
    }

    pub(crate) fn lecture_or_err<N: Named + ?Sized>(
        &mut self,
        lecture: &N,
    ) -> Result<&mut Lecture> {
        self.lectures
            .get_mut(lecture)
            .ok_or_else(|| CollectionError::unexisting(lecture.name()))
    }
}

impl Named for Module {
    fn name(&self) -> &str {
        &self.name
    }
}
