//! Lectures: a video plus its ordered materials.

use serde::{Deserialize, Serialize};

use super::collection::{OrderedCollection, Result};
use super::material::Material;
use super::named::Named;

/// A lecture inside a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    name: String,
    video_url: String,
    #[serde(default)]
    materials: OrderedCollection<Material>,
}

impl Lecture {
    /// Create a lecture with no materials
    pub fn new(name: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_url: video_url.into(),
            materials: OrderedCollection::new(),
        }
    }

    /// Builder form of [`add`](Self::add)
    pub fn with_material(mut self, material: Material) -> Result<Self> {
        self.add(material)?;
        Ok(self)
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn add(&mut self, material: Material) -> Result<()> {
        self.materials.add(material)
    }

    pub fn remove<N: Named + ?Sized>(&mut self, material: &N) -> Result<()> {
        self.materials.remove(material)
    }

    pub fn move_to<N: Named + ?Sized>(&mut self, material: &N, target: i64) -> Result<()> {
        self.materials.move_to(material, target)
    }

    pub fn position<N: Named + ?Sized>(&self, material: &N) -> Result<usize> {
        self.materials.position(material)
    }

    pub fn includes<N: Named + ?Sized>(&self, material: &N) -> bool {
        self.materials.includes(material)
    }

    pub fn number_of_materials(&self) -> usize {
        self.materials.count()
    }

    pub fn material<N: Named + ?Sized>(&self, material: &N) -> Option<&Material> {
        self.materials.get(material)
    }

    pub fn materials(&self) -> &OrderedCollection<Material> {
        &self.materials
    }

    pub(crate) fn materials_mut(&mut self) -> &mut OrderedCollection<Material> {
        &mut self.materials
    }
}

impl Named for Lecture {
    fn name(&self) -> &str {
        &self.name
    }
}
