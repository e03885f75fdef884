//! Domain types for courses.
//!
//! - `OrderedCollection`: ordered, name-unique members of one parent
//! - `relocate`: atomic move between two sibling collections
//! - Entities: Course > Module > Lecture > Material

pub mod collection;
pub mod course;
pub mod errors;
pub mod lecture;
pub mod material;
pub mod module;
pub mod named;
pub mod relocation;

// Re-export commonly used types
pub use collection::OrderedCollection;
pub use course::Course;
pub use errors::CollectionError;
pub use lecture::Lecture;
pub use material::{Material, MaterialKind};
pub use module::Module;
pub use named::Named;
pub use relocation::relocate;
