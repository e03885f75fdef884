//! Error kinds reported by ordered collections.

use thiserror::Error;

/// Why a collection operation was rejected.
///
/// Every operation that fails leaves the collection exactly as it was, so
/// callers can branch on the variant and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An insertion found a member with the same name already present.
    #[error("Element already exists.")]
    ExistingElement {
        /// Name that collided
        name: String,
    },

    /// The operation needed a member that is not there.
    #[error("Element does not exist.")]
    UnexistingElement {
        /// Name that was looked up
        name: String,
    },
}

impl CollectionError {
    pub(crate) fn existing(name: impl Into<String>) -> Self {
        Self::ExistingElement { name: name.into() }
    }

    pub(crate) fn unexisting(name: impl Into<String>) -> Self {
        Self::UnexistingElement { name: name.into() }
    }

    /// True for [`CollectionError::ExistingElement`]
    pub fn is_existing(&self) -> bool {
        matches!(self, Self::ExistingElement { .. })
    }

    /// True for [`CollectionError::UnexistingElement`]
    pub fn is_unexisting(&self) -> bool {
        matches!(self, Self::UnexistingElement { .. })
    }

    /// Name of the member the error is about
    pub fn name(&self) -> &str {
        match self {
            Self::ExistingElement { name } | Self::UnexistingElement { name } => name,
        }
    }
}
