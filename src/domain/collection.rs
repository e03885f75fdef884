//! Ordered, name-unique collection shared by every level of a course.
//!
//! Members are kept in a `Vec` in position order. Position is 1-based and
//! dense: the member at index `i` is at position `i + 1`. Names are unique
//! at all times, and an operation that fails leaves the collection as it
//! was.

use std::slice;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::errors::CollectionError;
use super::named::Named;

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Ordered set of named members belonging to one parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Named> OrderedCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the end.
    ///
    /// Fails with [`CollectionError::ExistingElement`] if a member with the
    /// same name is present.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.includes(&item) {
            return Err(CollectionError::existing(item.name()));
        }

        debug!(element = item.name(), position = self.items.len() + 1, "Element added");
        self.items.push(item);
        Ok(())
    }

    /// Insert `item` at `target`, clamped to `[1, count + 1]`.
    pub fn insert_at(&mut self, item: T, target: i64) -> Result<()> {
        if self.includes(&item) {
            return Err(CollectionError::existing(item.name()));
        }

        self.insert_clamped(item, target);
        Ok(())
    }

    /// Remove the member named like `item`, closing the gap it leaves.
    pub fn remove<N: Named + ?Sized>(&mut self, item: &N) -> Result<()> {
        self.take(item).map(drop)
    }

    /// Remove the member named like `item` and hand it back.
    pub fn take<N: Named + ?Sized>(&mut self, item: &N) -> Result<T> {
        let index = self.require(item)?;
        Ok(self.take_at(index))
    }

    /// Move a member to `target`, clamped to `[1, count]`.
    ///
    /// Members between the old and new slot shift by one. A target equal to
    /// the current position is accepted and changes nothing.
    pub fn move_to<N: Named + ?Sized>(&mut self, item: &N, target: i64) -> Result<()> {
        let from = self.require(item)?;
        let to = clamp_slot(target, self.items.len());

        if from != to {
            let moved = self.items.remove(from);
            self.items.insert(to, moved);
        }

        debug!(element = item.name(), from = from + 1, to = to + 1, "Element moved");
        Ok(())
    }

    /// 1-based position of the member named like `item`
    pub fn position<N: Named + ?Sized>(&self, item: &N) -> Result<usize> {
        self.require(item).map(|index| index + 1)
    }

    /// Whether a member with the same name is present
    pub fn includes<N: Named + ?Sized>(&self, item: &N) -> bool {
        self.index_of(item).is_some()
    }

    /// Get a member by name
    pub fn get<N: Named + ?Sized>(&self, item: &N) -> Option<&T> {
        self.index_of(item).map(|index| &self.items[index])
    }

    /// Get a member by name for in-place changes to its payload.
    ///
    /// The member's name must stay the same.
    pub fn get_mut<N: Named + ?Sized>(&mut self, item: &N) -> Option<&mut T> {
        self.index_of(item).map(move |index| &mut self.items[index])
    }

    /// Names of all members, in position order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Named::name).collect()
    }

    /// Members paired with their 1-based positions
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items.iter().enumerate().map(|(index, item)| (index + 1, item))
    }

    pub(crate) fn index_of<N: Named + ?Sized>(&self, item: &N) -> Option<usize> {
        let name = item.name();
        self.items.iter().position(|i| i.name() == name)
    }

    pub(crate) fn require<N: Named + ?Sized>(&self, item: &N) -> Result<usize> {
        self.index_of(item)
            .ok_or_else(|| CollectionError::unexisting(item.name()))
    }

    pub(crate) fn take_at(&mut self, index: usize) -> T {
        let item = self.items.remove(index);
        debug!(element = item.name(), position = index + 1, "Element removed");
        item
    }

    /// Insert without the uniqueness check; the caller has already done it.
    pub(crate) fn insert_clamped(&mut self, item: T, target: i64) {
        let slot = clamp_slot(target, self.items.len() + 1);
        debug!(element = item.name(), position = slot + 1, "Element inserted");
        self.items.insert(slot, item);
    }

    pub(crate) fn get_at_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }

    /// Two distinct members borrowed mutably at once. `a != b`.
    pub(crate) fn pair_at_mut(&mut self, a: usize, b: usize) -> (&mut T, &mut T) {
        debug_assert_ne!(a, b);
        if a < b {
            let (left, right) = self.items.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.items.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}

impl<T> OrderedCollection<T> {
    /// Number of members
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`count`](Self::count)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Members in position order. Each call starts from position 1.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Members as a slice, in position order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// Map a requested 1-based position onto a 0-based slot in `[0, upper - 1]`.
fn clamp_slot(target: i64, upper: usize) -> usize {
    let upper = i64::try_from(upper.max(1)).unwrap_or(i64::MAX);
    (target.clamp(1, upper) - 1) as usize
}

impl<T: Named> TryFrom<Vec<T>> for OrderedCollection<T> {
    type Error = CollectionError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }
}

impl<T> From<OrderedCollection<T>> for Vec<T> {
    fn from(collection: OrderedCollection<T>) -> Self {
        collection.items
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize> Serialize for OrderedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T: Named + Deserialize<'de>> Deserialize<'de> for OrderedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items)
            .map_err(|e| <D::Error as serde::de::Error>::custom(format!("{} ({})", e, e.name())))
    }
}
