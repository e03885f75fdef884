//! Moving a member from one collection into a sibling collection.

use tracing::debug;

use super::collection::{OrderedCollection, Result};
use super::errors::CollectionError;
use super::named::Named;

/// Move `item` out of `source` and into `destination` at `target`.
///
/// `target` is clamped to `[1, destination.count() + 1]`. Both checks run
/// before anything is touched: a member missing from `source` reports
/// [`CollectionError::UnexistingElement`], a name already taken in
/// `destination` reports [`CollectionError::ExistingElement`], and in either
/// case both collections are left as they were.
pub fn relocate<T, N>(
    item: &N,
    source: &mut OrderedCollection<T>,
    destination: &mut OrderedCollection<T>,
    target: i64,
) -> Result<()>
where
    T: Named,
    N: Named + ?Sized,
{
    let index = source.require(item)?;
    if destination.includes(item) {
        return Err(CollectionError::existing(item.name()));
    }

    let moved = source.take_at(index);
    destination.insert_clamped(moved, target);

    debug!(element = item.name(), requested = target, "Element relocated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(names: &[&str]) -> OrderedCollection<String> {
        OrderedCollection::try_from(names.iter().map(|n| n.to_string()).collect::<Vec<_>>())
            .unwrap()
    }

    #[test]
    fn test_relocate_into_middle() {
        let mut src = collection(&["a", "b"]);
        let mut dst = collection(&["x", "y", "z"]);

        relocate("a", &mut src, &mut dst, 2).unwrap();

        assert_eq!(src.names(), vec!["b"]);
        assert_eq!(dst.names(), vec!["x", "a", "y", "z"]);
    }

    #[test]
    fn test_relocate_clamps_to_append() {
        let mut src = collection(&["a"]);
        let mut dst = collection(&["x"]);

        relocate("a", &mut src, &mut dst, 42).unwrap();

        assert!(src.is_empty());
        assert_eq!(dst.names(), vec!["x", "a"]);
    }

    #[test]
    fn test_relocate_into_empty_destination() {
        let mut src = collection(&["a"]);
        let mut dst = OrderedCollection::new();

        relocate("a", &mut src, &mut dst, -3).unwrap();

        assert_eq!(dst.position("a").unwrap(), 1);
    }

    #[test]
    fn test_relocate_missing_from_source() {
        let mut src = collection(&["a"]);
        let mut dst = collection(&["x"]);

        let err = relocate("q", &mut src, &mut dst, 1).unwrap_err();

        assert_eq!(err, CollectionError::unexisting("q"));
        assert_eq!(src.names(), vec!["a"]);
        assert_eq!(dst.names(), vec!["x"]);
    }

    #[test]
    fn test_relocate_name_taken_in_destination() {
        let mut src = collection(&["a", "b"]);
        let mut dst = collection(&["b"]);

        let err = relocate("b", &mut src, &mut dst, 1).unwrap_err();

        assert!(err.is_existing());
        assert_eq!(src.names(), vec!["a", "b"]);
        assert_eq!(dst.names(), vec!["b"]);
    }
}
