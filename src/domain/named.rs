//! The capability every collection member needs: a stable name.

/// Anything that can live in an [`OrderedCollection`](super::OrderedCollection).
///
/// The name is the identity of a member within its parent. Two values with
/// the same name are the same member as far as a collection is concerned,
/// whichever instance the caller happens to hold.
pub trait Named {
    /// The uniqueness key. Must not change while the value is stored.
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of<N: Named + ?Sized>(item: &N) -> &str {
        item.name()
    }

    #[test]
    fn test_plain_strings_are_named() {
        assert_eq!(key_of("Fundamentals"), "Fundamentals");
        assert_eq!(key_of(&"git".to_string()), "git");
        assert_eq!(key_of(&&"nested"), "nested");
    }
}
