use alloc::vec::Vec;
use core::fmt;

use crate::text::{Text, borrow_text};
use crate::{Tr8nError, Tr8nResult};

/// Named substitution values for one translation call, plus an optional
/// plural count.
///
/// Argument lists are short, so entries live in a `Vec` and lookups scan it.
pub struct TransArgs<T: Text + ?Sized = str> {
    entries: Vec<(T::Owned, T::Owned)>,
    count: Option<u32>,
}

impl<T: Text + ?Sized> TransArgs<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            count: None,
        }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Tr8nResult<Self, T>
    where
        I: IntoIterator<Item = (&'a T, &'a T)>,
    {
        let mut args = Self::new();
        for (key, value) in pairs {
            args.add(key, value)?;
        }
        Ok(args)
    }

    pub fn add(&mut self, key: &T, value: &T) -> Tr8nResult<&mut Self, T> {
        if self.has(key) {
            return Err(Tr8nError::DuplicateKey(key.to_owned_text()));
        }
        self.entries.push((key.to_owned_text(), value.to_owned_text()));
        Ok(self)
    }

    pub fn with_count(&mut self, count: u32) -> &mut Self {
        self.count = Some(count);
        self
    }

    pub fn has(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Value for `key`, or empty text when it was not supplied.
    pub fn get(&self, key: &T) -> &T {
        self.find(key).unwrap_or(T::empty())
    }

    pub fn has_count(&self) -> bool {
        self.count.is_some()
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.entries
            .iter()
            .map(|(key, value)| (borrow_text::<T>(key), borrow_text::<T>(value)))
    }

    pub(crate) fn find(&self, key: &T) -> Option<&T> {
        self.entries
            .iter()
            .find(|(candidate, _)| borrow_text::<T>(candidate) == key)
            .map(|(_, value)| borrow_text::<T>(value))
    }
}

impl<T: Text + ?Sized> Default for TransArgs<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Text + ?Sized> Clone for TransArgs<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            count: self.count,
        }
    }
}

impl<T: Text + ?Sized> fmt::Debug for TransArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransArgs")
            .field("entries", &self.entries)
            .field("count", &self.count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TransArgs;
    use crate::{ErrorKind, Tr8nError};

    #[test]
    fn add_and_get() {
        let mut args = TransArgs::new();
        args.add("name", "Nova").expect("add");
        assert!(args.has("name"));
        assert_eq!(args.get("name"), "Nova");
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn get_missing_is_empty() {
        let args = TransArgs::<str>::new();
        assert!(!args.has("missing"));
        assert_eq!(args.get("missing"), "");
        assert!(args.is_empty());
    }

    #[test]
    fn rejects_duplicate_key() {
        let mut args = TransArgs::new();
        args.add("name", "Nova").expect("first");
        let err = args.add("name", "Bob").expect_err("duplicate");
        assert_eq!(err, Tr8nError::DuplicateKey("name".into()));
        assert_eq!(args.get("name"), "Nova");
    }

    #[test]
    fn from_pairs_keeps_order() {
        let args = TransArgs::from_pairs([("a", "1"), ("b", "2")]).expect("pairs");
        let keys: Vec<&str> = args.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "b"]);

        let err = TransArgs::from_pairs([("a", "1"), ("a", "2")]).expect_err("duplicate");
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn count_is_optional() {
        let mut args = TransArgs::<str>::new();
        assert!(!args.has_count());
        args.with_count(0);
        assert!(args.has_count());
        assert_eq!(args.count(), Some(0));
    }
}
