use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use core::fmt;

use crate::config::MessageConfig;
use crate::plural::PluralCase;
use crate::text::{Text, borrow_text};
use crate::{Tr8nError, Tr8nResult};

/// Messages for one locale, keyed by identifier.
///
/// Built once through [`MessageTable::add`] and [`MessageTable::add_plural`],
/// then only read. Lookups borrow the identifier; no key is allocated.
pub struct MessageTable<T: Text + ?Sized = str> {
    configs: BTreeMap<T::Owned, MessageConfig<T>>,
}

impl<T: Text + ?Sized> MessageTable<T> {
    pub fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, id: &T, template: &T) -> Tr8nResult<&mut Self, T> {
        self.insert(id, MessageConfig::simple(template))?;
        Ok(self)
    }

    pub fn add_plural<I>(&mut self, id: &T, cases: I) -> Tr8nResult<&mut Self, T>
    where
        I: IntoIterator<Item = PluralCase<T>>,
    {
        let config = MessageConfig::plural(cases.into_iter().collect()).map_err(|reason| {
            Tr8nError::InvalidConfiguration {
                id: id.to_owned_text(),
                reason,
            }
        })?;
        self.insert(id, config)?;
        Ok(self)
    }

    pub fn lookup(&self, id: &T) -> Tr8nResult<&MessageConfig<T>, T> {
        self.configs
            .get(id)
            .ok_or_else(|| Tr8nError::UnknownMessage(id.to_owned_text()))
    }

    pub fn contains(&self, id: &T) -> bool {
        self.configs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &T> {
        self.configs.keys().map(|id| borrow_text::<T>(id))
    }

    fn insert(&mut self, id: &T, config: MessageConfig<T>) -> Tr8nResult<(), T> {
        match self.configs.entry(id.to_owned_text()) {
            Entry::Occupied(_) => Err(Tr8nError::DuplicateIdentifier(id.to_owned_text())),
            Entry::Vacant(slot) => {
                slot.insert(config);
                Ok(())
            }
        }
    }
}

impl<T: Text + ?Sized> Default for MessageTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Text + ?Sized> Clone for MessageTable<T> {
    fn clone(&self) -> Self {
        Self {
            configs: self.configs.clone(),
        }
    }
}

impl<T: Text + ?Sized> fmt::Debug for MessageTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.configs.iter()).finish()
    }
}
