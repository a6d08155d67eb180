use alloc::vec::Vec;

use crate::args::TransArgs;
use crate::text::Text;
use crate::translator::Translator;
use crate::{Tr8nError, Tr8nResult};

/// Ordered fallback over several translators.
///
/// A translator is skipped only when it does not know the identifier; any
/// other failure stops the chain.
pub struct TranslatorChain<'a, T: Text + ?Sized = str> {
    translators: Vec<&'a dyn Translator<T>>,
}

impl<'a, T: Text + ?Sized> TranslatorChain<'a, T> {
    pub fn new(translators: Vec<&'a dyn Translator<T>>) -> Self {
        Self { translators }
    }

    fn resolve<F>(&self, id: &T, mut attempt: F) -> Tr8nResult<T::Owned, T>
    where
        F: FnMut(&dyn Translator<T>) -> Tr8nResult<T::Owned, T>,
    {
        for translator in &self.translators {
            match attempt(*translator) {
                Err(Tr8nError::UnknownMessage(_)) => continue,
                result => return result,
            }
        }
        Err(Tr8nError::UnknownMessage(id.to_owned_text()))
    }
}

impl<T: Text + ?Sized> Translator<T> for TranslatorChain<'_, T> {
    fn translate(&self, id: &T) -> Tr8nResult<T::Owned, T> {
        self.resolve(id, |translator| translator.translate(id))
    }

    fn translate_with(&self, id: &T, args: &TransArgs<T>) -> Tr8nResult<T::Owned, T> {
        self.resolve(id, |translator| translator.translate_with(id, args))
    }

    fn translate_plural(
        &self,
        id: &T,
        count: u32,
        args: &TransArgs<T>,
    ) -> Tr8nResult<T::Owned, T> {
        self.resolve(id, |translator| translator.translate_plural(id, count, args))
    }
}
