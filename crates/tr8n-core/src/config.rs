use alloc::vec::Vec;
use core::fmt;

use crate::plural::PluralCase;
use crate::text::{Text, borrow_text};
use crate::{Tr8nError, Tr8nResult};

/// Every template configured for one message identifier in one locale.
///
/// Only a [`crate::MessageTable`] builds these, so plural cases are always
/// non-empty and strictly ascending.
///
/// ```compile_fail
/// use tr8n_core::MessageConfig;
///
/// let _config: MessageConfig = MessageConfig::Plural(Vec::new());
/// ```
pub struct MessageConfig<T: Text + ?Sized = str> {
    shape: Shape<T>,
}

enum Shape<T: Text + ?Sized> {
    Simple(T::Owned),
    Plural(Vec<PluralCase<T>>),
}

impl<T: Text + ?Sized> MessageConfig<T> {
    pub(crate) fn simple(template: &T) -> Self {
        Self {
            shape: Shape::Simple(template.to_owned_text()),
        }
    }

    pub(crate) fn plural(cases: Vec<PluralCase<T>>) -> Result<Self, &'static str> {
        if cases.is_empty() {
            return Err("plural message has no cases");
        }
        let ascending = cases
            .windows(2)
            .all(|pair| pair[0].threshold() < pair[1].threshold());
        if !ascending {
            return Err("plural case thresholds are not strictly ascending");
        }
        Ok(Self {
            shape: Shape::Plural(cases),
        })
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.shape, Shape::Plural(_))
    }

    /// The only template of a non-plural message.
    ///
    /// # Panics
    ///
    /// Panics if the message was configured with plural cases.
    pub fn simple_template(&self) -> &T {
        match &self.shape {
            Shape::Simple(template) => borrow_text::<T>(template),
            Shape::Plural(_) => panic!("simple_template called on a plural message"),
        }
    }

    /// Template of the case with the greatest threshold not above `count`.
    ///
    /// Cases are scanned in stored order, keeping the last one that
    /// qualifies. `id` only names the message in the error.
    ///
    /// # Panics
    ///
    /// Panics if the message was configured without plural cases.
    pub fn select_plural_template(&self, id: &T, count: u32) -> Tr8nResult<&T, T> {
        let cases = match &self.shape {
            Shape::Plural(cases) => cases,
            Shape::Simple(_) => {
                panic!("select_plural_template called on a non-plural message")
            }
        };

        let mut best: Option<&PluralCase<T>> = None;
        for case in cases {
            if case.threshold() <= count {
                best = Some(case);
            }
        }

        best.map(PluralCase::template)
            .ok_or_else(|| Tr8nError::InvalidArguments(id.to_owned_text()))
    }

    /// Plural cases in stored order; empty for a simple message.
    pub fn cases(&self) -> &[PluralCase<T>] {
        match &self.shape {
            Shape::Simple(_) => &[],
            Shape::Plural(cases) => cases,
        }
    }
}

impl<T: Text + ?Sized> Clone for MessageConfig<T> {
    fn clone(&self) -> Self {
        let shape = match &self.shape {
            Shape::Simple(template) => Shape::Simple(template.clone()),
            Shape::Plural(cases) => Shape::Plural(cases.clone()),
        };
        Self { shape }
    }
}

impl<T: Text + ?Sized> fmt::Debug for MessageConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Simple(template) => f.debug_tuple("Simple").field(template).finish(),
            Shape::Plural(cases) => f.debug_tuple("Plural").field(cases).finish(),
        }
    }
}
