use core::fmt;

use crate::text::{Text, borrow_text};

/// Template selected when the plural count is at least `threshold`.
pub struct PluralCase<T: Text + ?Sized = str> {
    threshold: u32,
    template: T::Owned,
}

impl<T: Text + ?Sized> PluralCase<T> {
    pub fn new(threshold: u32, template: &T) -> Self {
        Self {
            threshold,
            template: template.to_owned_text(),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn template(&self) -> &T {
        borrow_text::<T>(&self.template)
    }
}

impl<T: Text + ?Sized> From<(u32, &T)> for PluralCase<T> {
    fn from((threshold, template): (u32, &T)) -> Self {
        Self::new(threshold, template)
    }
}

impl<T: Text + ?Sized> Clone for PluralCase<T> {
    fn clone(&self) -> Self {
        Self {
            threshold: self.threshold,
            template: self.template.clone(),
        }
    }
}

impl<T: Text + ?Sized> fmt::Debug for PluralCase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralCase")
            .field("threshold", &self.threshold)
            .field("template", &self.template)
            .finish()
    }
}

impl<T: Text + ?Sized> PartialEq for PluralCase<T> {
    fn eq(&self, other: &Self) -> bool {
        self.threshold == other.threshold && self.template == other.template
    }
}

impl<T: Text + ?Sized> Eq for PluralCase<T> {}
