use crate::args::TransArgs;
use crate::text::Text;
use crate::translator::Translator;

/// Degraded-mode adapter: every failure becomes empty text.
///
/// Choosing `Lenient` is a construction-time decision; the wrapped translator
/// still reports failures to anyone who calls it directly.
#[derive(Clone, Debug)]
pub struct Lenient<R> {
    inner: R,
}

impl<R> Lenient<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn translate<T>(&self, id: &T) -> T::Owned
    where
        T: Text + ?Sized,
        R: Translator<T>,
    {
        self.inner.translate(id).unwrap_or_default()
    }

    pub fn translate_with<T>(&self, id: &T, args: &TransArgs<T>) -> T::Owned
    where
        T: Text + ?Sized,
        R: Translator<T>,
    {
        self.inner.translate_with(id, args).unwrap_or_default()
    }

    pub fn translate_plural<T>(&self, id: &T, count: u32, args: &TransArgs<T>) -> T::Owned
    where
        T: Text + ?Sized,
        R: Translator<T>,
    {
        self.inner
            .translate_plural(id, count, args)
            .unwrap_or_default()
    }
}
