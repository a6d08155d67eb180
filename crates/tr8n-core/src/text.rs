use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::ops::Range;

/// Character representation the engine operates over.
///
/// Implemented for `str` (UTF-8) and `[u16]` (UTF-16 code units). Ranges
/// passed to [`Text::slice`] are in code units and always fall next to an
/// ASCII delimiter, so they are valid boundaries for either encoding.
pub trait Text: Ord + fmt::Debug + 'static {
    type Unit: Copy + Eq + From<u8>;
    type Owned: Clone + Ord + Default + fmt::Debug + Borrow<Self>;

    fn empty() -> &'static Self;

    fn units(&self) -> &[Self::Unit];

    fn slice(&self, range: Range<usize>) -> &Self;

    fn to_owned_text(&self) -> Self::Owned;

    fn push_text(out: &mut Self::Owned, text: &Self);

    /// Lossy rendering used for diagnostics.
    fn display(&self) -> Cow<'_, str>;

    /// Whether `unit` ends a line, which a placeholder key may not span.
    fn is_line_break(unit: Self::Unit) -> bool;

    fn len_units(&self) -> usize {
        self.units().len()
    }
}

impl Text for str {
    type Unit = u8;
    type Owned = String;

    fn empty() -> &'static Self {
        ""
    }

    fn units(&self) -> &[u8] {
        self.as_bytes()
    }

    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn to_owned_text(&self) -> String {
        String::from(self)
    }

    fn push_text(out: &mut String, text: &Self) {
        out.push_str(text);
    }

    fn display(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn is_line_break(unit: u8) -> bool {
        matches!(unit, b'\n' | b'\r')
    }
}

impl Text for [u16] {
    type Unit = u16;
    type Owned = Vec<u16>;

    fn empty() -> &'static Self {
        &[]
    }

    fn units(&self) -> &[u16] {
        self
    }

    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn to_owned_text(&self) -> Vec<u16> {
        self.to_vec()
    }

    fn push_text(out: &mut Vec<u16>, text: &Self) {
        out.extend_from_slice(text);
    }

    fn display(&self) -> Cow<'_, str> {
        Cow::Owned(String::from_utf16_lossy(self))
    }

    // U+2028 and U+2029 are single code units here.
    fn is_line_break(unit: u16) -> bool {
        matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
    }
}

pub(crate) fn borrow_text<T: Text + ?Sized>(owned: &T::Owned) -> &T {
    Borrow::<T>::borrow(owned)
}
