//! `%{key}` placeholder scanning and substitution.
//!
//! A placeholder is `%{`, the shortest run of code units up to the next `}`,
//! then `}`. The run is the argument key and may not cross a line break
//! (`\n` or `\r`, and in UTF-16 text also U+2028 and U+2029); a `%{` that
//! cannot be closed on its own line is literal text.

use core::ops::Range;

use crate::args::TransArgs;
use crate::text::Text;
use crate::{Tr8nError, Tr8nResult};

const OPEN_LEN: usize = 2;

#[derive(Debug, PartialEq, Eq)]
pub struct Placeholder<'a, T: Text + ?Sized = str> {
    /// Code-unit range of the whole `%{key}` token.
    pub span: Range<usize>,
    pub key: &'a T,
}

/// Placeholders of a template, left to right.
pub struct Placeholders<'a, T: Text + ?Sized = str> {
    template: &'a T,
    pos: usize,
}

pub fn placeholders<T: Text + ?Sized>(template: &T) -> Placeholders<'_, T> {
    Placeholders { template, pos: 0 }
}

impl<'a, T: Text + ?Sized> Iterator for Placeholders<'a, T> {
    type Item = Placeholder<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let units = self.template.units();
        let percent = T::Unit::from(b'%');
        let open = T::Unit::from(b'{');
        let close = T::Unit::from(b'}');

        let mut search = self.pos;
        while search + OPEN_LEN <= units.len() {
            let start = search
                + units[search..]
                    .windows(OPEN_LEN)
                    .position(|pair| pair[0] == percent && pair[1] == open)?;
            let key_start = start + OPEN_LEN;
            let key_len = units[key_start..].iter().position(|unit| *unit == close)?;
            let key_end = key_start + key_len;
            let crosses_line = units[key_start..key_end]
                .iter()
                .any(|unit| T::is_line_break(*unit));
            if crosses_line {
                search = start + 1;
                continue;
            }

            self.pos = key_end + 1;
            return Some(Placeholder {
                span: start..key_end + 1,
                key: self.template.slice(key_start..key_end),
            });
        }
        self.pos = units.len();
        None
    }
}

/// Replaces every placeholder in `template` with its argument value.
///
/// Fails on the first placeholder whose key is absent from `args`; no
/// partial output is returned. Arguments the template never mentions are
/// ignored.
pub fn interpolate<T: Text + ?Sized>(
    id: &T,
    template: &T,
    args: &TransArgs<T>,
) -> Tr8nResult<T::Owned, T> {
    let mut output = T::Owned::default();
    let mut copied = 0;

    for placeholder in placeholders(template) {
        let value = args
            .find(placeholder.key)
            .ok_or_else(|| Tr8nError::MissingArgument {
                id: id.to_owned_text(),
                key: placeholder.key.to_owned_text(),
            })?;
        T::push_text(&mut output, template.slice(copied..placeholder.span.start));
        T::push_text(&mut output, value);
        copied = placeholder.span.end;
    }

    T::push_text(&mut output, template.slice(copied..template.len_units()));
    Ok(output)
}
