use crate::args::TransArgs;
use crate::interpolate::{interpolate, placeholders};
use crate::table::MessageTable;
use crate::text::Text;
use crate::{Tr8nError, Tr8nResult};

/// Resolves message identifiers to user-visible text.
///
/// Failures are checked in a fixed order: unknown identifier, then a call
/// mode that disagrees with the message's plural shape, then a count that
/// matches no plural case, then the first placeholder without an argument.
pub trait Translator<T: Text + ?Sized = str> {
    /// Resolves a non-plural message that takes no arguments.
    fn translate(&self, id: &T) -> Tr8nResult<T::Owned, T>;

    /// Resolves a message with arguments. When `args` carries a count the
    /// plural path is taken with that count.
    fn translate_with(&self, id: &T, args: &TransArgs<T>) -> Tr8nResult<T::Owned, T>;

    /// Resolves a plural message for `count`, ignoring any count in `args`.
    fn translate_plural(&self, id: &T, count: u32, args: &TransArgs<T>)
    -> Tr8nResult<T::Owned, T>;
}

impl<T: Text + ?Sized, R: Translator<T> + ?Sized> Translator<T> for &R {
    fn translate(&self, id: &T) -> Tr8nResult<T::Owned, T> {
        (**self).translate(id)
    }

    fn translate_with(&self, id: &T, args: &TransArgs<T>) -> Tr8nResult<T::Owned, T> {
        (**self).translate_with(id, args)
    }

    fn translate_plural(
        &self,
        id: &T,
        count: u32,
        args: &TransArgs<T>,
    ) -> Tr8nResult<T::Owned, T> {
        (**self).translate_plural(id, count, args)
    }
}

/// Translator over a single in-memory [`MessageTable`].
pub struct SimpleTranslator<T: Text + ?Sized = str> {
    table: MessageTable<T>,
}

impl<T: Text + ?Sized> SimpleTranslator<T> {
    pub fn new(table: MessageTable<T>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MessageTable<T> {
        &self.table
    }
}

impl<T: Text + ?Sized> Translator<T> for SimpleTranslator<T> {
    fn translate(&self, id: &T) -> Tr8nResult<T::Owned, T> {
        let config = self.table.lookup(id)?;
        if config.is_plural() {
            return Err(Tr8nError::InvalidArguments(id.to_owned_text()));
        }

        let template = config.simple_template();
        if let Some(placeholder) = placeholders(template).next() {
            return Err(Tr8nError::MissingArgument {
                id: id.to_owned_text(),
                key: placeholder.key.to_owned_text(),
            });
        }
        Ok(template.to_owned_text())
    }

    fn translate_with(&self, id: &T, args: &TransArgs<T>) -> Tr8nResult<T::Owned, T> {
        if let Some(count) = args.count() {
            return self.translate_plural(id, count, args);
        }

        let config = self.table.lookup(id)?;
        if config.is_plural() {
            return Err(Tr8nError::InvalidArguments(id.to_owned_text()));
        }
        interpolate(id, config.simple_template(), args)
    }

    fn translate_plural(
        &self,
        id: &T,
        count: u32,
        args: &TransArgs<T>,
    ) -> Tr8nResult<T::Owned, T> {
        let config = self.table.lookup(id)?;
        if !config.is_plural() {
            return Err(Tr8nError::InvalidArguments(id.to_owned_text()));
        }
        let template = config.select_plural_template(id, count)?;
        interpolate(id, template, args)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{SimpleTranslator, Translator};
    use crate::{ErrorKind, MessageTable, PluralCase, TransArgs, Tr8nError};

    const NO_ARGS: &str = "test.no_args";
    const HELLO_NAME: &str = "test.hello_name";
    const PROGRESS_PCT: &str = "test.progress_pct";
    const COUPLE_FISH_COUNT: &str = "test.couple_fish_count";
    const ADDL_MSG: &str = "test2.addl";

    fn english() -> SimpleTranslator {
        let mut table = MessageTable::new();
        table
            .add(NO_ARGS, "A simple message with no arguments")
            .expect("no args")
            .add(HELLO_NAME, "hello, %{personName}!")
            .expect("hello")
            .add(PROGRESS_PCT, "progress: %{pct}%")
            .expect("progress")
            .add_plural(
                COUPLE_FISH_COUNT,
                vec![
                    PluralCase::new(0, "%{person1Name} and %{person2Name}, you have no fish"),
                    PluralCase::new(1, "%{person1Name} and %{person2Name}, you have a fish"),
                    PluralCase::new(2, "%{person1Name} and %{person2Name}, you have two fish"),
                    PluralCase::new(
                        3,
                        "%{person1Name} and %{person2Name}, you have %{fishCount} fish",
                    ),
                ],
            )
            .expect("fish")
            .add(ADDL_MSG, "An additional message with %{arg}")
            .expect("addl");
        SimpleTranslator::new(table)
    }

    fn fish_args(count: &str) -> TransArgs {
        TransArgs::from_pairs([
            ("person1Name", "Alice"),
            ("person2Name", "Bob"),
            ("fishCount", count),
        ])
        .expect("args")
    }

    #[test]
    fn translates_plain_message() {
        let translator = english();
        assert_eq!(
            translator.translate(NO_ARGS).expect("plain"),
            "A simple message with no arguments"
        );
    }

    #[test]
    fn translates_with_arguments() {
        let translator = english();
        let args = TransArgs::from_pairs([("personName", "Bob")]).expect("args");
        assert_eq!(
            translator.translate_with(HELLO_NAME, &args).expect("hello"),
            "hello, Bob!"
        );
        let args = TransArgs::from_pairs([("pct", "75")]).expect("args");
        assert_eq!(
            translator.translate_with(PROGRESS_PCT, &args).expect("progress"),
            "progress: 75%"
        );
    }

    #[test]
    fn translates_plural_cases() {
        let translator = english();
        let cases: [(u32, &str); 5] = [
            (0, "Alice and Bob, you have no fish"),
            (1, "Alice and Bob, you have a fish"),
            (2, "Alice and Bob, you have two fish"),
            (3, "Alice and Bob, you have 3 fish"),
            (102, "Alice and Bob, you have 102 fish"),
        ];
        for (count, expected) in cases {
            let rendered = count.to_string();
            let out = translator
                .translate_plural(COUPLE_FISH_COUNT, count, &fish_args(&rendered))
                .expect("plural");
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn count_in_args_takes_plural_path() {
        let translator = english();
        let mut args = fish_args("7");
        args.with_count(7);
        assert_eq!(
            translator.translate_with(COUPLE_FISH_COUNT, &args).expect("plural"),
            "Alice and Bob, you have 7 fish"
        );

        let mut args = TransArgs::from_pairs([("personName", "Bob")]).expect("args");
        args.with_count(1);
        let err = translator
            .translate_with(HELLO_NAME, &args)
            .expect_err("non-plural with count");
        assert_eq!(err, Tr8nError::InvalidArguments(String::from(HELLO_NAME)));
    }

    #[test]
    fn explicit_count_overrides_args_count() {
        let translator = english();
        let mut args = fish_args("0");
        args.with_count(5);
        let out = translator
            .translate_plural(COUPLE_FISH_COUNT, 0, &args)
            .expect("plural");
        assert_eq!(out, "Alice and Bob, you have no fish");
    }

    #[test]
    fn plain_lookup_of_template_with_placeholder_fails() {
        let translator = english();
        let err = translator.translate(HELLO_NAME).expect_err("needs args");
        assert_eq!(
            err,
            Tr8nError::MissingArgument {
                id: String::from(HELLO_NAME),
                key: String::from("personName"),
            }
        );
    }

    #[test]
    fn plural_message_rejects_non_plural_calls() {
        let translator = english();
        let err = translator.translate(COUPLE_FISH_COUNT).expect_err("plain");
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
        let err = translator
            .translate_with(COUPLE_FISH_COUNT, &fish_args("1"))
            .expect_err("args without count");
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    }

    #[test]
    fn simple_message_rejects_plural_call() {
        let translator = english();
        let args = TransArgs::from_pairs([("arg", "x")]).expect("args");
        let err = translator
            .translate_plural(ADDL_MSG, 1, &args)
            .expect_err("plural on simple");
        assert_eq!(err, Tr8nError::InvalidArguments(String::from(ADDL_MSG)));
    }

    #[test]
    fn unknown_message_wins_in_every_mode() {
        let translator = english();
        let args = TransArgs::<str>::new();
        let errors = [
            translator.translate("nope").expect_err("plain"),
            translator.translate_with("nope", &args).expect_err("args"),
            translator.translate_plural("nope", 3, &args).expect_err("plural"),
        ];
        for err in errors {
            assert_eq!(err, Tr8nError::UnknownMessage(String::from("nope")));
        }
    }

    #[test]
    fn mode_mismatch_precedes_missing_argument() {
        let translator = english();
        let args = TransArgs::<str>::new();
        let err = translator
            .translate_plural(HELLO_NAME, 1, &args)
            .expect_err("mismatch");
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    }

    #[test]
    fn no_matching_case_precedes_missing_argument() {
        let mut table = MessageTable::new();
        table
            .add_plural(
                "gap",
                vec![PluralCase::new(1, "%{x} one"), PluralCase::new(2, "%{x} many")],
            )
            .expect("gap");
        let translator = SimpleTranslator::new(table);
        let err = translator
            .translate_plural("gap", 0, &TransArgs::new())
            .expect_err("no case");
        assert_eq!(err, Tr8nError::InvalidArguments(String::from("gap")));
    }

    #[test]
    fn unused_arguments_are_ignored() {
        let translator = english();
        let args = TransArgs::from_pairs([("arg", "x"), ("unused", "y")]).expect("args");
        assert_eq!(
            translator.translate_with(ADDL_MSG, &args).expect("extra args"),
            "An additional message with x"
        );
    }

    #[test]
    fn wide_translator_resolves_plural() {
        fn wide(value: &str) -> Vec<u16> {
            value.encode_utf16().collect()
        }

        let id = wide("fish");
        let mut table = MessageTable::<[u16]>::new();
        table
            .add_plural(
                &id,
                vec![
                    PluralCase::new(0, &wide("keine Fische")[..]),
                    PluralCase::new(1, &wide("ein Fisch")[..]),
                    PluralCase::new(2, &wide("%{n} Fische")[..]),
                ],
            )
            .expect("plural");
        let translator = SimpleTranslator::new(table);

        let mut args = TransArgs::<[u16]>::new();
        args.add(&wide("n"), &wide("4")).expect("arg");
        let out = translator.translate_plural(id.as_slice(), 4, &args).expect("wide");
        assert_eq!(out, wide("4 Fische"));
        assert_eq!(translator.table().len(), 1);
    }

    #[test]
    fn translator_by_reference() {
        fn resolve(translator: impl Translator) -> String {
            translator.translate(NO_ARGS).expect("plain")
        }

        let translator = english();
        assert_eq!(resolve(&translator), "A simple message with no arguments");
    }
}
