//! Localized message text.
//!
//! A [`Catalog`] is a plain value selecting one locale. It is handed to the
//! builder and to error renderers; there is no process-wide default.

mod english;
mod french;

use std::fmt;

/// Supported message locales.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    /// Resolve an ISO 639-1 language code.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::English),
            "fr" => Some(Locale::French),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies one message template.
///
/// Templates use positional `{0}`, `{1}`, ... placeholders. The argument
/// list each message expects is documented on the variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MessageId {
    /// `{0}` token text, `{1}` token kind.
    UnexpectedToken,
    /// `{0}` token text, `{1}` token kind, `{2}` expected kinds.
    UnexpectedTokenExpecting,
    UnexpectedEos,
    /// `{2}` expected kinds.
    UnexpectedEosExpecting,
    /// `{0}` offending text.
    UnrecognizedInput,
    /// `{0}` rule string, `{1}` parse messages.
    MalformedRule,
    /// `{0}` rendered cycles.
    LeftRecursion,
    /// `{0}` missing name, `{1}` referencing non-terminal.
    UndefinedNonTerminal,
    /// `{0}` starting rule name.
    MissingStartingRule,
    /// `{0}` rule string.
    EbnfInPlainGrammar,
    /// `{0}` rule string, `{1}` reason.
    InvalidOperator,
    /// `{0}` symbol.
    OperatorNotATerminal,
    /// `{0}` precedence text.
    InvalidPrecedence,
    /// `{0}` affix.
    UnaryAssociativity,
    /// `{0}` cause.
    LexerConstruction,
    MissingLexer,
    /// `{0}` node name.
    MissingCallback,
}

/// Message lookup for one locale.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub const fn new(locale: Locale) -> Self {
        Catalog { locale }
    }

    pub const fn english() -> Self {
        Catalog::new(Locale::English)
    }

    pub const fn french() -> Self {
        Catalog::new(Locale::French)
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The raw template for `id`.
    pub fn template(&self, id: MessageId) -> &'static str {
        match self.locale {
            Locale::English => english::template(id),
            Locale::French => french::template(id),
        }
    }

    /// Render `id` with positional arguments.
    ///
    /// Placeholders without a matching argument render as empty text.
    pub fn text(&self, id: MessageId, args: &[&str]) -> String {
        substitute(self.template(id), args)
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let index = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));
        match index {
            Some((i, close)) => {
                out.push_str(args.get(i).copied().unwrap_or_default());
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
