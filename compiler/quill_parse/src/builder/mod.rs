//! Parser construction from rule-string productions.
//!
//! A production is a rule string plus the callback that reduces what the
//! rule matched. `build()` runs these stages, stopping at the first one
//! that reports errors:
//!
//! 1. Extraction (`extract.rs`): every rule string is parsed with the
//!    meta-grammar and appended to its non-terminal.
//! 2. Validation: starting rule, undefined references, EBNF use with the
//!    plain engine, left recursion, lexer.
//!
//! Every error found by a stage is reported, not only the first.

mod extract;

use std::fmt;
use std::sync::Arc;

use quill_diagnostic::{Catalog, ErrorCode, ErrorLevel, MessageId};
use quill_ir::{Callback, ParserConfiguration, TokenKind, Value};
use quill_lexer::Lexer;
use tracing::debug;

use crate::engine::ParserKind;
use crate::parser::Parser;
use crate::recursion::{check_left_recursion, render_cycles};

/// One grammar problem found while building a parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct BuildError {
    pub code: ErrorCode,
    pub level: ErrorLevel,
    pub message: String,
}

impl BuildError {
    pub fn new(code: ErrorCode, level: ErrorLevel, message: impl Into<String>) -> Self {
        BuildError {
            code,
            level,
            message: message.into(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        BuildError::new(code, ErrorLevel::Error, message)
    }

    pub fn fatal(code: ErrorCode, message: impl Into<String>) -> Self {
        BuildError::new(code, ErrorLevel::Fatal, message)
    }
}

/// Every error of a failed build, in the order they were found.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{}", render_errors(.0))]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn errors(&self) -> &[BuildError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildError> {
        self.0.iter()
    }

    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.0.iter().any(|err| err.code == code)
    }

    pub fn is_fatal(&self) -> bool {
        self.0.iter().any(|err| err.level == ErrorLevel::Fatal)
    }
}

fn render_errors(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl<'a> IntoIterator for &'a BuildErrors {
    type Item = &'a BuildError;
    type IntoIter = std::slice::Iter<'a, BuildError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A registered rule string and its callback.
pub(crate) struct Production<K, OUT> {
    pub(crate) name: String,
    pub(crate) rule_string: String,
    pub(crate) callback: Callback<K, OUT>,
}

type SharedLexer<K> = Arc<dyn Lexer<K>>;

/// Collects productions and collaborators, then builds a [`Parser`].
///
/// ```text
/// let parser = ParserBuilder::new()
///     .production("add", "expr : term ((PLUS | MINUS) term)*", add)
///     .production("number", "term : NUM", number)
///     .lexer(LogosLexer::<Tok>::new())
///     .build(ParserKind::Ebnf, "expr")?;
/// ```
pub struct ParserBuilder<K: TokenKind, OUT> {
    productions: Vec<Production<K, OUT>>,
    lexer: Option<Result<SharedLexer<K>, String>>,
    catalog: Catalog,
}

impl<K: TokenKind, OUT: 'static> ParserBuilder<K, OUT> {
    pub fn new() -> Self {
        ParserBuilder {
            productions: Vec::new(),
            lexer: None,
            catalog: Catalog::default(),
        }
    }

    /// Register one rule string under the production `name`.
    ///
    /// A rule string with top-level alternatives (`a : b | c`) adds one
    /// rule per alternative, all reduced by `callback`.
    #[must_use]
    pub fn production<F>(mut self, name: impl Into<String>, rule_string: impl Into<String>, callback: F) -> Self
    where
        F: Fn(Vec<Value<K, OUT>>) -> OUT + Send + Sync + 'static,
    {
        self.productions.push(Production {
            name: name.into(),
            rule_string: rule_string.into(),
            callback: Callback::new(callback),
        });
        self
    }

    /// Register several rule strings sharing one callback.
    #[must_use]
    pub fn productions<F, I>(mut self, name: impl Into<String>, rule_strings: I, callback: F) -> Self
    where
        F: Fn(Vec<Value<K, OUT>>) -> OUT + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        let callback = Callback::new(callback);
        for rule_string in rule_strings {
            self.productions.push(Production {
                name: name.clone(),
                rule_string: rule_string.into(),
                callback: callback.clone(),
            });
        }
        self
    }

    #[must_use]
    pub fn lexer(mut self, lexer: impl Lexer<K> + 'static) -> Self {
        self.lexer = Some(Ok(Arc::new(lexer) as SharedLexer<K>));
        self
    }

    /// Use the lexer `factory` returns; its failure is reported by `build()`.
    #[must_use]
    pub fn lexer_with<L, E, F>(mut self, factory: F) -> Self
    where
        L: Lexer<K> + 'static,
        E: fmt::Display,
        F: FnOnce() -> Result<L, E>,
    {
        self.lexer = Some(match factory() {
            Ok(lexer) => Ok(Arc::new(lexer) as SharedLexer<K>),
            Err(err) => Err(err.to_string()),
        });
        self
    }

    /// Catalog for build and parse error messages. Defaults to English.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build a parser of `kind` whose default starting rule is `root`.
    pub fn build(self, kind: ParserKind, root: &str) -> Result<Parser<K, OUT>, BuildErrors> {
        debug!(
            productions = self.productions.len(),
            %kind,
            root,
            "building parser"
        );

        let configuration = extract::configuration(&self.productions, root, &self.catalog)
            .map_err(BuildErrors)?;
        debug!(
            non_terminals = configuration.len(),
            "configuration extracted"
        );

        let mut errors = validate(&configuration, kind, &self.catalog);
        let lexer = match self.lexer {
            Some(Ok(lexer)) => Some(lexer),
            Some(Err(reason)) => {
                errors.push(BuildError::error(
                    ErrorCode::E2007,
                    self.catalog.text(MessageId::LexerConstruction, &[reason.as_str()]),
                ));
                None
            }
            None => {
                errors.push(BuildError::error(
                    ErrorCode::E2007,
                    self.catalog.text(MessageId::MissingLexer, &[]),
                ));
                None
            }
        };

        match lexer {
            Some(lexer) if errors.is_empty() => {
                debug!("parser built");
                Ok(Parser::new(kind, Arc::new(configuration), lexer, self.catalog))
            }
            _ => {
                debug!(errors = errors.len(), "build failed");
                Err(BuildErrors(errors))
            }
        }
    }
}

impl<K: TokenKind, OUT: 'static> Default for ParserBuilder<K, OUT> {
    fn default() -> Self {
        ParserBuilder::new()
    }
}

impl<K: TokenKind, OUT> fmt::Debug for ParserBuilder<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserBuilder")
            .field("productions", &self.productions.len())
            .field("has_lexer", &self.lexer.is_some())
            .field("catalog", &self.catalog)
            .finish()
    }
}

/// Grammar checks on an extracted configuration.
pub(crate) fn validate<K: TokenKind, OUT>(
    configuration: &ParserConfiguration<K, OUT>,
    kind: ParserKind,
    catalog: &Catalog,
) -> Vec<BuildError> {
    let mut errors = Vec::new();

    let root = configuration.starting_rule();
    if !configuration.contains(root) {
        errors.push(BuildError::error(
            ErrorCode::E2004,
            catalog.text(MessageId::MissingStartingRule, &[root]),
        ));
    }

    for (referencing, missing) in configuration.undefined_references() {
        errors.push(BuildError::error(
            ErrorCode::E2003,
            catalog.text(MessageId::UndefinedNonTerminal, &[missing, referencing]),
        ));
    }

    if kind == ParserKind::Plain {
        for rule in configuration
            .non_terminals()
            .flat_map(|nt| nt.rules.iter())
            .filter(|rule| !rule.is_plain())
        {
            errors.push(BuildError::error(
                ErrorCode::E2005,
                catalog.text(MessageId::EbnfInPlainGrammar, &[rule.rule_string.as_str()]),
            ));
        }
    }

    let (recursive, cycles) = check_left_recursion(configuration);
    if recursive {
        let rendered = render_cycles(&cycles);
        errors.push(BuildError::fatal(
            ErrorCode::E2002,
            catalog.text(MessageId::LeftRecursion, &[rendered.as_str()]),
        ));
    }

    errors
}

#[cfg(test)]
mod tests;
