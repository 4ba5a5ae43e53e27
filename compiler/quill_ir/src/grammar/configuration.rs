//! The complete grammar a parser is built from.

use std::fmt;

use rustc_hash::FxHashMap;

use super::{NonTerminal, Operator, Rule};
use crate::TokenKind;

/// Non-terminals by name plus the starting rule.
///
/// Non-terminals keep their declaration order; lookups go through a name
/// index. Once a parser is built the configuration is only ever read.
#[derive(Debug)]
pub struct ParserConfiguration<K, OUT> {
    non_terminals: Vec<NonTerminal<K, OUT>>,
    index: FxHashMap<String, usize>,
    starting_rule: String,
}

impl<K: TokenKind, OUT> ParserConfiguration<K, OUT> {
    pub fn new(starting_rule: impl Into<String>) -> Self {
        ParserConfiguration {
            non_terminals: Vec::new(),
            index: FxHashMap::default(),
            starting_rule: starting_rule.into(),
        }
    }

    #[inline]
    pub fn starting_rule(&self) -> &str {
        &self.starting_rule
    }

    /// Look up a non-terminal by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&NonTerminal<K, OUT>> {
        self.index.get(name).map(|&i| &self.non_terminals[i])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declaration position of a non-terminal.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Non-terminals in declaration order.
    pub fn non_terminals(&self) -> impl Iterator<Item = &NonTerminal<K, OUT>> {
        self.non_terminals.iter()
    }

    pub fn len(&self) -> usize {
        self.non_terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.non_terminals.is_empty()
    }

    /// Append a rule to its non-terminal, creating the non-terminal on
    /// first occurrence.
    pub fn add_rule(&mut self, rule: Rule<K, OUT>) {
        let slot = self.slot(&rule.non_terminal);
        self.non_terminals[slot].rules.push(rule);
    }

    /// Append an operator to the named expression head.
    pub fn add_operator(&mut self, non_terminal: &str, operator: Operator<K, OUT>) {
        let slot = self.slot(non_terminal);
        self.non_terminals[slot].operators.push(operator);
    }

    fn slot(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.non_terminals.len();
        self.non_terminals.push(NonTerminal::new(name));
        self.index.insert(name.to_string(), i);
        i
    }

    /// True if no rule uses grouping, optional, repetition or alternation.
    pub fn is_plain(&self) -> bool {
        self.non_terminals
            .iter()
            .flat_map(|nt| nt.rules.iter())
            .all(Rule::is_plain)
    }

    /// References to non-terminals that are never defined, as
    /// `(referencing non-terminal, missing name)` pairs in declaration order.
    pub fn undefined_references(&self) -> Vec<(&str, &str)> {
        let mut missing = Vec::new();
        for nt in &self.non_terminals {
            for rule in &nt.rules {
                for clause in &rule.clauses {
                    clause.for_each_reference(&mut |name| {
                        if !self.contains(name) && !missing.contains(&(nt.name.as_str(), name)) {
                            missing.push((nt.name.as_str(), name));
                        }
                    });
                }
            }
        }
        missing
    }
}

impl<K: TokenKind, OUT> fmt::Display for ParserConfiguration<K, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nt in &self.non_terminals {
            for rule in &nt.rules {
                writeln!(f, "{rule}")?;
            }
            for op in &nt.operators {
                writeln!(f, "{} : {} {}", nt.name, op.kind.name(), op.operation)?;
            }
        }
        Ok(())
    }
}
