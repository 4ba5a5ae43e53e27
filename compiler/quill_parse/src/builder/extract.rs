//! Productions to configuration.

use quill_diagnostic::{Catalog, ErrorCode, MessageId};
use quill_ir::{
    Affix, Associativity, OperationMetadata, Operator, ParserConfiguration, Rule, TokenKind,
};
use tracing::{debug, trace};

use super::{BuildError, Production};
use crate::meta::{MetaGrammar, OperatorSyntax, RuleBody};

/// Parse every production and collect the rules by non-terminal.
///
/// Rules and operators keep registration order. Any malformed rule string
/// or operator declaration fails the whole extraction.
pub(super) fn configuration<K: TokenKind, OUT>(
    productions: &[Production<K, OUT>],
    root: &str,
    catalog: &Catalog,
) -> Result<ParserConfiguration<K, OUT>, Vec<BuildError>> {
    let meta = MetaGrammar::<K>::new();
    let mut configuration = ParserConfiguration::new(root);
    let mut errors = Vec::new();

    for production in productions {
        let rule_string = production.rule_string.as_str();
        let syntax = match meta.parse(rule_string) {
            Ok(syntax) => syntax,
            Err(parse_errors) => {
                let messages: Vec<String> =
                    parse_errors.iter().map(|err| err.message(catalog)).collect();
                let messages = messages.join("\n");
                debug!(production = %production.name, rule = rule_string, "malformed rule");
                errors.push(BuildError::fatal(
                    ErrorCode::E2001,
                    catalog.text(MessageId::MalformedRule, &[rule_string, messages.as_str()]),
                ));
                continue;
            }
        };

        match syntax.body {
            RuleBody::Clauses(branches) => {
                for clauses in branches {
                    trace!(non_terminal = %syntax.name, production = %production.name, "adding rule");
                    configuration.add_rule(
                        Rule::new(syntax.name.as_str(), clauses, production.callback.clone())
                            .with_rule_string(rule_string)
                            .with_production(production.name.as_str()),
                    );
                }
            }
            RuleBody::Operator(operator) => match operation::<K>(&operator, catalog) {
                Ok((kind, operation)) => {
                    trace!(non_terminal = %syntax.name, %operation, "adding operator");
                    configuration.add_operator(
                        &syntax.name,
                        Operator::new(kind, operation, production.callback.clone())
                            .with_rule_string(rule_string)
                            .with_production(production.name.as_str()),
                    );
                }
                Err(reason) => errors.push(BuildError::fatal(
                    ErrorCode::E2006,
                    catalog.text(MessageId::InvalidOperator, &[rule_string, reason.as_str()]),
                )),
            },
        }
    }

    if errors.is_empty() {
        Ok(configuration)
    } else {
        Err(errors)
    }
}

/// Resolve an operator declaration, or say what is wrong with it.
///
/// Infix operators without an associativity are left-associative.
fn operation<K: TokenKind>(
    operator: &OperatorSyntax,
    catalog: &Catalog,
) -> Result<(K, OperationMetadata), String> {
    let Some(kind) = K::from_name(&operator.symbol) else {
        return Err(catalog.text(MessageId::OperatorNotATerminal, &[operator.symbol.as_str()]));
    };
    let Ok(precedence) = operator.precedence.parse::<u32>() else {
        return Err(catalog.text(MessageId::InvalidPrecedence, &[operator.precedence.as_str()]));
    };

    let operation = match (operator.affix, operator.associativity) {
        (Affix::Infix, associativity) => {
            OperationMetadata::infix(precedence, associativity.unwrap_or(Associativity::Left))
        }
        (Affix::Prefix, None) => OperationMetadata::prefix(precedence),
        (Affix::Postfix, None) => OperationMetadata::postfix(precedence),
        (affix @ (Affix::Prefix | Affix::Postfix), Some(_)) => {
            let affix = affix.to_string();
            return Err(catalog.text(MessageId::UnaryAssociativity, &[affix.as_str()]));
        }
    };
    Ok((kind, operation))
}
