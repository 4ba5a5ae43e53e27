use super::MessageId;

pub(super) fn template(id: MessageId) -> &'static str {
    match id {
        MessageId::UnexpectedToken => "unexpected token '{0}' ({1})",
        MessageId::UnexpectedTokenExpecting => {
            "unexpected token '{0}' ({1}), expecting one of {2}"
        }
        MessageId::UnexpectedEos => "unexpected end of input",
        MessageId::UnexpectedEosExpecting => "unexpected end of input, expecting one of {2}",
        MessageId::UnrecognizedInput => "unrecognized input '{0}'",
        MessageId::MalformedRule => "rule error [{0}] : {1}",
        MessageId::LeftRecursion => "left recursion detected :\n{0}",
        MessageId::UndefinedNonTerminal => "non-terminal '{0}' used by '{1}' is never defined",
        MessageId::MissingStartingRule => "starting rule '{0}' is not defined",
        MessageId::EbnfInPlainGrammar => {
            "rule [{0}] uses EBNF constructs, which the plain parser does not support"
        }
        MessageId::InvalidOperator => "invalid operator declaration [{0}] : {1}",
        MessageId::OperatorNotATerminal => "'{0}' is not a token kind",
        MessageId::InvalidPrecedence => "'{0}' is not a valid precedence",
        MessageId::UnaryAssociativity => "{0} operators take no associativity",
        MessageId::LexerConstruction => "lexer construction failed : {0}",
        MessageId::MissingLexer => "no lexer configured",
        MessageId::MissingCallback => "node '{0}' has no reduction callback",
    }
}
