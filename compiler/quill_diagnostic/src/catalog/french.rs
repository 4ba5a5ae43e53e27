use super::MessageId;

pub(super) fn template(id: MessageId) -> &'static str {
    match id {
        MessageId::UnexpectedToken => "jeton inattendu '{0}' ({1})",
        MessageId::UnexpectedTokenExpecting => "jeton inattendu '{0}' ({1}), attendu l'un de {2}",
        MessageId::UnexpectedEos => "fin d'entrée inattendue",
        MessageId::UnexpectedEosExpecting => "fin d'entrée inattendue, attendu l'un de {2}",
        MessageId::UnrecognizedInput => "entrée non reconnue '{0}'",
        MessageId::MalformedRule => "erreur de règle [{0}] : {1}",
        MessageId::LeftRecursion => "récursivité à gauche détectée :\n{0}",
        MessageId::UndefinedNonTerminal => {
            "le non-terminal '{0}' utilisé par '{1}' n'est jamais défini"
        }
        MessageId::MissingStartingRule => "la règle de départ '{0}' n'est pas définie",
        MessageId::EbnfInPlainGrammar => {
            "la règle [{0}] utilise des constructions EBNF, non supportées par l'analyseur simple"
        }
        MessageId::InvalidOperator => "déclaration d'opérateur invalide [{0}] : {1}",
        MessageId::OperatorNotATerminal => "'{0}' n'est pas un type de jeton",
        MessageId::InvalidPrecedence => "'{0}' n'est pas une précédence valide",
        MessageId::UnaryAssociativity => "les opérateurs {0} n'ont pas d'associativité",
        MessageId::LexerConstruction => "échec de construction du lexeur : {0}",
        MessageId::MissingLexer => "aucun lexeur configuré",
        MessageId::MissingCallback => "le nœud '{0}' n'a pas de fonction de réduction",
    }
}
