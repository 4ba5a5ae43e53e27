//! Operator metadata for expression heads.

use std::fmt;

/// Position of an operator relative to its operand(s).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affix {
    Prefix,
    Infix,
    Postfix,
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affix::Prefix => write!(f, "prefix"),
            Affix::Infix => write!(f, "infix"),
            Affix::Postfix => write!(f, "postfix"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Associativity {
    Left,
    Right,
    /// Unary operators have no associativity.
    None,
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Associativity::Left => write!(f, "left"),
            Associativity::Right => write!(f, "right"),
            Associativity::None => write!(f, "none"),
        }
    }
}

/// Affix, precedence and associativity of one operator.
///
/// Higher precedence binds tighter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationMetadata {
    pub affix: Affix,
    pub precedence: u32,
    pub associativity: Associativity,
}

impl OperationMetadata {
    pub const fn infix(precedence: u32, associativity: Associativity) -> Self {
        OperationMetadata {
            affix: Affix::Infix,
            precedence,
            associativity,
        }
    }

    pub const fn prefix(precedence: u32) -> Self {
        OperationMetadata {
            affix: Affix::Prefix,
            precedence,
            associativity: Associativity::None,
        }
    }

    pub const fn postfix(precedence: u32) -> Self {
        OperationMetadata {
            affix: Affix::Postfix,
            precedence,
            associativity: Associativity::None,
        }
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.affix == Affix::Infix
    }

    #[inline]
    pub fn is_unary(&self) -> bool {
        !self.is_binary()
    }

    /// Minimum precedence for the right operand of an infix operator.
    ///
    /// Left-associative operators only let strictly tighter operators into
    /// their right operand; right-associative ones also admit themselves.
    /// Widened so that one above `u32::MAX` still excludes every operator.
    #[inline]
    pub fn right_operand_threshold(&self) -> u64 {
        let precedence = u64::from(self.precedence);
        match self.associativity {
            Associativity::Right => precedence,
            Associativity::Left | Associativity::None => precedence + 1,
        }
    }
}

impl fmt::Display for OperationMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.affix {
            Affix::Infix => write!(f, "{} {} {}", self.affix, self.precedence, self.associativity),
            Affix::Prefix | Affix::Postfix => write!(f, "{} {}", self.affix, self.precedence),
        }
    }
}
