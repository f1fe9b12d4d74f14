//! Grammar symbols, rules and the SLR action tables.
//!
//! ```text
//! Re -> Or
//! Or -> Or '+' Cc | Cc
//! Cc -> Cc Pf     | Pf
//! Pf -> Pr '*'    | Pr
//! Pr -> 'e'       | '(' Or ')'
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// Grammar symbols. Terminals first, then nonterminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Plus,
    Star,
    /// The literal class `e`: an alphanumeric character, `^` or `λ`.
    Lit,
    ParenOpen,
    ParenClose,
    End,

    Re,
    Or,
    Cc,
    Pf,
    Pr,
}

impl Symbol {
    pub const ALL: [Symbol; 11] = [
        Symbol::Plus,
        Symbol::Star,
        Symbol::Lit,
        Symbol::ParenOpen,
        Symbol::ParenClose,
        Symbol::End,
        Symbol::Re,
        Symbol::Or,
        Symbol::Cc,
        Symbol::Pf,
        Symbol::Pr,
    ];

    pub fn is_terminal(self) -> bool {
        self <= Symbol::End
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Plus => "'+'",
            Symbol::Star => "'*'",
            Symbol::Lit => "[a-zA-Z0-9λ^]",
            Symbol::ParenOpen => "'('",
            Symbol::ParenClose => "')'",
            Symbol::End => "'$'",
            Symbol::Re => "RegExpr",
            Symbol::Or => "OrExpr",
            Symbol::Cc => "ConcatExpr",
            Symbol::Pf => "PostfixExpr",
            Symbol::Pr => "PrimExpr",
        };
        f.write_str(name)
    }
}

/// Grammar rules, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `Re -> Or`
    Accept,
    /// `Or -> Or '+' Cc`
    Union,
    /// `Or -> Cc`
    Alternative,
    /// `Cc -> Cc Pf`
    Concat,
    /// `Cc -> Pf`
    Factor,
    /// `Pf -> Pr '*'`
    Star,
    /// `Pf -> Pr`
    Primary,
    /// `Pr -> 'e'`
    Literal,
    /// `Pr -> '(' Or ')'`
    Group,
}

impl Rule {
    pub fn lhs(self) -> Symbol {
        match self {
            Rule::Accept => Symbol::Re,
            Rule::Union | Rule::Alternative => Symbol::Or,
            Rule::Concat | Rule::Factor => Symbol::Cc,
            Rule::Star | Rule::Primary => Symbol::Pf,
            Rule::Literal | Rule::Group => Symbol::Pr,
        }
    }

    pub fn rhs(self) -> &'static [Symbol] {
        match self {
            Rule::Accept | Rule::Alternative => &[Symbol::Or],
            Rule::Union => &[Symbol::Or, Symbol::Plus, Symbol::Cc],
            Rule::Concat => &[Symbol::Cc, Symbol::Pf],
            Rule::Factor => &[Symbol::Pf],
            Rule::Star => &[Symbol::Pr, Symbol::Star],
            Rule::Primary => &[Symbol::Pr],
            Rule::Literal => &[Symbol::Lit],
            Rule::Group => &[Symbol::ParenOpen, Symbol::Or, Symbol::ParenClose],
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ->", self.lhs())?;
        for symbol in self.rhs() {
            write!(f, " {symbol:?}")?;
        }
        Ok(())
    }
}

/// States of the SLR automaton. `S1` is the item `Re -> Or ·`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
}

impl State {
    pub const START: State = State::S0;
    pub const ACCEPT: State = State::S1;

    /// Shift on a terminal, or goto on a nonterminal.
    pub fn shift(self, symbol: Symbol) -> Option<State> {
        use State::*;

        let next = match (self, symbol) {
            (S1 | S10, Symbol::Plus) => S7,
            (S4, Symbol::Star) => S9,
            (S0 | S2 | S6 | S7 | S11, Symbol::Lit) => S5,
            (S0 | S2 | S6 | S7 | S11, Symbol::ParenOpen) => S6,
            (S10, Symbol::ParenClose) => S12,
            (S0, Symbol::Or) => S1,
            (S6, Symbol::Or) => S10,
            (S0 | S6, Symbol::Cc) => S2,
            (S7, Symbol::Cc) => S11,
            (S0 | S6 | S7, Symbol::Pf) => S3,
            (S2 | S11, Symbol::Pf) => S8,
            (S0 | S2 | S6 | S7 | S11, Symbol::Pr) => S4,
            _ => return None,
        };
        Some(next)
    }

    /// Rule to reduce by on a terminal lookahead.
    pub fn reduce(self, lookahead: Symbol) -> Option<Rule> {
        use State::*;
        use Symbol::{End, Lit, ParenClose, ParenOpen, Plus, Star};

        let rule = match (self, lookahead) {
            (S1, End) => Rule::Accept,
            (S2, Plus | ParenClose | End) => Rule::Alternative,
            (S3, Plus | Lit | ParenOpen | ParenClose | End) => Rule::Factor,
            (S4, Plus | Lit | ParenOpen | ParenClose | End) => Rule::Primary,
            (S5, Plus | Star | Lit | ParenOpen | ParenClose | End) => Rule::Literal,
            (S8, Plus | Lit | ParenOpen | ParenClose | End) => Rule::Concat,
            (S9, Plus | Lit | ParenOpen | ParenClose | End) => Rule::Star,
            (S11, Plus | ParenClose | End) => Rule::Union,
            (S12, Plus | Star | Lit | ParenOpen | ParenClose | End) => Rule::Group,
            _ => return None,
        };
        Some(rule)
    }

    /// Every symbol the state can act on: shift targets plus reduce lookaheads.
    pub fn expected(self) -> BTreeSet<Symbol> {
        Symbol::ALL
            .into_iter()
            .filter(|&symbol| {
                self.shift(symbol).is_some()
                    || (symbol.is_terminal() && self.reduce(symbol).is_some())
            })
            .collect()
    }
}
