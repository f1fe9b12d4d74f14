use std::fmt;

use renfa_core::EPSILON_SYMBOL;

/// One step of the postfix program the parser emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Push a two-state fragment for a literal (`^`/`λ` mean epsilon).
    Push(char),
    Union,
    Concat,
    Kleene,
}

impl Instruction {
    /// Whether a pushed symbol spells the empty string.
    pub fn is_empty_literal(ch: char) -> bool {
        ch == '^' || ch == EPSILON_SYMBOL
    }

    /// Operator that pops fragments, `None` for pushes.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Instruction::Push(_) => None,
            Instruction::Union => Some(Operator::Union),
            Instruction::Concat => Some(Operator::Concat),
            Instruction::Kleene => Some(Operator::Kleene),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(ch) => write!(f, "push {ch}"),
            Instruction::Union => f.write_str("union"),
            Instruction::Concat => f.write_str("concat"),
            Instruction::Kleene => f.write_str("kleene"),
        }
    }
}

/// Consumers of the fragment stack, named in underflow errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Union,
    Concat,
    Kleene,
    /// Taking the finished automaton off the stack.
    Finish,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Union => "union",
            Operator::Concat => "concat",
            Operator::Kleene => "kleene",
            Operator::Finish => "finish",
        };
        f.write_str(name)
    }
}
