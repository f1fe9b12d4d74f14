//! Shift-reduce driver.
//!
//! All parser state (stack, lookahead, pending goto symbol) lives in a
//! [`Driver`] built fresh for each call, so concurrent parses never share
//! anything.

use super::grammar::{Rule, State, Symbol};
use super::lexer::{Lexer, Token, lex};
use crate::compile::Instruction;
use crate::{CompileError, Result};

/// Parse a pattern into its postfix instruction stream.
pub fn parse(pattern: &str) -> Result<Vec<Instruction>> {
    Driver::new(lex(pattern)).run()
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    state: State,
    text: Option<char>,
}

struct Driver<'s> {
    lexer: Lexer<'s>,
    stack: Vec<Frame>,
    code: Vec<Instruction>,
}

impl<'s> Driver<'s> {
    fn new(lexer: Lexer<'s>) -> Self {
        Self {
            lexer,
            stack: vec![Frame {
                state: State::START,
                text: None,
            }],
            code: Vec::new(),
        }
    }

    fn state(&self) -> State {
        self.stack.last().map_or(State::START, |frame| frame.state)
    }

    fn advance(&mut self) -> Result<Token> {
        match self.lexer.next_token() {
            Some(token) => token,
            // Only reachable if the parser shifted the end marker.
            None => Err(CompileError::UnknownToken {
                position: self.lexer.source().chars().count(),
            }),
        }
    }

    fn run(mut self) -> Result<Vec<Instruction>> {
        let mut lookahead = self.advance()?;
        let mut pending: Option<Symbol> = None;

        loop {
            let state = self.state();
            let symbol = pending.unwrap_or(lookahead.symbol);

            if let Some(next) = state.shift(symbol) {
                log::trace!("shift {symbol:?}: {state:?} -> {next:?}");
                if pending.take().is_some() {
                    self.stack.push(Frame {
                        state: next,
                        text: None,
                    });
                } else {
                    self.stack.push(Frame {
                        state: next,
                        text: Some(lookahead.text),
                    });
                    lookahead = self.advance()?;
                }

                if next == State::ACCEPT && lookahead.is_end_marker() {
                    log::debug!("parsed {} instructions", self.code.len());
                    return Ok(self.code);
                }
                continue;
            }

            let rule = match pending {
                None => state.reduce(lookahead.symbol),
                Some(_) => None,
            };
            match rule {
                // Only a typed `$` gets here; the real end accepts after the goto.
                Some(Rule::Accept) | None => return Err(self.error(state, &lookahead)),
                Some(rule) => {
                    log::trace!("reduce {rule} on {:?} in {state:?}", lookahead.symbol);
                    self.reduce(rule);
                    pending = Some(rule.lhs());
                }
            }
        }
    }

    fn reduce(&mut self, rule: Rule) {
        let len = rule.rhs().len();
        let handle = self.stack.split_off(self.stack.len().saturating_sub(len));

        let instruction = match rule {
            Rule::Union => Some(Instruction::Union),
            Rule::Concat => Some(Instruction::Concat),
            Rule::Star => Some(Instruction::Kleene),
            Rule::Literal => handle.first().and_then(|frame| frame.text).map(Instruction::Push),
            Rule::Accept | Rule::Alternative | Rule::Factor | Rule::Primary | Rule::Group => None,
        };
        if let Some(instruction) = instruction {
            self.code.push(instruction);
        }
    }

    fn error(&self, state: State, lookahead: &Token) -> CompileError {
        let mut expected = state.expected();
        // A typed `$` can never stand in for the appended end marker.
        if lookahead.symbol == Symbol::End && !lookahead.is_end_marker() {
            expected.remove(&Symbol::End);
        }
        CompileError::ParseError {
            position: lookahead.position,
            expected,
            got: lookahead.symbol,
        }
    }
}
