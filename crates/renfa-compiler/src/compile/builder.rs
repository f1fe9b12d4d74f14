//! Stack machine that turns an instruction stream into an NFA.

use renfa_core::{Edge, Label, Nfa, StateId};

use super::fragment::{Fragment, Op};
use super::instruction::{Instruction, Operator};
use crate::{CompileError, Result};

/// Execute `code` and return the resulting automaton.
///
/// State ids come from a counter local to this call. They are unique but
/// may have gaps where states were merged away; the compile pipeline runs
/// [`Nfa::compact`] afterwards.
pub fn build(code: &[Instruction], optimize: bool) -> Result<Nfa> {
    let mut builder = Builder::new(optimize);
    for &instruction in code {
        log::trace!("exec {instruction}");
        builder.execute(instruction)?;
    }
    builder.finish()
}

struct Builder {
    optimize: bool,
    next_id: StateId,
    stack: Vec<Fragment>,
}

impl Builder {
    fn new(optimize: bool) -> Self {
        Self {
            optimize,
            next_id: 0,
            stack: Vec::new(),
        }
    }

    fn fresh(&mut self) -> StateId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn pop(&mut self, operator: Operator) -> Result<Fragment> {
        self.stack
            .pop()
            .ok_or(CompileError::StackUnderflow { operator })
    }

    /// Pop the right operand, then the left one.
    fn pop_pair(&mut self, operator: Operator) -> Result<(Fragment, Fragment)> {
        if self.stack.len() < 2 {
            return Err(CompileError::StackUnderflow { operator });
        }
        let y = self.pop(operator)?;
        let x = self.pop(operator)?;
        Ok((x, y))
    }

    fn execute(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            Instruction::Push(ch) => self.push(ch),
            Instruction::Union => self.union()?,
            Instruction::Concat => self.concat()?,
            Instruction::Kleene => self.kleene()?,
        }
        Ok(())
    }

    fn push(&mut self, ch: char) {
        let label = if Instruction::is_empty_literal(ch) {
            Label::Epsilon
        } else {
            Label::Char(ch)
        };
        let init = self.fresh();
        let fin = self.fresh();
        self.stack.push(Fragment::primitive(init, fin, label));
    }

    fn union(&mut self) -> Result<()> {
        let (x, y) = self.pop_pair(Operator::Union)?;

        if self.optimize {
            match (x.last, y.last) {
                // r* + λ, λ + λ
                (Op::Kleene | Op::Lambda, Op::Lambda) => {
                    self.stack.push(x);
                    return Ok(());
                }
                // λ + r*
                (Op::Lambda, Op::Kleene) => {
                    self.stack.push(y);
                    return Ok(());
                }
                _ => {}
            }
        }

        let init = self.fresh();
        let fin = self.fresh();
        let mut links = Vec::new();
        let mut operands = [x, y];

        for operand in &mut operands {
            if self.optimize && operand.heading != Op::Kleene {
                operand.merge(operand.init, init);
            } else {
                links.push(Edge::epsilon(init, operand.init));
            }
        }
        for operand in &mut operands {
            if self.optimize && operand.trailing != Op::Kleene {
                operand.merge(operand.fin, fin);
            } else {
                links.push(Edge::epsilon(operand.fin, fin));
            }
        }

        let mut out = Fragment::shell(init, fin, Op::Union);
        out.edges = links;
        for operand in operands {
            out.absorb(operand);
        }
        self.stack.push(out);
        Ok(())
    }

    fn concat(&mut self) -> Result<()> {
        let (mut x, mut y) = self.pop_pair(Operator::Concat)?;

        if self.optimize {
            if x.last == Op::Lambda {
                self.stack.push(y);
                return Ok(());
            }
            if y.last == Op::Lambda {
                self.stack.push(x);
                return Ok(());
            }
        }

        let heading = x.heading;
        let trailing = y.trailing;

        if x.trailing != Op::Kleene && y.heading != Op::Kleene {
            y.merge(y.init, x.fin);
            x.fin = y.fin;
            x.absorb(y);
        } else {
            let mut edges = vec![Edge::epsilon(x.fin, y.init)];
            edges.append(&mut x.edges);
            x.edges = edges;
            x.fin = y.fin;
            x.absorb(y);
        }

        x.heading = heading;
        x.trailing = trailing;
        x.last = Op::Concat;
        self.stack.push(x);
        Ok(())
    }

    fn kleene(&mut self) -> Result<()> {
        let mut x = self.pop(Operator::Kleene)?;

        // λ* = λ, (r*)* = r*
        if self.optimize && matches!(x.last, Op::Lambda | Op::Kleene) {
            self.stack.push(x);
            return Ok(());
        }

        let mut links = Vec::new();

        // The loop must not be re-entered from inside the operand.
        if x.heading == Op::Kleene {
            let entry = self.fresh();
            links.push(Edge::epsilon(entry, x.init));
            x.states.push(entry);
            x.init = entry;
        }

        if self.optimize {
            if x.trailing == Op::Kleene {
                links.push(Edge::epsilon(x.fin, x.init));
            } else {
                let (fin, init) = (x.fin, x.init);
                x.merge(fin, init);
            }
            x.fin = x.init;
        } else {
            if x.trailing == Op::Kleene {
                let exit = self.fresh();
                links.push(Edge::epsilon(x.fin, exit));
                x.states.push(exit);
                x.fin = exit;
            }
            links.push(Edge::epsilon(x.init, x.fin));
            links.push(Edge::epsilon(x.fin, x.init));
        }

        links.append(&mut x.edges);
        x.edges = links;
        x.heading = Op::Kleene;
        x.trailing = Op::Kleene;
        x.last = Op::Kleene;
        self.stack.push(x);
        Ok(())
    }

    fn finish(mut self) -> Result<Nfa> {
        match self.stack.len() {
            0 => Err(CompileError::StackUnderflow {
                operator: Operator::Finish,
            }),
            1 => {
                let fragment = self.pop(Operator::Finish)?;
                let nfa = fragment.into_nfa();
                log::debug!(
                    "built {} states, {} edges",
                    nfa.state_count(),
                    nfa.edge_count()
                );
                Ok(nfa)
            }
            count => Err(CompileError::DanglingFragments { count }),
        }
    }
}
