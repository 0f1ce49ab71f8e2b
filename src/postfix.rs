//! Postfix evaluation.

use std::f64::consts::PI;

use tracing::{trace, warn};

use crate::config::{AngleUnit, Config, UndefinedVariable};
use crate::error::Error;
use crate::list::TokenList;
use crate::random::RandomSource;
use crate::token::{Function, Op, Token, Unit};
use crate::util::{factorial, round_to};
use crate::variables::VariableStore;
use crate::warnings::EvaluationFlags;

/// What an expression produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A numeric result
    Value(f64),
    /// The expression ended with an assignment and has no numeric result.
    ///
    /// An assignment nested in a larger expression still yields the assigned
    /// value to it: `(x = 5) + 1` defines `x` and gives `Value(6.0)`.
    Defined {
        /// Name of the variable
        name: String,
        /// Value it now holds
        value: f64,
    },
}

impl Outcome {
    /// The numeric result, or `None` for an assignment
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Value(value) => Some(value),
            Self::Defined { .. } => None,
        }
    }
}

/// Element of the evaluation stack
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Number(f64),
    Name(String),
    Invalid(String),
}

/// Evaluates a postfix sequence against the state of a calculator.
///
/// Missing operands read as `0`: evaluation never stops because the
/// expression was malformed.
pub struct PostfixEvaluator<'a> {
    config: &'a Config,
    variables: &'a mut VariableStore,
    flags: &'a mut EvaluationFlags,
    random: &'a mut dyn RandomSource,
}

impl<'a> PostfixEvaluator<'a> {
    /// Create an evaluator borrowing the calculator state
    pub fn new(
        config: &'a Config,
        variables: &'a mut VariableStore,
        flags: &'a mut EvaluationFlags,
        random: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            config,
            variables,
            flags,
            random,
        }
    }

    /// Evaluate `postfix`. The result is the operand left on top of the
    /// stack, or `0` if the stack ended empty.
    pub fn evaluate(&mut self, postfix: &TokenList<Token>) -> Result<Outcome, Error> {
        let mut stack = TokenList::new();
        let mut defined = None;

        for token in postfix {
            let result = match *token {
                Token::Number(value) => {
                    stack.push(Operand::Number(value));
                    continue;
                }
                Token::Name(ref name) => {
                    stack.push(Operand::Name(name.clone()));
                    continue;
                }
                Token::Unknown(ref text) => {
                    stack.push(Operand::Invalid(text.clone()));
                    continue;
                }
                Token::LParen | Token::RParen => continue,
                Token::Op(Op::Assign) => {
                    let right = stack.pop();
                    let left = stack.pop();
                    let (value, name) = self.assign(left, right.as_ref())?;
                    defined = name.map(|name| (name, value));
                    value
                }
                Token::Op(op) => {
                    defined = None;
                    self.apply_op(op, &mut stack)?
                }
                Token::Function(function) => {
                    defined = None;
                    self.apply_function(function, &mut stack)?
                }
                Token::Unit(unit) => {
                    defined = None;
                    self.apply_unit(unit, &mut stack)?
                }
            };
            trace!(%token, result, "applied");
            stack.push(Operand::Number(result));
        }

        let result = match stack.pop() {
            Some(operand) => self.resolve(Some(&operand))?,
            None => 0.0,
        };
        let result = self.round_result(result);

        Ok(match defined {
            Some((name, value)) => Outcome::Defined { name, value },
            None => Outcome::Value(result),
        })
    }

    /// Define the left operand with the value of the right one. Gives back
    /// the value, which is pushed for the enclosing expression, and the name
    /// of the variable if the left operand was one.
    fn assign(
        &mut self,
        left: Option<Operand>,
        right: Option<&Operand>,
    ) -> Result<(f64, Option<String>), Error> {
        let value = self.resolve(right)?;
        match left {
            Some(Operand::Name(name)) => {
                self.variables.define(&name, value);
                Ok((value, Some(name)))
            }
            other => {
                warn!(operand = ?other, "cannot assign to a non-variable");
                Ok((value, None))
            }
        }
    }

    fn apply_op(&mut self, op: Op, stack: &mut TokenList<Operand>) -> Result<f64, Error> {
        let right = stack.pop();
        let left = if op.arity() == 2 { stack.pop() } else { None };
        let y = self.operand(right.as_ref())?;
        let x = self.operand(left.as_ref())?;

        let result = match op {
            Op::Plus => x + y,
            Op::Minus => x - y,
            Op::Mul => x * y,
            Op::Div => {
                if y == 0.0 {
                    warn!(dividend = x, "division by zero");
                    self.flags.division_by_zero = true;
                    0.0
                } else {
                    x / y
                }
            }
            Op::Exp => libm::pow(x, y),
            #[allow(clippy::cast_possible_truncation)]
            Op::Factorial => factorial(y as i64),
            Op::Negate => -y,
            // handled by `assign`
            Op::Assign => y,
        };
        Ok(self.round_result(result))
    }

    fn apply_function(
        &mut self,
        function: Function,
        stack: &mut TokenList<Operand>,
    ) -> Result<f64, Error> {
        if function == Function::Rand {
            let value = self.random.next_unit();
            return Ok(self.round_result(value));
        }

        let operand = stack.pop();
        let mut y = self.operand(operand.as_ref())?;

        if function.is_inverse_trigonometric() && !(-1.0..=1.0).contains(&y) {
            warn!(%function, operand = y, "outside the trigonometric domain");
            self.flags.trigonometric_domain = true;
            return Ok(0.0);
        }
        if function.is_trigonometric() && self.config.angles() == AngleUnit::Degrees {
            y = y / 180.0 * PI;
        }

        let result = match function {
            Function::Sqrt => y.sqrt(),
            Function::Abs => y.abs(),
            Function::Log => y.ln(),
            Function::Floor => y.floor(),
            Function::Ceil => y.ceil(),
            Function::Round => libm::round(y),
            Function::Sin => y.sin(),
            Function::Cos => y.cos(),
            Function::Tan => y.tan(),
            Function::Asin => y.asin(),
            Function::Acos => y.acos(),
            Function::Atan => y.atan(),
            Function::Rand => unreachable!("rand takes no operand and returns early"),
        };
        Ok(self.round_result(result))
    }

    fn apply_unit(&mut self, unit: Unit, stack: &mut TokenList<Operand>) -> Result<f64, Error> {
        let operand = stack.pop();
        let y = self.operand(operand.as_ref())?;
        Ok(self.round_result(y * unit.factor()))
    }

    /// Resolve an operand about to be fed to an operator, rounded to the input
    /// precision
    fn operand(&self, operand: Option<&Operand>) -> Result<f64, Error> {
        let value = self.resolve(operand)?;
        Ok(match self.config.input_decimals() {
            Some(decimals) => round_to(value, decimals),
            None => value,
        })
    }

    fn resolve(&self, operand: Option<&Operand>) -> Result<f64, Error> {
        match operand {
            Some(Operand::Number(value)) => Ok(*value),
            Some(Operand::Name(name)) => match self.config.undefined_variables() {
                UndefinedVariable::Zero => Ok(self.variables.value_or_zero(name)),
                UndefinedVariable::Reject => self
                    .variables
                    .lookup(name)
                    .ok_or_else(|| Error::NameError(name.clone())),
            },
            Some(Operand::Invalid(_)) | None => Ok(0.0),
        }
    }

    fn round_result(&self, value: f64) -> f64 {
        match self.config.result_decimals() {
            Some(decimals) => round_to(value, decimals),
            None => value,
        }
    }
}
