//! Soft warnings raised by an evaluation.

use std::fmt::{self, Display, Formatter};

use crate::list::TokenList;
use crate::token::Token;
use crate::variables::VariableStore;

/// Warning flags raised while evaluating a single expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationFlags {
    /// A division by zero happened and produced 0
    pub division_by_zero: bool,
    /// An inverse trigonometric function got an operand outside `[-1, 1]` and
    /// produced 0
    pub trigonometric_domain: bool,
}

impl EvaluationFlags {
    /// Lower both flags
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A reason to doubt an evaluation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A token that is not a number, operator, function, unit, parenthesis or
    /// defined variable
    InvalidToken(String),
    /// A division by zero
    DivisionByZero,
    /// An inverse trigonometric function outside its domain
    TrigonometricDomain,
}

impl Display for Warning {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::InvalidToken(ref token) => write!(fmt, "Warning: invalid token '{}'", token),
            Self::DivisionByZero => write!(fmt, "Warning: division by zero"),
            Self::TrigonometricDomain => {
                write!(fmt, "Warning: invalid value for a trigonometric function")
            }
        }
    }
}

/// Every warning of an evaluation, in the order they were found.
///
/// The `Display` implementation lists one warning per line and ends with a
/// notice that the result may be inaccurate, or prints nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    warnings: Vec<Warning>,
}

impl Warnings {
    /// Check if the result should be considered inaccurate
    #[must_use]
    pub fn is_inaccurate(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of warnings
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Check if there is no warning
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Iterate over the warnings
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.warnings.iter()
    }
}

impl Display for Warnings {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        if self.warnings.is_empty() {
            return Ok(());
        }
        for warning in &self.warnings {
            writeln!(fmt, "{}", warning)?;
        }
        write!(fmt, "The result may be inaccurate")
    }
}

/// Gather the warnings of an evaluation, after it ran.
///
/// A name is only valid if it is a defined variable once the evaluation is
/// over, so `x = 5` does not warn about `x`, while `y + 1` with `y` undefined
/// does.
pub fn collect(
    infix: &TokenList<Token>,
    variables: &VariableStore,
    flags: EvaluationFlags,
) -> Warnings {
    let mut warnings: Vec<Warning> = infix
        .iter()
        .filter(|token| !is_valid(token, variables))
        .map(|token| Warning::InvalidToken(token.to_string()))
        .collect();

    if flags.division_by_zero {
        warnings.push(Warning::DivisionByZero);
    }
    if flags.trigonometric_domain {
        warnings.push(Warning::TrigonometricDomain);
    }
    Warnings { warnings }
}

fn is_valid(token: &Token, variables: &VariableStore) -> bool {
    match token {
        Token::Unknown(_) => false,
        Token::Name(name) => variables.contains(name),
        _ => true,
    }
}
