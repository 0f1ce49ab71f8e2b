#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::float_cmp
)]

//! Tally, a calculator core for arithmetic expressions.
//!
//! The easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! use tally::Outcome;
//! assert_eq!(tally::eval("3 + 5 * 2"), Ok(Outcome::Value(13.0)));
//! ```
//!
//! Variables live in a [`Calculator`](struct.Calculator.html), which keeps
//! them from one evaluation to the next. An assignment has no numeric result:
//!
//! ```
//! use tally::Calculator;
//!
//! let mut calculator = Calculator::new();
//! assert_eq!(calculator.evaluate("a = 3.5").unwrap().formatted(), None);
//! assert_eq!(
//!     calculator.evaluate("2 * a").unwrap().formatted(),
//!     Some("7.000000".to_string())
//! );
//! ```
//!
//! Rounding and angle units are set through a [`Config`](struct.Config.html):
//!
//! ```
//! use tally::{AngleUnit, Calculator, Config, Outcome};
//!
//! let config = Config::new().angle_unit(AngleUnit::Degrees).result_precision(3);
//! let mut calculator = Calculator::with_config(config);
//! let evaluation = calculator.evaluate("sin(30)").unwrap();
//! assert_eq!(*evaluation.outcome(), Outcome::Value(0.5));
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - decimal literals: `12`, `0.5`, `.25`, optionally signed when they start
//!   an expression or follow an operator or a parenthesis;
//! - left and right parenthesis;
//! - mathematical operators: `+`, `-`, `*`, `/`, `^` for exponentiation and
//!   the postfix `!` for factorial;
//! - functions: `sqrt`, `abs`, `log` (natural logarithm), `floor`, `ceil`,
//!   `round`, `sin`, `cos`, `tan`, `asin`, `acos`, `atan` and `rand()`;
//! - byte units, written after a value: `mb`, `gb`, `tb` and `pb`, powers of
//!   1024;
//! - variables, and assignment with `=`. Variables names are ASCII only,
//!   start with a letter or `_`, and can contain letters, digits and `_`.
//!
//! Operators of equal precedence are applied left to right, including `^`:
//! `2^3^2` is `64`.
//!
//! A `-` in front of anything but a literal negates it, and binds tighter than
//! every operator and function: `2^-x` is `2^(-x)`, and `-x^2` is `(-x)^2`.
//!
//! # Warnings
//!
//! Evaluation does not fail on malformed input. A division by zero or an
//! inverse trigonometric function outside `[-1, 1]` yields `0`, and unknown
//! tokens or undefined variables read as `0`. Each of these is reported in the
//! evaluation's [`Warnings`](struct.Warnings.html):
//!
//! ```
//! use tally::{Calculator, Warning};
//!
//! let mut calculator = Calculator::new();
//! let evaluation = calculator.evaluate("1 / 0").unwrap();
//! assert_eq!(evaluation.formatted(), Some("0.000000".to_string()));
//! assert_eq!(evaluation.warnings().iter().next(), Some(&Warning::DivisionByZero));
//! ```
//!
//! # Technical details
//!
//! tally uses a Shunting-Yard algorithm to convert the expressions to postfix
//! order, then evaluates the postfix sequence with a stack. It works only with
//! `f64` data.

#[macro_use]
extern crate lazy_static;

mod calculator;
mod config;
mod error;
mod lexer;
mod list;
mod postfix;
mod random;
mod shunting;
mod token;
mod util;
mod variables;
mod warnings;

pub use calculator::{eval, Calculator, Evaluation};
pub use config::{AngleUnit, Config, UndefinedVariable};
pub use error::Error;
pub use lexer::{is_variable, Lexer};
pub use list::TokenList;
pub use postfix::{Outcome, PostfixEvaluator};
pub use random::{ClockRandom, RandomSource, SeededRandom};
pub use shunting::to_postfix;
pub use token::{Function, Op, Token, Unit};
pub use util::{format_number, round_to, FUNCTIONS, ONE_GB, ONE_MB, ONE_PB, ONE_TB, UNITS};
pub use variables::VariableStore;
pub use warnings::{EvaluationFlags, Warning, Warnings};
