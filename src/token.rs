use std::fmt::{self, Display, Formatter};

use crate::util::{ONE_GB, ONE_MB, ONE_PB, ONE_TB};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An identifier that is not a function or a unit: a variable reference
    /// or an assignment target
    Name(String),
    /// An operator: binary, postfix factorial or prefix negation
    Op(Op),
    /// A unary function, written before its argument
    Function(Function),
    /// A byte-unit suffix, written after its operand
    Unit(Unit),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// Text the lexer could not classify
    Unknown(String),
}

impl Token {
    /// Get the precedence of this token when it sits on the operator stack.
    /// Functions bind tighter than any binary or postfix operator, negation
    /// tighter still, and a left parenthesis never gets popped by an operator.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Op(op) => op.precedence(),
            Self::Function(_) => Function::PRECEDENCE,
            _ => 0,
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Name(text) | Self::Unknown(text) => write!(fmt, "{}", text),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Function(function) => write!(fmt, "{}", function),
            Self::Unit(unit) => write!(fmt, "{}", unit),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
    /// `!`, postfix
    Factorial,
    /// `-` in prefix position before anything but a literal. Binds tighter
    /// than every other operator and function, like a signed literal: `-x^2`
    /// is `(-x)^2`, and `2^-x` is `2^(-x)`.
    Negate,
}

impl Op {
    /// Get the operator for a single character, if any
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Assign),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            '!' => Some(Self::Factorial),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Assign => 1,
            Self::Plus | Self::Minus => 2,
            Self::Mul | Self::Div => 3,
            Self::Exp => 4,
            Self::Factorial => 5,
            Self::Negate => 7,
        }
    }

    /// Number of operands consumed from the evaluation stack
    pub fn arity(self) -> usize {
        match self {
            Self::Factorial | Self::Negate => 1,
            _ => 2,
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let symbol = match self {
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
            Self::Factorial => "!",
            Self::Negate => "neg",
        };
        write!(fmt, "{}", symbol)
    }
}

/// Unary functions known to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Square root
    Sqrt,
    /// Absolute value
    Abs,
    /// Natural logarithm
    Log,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceil,
    /// Rounds half away from zero
    Round,
    /// Ignores any operand and draws from the calculator's random source
    Rand,
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Arcsine
    Asin,
    /// Arccosine
    Acos,
    /// Arctangent
    Atan,
}

impl Function {
    /// Every function, in the order they are registered
    pub const ALL: [Self; 13] = [
        Self::Sqrt,
        Self::Abs,
        Self::Log,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Rand,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
    ];

    const PRECEDENCE: u8 = 6;

    /// The name used to call this function in an expression
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Log => "log",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Rand => "rand",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
        }
    }

    /// Number of operands consumed from the evaluation stack
    pub fn arity(self) -> usize {
        match self {
            Self::Rand => 0,
            _ => 1,
        }
    }

    /// Check if the function takes an angle and is affected by degree mode
    pub fn is_trigonometric(self) -> bool {
        matches!(
            self,
            Self::Sin | Self::Cos | Self::Tan | Self::Asin | Self::Acos | Self::Atan
        )
    }

    /// Check if the function only accepts operands in `[-1, 1]`
    pub fn is_inverse_trigonometric(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

/// Byte-unit suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Mebibyte, 1024²
    Mb,
    /// Gibibyte, 1024³
    Gb,
    /// Tebibyte, 1024⁴
    Tb,
    /// Pebibyte, 1024⁵
    Pb,
}

impl Unit {
    /// Every unit, smallest first
    pub const ALL: [Self; 4] = [Self::Mb, Self::Gb, Self::Tb, Self::Pb];

    /// The suffix used in an expression
    pub fn name(self) -> &'static str {
        match self {
            Self::Mb => "mb",
            Self::Gb => "gb",
            Self::Tb => "tb",
            Self::Pb => "pb",
        }
    }

    /// Number of bytes in one of this unit
    pub fn factor(self) -> f64 {
        match self {
            Self::Mb => ONE_MB,
            Self::Gb => ONE_GB,
            Self::Tb => ONE_TB,
            Self::Pb => ONE_PB,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}
