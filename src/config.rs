/// Unit in which trigonometric functions read their operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Operands are used as is
    Radians,
    /// Operands are converted from degrees to radians first
    Degrees,
}

/// What happens when an expression reads a variable that was never defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedVariable {
    /// The variable reads as `0.0`. The warning pass still reports the name
    /// as an invalid token.
    Zero,
    /// Evaluation stops with [`Error::NameError`](enum.Error.html)
    Reject,
}

/// Settings for a [`Calculator`](struct.Calculator.html).
///
/// # Examples
///
/// ```
/// # use tally::{AngleUnit, Config};
/// let config = Config::new().input_precision(2).angle_unit(AngleUnit::Degrees);
/// assert_eq!(config.input_decimals(), Some(2));
/// assert_eq!(config.result_decimals(), None);
///
/// // negative precisions mean "unset"
/// let config = config.input_precision(-1);
/// assert_eq!(config.input_decimals(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    input_precision: Option<u32>,
    result_precision: Option<u32>,
    angle_unit: AngleUnit,
    undefined_variable: UndefinedVariable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_precision: None,
            result_precision: None,
            angle_unit: AngleUnit::Radians,
            undefined_variable: UndefinedVariable::Zero,
        }
    }
}

impl Config {
    /// Default settings: no rounding, radians, undefined variables read as 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Round every operand to `decimals` before applying an operator. A
    /// negative value disables it.
    #[must_use]
    pub fn input_precision(mut self, decimals: i32) -> Self {
        self.input_precision = precision_from_raw(decimals);
        self
    }

    /// Round every operation result, and the final value, to `decimals`. A
    /// negative value disables it.
    #[must_use]
    pub fn result_precision(mut self, decimals: i32) -> Self {
        self.result_precision = precision_from_raw(decimals);
        self
    }

    /// Read trigonometric operands in `unit`
    #[must_use]
    pub fn angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    /// Choose how undefined variables are resolved
    #[must_use]
    pub fn undefined_variable(mut self, policy: UndefinedVariable) -> Self {
        self.undefined_variable = policy;
        self
    }

    /// Decimals operands are rounded to, if any
    #[must_use]
    pub fn input_decimals(&self) -> Option<u32> {
        self.input_precision
    }

    /// Decimals results are rounded to, if any
    #[must_use]
    pub fn result_decimals(&self) -> Option<u32> {
        self.result_precision
    }

    /// Unit of trigonometric operands
    #[must_use]
    pub fn angles(&self) -> AngleUnit {
        self.angle_unit
    }

    /// How undefined variables are resolved
    #[must_use]
    pub fn undefined_variables(&self) -> UndefinedVariable {
        self.undefined_variable
    }
}

fn precision_from_raw(decimals: i32) -> Option<u32> {
    u32::try_from(decimals).ok()
}
