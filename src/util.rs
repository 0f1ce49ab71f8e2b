use hashbrown::HashMap;

use crate::token::{Function, Unit};

/// Bytes in a mebibyte, the `mb` suffix
pub const ONE_MB: f64 = 1_048_576.0;
/// Bytes in a gibibyte, the `gb` suffix
pub const ONE_GB: f64 = ONE_MB * 1024.0;
/// Bytes in a tebibyte, the `tb` suffix
pub const ONE_TB: f64 = ONE_GB * 1024.0;
/// Bytes in a pebibyte, the `pb` suffix
pub const ONE_PB: f64 = ONE_TB * 1024.0;

/// Fractional digits in formatted results
pub const DECIMALS: usize = 6;

lazy_static! {
    /// Every function, by the name used to call it
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        for &function in &Function::ALL {
            map.insert(function.name(), function);
        }
        map.shrink_to_fit();
        map
    };
    /// Every byte unit, by its suffix
    pub static ref UNITS: HashMap<&'static str, Unit> = {
        let mut map = HashMap::new();
        for &unit in &Unit::ALL {
            map.insert(unit.name(), unit);
        }
        map.shrink_to_fit();
        map
    };
}

/// Round `value` to `decimals` fractional digits, half away from zero.
///
/// The tie is decided on the binary value scaled by `10^decimals`, so `1.005`
/// becomes `1.0` at two decimals: its closest `f64` is slightly below the
/// tie.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = libm::pow(10.0, f64::from(decimals));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    libm::round(scaled) / scale
}

/// `n!` as a float. Anything below 2 gives 1, and large inputs overflow to
/// infinity.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn factorial(n: i64) -> f64 {
    let mut result: f64 = 1.0;
    let mut i = 2;
    while i <= n && result.is_finite() {
        result *= i as f64;
        i += 1;
    }
    result
}

/// Parse a numeric literal as written in an expression.
pub fn parse_number(literal: &str) -> Option<f64> {
    literal.parse().ok()
}

#[must_use]
/// Format a result with a fixed number of fractional digits, the way C's
/// `%f` does.
///
/// # Examples
///
/// ```
/// # use tally::format_number;
/// assert_eq!(format_number(14.0), "14.000000");
/// assert_eq!(format_number(2.0 / 3.0), "0.666667");
/// assert_eq!(format_number(f64::NAN), "nan");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }
    format!("{:.*}", DECIMALS, value)
}
