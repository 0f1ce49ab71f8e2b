use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::lexer::Lexer;
use crate::postfix::{Outcome, PostfixEvaluator};
use crate::random::{ClockRandom, RandomSource};
use crate::shunting::to_postfix;
use crate::util::format_number;
use crate::variables::VariableStore;
use crate::warnings::{self, EvaluationFlags, Warnings};

/// Evaluate a single expression from `input` with a fresh
/// [`Calculator`](struct.Calculator.html).
///
/// # Example
///
/// ```
/// # use tally::{eval, Outcome};
/// assert_eq!(eval("45 - 2^3"), Ok(Outcome::Value(37.0)));
/// assert_eq!(eval("2 * sqrt(16)"), Ok(Outcome::Value(8.0)));
/// ```
pub fn eval(input: &str) -> Result<Outcome, Error> {
    Calculator::new()
        .evaluate(input)
        .map(|evaluation| evaluation.outcome)
}

/// The result of evaluating one expression, and its warnings
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    outcome: Outcome,
    warnings: Warnings,
}

impl Evaluation {
    /// What the expression produced
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Reasons to doubt the result
    #[must_use]
    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    /// The result with six fractional digits, or `None` if the expression
    /// defined a variable
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        self.outcome.value().map(format_number)
    }
}

/// An evaluation session: settings, variables, warning flags and the source
/// of random numbers.
///
/// Variables defined by one evaluation are visible to the next ones.
///
/// # Examples
///
/// ```
/// # use tally::Calculator;
/// let mut calculator = Calculator::new();
///
/// let evaluation = calculator.evaluate("x = 5").unwrap();
/// assert_eq!(evaluation.formatted(), None);
///
/// let evaluation = calculator.evaluate("x + 1").unwrap();
/// assert_eq!(evaluation.formatted(), Some("6.000000".to_string()));
///
/// let evaluation = calculator.evaluate("5 / 0").unwrap();
/// assert!(evaluation.warnings().is_inaccurate());
/// ```
pub struct Calculator {
    config: Config,
    variables: VariableStore,
    flags: EvaluationFlags,
    random: Box<dyn RandomSource>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            config: Config::default(),
            variables: VariableStore::new(),
            flags: EvaluationFlags::default(),
            random: Box::new(ClockRandom),
        }
    }
}

impl Calculator {
    /// Create a calculator with the default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given settings
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Draw the values of `rand` from `source`
    #[must_use]
    pub fn with_random<R: RandomSource + 'static>(mut self, source: R) -> Self {
        self.random = Box::new(source);
        self
    }

    /// Evaluate `input`, updating the variables on assignment.
    ///
    /// # Errors
    ///
    /// Only fails with [`Error::NameError`](enum.Error.html) when the
    /// configuration rejects undefined variables. Malformed input degrades to
    /// a best-effort result instead.
    pub fn evaluate(&mut self, input: &str) -> Result<Evaluation, Error> {
        debug!(input, "evaluating");
        self.flags.reset();

        let infix = Lexer::new(input).tokenize();
        let postfix = to_postfix(&infix);
        let outcome = PostfixEvaluator::new(
            &self.config,
            &mut self.variables,
            &mut self.flags,
            self.random.as_mut(),
        )
        .evaluate(&postfix)?;

        let warnings = warnings::collect(&infix, &self.variables, self.flags);
        debug!(?outcome, warnings = warnings.len(), "evaluated");
        Ok(Evaluation { outcome, warnings })
    }

    /// Warning flags of the last evaluation
    #[must_use]
    pub fn flags(&self) -> EvaluationFlags {
        self.flags
    }

    /// Variables defined so far
    #[must_use]
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Current settings
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Forget every variable
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AngleUnit, UndefinedVariable};
    use crate::random::SeededRandom;
    use crate::warnings::Warning;
    use proptest::prelude::*;
    use test_case::test_case;

    fn value(input: &str) -> f64 {
        eval(input).unwrap().value().unwrap()
    }

    fn formatted(calculator: &mut Calculator, input: &str) -> Option<String> {
        calculator.evaluate(input).unwrap().formatted()
    }

    #[test_case("3 + 5" => 8.0 ; "addition")]
    #[test_case("2 - 5" => -3.0 ; "subtraction")]
    #[test_case("2 * 5" => 10.0 ; "multiplication")]
    #[test_case("10 / 5" => 2.0 ; "division")]
    #[test_case("2 ^ 3" => 8.0 ; "power")]
    #[test_case("-3" => -3.0 ; "negative literal")]
    #[test_case("25 - -3" => 28.0 ; "subtracting a negative")]
    #[test_case("2+3*4" => 14.0 ; "products before sums")]
    #[test_case("8-3-2" => 3.0 ; "equal precedence is left to right")]
    #[test_case("2^3^2" => 64.0 ; "powers are left associative")]
    #[test_case("(2+3)*4" => 20.0 ; "parentheses")]
    #[test_case("5!" => 120.0 ; "factorial")]
    #[test_case("3!+1" => 7.0 ; "factorial before sum")]
    #[test_case("5.9!" => 120.0 ; "factorial truncates")]
    #[test_case("2*sqrt(16)+1" => 9.0 ; "function call")]
    #[test_case("abs(-4)" => 4.0 ; "absolute value")]
    #[test_case("floor(2.7) + ceil(2.2)" => 5.0 ; "floor and ceil")]
    #[test_case("round(2.5) + round(-2.5)" => 0.0 ; "round half away from zero")]
    #[test_case("log(1)" => 0.0 ; "natural logarithm")]
    #[test_case("2mb" => 2_097_152.0 ; "mebibytes")]
    #[test_case("1gb / 1mb" => 1024.0 ; "unit ratio")]
    #[test_case("1pb" => 1_125_899_906_842_624.0 ; "pebibytes")]
    #[test_case("-(2+3)" => -5.0 ; "negated group")]
    #[test_case("" => 0.0 ; "empty expression")]
    fn evaluate(input: &str) -> f64 {
        value(input)
    }

    #[test_case("(2+3" => 5.0 ; "unclosed parenthesis")]
    #[test_case("2+3)*4" => 20.0 ; "unopened parenthesis")]
    #[test_case("2+" => 2.0 ; "missing right operand")]
    #[test_case("*3" => 0.0 ; "missing left operand")]
    #[test_case("sqrt()" => 0.0 ; "missing function argument")]
    #[test_case("y + 1" => 1.0 ; "undefined variable reads as zero")]
    #[test_case("2 3" => 3.0 ; "top of the stack wins")]
    fn degrades(input: &str) -> f64 {
        value(input)
    }

    #[test]
    fn assignment() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("x=5").unwrap();
        assert_eq!(
            *evaluation.outcome(),
            Outcome::Defined {
                name: "x".into(),
                value: 5.0
            }
        );
        assert_eq!(evaluation.formatted(), None);
        assert!(!evaluation.warnings().is_inaccurate());
        assert_eq!(formatted(&mut calculator, "x+1").as_deref(), Some("6.000000"));
    }

    #[test_case("-x" => -4.0 ; "negated variable")]
    #[test_case("2/-x" => -0.5 ; "negation under division")]
    #[test_case("2^-x" => 0.0625 ; "negative exponent")]
    #[test_case("2^-(1+1)" => 0.25 ; "negated group as exponent")]
    #[test_case("-x^2" => 16.0 ; "negation binds tighter than power")]
    #[test_case("3*-x+1" => -11.0 ; "negation inside a sum")]
    #[test_case("--x" => 4.0 ; "double negation")]
    #[test_case("-sqrt(x)" => -2.0 ; "negated function")]
    fn negation(input: &str) -> f64 {
        let mut calculator = Calculator::new();
        calculator.evaluate("x=4").unwrap();
        calculator.evaluate(input).unwrap().outcome().value().unwrap()
    }

    #[test]
    fn long_blank_input() {
        let input = format!("{}1", " ".repeat(200_000));
        assert_eq!(eval(&input), Ok(Outcome::Value(1.0)));
        let input = format!("2{}3", "+".repeat(200_000));
        assert_eq!(eval(&input), Ok(Outcome::Value(5.0)));
    }

    #[test]
    fn redefinition() {
        let mut calculator = Calculator::new();
        assert_eq!(formatted(&mut calculator, "x=5"), None);
        assert_eq!(formatted(&mut calculator, "x=9"), None);
        assert_eq!(formatted(&mut calculator, "x").as_deref(), Some("9.000000"));
        assert_eq!(calculator.variables().len(), 1);
        assert_eq!(calculator.variables().lookup("x"), Some(9.0));
    }

    #[test]
    fn assignment_from_expression() {
        let mut calculator = Calculator::new();
        calculator.evaluate("a = 2 + 3 * 4").unwrap();
        calculator.evaluate("b = a / 2").unwrap();
        assert_eq!(calculator.variables().lookup("b"), Some(7.0));
    }

    #[test]
    fn assignment_inside_expression() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("(x=5)+1").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(6.0));
        assert_eq!(calculator.variables().lookup("x"), Some(5.0));
    }

    #[test]
    fn assignment_to_non_variable() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("3=4").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(4.0));
        assert!(calculator.variables().is_empty());
    }

    #[test]
    fn clear_variables() {
        let mut calculator = Calculator::new();
        calculator.evaluate("x=1").unwrap();
        calculator.clear_variables();
        assert!(calculator.variables().is_empty());
        assert_eq!(formatted(&mut calculator, "x").as_deref(), Some("0.000000"));
    }

    #[test]
    fn division_by_zero() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("5/0").unwrap();
        assert_eq!(evaluation.formatted().as_deref(), Some("0.000000"));
        assert!(calculator.flags().division_by_zero);
        assert!(!calculator.flags().trigonometric_domain);
        assert_eq!(
            evaluation.warnings().iter().collect::<Vec<_>>(),
            [&Warning::DivisionByZero]
        );

        // flags are reset by the next evaluation
        calculator.evaluate("5/1").unwrap();
        assert!(!calculator.flags().division_by_zero);
    }

    #[test]
    fn trigonometric_domain() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("asin(2)").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(0.0));
        assert!(calculator.flags().trigonometric_domain);
        assert!(evaluation.warnings().is_inaccurate());

        let evaluation = calculator.evaluate("acos(-1.5) + atan(3)").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(0.0));
        assert!(calculator.flags().trigonometric_domain);

        calculator.evaluate("asin(1)").unwrap();
        assert!(!calculator.flags().trigonometric_domain);
    }

    #[test]
    fn trigonometry() {
        assert_eq!(value("sin(0)"), 0.0);
        assert_eq!(value("cos(0)"), 1.0);
        assert_eq!(value("asin(1)"), std::f64::consts::FRAC_PI_2);
        assert!((value("sin(3.141592653589793)")).abs() < 1e-12);
    }

    #[test]
    fn degrees() {
        let config = Config::new().angle_unit(AngleUnit::Degrees);
        let mut calculator = Calculator::with_config(config);
        assert_eq!(formatted(&mut calculator, "sin(90)").as_deref(), Some("1.000000"));
        assert_eq!(formatted(&mut calculator, "cos(180)").as_deref(), Some("-1.000000"));
        assert_eq!(formatted(&mut calculator, "tan(45)").as_deref(), Some("1.000000"));
        // the operand is converted before the inverse function is applied
        let expected = (1.0_f64 / 180.0 * std::f64::consts::PI).asin();
        assert_eq!(
            *calculator.evaluate("asin(1)").unwrap().outcome(),
            Outcome::Value(expected)
        );
        assert!(!calculator.flags().trigonometric_domain);
    }

    #[test]
    fn degrees_domain_checks_the_raw_operand() {
        let config = Config::new().angle_unit(AngleUnit::Degrees);
        let mut calculator = Calculator::with_config(config);
        // 2 degrees is inside [-1, 1] once converted, but the check comes first
        let evaluation = calculator.evaluate("asin(2)").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(0.0));
        assert!(calculator.flags().trigonometric_domain);
        assert!(evaluation.warnings().is_inaccurate());
    }

    #[test]
    fn input_precision() {
        let mut plain = Calculator::new();
        assert_eq!(formatted(&mut plain, "1.005+1.005").as_deref(), Some("2.010000"));

        let mut calculator = Calculator::with_config(Config::new().input_precision(2));
        // 1.005 is stored slightly below the tie and rounds to 1.00
        assert_eq!(formatted(&mut calculator, "1.005+1.005").as_deref(), Some("2.000000"));
        assert_eq!(formatted(&mut calculator, "1.006+1.006").as_deref(), Some("2.020000"));
    }

    #[test]
    fn result_precision() {
        let mut calculator = Calculator::with_config(Config::new().result_precision(2));
        assert_eq!(formatted(&mut calculator, "2/3").as_deref(), Some("0.670000"));
        assert_eq!(formatted(&mut calculator, "10/4").as_deref(), Some("2.500000"));

        let mut calculator = Calculator::with_config(Config::new().result_precision(0));
        assert_eq!(formatted(&mut calculator, "0.5").as_deref(), Some("1.000000"));
    }

    #[test]
    fn rand_uses_the_injected_source() {
        let mut expected = SeededRandom::new(7);
        let first = expected.next_unit();
        let second = expected.next_unit();

        let mut calculator = Calculator::new().with_random(SeededRandom::new(7));
        let outcome = calculator.evaluate("rand()").unwrap();
        assert_eq!(*outcome.outcome(), Outcome::Value(first));
        let outcome = calculator.evaluate("2 + rand()").unwrap();
        assert_eq!(*outcome.outcome(), Outcome::Value(2.0 + second));
    }

    #[test]
    fn invalid_tokens_are_reported() {
        let mut calculator = Calculator::new();
        let evaluation = calculator.evaluate("2 # 3 + y").unwrap();
        let warnings: Vec<_> = evaluation.warnings().iter().cloned().collect();
        assert_eq!(
            warnings,
            [
                Warning::InvalidToken("#".into()),
                Warning::InvalidToken("y".into())
            ]
        );
        assert!(evaluation
            .warnings()
            .to_string()
            .ends_with("The result may be inaccurate"));
    }

    #[test]
    fn undefined_variables_rejected() {
        let config = Config::new().undefined_variable(UndefinedVariable::Reject);
        let mut calculator = Calculator::with_config(config);

        let result = calculator.evaluate("2 * z");
        assert_eq!(
            result.err().unwrap().to_string(),
            "NameError: name 'z' is not defined"
        );
        assert_eq!(calculator.evaluate("z"), Err(Error::NameError("z".into())));

        calculator.evaluate("z = 4").unwrap();
        let evaluation = calculator.evaluate("2 * z").unwrap();
        assert_eq!(*evaluation.outcome(), Outcome::Value(8.0));
    }

    /// A fully parenthesized expression, with its value computed directly
    fn parenthesized() -> impl Strategy<Value = (String, f64)> {
        let leaf = (1..100_i32).prop_map(|n| (n.to_string(), f64::from(n)));
        leaf.prop_recursive(4, 32, 2, |inner| {
            (inner.clone(), prop_oneof![Just('+'), Just('-'), Just('*')], inner).prop_map(
                |((left, x), op, (right, y))| {
                    let value = match op {
                        '+' => x + y,
                        '-' => x - y,
                        _ => x * y,
                    };
                    (format!("({}{}{})", left, op, right), value)
                },
            )
        })
    }

    proptest! {
        #[test]
        fn parenthesized_matches_direct_evaluation((input, expected) in parenthesized()) {
            prop_assert_eq!(eval(&input), Ok(Outcome::Value(expected)));
        }
    }
}
