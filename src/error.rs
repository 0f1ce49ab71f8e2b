use thiserror::Error;

/// Error type for the tally crate
///
/// Malformed expressions never produce an error: they degrade to a `0`
/// fallback and show up in [`Warnings`](struct.Warnings.html) instead. Errors
/// are reserved for policies the caller opted into through
/// [`Config`](struct.Config.html).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unknown variable during evaluation, with
    /// [`UndefinedVariable::Reject`](enum.UndefinedVariable.html)
    #[error("NameError: name '{0}' is not defined")]
    NameError(String),
}
