use thiserror::Error;

use chord_core::Model;

/// The result of evaluating a scalar model at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
}

/// Errors that can occur when evaluating a scalar model.
#[derive(Debug, Error)]
pub enum EvalError<ME> {
    /// The model call failed, typically because `x` is outside its domain.
    #[error("model call failed at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: ME,
    },
    /// The model returned a non-finite residual.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFinite { x: f64, residual: f64 },
}

/// Evaluates a scalar model at `x`.
///
/// # Errors
///
/// Returns an error if the model call fails or produces a non-finite value.
pub fn evaluate<M>(model: &M, x: f64) -> Result<Evaluation, EvalError<M::Error>>
where
    M: Model<Input = f64, Output = f64>,
{
    let residual = model
        .call(&x)
        .map_err(|source| EvalError::Model { x, source })?;

    if !residual.is_finite() {
        return Err(EvalError::NonFinite { x, residual });
    }

    Ok(Evaluation { x, residual })
}
