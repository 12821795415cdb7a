use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::bracket::BracketError;

/// Errors that can occur during chord solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("model call failed at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("non-finite iterate {x} at iteration {iter}")]
    NonFiniteIterate { iter: usize, x: f64 },
}

impl<ME> From<EvalError<ME>> for Error
where
    ME: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME>) -> Self {
        match err {
            EvalError::Model { x, source } => Self::Model {
                x,
                source: Box::new(source),
            },
            EvalError::NonFinite { x, residual } => Self::NonFiniteResidual { x, residual },
        }
    }
}
