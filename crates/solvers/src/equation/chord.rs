//! Chord method for single-variable root finding.
//!
//! # Algorithm
//!
//! The chord method (a fixed-endpoint variant of regula falsi) starts from a
//! bracket `[a, b]` whose residuals differ in sign. The endpoint with the
//! larger residual magnitude is held fixed for the whole solve; the other
//! endpoint starts a moving iterate. Each iteration replaces the iterate with
//! the zero crossing of the chord through the fixed point and the iterate:
//!
//! ```text
//! x_next = x - f(x) * (x_fixed - x) / (f(x_fixed) - f(x))
//! ```
//!
//! # Stopping
//!
//! At least one iteration always runs. After each iteration the displacement
//! `|x_next - x|` is compared to [`Config::x_tol`] and `|f(x_next)|` to
//! [`Config::residual_tol`], combined according to [`StopRule`]. The solve
//! also ends at [`Config::max_iters`] with [`Status::MaxIters`].
//!
//! # Diagnostics
//!
//! Every [`Solution`] reports the number of iterations, the number of model
//! evaluations (always `iters + 2`), the final displacement, and the ratio of
//! the last two displacements as an empirical convergence rate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Observers can return
//! [`Action::StopEarly`] to halt with the current iterate.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod solution;
mod state;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, StopRule};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use chord_core::{Model, Observer};

use crate::equation::evaluate;

use bracket::Bounds;
use state::State;

/// Finds a root inside `bracket` using the chord method.
///
/// The bracket may be given in either order.
/// See the [module docs](self) for the iteration and stopping rules.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if the model fails or returns
/// a non-finite residual, or if an iterate becomes non-finite (for example
/// when both chord residuals are equal).
pub fn solve<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    run(model, bracket, config, &mut observer)
}

/// Finds a root without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M>(model: &M, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bracket, config, ())
}

/// Core chord iteration, borrowing the observer so callers can reuse it
/// across brackets.
pub(crate) fn run<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    let [left, right] = Bounds::new(bracket)?.as_array();

    let left = Point::from(evaluate(model, left)?);
    let right = Point::from(evaluate(model, right)?);
    let mut state = State::new(left, right)?;

    loop {
        let x = state.next_x();
        if !x.is_finite() {
            return Err(Error::NonFiniteIterate {
                iter: state.iters() + 1,
                x,
            });
        }

        let point = Point::from(evaluate(model, x)?);
        state.accept(point);

        if let Some(action) = observer.observe(&state.event()) {
            match action {
                Action::StopEarly => {
                    return Ok(state.into_solution(Status::StoppedByObserver));
                }
            }
        }

        if config.is_converged(state.error(), point.residual) {
            return Ok(state.into_solution(Status::Converged));
        }

        if state.iters() >= config.max_iters() {
            return Ok(state.into_solution(Status::MaxIters));
        }
    }
}
