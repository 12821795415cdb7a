//! Locates every root of a scalar model on an interval.
//!
//! [`locate`] sweeps the interval with [`scan`](crate::scan::scan) and runs an
//! independent [`chord`] solve on each bracket it yields, in left-to-right
//! order on the calling thread. Each solve is timed on its own, and the whole
//! run is timed as well.
//!
//! A bracket whose solve fails (for example because an iterate blew up) is
//! recorded in [`Survey::failures`] and left out of [`Survey::roots`].

use std::time::{Duration, Instant};

use log::debug;

use chord_core::{Model, Observer};

use crate::{
    Interval,
    equation::chord::{self, Action, Config, Event, Status},
    scan::{Bracket, ScanConfig, scan},
};

/// A root found inside one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// The bracket the root was refined from.
    pub bracket: [f64; 2],

    /// Root estimate.
    pub x: f64,

    /// Residual at the root estimate.
    pub residual: f64,

    /// Displacement between the last two iterates.
    pub error: f64,

    /// Number of chord iterations.
    pub iters: usize,

    /// Number of model evaluations made by the solve.
    pub evals: usize,

    /// Ratio of the last two displacements, once defined.
    pub convergence: Option<f64>,

    /// Why the solve finished.
    pub status: Status,

    /// Wall-clock time spent in the solve.
    pub elapsed: Duration,
}

impl RootResult {
    fn new(bracket: &Bracket, solution: chord::Solution, elapsed: Duration) -> Self {
        Self {
            bracket: bracket.as_array(),
            x: solution.x,
            residual: solution.residual,
            error: solution.error,
            iters: solution.iters,
            evals: solution.evals,
            convergence: solution.convergence,
            status: solution.status,
            elapsed,
        }
    }
}

/// A bracket whose chord solve failed.
#[derive(Debug)]
pub struct Failure {
    /// The bracket that could not be refined.
    pub bracket: [f64; 2],
    /// Why refinement failed.
    pub error: chord::Error,
}

/// The outcome of a [`locate`] run.
#[derive(Debug)]
pub struct Survey {
    /// Roots in left-to-right bracket order.
    pub roots: Vec<RootResult>,

    /// Brackets that were found but could not be refined.
    pub failures: Vec<Failure>,

    /// Wall-clock time for the whole run, scan included.
    pub elapsed: Duration,
}

impl Survey {
    /// Returns the number of brackets the scan produced.
    #[must_use]
    pub fn brackets(&self) -> usize {
        self.roots.len() + self.failures.len()
    }
}

/// Scans `interval` and refines every bracket with the chord method.
///
/// The observer sees the iteration events of every solve in turn.
/// [`Action::StopEarly`] ends the current solve only.
pub fn locate<M, Obs>(
    model: &M,
    interval: Interval,
    scan_config: &ScanConfig,
    config: &Config,
    mut observer: Obs,
) -> Survey
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    let start = Instant::now();
    let mut roots = Vec::new();
    let mut failures = Vec::new();

    for bracket in scan(model, interval, scan_config) {
        let solve_start = Instant::now();
        let outcome = chord::run(model, bracket.as_array(), config, &mut observer);
        let elapsed = solve_start.elapsed();

        match outcome {
            Ok(solution) => {
                if solution.status != Status::Converged {
                    debug!(
                        "solve on [{}, {}] ended with {:?} after {} iterations",
                        bracket.left, bracket.right, solution.status, solution.iters
                    );
                }
                roots.push(RootResult::new(&bracket, solution, elapsed));
            }
            Err(error) => {
                debug!(
                    "dropping bracket [{}, {}]: {error}",
                    bracket.left, bracket.right
                );
                failures.push(Failure {
                    bracket: bracket.as_array(),
                    error,
                });
            }
        }
    }

    Survey {
        roots,
        failures,
        elapsed: start.elapsed(),
    }
}

/// Runs [`locate`] without observer support.
pub fn locate_unobserved<M>(
    model: &M,
    interval: Interval,
    scan_config: &ScanConfig,
    config: &Config,
) -> Survey
where
    M: Model<Input = f64, Output = f64>,
{
    locate(model, interval, scan_config, config, ())
}
