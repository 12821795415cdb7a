use std::{io::Write, time::Duration};

use chord_solvers::{equation::chord::Status, locate::RootResult};

/// Writes root results to a console-style text stream.
pub struct ConsoleReport<W> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one root block.
    pub fn root(&mut self, root: &RootResult) -> std::io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "\nRoot found: x = {:.6}", root.x)?;
        writeln!(out, "Error: {:.6e}", root.error)?;
        writeln!(out, "Function value f(Xi): {:.6e}", root.residual)?;
        writeln!(out, "Number of iterations: {}", root.iters)?;
        writeln!(out, "Number of function evaluations f(x): {}", root.evals)?;
        writeln!(out, "Calculation time: {:.4} ms", millis(root.elapsed))?;
        match root.convergence {
            Some(ratio) => writeln!(out, "Convergence parameter: {ratio:.6}")?,
            None => writeln!(out, "Convergence parameter: NaN")?,
        }
        match root.status {
            Status::Converged => {}
            Status::MaxIters => writeln!(
                out,
                "Warning: iteration limit reached before the tolerances were met"
            )?,
            Status::StoppedByObserver => writeln!(out, "Warning: solve was stopped early")?,
        }
        Ok(())
    }

    /// Writes the total time for the run.
    pub fn total(&mut self, elapsed: Duration) -> std::io::Result<()> {
        writeln!(self.out, "\nTotal calculation time: {:.4} ms", millis(elapsed))?;
        self.out.flush()
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1e3
}
