use clap::Parser;

use chord_solvers::equation::chord::DEFAULT_MAX_ITERS;

/// Finds every root of f(x) = 2·log10(x + 7) − 5·sin(x) on an interval.
///
/// Inputs not given as options are prompted for on standard input.
#[derive(Debug, Parser)]
#[command(name = "chord")]
#[command(version)]
pub struct Cli {
    /// Interval bounds `A B`, with A < B
    #[arg(long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    pub interval: Option<Vec<f64>>,

    /// Argument tolerance: bound on the step between successive iterates
    #[arg(long)]
    pub eps1: Option<f64>,

    /// Function tolerance: bound on the residual magnitude
    #[arg(long)]
    pub eps2: Option<f64>,

    /// Iteration ceiling for each chord solve
    #[arg(long, default_value_t = DEFAULT_MAX_ITERS)]
    pub max_iters: usize,

    /// Stop as soon as either tolerance is met instead of both
    #[arg(long)]
    pub stop_on_either: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_bounds() {
        let cli = Cli::try_parse_from(["chord", "--interval", "-6", "2", "--eps1", "1e-4"])
            .expect("valid arguments");

        assert_eq!(cli.interval, Some(vec![-6.0, 2.0]));
        assert_eq!(cli.eps1, Some(1e-4));
        assert_eq!(cli.eps2, None);
        assert_eq!(cli.max_iters, DEFAULT_MAX_ITERS);
        assert!(!cli.stop_on_either);
    }

    #[test]
    fn interval_needs_two_values() {
        assert!(Cli::try_parse_from(["chord", "--interval", "1"]).is_err());
    }
}
