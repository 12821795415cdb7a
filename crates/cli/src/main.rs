//! Console front end: reads an interval and two tolerances, then prints every
//! root of the log-sine target found on that interval.

mod args;
mod prompt;
mod report;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::trace;

use chord_models::LogSine;
use chord_solvers::{
    Interval,
    equation::chord::{Action, Config, Event, StopRule},
    locate::locate,
    scan::ScanConfig,
};

use args::Cli;
use prompt::Prompt;
use report::ConsoleReport;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());

    let (lower, upper) = match cli.interval.as_deref() {
        Some(&[lower, upper]) => (lower, upper),
        _ => prompt.interval()?,
    };
    let eps1 = match cli.eps1 {
        Some(eps1) => eps1,
        None => prompt.tolerance("Enter the accuracy for the argument (eps1):")?,
    };
    let eps2 = match cli.eps2 {
        Some(eps2) => eps2,
        None => prompt.tolerance("Enter the accuracy for the function (eps2):")?,
    };

    let interval = Interval::new(lower, upper)
        .with_context(|| format!("invalid interval [{lower}, {upper}]"))?;
    let stop_rule = if cli.stop_on_either {
        StopRule::Either
    } else {
        StopRule::Both
    };
    let config = Config::new(eps1, eps2)
        .and_then(|config| config.with_max_iters(cli.max_iters))
        .context("invalid solver settings")?
        .with_stop_rule(stop_rule);

    let survey = locate(
        &LogSine,
        interval,
        &ScanConfig::default(),
        &config,
        trace_iteration,
    );

    let mut report = ConsoleReport::new(io::stdout());
    for root in &survey.roots {
        report.root(root)?;
    }
    report.total(survey.elapsed)?;

    if !cli.no_pause {
        prompt.pause()?;
    }
    Ok(())
}

fn trace_iteration(event: &Event) -> Option<Action> {
    trace!(
        "iter {}: x = {}, f(x) = {}, step = {}, fixed = {}",
        event.iter, event.point.x, event.point.residual, event.error, event.fixed.x
    );
    None
}
