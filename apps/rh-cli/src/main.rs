mod config;
mod error;
mod report;

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use config::{RodArgs, RunSetup};
use error::CliResult;
use report::SolveSummary;
use rh_core::timing::{Timer, enable_timing};
use rh_fdm::{HeatEquation, SineProfile, SolveProgress};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rh-cli")]
#[command(about = "RodHeat CLI - explicit finite differences for the 1-D heat equation", long_about = None)]
struct Cli {
    /// Report wall-clock timings (same as setting RH_TIMING)
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the grid and diffusion number without solving
    Check {
        #[command(flatten)]
        rod: RodArgs,
    },
    /// Solve with a sine initial profile and summarize the result
    Solve {
        #[command(flatten)]
        rod: RodArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Write snapshots to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Export every N-th time column to the CSV (the last is always included)
        #[arg(long, default_value_t = 100)]
        every: usize,
        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
    /// Solve and print one time level as x,u pairs
    Snapshot {
        /// Time column index, 0 ..= floor(T / dt)
        index: usize,
        #[command(flatten)]
        rod: RodArgs,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.timing {
        enable_timing();
    }

    match cli.command {
        Commands::Check { rod } => cmd_check(&rod.resolve()?),
        Commands::Solve {
            rod,
            json,
            csv,
            every,
            quiet,
        } => cmd_solve(&rod.resolve()?, json, csv.as_deref(), every, quiet),
        Commands::Snapshot { index, rod } => cmd_snapshot(&rod.resolve()?, index),
    }
}

fn build(setup: &RunSetup) -> CliResult<HeatEquation> {
    let profile = SineProfile::new(setup.amplitude, setup.params.length());
    Ok(HeatEquation::from_params(setup.params, &profile)?)
}

fn cmd_check(setup: &RunSetup) -> CliResult<()> {
    let p = &setup.params;
    println!("Grid: {} x {} (space x time)", p.n_x(), p.n_t());
    println!("  alpha = dt / dx^2 = {}", p.alpha());
    if p.is_stable() {
        println!("✓ Stable (alpha <= 0.5)");
    } else {
        println!("✗ Unstable (alpha > 0.5): the solution will oscillate and grow");
    }
    Ok(())
}

fn cmd_solve(
    setup: &RunSetup,
    json: bool,
    csv: Option<&Path>,
    every: usize,
    quiet: bool,
) -> CliResult<()> {
    let mut heat = build(setup)?;

    let timer = Timer::start("solve");
    if quiet || json {
        heat.solve();
    } else {
        let mut last_emit = Instant::now();
        heat.solve_with_progress(Some(&mut |p: &SolveProgress| {
            if p.step == p.total_steps || last_emit.elapsed().as_millis() >= 100 {
                render_progress(p);
                last_emit = Instant::now();
            }
        }));
        clear_progress_line();
    }
    let solve_time_s = timer.stop_and_report();

    let summary = SolveSummary::from_solved(&heat, setup.amplitude, solve_time_s)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("✓ Solved");
        summary.print();
    }

    if let Some(path) = csv {
        let text = report::snapshots_csv(&heat, every)?;
        std::fs::write(path, text)?;
        if !json {
            println!("✓ Exported snapshots to {}", path.display());
        }
    }
    Ok(())
}

fn cmd_snapshot(setup: &RunSetup, index: usize) -> CliResult<()> {
    let mut heat = build(setup)?;
    // Reject a bad index before spending time on the solve
    heat.grid().time_at(index)?;
    heat.solve();
    print!("{}", report::snapshot_csv(&heat, index)?);
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_progress(p: &SolveProgress) {
    let width = 28usize;
    let fraction = p.fraction();
    let filled = ((fraction * width as f64).round() as usize).min(width);
    print!(
        "\r[{}{}] {:>6.2}%  t={:.5}  step={}/{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled)),
        fraction * 100.0,
        p.time,
        p.step,
        p.total_steps
    );
    let _ = io::stdout().flush();
}
