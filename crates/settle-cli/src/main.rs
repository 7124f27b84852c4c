//! Command-line driver for the settle relaxation engine.
//!
//! Reads a problem description from a file, relaxes the grid with the
//! four-point blend stencil, and prints the convergence trace to stdout:
//! after each pass the residual diff on one line, then the rendered grid.
//! The loop repeats until the residual drops below the tolerance, so
//! capped runs emit one trace block per batch of sweeps.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use settle::engine::{run, RunConfig};
use settle::io::{render_grid, Problem};
use settle::stencil::FourPointBlend;

/// Steady-state relaxation of 2D scalar fields with pinned sources.
#[derive(Parser, Debug)]
#[command(name = "settle", version, about, long_about = None)]
struct Cli {
    /// Problem file: dimensions, source points, and run parameters.
    input: PathBuf,

    /// Blend weight passed to the four-point stencil.
    ///
    /// `1.0` replaces each cell with the mean of its neighbors; smaller
    /// values keep a fraction of the previous cell value.
    #[arg(long, default_value_t = 1.0)]
    weight: f64,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = drive(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn drive(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&cli.input)
        .map_err(|err| format!("{}: {err}", cli.input.display()))?;
    let problem = Problem::parse(&text)?;
    let (mut grid, sources) = problem.build()?;

    let stencil = FourPointBlend::new(cli.weight)?;
    let config = RunConfig::new(problem.tolerance, problem.max_sweeps, problem.boundary);

    loop {
        let report = run(&mut grid, &sources, &stencil, &config);
        println!("{:.6}", report.final_diff);
        print!("{}", render_grid(&grid));
        if report.converged {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_input_path_and_default_weight() {
        let cli = Cli::parse_from(["settle", "problem.txt"]);
        assert_eq!(cli.input.to_str(), Some("problem.txt"));
        assert_eq!(cli.weight, 1.0);
    }

    #[test]
    fn parses_explicit_weight() {
        let cli = Cli::parse_from(["settle", "problem.txt", "--weight", "0.25"]);
        assert_eq!(cli.weight, 0.25);
    }

    #[test]
    fn rejects_missing_input() {
        assert!(Cli::try_parse_from(["settle"]).is_err());
    }
}
