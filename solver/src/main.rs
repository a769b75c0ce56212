mod cli;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, error, info};

use cli::{Args, Command};
use logging::Logger;
use maze_solver::{
    SolveError,
    maze::{self, Grid, MazeParams, RenderMode, WallPolicy},
    solvers::{self, Solution, Status, Strategy},
};

struct Settings {
    mode: RenderMode,
    max_steps: Option<usize>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    if args.plain {
        colored::control::set_override(false);
    }

    let policy = if args.repair_walls {
        WallPolicy::Repair
    } else {
        WallPolicy::Strict
    };
    let settings = Settings {
        mode: if args.raw {
            RenderMode::Raw
        } else {
            RenderMode::Cleaned
        },
        max_steps: args.max_steps,
    };

    let code = match args.command {
        Command::Solve { maze, algorithm } => {
            let (grid, params) = load(&maze, policy)?;
            print_header(&maze, &params);
            let result = run_strategy(algorithm.strategy(), &grid, &params, &settings);
            solvers::exit_code([&result])
        }
        Command::Benchmark { maze } => {
            let (grid, params) = load(&maze, policy)?;
            print_header(&maze, &params);
            run_benchmark(&grid, &params, &settings)
        }
    };

    if code != 0 {
        debug!("exiting with code {}", code);
    }
    Ok(ExitCode::from(code))
}

fn load(path: &Path, policy: WallPolicy) -> Result<(Grid, MazeParams)> {
    info!("loading maze {}", path.display());
    maze::load(path, policy).wrap_err_with(|| format!("failed to load {}", path.display()))
}

fn print_header(path: &Path, params: &MazeParams) {
    println!(
        "Maze {}, size {} x {}.\n\n\
         Legend: A = up to 20 steps, B = up to 150 steps,\n\
         C = up to 200 steps, O = more than 200 steps\n",
        path.display(),
        params.cols,
        params.rows
    );
}

/// solves a fresh copy of `grid` so every strategy sees the maze as loaded
fn run_strategy(
    strategy: Strategy,
    grid: &Grid,
    params: &MazeParams,
    settings: &Settings,
) -> Result<Solution, SolveError> {
    info!("solving with {}", strategy.name());
    println!("---- {:-<36}\n", format!("{} ", strategy.name().to_uppercase()));

    let mut grid = grid.clone();
    let result = strategy.run(&mut grid, params, settings.max_steps);

    match &result {
        Ok(solution) => {
            print_result(solution);
            debug!(
                "final state at {}th step\n{}",
                solution.steps(),
                maze::render(&grid, params.start, RenderMode::Raw)
            );
            println!("Solution, path has {} steps\n", solution.path_length);
            println!("{}\n", maze::paint(&grid, params.start, settings.mode));
        }
        Err(e) => {
            error!("{} failed: {}", strategy.name(), e);
        }
    }

    result
}

fn run_benchmark(grid: &Grid, params: &MazeParams, settings: &Settings) -> u8 {
    info!("benchmarking all strategies");

    let runs: Vec<_> = Strategy::all()
        .map(|strategy| (strategy, run_strategy(strategy, grid, params, settings)))
        .collect();

    print_benchmark_summary(&runs);
    solvers::exit_code(runs.iter().map(|(_, result)| result))
}

// ========== Utilities ==========

fn print_result(solution: &Solution) {
    info!(
        "finished in {} steps ({:?})",
        solution.steps(),
        solution.elapsed
    );
    debug!("path: {} cells", solution.traversal.path.len());
}

fn print_benchmark_summary(runs: &[(Strategy, Result<Solution, SolveError>)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<16} {:<14} {:>8}  {:>8}  {:>12}",
        "algorithm", "status", "steps", "path", "time"
    );
    info!("{:-<64}", "");

    for (strategy, result) in runs {
        let status = Status::of(result);
        match result {
            Ok(solution) => info!(
                "{:<16} {:<14} {:>8}  {:>8}  {:>12?}",
                strategy.name(),
                status,
                solution.steps(),
                solution.path_length,
                solution.elapsed,
            ),
            Err(e) => info!("{:<16} {:<14} {}", strategy.name(), status, e),
        }
    }

    let solved = || {
        runs.iter()
            .filter_map(|(strategy, result)| result.as_ref().ok().map(|s| (strategy, s)))
    };

    if let Some((strategy, solution)) = solved().min_by_key(|(_, s)| s.path_length) {
        info!(
            "\nshortest: {} ({} path cells)",
            strategy.name(),
            solution.path_length
        );
    }

    if let Some((strategy, solution)) = solved().min_by_key(|(_, s)| s.elapsed) {
        info!("fastest: {} ({:?})", strategy.name(), solution.elapsed);
    }
}
