use docopt::Docopt;
use itertools::Itertools;
use log::{info, LevelFilter};
use loopmaze::{
    cells::GridCoordinate,
    grid::Grid,
    grid_displays::{PathDisplay, StartEndPointsDisplay},
    grid_traits::GridDisplay,
    levels::{self, Difficulty, Level},
    pathing::Distances,
    units::{Height, Width},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    process,
};

const USAGE: &str = "Loopmaze

Usage:
    loopmaze_driver -h | --help
    loopmaze_driver [--difficulty=<d> | --grid-width=<w> --grid-height=<h>] [--seed=<n>] [--show-path | --show-distances] [--place-entities] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --difficulty=<d>       easy (10x10), medium (15x15) or hard (20x20) [default: easy].
    --grid-width=<w>       The grid width in a w*h grid, overrides the difficulty.
    --grid-height=<h>      The grid height in a w*h grid, overrides the difficulty.
    --seed=<n>             Seed for the maze's random number generator. Random if not given.
    --show-path            Show the shortest path from the entrance to the exit.
    --show-distances       Show the distance from the entrance to every cell, in hexadecimal.
    --place-entities       Scatter weapons (w) and enemies (x) over the maze as a level would.
    --text-out=<path>      Output file path for the textual rendering instead of stdout.
";
#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_difficulty: String,
    flag_grid_width: Option<usize>,
    flag_grid_height: Option<usize>,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_place_entities: bool,
    flag_text_out: String,
}

mod errors {
    // Result is a typedef of std `Result` with the error type our own `Error`.
    // Maze errors from the library are linked so `?` carries them through.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::loopmaze::errors::Error, ::loopmaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: DriverArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(ref e) = run(&args) {
        eprint!("{}", error_report(e));
        process::exit(1);
    }
}

/// The error and each of its causes, one per line, without the backtrace.
fn error_report(e: &Error) -> String {
    let mut report = format!("error: {}\n", e);
    for cause in e.iter().skip(1) {
        report.push_str(&format!("caused by: {}\n", cause));
    }
    report
}

fn run(args: &DriverArgs) -> Result<()> {
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("maze seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let level = build_level(args, &mut rng)?;
    let grid = level.grid();

    let mut report = vec![format!("seed: {}", seed)];

    let entities = if args.flag_place_entities {
        let weapons = levels::random_placements(grid, level.weapon_count(), &mut rng);
        let enemies = levels::random_placements(grid, level.enemy_count(), &mut rng);
        report.push(format!("weapons: {}", weapons.iter().join(" ")));
        report.push(format!("enemies: {}", enemies.iter().join(" ")));
        Some((weapons, enemies))
    } else {
        None
    };

    let grid_display: Box<dyn GridDisplay> = if args.flag_show_path {

        let path = level.path_to_exit(grid.entrance())?;
        if path.is_empty() {
            report.push(String::from("no path from the entrance to the exit"));
        } else {
            report.push(format!("path ({} steps): {}", path.len() - 1, path.iter().join(" -> ")));
        }
        Box::new(PathDisplay::new(&path))

    } else if args.flag_show_distances {

        let distances = Distances::new(grid, grid.entrance())?;
        report.push(format!("furthest cells ({} steps): {}",
                            distances.max(),
                            distances.furthest_points_on_grid().iter().join(" ")));
        Box::new(distances)

    } else {
        Box::new(start_end_display(grid, entities.as_ref()))
    };

    let mut output = grid.render_with(Some(grid_display.as_ref()));
    for line in &report {
        output.push_str(line);
        output.push('\n');
    }

    if args.flag_text_out.is_empty() {
        print!("{}", output);
    } else {
        write_text_to_file(&output, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Explicit grid dimensions win over the difficulty setting.
fn build_level(args: &DriverArgs, rng: &mut XorShiftRng) -> Result<Level> {
    if let (Some(width), Some(height)) = (args.flag_grid_width, args.flag_grid_height) {
        Ok(Level::with_dimensions(Width(width), Height(height), rng)?)
    } else {
        let difficulty = args.flag_difficulty.parse::<Difficulty>()?;
        Ok(Level::new(difficulty, rng)?)
    }
}

fn start_end_display(grid: &Grid,
                     entities: Option<&(Vec<GridCoordinate>, Vec<GridCoordinate>)>)
                     -> StartEndPointsDisplay {
    let mut display = StartEndPointsDisplay::new(grid.entrance(), grid.exit());
    if let Some((weapons, enemies)) = entities {
        display.mark(weapons, 'w');
        display.mark(enemies, 'x');
    }
    display
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
