use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;
use crate::pathing;
use crate::units::{Height, Width};


/// How hard a level is, which decides the side length of its square maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn maze_size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> ::std::result::Result<Difficulty, String> {
        match s.trim().to_lowercase().as_ref() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}', expected easy, medium or hard", other)),
        }
    }
}

/// One level's maze, generated once when the level is built.
///
/// The maze is only ever handed out by shared reference. Moving to another level, or restarting,
/// means building a new `Level`; the old maze is dropped whole.
#[derive(Debug, Clone)]
pub struct Level {
    difficulty: Option<Difficulty>,
    grid: Grid,
}

impl Level {
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<Level> {
        let size = difficulty.maze_size();
        let mut level = Level::with_dimensions(Width(size), Height(size), rng)?;
        level.difficulty = Some(difficulty);
        info!("built {} level", difficulty);
        Ok(level)
    }

    pub fn with_dimensions<R: Rng>(width: Width, height: Height, rng: &mut R) -> Result<Level> {
        let mut grid = Grid::new(width, height)?;
        generators::generate(&mut grid, rng);

        Ok(Level {
            difficulty: None,
            grid,
        })
    }

    #[inline]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn weapon_count(&self) -> usize {
        self.grid.width() / 2
    }

    pub fn enemy_count(&self) -> usize {
        self.grid.width() / 3
    }

    /// Shortest route from `from` to the maze exit, for the path overlay.
    pub fn path_to_exit(&self, from: GridCoordinate) -> Result<Vec<GridCoordinate>> {
        pathing::find_path(&self.grid, from, self.grid.exit())
    }

    pub fn is_exit(&self, coord: GridCoordinate) -> bool {
        coord == self.grid.exit()
    }
}

/// `count` uniformly random cells of `grid`, never the entrance or the exit.
///
/// The same cell may be drawn more than once. Grids with no cell other than the entrance and exit
/// get no placements.
pub fn random_placements<R: Rng>(grid: &Grid, count: usize, rng: &mut R) -> Vec<GridCoordinate> {
    let reserved = if grid.entrance() == grid.exit() { 1 } else { 2 };
    if grid.size() <= reserved {
        debug!("no room to place {} entities on a {}x{} grid",
               count,
               grid.width(),
               grid.height());
        return vec![];
    }

    let mut placements = Vec::with_capacity(count);
    while placements.len() < count {
        let coord = GridCoordinate::new(rng.gen_range(0..grid.width()) as isize,
                                        rng.gen_range(0..grid.height()) as isize);
        if coord != grid.entrance() && coord != grid.exit() {
            placements.push(coord);
        }
    }
    placements
}
