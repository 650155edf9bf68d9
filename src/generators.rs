use bit_set::BitSet;
use log::{debug, trace};
use rand::Rng;

use crate::cells::{CompassPrimary, DirectionSmallVec, GridCoordinate};
use crate::grid::Grid;


/// Turn a freshly constructed grid into a looped maze with a single entrance and exit.
///
/// Runs the recursive backtracker, then carves extra loop passages, then seals the perimeter
/// and opens the entrance and exit. Later passes override earlier ones at the border, so the
/// order is fixed.
///
/// The grid must not have been carved before. Regenerating a maze means building a new `Grid`.
pub fn generate<R: Rng>(grid: &mut Grid, rng: &mut R) {
    debug_assert!(grid.is_fully_walled(), "maze generation requires a freshly built grid");

    recursive_backtracker(grid, rng);
    let tree_links = grid.links_count();

    let loops_carved = carve_loops(grid, rng);
    seal_with_entrance_and_exit(grid);

    debug!("generated {}x{} maze: {} spanning tree links, {} loop links",
           grid.width(),
           grid.height(),
           tree_links,
           loops_carved);
}

/// Apply the recursive backtracker maze generation algorithm to the grid, starting at the entrance.
///
/// A random walk that only steps into unvisited cells, carving as it goes. When the walk reaches a
/// cell with no unvisited neighbours it backtracks along its own path (the stack) until it finds
/// a cell that has one. Every cell is visited exactly once so the result is a perfect maze: a
/// spanning tree with exactly one simple path between any two cells.
///
/// Candidate neighbours are listed in `CompassPrimary::ALL` order before one is drawn, which
/// keeps the carved maze a pure function of the random draws.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let mut visited = BitSet::with_capacity(grid.size());
    let mut stack: Vec<GridCoordinate> = Vec::with_capacity(grid.size());

    let start = grid.entrance();
    visit(grid, &mut visited, start);
    stack.push(start);

    let mut backtracked = 0;
    while let Some(&current) = stack.last() {

        let unvisited_directions = CompassPrimary::ALL.iter()
            .cloned()
            .filter(|&dir| {
                grid.neighbour_at_direction(current, dir)
                    .map_or(false, |neighbour| !is_visited(grid, &visited, neighbour))
            })
            .collect::<DirectionSmallVec>();

        if unvisited_directions.is_empty() {
            let _ = stack.pop();
            backtracked += 1;
        } else {
            let dir = unvisited_directions[rng.gen_range(0..unvisited_directions.len())];
            let next = current.offset(dir);

            grid.carve_in_bounds(current, dir);
            visit(grid, &mut visited, next);
            stack.push(next);
        }
    }

    trace!("recursive backtracker visited {} cells, {} backtracking steps",
           visited.len(),
           backtracked);
}

/// Open `floor(width * height / 10)` randomly chosen walls, making loops in a perfect maze.
///
/// Each trial picks a cell and a direction uniformly at random. Trials that land on an open wall
/// do nothing. Trials that land on a perimeter wall open only that wall, which is closed again
/// when the border is sealed.
///
/// Returns how many of the trials opened a wall between two cells.
pub fn carve_loops<R: Rng>(grid: &mut Grid, rng: &mut R) -> usize {
    let trials = grid.size() / 10;
    let mut carved = 0;

    for _ in 0..trials {
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        let dir = CompassPrimary::ALL[rng.gen_range(0..CompassPrimary::ALL.len())];
        let coord = GridCoordinate::new(x as isize, y as isize);

        if grid.cell_in_bounds(coord).has_wall(dir) {
            grid.carve_in_bounds(coord, dir);
            if grid.neighbour_at_direction(coord, dir).is_some() {
                carved += 1;
            }
        }
    }

    carved
}

/// Close the whole perimeter, then open the entrance and the exit.
pub fn seal_with_entrance_and_exit(grid: &mut Grid) {
    grid.seal_border();
    grid.open_entrance_and_exit();
}

#[inline]
fn visit(grid: &Grid, visited: &mut BitSet, coord: GridCoordinate) {
    if let Some(index) = grid.grid_coordinate_to_index(coord) {
        let _ = visited.insert(index);
    }
}

#[inline]
fn is_visited(grid: &Grid, visited: &BitSet, coord: GridCoordinate) -> bool {
    grid.grid_coordinate_to_index(coord)
        .map_or(false, |index| visited.contains(index))
}
