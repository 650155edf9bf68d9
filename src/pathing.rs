use std::collections::VecDeque;

use bit_set::BitSet;
use log::trace;
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashMap;


/// Shortest path from `start` to `goal`, both included, moving only through open walls.
///
/// Breadth first search, so the path has the fewest possible steps. Neighbours are expanded in
/// `CompassPrimary::ALL` order; when several shortest paths exist the one found first under that
/// order is returned, every time.
///
/// An unreachable goal gives an empty path. Only coordinates outside the grid are errors.
pub fn find_path(grid: &Grid,
                 start: GridCoordinate,
                 goal: GridCoordinate)
                 -> Result<Vec<GridCoordinate>> {
    let start_index = grid.checked_index(start)?;
    let goal_index = grid.checked_index(goal)?;

    if start_index == goal_index {
        return Ok(vec![start]);
    }

    let mut visited = BitSet::with_capacity(grid.size());
    let mut parents: FnvHashMap<GridCoordinate, GridCoordinate> = utils::fnv_hashmap(grid.size());
    let mut frontier = VecDeque::with_capacity(grid.size());

    let _ = visited.insert(start_index);
    frontier.push_back(start);

    'search: while let Some(cell_coord) = frontier.pop_front() {
        for neighbour_coord in linked_neighbours(grid, cell_coord) {
            let neighbour_index = match grid.grid_coordinate_to_index(neighbour_coord) {
                Some(index) => index,
                None => continue,
            };
            if !visited.insert(neighbour_index) {
                continue;
            }

            let _ = parents.insert(neighbour_coord, cell_coord);
            if neighbour_index == goal_index {
                break 'search;
            }
            frontier.push_back(neighbour_coord);
        }
    }

    if !visited.contains(goal_index) {
        trace!("no path from {} to {}", start, goal);
        return Ok(vec![]);
    }

    let mut path = vec![goal];
    let mut current_coord = goal;
    while current_coord != start {
        current_coord = match parents.get(&current_coord) {
            Some(parent) => *parent,
            None => return Ok(vec![]),
        };
        path.push(current_coord);
    }

    path.reverse();
    trace!("path from {} to {} takes {} steps", start, goal, path.len() - 1);
    Ok(path)
}

/// Step counts from a start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    pub fn new(grid: &Grid, start_coordinate: GridCoordinate) -> Result<Distances> {
        let _ = grid.checked_index(start_coordinate)?;

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // Every link is one step, so the first time a cell is reached is by a shortest route and
        // its distance never changes afterwards. The distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        let mut distance = 0;
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            distance += 1;
            for cell_coord in &frontier {
                for link_coordinate in linked_neighbours(grid, *cell_coord) {
                    if !distances.contains_key(&link_coordinate) {
                        distances.insert(link_coordinate, distance);
                        new_frontier.push(link_coordinate);
                        max = distance;
                    }
                }
            }
            frontier = new_frontier;
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// How many cells, the start included, can be reached from the start.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let mut furthest = SmallVec::<[GridCoordinate; 8]>::new();
        let furthest_distance = self.max();

        for (coord, distance) in self.distances.iter() {
            if *distance == furthest_distance {
                furthest.push(*coord);
            }
        }
        furthest.sort();
        furthest
    }
}

/// Adjacent cells with an open wall between them and `coord`, in canonical direction order.
fn linked_neighbours(grid: &Grid, coord: GridCoordinate) -> SmallVec<[GridCoordinate; 4]> {
    CompassPrimary::ALL.iter()
        .filter(|&&dir| grid.is_neighbour_linked(coord, dir))
        .map(|&dir| coord.offset(dir))
        .collect()
}
