use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

/// The four directions a cell has walls in.
///
/// `ALL` is the canonical enumeration order (up, right, down, left). Anything that draws a random
/// index from a list of directions builds that list in this order, so a replayed random source
/// reproduces the same maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    #[inline]
    fn wall_index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::East => 1,
            CompassPrimary::South => 2,
            CompassPrimary::West => 3,
        }
    }
}

/// Grid position. Signed so that a caller's off-by-one below zero is reported as out of bounds
/// rather than wrapping around.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: isize,
    pub y: isize,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

impl GridCoordinate {
    pub fn new(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// The coordinate one step away in `dir`. May lie outside any particular grid.
    pub fn offset(self, dir: CompassPrimary) -> GridCoordinate {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => GridCoordinate { y: y - 1, ..self },
            CompassPrimary::East => GridCoordinate { x: x + 1, ..self },
            CompassPrimary::South => GridCoordinate { y: y + 1, ..self },
            CompassPrimary::West => GridCoordinate { x: x - 1, ..self },
        }
    }
}

impl From<(isize, isize)> for GridCoordinate {
    fn from(x_y_pair: (isize, isize)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One grid position's four walls, `true` meaning the wall is present and blocks movement.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    pub fn new() -> Cell {
        Cell { walls: [true; 4] }
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        self.walls[dir.wall_index()]
    }

    #[inline]
    pub fn is_open(&self, dir: CompassPrimary) -> bool {
        !self.has_wall(dir)
    }

    /// Directions with no wall, in canonical order.
    pub fn open_directions(&self) -> DirectionSmallVec {
        CompassPrimary::ALL.iter()
            .cloned()
            .filter(|dir| self.is_open(*dir))
            .collect()
    }

    pub fn is_fully_walled(&self) -> bool {
        self.walls.iter().all(|&wall| wall)
    }

    #[inline]
    pub(crate) fn set_wall(&mut self, dir: CompassPrimary, present: bool) {
        self.walls[dir.wall_index()] = present;
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::new()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn opposite_directions() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
        assert_eq!(CompassPrimary::North.opposite(), CompassPrimary::South);
        assert_eq!(CompassPrimary::East.opposite(), CompassPrimary::West);
    }

    #[test]
    fn offset_coordinates() {
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(gc(0, 0).offset(CompassPrimary::North), gc(0, -1));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East), gc(1, 0));
        assert_eq!(gc(0, 0).offset(CompassPrimary::South), gc(0, 1));
        assert_eq!(gc(0, 0).offset(CompassPrimary::West), gc(-1, 0));
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(gc(3, 4).offset(*dir).offset(dir.opposite()), gc(3, 4));
        }
    }

    #[test]
    fn new_cell_is_fully_walled() {
        let cell = Cell::new();
        assert!(cell.is_fully_walled());
        for dir in CompassPrimary::ALL.iter() {
            assert!(cell.has_wall(*dir));
        }
        assert!(cell.open_directions().is_empty());
    }

    #[test]
    fn walls_are_independent() {
        let mut cell = Cell::new();
        cell.set_wall(CompassPrimary::West, false);
        cell.set_wall(CompassPrimary::East, false);
        assert!(!cell.is_fully_walled());
        assert!(cell.has_wall(CompassPrimary::North));
        assert!(cell.has_wall(CompassPrimary::South));
        assert_eq!(&*cell.open_directions(), &[CompassPrimary::East, CompassPrimary::West]);
    }
}
