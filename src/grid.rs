use std::{fmt, mem};

use crate::cells::{Cell, CompassPrimary, CoordinateSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid_traits::GridDisplay;
use crate::units::{Height, Width};


/// A fixed size rectangle of cells, each holding its own four walls.
///
/// Walls between two cells are stored twice, once on each side. `carve` always opens both halves
/// so the pair stays symmetric; only walls on the grid's perimeter exist on one side.
///
/// The entrance is the top left cell, opened to the west. The exit is the bottom right cell,
/// opened to the east.
///
/// Construction caps the cell storage at `isize::MAX` bytes, so both dimensions also fit in an
/// `isize` and every in-grid `GridCoordinate` is representable.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, links: {:?}",
               self.width, self.height, self.links_count())
    }
}

impl Grid {
    /// A grid of `width` * `height` cells with every wall closed.
    ///
    /// Zero sized dimensions, and dimensions whose cells would not fit in one allocation, are
    /// `InvalidDimensions`.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let cells_count = w.checked_mul(h)
            .filter(|&count| count > 0)
            .filter(|&count| {
                count.checked_mul(mem::size_of::<Cell>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| Error::from(ErrorKind::InvalidDimensions(w, h)))?;

        Ok(Grid {
            width: w,
            height: h,
            cells: vec![Cell::new(); cells_count],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(0, 0)
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.width as isize - 1, self.height as isize - 1)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.width &&
        (coord.y as usize) < self.height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: GridCoordinate) -> Result<&Cell> {
        let index = self.checked_index(coord)?;
        Ok(&self.cells[index])
    }

    /// Is the wall on `coord`'s `direction` side open?
    pub fn wall_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> Result<bool> {
        self.cell(coord).map(|cell| cell.is_open(direction))
    }

    /// Open the wall on `coord`'s `direction` side and the facing wall of the neighbour there.
    ///
    /// Carving towards the outside of the grid only opens `coord`'s own boundary wall.
    pub fn carve(&mut self, coord: GridCoordinate, direction: CompassPrimary) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.carve_at_index(index, coord, direction);
        Ok(())
    }

    /// `carve` for coordinates the caller has already placed inside the grid, such as the
    /// generators' own walk. Panics on a coordinate outside the grid.
    pub(crate) fn carve_in_bounds(&mut self, coord: GridCoordinate, direction: CompassPrimary) {
        let index = self.index_in_bounds(coord);
        self.carve_at_index(index, coord, direction);
    }

    /// The cell at a coordinate the caller has already placed inside the grid.
    /// Panics on a coordinate outside the grid.
    pub(crate) fn cell_in_bounds(&self, coord: GridCoordinate) -> &Cell {
        &self.cells[self.index_in_bounds(coord)]
    }

    fn carve_at_index(&mut self, index: usize, coord: GridCoordinate, direction: CompassPrimary) {
        self.cells[index].set_wall(direction, false);

        if let Some(neighbour_index) = self.grid_coordinate_to_index(coord.offset(direction)) {
            self.cells[neighbour_index].set_wall(direction.opposite(), false);
        }
    }

    /// Close every wall that faces out of the grid, whatever its current state.
    pub fn seal_border(&mut self) {
        let (w, h) = (self.width, self.height);
        for x in 0..w {
            self.cells[x].set_wall(CompassPrimary::North, true);
            self.cells[(h - 1) * w + x].set_wall(CompassPrimary::South, true);
        }
        for y in 0..h {
            self.cells[y * w].set_wall(CompassPrimary::West, true);
            self.cells[y * w + (w - 1)].set_wall(CompassPrimary::East, true);
        }
    }

    /// Open the two perimeter walls that lead into and out of the maze.
    /// Must follow `seal_border`, which would otherwise close them again.
    pub fn open_entrance_and_exit(&mut self) {
        let last = self.size() - 1;
        self.cells[0].set_wall(CompassPrimary::West, false);
        self.cells[last].set_wall(CompassPrimary::East, false);
    }

    /// True while nothing has been carved into the grid.
    pub fn is_fully_walled(&self) -> bool {
        self.cells.iter().all(Cell::is_fully_walled)
    }

    /// Number of open walls between pairs of cells inside the grid.
    pub fn links_count(&self) -> usize {
        self.iter()
            .map(|coord| {
                [CompassPrimary::East, CompassPrimary::South]
                    .iter()
                    .filter(|&&dir| self.is_neighbour_linked(coord, dir))
                    .count()
            })
            .sum()
    }

    /// Cells that are to the North, East, South or West of a particular cell, but not
    /// necessarily linked by a passage. Canonical direction order.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        let neighbour_coord = coord.offset(direction);
        if self.is_valid_coordinate(neighbour_coord) {
            Some(neighbour_coord)
        } else {
            None
        }
    }

    /// The cell reached by stepping from `coord` towards `direction`, if no wall blocks the way
    /// and the step stays inside the grid.
    pub fn passable_neighbour(&self,
                              coord: GridCoordinate,
                              direction: CompassPrimary)
                              -> Result<Option<GridCoordinate>> {
        if self.wall_open(coord, direction)? {
            Ok(self.neighbour_at_direction(coord, direction))
        } else {
            Ok(None)
        }
    }

    /// Is `coord` connected to its in-grid neighbour at `direction`? False for invalid coordinates.
    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => {
                self.cells[index].is_open(direction) &&
                self.neighbour_at_direction(coord, direction).is_some()
            }
            None => false,
        }
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.width,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            current_index: 0,
            row_length: self.width,
            rows_count: self.height,
        }
    }

    /// Text rendering of the walls, with the cell bodies filled in by `grid_display` if given.
    pub fn render_with(&self, grid_display: Option<&dyn GridDisplay>) -> String {
        const CORNER: &str = "+";
        const WALL_LR_3: &str = "---";
        const WALL_UD: &str = "|";
        const OPEN_LR_3: &str = "   ";
        const OPEN_UD: &str = " ";

        let mut output = String::new();

        for row in self.iter_row() {
            // Each cell draws its own northern and western walls, the row closes out the east.
            let mut row_top_section_render = String::new();
            let mut row_middle_section_render = String::new();

            for &coord in &row {
                let cell = &self.cells[coord.y as usize * self.width + coord.x as usize];

                row_top_section_render.push_str(CORNER);
                row_top_section_render.push_str(if cell.has_wall(CompassPrimary::North) {
                    WALL_LR_3
                } else {
                    OPEN_LR_3
                });

                row_middle_section_render.push_str(if cell.has_wall(CompassPrimary::West) {
                    WALL_UD
                } else {
                    OPEN_UD
                });
                let body = grid_display.map_or_else(|| String::from(OPEN_LR_3),
                                                    |display| display.render_cell_body(coord));
                row_middle_section_render.push_str(&body);
            }

            let last_cell = &self.cells[(row[0].y as usize + 1) * self.width - 1];
            row_top_section_render.push_str(CORNER);
            row_middle_section_render.push_str(if last_cell.has_wall(CompassPrimary::East) {
                WALL_UD
            } else {
                OPEN_UD
            });

            output.push_str(&row_top_section_render);
            output.push('\n');
            output.push_str(&row_middle_section_render);
            output.push('\n');
        }

        // The southern boundary of the bottom row
        let bottom_row_start = (self.height - 1) * self.width;
        for cell in &self.cells[bottom_row_start..] {
            output.push_str(CORNER);
            output.push_str(if cell.has_wall(CompassPrimary::South) {
                WALL_LR_3
            } else {
                OPEN_LR_3
            });
        }
        output.push_str(CORNER);
        output.push('\n');

        output
    }

    /// Index of `coord`, or `OutOfBounds` naming it.
    pub(crate) fn checked_index(&self, coord: GridCoordinate) -> Result<usize> {
        self.grid_coordinate_to_index(coord)
            .ok_or_else(|| Error::from(ErrorKind::OutOfBounds(coord)))
    }

    #[inline]
    fn index_in_bounds(&self, coord: GridCoordinate) -> usize {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => index,
            None => panic!("{} is outside the {}x{} grid", coord, self.width, self.height),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render_with(None))
    }
}

// Converting a &Grid into an iterator CellIter - the default most sensible
impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row major iteration over every coordinate of a grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = index_to_grid_coordinate(self.row_length, self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iteration over the grid one row at a time, top to bottom.
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    current_index: usize,
    row_length: usize,
    rows_count: usize,
}

impl ExactSizeIterator for BatchIter {}
impl Iterator for BatchIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index < self.rows_count {
            let y = self.current_index as isize;
            let coords = (0..self.row_length)
                .map(|x| GridCoordinate::new(x as isize, y))
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_count - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

fn index_to_grid_coordinate(row_length: usize, one_dimensional_index: usize) -> GridCoordinate {
    let y = one_dimensional_index / row_length;
    let x = one_dimensional_index - (y * row_length);
    GridCoordinate::new(x as isize, y as isize)
}
