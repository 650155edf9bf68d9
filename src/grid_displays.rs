use crate::cells::GridCoordinate;
use crate::grid_traits::GridDisplay;
use crate::pathing::Distances;
use crate::utils::FnvHashSet;


impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}


#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}


/// Marks the start with an 'S', the end with an 'E' and optional extra points (entities) with a
/// caller chosen glyph.
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinate: GridCoordinate,
    end_coordinate: GridCoordinate,
    marked_points: Vec<(GridCoordinate, char)>,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinate: start,
            end_coordinate: end,
            marked_points: vec![],
        }
    }

    pub fn mark(&mut self, points: &[GridCoordinate], glyph: char) {
        self.marked_points.extend(points.iter().map(|&coord| (coord, glyph)));
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start_coordinate {
            String::from(" S ")
        } else if coord == self.end_coordinate {
            String::from(" E ")
        } else if let Some(&(_, glyph)) = self.marked_points.iter().find(|&&(c, _)| c == coord) {
            format!(" {} ", glyph)
        } else {
            String::from("   ")
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::grid::Grid;
    use crate::units::{Height, Width};

    fn corridor() -> Grid {
        let mut g = Grid::new(Width(3), Height(1)).unwrap();
        g.carve(GridCoordinate::new(0, 0), CompassPrimary::East).unwrap();
        g.carve(GridCoordinate::new(1, 0), CompassPrimary::East).unwrap();
        g.open_entrance_and_exit();
        g
    }

    #[test]
    fn path_overlay() {
        let g = corridor();
        let display = PathDisplay::new(&[GridCoordinate::new(1, 0), GridCoordinate::new(2, 0)]);
        let rendered = g.render_with(Some(&display as &dyn GridDisplay));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["+---+---+---+", "      .   .  ", "+---+---+---+"]);
    }

    #[test]
    fn distances_overlay_in_hex() {
        let mut g = Grid::new(Width(12), Height(1)).unwrap();
        for x in 0..11 {
            g.carve(GridCoordinate::new(x, 0), CompassPrimary::East).unwrap();
        }
        let distances = Distances::new(&g, GridCoordinate::new(0, 0)).unwrap();
        assert_eq!(distances.render_cell_body(GridCoordinate::new(0, 0)), " 0 ");
        assert_eq!(distances.render_cell_body(GridCoordinate::new(11, 0)), " b ");
        assert_eq!(distances.render_cell_body(GridCoordinate::new(12, 0)), "   ");
    }

    #[test]
    fn start_end_and_marked_points() {
        let mut display = StartEndPointsDisplay::new(GridCoordinate::new(0, 0),
                                                     GridCoordinate::new(2, 0));
        display.mark(&[GridCoordinate::new(1, 0)], 'w');
        assert_eq!(display.render_cell_body(GridCoordinate::new(0, 0)), " S ");
        assert_eq!(display.render_cell_body(GridCoordinate::new(1, 0)), " w ");
        assert_eq!(display.render_cell_body(GridCoordinate::new(2, 0)), " E ");
        assert_eq!(display.render_cell_body(GridCoordinate::new(5, 5)), "   ");
    }
}
