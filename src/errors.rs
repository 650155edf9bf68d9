// Create the Error, ErrorKind, ResultExt, and Result types.
// Both kinds are precondition failures detected before a grid is touched.
use crate::cells::GridCoordinate;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} x {}, width and height must be at least 1 \
                     and the grid small enough to store",
                    width, height)
        }
        OutOfBounds(coord: GridCoordinate) {
            description("coordinate outside of the grid")
            display("coordinate {} is outside of the grid", coord)
        }
    }
}
