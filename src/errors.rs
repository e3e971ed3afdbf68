use crate::grid::Coord;

/// Contract violations by the caller
/// "No path exists" is not an error - searches report it as Ok(None)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid, // Grid must have at least one row and one column
    RaggedRow { row: usize, expected: usize, found: usize }, // Non-rectangular construction data
    OutOfBounds(Coord), // Endpoint outside the grid
    Blocked(Coord), // Endpoint on a blocked cell
}
