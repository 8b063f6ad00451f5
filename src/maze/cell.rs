/// Sentinel flood-fill distance for cells that are unreachable from the goal
/// or have not been computed yet.
pub const UNREACHABLE: u8 = u8::MAX;

/// A single maze cell: four wall flags plus per-cell solver bookkeeping.
///
/// Wall flags are indexed by [`crate::maze::Direction`] and must always agree
/// with the adjacent cell's flag for the shared wall. All carving goes through
/// [`crate::maze::Maze::carve_wall`], which updates both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Wall presence in direction order North, East, South, West.
    pub(super) walls: [bool; 4],
    /// Flood-fill distance to the goal, [`UNREACHABLE`] until computed.
    pub dist: u8,
    /// Whether the carving pass has reached this cell. Generation-time only.
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            walls: [true; 4],
            dist: UNREACHABLE,
            visited: false,
        }
    }
}

impl Cell {
    /// Number of walls still standing around this cell.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }
}
