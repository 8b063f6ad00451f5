pub mod cell;

pub use cell::{Cell, UNREACHABLE};

/// Cardinal direction of movement and wall lookup.
///
/// The discriminants fix the convention used everywhere in the crate:
/// 0=North(+y), 1=East(+x), 2=South(-y), 3=West(-x). `y` grows northward;
/// the renderer flips rows so north points up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in scan order. Solvers rely on this order for
    /// deterministic tie-breaking.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn from_index(index: usize) -> Direction {
        Direction::ALL[index % 4]
    }

    /// The direction pointing the opposite way: `(d + 2) mod 4`.
    pub fn opposite(self) -> Direction {
        Direction::from_index(self as usize + 2)
    }

    /// The direction 90 degrees counterclockwise: `(d + 3) mod 4`.
    pub fn left(self) -> Direction {
        Direction::from_index(self as usize + 3)
    }

    /// The direction 90 degrees clockwise: `(d + 1) mod 4`.
    pub fn right(self) -> Direction {
        Direction::from_index(self as usize + 1)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "N"),
            Direction::East => write!(f, "E"),
            Direction::South => write!(f, "S"),
            Direction::West => write!(f, "W"),
        }
    }
}

/// A W×H grid of [`Cell`]s. Dimensions are fixed at construction.
///
/// The maze starts fully walled; generators carve passages through
/// [`Maze::carve_wall`], which always removes both sides of a shared wall so
/// adjacent cells never disagree about it.
pub struct Maze {
    data: Box<[Cell]>,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates a fully walled maze with the given dimensions.
    ///
    /// # Panics
    /// If either dimension is 0.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "maze dimensions must be non-zero");
        Maze {
            data: vec![Cell::default(); width as usize * height as usize].into_boxed_slice(),
            width,
            height,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, coord: (u8, u8)) -> usize {
        // Overflow-safe since coordinates are u8 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// The in-bounds neighbor of `coord` in `dir`, or `None` at the boundary.
    pub fn neighbor(&self, coord: (u8, u8), dir: Direction) -> Option<(u8, u8)> {
        let (x, y) = coord;
        // NOTE: wrapping_sub sends an underflowed coordinate to u8::MAX and
        // saturating_add pins an overflowed one there; either way the bounds
        // check below filters it out, since the largest valid index is
        // u8::MAX - 1 when a dimension is u8::MAX.
        let candidate = match dir {
            Direction::North => (x, y.saturating_add(1)),
            Direction::East => (x.saturating_add(1), y),
            Direction::South => (x, y.wrapping_sub(1)),
            Direction::West => (x.wrapping_sub(1), y),
        };
        self.is_in_bounds(candidate).then_some(candidate)
    }

    /// Whether the wall of `coord` in `dir` is still standing. Boundary walls
    /// always are.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: (u8, u8), dir: Direction) -> bool {
        self[coord].walls[dir as usize]
    }

    /// The neighbor of `coord` in `dir` if it is in bounds and no wall blocks
    /// the passage.
    pub fn open_neighbor(&self, coord: (u8, u8), dir: Direction) -> Option<(u8, u8)> {
        if self.has_wall(coord, dir) {
            return None;
        }
        self.neighbor(coord, dir)
    }

    /// Removes the wall of `coord` in `dir` together with the matching wall
    /// on the neighbor, keeping the shared-wall invariant.
    ///
    /// Carving across the maze boundary can never happen through correct
    /// direction arithmetic, so it is treated as a programming error: it
    /// asserts in debug builds and is a silent no-op in release builds.
    pub fn carve_wall(&mut self, coord: (u8, u8), dir: Direction) {
        self.set_wall_pair(coord, dir, false);
    }

    /// Sets or clears both sides of the wall of `coord` in `dir`. Used by
    /// generators only; the standing-walls pass needs to restore a wall it
    /// tentatively removed.
    pub(crate) fn set_wall_pair(&mut self, coord: (u8, u8), dir: Direction, present: bool) {
        let Some(neighbor) = self.neighbor(coord, dir) else {
            debug_assert!(
                false,
                "attempted to carve across the maze boundary at {:?} towards {}",
                coord, dir
            );
            return;
        };
        self[coord].walls[dir as usize] = present;
        self[neighbor].walls[dir.opposite() as usize] = present;
    }

    /// Resets every cell's flood distance to [`UNREACHABLE`].
    pub(crate) fn reset_distances(&mut self) {
        self.data.iter_mut().for_each(|cell| cell.dist = UNREACHABLE);
    }

    /// Iterates over all cell coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u8, u8)> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl std::ops::Index<(u8, u8)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<(u8, u8)> for Maze {
    fn index_mut(&mut self, index: (u8, u8)) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
