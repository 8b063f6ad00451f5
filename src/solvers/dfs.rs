use std::collections::HashMap;

use super::Step;
use crate::maze::{Direction, Maze};

/// Bookkeeping for one depth-first solving run, discarded wholesale whenever
/// the maze regenerates or another policy is selected.
pub struct DfsState {
    /// Cells on the current exploration branch, origin at the bottom.
    stack: Vec<(u8, u8)>,
    /// Flat visited matrix in row-major order.
    visited: Box<[bool]>,
    /// Cell each visited cell was first reached from, for backtracking.
    parent: HashMap<(u8, u8), (u8, u8)>,
    width: u8,
}

impl DfsState {
    /// Fresh state with the exploration rooted at the origin.
    pub fn new(maze: &Maze) -> Self {
        let mut state = DfsState {
            stack: vec![(0, 0)],
            visited: vec![false; maze.width() as usize * maze.height() as usize]
                .into_boxed_slice(),
            parent: HashMap::new(),
            width: maze.width(),
        };
        state.mark_visited((0, 0));
        state
    }

    fn ravel_index(&self, coord: (u8, u8)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    fn is_visited(&self, coord: (u8, u8)) -> bool {
        self.visited[self.ravel_index(coord)]
    }

    fn mark_visited(&mut self, coord: (u8, u8)) {
        let idx = self.ravel_index(coord);
        self.visited[idx] = true;
    }
}

/// Depth-first exploration with backtracking, one cell per call.
///
/// From the cell on top of the stack, the first open unvisited neighbor in
/// N, E, S, W order is visited, pushed, and moved into. With none left the
/// top is popped and the agent walks back to that cell's recorded parent,
/// retracing the branch in reverse. Facing only changes on forward moves.
/// The origin has no parent, so popping it yields [`Step::Hold`]; the next
/// call finds the stack empty and finishes.
pub fn explore(maze: &Maze, state: &mut DfsState, facing: Direction) -> Step {
    let Some(&cell) = state.stack.last() else {
        return Step::Finished;
    };

    for dir in Direction::ALL {
        if let Some(next) = maze.open_neighbor(cell, dir) {
            if !state.is_visited(next) {
                state.mark_visited(next);
                state.stack.push(next);
                state.parent.insert(next, cell);
                return Step::Move { to: next, facing: dir };
            }
        }
    }

    state.stack.pop();
    match state.parent.get(&cell) {
        Some(&parent) => Step::Move { to: parent, facing },
        None => Step::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 1xH corridor: the only possible exploration is straight north and
    /// back.
    fn corridor(height: u8) -> Maze {
        let mut maze = Maze::new(1, height);
        for y in 0..height - 1 {
            maze.carve_wall((0, y), Direction::North);
        }
        maze
    }

    #[test]
    fn test_corridor_walks_out_and_backtracks_in_reverse() {
        let maze = corridor(5);
        let mut state = DfsState::new(&maze);
        let facing = Direction::North;

        // Forward: 4 moves up the corridor
        for y in 1..5u8 {
            assert_eq!(
                explore(&maze, &mut state, facing),
                Step::Move {
                    to: (0, y),
                    facing: Direction::North
                }
            );
        }
        // Backtrack: exactly the reverse order, facing unchanged
        for y in (0..4u8).rev() {
            assert_eq!(
                explore(&maze, &mut state, facing),
                Step::Move { to: (0, y), facing }
            );
        }
        // The origin has no parent, then the stack is empty
        assert_eq!(explore(&maze, &mut state, facing), Step::Hold);
        assert_eq!(explore(&maze, &mut state, facing), Step::Finished);
    }

    #[test]
    fn test_visits_each_cell_at_most_once() {
        use crate::generators::{MazeType, generate_maze};
        let mut maze = Maze::new(8, 8);
        generate_maze(&mut maze, MazeType::Perfect, Some(13));
        let mut state = DfsState::new(&maze);
        let mut facing = Direction::North;
        let mut first_arrivals = std::collections::HashSet::from([(0, 0)]);
        loop {
            let depth_before = state.stack.len();
            match explore(&maze, &mut state, facing) {
                Step::Move { to, facing: f } => {
                    facing = f;
                    if state.stack.len() > depth_before {
                        // Forward move: must be a first visit
                        assert!(first_arrivals.insert(to), "revisited {:?}", to);
                    }
                }
                Step::Hold => {}
                Step::Finished => break,
            }
        }
        // A perfect maze is connected, so the traversal reaches every cell
        assert_eq!(first_arrivals.len(), 8 * 8);
    }
}
