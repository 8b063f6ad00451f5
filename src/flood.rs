use std::collections::VecDeque;

use crate::maze::{Direction, Maze, UNREACHABLE};

/// Recomputes the breadth-first distance field from `goal`.
///
/// Every cell's `dist` is reset to [`UNREACHABLE`], the goal is seeded at 0,
/// and distances are relaxed outward through open walls in FIFO order. After
/// the call, `dist` is the minimum number of moves to the goal under the
/// current wall configuration; cells the goal cannot reach keep the sentinel.
///
/// The field is invalidated by any wall or goal change; callers recompute
/// instead of patching (cheap at this grid size).
pub fn flood_fill(maze: &mut Maze, goal: (u8, u8)) {
    debug_assert!(maze.is_in_bounds(goal), "flood fill goal out of bounds");

    maze.reset_distances();
    maze[goal].dist = 0;
    let mut queue = VecDeque::from([goal]);

    while let Some(coord) = queue.pop_front() {
        let next_dist = maze[coord].dist.saturating_add(1);
        for dir in Direction::ALL {
            if let Some(next) = maze.open_neighbor(coord, dir) {
                if maze[next].dist > next_dist {
                    maze[next].dist = next_dist;
                    queue.push_back(next);
                }
            }
        }
    }
}
