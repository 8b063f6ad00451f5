use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Maze};

/// Carves a perfect maze with randomized iterative depth-first search.
///
/// Starting from (0, 0), repeatedly picks a random unvisited neighbor of the
/// cell on top of the stack, carves the wall between them, and descends;
/// backtracks by popping when no unvisited neighbor remains. Every cell is
/// reached exactly once, so the carved passages form a spanning tree.
pub fn randomized_dfs(maze: &mut Maze, rng: &mut StdRng) {
    let start = (0, 0);
    maze[start].visited = true;

    // The stack keeps only visited cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = Direction::ALL
            .into_iter()
            .filter_map(|dir| maze.neighbor(cell, dir).map(|next| (dir, next)))
            .filter(|&(_, next)| !maze[next].visited)
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let (dir, next) = neighbors[rng.random_range(0..neighbors.len())];
            maze.carve_wall(cell, dir);
            maze[next].visited = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor on top to carve the maze in that neighbor's direction
            stack.push(next);
        }
    }
}
