use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod standing;

use crate::maze::Maze;
use dfs::randomized_dfs;
use standing::knock_out_standing_walls;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The flavor of maze to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeType {
    /// A spanning tree over all cells: exactly one path between any two.
    Perfect,
    /// A perfect maze loosened by removing extra walls, with fully open 2x2
    /// regions forbidden.
    Standing,
}

impl MazeType {
    /// Switches between the two maze flavors.
    pub fn toggled(self) -> MazeType {
        match self {
            MazeType::Perfect => MazeType::Standing,
            MazeType::Standing => MazeType::Perfect,
        }
    }
}

impl std::fmt::Display for MazeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeType::Perfect => write!(f, "PERFECT"),
            MazeType::Standing => write!(f, "STANDING"),
        }
    }
}

/// Carves `maze` in place according to `maze_type`. The maze is expected to
/// be fully walled (freshly constructed).
pub fn generate_maze(maze: &mut Maze, maze_type: MazeType, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    randomized_dfs(maze, &mut rng);
    if maze_type == MazeType::Standing {
        knock_out_standing_walls(maze, &mut rng);
    }
    tracing::debug!("generated {}x{} {} maze", maze.width(), maze.height(), maze_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use std::collections::VecDeque;

    /// Counts carved wall pairs by scanning only North and East per cell so
    /// each shared wall is counted once.
    fn carved_pairs(maze: &Maze) -> usize {
        maze.coords()
            .map(|coord| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|&dir| {
                        maze.neighbor(coord, dir).is_some() && !maze.has_wall(coord, dir)
                    })
                    .count()
            })
            .sum()
    }

    /// Counts cells reachable from (0, 0) through open walls.
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.width() as usize * maze.height() as usize];
        let ravel = |c: (u8, u8)| c.1 as usize * maze.width() as usize + c.0 as usize;
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0] = true;
        let mut count = 0;
        while let Some(coord) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if let Some(next) = maze.open_neighbor(coord, dir) {
                    if !seen[ravel(next)] {
                        seen[ravel(next)] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        count
    }

    #[test]
    fn test_perfect_maze_is_spanning_tree() {
        for seed in 0..20 {
            let mut maze = Maze::new(16, 16);
            generate_maze(&mut maze, MazeType::Perfect, Some(seed));
            let cells = 16 * 16;
            // Connected with exactly cells - 1 carved walls means no cycles
            assert_eq!(reachable_cells(&maze), cells, "seed {seed}: not connected");
            assert_eq!(carved_pairs(&maze), cells - 1, "seed {seed}: wrong wall count");
        }
    }

    #[test]
    fn test_standing_maze_stays_connected() {
        for seed in 0..20 {
            let mut maze = Maze::new(16, 16);
            generate_maze(&mut maze, MazeType::Standing, Some(seed));
            // Removing walls can only add connectivity
            assert_eq!(reachable_cells(&maze), 16 * 16, "seed {seed}: not connected");
            assert!(carved_pairs(&maze) >= 16 * 16 - 1, "seed {seed}: lost walls");
        }
    }

    #[test]
    fn test_standing_maze_has_no_open_voids() {
        for seed in 0..50 {
            let mut maze = Maze::new(16, 16);
            generate_maze(&mut maze, MazeType::Standing, Some(seed));
            for x in 0..15 {
                for y in 0..15 {
                    let corner = (x, y);
                    let diagonal = (x + 1, y + 1);
                    let open = !maze.has_wall(corner, Direction::North)
                        && !maze.has_wall(corner, Direction::East)
                        && !maze.has_wall(diagonal, Direction::South)
                        && !maze.has_wall(diagonal, Direction::West);
                    assert!(!open, "seed {seed}: open 2x2 void at {:?}", corner);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_with_seed() {
        let mut first = Maze::new(8, 8);
        let mut second = Maze::new(8, 8);
        generate_maze(&mut first, MazeType::Standing, Some(42));
        generate_maze(&mut second, MazeType::Standing, Some(42));
        for coord in first.coords() {
            for dir in Direction::ALL {
                assert_eq!(first.has_wall(coord, dir), second.has_wall(coord, dir));
            }
        }
    }
}
