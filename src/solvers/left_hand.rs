use super::Step;
use crate::maze::{Direction, Maze};

/// Left-hand wall following: keep a hand on the wall to the left.
///
/// From the current facing, directions are tried in the fixed priority order
/// left, straight, right, behind; the agent moves into the first open one and
/// adopts it as the new facing. A fully enclosed cell cannot occur in a
/// connected maze but is handled as a terminal condition rather than a panic.
pub fn follow(maze: &Maze, position: (u8, u8), facing: Direction) -> Step {
    let priority = [facing.left(), facing, facing.right(), facing.opposite()];
    for dir in priority {
        if let Some(next) = maze.open_neighbor(position, dir) {
            return Step::Move {
                to: next,
                facing: dir,
            };
        }
    }
    Step::Finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MazeType, generate_maze};

    #[test]
    fn test_never_moves_through_a_wall() {
        let mut maze = Maze::new(16, 16);
        generate_maze(&mut maze, MazeType::Perfect, Some(31));
        let mut position = (0, 0);
        let mut facing = Direction::North;
        for _ in 0..2000 {
            match follow(&maze, position, facing) {
                Step::Move { to, facing: dir } => {
                    assert!(!maze.has_wall(position, dir), "walked through a wall");
                    assert_eq!(maze.open_neighbor(position, dir), Some(to));
                    position = to;
                    facing = dir;
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_prefers_left_turn() {
        // Open corridor cross at (1, 1): coming from the south facing north,
        // the left-hand rule turns west.
        let mut maze = Maze::new(3, 3);
        for dir in Direction::ALL {
            maze.carve_wall((1, 1), dir);
        }
        assert_eq!(
            follow(&maze, (1, 1), Direction::North),
            Step::Move {
                to: (0, 1),
                facing: Direction::West
            }
        );
    }

    #[test]
    fn test_enclosed_agent_finishes() {
        let maze = Maze::new(3, 3);
        assert_eq!(follow(&maze, (1, 1), Direction::North), Step::Finished);
    }

    #[test]
    fn test_wall_follower_eventually_reaches_goal_in_perfect_maze() {
        // In a simply connected maze the left-hand rule traverses every
        // passage, so any goal is reached within 2x the passage count.
        let mut maze = Maze::new(8, 8);
        generate_maze(&mut maze, MazeType::Perfect, Some(17));
        let goal = (7, 7);
        let mut position = (0, 0);
        let mut facing = Direction::North;
        let mut reached = false;
        for _ in 0..4 * 8 * 8 {
            match follow(&maze, position, facing) {
                Step::Move { to, facing: dir } => {
                    position = to;
                    facing = dir;
                }
                _ => break,
            }
            if position == goal {
                reached = true;
                break;
            }
        }
        assert!(reached, "left-hand rule never found the goal");
    }
}
