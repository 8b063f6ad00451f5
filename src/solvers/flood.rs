use super::Step;
use crate::flood::flood_fill;
use crate::maze::{Direction, Maze};

/// Flood-fill descent: recompute the distance field from the goal, then move
/// to the open neighbor with the strictly smallest distance.
///
/// The field is rebuilt every step so a goal moved mid-run is picked up
/// immediately. Ties go to the first direction in N, E, S, W scan order.
/// With an exact field every reachable non-goal cell has a neighbor one step
/// closer, so `Finished` here means the agent is at the goal or cut off
/// from it.
pub fn descend(maze: &mut Maze, goal: (u8, u8), position: (u8, u8)) -> Step {
    flood_fill(maze, goal);

    let mut best_dist = maze[position].dist;
    let mut best: Option<(Direction, (u8, u8))> = None;
    for dir in Direction::ALL {
        if let Some(next) = maze.open_neighbor(position, dir) {
            if maze[next].dist < best_dist {
                best_dist = maze[next].dist;
                best = Some((dir, next));
            }
        }
    }

    match best {
        Some((facing, to)) => Step::Move { to, facing },
        None => Step::Finished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MazeType, generate_maze};

    #[test]
    fn test_never_moves_to_a_higher_distance() {
        let mut maze = Maze::new(16, 16);
        generate_maze(&mut maze, MazeType::Standing, Some(21));
        let goal = (15, 15);
        let mut position = (0, 0);
        for _ in 0..16 * 16 {
            if position == goal {
                break;
            }
            let before = {
                flood_fill(&mut maze, goal);
                maze[position].dist
            };
            match descend(&mut maze, goal, position) {
                Step::Move { to, .. } => {
                    assert!(maze[to].dist < before, "moved uphill at {:?}", position);
                    position = to;
                }
                other => panic!("unexpected {:?} at {:?}", other, position),
            }
        }
        assert_eq!(position, goal, "never reached the goal");
    }

    #[test]
    fn test_finishes_at_goal() {
        let mut maze = Maze::new(8, 8);
        generate_maze(&mut maze, MazeType::Perfect, Some(2));
        assert_eq!(descend(&mut maze, (3, 3), (3, 3)), Step::Finished);
    }

    #[test]
    fn test_finishes_when_cut_off() {
        // No walls carved at all: every cell is sealed, nothing improves
        let mut maze = Maze::new(4, 4);
        assert_eq!(descend(&mut maze, (3, 3), (0, 0)), Step::Finished);
    }

    #[test]
    fn test_ties_break_in_scan_order() {
        // 2x1 corridor with the goal east of the agent: the only open
        // neighbor is East and must be chosen with facing East.
        let mut maze = Maze::new(2, 1);
        maze.carve_wall((0, 0), Direction::East);
        assert_eq!(
            descend(&mut maze, (1, 0), (0, 0)),
            Step::Move {
                to: (1, 0),
                facing: Direction::East
            }
        );
    }
}
