mod dfs;
mod flood;
mod left_hand;

pub use dfs::DfsState;

use crate::maze::{Direction, Maze};

/// The solving policy driving the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    FloodFill,
    Dfs,
    LeftHand,
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::FloodFill => write!(f, "Flood Fill"),
            SolverKind::Dfs => write!(f, "DFS"),
            SolverKind::LeftHand => write!(f, "Left Hand"),
        }
    }
}

/// Outcome of a single solver step. Exactly one cell of movement is proposed
/// per invocation; anything else is a terminal or idle condition, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the agent one cell to `to`, now facing `facing`.
    Move { to: (u8, u8), facing: Direction },
    /// No movement this step, but the run continues (DFS popping the origin).
    Hold,
    /// No further move is possible; the run is over.
    Finished,
}

/// Advances the active policy by one step.
///
/// `maze` is mutable because the flood-fill policy recomputes the distance
/// field in place on every step; the policies never touch walls.
pub fn step(
    kind: SolverKind,
    maze: &mut Maze,
    goal: (u8, u8),
    position: (u8, u8),
    facing: Direction,
    dfs: &mut DfsState,
) -> Step {
    match kind {
        SolverKind::FloodFill => flood::descend(maze, goal, position),
        SolverKind::Dfs => dfs::explore(maze, dfs, facing),
        SolverKind::LeftHand => left_hand::follow(maze, position, facing),
    }
}
