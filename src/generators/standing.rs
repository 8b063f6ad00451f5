use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Maze};

/// Probability of proposing the removal of any given interior wall.
const REMOVAL_CHANCE: f64 = 0.12;

/// Loosens a perfect maze into a "standing walls" maze.
///
/// Every interior wall is considered exactly once (only North and East are
/// scanned per cell, so a shared wall is never processed from both sides).
/// A proposed removal is rejected when it would leave a 2x2 block of cells
/// with no walls between any of the four.
///
/// The void check is local to the wall being removed and the scan order is
/// fixed, so the result depends on iteration order and the per-wall random
/// draws. That is intentional; the only guarantee is the absence of fully
/// open 2x2 regions, not maximal openness.
pub fn knock_out_standing_walls(maze: &mut Maze, rng: &mut StdRng) {
    for coord in maze.coords().collect::<Vec<_>>() {
        for dir in [Direction::North, Direction::East] {
            if maze.neighbor(coord, dir).is_none() {
                // Boundary wall, never removable
                continue;
            }
            if maze.has_wall(coord, dir) && rng.random_bool(REMOVAL_CHANCE) {
                if !creates_void(maze, coord, dir) {
                    maze.carve_wall(coord, dir);
                }
            }
        }
    }
}

/// Tests whether removing the wall of `coord` in `dir` would create a fully
/// open 2x2 block. The wall is carved tentatively, the up-to-4 candidate
/// clusters containing it are inspected, and the wall is always restored;
/// committing the removal is the caller's decision.
fn creates_void(maze: &mut Maze, coord: (u8, u8), dir: Direction) -> bool {
    maze.set_wall_pair(coord, dir, false);

    let mut void = false;
    // A 2x2 cluster is identified by its south-west corner; the four clusters
    // that could contain this wall have corners at (x-1..=x, y-1..=y).
    for ox in [-1i16, 0] {
        for oy in [-1i16, 0] {
            let cx = coord.0 as i16 + ox;
            let cy = coord.1 as i16 + oy;
            if cx < 0 || cy < 0 || cx + 1 >= maze.width() as i16 || cy + 1 >= maze.height() as i16 {
                continue;
            }
            let corner = (cx as u8, cy as u8);
            let diagonal = (corner.0 + 1, corner.1 + 1);
            // The cluster is a void when none of its four inner walls stand
            if !maze.has_wall(corner, Direction::North)
                && !maze.has_wall(corner, Direction::East)
                && !maze.has_wall(diagonal, Direction::South)
                && !maze.has_wall(diagonal, Direction::West)
            {
                void = true;
            }
        }
    }

    maze.set_wall_pair(coord, dir, true);
    void
}
