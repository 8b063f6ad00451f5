//! Headless runs of every maze type and solver combination, printing the
//! number of steps each run took. Useful for eyeballing policy behavior
//! without the terminal UI.

use mazeviz::{generators::MazeType, session::Session, solvers::SolverKind};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let solvers = [SolverKind::FloodFill, SolverKind::Dfs, SolverKind::LeftHand];
    for maze_type in [MazeType::Perfect, MazeType::Standing] {
        for solver in solvers {
            let mut session = Session::new(16, 16);
            session.regenerate_seeded(maze_type, seed);
            session.select_algorithm(solver);

            // Wall following can orbit a loop in a standing maze forever,
            // so cap the run
            const MAX_STEPS: usize = 10_000;
            let mut steps = 0usize;
            while session.running() && steps < MAX_STEPS {
                session.step();
                session.finish_move();
                steps += 1;
            }
            let reached = session.agent().position() == session.goal();
            println!(
                "{maze_type:<8} {solver:<10} steps={steps:<5} goal_reached={reached}",
                maze_type = maze_type.to_string(),
                solver = solver.to_string(),
            );
        }
    }
}
