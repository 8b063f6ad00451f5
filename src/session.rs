use crate::flood::flood_fill;
use crate::generators::{MazeType, generate_maze};
use crate::maze::{Direction, Maze};
use crate::solvers::{self, DfsState, SolverKind, Step};

/// The moving agent: its committed cell, the cell it is currently moving
/// into, and which way it faces. Animation between the two cells is the
/// presentation layer's business.
pub struct Agent {
    position: (u8, u8),
    target: (u8, u8),
    facing: Direction,
}

impl Agent {
    fn at_origin() -> Self {
        Agent {
            position: (0, 0),
            target: (0, 0),
            facing: Direction::North,
        }
    }

    /// The cell the agent last arrived at.
    pub fn position(&self) -> (u8, u8) {
        self.position
    }

    /// The cell the agent is moving into; equals `position` when idle.
    pub fn target(&self) -> (u8, u8) {
        self.target
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }
}

/// Owns one maze-solving session: the maze, the goal, the agent, the path
/// walked so far, and the active policy. The presentation layer polls this
/// state every frame and feeds control commands back in; nothing here blocks
/// or keeps time.
pub struct Session {
    maze: Maze,
    maze_type: MazeType,
    goal: (u8, u8),
    agent: Agent,
    path: Vec<(u8, u8)>,
    algorithm: Option<SolverKind>,
    running: bool,
    dfs: DfsState,
    speed_level: u8,
}

impl Session {
    pub const MIN_SPEED_LEVEL: u8 = 1;
    pub const MAX_SPEED_LEVEL: u8 = 5;

    /// Creates a session with a freshly generated perfect maze and the goal
    /// at the center.
    ///
    /// # Panics
    /// If either dimension is 0.
    pub fn new(width: u8, height: u8) -> Self {
        let mut maze = Maze::new(width, height);
        generate_maze(&mut maze, MazeType::Perfect, None);
        let dfs = DfsState::new(&maze);
        Session {
            maze,
            maze_type: MazeType::Perfect,
            goal: (width / 2, height / 2),
            agent: Agent::at_origin(),
            path: vec![(0, 0)],
            algorithm: None,
            running: false,
            dfs,
            speed_level: 3,
        }
    }

    /// Rebuilds the maze with the given type, then resets the run. The goal
    /// keeps its position.
    pub fn regenerate(&mut self, maze_type: MazeType) {
        self.regenerate_seeded(maze_type, None);
    }

    /// [`Session::regenerate`] with a fixed RNG seed, for reproducible runs.
    pub fn regenerate_seeded(&mut self, maze_type: MazeType, seed: Option<u64>) {
        let mut maze = Maze::new(self.maze.width(), self.maze.height());
        generate_maze(&mut maze, maze_type, seed);
        self.maze = maze;
        self.maze_type = maze_type;
        self.reset_run();
    }

    /// Discards the agent, path, and all solver-private state. Selecting a
    /// policy or regenerating goes through here, so no stale stack, visited
    /// matrix, or parent map ever leaks into the next run.
    fn reset_run(&mut self) {
        self.agent = Agent::at_origin();
        self.path = vec![(0, 0)];
        self.algorithm = None;
        self.running = false;
        self.dfs = DfsState::new(&self.maze);
    }

    /// Starts a fresh run of the given policy from the origin.
    pub fn select_algorithm(&mut self, kind: SolverKind) {
        self.reset_run();
        self.algorithm = Some(kind);
        self.running = true;
        tracing::info!("selected {} solver", kind);
    }

    /// Moves the goal. An out-of-bounds coordinate is silently ignored.
    pub fn set_goal(&mut self, x: u8, y: u8) {
        if self.maze.is_in_bounds((x, y)) {
            self.goal = (x, y);
        } else {
            tracing::debug!("ignoring out-of-bounds goal ({}, {})", x, y);
        }
    }

    /// Clamps and sets the animation speed level (1..=5).
    pub fn set_speed_level(&mut self, level: u8) {
        self.speed_level = level.clamp(Self::MIN_SPEED_LEVEL, Self::MAX_SPEED_LEVEL);
    }

    /// Advances the active policy by one step, proposing at most one cell of
    /// movement via the agent's target. A no-op unless running; reaching the
    /// goal or running out of moves flips `running` off. The caller is
    /// expected to let any in-progress move finish before stepping again.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        let Some(kind) = self.algorithm else {
            return;
        };
        if self.agent.position == self.goal {
            self.running = false;
            tracing::info!("{} reached the goal at {:?}", kind, self.goal);
            return;
        }

        match solvers::step(
            kind,
            &mut self.maze,
            self.goal,
            self.agent.position,
            self.agent.facing,
            &mut self.dfs,
        ) {
            Step::Move { to, facing } => {
                self.agent.target = to;
                self.agent.facing = facing;
                self.path.push(to);
            }
            Step::Hold => {}
            Step::Finished => {
                self.running = false;
                tracing::info!("{} stopped with no further move", kind);
            }
        }
    }

    /// Commits the in-progress move; called by the presentation layer once
    /// the move's animation has played out.
    pub fn finish_move(&mut self) {
        self.agent.position = self.agent.target;
    }

    /// Whether a proposed move has not been committed yet.
    pub fn move_in_progress(&self) -> bool {
        self.agent.position != self.agent.target
    }

    /// Recomputes the flood distance field from the current goal so the
    /// renderer can overlay per-cell distances.
    pub fn refresh_flood(&mut self) {
        flood_fill(&mut self.maze, self.goal);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn maze_type(&self) -> MazeType {
        self.maze_type
    }

    pub fn goal(&self) -> (u8, u8) {
        self.goal
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Every cell the agent has been sent to, in order, duplicates included.
    pub fn path(&self) -> &[(u8, u8)] {
        &self.path
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn algorithm(&self) -> Option<SolverKind> {
        self.algorithm
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }
}
