use std::collections::HashSet;
use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Direction, Maze, UNREACHABLE};
use crate::session::Session;

/// The width of each display cell when rendered, in character widths.
pub const CELL_WIDTH: u16 = 2;

/// Presentation flags owned by the app loop, not by the session.
pub struct ViewFlags {
    /// Overlay flood distances on the maze cells.
    pub show_flood: bool,
    /// Manual stepping instead of timed auto stepping.
    pub step_mode: bool,
}

/// Draws the maze, the agent, and the status block to the terminal.
///
/// The maze is rendered as a (2W+1)x(2H+1) display grid: odd/odd display
/// cells are maze cells, the rest are wall segments and junctions. Rows are
/// flipped so north points up.
pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    /// Rows reserved below the maze for the status block.
    pub const NUM_STATUS_ROWS: u16 = 2;

    pub fn new() -> Self {
        Renderer {
            stdout: std::io::stdout(),
        }
    }

    /// Terminal columns and rows needed to display a maze of the given cell
    /// dimensions.
    pub fn required_size(width: u8, height: u8) -> (u16, u16) {
        let display_width = (width as u16 * 2 + 1) * CELL_WIDTH;
        let display_height = height as u16 * 2 + 1 + Renderer::NUM_STATUS_ROWS;
        (display_width, display_height)
    }

    /// Renders one full frame. Prints a resize hint instead when the
    /// terminal is too small for the maze.
    pub fn draw(&mut self, session: &Session, view: &ViewFlags) -> std::io::Result<()> {
        let maze = session.maze();
        let (need_cols, need_rows) = Renderer::required_size(maze.width(), maze.height());
        let (term_cols, term_rows) = terminal::size()?;
        if term_cols < need_cols || term_rows < need_rows {
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(
                    format!(
                        "Terminal too small: need {}x{}, have {}x{}. Resize to continue.\r\n",
                        need_cols, need_rows, term_cols, term_rows
                    )
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
                ),
            )?;
            return self.stdout.flush();
        }

        let trail: HashSet<(u8, u8)> = session.path().iter().copied().collect();

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        let display_height = maze.height() as u16 * 2 + 1;
        let display_width = maze.width() as u16 * 2 + 1;
        for dr in 0..display_height {
            for dc in 0..display_width {
                let symbol = Renderer::symbol_at(maze, session, view, &trail, dc, dr);
                #[cfg(debug_assertions)]
                {
                    use unicode_width::UnicodeWidthStr;
                    assert_eq!(
                        symbol.content().width(),
                        CELL_WIDTH as usize,
                        "Each display cell must occupy exactly two character widths."
                    );
                }
                self.stdout.queue(style::PrintStyledContent(symbol))?;
            }
            self.stdout
                .queue(terminal::Clear(ClearType::UntilNewLine))?;
            self.stdout.queue(style::Print("\r\n"))?;
        }

        self.draw_status(session, view)?;
        self.stdout.flush()
    }

    /// The styled two-column symbol for one display grid position.
    fn symbol_at(
        maze: &Maze,
        session: &Session,
        view: &ViewFlags,
        trail: &HashSet<(u8, u8)>,
        dc: u16,
        dr: u16,
    ) -> style::StyledContent<String> {
        let height = maze.height() as u16;
        let wall = || "⬜".to_string().with(Color::White);
        let empty = || "  ".to_string().with(Color::Reset);

        match (dc % 2 == 1, dr % 2 == 1) {
            // Junction between four walls: always rendered standing
            (false, false) => wall(),
            // Vertical wall segment between (x, y) and its east neighbor
            (false, true) => {
                if dc == 0 || dc == maze.width() as u16 * 2 {
                    return wall();
                }
                let x = (dc / 2 - 1) as u8;
                let y = (height - 1 - (dr - 1) / 2) as u8;
                if maze.has_wall((x, y), Direction::East) {
                    wall()
                } else {
                    empty()
                }
            }
            // Horizontal wall segment below the cell one display row up
            (true, false) => {
                if dr == 0 || dr == height * 2 {
                    return wall();
                }
                let x = ((dc - 1) / 2) as u8;
                let y_above = (height - dr / 2) as u8;
                if maze.has_wall((x, y_above), Direction::South) {
                    wall()
                } else {
                    empty()
                }
            }
            // Maze cell interior
            (true, true) => {
                let x = ((dc - 1) / 2) as u8;
                let y = (height - 1 - (dr - 1) / 2) as u8;
                let coord = (x, y);
                if coord == session.agent().position() {
                    "🟡".to_string().with(Color::Yellow)
                } else if coord == session.goal() {
                    "🟥".to_string().with(Color::Red)
                } else if view.show_flood && maze[coord].dist != UNREACHABLE {
                    // Two hex digits always fit the cell width
                    format!("{:02x}", maze[coord].dist).with(Color::DarkGrey)
                } else if trail.contains(&coord) {
                    "* ".to_string().with(Color::Blue)
                } else {
                    empty()
                }
            }
        }
    }

    /// Status block below the maze: current selection on one line, key help
    /// on the next.
    fn draw_status(&mut self, session: &Session, view: &ViewFlags) -> std::io::Result<()> {
        let algorithm = match session.algorithm() {
            Some(kind) => kind.to_string(),
            None => "None".to_string(),
        };
        let status = if session.running() { "RUNNING" } else { "IDLE" };
        let mode = if view.step_mode { "STEP" } else { "AUTO" };
        let line = format!(
            "Algorithm: {}  Type: {}  Status: {}  Mode: {}  Speed: {}",
            algorithm,
            session.maze_type(),
            status,
            mode,
            session.speed_level(),
        );
        queue!(
            self.stdout,
            style::PrintStyledContent(line.with(Color::Cyan).attribute(Attribute::Bold)),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print("\r\n"),
            style::PrintStyledContent(
                "[t] type  [r] regen  [f] flood  [d] dfs  [l] left hand  [s] distances  \
[m] mode  [space] step  [up/down] speed  [click] goal  [esc] quit"
                    .with(Color::DarkGrey)
            ),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print("\r\n"),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Maps a terminal mouse position to the maze cell under it, if any. Clicks
/// on walls and junctions return `None`.
pub fn cell_under_cursor(maze: &Maze, column: u16, row: u16) -> Option<(u8, u8)> {
    let dc = column / CELL_WIDTH;
    let dr = row;
    if dc % 2 == 0 || dr % 2 == 0 {
        return None;
    }
    if dc >= maze.width() as u16 * 2 + 1 || dr >= maze.height() as u16 * 2 + 1 {
        return None;
    }
    let x = ((dc - 1) / 2) as u8;
    let y = (maze.height() as u16 - 1 - (dr - 1) / 2) as u8;
    Some((x, y))
}
