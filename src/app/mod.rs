pub mod renderer;

use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, MouseButton, MouseEventKind,
    },
    queue,
    terminal::{self, ClearType},
};

use crate::{
    app::renderer::{Renderer, ViewFlags, cell_under_cursor},
    generators::MazeType,
    session::Session,
    solvers::SolverKind,
};

/// Delay between automatic solver steps per speed level, slowest first.
const MOVE_DELAYS_MS: [u64; 5] = [600, 300, 120, 40, 10];
/// Animation progress added per frame per speed level. A move commits when
/// progress reaches 1.0, so level 5 commits instantly.
const ANIM_SPEEDS: [f32; 5] = [0.04, 0.1, 0.25, 0.5, 1.0];

fn move_delay(speed_level: u8) -> Duration {
    Duration::from_millis(MOVE_DELAYS_MS[(speed_level - 1) as usize])
}

fn anim_speed(speed_level: u8) -> f32 {
    ANIM_SPEEDS[(speed_level - 1) as usize]
}

/// The terminal front end: owns the event loop, all timing, and the view
/// flags. The session never sees a key code or a clock.
pub struct App {
    /// Maze dimensions in cells.
    width: u8,
    height: u8,
    /// How long to wait for input before rendering the next frame.
    frame_timeout: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            frame_timeout: Duration::from_millis(33),
        }
    }
}

impl App {
    /// Set a panic hook to restore terminal state on panic, so the terminal
    /// is not left in raw mode or the alternate screen.
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode, enter the alternate screen, and enable
    /// mouse capture for click-to-set-goal.
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to its original state.
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(
            stdout,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main loop: poll input, apply control commands to the session, advance
    /// timing, render. Returns when the user presses Esc.
    pub fn run(&self) -> std::io::Result<()> {
        let mut session = Session::new(self.width, self.height);
        let mut renderer = Renderer::new();
        let mut view = ViewFlags {
            show_flood: false,
            step_mode: false,
        };
        // Progress of the in-flight move, 0..=1. Saturated means idle.
        let mut anim_progress: f32 = 1.0;
        let mut last_move_time = Instant::now();

        tracing::info!("starting {}x{} session", self.width, self.height);

        loop {
            if event::poll(self.frame_timeout)? {
                match event::read()? {
                    event::Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Esc => {
                                tracing::info!("exit requested");
                                return Ok(());
                            }
                            KeyCode::Char('r') => session.regenerate(session.maze_type()),
                            KeyCode::Char('t') => {
                                session.regenerate(session.maze_type().toggled())
                            }
                            KeyCode::Char('f') => session.select_algorithm(SolverKind::FloodFill),
                            KeyCode::Char('d') => session.select_algorithm(SolverKind::Dfs),
                            KeyCode::Char('l') => session.select_algorithm(SolverKind::LeftHand),
                            KeyCode::Char('s') => view.show_flood = !view.show_flood,
                            KeyCode::Char('m') => view.step_mode = !view.step_mode,
                            KeyCode::Up => {
                                session.set_speed_level(session.speed_level().saturating_add(1))
                            }
                            KeyCode::Down => {
                                session.set_speed_level(session.speed_level().saturating_sub(1))
                            }
                            KeyCode::Char(' ') => {
                                // Manual advance, only between moves
                                if session.running() && !session.move_in_progress() {
                                    session.step();
                                    if session.move_in_progress() {
                                        anim_progress = 0.0;
                                    }
                                }
                            }
                            _ => {}
                        }
                    }
                    event::Event::Mouse(mouse) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            if let Some((x, y)) =
                                cell_under_cursor(session.maze(), mouse.column, mouse.row)
                            {
                                session.set_goal(x, y);
                            }
                        }
                    }
                    // A resize is picked up by the next draw's size check
                    _ => {}
                }
            }

            // Advance timing: finish the in-flight move first, then schedule
            // the next automatic step.
            if session.move_in_progress() {
                anim_progress += anim_speed(session.speed_level());
                if anim_progress >= 1.0 {
                    session.finish_move();
                    last_move_time = Instant::now();
                }
            } else if session.running()
                && !view.step_mode
                && last_move_time.elapsed() >= move_delay(session.speed_level())
            {
                session.step();
                if session.move_in_progress() {
                    anim_progress = 0.0;
                }
                last_move_time = Instant::now();
            }

            if view.show_flood {
                session.refresh_flood();
            }
            renderer.draw(&session, &view)?;
        }
    }
}
