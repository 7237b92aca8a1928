//! Game session module.
//!
//! This module contains the [`Session`] that owns the active maze, its precomputed solution, the
//! player position and the move and time counters, together with the movement state machine that
//! validates moves against the maze walls and detects the win.

use std::{
    cell::Cell as SharedCell,
    rc::Rc,
    time::{Duration, Instant},
};

use log::{debug, error, info};

use crate::{
    generator::{self, RandomSource},
    grid::{Coord, Dimensions, Direction, Grid},
    pathfinding::{self, Path},
};

/// Monotonic time source used by the session timer.
///
/// Readings are durations from an arbitrary origin; only differences between readings matter.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    /// Instant all readings are measured from.
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    /// Current reading, shared between clones.
    reading: Rc<SharedCell<Duration>>,
}

impl ManualClock {
    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.reading.set(self.reading.get().saturating_add(step));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.reading.get()
    }
}

/// Phase of a play-through.
#[expect(
    clippy::module_name_repetitions,
    reason = "`State` alone reads ambiguously next to the grid and menu types."
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No move accepted yet; the timer is idle.
    #[default]
    NotStarted,
    /// At least one move accepted; the timer is running.
    Active,
    /// The player reached the goal; the timer is frozen and moves are ignored.
    Won,
}

/// What a call to [`Session::attempt_move`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The session was already won; nothing changed.
    Ignored,
    /// A wall blocks the direction; nothing changed.
    Blocked,
    /// The player moved one cell.
    Moved,
    /// The player moved onto the goal and won.
    Won,
}

/// Result of a move attempt, for the front-end to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// What the attempt did.
    pub outcome: MoveOutcome,
    /// State of the session after the attempt.
    pub state: SessionState,
}

impl MoveReport {
    /// Returns whether this move won the game.
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Won)
    }
}

/// Timer state. Instants are clock readings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Timer {
    /// Not started since the last reset or regeneration.
    #[default]
    Idle,
    /// Started at the given reading.
    Running(Duration),
    /// Stopped with the given elapsed time.
    Stopped(Duration),
}

/// Single-player play-through of one maze.
///
/// The session owns the grid and its solution path; the player always starts at `(0, 0)` and the
/// goal is the bottom-right cell. The only way to change the player position is
/// [`attempt_move`](Session::attempt_move).
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    /// The maze being played.
    grid: Grid,
    /// Shortest path from the origin to the goal, computed once per maze.
    solution: Path,
    /// Current player position.
    player: Coord,
    /// Bottom-right cell of the grid.
    goal: Coord,
    /// Number of accepted moves.
    moves: usize,
    /// Phase of the play-through.
    state: SessionState,
    /// Timer state.
    timer: Timer,
    /// Time source for the timer.
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Carves a new maze of the given size and starts a session over it.
    pub fn generate<R>(dimensions: Dimensions, source: &mut R, clock: C) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let (grid, solution) = build_maze(dimensions, source);

        Self {
            goal: goal_of(&grid),
            grid,
            solution,
            player: Coord::default(),
            moves: 0,
            state: SessionState::NotStarted,
            timer: Timer::Idle,
            clock,
        }
    }

    /// Tries to move the player one cell in `direction`.
    ///
    /// Won sessions ignore every move. A wall in the way rejects the move without touching any
    /// counter, so it never starts the timer. An accepted move starts the timer if needed, moves
    /// the player, counts the move and, on reaching the goal, freezes the timer.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveReport {
        if self.state == SessionState::Won {
            return self.report(MoveOutcome::Ignored);
        }

        let next = self
            .grid
            .neighbor(self.player, direction)
            .filter(|_| self.grid.is_open(self.player, direction));
        let Some(next) = next else {
            return self.report(MoveOutcome::Blocked);
        };

        if self.state == SessionState::NotStarted {
            self.state = SessionState::Active;
            self.timer = Timer::Running(self.clock.now());
        }

        self.player = next;
        self.moves += 1;

        if self.player == self.goal {
            self.timer = Timer::Stopped(self.elapsed());
            self.state = SessionState::Won;
            info!(
                "maze solved in {} moves and {:.2}s",
                self.moves,
                self.elapsed().as_secs_f64()
            );
            return self.report(MoveOutcome::Won);
        }

        self.report(MoveOutcome::Moved)
    }

    /// Sends the player back to the origin and clears the counters, keeping the same maze.
    pub fn reset(&mut self) {
        self.player = Coord::default();
        self.moves = 0;
        self.state = SessionState::NotStarted;
        self.timer = Timer::Idle;

        debug!("session reset");
    }

    /// Replaces the maze with a freshly carved one of the given size.
    ///
    /// Both values are clamped into the supported range. The new grid and its solution are built
    /// completely before they replace the current ones, and the session then starts over as if
    /// newly created.
    pub fn regenerate<R>(&mut self, cols: i64, rows: i64, source: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.rebuild(Dimensions::clamped(cols, rows), source);
    }

    /// Replaces the maze with a freshly carved one of already validated size.
    pub fn rebuild<R>(&mut self, dimensions: Dimensions, source: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let (grid, solution) = build_maze(dimensions, source);

        self.goal = goal_of(&grid);
        self.grid = grid;
        self.solution = solution;
        self.reset();
    }

    /// Returns the time spent on the current play-through.
    ///
    /// Zero before the first accepted move, live while active, frozen once won.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.timer {
            Timer::Idle => Duration::ZERO,
            Timer::Running(started) => self.clock.now().saturating_sub(started),
            Timer::Stopped(elapsed) => elapsed,
        }
    }

    /// Wraps an outcome with the current state.
    const fn report(&self, outcome: MoveOutcome) -> MoveReport {
        MoveReport {
            outcome,
            state: self.state,
        }
    }

    /// Returns the maze being played.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the shortest path from the origin to the goal.
    #[must_use]
    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    /// Returns the current player position.
    #[must_use]
    pub const fn player(&self) -> Coord {
        self.player
    }

    /// Returns the goal position.
    #[must_use]
    pub const fn goal(&self) -> Coord {
        self.goal
    }

    /// Returns the number of accepted moves.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the phase of the play-through.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns whether the player has reached the goal.
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.state, SessionState::Won)
    }
}

/// Builds a grid, carves it and solves it.
fn build_maze<R>(dimensions: Dimensions, source: &mut R) -> (Grid, Path)
where
    R: RandomSource + ?Sized,
{
    let mut grid = Grid::new(dimensions);
    let _ = generator::carve(&mut grid, source);

    let solution = pathfinding::shortest_path(&grid, Coord::default(), goal_of(&grid));
    if solution.is_empty() {
        error!(
            "carved {}x{} maze has no path from start to goal",
            grid.cols(),
            grid.rows()
        );
    }
    debug_assert!(
        !solution.is_empty(),
        "carved maze has no path from start to goal"
    );

    info!(
        "generated {}x{} maze, solution is {} cells long",
        grid.cols(),
        grid.rows(),
        solution.len()
    );

    (grid, solution)
}

/// Returns the bottom-right cell of `grid`.
const fn goal_of(grid: &Grid) -> Coord {
    Coord::new(grid.cols().saturating_sub(1), grid.rows().saturating_sub(1))
}
