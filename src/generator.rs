//! Maze carving module.
//!
//! This module contains the randomized depth-first carver ("recursive backtracker") that turns a
//! fully walled [`Grid`] into a perfect maze, together with the [`RandomSource`] capability it
//! draws its choices from.

use log::debug;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

use crate::grid::{Coord, Direction, Grid};

/// Uniform source of random indices used to pick the next neighbour while carving.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`. Callers never pass a zero `bound`.
    fn next(&mut self, bound: usize) -> usize;
}

/// Production random source backed by [`StdRng`].
#[derive(Clone, Debug)]
pub struct RngSource {
    /// Underlying generator.
    rng: StdRng,
}

impl Default for RngSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngSource {
    /// Seeds the source from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeds the source from a fixed value so that mazes can be reproduced.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RngSource {
    fn next(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound.max(1))
    }
}

/// Deterministic source that replays a fixed sequence of picks, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so `[0]` always picks the first enumerated
/// neighbour. An empty sequence behaves like `[0]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSource {
    /// Values to replay.
    values: Vec<usize>,
    /// Position of the next value in [`values`](SequenceSource::values).
    cursor: usize,
}

impl SequenceSource {
    /// Builds a source replaying `values`.
    #[must_use]
    pub const fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, bound: usize) -> usize {
        let value = self.values.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.values.len().max(1);

        value % bound.max(1)
    }
}

/// Carves a perfect maze into `grid`.
///
/// The grid must be freshly built: every wall present and no cell visited. The walk starts at
/// `(0, 0)` and keeps an explicit stack of cells to backtrack to; every iteration either visits
/// exactly one new cell or pops the stack, so the loop finishes after `cols * rows - 1` carves.
/// Visited flags are cleared before returning.
///
/// Returns the number of passages carved.
pub fn carve<R>(grid: &mut Grid, source: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let total = grid.dimensions().area();
    let mut stack = Vec::with_capacity(total);
    let mut neighbors: Vec<(Direction, Coord)> = Vec::with_capacity(Direction::ALL.len());
    let mut current = Coord::new(0, 0);
    let mut visited = 1;
    let mut carved = 0;

    grid.mark_visited(current);

    while visited < total {
        neighbors.clear();
        neighbors.extend(Direction::ALL.into_iter().filter_map(|direction| {
            grid.neighbor(current, direction)
                .filter(|next| grid.cell(*next).is_some_and(|cell| !cell.visited()))
                .map(|next| (direction, next))
        }));

        if neighbors.is_empty() {
            // Dead end, backtrack.
            let Some(previous) = stack.pop() else {
                break;
            };
            current = previous;
            continue;
        }

        let pick = source.next(neighbors.len()) % neighbors.len();
        let Some(&(direction, next)) = neighbors.get(pick) else {
            break;
        };

        if grid.carve(current, direction).is_some() {
            carved += 1;
        }
        stack.push(current);
        grid.mark_visited(next);
        visited += 1;
        current = next;
    }

    grid.clear_visited();

    debug!(
        "carved {carved} passages in a {}x{} grid",
        grid.cols(),
        grid.rows()
    );

    carved
}
