//! This crate contains the library behind the mazewalk terminal game.
//!
//! The maze core is usable on its own: [`grid`] holds the cell walls, [`generator`] carves a
//! perfect maze with a randomized depth-first search, [`pathfinding`] finds the shortest route
//! through it and [`session`] tracks a play-through with its move counter and timer. The terminal
//! front end is driven through [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod config;
mod events;
pub mod generator;
pub mod grid;
pub mod pathfinding;
pub mod session;
mod types;
mod ui;

pub use app::App;
