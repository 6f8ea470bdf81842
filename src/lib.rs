//! Mathematical Chess
//!
//! Chess rules engine, heuristic AI and game flow for a chess variant where
//! moves in `math-master` games are gated behind arithmetic problems.
//!
//! - [`game`] - rules, game state, AI, math challenges, controller
//! - [`core`] - settings and their persistence
//! - [`networking`] - optional external engine over HTTP

pub mod core;
pub mod game;
pub mod networking;
