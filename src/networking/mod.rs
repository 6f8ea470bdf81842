//! Network clients
//!
//! - `engine_client` - JSON-over-HTTP chess engine used as the primary AI

pub mod engine_client;

pub use crate::game::ai::{PositionAnalysis, ScoredMove};
pub use engine_client::{RemoteEngine, DEFAULT_ENGINE_URL};
