// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod audio;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod matcher;
pub mod outcome;
pub mod ranking;
pub mod runtime;
pub mod sequence;
pub mod session;

pub use engine::GameEngine;
