// In crates/engine/src/lib.rs

pub mod decision;
pub mod task;

// Re-export the most important types for easy access.
pub use decision::{crossover, decide, Decision, SkipReason, TradePlan};
pub use task::{CycleOutcome, TradingTask};
