//! Chunking pipeline: strategies and post-processing

pub mod postprocess;
pub mod strategies;

pub use postprocess::PostProcessor;
pub use strategies::{ChunkingStrategy, Segment, StrategyContext, StrategySelector};
