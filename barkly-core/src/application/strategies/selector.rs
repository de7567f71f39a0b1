//! Strategy routing

use super::hybrid::HybridStrategy;
use super::semantic::SemanticStrategy;
use super::sliding::SlidingWindowStrategy;
use super::structural::StructuralStrategy;
use super::traits::{ChunkingStrategy, Segment, StrategyContext};
use crate::api::Strategy;
use tracing::debug;

/// Maps the configured [`Strategy`] to its implementation
pub struct StrategySelector {
    semantic: SemanticStrategy,
    structural: StructuralStrategy,
    sliding: SlidingWindowStrategy,
    hybrid: HybridStrategy,
}

impl StrategySelector {
    pub fn new() -> Self {
        Self {
            semantic: SemanticStrategy::new(),
            structural: StructuralStrategy::new(),
            sliding: SlidingWindowStrategy::new(),
            hybrid: HybridStrategy::new(),
        }
    }

    /// Implementation for `strategy`
    pub fn select(&self, strategy: Strategy) -> &dyn ChunkingStrategy {
        match strategy {
            Strategy::Semantic => &self.semantic,
            Strategy::Structural => &self.structural,
            Strategy::Sliding => &self.sliding,
            Strategy::Hybrid => &self.hybrid,
        }
    }

    /// Run the configured strategy and return its raw segments
    pub fn route(&self, ctx: &StrategyContext<'_>) -> Vec<Segment> {
        let strategy = self.select(ctx.config.strategy);
        let segments = strategy.segment(ctx);
        debug!(
            strategy = strategy.name(),
            segments = segments.len(),
            "strategy produced raw segments"
        );
        segments
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}
