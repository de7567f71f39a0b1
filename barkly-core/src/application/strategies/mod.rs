//! Chunking strategies
//!
//! Each strategy turns a normalized document and its structure into ordered
//! raw segments. The selector picks the one named by the configuration.

mod hybrid;
pub(crate) mod packing;
mod selector;
mod semantic;
mod sliding;
mod structural;
mod traits;

pub use hybrid::HybridStrategy;
pub use selector::StrategySelector;
pub use semantic::SemanticStrategy;
pub use sliding::SlidingWindowStrategy;
pub use structural::StructuralStrategy;
pub use traits::{ChunkingStrategy, Segment, StrategyContext};
