pub mod engine;
pub mod score;
pub mod tags;
pub mod types;

// Re-export the pipeline surface for convenience
pub use engine::{rank_signals, SignalEngine, DEFAULT_TOP_N};
pub use score::{composite_score, ScoreBreakdown, ScoreConfig};
pub use tags::{classify, TagConfig};
pub use types::{parse_or, InstrumentMetrics, Signal, Tag};
