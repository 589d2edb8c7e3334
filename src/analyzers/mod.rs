//! Source analyzers.

pub mod complexity;

// Re-export analyzer types for convenience
pub use complexity::{analyze, Analysis, AnalysisSignals, Narration};
