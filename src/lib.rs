//! bigo - Heuristic time-complexity narration for C-like source snippets.
//!
//! bigo reads a snippet, looks for loop keywords, brace nesting, a function
//! calling itself and two fixed search idioms, and explains its Big-O guess
//! step by step. It does not parse the source; every decision is a text match.
//!
//! # Example
//!
//! ```
//! use bigo::analyzers::complexity::analyze;
//!
//! let source = "int fib(int n) {\n  if (n <= 1) return n;\n  return fib(n - 1) + fib(n - 2);\n}";
//! let analysis = analyze(source);
//! assert!(analysis.to_text().contains("Θ(n^1.58)"));
//! ```

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod highlight;
pub mod output;
pub mod report;

pub use analyzers::complexity::{analyze, Analysis, AnalysisSignals};
