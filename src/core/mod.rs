//! Core types shared by the analyzer and its hosts.

mod error;
mod source_file;

pub use error::{Error, Result};
pub use source_file::SourceFile;
