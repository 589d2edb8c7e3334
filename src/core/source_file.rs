//! Source snippet representation.

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{Error, Result};

/// A snippet of source text together with where it came from.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file, `None` for stdin or in-memory content.
    pub path: Option<PathBuf>,
    /// File content as bytes.
    pub content: Vec<u8>,
}

impl SourceFile {
    /// Load a source file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read(path)?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
        })
    }

    /// Read the whole snippet from a reader (typically stdin).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Self {
            path: None,
            content,
        })
    }

    /// Load from `path`, or from stdin when the path is absent or `-`.
    pub fn load_or_stdin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p != Path::new("-") => Self::load(p),
            _ => Self::from_reader(std::io::stdin().lock()),
        }
    }

    /// Create from existing content.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into().into_bytes(),
        }
    }

    /// Get content as string (lossy conversion).
    pub fn content_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Name used in logs and report titles.
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }

    /// Count total lines.
    pub fn total_lines(&self) -> usize {
        self.content_str().lines().count()
    }
}
