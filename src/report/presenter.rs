//! Editing surface model.
//!
//! Holds the current source text, keeps its highlighted markup in step with
//! every edit, and runs the analyzer when asked. Nothing here influences the
//! analysis; it only calls [`analyze`] and highlights what it shows.

use crate::analyzers::complexity::{analyze, Analysis};
use crate::highlight::Highlighter;

/// Initial content of a fresh surface.
pub const SAMPLE_SOURCE: &str = "void bubbleSort(int arr[], int n) {
  for (int i = 0; i < n - 1; i++) {
    for (int j = 0; j < n - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        // Swap arr[j] and arr[j+1]
        int temp = arr[j];
        arr[j] = arr[j + 1];
        arr[j + 1] = temp;
      }
    }
  }
}";

pub struct Presenter {
    highlighter: Box<dyn Highlighter>,
    language: String,
    source: String,
    highlighted: String,
    analysis: Option<Analysis>,
    output_highlighted: String,
}

impl Presenter {
    /// Create an empty surface.
    pub fn new(highlighter: Box<dyn Highlighter>, language: impl Into<String>) -> Self {
        Self {
            highlighter,
            language: language.into(),
            source: String::new(),
            highlighted: String::new(),
            analysis: None,
            output_highlighted: String::new(),
        }
    }

    /// Create a surface preloaded with [`SAMPLE_SOURCE`].
    pub fn with_sample(highlighter: Box<dyn Highlighter>, language: impl Into<String>) -> Self {
        let mut presenter = Self::new(highlighter, language);
        presenter.set_source(SAMPLE_SOURCE);
        presenter
    }

    /// Replace the source and re-highlight it.
    ///
    /// A previous analysis is kept until [`Presenter::analyze`] runs again.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.highlighted = self.highlighter.highlight(&self.source, &self.language);
    }

    /// Analyze the current source and highlight the narration for display.
    pub fn analyze(&mut self) -> &Analysis {
        let analysis = analyze(&self.source);
        self.output_highlighted = self
            .highlighter
            .highlight(&analysis.to_text(), &self.language);
        self.analysis.insert(analysis)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Highlighted markup for the current source.
    pub fn source_markup(&self) -> &str {
        &self.highlighted
    }

    /// Last analysis, if any has run.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Highlighted narration, or an empty string before the first analysis.
    pub fn output_markup(&self) -> &str {
        &self.output_highlighted
    }
}
