//! HTML report rendering using minijinja templating.

use std::fs;
use std::path::Path;

use minijinja::{context, Environment};

use super::Presenter;
use crate::core::Result;

/// The embedded HTML template.
const TEMPLATE_HTML: &str = include_str!("template.html");

/// Renderer handles HTML report generation.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Create a new renderer with the embedded template.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // The .html name turns on auto-escaping for everything not marked safe.
        env.add_template("report.html", TEMPLATE_HTML)?;
        Ok(Self { env })
    }

    /// Render the surface as a standalone page.
    ///
    /// Runs the analyzer first if the presenter has no analysis yet.
    pub fn render(
        &self,
        title: &str,
        source_name: &str,
        presenter: &mut Presenter,
    ) -> Result<String> {
        if presenter.analysis().is_none() {
            presenter.analyze();
        }
        let signals = presenter.analysis().and_then(|a| a.signals()).cloned();

        let tmpl = self.env.get_template("report.html")?;
        let rendered = tmpl.render(context! {
            title => title,
            source_name => source_name,
            language => presenter.language(),
            source_html => presenter.source_markup(),
            output_html => presenter.output_markup(),
            signals => signals,
        })?;
        Ok(rendered)
    }

    /// Render and write the page to `path`.
    pub fn write(
        &self,
        title: &str,
        source_name: &str,
        presenter: &mut Presenter,
        path: &Path,
    ) -> Result<()> {
        let html = self.render(title, source_name, presenter)?;
        fs::write(path, html)?;
        tracing::info!("Report written to {}", path.display());
        Ok(())
    }
}
