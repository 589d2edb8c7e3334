//! Presentation layer: an editable source surface and HTML rendering.

mod presenter;
mod render;

pub use presenter::{Presenter, SAMPLE_SOURCE};
pub use render::Renderer;
