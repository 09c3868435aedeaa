/*
 * Renderers turning router reports into text or JSON. Both implement `ReportSink`.
 */

pub mod json;
pub mod text;

pub use json::JsonLinesRenderer;
pub use text::TextRenderer;
