//! Output format selection

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use super::renderer::{DiffRenderer, JsonRenderer, PlainRenderer, StylishRenderer};
use super::types::DiffNode;
use crate::error::{GendiffError, Result};

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree with +/- markers (default)
    #[default]
    Stylish,
    /// One sentence per changed property
    Plain,
    /// Structured JSON for machine consumption
    Json,
}

impl OutputFormat {
    /// Get the renderer for this format
    pub fn renderer(&self) -> Box<dyn DiffRenderer> {
        match self {
            OutputFormat::Stylish => Box::new(StylishRenderer::new()),
            OutputFormat::Plain => Box::new(PlainRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Stylish => write!(f, "stylish"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GendiffError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "stylish" => Ok(OutputFormat::Stylish),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(GendiffError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render a diff tree in the given format
pub fn render(nodes: &[DiffNode], format: OutputFormat) -> Result<String> {
    tracing::debug!(%format, "rendering diff");
    format.renderer().render(nodes)
}

/// Render a diff tree in the format named `name`
#[allow(dead_code)]
pub fn render_named(nodes: &[DiffNode], name: &str) -> Result<String> {
    render(nodes, name.parse()?)
}
