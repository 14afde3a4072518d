//! Document diff module
//!
//! This module compares two decoded configuration documents and renders the
//! differences as text or JSON.
//!
//! # Features
//!
//! - **Tree building**: Classify every key as added, removed, changed, unchanged
//!   or nested, sorted by key at every level
//! - **Stylish rendering**: Indented tree with `+`/`-` markers
//! - **Plain rendering**: One sentence per changed property path
//! - **JSON rendering**: Keyed structure for machine consumption
//!
//! # Example
//!
//! ```ignore
//! use gendiff::diff::{build_diff_tree, render, OutputFormat};
//!
//! let nodes = build_diff_tree(&old, &new);
//! let output = render(&nodes, OutputFormat::Plain)?;
//!
//! println!("{}", output);
//! ```

mod builder;
mod format;
mod renderer;
mod types;
mod value;

pub use builder::build_diff_tree;
pub use format::{render, OutputFormat};
pub use types::DiffNode;
pub use value::{Mapping, Value};
