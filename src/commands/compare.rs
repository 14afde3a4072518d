use crate::context::Context;
use crate::diff::{self, DiffNode, Mapping, OutputFormat};
use crate::error::Result;
use crate::loader::{FileData, Loader};
use std::path::Path;

/// Handles the default command - compares two documents and prints the diff
pub struct CompareCommand;

impl CompareCommand {
    /// Execute the compare command, writing the rendered diff to the context output
    pub fn execute(ctx: &Context, first: &Path, second: &Path, format: OutputFormat) -> Result<()> {
        let rendered = Self::gen_diff(ctx, first, second, format)?;
        ctx.output.raw(&rendered);
        Ok(())
    }

    /// Load both files and render their diff
    ///
    /// Both files are read and decoded before anything is rendered, so a
    /// failure on either side produces no output.
    pub fn gen_diff(ctx: &Context, first: &Path, second: &Path, format: OutputFormat) -> Result<String> {
        let loader = Loader::new(ctx.fs.clone());
        let old = loader.load(first)?;
        let new = loader.load(second)?;
        Self::diff_mappings(&old, &new, format)
    }

    /// Decode two in-memory documents and render their diff
    pub fn gen_diff_from_data(files: &[FileData; 2], format: OutputFormat) -> Result<String> {
        let [old, new] = files;
        Self::diff_mappings(&old.parse()?, &new.parse()?, format)
    }

    fn diff_mappings(old: &Mapping, new: &Mapping, format: OutputFormat) -> Result<String> {
        let nodes = diff::build_diff_tree(old, new);

        tracing::info!(
            keys = nodes.len(),
            changed = nodes.iter().any(DiffNode::has_changes),
            "compared documents"
        );

        diff::render(&nodes, format)
    }
}
