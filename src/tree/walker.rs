//! TreeWalker - streams directory entries without building the tree in memory

use std::fs;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::utils::child_prefix;

/// Callback for streaming output - receives entry information for display.
pub trait TreeOutput {
    /// Called once with the root path before any entries, when it exists.
    fn root(&mut self, root: &Path) -> std::io::Result<()>;

    /// Called once per visible entry, in depth-first tree order.
    fn entry(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> std::io::Result<()>;

    /// Called instead of `root` when the root path does not exist.
    fn missing_root(&mut self, root: &Path) -> std::io::Result<()>;
}

/// Streaming tree walker. Sorts each directory's entries by name, drops
/// excluded names, and recurses depth-first.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree rooted at `root`, streaming entries to `output`.
    ///
    /// A missing root is reported through the sink and is not an error;
    /// `Err` means the sink itself failed.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> std::io::Result<()> {
        if !root.exists() {
            return output.missing_root(root);
        }
        output.root(root)?;
        self.walk_dir(root, "", output)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
    ) -> std::io::Result<()> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                // Unreadable directory: note it and keep walking siblings,
                // leaving stdout's tree format untouched.
                eprintln!("sprig: cannot read '{}': {}", path.display(), e);
                return Ok(());
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        let visible: Vec<(String, PathBuf)> = entries
            .into_iter()
            .map(|e| (e.file_name().to_string_lossy().to_string(), e.path()))
            .filter(|(name, _)| !self.config.exclude.contains(name.as_str()))
            .collect();

        let total = visible.len();

        for (i, (name, entry_path)) in visible.into_iter().enumerate() {
            let is_last = i + 1 == total;
            let is_dir = entry_path.is_dir();

            output.entry(&name, is_dir, is_last, prefix)?;

            if is_dir {
                let new_prefix = child_prefix(prefix, is_last);
                self.walk_dir(&entry_path, &new_prefix, output)?;
            }
        }

        Ok(())
    }
}
