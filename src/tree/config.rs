//! Configuration for tree walking

use std::collections::HashSet;

/// Entry names skipped at every level of the tree.
///
/// Matched by exact name against files and directories alike, so a file
/// named `build` is skipped just like a `build/` directory.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".venv",
    "node_modules",
    ".vscode",
    ".turbo",
    "build",
    "plugins",
    ".git",
    ".DS_Store",
];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Entry names to skip, checked by exact match at every level.
    pub exclude: HashSet<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
