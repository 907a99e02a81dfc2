//! Sprig - a tree command that skips build and editor clutter

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::TreeFormatter;
pub use tree::{DEFAULT_EXCLUDES, TreeOutput, TreeWalker, WalkerConfig};
