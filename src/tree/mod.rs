//! Directory tree walking logic
//!
//! The walker streams one event per visible entry through the `TreeOutput`
//! trait instead of building the tree in memory, so memory usage is
//! O(depth) regardless of tree size.

mod config;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDES, WalkerConfig};
pub use utils::{child_prefix, connector};
pub use walker::{TreeOutput, TreeWalker};
