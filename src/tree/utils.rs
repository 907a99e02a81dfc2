//! Shared formatting rules for tree rendering

/// Connector glyph for an entry, based on its position among siblings.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Extend a prefix for an entry's children.
///
/// A branch entry continues the vertical rule; a terminal entry leaves
/// blank space so deeper levels align under their parent.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
