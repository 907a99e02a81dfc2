//! Streaming output formatter
//!
//! Renders tree entries directly to the sink as they arrive from the
//! walker, without buffering.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{TreeOutput, connector};

/// Formatter implementing the walker's `TreeOutput` trait.
///
/// Directory names render blue/bold with a trailing `/`, file names white,
/// connectors and prefixes uncolored. With color disabled the output is
/// exactly the plain tree format, byte for byte.
pub struct TreeFormatter<W: WriteColor> {
    writer: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.writer, "{}/", name)?;
        self.writer.reset()
    }

    fn write_file_name(&mut self, name: &str) -> io::Result<()> {
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(self.writer, "{}", name)?;
        self.writer.reset()
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn root(&mut self, root: &Path) -> io::Result<()> {
        self.write_dir_name(&root.display().to_string())?;
        writeln!(self.writer)
    }

    fn entry(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.writer, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)?;
        } else {
            self.write_file_name(name)?;
        }
        writeln!(self.writer)
    }

    fn missing_root(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.writer, "Directory '{}' does not exist.", root.display())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use termcolor::NoColor;

    use crate::test_utils::TempTree;
    use crate::tree::{TreeWalker, WalkerConfig};

    use super::*;

    fn plain_formatter() -> TreeFormatter<NoColor<Vec<u8>>> {
        TreeFormatter::new(NoColor::new(Vec::new()))
    }

    fn rendered(formatter: TreeFormatter<NoColor<Vec<u8>>>) -> String {
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_root_line_has_trailing_slash() {
        let mut formatter = plain_formatter();
        formatter.root(Path::new(".")).unwrap();
        assert_eq!(rendered(formatter), "./\n");
    }

    #[test]
    fn test_entry_connectors() {
        let mut formatter = plain_formatter();
        formatter.entry("a.rs", false, false, "").unwrap();
        formatter.entry("b.rs", false, true, "").unwrap();
        assert_eq!(rendered(formatter), "├── a.rs\n└── b.rs\n");
    }

    #[test]
    fn test_directory_entry_gets_slash() {
        let mut formatter = plain_formatter();
        formatter.entry("src", true, false, "").unwrap();
        formatter.entry("note.txt", false, true, "").unwrap();
        assert_eq!(rendered(formatter), "├── src/\n└── note.txt\n");
    }

    #[test]
    fn test_prefix_precedes_connector() {
        let mut formatter = plain_formatter();
        formatter.entry("deep.rs", false, true, "│   ").unwrap();
        assert_eq!(rendered(formatter), "│   └── deep.rs\n");
    }

    #[test]
    fn test_missing_root_diagnostic() {
        let mut formatter = plain_formatter();
        formatter.missing_root(Path::new("missing_dir")).unwrap();
        assert_eq!(rendered(formatter), "Directory 'missing_dir' does not exist.\n");
    }

    #[test]
    fn test_full_tree_rendering() {
        let tree = TempTree::new();
        tree.add_file("Cargo.toml", "[package]");
        tree.add_file("src/lib.rs", "");
        tree.add_file("src/main.rs", "");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut formatter = plain_formatter();
        walker.walk(tree.path(), &mut formatter).unwrap();

        let output = rendered(formatter);
        let expected = format!(
            "{}/\n\
             ├── Cargo.toml\n\
             └── src/\n    \
             ├── lib.rs\n    \
             └── main.rs\n",
            tree.path().display()
        );
        assert_eq!(output, expected);
    }
}
