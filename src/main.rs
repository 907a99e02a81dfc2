//! CLI entry point for sprig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use sprig::{TreeFormatter, TreeWalker, WalkerConfig};
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "Print a directory tree, skipping build and editor clutter")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,
}

/// Determine whether to use color output based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    // Respect FORCE_COLOR environment variable
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    // Respect TERM=dumb
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

fn main() {
    let args = Args::parse();

    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let walker = TreeWalker::new(WalkerConfig::default());
    let mut formatter = TreeFormatter::new(StandardStream::stdout(choice));

    if let Err(e) = walker.walk(&args.path, &mut formatter) {
        eprintln!("sprig: error writing output: {}", e);
        process::exit(1);
    }
}
