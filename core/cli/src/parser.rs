//! Command line argument parsing for the go2rust translator.

use std::path::PathBuf;

use clap::Parser;

/// Command line interface definition for the `g2r` binary.
///
/// With `--file-name` a single file is translated; without it every `.go`
/// file under the input directory is. Each input `<stem>.go` produces
/// `<stem>.rs` plus `<stem>_node_list.txt` in the output directory.
#[derive(Parser)]
#[command(
    name = "g2r",
    author,
    version,
    about = "Outputs Rust files from Go files",
    long_about = "The 'g2r' command translates Go compilation units into rough Rust equivalents. \
Declarations are rendered as Rust syntax; statement and expression bodies are kept verbatim in Go \
syntax with their identifiers renamed. Diagnostic dumps are written next to each output file."
)]
pub(crate) struct Cli {
    /// Input directory containing .go source files.
    #[clap(short = 'i', long = "in-dir")]
    pub(crate) in_dir: PathBuf,

    /// Output directory for .rs files and diagnostic dumps.
    #[clap(short = 'o', long = "out-dir")]
    pub(crate) out_dir: PathBuf,

    /// Translate a single file (relative to the input directory) instead of
    /// every .go file under it.
    #[clap(short = 'f', long = "file-name")]
    pub(crate) file_name: Option<String>,

    /// Additionally write a full AST dump (`<stem>_node_tree.json`) per file.
    #[clap(long = "tree", action = clap::ArgAction::SetTrue)]
    pub(crate) tree: bool,
}
