#![warn(clippy::pedantic)]

//! # go2rust CLI
//!
//! Command line driver for the Go → Rust declaration translator (`g2r`).
//!
//! For each input `<stem>.go` the driver writes to the output directory:
//!
//! 1. `<stem>_node_list.txt` – flat identifier/literal listing, to aid in
//!    troubleshooting the translated output.
//! 2. `<stem>_node_tree.json` – full AST dump (only with `--tree`).
//! 3. `<stem>.rs` – the translated Rust declarations.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – usage / IO / translation failure.
//!
//! ## Example
//! ```bash
//! g2r -i src_go -o out -f article.go
//! ```

mod parser;

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use parser::Cli;
use walkdir::WalkDir;

/// Entry point for the CLI executable.
///
/// Responsibilities:
/// * Parse flags.
/// * Validate the input directory and collect the files to translate.
/// * Translate each file, writing diagnostics alongside the output.
///
/// On any failure a diagnostic is printed to stderr and the process exits
/// with code `1`.
fn main() {
    let args = Cli::parse();
    if !args.in_dir.is_dir() {
        eprintln!("Error: input directory not found");
        process::exit(1);
    }
    if let Err(e) = fs::create_dir_all(&args.out_dir) {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    }

    let inputs = match &args.file_name {
        Some(name) => vec![args.in_dir.join(name)],
        None => go_files(&args.in_dir),
    };
    if inputs.is_empty() {
        eprintln!("Error: no .go files found in {}", args.in_dir.display());
        process::exit(1);
    }

    for path in &inputs {
        if let Err(e) = translate_file(path, &args) {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn go_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "go"))
        .collect()
}

fn translate_file(path: &Path, args: &Cli) -> anyhow::Result<()> {
    let source_code = fs::read_to_string(path)?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("out");

    let mut file = go2rust::parse(&source_code)?;

    // Diagnostic dumps reflect the tree as parsed, before renaming.
    let listing = go2rust::diagnostics::list_nodes(&file);
    fs::write(args.out_dir.join(format!("{stem}_node_list.txt")), listing)?;
    if args.tree {
        let dump = go2rust::diagnostics::node_tree(&file)?;
        fs::write(args.out_dir.join(format!("{stem}_node_tree.json")), dump)?;
    }

    go2rust::rename(&mut file)?;
    let rust = go2rust::emit(&file)?;
    let out_path = args.out_dir.join(format!("{stem}.rs"));
    fs::write(&out_path, rust)?;
    println!("Translated: {} -> {}", path.display(), out_path.display());
    Ok(())
}
