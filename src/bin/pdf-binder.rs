//! PDF Binder CLI tool
//!
//! A command-line front-end for assembling PDF files in a chosen order and
//! merging them into one document.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use log::warn;

use pdf_binder::pdf::{extract_metadata, merge_documents, MergeRequest};
use pdf_binder::DocumentList;

/// PDF Binder - merge PDF files in the order you give them
#[derive(Parser)]
#[command(name = "pdf-binder")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Merge three files in the given order
    pdf-binder merge cover.pdf body.pdf appendix.pdf -o report

    # Globs keep their position between other arguments
    pdf-binder merge cover.pdf \"chapters/*.pdf\" -o book.pdf

    # Merge into the default name (merged.pdf) and open the result
    pdf-binder merge --open a.pdf b.pdf

    # Inspect a file
    pdf-binder info merged.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge PDF files into one, in argument order
    Merge {
        /// Input PDF files (in order). Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output name or path; a ".pdf" suffix is appended when missing
        #[arg(short, long, default_value = "merged")]
        output: PathBuf,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge {
            inputs,
            output,
            open,
        } => cmd_merge(inputs, output, open),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Expand glob patterns in input arguments, keeping argument order.
///
/// Matches within a single pattern are sorted so directory listings come out
/// deterministic, but patterns stay in the position the user gave them:
/// `merge cover.pdf "chapters/*.pdf"` keeps the cover first.
fn expand_inputs(patterns: Vec<String>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Only treat arguments with metacharacters as globs; everything else
        // is a literal path, misspelled or not.
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = Vec::new();
            for entry in
                glob(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?
            {
                match entry {
                    Ok(path) => matched.push(path),
                    Err(e) => warn!("glob error for {pattern}: {e}"),
                }
            }
            if matched.is_empty() {
                bail!("no files matched pattern: {pattern}");
            }
            matched.sort();
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

/// Open a file with the system default application.
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        process::Command::new("open")
            .arg(path)
            .spawn()
            .context("failed to launch opener")?;
    }
    #[cfg(target_os = "linux")]
    {
        process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("failed to launch opener")?;
    }
    #[cfg(target_os = "windows")]
    {
        process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()
            .context("failed to launch opener")?;
    }
    Ok(())
}

/// Queue the given inputs, in order, and merge them into one output PDF.
fn cmd_merge(inputs: Vec<String>, output: PathBuf, open: bool) -> Result<()> {
    let mut list = DocumentList::new();
    for path in expand_inputs(inputs)? {
        if !list.add(&path) {
            warn!("skipping {} (duplicate or not a .pdf)", path.display());
        }
    }

    let request = MergeRequest::new(&list, &output)?;

    eprintln!("Merging {} PDF files...", list.len());

    let summary = merge_documents(&request)?;

    eprintln!(
        "Merged {} documents ({} pages) into {}",
        summary.documents,
        summary.pages,
        summary.destination.display()
    );

    if open {
        open_file(&summary.destination)?;
    }

    Ok(())
}

/// Show information about a PDF.
fn cmd_info(input: PathBuf) -> Result<()> {
    let metadata = extract_metadata(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", metadata.page_count);

    if let Some(title) = metadata.title {
        println!("Title: {title}");
    }
    if let Some(author) = metadata.author {
        println!("Author: {author}");
    }

    Ok(())
}
