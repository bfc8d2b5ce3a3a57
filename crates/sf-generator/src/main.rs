//! sf-gen - regenerate the SDK object families from their definitions

use anyhow::{Context, Result};
use clap::Parser;
use sf_generator::{defs, generate, select, writer, Writer, DEFAULT_OUTPUT_ROOT};
use std::path::PathBuf;

/// Render object family definitions into the SDK crate
#[derive(Parser, Debug)]
#[command(name = "sf-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory receiving one sub-directory per family
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,

    /// Only render these interfaces (e.g. Warehouses); repeatable
    #[arg(short, long)]
    interface: Vec<String>,

    /// Fail if any generated file differs instead of writing
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let all = defs::all();
    let selected = select(&all, &cli.interface)?;

    if cli.verbose {
        eprintln!(
            "[verbose] Rendering {} interface(s) into {}",
            selected.len(),
            cli.output_root.display()
        );
    }

    let summary = generate(&selected, &cli.output_root, Writer::new(cli.check))
        .with_context(|| format!("Failed to generate into {}", cli.output_root.display()))?;

    if cli.verbose {
        for path in &summary.written {
            eprintln!("[verbose] Wrote {}", path.display());
        }
        eprintln!("[verbose] {} file(s) unchanged", summary.unchanged.len());
    }

    writer::ensure_fresh(summary.stale)?;

    if !cli.check {
        println!(
            "Generated {} interface(s): {} written, {} unchanged",
            selected.len(),
            summary.written.len(),
            summary.unchanged.len()
        );
    }
    Ok(())
}
