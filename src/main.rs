use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use suftree::output::{self, PhaseWriter};
use suftree::tree::SuffixTree;
use suftree::utils::{self, AppConfig, BuildProgress};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "suftree")]
#[command(about = "Online suffix tree construction with per-phase DOT snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Text to index
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct InputArgs {
    #[command(flatten)]
    source: Source,

    /// ASCII terminator appended before building
    #[arg(short, long)]
    sentinel: Option<char>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and write one DOT file per phase
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory for DOT files
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Only write the snapshot of the finished tree
        #[arg(long)]
        final_only: bool,
    },
    /// Print the finished tree as DOT to stdout
    Dot {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show tree statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every offset at which a pattern occurs
    Find {
        #[command(flatten)]
        input: InputArgs,

        /// Pattern to search for
        #[arg(short, long)]
        pattern: String,
    },
    /// Check every tree invariant
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the configuration file path and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    utils::init_logging(&config.log_filter, cli.verbose);
    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Build {
            input,
            out,
            final_only,
        } => {
            let text = load_input(&input, &config)?;
            let dir = out
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            write_phases(&text, &dir, final_only)?;
        }
        Commands::Dot { input } => {
            let text = load_input(&input, &config)?;
            let tree = build_tree(&text)?;
            let mut stdout = io::stdout().lock();
            output::write_dot(&tree, text.len().saturating_sub(1), &mut stdout)?;
            stdout.flush()?;
        }
        Commands::Stats { input, json } => {
            let text = load_input(&input, &config)?;
            let stats = build_tree(&text)?.stats()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats(&stats, color)?;
            }
        }
        Commands::Find { input, pattern } => {
            let text = load_input(&input, &config)?;
            let tree = build_tree(&text)?;
            let offsets = tree.occurrences(pattern.as_bytes())?;
            output::print_matches(pattern.as_bytes(), &offsets, color)?;
        }
        Commands::Validate { input } => {
            let text = load_input(&input, &config)?;
            let tree = build_tree(&text)?;
            tree.validate().context("Suffix tree is invalid")?;
            println!("OK: {} nodes, all invariants hold", tree.node_count());
        }
        Commands::Config => {
            println!("Config file: {}", utils::get_config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Read the input text and append the sentinel, if any
fn load_input(input: &InputArgs, config: &AppConfig) -> Result<Vec<u8>> {
    let mut text = match (&input.source.text, &input.source.file) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        (None, None) => anyhow::bail!("No input text given"),
    };

    let sentinel = match input.sentinel {
        Some(c) => Some(utils::sentinel_to_byte(c)?),
        None => config.sentinel_byte()?,
    };
    if let Some(byte) = sentinel {
        if text.contains(&byte) {
            warn!(
                sentinel = %(byte as char),
                "sentinel already occurs in the input, suffixes may stay implicit"
            );
        }
        text.push(byte);
    }

    Ok(text)
}

fn build_tree(text: &[u8]) -> Result<SuffixTree> {
    let progress = BuildProgress::for_input(text.len());
    let mut tree = SuffixTree::new();
    for &c in text {
        tree.push(c)?;
        progress.inc(1);
    }
    progress.finish("built");
    Ok(tree)
}

/// Build the tree, writing a snapshot after each phase (or only the last)
fn write_phases(text: &[u8], dir: &Path, final_only: bool) -> Result<()> {
    let writer = PhaseWriter::new(dir, text)?;
    let progress = BuildProgress::for_input(text.len());
    let mut tree = SuffixTree::new();
    let mut written = 0usize;

    for (phase, &c) in text.iter().enumerate() {
        tree.push(c)?;
        progress.inc(1);
        if !final_only || phase + 1 == text.len() {
            let path = writer.write(&tree, phase)?;
            info!(phase, path = %path.display(), "wrote snapshot");
            written += 1;
        }
    }
    progress.finish("done");

    println!(
        "Wrote {} DOT file{} to {}",
        written,
        if written == 1 { "" } else { "s" },
        dir.display()
    );
    Ok(())
}
