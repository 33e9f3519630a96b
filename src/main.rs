//! Command-line front end: read a template file, expand it, write JSON.

use anyhow::{bail, Context, Result};
use clap::Parser;
use jtf_rust::{parse_with, template_span, FakeProvider};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jtf")]
#[command(about = "JSON Template Parser: expand @directives in a JSON template into concrete JSON")]
#[command(version)]
struct Cli {
    /// Input template file (overrides --input)
    file: Option<PathBuf>,

    /// Input template file
    #[arg(short, long, default_value = "input.jtf")]
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Suppress the console report
    #[arg(short, long)]
    quiet: bool,

    /// Log scanner and resolver decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("❌ Error: {:#}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.file.as_ref().unwrap_or(&cli.input);
    if !input.exists() {
        bail!("Input file '{}' not found", input.display());
    }

    let template = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    if !cli.quiet {
        println!("=== JSON Template Parser ===\n");
        println!("Input: {}", input.display());
        println!("Output: {}\n", cli.output.display());
        println!("Template:");
        println!("{}", "─".repeat(50));
        println!("{}", template_span(&template).unwrap_or(template.trim()));
        println!("\n{}", "─".repeat(50));
    }

    let provider = match cli.seed {
        Some(seed) => FakeProvider::seeded(seed),
        None => FakeProvider::new(),
    };
    let result = parse_with(&template, &provider)
        .with_context(|| format!("failed to expand {}", input.display()))?;

    let json = if cli.compact {
        serde_json::to_string(&result.value)?
    } else {
        serde_json::to_string_pretty(&result.value)?
    };

    if !cli.quiet {
        println!("Generated Output:");
        println!("{}", "─".repeat(50));
        println!("{}", json);
    }

    fs::write(&cli.output, &json)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if !cli.quiet {
        if !result.diagnostics.is_empty() {
            println!(
                "\n⚠ {} warning(s) while resolving directives",
                result.diagnostics.len()
            );
        }
        println!("\n✅ Output saved to {}", cli.output.display());
    }
    Ok(())
}
