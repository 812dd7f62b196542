use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docport_text_chunker::{Chunker, ChunkerConfig, TextChunk};

#[derive(Parser)]
#[command(name = "docport-chunk")]
#[command(about = "Split extracted document text into overlapping chunks for search indexing", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,

    /// Honor structural section markers from document analysis
    #[arg(long)]
    sections: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Target chunk size in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters of overlap between consecutive chunks
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// TOML file with chunker settings (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Chunk list as pretty-printed JSON
    Json,
    /// Chunk contents with header lines
    Text,
    /// One-line summary of the chunking result
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(&cli)?;
    config.validate().context("invalid chunker configuration")?;

    let document = read_input(cli.input.as_deref())?;
    let chunker = Chunker::new(config);

    let chunks = if cli.sections {
        chunker.chunk_sectioned(&document)
    } else {
        chunker.chunk_with_overlap(&document)
    };
    log::debug!(
        "produced {} chunks from {} input characters",
        chunks.len(),
        document.chars().count()
    );

    write_output(&chunks, cli.format)
}

fn load_config(cli: &Cli) -> Result<ChunkerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => ChunkerConfig::default(),
    };

    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(chunk_overlap) = cli.chunk_overlap {
        config.chunk_overlap = chunk_overlap;
    }

    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(chunks: &[TextChunk], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(chunks).context("failed to serialize chunks")?;
            println!("{payload}");
        }
        OutputFormat::Text => {
            for chunk in chunks {
                println!(
                    "## chunk {} [{}..{}] {} words",
                    chunk.chunk_index, chunk.start_index, chunk.end_index, chunk.word_count
                );
                println!("{}", chunk.content);
            }
        }
        OutputFormat::Stats => {
            println!("{}", Chunker::stats(chunks));
        }
    }
    Ok(())
}
