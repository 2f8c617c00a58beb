use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vocab_tools::import::{self, ImportOptions};
use vocab_tools::io::bundle::{ASSET_FILE, DATA_FILE};
use vocab_tools::{Result, ToolError, validate};

fn main() {
    if let Err(error) = init_logging().and_then(|()| run(Cli::parse())) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Import(args) => execute_import(args),
        Command::Validate(args) => execute_validate(args),
    }
}

fn execute_import(args: ImportArgs) -> Result<()> {
    let dataset_path = if args.no_dataset {
        None
    } else {
        Some(args.dataset)
    };
    let options = ImportOptions {
        excel_path: args.excel_path,
        output_path: args.output,
        dataset_path,
        deck_id: args.deck_id,
        deck_name: args.deck_name,
        deck_description: args.deck_description,
        default_level: args.default_level,
    };

    let summary = import::import_deck(&options)?;
    println!(
        "Exported {} entries for deck '{}' ({}) to {}",
        summary.added,
        summary.deck_name,
        summary.deck_id,
        options.output_path.display()
    );
    if let Some(dataset_path) = &options.dataset_path {
        println!("Synced dataset asset at {}", dataset_path.display());
    }
    Ok(())
}

fn execute_validate(args: ValidateArgs) -> Result<()> {
    let report = validate::check_bundle(&args.data, &args.dataset)?;

    if report.is_valid() {
        println!(
            "Validation successful: {} entries checked.",
            report.entry_count
        );
        return Ok(());
    }

    println!("Vocabulary validation failed:");
    for problem in &report.problems {
        println!("  - {problem}");
    }
    Err(ToolError::ValidationFailed {
        problems: report.problems.len(),
    })
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import and validate the flashcards vocabulary bundle."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a vocabulary spreadsheet into the JSON bundle, replacing the
    /// targeted deck and leaving other decks untouched.
    Import(ImportArgs),
    /// Check the bundle and its mirrored dataset copy for completeness,
    /// duplicates, and sync.
    Validate(ValidateArgs),
}

#[derive(clap::Args)]
struct ImportArgs {
    /// Path to the vocabulary spreadsheet (.xlsx). Row 1 is the header.
    excel_path: PathBuf,

    /// Destination JSON bundle.
    #[arg(long, default_value = DATA_FILE)]
    output: PathBuf,

    /// Asset catalog copy kept in sync with the bundle.
    #[arg(long, default_value = ASSET_FILE)]
    dataset: PathBuf,

    /// Skip writing the asset catalog copy.
    #[arg(long)]
    no_dataset: bool,

    /// Identifier of the deck. Existing entries with the same id are replaced.
    #[arg(long, default_value = "core")]
    deck_id: String,

    /// Human readable name of the deck.
    #[arg(long, default_value = "Vocabolario Base")]
    deck_name: String,

    /// Optional description shown in the deck selector.
    #[arg(long, default_value = "")]
    deck_description: String,

    /// Fallback level when the spreadsheet does not provide the column.
    #[arg(long, default_value = "Base")]
    default_level: String,
}

#[derive(clap::Args)]
struct ValidateArgs {
    /// Primary JSON bundle to check.
    #[arg(long, default_value = DATA_FILE)]
    data: PathBuf,

    /// Mirrored dataset copy that must match the primary bundle.
    #[arg(long, default_value = ASSET_FILE)]
    dataset: PathBuf,
}
