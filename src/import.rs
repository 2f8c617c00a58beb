use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::io::{bundle, excel_read};
use crate::model::{DEFAULT_DECK_ID, DEFAULT_DECK_NAME, DEFAULT_LEVEL, VocabularyEntry};

/// Configuration for one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Source spreadsheet. The first row is a header and is skipped.
    pub excel_path: PathBuf,
    /// Primary bundle destination. Entries of other decks already stored
    /// there survive the import.
    pub output_path: PathBuf,
    /// Optional mirrored destination receiving an identical copy.
    pub dataset_path: Option<PathBuf>,
    pub deck_id: String,
    pub deck_name: String,
    pub deck_description: String,
    /// Level stamped on rows whose level column is empty or absent.
    pub default_level: String,
}

/// Outcome of a successful import, used for the user-facing summary.
#[derive(Debug)]
pub struct ImportSummary {
    /// Entries parsed from the spreadsheet in this run.
    pub added: usize,
    /// Entries in the bundle after the merge.
    pub total: usize,
    pub deck_id: String,
    pub deck_name: String,
}

/// Converts the spreadsheet into vocabulary entries, replaces the targeted
/// deck inside the existing bundle, and writes the result to the configured
/// destination(s).
///
/// Parsing happens before any file is touched, so a malformed row leaves the
/// destination bundle unchanged. Re-running with the same deck and sheet is
/// idempotent.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %options.excel_path.display(), output = %options.output_path.display())
)]
pub fn import_deck(options: &ImportOptions) -> Result<ImportSummary> {
    if !options.excel_path.exists() {
        return Err(ToolError::MissingInput(options.excel_path.clone()));
    }

    let deck = DeckMetadata::from_options(options);
    let rows = excel_read::read_rows(&options.excel_path)?;
    let new_entries = parse_rows(&rows, &deck)?;
    info!(
        entry_count = new_entries.len(),
        deck_id = %deck.id,
        "parsed entries from spreadsheet"
    );

    let existing = if options.output_path.exists() {
        bundle::read_entries(&options.output_path)?
    } else {
        Vec::new()
    };
    debug!(existing_count = existing.len(), "loaded existing bundle");

    let added = new_entries.len();
    let combined = merge_deck(existing, new_entries, &deck.id);

    bundle::write_entries(&options.output_path, &combined)?;
    if let Some(dataset_path) = &options.dataset_path {
        bundle::write_entries(dataset_path, &combined)?;
        debug!(dataset = %dataset_path.display(), "dataset copy synced");
    }
    info!(total = combined.len(), "bundle written");

    Ok(ImportSummary {
        added,
        total: combined.len(),
        deck_id: deck.id,
        deck_name: deck.name,
    })
}

/// Deck metadata after trimming and fallback resolution.
struct DeckMetadata {
    id: String,
    name: String,
    description: String,
    default_level: String,
}

impl DeckMetadata {
    fn from_options(options: &ImportOptions) -> Self {
        let id = sanitize(&options.deck_id).to_lowercase();
        let name = sanitize(&options.deck_name);
        let default_level = sanitize(&options.default_level);
        Self {
            id: fallback(id, DEFAULT_DECK_ID),
            name: fallback(name, DEFAULT_DECK_NAME),
            description: sanitize(&options.deck_description),
            default_level: fallback(default_level, DEFAULT_LEVEL),
        }
    }
}

/// Maps spreadsheet rows onto entries stamped with the deck metadata.
///
/// Rows with five usable columns are (word, level, definition, example,
/// translation); rows with four omit the level, which falls back to the
/// deck's default. Fully blank rows and rows without a word are skipped;
/// anything narrower than four columns aborts the run.
fn parse_rows(rows: &[Vec<String>], deck: &DeckMetadata) -> Result<Vec<VocabularyEntry>> {
    let mut entries = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let word = sanitize(row.first().map(String::as_str).unwrap_or_default());
        if word.is_empty() {
            continue;
        }

        let (level, definition, example, translation) = if row.len() >= 5 {
            (
                sanitize(&row[1]),
                sanitize(&row[2]),
                sanitize(&row[3]),
                sanitize(&row[4]),
            )
        } else if row.len() >= 4 {
            (
                String::new(),
                sanitize(&row[1]),
                sanitize(&row[2]),
                sanitize(&row[3]),
            )
        } else {
            // Header row is row 1, so the first data row is row 2.
            return Err(ToolError::MalformedRow {
                row: index + 2,
                columns: row.len(),
            });
        };

        entries.push(VocabularyEntry {
            deck_id: Some(deck.id.clone()),
            deck_name: Some(deck.name.clone()),
            deck_description: Some(deck.description.clone()),
            word,
            level: fallback(level, &deck.default_level),
            definition,
            example,
            translation,
        });
    }

    Ok(entries)
}

/// Replaces all entries of `deck_id` with the freshly parsed ones and sorts
/// the result by `(deckId, lowercased word)` for deterministic output.
fn merge_deck(
    existing: Vec<VocabularyEntry>,
    new_entries: Vec<VocabularyEntry>,
    deck_id: &str,
) -> Vec<VocabularyEntry> {
    let mut combined: Vec<VocabularyEntry> = existing
        .into_iter()
        .filter(|entry| entry.deck_id_or_default() != deck_id)
        .collect();
    combined.extend(new_entries);
    combined.sort_by_cached_key(VocabularyEntry::sort_key);
    combined
}

fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

fn fallback(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
