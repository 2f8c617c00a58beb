use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{info, instrument};

use crate::error::Result;
use crate::io::bundle;
use crate::model::REQUIRED_FIELDS;

/// Accumulated findings for one validation run. A populated `problems` list
/// means the bundle should not ship.
#[derive(Debug)]
pub struct ValidationReport {
    pub problems: Vec<String>,
    pub entry_count: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Checks the bundle and its mirrored dataset copy.
///
/// All checks run and findings accumulate; only a missing or structurally
/// unreadable file aborts early. The validator never mutates either file.
#[instrument(
    level = "info",
    skip_all,
    fields(data = %data_path.display(), dataset = %dataset_path.display())
)]
pub fn check_bundle(data_path: &Path, dataset_path: &Path) -> Result<ValidationReport> {
    let entries = bundle::read_value(data_path)?;
    let dataset_entries = bundle::read_value(dataset_path)?;

    let mut problems = Vec::new();
    let mut seen_words: HashSet<String> = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        let word = field_str(entry, "word").trim().to_string();

        if !seen_words.insert(word.to_lowercase()) {
            problems.push(format!(
                "Duplicate entry for word '{word}' at position {position}."
            ));
        }

        let label = if word.is_empty() {
            format!("# {position}")
        } else {
            word.clone()
        };
        for problem in check_entry(entry, &word) {
            problems.push(format!("{label}: {problem}"));
        }
    }

    if entries != dataset_entries {
        problems.push(format!(
            "Dataset copy at {} is out of sync with {}.",
            dataset_path.display(),
            data_path.display()
        ));
    }

    info!(
        entry_count = entries.len(),
        problem_count = problems.len(),
        "bundle checked"
    );

    Ok(ValidationReport {
        problems,
        entry_count: entries.len(),
    })
}

/// Per-entry checks: the required fields must be non-blank strings, and the
/// example sentence must mention the target word.
fn check_entry(entry: &Value, word: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if !entry.is_object() {
        problems.push("Entry is not a JSON object.".to_string());
        return problems;
    }

    for field in REQUIRED_FIELDS {
        let blank = match entry.get(field) {
            Some(Value::String(value)) => value.trim().is_empty(),
            _ => true,
        };
        if blank {
            problems.push(format!("Field '{field}' is empty or missing."));
        }
    }

    let example = field_str(entry, "example");
    if !word.is_empty() && !example.to_lowercase().contains(&word.to_lowercase()) {
        problems.push("Example sentence does not contain the target word.".to_string());
    }

    problems
}

fn field_str<'a>(entry: &'a Value, field: &str) -> &'a str {
    entry.get(field).and_then(Value::as_str).unwrap_or_default()
}
