use serde::{Deserialize, Serialize};

/// Deck identifier assumed for entries that predate deck support.
pub const DEFAULT_DECK_ID: &str = "core";
/// Human readable name used when no deck name is supplied.
pub const DEFAULT_DECK_NAME: &str = "Vocabolario Base";
/// Proficiency level used when a spreadsheet row omits the level column.
pub const DEFAULT_LEVEL: &str = "Base";

/// Field names every entry must populate with a non-blank string.
pub const REQUIRED_FIELDS: [&str; 5] = ["word", "level", "definition", "example", "translation"];

/// A single vocabulary card as persisted in the JSON bundle.
///
/// The deck fields are denormalized onto every entry so the bundle stays a
/// flat array. Bundles written before decks existed omit them, which is why
/// they deserialize leniently and are skipped when absent on the way out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VocabularyEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_description: Option<String>,
    pub word: String,
    pub level: String,
    pub definition: String,
    pub example: String,
    pub translation: String,
}

impl VocabularyEntry {
    /// Deck the entry belongs to, treating pre-deck entries as [`DEFAULT_DECK_ID`].
    pub fn deck_id_or_default(&self) -> &str {
        self.deck_id.as_deref().unwrap_or(DEFAULT_DECK_ID)
    }

    /// Ordering key used for deterministic bundle output.
    pub fn sort_key(&self) -> (String, String) {
        (
            self.deck_id.clone().unwrap_or_default(),
            self.word.to_lowercase(),
        )
    }
}
