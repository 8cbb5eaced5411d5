/// Word tables the generator draws from: built-in data, RON loading, and linting.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("lexicon table '{0}' is empty")]
    EmptyTable(&'static str),
}

/// The horror tables shipped with the crate, in the same RON format as
/// overrides.
const BUILTIN_RON: &str = include_str!("../../genre_data/horror/lexicon.ron");

/// The complete set of fixed tables one generation draws from.
///
/// Every table is non-empty once constructed through [`Lexicon::builtin`] or
/// the RON loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub adjectives: Vec<String>,
    pub settings: Vec<String>,
    pub entities: Vec<String>,
    pub sensory_details: Vec<String>,
    pub visual_motifs: Vec<String>,
    pub sound_layers: Vec<String>,
    pub screen_directions: Vec<String>,
    pub endings: Vec<String>,
    pub protagonists: Vec<String>,
    pub title_openers: Vec<String>,
    pub title_forms: Vec<String>,
}

// RON files may name only the tables they override, so they deserialize
// into an all-optional shape first.

#[derive(Debug, Default, Deserialize)]
#[serde(rename = "Lexicon", default, deny_unknown_fields)]
struct RonLexicon {
    adjectives: Vec<String>,
    settings: Vec<String>,
    entities: Vec<String>,
    sensory_details: Vec<String>,
    visual_motifs: Vec<String>,
    sound_layers: Vec<String>,
    screen_directions: Vec<String>,
    endings: Vec<String>,
    protagonists: Vec<String>,
    title_openers: Vec<String>,
    title_forms: Vec<String>,
}

/// Partial lexicon: tables present here replace the base lexicon's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconOverride {
    tables: Vec<(&'static str, Vec<String>)>,
}

impl LexiconOverride {
    /// Names of the tables this override replaces.
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|(name, _)| *name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl From<RonLexicon> for LexiconOverride {
    fn from(raw: RonLexicon) -> Self {
        let candidates = [
            ("adjectives", raw.adjectives),
            ("settings", raw.settings),
            ("entities", raw.entities),
            ("sensory_details", raw.sensory_details),
            ("visual_motifs", raw.visual_motifs),
            ("sound_layers", raw.sound_layers),
            ("screen_directions", raw.screen_directions),
            ("endings", raw.endings),
            ("protagonists", raw.protagonists),
            ("title_openers", raw.title_openers),
            ("title_forms", raw.title_forms),
        ];
        Self {
            tables: candidates
                .into_iter()
                .filter(|(_, table)| !table.is_empty())
                .collect(),
        }
    }
}

impl Lexicon {
    /// The built-in horror tables, parsed once from the embedded
    /// `genre_data/horror/lexicon.ron`.
    pub fn builtin() -> Self {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Self::parse_complete(BUILTIN_RON)
                    .expect("embedded horror lexicon defines every table")
            })
            .clone()
    }

    /// Parse a RON lexicon that must define every table itself.
    pub fn parse_complete(input: &str) -> Result<Lexicon, LexiconError> {
        let mut lexicon = Self::empty();
        lexicon.merge(Self::parse_override(input)?);
        lexicon.validate()?;
        Ok(lexicon)
    }

    fn empty() -> Self {
        Self {
            adjectives: Vec::new(),
            settings: Vec::new(),
            entities: Vec::new(),
            sensory_details: Vec::new(),
            visual_motifs: Vec::new(),
            sound_layers: Vec::new(),
            screen_directions: Vec::new(),
            endings: Vec::new(),
            protagonists: Vec::new(),
            title_openers: Vec::new(),
            title_forms: Vec::new(),
        }
    }

    /// Parse a lexicon override from a RON string.
    pub fn parse_override(input: &str) -> Result<LexiconOverride, LexiconError> {
        let raw: RonLexicon = ron::from_str(input)?;
        Ok(raw.into())
    }

    /// Load the built-in lexicon with the tables from a RON file laid over it.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::parse_ron(&contents)?;
        tracing::info!(path = %path.display(), "loaded lexicon override");
        Ok(lexicon)
    }

    /// Parse a RON override and merge it over the built-in lexicon.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let mut lexicon = Self::builtin();
        lexicon.merge(Self::parse_override(input)?);
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Replace tables with those present in `other`.
    pub fn merge(&mut self, other: LexiconOverride) {
        for (name, table) in other.tables {
            if let Some(slot) = self.table_mut(name) {
                *slot = table;
            }
        }
    }

    /// All tables with their names, in declaration order.
    pub fn tables(&self) -> [(&'static str, &[String]); 11] {
        [
            ("adjectives", self.adjectives.as_slice()),
            ("settings", self.settings.as_slice()),
            ("entities", self.entities.as_slice()),
            ("sensory_details", self.sensory_details.as_slice()),
            ("visual_motifs", self.visual_motifs.as_slice()),
            ("sound_layers", self.sound_layers.as_slice()),
            ("screen_directions", self.screen_directions.as_slice()),
            ("endings", self.endings.as_slice()),
            ("protagonists", self.protagonists.as_slice()),
            ("title_openers", self.title_openers.as_slice()),
            ("title_forms", self.title_forms.as_slice()),
        ]
    }

    fn table_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        let slot = match name {
            "adjectives" => &mut self.adjectives,
            "settings" => &mut self.settings,
            "entities" => &mut self.entities,
            "sensory_details" => &mut self.sensory_details,
            "visual_motifs" => &mut self.visual_motifs,
            "sound_layers" => &mut self.sound_layers,
            "screen_directions" => &mut self.screen_directions,
            "endings" => &mut self.endings,
            "protagonists" => &mut self.protagonists,
            "title_openers" => &mut self.title_openers,
            "title_forms" => &mut self.title_forms,
            _ => return None,
        };
        Some(slot)
    }

    /// Fail on the first empty table.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for (name, table) in self.tables() {
            if table.is_empty() {
                return Err(LexiconError::EmptyTable(name));
            }
        }
        Ok(())
    }

    /// Non-fatal quality warnings: duplicate entries and very short tables.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, table) in self.tables() {
            if !table.is_empty() && table.len() < 3 {
                warnings.push(format!(
                    "table '{}' has only {} entries (minimum 3 recommended)",
                    name,
                    table.len()
                ));
            }
            let mut seen = FxHashSet::default();
            for entry in table {
                if !seen.insert(entry.as_str()) {
                    warnings.push(format!("table '{}' repeats entry '{}'", name, entry));
                }
            }
        }
        warnings
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
