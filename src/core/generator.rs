/// The story generator: request + seed → fully assembled horror short.
///
/// Shuffles each lexicon table with its own seed offset, picks fragments
/// through decorrelated seed transforms, and stitches them into scenes,
/// a voice profile, and production notes.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::lexicon::{Lexicon, LexiconError};
use crate::core::seed::StorySeed;
use crate::core::selection::{pick, shuffle};
use crate::core::voice::derive_voice_profile;
use crate::schema::request::{
    HorrorStoryRequest, DEFAULT_DURATION_SECONDS, MAX_DURATION_SECONDS, MAX_INTENSITY,
    MIN_DURATION_SECONDS, MIN_INTENSITY,
};
use crate::schema::story::{ColorPalette, HorrorScene, HorrorStory};

pub const MIN_SCENES: usize = 3;
pub const MAX_SCENES: usize = 7;
const SECONDS_PER_SCENE: f64 = 20.0;

const BACKGROUND_EVEN: &str = "#050508";
const BACKGROUND_ODD: &str = "#140714";
pub const ACCENT_HIGH: &str = "#ff3f8e";
pub const ACCENT_LOW: &str = "#6a63ff";
/// Scene intensity above which audio layering turns harsh and the accent hot.
const HARSH_THRESHOLD: f64 = 3.0;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Clamp a requested duration into the playable range. Non-finite input
/// falls back to the default before clamping.
pub fn normalize_duration(duration: f64) -> f64 {
    let duration = if duration.is_finite() {
        duration
    } else {
        DEFAULT_DURATION_SECONDS
    };
    duration.clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

/// `round(duration / 20)` clamped to 3..=7.
pub fn scene_count_for(duration: f64) -> usize {
    let raw = (duration / SECONDS_PER_SCENE).round();
    (raw as usize).clamp(MIN_SCENES, MAX_SCENES)
}

/// Per-scene intensity: rises by up to one level across the story.
pub fn scene_intensity(intensity: u8, index: usize, scene_count: usize) -> f64 {
    (f64::from(intensity) + index as f64 / scene_count as f64)
        .clamp(f64::from(MIN_INTENSITY), f64::from(MAX_INTENSITY))
}

/// Generate with the built-in lexicon.
pub fn craft_horror_story(request: &HorrorStoryRequest, seed: StorySeed) -> HorrorStory {
    static BUILTIN: OnceLock<StoryGenerator> = OnceLock::new();
    BUILTIN
        .get_or_init(StoryGenerator::default)
        .craft(request, seed)
}

/// Lexicon tables permuted once per generation call.
struct ShuffledTables {
    adjectives: Vec<String>,
    settings: Vec<String>,
    entities: Vec<String>,
    details: Vec<String>,
    motifs: Vec<String>,
    sounds: Vec<String>,
    directions: Vec<String>,
}

impl ShuffledTables {
    fn new(lexicon: &Lexicon, seed: StorySeed) -> Self {
        Self {
            adjectives: shuffle(&lexicon.adjectives, seed.derive(1, 0)),
            settings: shuffle(&lexicon.settings, seed.derive(13, 31)),
            entities: shuffle(&lexicon.entities, seed.derive(7, 17)),
            details: shuffle(&lexicon.sensory_details, seed.derive(19, 11)),
            motifs: shuffle(&lexicon.visual_motifs, seed.derive(5, 53)),
            sounds: shuffle(&lexicon.sound_layers, seed.derive(3, 71)),
            directions: shuffle(&lexicon.screen_directions, seed.derive(23, 97)),
        }
    }
}

/// Generates horror shorts from an immutable lexicon. Built via
/// `StoryGenerator::builder()`; cheap to share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct StoryGenerator {
    lexicon: Lexicon,
}

/// Builder for constructing a `StoryGenerator`.
#[derive(Debug, Default)]
pub struct StoryGeneratorBuilder {
    lexicon_paths: Vec<PathBuf>,
    /// Directly provided lexicon (for testing without files).
    lexicon: Option<Lexicon>,
}

impl StoryGenerator {
    pub fn builder() -> StoryGeneratorBuilder {
        StoryGeneratorBuilder::default()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Generate a story with a seed taken from the theme and the wall clock.
    pub fn craft_fresh(&self, request: &HorrorStoryRequest) -> HorrorStory {
        self.craft(request, StorySeed::fresh(&request.theme))
    }

    /// Generate a story. Pure: the same request and seed always produce the
    /// same story.
    pub fn craft(&self, request: &HorrorStoryRequest, seed: StorySeed) -> HorrorStory {
        let lexicon = &self.lexicon;
        let duration_seconds = normalize_duration(request.duration);
        let scene_count = scene_count_for(duration_seconds);
        let intensity = request.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
        let tables = ShuffledTables::new(lexicon, seed);
        let s = seed.derive(1, 0);

        let protagonist = pick(&lexicon.protagonists, s);

        let title = format!(
            "{}: {} {}",
            pick(&lexicon.title_openers, s),
            pick(&tables.adjectives, s),
            pick(&lexicon.title_forms, seed.derive(13, 0)),
        );

        let hook = format!(
            "A {} chases a {} mystery in a {} until the {} notices the viewers.",
            protagonist,
            pick(&tables.adjectives, seed.derive(2, 0)),
            pick(&tables.settings, seed.derive(3, 0)),
            pick(&tables.entities, seed.derive(5, 0)),
        );

        let synopsis = format!(
            "Summoned by whispers of \"{}\" {} lore, the {} breaches a {} {}. \
             Each frame reveals {} while a {} stitches itself into the signal.",
            request.theme.to_uppercase(),
            request.style.lore_words(),
            protagonist,
            pick(&tables.adjectives, seed.derive(7, 0)),
            pick(&tables.settings, seed.derive(11, 0)),
            pick(&tables.details, seed.derive(13, 0)),
            pick(&tables.entities, seed.derive(17, 0)),
        );

        let scene_context = SceneContext {
            tables: &tables,
            theme: &request.theme,
            protagonist,
            intensity,
            scene_count,
            seed,
        };
        let scenes = (0..scene_count).map(|index| scene_context.scene(index)).collect();

        let fx_notes = vec![
            format!(
                "Layer {} beneath narration for dread floor",
                pick(&tables.sounds, seed.derive(37, 0))
            ),
            format!(
                "Pulse {} between cuts to prime viewer anticipation",
                pick(&tables.motifs, seed.derive(41, 0))
            ),
            format!(
                "Accent jump-scares with {} filtered through cavernous reverb",
                pick(&tables.sounds, seed.derive(43, 0))
            ),
            pick(&lexicon.endings, s).clone(),
        ];

        tracing::debug!(
            seed = %seed,
            style = %request.style,
            intensity,
            scenes = scene_count,
            "crafted horror story"
        );

        HorrorStory {
            title,
            synopsis,
            hook,
            duration_seconds,
            voice_profile: derive_voice_profile(intensity, request.style, seed),
            scenes,
            fx_notes,
        }
    }
}

/// Per-story state every scene is assembled from.
struct SceneContext<'a> {
    tables: &'a ShuffledTables,
    theme: &'a str,
    protagonist: &'a str,
    intensity: u8,
    scene_count: usize,
    seed: StorySeed,
}

impl SceneContext<'_> {
    fn scene(&self, index: usize) -> HorrorScene {
        let tables = self.tables;
        let scalar = scene_intensity(self.intensity, index, self.scene_count);
        let harsh = scalar > HARSH_THRESHOLD;
        let i = index as u64;
        let at = |mul: u64, offset: u64| self.seed.derive(1, 0) + i * mul + offset;

        let motif = pick(&tables.motifs, at(3, 0));
        let entity = pick(&tables.entities, at(7, 0));
        let detail = pick(&tables.details, at(11, 0));
        let direction = pick(&tables.directions, at(13, 0));

        // The third layer borrows a visual motif when the scene is still calm.
        let third_layer = if harsh {
            pick(&tables.sounds, at(23, 7))
        } else {
            pick(&tables.motifs, at(29, 9))
        };
        let soundscape = vec![
            pick(&tables.sounds, at(17, 0)).clone(),
            pick(&tables.sounds, at(19, 5)).clone(),
            third_layer.clone(),
        ];

        HorrorScene {
            id: format!("scene-{}", index + 1),
            heading: capitalize_first(motif),
            narration: format!(
                "The {} keeps the camera steady as {}. {}. The {} bleeds through the edges \
                 of the frame, translating {} into a threat only those watching can answer.",
                self.protagonist, detail, direction, entity, self.theme
            ),
            visual_cue: motif.clone(),
            soundscape,
            color_palette: ColorPalette {
                background: if index % 2 == 0 {
                    BACKGROUND_EVEN
                } else {
                    BACKGROUND_ODD
                }
                .to_string(),
                accent: if harsh { ACCENT_HIGH } else { ACCENT_LOW }.to_string(),
            },
            screen_direction: direction.clone(),
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl StoryGeneratorBuilder {
    /// Lay a RON lexicon override over the base lexicon. Later paths win.
    pub fn lexicon_path(mut self, path: impl AsRef<Path>) -> Self {
        self.lexicon_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Provide the base lexicon directly (for testing without files).
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn build(self) -> Result<StoryGenerator, GeneratorError> {
        let mut lexicon = self.lexicon.unwrap_or_default();

        for path in &self.lexicon_paths {
            let contents = std::fs::read_to_string(path).map_err(LexiconError::from)?;
            let overrides = Lexicon::parse_override(&contents)?;
            tracing::info!(
                path = %path.display(),
                tables = ?overrides.table_names(),
                "applying lexicon override"
            );
            lexicon.merge(overrides);
        }

        lexicon.validate()?;
        Ok(StoryGenerator { lexicon })
    }
}
