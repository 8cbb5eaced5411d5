use serde::{Deserialize, Serialize, Serializer};

/// Qualitative flavour of the narration voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timbre {
    Cavern,
    Void,
    Whisper,
}

impl Timbre {
    pub const ALL: [Timbre; 3] = [Timbre::Cavern, Timbre::Void, Timbre::Whisper];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cavern => "cavern",
            Self::Void => "void",
            Self::Whisper => "whisper",
        }
    }
}

/// Synthesis parameters for the narrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub pitch: f64,
    pub rate: f64,
    /// Always within 0.4..=0.95.
    pub reverb: f64,
    pub timbre: Timbre,
}

/// Two-tone colours for a scene's backdrop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub background: String,
    pub accent: String,
}

/// One narrative beat, played back in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorrorScene {
    /// `scene-1`, `scene-2`, ...
    pub id: String,
    pub heading: String,
    pub narration: String,
    pub visual_cue: String,
    pub soundscape: Vec<String>,
    pub color_palette: ColorPalette,
    pub screen_direction: String,
}

/// A fully assembled horror short. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorrorStory {
    pub title: String,
    pub synopsis: String,
    pub hook: String,
    #[serde(serialize_with = "serialize_seconds")]
    pub duration_seconds: f64,
    pub voice_profile: VoiceProfile,
    pub scenes: Vec<HorrorScene>,
    pub fx_notes: Vec<String>,
}

/// Whole seconds are written as integers: `45`, not `45.0`.
fn serialize_seconds<S: Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if seconds.fract() == 0.0 && seconds.abs() < MAX_EXACT_SECONDS {
        serializer.serialize_i64(*seconds as i64)
    } else {
        serializer.serialize_f64(*seconds)
    }
}

// Largest magnitude at which every whole f64 still converts to i64 exactly.
const MAX_EXACT_SECONDS: f64 = 9_007_199_254_740_992.0;
