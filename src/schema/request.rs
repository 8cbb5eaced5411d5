use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme used when the caller leaves it blank.
pub const DEFAULT_THEME: &str = "forbidden signal";
/// Longest theme (in chars) the boundary accepts before truncating.
pub const MAX_THEME_CHARS: usize = 80;
pub const DEFAULT_INTENSITY: u8 = 3;
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;
pub const DEFAULT_DURATION_SECONDS: f64 = 75.0;
pub const MIN_DURATION_SECONDS: f64 = 45.0;
pub const MAX_DURATION_SECONDS: f64 = 180.0;

/// The storytelling style of a generated short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    FoundFootage,
    #[default]
    Supernatural,
    Psychological,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::FoundFootage, Style::Supernatural, Style::Psychological];

    /// Wire tag: "found-footage", "supernatural", "psychological".
    pub fn tag(&self) -> &'static str {
        match self {
            Self::FoundFootage => "found-footage",
            Self::Supernatural => "supernatural",
            Self::Psychological => "psychological",
        }
    }

    /// The tag as prose, e.g. "found footage".
    pub fn lore_words(&self) -> &'static str {
        match self {
            Self::FoundFootage => "found footage",
            Self::Supernatural => "supernatural",
            Self::Psychological => "psychological",
        }
    }

    /// Short description of the delivery this style calls for.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::FoundFootage => "raw & panicked",
            Self::Supernatural => "ominous & ritualistic",
            Self::Psychological => "whispered doubts",
        }
    }

    /// Base narration rate before intensity slows it down.
    pub fn cadence(&self) -> f64 {
        match self {
            Self::FoundFootage => 0.96,
            Self::Supernatural => 0.85,
            Self::Psychological => 0.78,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}': expected found-footage, supernatural, or psychological")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.tag() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// A typed, already-validated generation request.
///
/// Boundaries are expected to build this with [`HorrorStoryRequest::new`],
/// which applies the same defaulting and clamping the HTTP endpoint does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorrorStoryRequest {
    pub theme: String,
    pub intensity: u8,
    pub duration: f64,
    pub style: Style,
}

impl HorrorStoryRequest {
    /// Build a request, normalizing every field.
    ///
    /// - `theme` is truncated to [`MAX_THEME_CHARS`] chars; empty falls back to
    ///   [`DEFAULT_THEME`].
    /// - `intensity` is clamped to 1..=5.
    /// - a non-finite `duration` falls back to [`DEFAULT_DURATION_SECONDS`].
    ///   Range clamping is left to the generator.
    pub fn new(theme: &str, intensity: u8, duration: f64, style: Style) -> Self {
        Self {
            theme: normalize_theme(theme),
            intensity: intensity.clamp(MIN_INTENSITY, MAX_INTENSITY),
            duration: if duration.is_finite() {
                duration
            } else {
                DEFAULT_DURATION_SECONDS
            },
            style,
        }
    }
}

impl Default for HorrorStoryRequest {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            intensity: DEFAULT_INTENSITY,
            duration: DEFAULT_DURATION_SECONDS,
            style: Style::default(),
        }
    }
}

/// Truncate to [`MAX_THEME_CHARS`] chars, falling back to the default theme when empty.
pub fn normalize_theme(theme: &str) -> String {
    let truncated: String = theme.chars().take(MAX_THEME_CHARS).collect();
    if truncated.is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        truncated
    }
}
