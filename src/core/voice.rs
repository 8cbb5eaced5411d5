/// Voice profiles: how the narrator should sound for a given style and intensity.
use crate::core::seed::StorySeed;
use crate::core::selection::pick;
use crate::schema::request::Style;
use crate::schema::story::{Timbre, VoiceProfile};

const BASE_PITCH: f64 = 0.62;
const PITCH_DROP_PER_LEVEL: f64 = 0.06;
const RATE_DROP_PER_LEVEL: f64 = 0.03;
const BASE_REVERB: f64 = 0.45;
const REVERB_PER_LEVEL: f64 = 0.08;
pub const MIN_REVERB: f64 = 0.4;
pub const MAX_REVERB: f64 = 0.95;

/// Derive the narrator's voice profile.
///
/// Higher intensity gives a deeper, slower, wetter voice. Rate starts from
/// the style's cadence. Timbre is a seeded pick.
pub fn derive_voice_profile(intensity: u8, style: Style, seed: StorySeed) -> VoiceProfile {
    let level = f64::from(intensity);
    VoiceProfile {
        pitch: BASE_PITCH - level * PITCH_DROP_PER_LEVEL,
        rate: style.cadence() - level * RATE_DROP_PER_LEVEL,
        reverb: (BASE_REVERB + level * REVERB_PER_LEVEL).clamp(MIN_REVERB, MAX_REVERB),
        timbre: *pick(&Timbre::ALL, seed.derive(31, 0)),
    }
}
