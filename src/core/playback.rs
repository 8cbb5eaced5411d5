/// Playback planning: the schedule a player follows to present a story.
///
/// Nothing here touches speech or audio devices. A plan says when each
/// scene starts and ends, what the narrator says and how, and how the
/// ambience bed is tuned. Players render it however they can.

use serde::{Deserialize, Serialize};

use crate::schema::story::HorrorStory;

/// No scene is shown for less than this, however short the story.
pub const MIN_SCENE_SECONDS: f64 = 6.0;
const MIN_PITCH: f64 = 0.1;
const MAX_PITCH: f64 = 2.0;
const MIN_RATE: f64 = 0.5;
const MAX_RATE: f64 = 1.2;

/// A single speech request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub pitch: f64,
    pub rate: f64,
    pub volume: f64,
}

/// When a scene is on screen and what is spoken over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneCue {
    pub scene_id: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub utterance: Utterance,
}

/// Tuning for the generated ambience bed: a detuned sawtooth rumble wobbled
/// by an LFO, plus band-passed noise, under a master gain that fades in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbienceSettings {
    pub rumble_hz: f64,
    pub rumble_gain: f64,
    pub lfo_hz: f64,
    pub lfo_depth_hz: f64,
    pub noise_band_hz: f64,
    pub noise_q: f64,
    pub noise_gain: f64,
    pub master_gain: f64,
    pub fade_in_seconds: f64,
    pub fade_out_seconds: f64,
}

impl AmbienceSettings {
    /// Wetter voices get a lower, louder bed.
    pub fn for_reverb(reverb: f64) -> Self {
        Self {
            rumble_hz: 32.0 + reverb * 12.0,
            rumble_gain: 0.32,
            lfo_hz: 0.18,
            lfo_depth_hz: 14.0,
            noise_band_hz: 650.0,
            noise_q: 3.2,
            noise_gain: 0.12 * reverb,
            master_gain: 0.22,
            fade_in_seconds: 0.9,
            fade_out_seconds: 0.6,
        }
    }
}

/// Where playback is at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackPosition {
    pub scene_index: usize,
    /// Fraction of the current scene elapsed, within 0..=1.
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackPlan {
    pub scene_seconds: f64,
    pub cues: Vec<SceneCue>,
    pub ambience: AmbienceSettings,
}

/// `max(6, duration / scenes)`, or zero for a story without scenes.
pub fn scene_duration(story: &HorrorStory) -> f64 {
    if story.scenes.is_empty() {
        return 0.0;
    }
    (story.duration_seconds / story.scenes.len() as f64).max(MIN_SCENE_SECONDS)
}

/// Lay the scenes out back to back.
pub fn plan_playback(story: &HorrorStory) -> PlaybackPlan {
    let scene_seconds = scene_duration(story);
    let pitch = story.voice_profile.pitch.clamp(MIN_PITCH, MAX_PITCH);
    let rate = story.voice_profile.rate.clamp(MIN_RATE, MAX_RATE);

    let cues = story
        .scenes
        .iter()
        .enumerate()
        .map(|(index, scene)| {
            let start_seconds = index as f64 * scene_seconds;
            SceneCue {
                scene_id: scene.id.clone(),
                start_seconds,
                end_seconds: start_seconds + scene_seconds,
                utterance: Utterance {
                    text: format!("{}. {}", story.hook, scene.narration),
                    pitch,
                    rate,
                    volume: 1.0,
                },
            }
        })
        .collect();

    PlaybackPlan {
        scene_seconds,
        cues,
        ambience: AmbienceSettings::for_reverb(story.voice_profile.reverb),
    }
}

impl PlaybackPlan {
    pub fn total_seconds(&self) -> f64 {
        self.cues.last().map(|cue| cue.end_seconds).unwrap_or(0.0)
    }

    /// The scene showing `elapsed` seconds into playback, or `None` once
    /// playback has run past the last scene.
    pub fn position_at(&self, elapsed: f64) -> Option<PlaybackPosition> {
        if self.cues.is_empty() || elapsed >= self.total_seconds() {
            return None;
        }
        let elapsed = elapsed.max(0.0);
        let scene_index = ((elapsed / self.scene_seconds) as usize).min(self.cues.len() - 1);
        let into_scene = elapsed - self.cues[scene_index].start_seconds;
        Some(PlaybackPosition {
            scene_index,
            progress: (into_scene / self.scene_seconds).clamp(0.0, 1.0),
        })
    }

    /// Bound a requested scene jump into range.
    pub fn jump_to(&self, index: usize) -> Option<&SceneCue> {
        let last = self.cues.len().checked_sub(1)?;
        self.cues.get(index.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::craft_horror_story;
    use crate::core::seed::StorySeed;
    use crate::schema::request::{HorrorStoryRequest, Style};

    fn story(duration: f64) -> HorrorStory {
        craft_horror_story(
            &HorrorStoryRequest::new("radio tower", 3, duration, Style::Supernatural),
            StorySeed(2024),
        )
    }

    #[test]
    fn scene_duration_divides_story() {
        assert_eq!(scene_duration(&story(75.0)), 18.75);
        assert_eq!(scene_duration(&story(180.0)), 180.0 / 7.0);
    }

    #[test]
    fn scene_duration_floor() {
        let mut s = story(45.0);
        s.duration_seconds = 10.0;
        assert_eq!(scene_duration(&s), MIN_SCENE_SECONDS);
        s.scenes.clear();
        assert_eq!(scene_duration(&s), 0.0);
    }

    #[test]
    fn cues_are_contiguous() {
        let plan = plan_playback(&story(120.0));
        assert_eq!(plan.cues.len(), 6);
        assert_eq!(plan.cues[0].start_seconds, 0.0);
        for pair in plan.cues.windows(2) {
            assert_eq!(pair[0].end_seconds, pair[1].start_seconds);
        }
        assert_eq!(plan.total_seconds(), 120.0);
    }

    #[test]
    fn utterance_prefixes_hook() {
        let s = story(60.0);
        let plan = plan_playback(&s);
        for (cue, scene) in plan.cues.iter().zip(&s.scenes) {
            assert_eq!(cue.scene_id, scene.id);
            assert_eq!(cue.utterance.text, format!("{}. {}", s.hook, scene.narration));
            assert_eq!(cue.utterance.volume, 1.0);
        }
    }

    #[test]
    fn voice_clamped_for_speech_engines() {
        let mut s = story(60.0);
        s.voice_profile.pitch = 0.02;
        s.voice_profile.rate = 0.3;
        let plan = plan_playback(&s);
        assert_eq!(plan.cues[0].utterance.pitch, 0.1);
        assert_eq!(plan.cues[0].utterance.rate, 0.5);
    }

    #[test]
    fn ambience_tracks_reverb() {
        let ambience = AmbienceSettings::for_reverb(0.5);
        assert_eq!(ambience.rumble_hz, 38.0);
        assert_eq!(ambience.noise_gain, 0.06);
    }

    #[test]
    fn position_walks_through_scenes() {
        let plan = plan_playback(&story(60.0));
        assert_eq!(plan.scene_seconds, 20.0);

        let start = plan.position_at(0.0).unwrap();
        assert_eq!(start.scene_index, 0);
        assert_eq!(start.progress, 0.0);

        let mid = plan.position_at(30.0).unwrap();
        assert_eq!(mid.scene_index, 1);
        assert_eq!(mid.progress, 0.5);

        assert!(plan.position_at(60.0).is_none());
    }

    #[test]
    fn jump_is_bounded() {
        let plan = plan_playback(&story(60.0));
        assert_eq!(plan.jump_to(99).unwrap().scene_id, "scene-3");
        assert_eq!(plan.jump_to(1).unwrap().scene_id, "scene-2");

        let empty = PlaybackPlan {
            scene_seconds: 0.0,
            cues: Vec::new(),
            ambience: AmbienceSettings::for_reverb(0.5),
        };
        assert!(empty.jump_to(0).is_none());
        assert!(empty.position_at(0.0).is_none());
    }
}
