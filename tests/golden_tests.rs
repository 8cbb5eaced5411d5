//! Known-output tests: complete stories for fixed seeds, checked against
//! recorded fixtures under `tests/fixtures/`.

use horror_engine::core::generator::craft_horror_story;
use horror_engine::core::seed::StorySeed;
use horror_engine::schema::request::{HorrorStoryRequest, Style};
use horror_engine::schema::story::HorrorStory;

fn load_fixture(name: &str) -> HorrorStory {
    let path = format!("tests/fixtures/{}", name);
    let contents = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn assert_story_matches(actual: &HorrorStory, expected: &HorrorStory) {
    assert_eq!(actual.title, expected.title);
    assert_eq!(actual.hook, expected.hook);
    assert_eq!(actual.synopsis, expected.synopsis);
    assert_eq!(actual.duration_seconds, expected.duration_seconds);
    assert_eq!(actual.fx_notes, expected.fx_notes);

    assert_eq!(actual.scenes.len(), expected.scenes.len());
    for (got, want) in actual.scenes.iter().zip(&expected.scenes) {
        assert_eq!(got, want, "scene {} differs", want.id);
    }

    // Fixture floats carry up to 17 significant digits.
    let (got, want) = (&actual.voice_profile, &expected.voice_profile);
    assert!((got.pitch - want.pitch).abs() < 1e-12, "pitch {} vs {}", got.pitch, want.pitch);
    assert!((got.rate - want.rate).abs() < 1e-12, "rate {} vs {}", got.rate, want.rate);
    assert!((got.reverb - want.reverb).abs() < 1e-12, "reverb {} vs {}", got.reverb, want.reverb);
    assert_eq!(got.timbre, want.timbre);
}

#[test]
fn lighthouse_psychological_seed_12345() {
    let story = craft_horror_story(
        &HorrorStoryRequest::new("lighthouse", 2, 130.0, Style::Psychological),
        StorySeed(12345),
    );
    assert_story_matches(&story, &load_fixture("lighthouse_seed_12345.json"));
}

#[test]
fn found_footage_at_largest_seed() {
    let story = craft_horror_story(
        &HorrorStoryRequest::new("forbidden signal", 5, 45.0, Style::FoundFootage),
        StorySeed(u32::MAX),
    );
    assert_story_matches(&story, &load_fixture("forbidden_signal_seed_max.json"));
}

#[test]
fn supernatural_seed_zero() {
    let story = craft_horror_story(
        &HorrorStoryRequest::new("drowned bell", 3, 75.0, Style::Supernatural),
        StorySeed(0),
    );
    assert_story_matches(&story, &load_fixture("drowned_bell_seed_0.json"));
}

#[test]
fn largest_seed_spot_checks() {
    // Offsets like `seed * 23 + 97` overflow 32 bits at this seed.
    let story = craft_horror_story(
        &HorrorStoryRequest::new("forbidden signal", 5, 45.0, Style::FoundFootage),
        StorySeed(u32::MAX),
    );
    assert_eq!(story.title, "Archive of Teeth: phantasmal Litany");
    assert_eq!(
        story.scenes[2].screen_direction,
        "Handheld pan across flickering monitors with static interference"
    );
    assert_eq!(
        story.fx_notes[2],
        "Accent jump-scares with metal cables thrumming filtered through cavernous reverb"
    );
}
