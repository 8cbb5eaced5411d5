/// Preview: generate one horror short and print it as a shooting script.
///
/// Usage: preview [--theme <text>] [--intensity <1-5>] [--duration <secs>]
///                [--style <style>] [--seed <n>] [--lexicon <path>] [--json]

use anyhow::Context as _;
use clap::Parser;
use horror_engine::core::generator::StoryGenerator;
use horror_engine::core::playback::{plan_playback, PlaybackPlan};
use horror_engine::core::seed::StorySeed;
use horror_engine::schema::request::{
    HorrorStoryRequest, Style, DEFAULT_DURATION_SECONDS, DEFAULT_INTENSITY, DEFAULT_THEME,
};
use horror_engine::schema::story::HorrorStory;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "preview", version, about = "Generate a horror short and print the script")]
struct Cli {
    /// Signal theme that drives the mystery.
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,

    /// Intensity level, 1 (uneasy) to 5 (relentless).
    #[arg(long, default_value_t = DEFAULT_INTENSITY)]
    intensity: u8,

    /// Target duration in seconds (clamped to 45..=180).
    #[arg(long, default_value_t = DEFAULT_DURATION_SECONDS)]
    duration: f64,

    /// found-footage, supernatural, or psychological.
    #[arg(long, default_value = "supernatural")]
    style: Style,

    /// Fixed seed for a reproducible story. Defaults to one derived from the clock.
    #[arg(long)]
    seed: Option<u32>,

    /// RON lexicon override laid over the built-in tables.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print the story and playback plan as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = StoryGenerator::builder();
    if let Some(ref path) = cli.lexicon {
        builder = builder.lexicon_path(path);
    }
    let generator = builder
        .build()
        .with_context(|| "build story generator")?;

    let request = HorrorStoryRequest::new(&cli.theme, cli.intensity, cli.duration, cli.style);
    let seed = cli
        .seed
        .map(StorySeed::from)
        .unwrap_or_else(|| StorySeed::fresh(&request.theme));

    let story = generator.craft(&request, seed);
    let plan = plan_playback(&story);

    if cli.json {
        let out = serde_json::json!({ "seed": seed.value(), "story": story, "playback": plan });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_script(&request, seed, &story, &plan);
    }
    Ok(())
}

fn print_script(request: &HorrorStoryRequest, seed: StorySeed, story: &HorrorStory, plan: &PlaybackPlan) {
    println!("=== {} ===", story.title);
    println!(
        "Style: {} ({}) | Intensity: {} | Runtime: {:.0}s | Seed: {}",
        request.style,
        request.style.tone(),
        request.intensity,
        story.duration_seconds,
        seed
    );
    let voice = &story.voice_profile;
    println!(
        "Voice: pitch {:.2}, rate {:.2}, reverb {:.2}, timbre {}",
        voice.pitch,
        voice.rate,
        voice.reverb,
        voice.timbre.tag()
    );
    println!("\nHOOK: {}", story.hook);
    println!("\n{}\n", story.synopsis);

    for (scene, cue) in story.scenes.iter().zip(&plan.cues) {
        println!(
            "--- {} [{:.1}s - {:.1}s] {} ---",
            scene.id, cue.start_seconds, cue.end_seconds, scene.heading
        );
        println!("{}", scene.narration);
        println!("  Visual: {}", scene.visual_cue);
        println!("  FX:     {}", scene.soundscape.join(" · "));
        println!("  Camera: {}", scene.screen_direction);
        println!(
            "  Palette: {} / {}\n",
            scene.color_palette.background, scene.color_palette.accent
        );
    }

    println!("Production notes:");
    for note in &story.fx_notes {
        println!("  - {}", note);
    }
    println!(
        "\nAmbience: rumble {:.1} Hz, noise gain {:.3}",
        plan.ambience.rumble_hz, plan.ambience.noise_gain
    );
}
