/// Lexicon loading integration tests against the shipped genre data.

use horror_engine::core::generator::StoryGenerator;
use horror_engine::core::lexicon::Lexicon;
use horror_engine::core::seed::StorySeed;
use horror_engine::schema::request::{HorrorStoryRequest, Style};

#[test]
fn shipped_horror_lexicon_matches_builtin() {
    let path = std::path::Path::new("genre_data/horror/lexicon.ron");
    let lexicon = Lexicon::load_from_ron(path).unwrap();
    assert_eq!(lexicon, Lexicon::builtin());

    let contents = std::fs::read_to_string(path).unwrap();
    let overrides = Lexicon::parse_override(&contents).unwrap();
    assert_eq!(overrides.table_names().len(), 11, "every table should be spelled out");
}

#[test]
fn shipped_lexicons_lint_clean() {
    for path_str in ["genre_data/horror/lexicon.ron", "genre_data/coastal/lexicon.ron"] {
        let lexicon = Lexicon::load_from_ron(std::path::Path::new(path_str)).unwrap();
        let warnings = lexicon.lint();
        assert!(warnings.is_empty(), "{}: {:?}", path_str, warnings);
    }
}

#[test]
fn coastal_override_changes_cast_and_places() {
    let generator = StoryGenerator::builder()
        .lexicon_path("genre_data/coastal/lexicon.ron")
        .build()
        .unwrap();
    let coastal = generator.lexicon();

    assert_eq!(coastal.protagonists.len(), 4);
    assert_eq!(coastal.settings.len(), 6);
    assert_eq!(coastal.adjectives, Lexicon::builtin().adjectives);

    let story = generator.craft(
        &HorrorStoryRequest::new("drowned bell", 2, 75.0, Style::Supernatural),
        StorySeed(314),
    );
    assert!(coastal
        .protagonists
        .iter()
        .any(|p| story.hook.starts_with(&format!("A {} chases", p))));
    assert!(coastal
        .title_openers
        .iter()
        .any(|opener| story.title.starts_with(opener.as_str())));
}

#[test]
fn later_override_paths_win() {
    let generator = StoryGenerator::builder()
        .lexicon_path("genre_data/coastal/lexicon.ron")
        .lexicon_path("genre_data/horror/lexicon.ron")
        .build()
        .unwrap();
    assert_eq!(generator.lexicon(), &Lexicon::builtin());
}

#[test]
fn unknown_table_name_is_rejected() {
    assert!(Lexicon::parse_ron(r#"(adjectivs: ["typo"])"#).is_err());
}
