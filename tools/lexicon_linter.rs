/// Lexicon Linter: validates a lexicon override file.
///
/// Usage: lexicon_linter <lexicon.ron | genre_dir>...

use clap::Parser;
use horror_engine::core::lexicon::Lexicon;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "lexicon_linter", version, about = "Check lexicon RON files for problems")]
struct Cli {
    /// Lexicon files, or directories searched recursively for `.ron` files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut files = Vec::new();
    for path in &cli.paths {
        if path.is_dir() {
            collect_ron_files(path, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    println!("Checking {} lexicon file(s)", files.len());

    for path in &files {
        match Lexicon::load_from_ron(path) {
            Ok(lexicon) => {
                for warning in lexicon.lint() {
                    warnings.push(format!("{}: {}", path.display(), warning));
                }
            }
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn collect_ron_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, files);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
}
