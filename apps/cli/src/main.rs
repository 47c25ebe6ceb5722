//! `ankigen` — turn a folder of Markdown table notes into an Anki package.
//!
//! Configuration is a single environment variable, `FLASHCARDS_FOLDER`,
//! naming the folder to scan (a `.env` file works too). Files with
//! broken or incomplete frontmatter are skipped with a warning; an unset
//! folder or an empty build aborts the run.

mod deck;
mod discover;
mod frontmatter;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tablecard_core::{processor, Flashcard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PARENT_DECK: &str = "ankigen";
const OUTPUT_FILE: &str = "ankigen.apkg";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = std::env::var("FLASHCARDS_FOLDER")
        .context("FLASHCARDS_FOLDER environment variable not set")?;

    let cards = process_folder(Path::new(&root));
    tracing::info!("generated {} flashcards", cards.len());
    for card in &cards {
        tracing::debug!("\n{card}");
    }

    deck::build_package(&cards, PARENT_DECK, OUTPUT_FILE)?;
    tracing::info!("package generated: {OUTPUT_FILE}");
    Ok(())
}

/// Generate flashcards for every markdown file under `root`. Per-file
/// failures are logged and skipped; the fold itself never fails.
fn process_folder(root: &Path) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    for path in discover::markdown_files(root) {
        match process_file(&path) {
            Ok(mut file_cards) => {
                tracing::debug!("{}: {} cards", path.display(), file_cards.len());
                cards.append(&mut file_cards);
            }
            Err(err) => tracing::warn!("skipping '{}': {err:#}", path.display()),
        }
    }
    cards
}

fn process_file(path: &Path) -> Result<Vec<Flashcard>> {
    let content = fs::read_to_string(path).context("reading file")?;
    let document = frontmatter::parse(&content).context("parsing frontmatter")?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = frontmatter::to_metadata(document.fields, &name)?;

    Ok(processor::process(&document.body, &metadata)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GOOD_NOTE: &str = "\
---
id: timers
deck: Networking
parser: table
mask_row_headers: true
mask_col_headers: true
---
|       | EIGRP | OSPF |
|-------|-------|------|
| Hello | 5     | 10   |
| Dead  | 3     | 8    |
";

    #[test]
    fn folder_with_one_good_note_yields_cards() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("timers.md"), GOOD_NOTE).unwrap();

        let cards = process_folder(dir.path());
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].metadata.id, "timers-0");
        assert_eq!(cards[0].metadata.deck, "Networking");
        // Header comes from the file stem.
        assert!(cards[0].front.contains("<span class=\"card_header\">timers</span>"));
    }

    #[test]
    fn broken_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.md"), GOOD_NOTE).unwrap();
        fs::write(dir.path().join("no_id.md"), "---\ndeck: d\nparser: table\n---\n| a | b |\n")
            .unwrap();
        fs::write(
            dir.path().join("bad_type.md"),
            "---\nid: x\ndeck: d\nparser: table\nshuffle_rows: sideways\n---\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("unknown_parser.md"),
            "---\nid: y\ndeck: d\nparser: csv\n---\n| a | b |\n",
        )
        .unwrap();

        let cards = process_folder(dir.path());
        assert_eq!(cards.len(), 6);
        assert!(cards.iter().all(|c| c.metadata.id.starts_with("timers-")));
    }

    #[test]
    fn conflicting_shuffle_flags_skip_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("both.md"),
            "---\nid: x\ndeck: d\nparser: table\nshuffle_rows: true\nshuffle_cols: true\n---\n| a | b |\n",
        )
        .unwrap();
        assert!(process_folder(dir.path()).is_empty());
    }
}
