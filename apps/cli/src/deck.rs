//! Deck grouping and `.apkg` packaging via genanki.
//!
//! Cards are grouped into one sub-deck per distinct `deck` value, named
//! `"{parent}::{deck}"`. Deck ids are derived from the full name so
//! repeated builds of the same notes produce the same package identity.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Result};
use genanki_rs::{Deck, Field, Model, Note, Package, Template};
use sha2::{Digest, Sha256};
use tablecard_core::{Flashcard, NoteKind};

// Static assets, loaded once at compile time and shared by every model.
const BASE_CSS: &str = include_str!("../assets/base.css");
const TABLE_CSS: &str = include_str!("../assets/table.css");
const SHUFFLE_ROWS_QUESTION_JS: &str = include_str!("../assets/shuffle_rows_question.js");
const SHUFFLE_ROWS_ANSWER_JS: &str = include_str!("../assets/shuffle_rows_answer.js");
const SHUFFLE_COLS_QUESTION_JS: &str = include_str!("../assets/shuffle_cols_question.js");
const SHUFFLE_COLS_ANSWER_JS: &str = include_str!("../assets/shuffle_cols_answer.js");

// Model ids must stay fixed, or re-imports duplicate every note type.
const TABLE_MODEL_ID: i64 = 1607392319;
const TABLE_SHUFFLED_ROWS_MODEL_ID: i64 = 1741545256;
const TABLE_SHUFFLED_COLS_MODEL_ID: i64 = 1741545257;

/// Stable integer id for a fully qualified deck name: the first 8 hex
/// digits of its SHA-256 digest.
pub fn deck_id(name: &str) -> i64 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) as i64
}

/// Group cards by destination deck, ordered by deck name.
pub fn group_by_deck(cards: &[Flashcard]) -> BTreeMap<&str, Vec<&Flashcard>> {
    let mut groups: BTreeMap<&str, Vec<&Flashcard>> = BTreeMap::new();
    for card in cards {
        groups.entry(&card.metadata.deck).or_default().push(card);
    }
    groups
}

fn side(field: &str, script: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(js) = script {
        lines.push("<script>".to_string());
        lines.push(js.to_string());
        lines.push("</script>".to_string());
    }
    lines.extend(
        [
            "<div class=\"card\">",
            "<div class=\"card-content\">",
            "",
            field,
            "",
            "</div>",
            "</div>",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

fn table_model(id: i64, name: &str, question_js: Option<&str>, answer_js: Option<&str>) -> Model {
    let fields = vec![Field::new("Front"), Field::new("Back")];
    let template = Template::new("table")
        .qfmt(&side("{{Front}}", question_js))
        .afmt(&side("{{Back}}", answer_js));
    Model::new(id, name, fields, vec![template]).css(format!("{BASE_CSS}\n{TABLE_CSS}"))
}

/// The genanki model backing one note kind.
pub fn model_for(kind: NoteKind) -> Model {
    match kind {
        NoteKind::Table => table_model(TABLE_MODEL_ID, "table", None, None),
        NoteKind::TableShuffledRows => table_model(
            TABLE_SHUFFLED_ROWS_MODEL_ID,
            "table_shuffled_rows",
            Some(SHUFFLE_ROWS_QUESTION_JS),
            Some(SHUFFLE_ROWS_ANSWER_JS),
        ),
        NoteKind::TableShuffledCols => table_model(
            TABLE_SHUFFLED_COLS_MODEL_ID,
            "table_shuffled_cols",
            Some(SHUFFLE_COLS_QUESTION_JS),
            Some(SHUFFLE_COLS_ANSWER_JS),
        ),
    }
}

/// Assemble every card into one `.apkg` under `parent`, one sub-deck per
/// distinct deck name. Zero decks is fatal; nothing is written in that
/// case.
pub fn build_package(cards: &[Flashcard], parent: &str, output: &str) -> Result<()> {
    let groups = group_by_deck(cards);
    if groups.is_empty() {
        bail!("no decks to build from the provided flashcards");
    }

    let mut decks = Vec::new();
    for (name, cards) in groups {
        let full_name = format!("{parent}::{name}");
        let mut deck = Deck::new(deck_id(&full_name), &full_name, "");
        for card in cards {
            let note = Note::new_with_options(
                model_for(card.metadata.note_kind),
                vec![card.front.as_str(), card.back.as_str()],
                None,
                None,
                Some(card.metadata.id.as_str()),
            )
            .map_err(|e| anyhow!("building note '{}': {e}", card.metadata.id))?;
            deck.add_note(note);
        }
        tracing::info!("deck '{full_name}' ready");
        decks.push(deck);
    }

    let mut package = Package::new(decks, vec![]).map_err(|e| anyhow!("assembling package: {e}"))?;
    package
        .write_to_file(output)
        .map_err(|e| anyhow!("writing package to {output}: {e}"))?;
    Ok(())
}
