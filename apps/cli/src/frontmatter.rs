//! YAML frontmatter loading and validation.
//!
//! # Format
//! ```markdown
//! ---
//! id: ospf-timers
//! deck: Networking
//! parser: table
//! hints:
//!   - timers are in seconds
//! ---
//! | ... | table body ... |
//! ```

use serde::Deserialize;
use tablecard_core::{NoteError, NoteMetadata};

/// A note file split into typed frontmatter fields and the markdown body.
#[derive(Debug)]
pub struct Document {
    pub fields: RawFields,
    pub body: String,
}

/// Frontmatter fields as written, before validation. Field aliases keep
/// older note files working (`unique_id`, `note_type`).
#[derive(Debug, Default, Deserialize)]
pub struct RawFields {
    #[serde(alias = "unique_id")]
    pub id: Option<String>,
    pub deck: Option<String>,
    #[serde(alias = "note_type")]
    pub parser: Option<String>,
    pub masker: Option<String>,
    pub mask_row_headers: Option<bool>,
    pub mask_col_headers: Option<bool>,
    pub shuffle_rows: Option<bool>,
    pub shuffle_cols: Option<bool>,
    pub hints: Option<Hints>,
}

/// `hints` accepts a single string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Hints {
    One(String),
    Many(Vec<String>),
}

impl Hints {
    fn into_vec(self) -> Vec<String> {
        match self {
            Hints::One(hint) => vec![hint],
            Hints::Many(hints) => hints,
        }
    }
}

/// Split a note file into frontmatter fields and body.
///
/// A file without a leading `---` block parses as a document with empty
/// fields (validation then reports the missing required ones). Mistyped
/// fields surface as a YAML error, which callers treat as skippable.
pub fn parse(content: &str) -> Result<Document, serde_yaml::Error> {
    let (header, body) = split(content);
    let fields = match header {
        Some(yaml) => serde_yaml::from_str(yaml)?,
        None => RawFields::default(),
    };
    Ok(Document {
        fields,
        body: body.to_string(),
    })
}

/// Validate raw fields into note metadata. `name` is the source file stem,
/// used as the rendered card header.
pub fn to_metadata(fields: RawFields, name: &str) -> Result<NoteMetadata, NoteError> {
    let id = fields.id.ok_or(NoteError::MissingField { field: "id" })?;
    let deck = fields.deck.ok_or(NoteError::MissingField { field: "deck" })?;
    let parser = fields
        .parser
        .ok_or(NoteError::MissingField { field: "parser" })?;

    let metadata = NoteMetadata {
        id,
        name: name.to_string(),
        deck,
        parser,
        masker: fields.masker.unwrap_or_else(|| "vectors".to_string()),
        mask_row_headers: fields.mask_row_headers.unwrap_or(false),
        mask_col_headers: fields.mask_col_headers.unwrap_or(false),
        shuffle_rows: fields.shuffle_rows.unwrap_or(false),
        shuffle_cols: fields.shuffle_cols.unwrap_or(false),
        hints: fields.hints.map(Hints::into_vec).unwrap_or_default(),
    };
    metadata.validate()?;
    Ok(metadata)
}

/// Split off a leading `---` ... `---` block, returning (yaml, body).
fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, content);
    };
    for marker in ["\n---\n", "\n---\r\n"] {
        if let Some(end) = rest.find(marker) {
            return (Some(&rest[..end]), &rest[end + marker.len()..]);
        }
    }
    // Closing fence on the last line without a trailing newline.
    if let Some(yaml) = rest.strip_suffix("\n---") {
        return (Some(yaml), "");
    }
    (None, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOTE: &str = "\
---
id: ospf-timers
deck: Networking
parser: table
mask_row_headers: true
hints:
  - timers are in seconds
---
| a | b |
";

    #[test]
    fn parse_full_document() {
        let doc = parse(NOTE).unwrap();
        let meta = to_metadata(doc.fields, "ospf").unwrap();
        assert_eq!(meta.id, "ospf-timers");
        assert_eq!(meta.deck, "Networking");
        assert_eq!(meta.parser, "table");
        assert_eq!(meta.masker, "vectors");
        assert!(meta.mask_row_headers);
        assert!(!meta.mask_col_headers);
        assert_eq!(meta.hints, vec!["timers are in seconds"]);
        assert_eq!(doc.body, "| a | b |\n");
    }

    #[test]
    fn unique_id_and_note_type_aliases() {
        let doc = parse("---\nunique_id: x\ndeck: d\nnote_type: table\n---\nbody").unwrap();
        let meta = to_metadata(doc.fields, "n").unwrap();
        assert_eq!(meta.id, "x");
        assert_eq!(meta.parser, "table");
    }

    #[test]
    fn hints_accepts_single_string() {
        let doc = parse("---\nid: x\ndeck: d\nparser: table\nhints: just one\n---\n").unwrap();
        let meta = to_metadata(doc.fields, "n").unwrap();
        assert_eq!(meta.hints, vec!["just one"]);
    }

    #[test]
    fn missing_frontmatter_reports_missing_id() {
        let doc = parse("| a | b |\n").unwrap();
        assert_eq!(
            to_metadata(doc.fields, "n"),
            Err(NoteError::MissingField { field: "id" })
        );
    }

    #[test]
    fn missing_deck_is_reported() {
        let doc = parse("---\nid: x\nparser: table\n---\n").unwrap();
        assert_eq!(
            to_metadata(doc.fields, "n"),
            Err(NoteError::MissingField { field: "deck" })
        );
    }

    #[test]
    fn missing_parser_is_reported() {
        let doc = parse("---\nid: x\ndeck: d\n---\n").unwrap();
        assert_eq!(
            to_metadata(doc.fields, "n"),
            Err(NoteError::MissingField { field: "parser" })
        );
    }

    #[test]
    fn mistyped_field_is_a_yaml_error() {
        assert!(parse("---\nid: x\ndeck: d\nparser: table\nshuffle_rows: sideways\n---\n").is_err());
    }

    #[test]
    fn conflicting_shuffle_flags_are_rejected() {
        let doc =
            parse("---\nid: x\ndeck: d\nparser: table\nshuffle_rows: true\nshuffle_cols: true\n---\n")
                .unwrap();
        assert_eq!(
            to_metadata(doc.fields, "n"),
            Err(NoteError::ConflictingShuffleFlags)
        );
    }

    #[test]
    fn body_without_frontmatter_is_preserved() {
        let doc = parse("just a body\n").unwrap();
        assert_eq!(doc.body, "just a body\n");
        assert!(doc.fields.id.is_none());
    }

    #[test]
    fn unclosed_fence_is_treated_as_body() {
        let doc = parse("---\nid: x\nno closing fence").unwrap();
        assert!(doc.fields.id.is_none());
        assert_eq!(doc.body, "---\nid: x\nno closing fence");
    }
}
