//! Core types shared across the flashcard pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NoteError, Result};

/// How a single table cell is rendered on the front of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    Normal,
    Cloze,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self::Normal
    }
}

/// Per-cell masking tag plus optional free-form metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskInfo {
    pub format: CellFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl MaskInfo {
    pub fn normal() -> Self {
        Self {
            format: CellFormat::Normal,
            meta: None,
        }
    }

    pub fn cloze() -> Self {
        Self {
            format: CellFormat::Cloze,
            meta: None,
        }
    }

    pub fn is_cloze(&self) -> bool {
        self.format == CellFormat::Cloze
    }
}

/// Which note template the packaging step should attach to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Static table, rendered as-is.
    Table,
    /// Rows below the header are reordered at display time.
    TableShuffledRows,
    /// Columns right of the label column are reordered at display time.
    TableShuffledCols,
}

impl Default for NoteKind {
    fn default() -> Self {
        Self::Table
    }
}

/// Metadata for one source note file, shared read-only by every flashcard
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Stable identity prefix; card ids are `"{id}-{k}"`.
    pub id: String,
    /// Display name, rendered as the card header (usually the file stem).
    pub name: String,
    /// Destination sub-deck name.
    pub deck: String,
    /// Table extraction strategy discriminator.
    pub parser: String,
    /// Mask generation strategy discriminator.
    pub masker: String,
    /// Whether the header row (row 0) may itself be a row-mask target.
    pub mask_row_headers: bool,
    /// Whether the label column (column 0) may itself be a column-mask target.
    pub mask_col_headers: bool,
    pub shuffle_rows: bool,
    pub shuffle_cols: bool,
    /// Hint lines appended below the table on both card sides.
    pub hints: Vec<String>,
}

impl NoteMetadata {
    /// Reject flag combinations that cannot be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.shuffle_rows && self.shuffle_cols {
            return Err(NoteError::ConflictingShuffleFlags);
        }
        Ok(())
    }

    /// The note template implied by the shuffle flags.
    pub fn note_kind(&self) -> NoteKind {
        if self.shuffle_cols {
            NoteKind::TableShuffledCols
        } else if self.shuffle_rows {
            NoteKind::TableShuffledRows
        } else {
            NoteKind::Table
        }
    }
}

/// Identity and placement data carried by one finished flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardMetadata {
    pub id: String,
    pub deck: String,
    pub note_kind: NoteKind,
}

/// One generated flashcard. Front and back are complete HTML fragments;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub metadata: FlashcardMetadata,
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.metadata.id)?;
        writeln!(f, "Deck: {}", self.metadata.deck)?;
        writeln!(f, "Front:\n{}", self.front)?;
        writeln!(f, "Back:\n{}", self.back)?;
        write!(f, "{}", "-".repeat(80))
    }
}
