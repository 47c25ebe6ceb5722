//! The per-note pipeline: extract tables, generate masks, build cards.

use crate::builder;
use crate::error::{NoteError, Result};
use crate::grid;
use crate::mask::{self, MaskOptions};
use crate::types::{Flashcard, NoteMetadata};

/// Turn one note body into flashcards.
///
/// Strategy lookups and flag validation can fail (all skippable at the
/// file level); a body with no tables simply yields no cards.
pub fn process(content: &str, metadata: &NoteMetadata) -> Result<Vec<Flashcard>> {
    metadata.validate()?;

    let extractor = grid::get_extractor(&metadata.parser)
        .ok_or_else(|| NoteError::UnknownParser(metadata.parser.clone()))?;
    let generator = mask::get_mask_generator(&metadata.masker)
        .ok_or_else(|| NoteError::UnknownMasker(metadata.masker.clone()))?;

    let opts = MaskOptions {
        mask_row_headers: metadata.mask_row_headers,
        mask_col_headers: metadata.mask_col_headers,
    };

    let mut pairs = Vec::new();
    for table in extractor.extract(content) {
        for m in generator.generate(&table, opts) {
            pairs.push(builder::apply_mask(&table, &m));
        }
    }
    Ok(builder::build(&pairs, metadata))
}
