//! Flashcard assembly: one card per mask, front blanked and back revealed.

use crate::grid::TableGrid;
use crate::mask::Mask;
use crate::styler;
use crate::types::{Flashcard, FlashcardMetadata, NoteMetadata};

/// The front/back grid variants derived from one mask.
///
/// Cloze cells are blanked on the front and highlighted on the back; every
/// other cell passes through verbatim, so non-targeted cells render
/// byte-identically on both sides.
pub fn apply_mask(grid: &TableGrid, mask: &Mask) -> (TableGrid, TableGrid) {
    let mut front_rows = Vec::with_capacity(grid.num_rows());
    let mut back_rows = Vec::with_capacity(grid.num_rows());

    for i in 0..grid.num_rows() {
        let mut front_row = Vec::with_capacity(grid.num_cols());
        let mut back_row = Vec::with_capacity(grid.num_cols());
        for j in 0..grid.num_cols() {
            let text = grid.cell(i, j);
            if mask.is_cloze(i, j) {
                front_row.push(styler::masked(text));
                back_row.push(styler::unmasked(text));
            } else {
                front_row.push(text.to_string());
                back_row.push(text.to_string());
            }
        }
        front_rows.push(front_row);
        back_rows.push(back_row);
    }

    (
        TableGrid::from_rows(front_rows),
        TableGrid::from_rows(back_rows),
    )
}

/// Build one flashcard per grid pair.
///
/// Card `k` gets id `"{metadata.id}-{k}"` (0-based over the whole note, so
/// rebuilds of identical input produce identical guids). An empty pair
/// list builds no cards; the builder never fails.
pub fn build(pairs: &[(TableGrid, TableGrid)], metadata: &NoteMetadata) -> Vec<Flashcard> {
    let note_kind = metadata.note_kind();
    pairs
        .iter()
        .enumerate()
        .map(|(k, (front_grid, back_grid))| {
            let front = decorate(front_grid, metadata);
            let back = decorate(back_grid, metadata);
            Flashcard {
                front,
                back,
                metadata: FlashcardMetadata {
                    id: format!("{}-{}", metadata.id, k),
                    deck: metadata.deck.clone(),
                    note_kind,
                },
            }
        })
        .collect()
}

fn decorate(grid: &TableGrid, metadata: &NoteMetadata) -> String {
    let html = styler::render_table(grid);
    let html = styler::add_card_header(&metadata.name, &html);
    styler::add_hints(&metadata.hints, &html)
}
