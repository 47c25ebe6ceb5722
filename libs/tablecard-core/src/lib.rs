//! Core library turning Markdown tables into masked flashcards.
//!
//! Provides:
//! - Pipe-table extraction into normalized grids
//! - Row/column mask generation with header gating
//! - Pure HTML styling (table classes, cloze blanks, header, hints)
//! - Flashcard assembly with stable per-card ids
//!
//! File discovery, frontmatter loading and deck packaging live in the CLI
//! application; nothing here touches the filesystem.

pub mod builder;
pub mod error;
pub mod grid;
pub mod mask;
pub mod processor;
pub mod styler;
pub mod types;

pub use error::{NoteError, Result};
pub use grid::{get_extractor, PipeTableExtractor, TableExtractor, TableGrid};
pub use mask::{get_mask_generator, Mask, MaskGenerator, MaskOptions, RowColumnMaskGenerator};
pub use processor::process;
pub use types::{CellFormat, Flashcard, FlashcardMetadata, MaskInfo, NoteKind, NoteMetadata};
