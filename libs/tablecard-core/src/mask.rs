//! Mask generation over table grids.
//!
//! A mask is a grid of [`MaskInfo`] tags with the same dimensions as the
//! table it targets. The generator emits one mask per row and one per
//! column, in a fixed order, so card ids stay stable across rebuilds.

use crate::grid::TableGrid;
use crate::types::MaskInfo;

/// A per-cell tag grid matching one table's dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Vec<MaskInfo>>,
}

impl Mask {
    pub fn new(cells: Vec<Vec<MaskInfo>>) -> Self {
        Self { cells }
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn info(&self, row: usize, col: usize) -> &MaskInfo {
        &self.cells[row][col]
    }

    pub fn is_cloze(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_cloze()
    }
}

/// Flags controlling whether the header row/column may themselves be
/// targeted by a whole mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskOptions {
    /// Allow row 0 (the header row) as a row-mask target.
    pub mask_row_headers: bool,
    /// Allow column 0 (the label column) as a column-mask target.
    pub mask_col_headers: bool,
}

/// Mask generation strategy, keyed by the note's `masker` field.
pub trait MaskGenerator {
    /// Produce the ordered mask sequence for one grid. Deterministic and
    /// side-effect-free; each mask matches the grid's dimensions.
    fn generate(&self, grid: &TableGrid, opts: MaskOptions) -> Vec<Mask>;
}

/// Emits one mask per row (ascending), then one per column (ascending).
///
/// A row mask `r` tags `(r, j)` for all `j != 0` as cloze; column 0 is a
/// label column and stays visible. A column mask `c` tags `(i, c)` for all
/// `i != 0`; row 0 is a header row and stays visible. With both options
/// enabled an R×C grid yields exactly R + C masks.
pub struct RowColumnMaskGenerator;

impl MaskGenerator for RowColumnMaskGenerator {
    fn generate(&self, grid: &TableGrid, opts: MaskOptions) -> Vec<Mask> {
        let num_rows = grid.num_rows();
        let num_cols = grid.num_cols();
        let mut masks = Vec::new();

        for r in 0..num_rows {
            if r == 0 && !opts.mask_row_headers {
                continue;
            }
            masks.push(build_mask(num_rows, num_cols, |i, j| i == r && j != 0));
        }

        for c in 0..num_cols {
            if c == 0 && !opts.mask_col_headers {
                continue;
            }
            masks.push(build_mask(num_rows, num_cols, |i, j| j == c && i != 0));
        }

        masks
    }
}

fn build_mask(num_rows: usize, num_cols: usize, cloze: impl Fn(usize, usize) -> bool) -> Mask {
    let cells = (0..num_rows)
        .map(|i| {
            (0..num_cols)
                .map(|j| {
                    if cloze(i, j) {
                        MaskInfo::cloze()
                    } else {
                        MaskInfo::normal()
                    }
                })
                .collect()
        })
        .collect();
    Mask::new(cells)
}

/// Look up a mask generator by its discriminator.
pub fn get_mask_generator(name: &str) -> Option<Box<dyn MaskGenerator>> {
    match name {
        "vectors" => Some(Box::new(RowColumnMaskGenerator)),
        _ => None,
    }
}
