//! Normalized table grids and Markdown pipe-table extraction.
//!
//! # Format
//! ```markdown
//! |       | EIGRP | OSPF |
//! |-------|-------|------|
//! | Hello | 5     | 10   |
//! | Dead  | 15    | 40   |
//! ```

/// A rectangular 2-D grid of cell strings.
///
/// Every row holds exactly `num_cols` cells (the longest raw row wins;
/// shorter rows are padded with empty strings). Row 0 and column 0 carry
/// header semantics by convention only. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
    num_cols: usize,
}

impl TableGrid {
    /// Build a grid from raw rows, padding each row to the widest length.
    pub fn from_rows(raw: Vec<Vec<String>>) -> Self {
        let num_cols = raw.iter().map(Vec::len).max().unwrap_or(0);
        let rows = raw
            .into_iter()
            .map(|mut row| {
                row.resize(num_cols, String::new());
                row
            })
            .collect();
        Self { rows, num_cols }
    }

    /// Parse one Markdown pipe-table block into a grid.
    ///
    /// Lines not starting with `|` are ignored, as are all-empty rows and
    /// alignment/separator rows (cells made only of `-` and `:`). Malformed
    /// input degrades to fewer rows; it never fails.
    pub fn parse(content: &str) -> Self {
        let mut raw: Vec<Vec<String>> = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if !line.starts_with('|') {
                continue;
            }
            let line = line.strip_prefix('|').unwrap_or(line);
            let line = line.strip_suffix('|').unwrap_or(line);
            let cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();

            if cells.iter().all(|c| c.is_empty()) {
                continue;
            }
            if is_separator_row(&cells) {
                continue;
            }
            raw.push(cells);
        }
        Self::from_rows(raw)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at `(row, col)`. Panics on out-of-range indices, which the
    /// rectangular invariant makes unreachable for in-bounds masks.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// True for alignment rows like `|---|:--:|` once split into cells.
fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .filter(|c| !c.is_empty())
        .all(|c| c.chars().all(|ch| ch == '-' || ch == ':'))
}

/// Table extraction strategy, keyed by the note's `parser` field.
pub trait TableExtractor {
    /// Extract every table found in the note body, in encounter order.
    fn extract(&self, content: &str) -> Vec<TableGrid>;
}

/// Extracts GFM pipe tables: each contiguous run of `|`-prefixed lines
/// becomes one grid; grids with no data rows are dropped.
pub struct PipeTableExtractor;

impl TableExtractor for PipeTableExtractor {
    fn extract(&self, content: &str) -> Vec<TableGrid> {
        let mut tables = Vec::new();
        let mut block: Vec<&str> = Vec::new();

        for line in content.lines().chain(std::iter::once("")) {
            if line.trim_start().starts_with('|') {
                block.push(line);
                continue;
            }
            if !block.is_empty() {
                let grid = TableGrid::parse(&block.join("\n"));
                if !grid.is_empty() {
                    tables.push(grid);
                }
                block.clear();
            }
        }
        tables
    }
}

/// Look up an extractor by its discriminator.
pub fn get_extractor(name: &str) -> Option<Box<dyn TableExtractor>> {
    match name {
        "table" => Some(Box::new(PipeTableExtractor)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_basic_table() {
        let input = "\
|       | EIGRP | OSPF |
|-------|-------|------|
| Hello | 5     | 10   |
| Dead  | 15    | 40   |";
        let grid = TableGrid::parse(input);
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_cols(), 3);
        assert_eq!(grid.cell(0, 1), "EIGRP");
        assert_eq!(grid.cell(2, 2), "40");
        assert_eq!(grid.cell(0, 0), "");
    }

    #[test]
    fn ragged_rows_are_padded() {
        let grid = TableGrid::parse("| a | b | c |\n| d |");
        assert_eq!(grid.num_cols(), 3);
        assert_eq!(grid.cell(1, 0), "d");
        assert_eq!(grid.cell(1, 2), "");
    }

    #[test]
    fn separator_only_input_yields_empty_grid() {
        let grid = TableGrid::parse("|---|---|\n|:--:|---|");
        assert!(grid.is_empty());
        assert_eq!(grid.num_cols(), 0);
    }

    #[test]
    fn empty_input_yields_empty_grid() {
        assert!(TableGrid::parse("").is_empty());
    }

    #[test]
    fn non_pipe_lines_are_ignored() {
        let input = "Some prose.\n| a | b |\n|---|---|\n| c | d |\nTrailing prose.";
        let grid = TableGrid::parse(input);
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.cell(1, 1), "d");
    }

    #[test]
    fn all_empty_rows_are_dropped() {
        let grid = TableGrid::parse("|  |  |\n| a | b |");
        assert_eq!(grid.num_rows(), 1);
    }

    #[test]
    fn extractor_splits_on_blank_lines() {
        let input = "\
| a | b |
|---|---|
| 1 | 2 |

prose between tables

| x | y |
|---|---|
| 3 | 4 |";
        let tables = PipeTableExtractor.extract(input);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].cell(1, 0), "1");
        assert_eq!(tables[1].cell(0, 1), "y");
    }

    #[test]
    fn extractor_drops_separator_only_blocks() {
        let tables = PipeTableExtractor.extract("|---|---|");
        assert!(tables.is_empty());
    }

    #[test]
    fn unknown_extractor_name_is_none() {
        assert!(get_extractor("table").is_some());
        assert!(get_extractor("csv").is_none());
    }
}
