/// One eighth of a symmetric core map: ragged rows of cell type ids, 0-based
/// offsets from the center into the southeast octant. The center pin is
/// carried separately and is never part of the eighth map.
pub type EighthMap = Vec<Vec<i32>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("eighth map has no rows")]
    EmptyEighthMap,
}

/// Fully expanded square core map of odd size `2 * radius + 1`, immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMap {
    cells: Vec<Vec<i32>>,
}

impl FullMap {
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Index of the center row/column.
    pub fn radius(&self) -> usize {
        self.cells.len() / 2
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn center_pin(&self) -> i32 {
        let r = self.radius();
        self.cells[r][r]
    }
}

/// Expand a 1/8 core map plus its center pin into the full core map.
///
/// The construction order is part of the contract: center pin, octant
/// placement, diagonal pass restricted to the first `n_rows` offsets, then
/// unconditional left-right and top-bottom mirrors over the whole grid.
/// Later passes may overwrite earlier ones; reordering them changes the
/// output.
pub fn expand_eighth_to_full(eighth: &[Vec<i32>], center_pin: i32) -> Result<FullMap, ExpandError> {
    if eighth.is_empty() {
        return Err(ExpandError::EmptyEighthMap);
    }

    let n_rows = eighth.len();
    let max_cols = eighth.iter().map(|r| r.len()).max().unwrap_or(0);
    let radius = n_rows.max(max_cols);
    let size = 2 * radius + 1;

    let mut cells = vec![vec![0i32; size]; size];

    // The center pin goes in first. If the eighth map's first row reaches
    // offset (0, 0) the octant placement below reclaims the center; that
    // overwrite order is part of the contract.
    cells[radius][radius] = center_pin;

    // Southeast octant, offsets measured from the center cell. Offsets no
    // eighth row/column reaches stay at the neutral value 0; ragged inputs
    // produce partially filled quadrants by design.
    for (i, row) in eighth.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            cells[radius + i][radius + j] = v;
        }
    }

    // Diagonal symmetry, restricted to the first `n_rows` offsets; the lower
    // triangle wins. On ragged inputs this can leave the quadrant asymmetric
    // beyond that region; the observed behavior is kept as-is rather than
    // fixed.
    for i in 0..n_rows {
        for j in (i + 1)..n_rows {
            cells[radius + i][radius + j] = cells[radius + j][radius + i];
        }
    }

    // Left-right mirror over the whole grid.
    for i in 0..size {
        for j in 0..radius {
            cells[i][j] = cells[i][size - 1 - j];
        }
    }

    // Top-bottom mirror over the whole grid.
    for i in 0..radius {
        cells[i] = cells[size - 1 - i].clone();
    }

    Ok(FullMap { cells })
}
