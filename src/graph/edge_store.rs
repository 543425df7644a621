//! Dense square weight matrix keyed by slot pairs.

/// Square matrix of optional weights. `None` means no edge.
///
/// Rows and columns grow together, one per node slot, so the matrix is always
/// `len × len`.
#[derive(Debug, Clone)]
pub struct EdgeStore<W> {
    rows: Vec<Vec<Option<W>>>,
}

impl<W: Copy> EdgeStore<W> {
    /// Create an empty `0 × 0` store.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Side length of the matrix.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no slots.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one empty row and column.
    pub(crate) fn grow(&mut self) {
        let n = self.rows.len() + 1;
        for row in &mut self.rows {
            row.push(None);
        }
        self.rows.push(vec![None; n]);
    }

    /// Weight stored at `(src, dst)`. Out-of-range slots read as empty.
    pub fn get(&self, src: usize, dst: usize) -> Option<W> {
        self.rows.get(src).and_then(|row| row.get(dst)).copied().flatten()
    }

    /// Whether `(src, dst)` holds a weight.
    pub fn contains(&self, src: usize, dst: usize) -> bool {
        self.get(src, dst).is_some()
    }

    /// Write a weight. Slots must be in range.
    pub(crate) fn set(&mut self, src: usize, dst: usize, weight: W) {
        self.rows[src][dst] = Some(weight);
    }

    /// Outgoing edges of `src` as `(dst, weight)`, ascending by slot.
    pub fn row(&self, src: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.rows
            .get(src)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(dst, cell)| cell.map(|w| (dst, w)))
    }

    /// Incoming edges of `dst` as `(src, weight)`, ascending by slot.
    pub fn column(&self, dst: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(move |(src, row)| row.get(dst).copied().flatten().map(|w| (src, w)))
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }
}

impl<W: Copy> Default for EdgeStore<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_keeps_matrix_square() {
        let mut store: EdgeStore<i32> = EdgeStore::new();
        for expected in 1..=4 {
            store.grow();
            assert_eq!(store.len(), expected);
            assert!(store.rows.iter().all(|row| row.len() == expected));
        }
        assert_eq!(store.filled(), 0);
    }

    #[test]
    fn test_row_and_column_scan() {
        let mut store = EdgeStore::new();
        for _ in 0..3 {
            store.grow();
        }
        store.set(0, 2, 7);
        store.set(1, 2, 4);
        store.set(0, 1, 1);

        assert_eq!(store.row(0).collect::<Vec<_>>(), vec![(1, 1), (2, 7)]);
        assert_eq!(store.column(2).collect::<Vec<_>>(), vec![(0, 7), (1, 4)]);
        assert_eq!(store.get(2, 0), None);
        assert_eq!(store.get(9, 0), None);
        assert_eq!(store.filled(), 3);
    }

    #[test]
    fn test_existing_cells_survive_growth() {
        let mut store = EdgeStore::new();
        store.grow();
        store.grow();
        store.set(1, 0, 2.5);
        store.grow();
        assert_eq!(store.get(1, 0), Some(2.5));
        assert_eq!(store.get(1, 2), None);
        assert_eq!(store.get(2, 1), None);
    }
}
