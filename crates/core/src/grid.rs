//! Grid module - the ring of depth-slices
//!
//! Rows are stored in a `VecDeque` so recycling (detach the farthest row,
//! reinsert it as the nearest) moves a row handle instead of shifting every row.
//! Index 0 is the nearest row, the back of the ring is the farthest.

use std::collections::VecDeque;

use crate::types::GridPoint;

/// Rows of grid points, nearest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: VecDeque<Box<[GridPoint]>>,
    columns: usize,
}

impl Grid {
    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            rows: VecDeque::with_capacity(rows),
            columns,
        }
    }

    /// Append a row at the far end (construction only).
    pub(crate) fn push_far(&mut self, row: Box<[GridPoint]>) {
        debug_assert_eq!(row.len(), self.columns);
        self.rows.push_back(row);
    }

    /// Number of depth-slices.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Points per depth-slice.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[GridPoint]> {
        self.rows.get(index).map(|r| &r[..])
    }

    /// Rows from nearest to farthest.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[GridPoint]> + DoubleEndedIterator + '_ {
        self.rows.iter().map(|r| &r[..])
    }

    /// Every point, row-major.
    pub fn points(&self) -> impl Iterator<Item = &GridPoint> + '_ {
        self.rows.iter().flat_map(|r| r.iter())
    }

    /// Depth of a row (all points of a row share it).
    pub fn row_depth(&self, index: usize) -> Option<f64> {
        self.rows.get(index).and_then(|r| r.first()).map(|p| p.z)
    }

    pub(crate) fn shift_depth(&mut self, delta_z: f64) {
        for row in self.rows.iter_mut() {
            for point in row.iter_mut() {
                point.z += delta_z;
            }
        }
    }

    /// True when the farthest row has any point beyond `threshold`.
    pub(crate) fn far_row_beyond(&self, threshold: f64) -> bool {
        self.rows
            .back()
            .is_some_and(|row| row.iter().any(|p| p.z < threshold))
    }

    /// Move the farthest row to the near end, letting `reset` rewrite each point.
    pub(crate) fn recycle_far(&mut self, mut reset: impl FnMut(usize, &mut GridPoint)) {
        let Some(mut row) = self.rows.pop_back() else {
            return;
        };
        for (column, point) in row.iter_mut().enumerate() {
            reset(column, point);
        }
        self.rows.push_front(row);
    }
}
