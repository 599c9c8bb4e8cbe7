// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Implements the rectangular bounds of a board.
use std::borrow::Borrow;

use crate::{board::Coordinate, config::BOARD_SIZE};

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Number of rows. This cooresponds to `Coordinate::row`.
    rows: usize,
    /// Number of columns. This cooresponds to `Coordinate::col`.
    cols: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Panics if `rows * cols` exceeds `usize::MAX` or if `rows` or `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => {
                if rows == 0 || cols == 0 {
                    panic!("RectDimensions must be nonzero, got {}x{}", rows, cols);
                } else {
                    panic!(
                        "RectDimensions too large: {} * {} > {}",
                        rows,
                        cols,
                        usize::MAX
                    );
                }
            }
        }
    }

    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Returns `None` if `rows * cols` exceeds `usize::MAX` or if `rows` or `cols` is 0.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Get the number of rows of these [`RectDimensions`].
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns of these [`RectDimensions`].
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the number of cells covered by these dimensions.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the given [`Coordinate`] lies within these dimensions.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.cols + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`]. Panics if `idx >= total_size`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            row: idx / self.cols,
            col: idx % self.cols,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.rows && c.col < self.cols {
            Some(coord)
        } else {
            None
        }
    }
}

impl Default for RectDimensions {
    /// Construct the default dimensions, a square board of side [`BOARD_SIZE`].
    fn default() -> Self {
        Self {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
        }
    }
}
