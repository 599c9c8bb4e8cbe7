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
//! Linear storage for the occupant of every cell on the board.

use std::ops::Index;

use crate::board::{Coordinate, Occupant, RectDimensions};

/// One [`Occupant`] per cell, laid out row-major.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: RectDimensions,
    /// Cells that make up this board.
    cells: Box<[Occupant]>,
}

impl Grid {
    /// Build a grid where every cell is open water.
    pub(super) fn new(dim: RectDimensions) -> Self {
        let cells = vec![Occupant::Water; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the occupant at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<Occupant> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the occupant at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Occupant> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<&Coordinate> for Grid {
    type Output = Occupant;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        let idx = self.dim.try_linearize(coord).expect("coordinate out of bounds");
        &self.cells[idx]
    }
}
