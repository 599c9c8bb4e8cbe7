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
use std::cmp;

use crate::board::Coordinate;

/// Direction a ship runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// All decks share a row.
    Horizontal,
    /// All decks share a column.
    Vertical,
}

/// A straight run of cells between two endpoints, inclusive.
///
/// Endpoints are stored in ascending order, so a line built from `(2, 4)` to `(2, 2)` is
/// the same line as one built from `(2, 2)` to `(2, 4)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
}

impl Line {
    /// Construct the line between `a` and `b`. Returns `None` if they share neither a
    /// row nor a column.
    pub fn new(a: Coordinate, b: Coordinate) -> Option<Self> {
        if a.row != b.row && a.col != b.col {
            return None;
        }
        Some(Self {
            start: cmp::min(a, b),
            end: cmp::max(a, b),
        })
    }

    /// The lower endpoint.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The upper endpoint.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// A single cell counts as horizontal.
    pub fn orientation(&self) -> Orientation {
        if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        match self.orientation() {
            Orientation::Horizontal => (self.end.col - self.start.col).saturating_add(1),
            Orientation::Vertical => (self.end.row - self.start.row).saturating_add(1),
        }
    }

    /// A line always covers at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the cells of the line from `start` to `end`.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = self.start;
        let orientation = self.orientation();
        (0..self.len()).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(row, col + i),
            Orientation::Vertical => Coordinate::new(row + i, col),
        })
    }
}
