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
use std::{convert::TryFrom, fmt, num::IntErrorKind, str::FromStr};

use crate::board::ParseCoordinateError;

/// The coordinates of a cell on the board. Rows count down from the top, columns count
/// right from the left edge, both starting at zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl TryFrom<(i64, i64)> for Coordinate {
    type Error = ParseCoordinateError;

    /// Convert a signed `(row, col)` pair, rejecting negative components.
    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        let row = usize::try_from(row).map_err(|_| ParseCoordinateError::Negative(row))?;
        let col = usize::try_from(col).map_err(|_| ParseCoordinateError::Negative(col))?;
        Ok(Self::new(row, col))
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse `"row,col"`, `"row col"` or `"(row, col)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_signed_pair(s)?)
    }
}

/// Split text into a signed `(row, col)` pair. Negative values are kept so that the
/// caller can tell an out-of-range location apart from text that is not a location.
pub(crate) fn parse_signed_pair(s: &str) -> Result<(i64, i64), ParseCoordinateError> {
    let s = s.trim();
    let s = s
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(s);
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    match parts[..] {
        [row, col] => Ok((parse_component(row)?, parse_component(col)?)),
        _ => Err(ParseCoordinateError::WrongArity(parts.len())),
    }
}

fn parse_component(part: &str) -> Result<i64, ParseCoordinateError> {
    part.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseCoordinateError::TooLarge(part.to_owned())
        }
        _ => ParseCoordinateError::InvalidComponent(part.to_owned()),
    })
}
