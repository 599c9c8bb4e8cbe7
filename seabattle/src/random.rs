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
//! Random fleet layout.
use log::debug;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::{
    board::{Board, Coordinate, PlaceError, RectDimensions},
    config::STANDARD_FLEET,
    ships::Orientation,
};

/// Number of random positions tried for one ship before starting the layout over.
const PLACEMENT_ATTEMPTS: usize = 100;

/// Number of times the whole layout is restarted before giving up.
const LAYOUT_ATTEMPTS: usize = 20;

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Error returned when a random layout could not be produced.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum LayoutError {
    /// A ship of zero decks was requested.
    #[error("ships must have at least one deck")]
    ZeroLength,
    /// A ship is longer than both sides of the board.
    #[error("a ship of {len} decks does not fit on a {rows}x{cols} board")]
    TooLong { len: usize, rows: usize, cols: usize },
    /// Every attempt ended with a ship that had nowhere left to go.
    #[error("no room for all ships after {0} attempts")]
    NoRoom(usize),
    /// The generated layout was rejected by the board.
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// Choose random, non-overlapping `(start, end)` pairs for ships of the given lengths.
/// Pairs are returned in the same order as `lengths`.
pub fn random_layout<R: Rng + ?Sized>(
    rng: &mut R,
    dim: &RectDimensions,
    lengths: &[usize],
) -> Result<Vec<(Coordinate, Coordinate)>, LayoutError> {
    for &len in lengths {
        if len == 0 {
            return Err(LayoutError::ZeroLength);
        }
        if len > dim.rows() && len > dim.cols() {
            return Err(LayoutError::TooLong {
                len,
                rows: dim.rows(),
                cols: dim.cols(),
            });
        }
    }
    for attempt in 1..=LAYOUT_ATTEMPTS {
        if let Some(layout) = try_layout(rng, dim, lengths) {
            debug!("laid out {} ships on attempt {}", layout.len(), attempt);
            return Ok(layout);
        }
    }
    Err(LayoutError::NoRoom(LAYOUT_ATTEMPTS))
}

/// Build a standard board with the [`STANDARD_FLEET`] placed at random.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, LayoutError> {
    let dim = RectDimensions::default();
    let layout = random_layout(rng, &dim, &STANDARD_FLEET)?;
    Ok(Board::with_dimensions(dim, layout)?)
}

/// One pass at placing every ship. Returns `None` if some ship could not be fitted.
fn try_layout<R: Rng + ?Sized>(
    rng: &mut R,
    dim: &RectDimensions,
    lengths: &[usize],
) -> Option<Vec<(Coordinate, Coordinate)>> {
    let mut occupied = vec![false; dim.total_size()];
    let mut layout = Vec::with_capacity(lengths.len());
    for &len in lengths {
        let (start, end) = (0..PLACEMENT_ATTEMPTS)
            .filter_map(|_| random_line(rng, dim, len))
            .find(|&(start, end)| is_free(dim, &occupied, start, end))?;
        for coord in cells(start, end) {
            if let Some(idx) = dim.try_linearize(&coord) {
                occupied[idx] = true;
            }
        }
        layout.push((start, end));
    }
    Some(layout)
}

/// Pick a random orientation and start for a ship of `len` decks that fits within the
/// board. Returns `None` if the chosen orientation cannot hold the ship.
fn random_line<R: Rng + ?Sized>(
    rng: &mut R,
    dim: &RectDimensions,
    len: usize,
) -> Option<(Coordinate, Coordinate)> {
    let orientation: Orientation = rng.gen();
    let (row_span, col_span) = match orientation {
        Orientation::Horizontal => (1, len),
        Orientation::Vertical => (len, 1),
    };
    if row_span > dim.rows() || col_span > dim.cols() {
        return None;
    }
    let row = rng.gen_range(0, dim.rows() - row_span + 1);
    let col = rng.gen_range(0, dim.cols() - col_span + 1);
    Some((
        Coordinate::new(row, col),
        Coordinate::new(row + row_span - 1, col + col_span - 1),
    ))
}

fn cells(start: Coordinate, end: Coordinate) -> impl Iterator<Item = Coordinate> {
    (start.row..=end.row)
        .flat_map(move |row| (start.col..=end.col).map(move |col| Coordinate::new(row, col)))
}

fn is_free(dim: &RectDimensions, occupied: &[bool], start: Coordinate, end: Coordinate) -> bool {
    cells(start, end).all(|coord| match dim.try_linearize(&coord) {
        Some(idx) => !occupied[idx],
        None => false,
    })
}
