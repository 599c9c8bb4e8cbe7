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
//! Errors used by the [`Board`][crate::Board] and [`Ship`][crate::Ship].

use thiserror::Error;

use crate::board::{Coordinate, RectDimensions};

/// Reason why a ship could not be placed with the given endpoints.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The endpoints differ in both row and column.
    #[error("the endpoints do not lie on a single row or column")]
    NotAligned,
    /// One or more of the ship's decks would fall outside the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the ship's decks overlaps a ship that was already placed.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship {start}-{end}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    start: Coordinate,
    end: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason and the endpoints that were rejected.
    pub(crate) fn new(reason: CannotPlaceReason, start: Coordinate, end: Coordinate) -> Self {
        Self { reason, start, end }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the endpoints where placement was attempted.
    pub fn placement(&self) -> (Coordinate, Coordinate) {
        (self.start, self.end)
    }
}

/// Reason why a particular location could not be shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The location lies outside the board.
    OutOfBounds,
    /// The location could not be read as a `(row, col)` pair.
    Malformed,
}

/// Error returned when trying to shoot a location that is not a cell of the board.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error(
    "location {location} isn't correct, must be in range (0-{}, 0-{})",
    .rows.saturating_sub(1),
    .cols.saturating_sub(1)
)]
pub struct ShotError {
    /// Reason why the location could not be shot.
    reason: CannotShootReason,

    /// The location as the caller gave it.
    location: String,

    rows: usize,
    cols: usize,
}

impl ShotError {
    /// Construct a shot error for the given location on a board with the given
    /// dimensions.
    pub(crate) fn new(
        reason: CannotShootReason,
        location: impl Into<String>,
        dim: &RectDimensions,
    ) -> Self {
        Self {
            reason,
            location: location.into(),
            rows: dim.rows(),
            cols: dim.cols(),
        }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the rejected location, as given by the caller.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// A ship was asked to resolve a shot at a coordinate none of its decks cover.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no deck of this ship at {coord}")]
pub struct DeckNotFound {
    coord: Coordinate,
}

impl DeckNotFound {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// The coordinate that did not match any deck.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when text could not be read as a coordinate.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// The text did not split into exactly two components.
    #[error("expected a row and a column, found {0} component(s)")]
    WrongArity(usize),
    /// A component was not an integer.
    #[error("invalid coordinate component {0:?}")]
    InvalidComponent(String),
    /// A component was an integer too large to be stored.
    #[error("coordinate component {0} is too large")]
    TooLarge(String),
    /// A component was negative.
    #[error("coordinate component {0} is negative")]
    Negative(i64),
}
