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
//! Types used for defining ships and resolving shots against them.
use std::fmt;

use log::trace;

use crate::board::{CannotPlaceReason, Coordinate, DeckNotFound, PlaceError};

pub use self::{
    deck::{Deck, Symbol},
    linear::{Line, Orientation},
};

mod deck;
mod linear;

/// Handle to a ship within a single board. IDs are handed out in placement order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub(crate) fn new(index: usize) -> Self {
        ShipId(index)
    }

    /// Position of the ship in the board's placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of firing at one of a ship's decks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FireStatus {
    /// The ship was drowned before this shot. Nothing changed.
    AlreadyDrowned,
    /// The deck was struck before this shot. Nothing changed.
    AlreadyHit,
    /// The deck was struck and the ship is still afloat.
    Hit,
    /// The deck was struck and it was the ship's last live deck.
    Sunk,
}

impl FireStatus {
    /// Whether this shot changed the state of the ship.
    pub fn is_fresh(self) -> bool {
        match self {
            FireStatus::Hit | FireStatus::Sunk => true,
            FireStatus::AlreadyDrowned | FireStatus::AlreadyHit => false,
        }
    }
}

impl fmt::Display for FireStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            FireStatus::AlreadyDrowned => "The ship in this location already drowned",
            FireStatus::AlreadyHit => "The deck has already been struck",
            FireStatus::Hit => "Hit!",
            FireStatus::Sunk => "Sunk!",
        })
    }
}

/// A straight line of decks treated as one damageable unit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    line: Line,
    decks: Vec<Deck>,
    drowned: bool,
}

impl Ship {
    /// Build a ship covering every cell from `start` to `end` inclusive. The endpoints
    /// may be given in either order but must share a row or a column.
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self, PlaceError> {
        let line = Line::new(start, end)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::NotAligned, start, end))?;
        Ok(Self::from_line(line))
    }

    /// Build a ship covering the given line.
    pub fn from_line(line: Line) -> Self {
        Self {
            line,
            decks: line.iter().map(Deck::new).collect(),
            drowned: false,
        }
    }

    /// The lower endpoint of the ship.
    pub fn start(&self) -> Coordinate {
        self.line.start()
    }

    /// The upper endpoint of the ship.
    pub fn end(&self) -> Coordinate {
        self.line.end()
    }

    /// The cells the ship covers.
    pub fn line(&self) -> Line {
        self.line
    }

    pub fn orientation(&self) -> Orientation {
        self.line.orientation()
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Ships always have at least one deck.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Decks in order from `start` to `end`.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Get the deck at the given coordinate, if this ship covers it.
    pub fn get_deck(&self, coord: Coordinate) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.coord() == coord)
    }

    /// Returns true if one of this ship's decks is at the given coordinate.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get_deck(coord).is_some()
    }

    /// Returns true once every deck has been struck.
    pub fn is_drowned(&self) -> bool {
        self.drowned
    }

    /// Number of decks not yet struck.
    pub fn decks_alive(&self) -> usize {
        self.decks.iter().filter(|deck| deck.is_alive()).count()
    }

    /// Fire at the deck at `coord`.
    ///
    /// A drowned ship reports [`FireStatus::AlreadyDrowned`] for any coordinate, without
    /// looking for a deck. Otherwise `coord` must be one of this ship's decks.
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireStatus, DeckNotFound> {
        if self.drowned {
            return Ok(FireStatus::AlreadyDrowned);
        }
        let deck = self
            .decks
            .iter_mut()
            .find(|deck| deck.coord() == coord)
            .ok_or_else(|| DeckNotFound::new(coord))?;
        if !deck.is_alive() {
            return Ok(FireStatus::AlreadyHit);
        }
        deck.strike();
        trace!("deck at {} struck", coord);

        if self.decks.iter().any(|deck| deck.is_alive()) {
            Ok(FireStatus::Hit)
        } else {
            self.drowned = true;
            for deck in self.decks.iter_mut() {
                deck.mark_sunk();
            }
            Ok(FireStatus::Sunk)
        }
    }
}
