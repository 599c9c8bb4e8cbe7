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
use std::fmt;

use crate::board::Coordinate;

/// What a cell looks like when the board is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// Open water.
    Water,
    /// A deck that has not been hit.
    Intact,
    /// A struck deck of a ship that is still afloat.
    Hit,
    /// A deck of a drowned ship.
    Sunk,
}

impl Symbol {
    /// The character used for this symbol on a printed board.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Water => '~',
            Symbol::Intact => '□',
            Symbol::Hit => '*',
            Symbol::Sunk => 'x',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.as_char().encode_utf8(&mut buf))
    }
}

/// A single cell of a ship.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck {
    coord: Coordinate,
    alive: bool,
    symbol: Symbol,
}

impl Deck {
    /// New, undamaged deck at the given coordinate.
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            alive: true,
            symbol: Symbol::Intact,
        }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// Whether this deck has not yet been struck.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Record a hit on this deck.
    pub(crate) fn strike(&mut self) {
        debug_assert!(self.alive, "deck at {} struck twice", self.coord);
        self.alive = false;
        self.symbol = Symbol::Hit;
    }

    /// Show this deck as part of a drowned ship.
    pub(crate) fn mark_sunk(&mut self) {
        self.symbol = Symbol::Sunk;
    }
}
