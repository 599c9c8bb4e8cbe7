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
//! Single-board sea battle.
//!
//! A [`Board`] owns a fixed grid of cells. Each cell is either open water or part of a
//! [`Ship`], and each ship is a straight run of [`Deck`]s. Firing at a coordinate
//! resolves to a [`ShotOutcome`]: a miss, a hit, a sinking, or one of the two redundant
//! outcomes for decks and ships that were already destroyed.
//!
//! ```
//! use seabattle::{Board, ShotOutcome};
//!
//! let mut board = Board::new(vec![((2, 2), (2, 4))]).unwrap();
//! let id = board.iter_ships().next().unwrap().id();
//! assert_eq!(board.fire((2, 2).into()).unwrap(), ShotOutcome::Hit(id));
//! assert_eq!(board.fire((5, 5).into()).unwrap(), ShotOutcome::Miss);
//! ```

pub use self::{
    board::{Board, CellRef, Coordinate, Occupant, ShotOutcome},
    ships::{Deck, FireStatus, Ship, ShipId, Symbol},
};

pub mod board;
pub mod config;
#[cfg(feature = "rng_gen")]
pub mod random;
pub mod ships;
