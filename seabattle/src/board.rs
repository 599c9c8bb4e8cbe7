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
//! Types that make up the game board.

use std::{convert::TryFrom, fmt, ops::Deref};

use log::{debug, info, warn};

use crate::ships::{FireStatus, Ship, ShipId, Symbol};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::RectDimensions,
    errors::{
        CannotPlaceReason, CannotShootReason, DeckNotFound, ParseCoordinateError, PlaceError,
        ShotError,
    },
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Content of a single cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Occupant {
    /// Nothing is here.
    Water,
    /// One of the decks of the ship with this ID is here.
    Ship(ShipId),
}

/// Handle to a ship that pairs it with its ID on the board.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    id: ShipId,
    ship: &'a Ship,
}

impl<'a> ShipRef<'a> {
    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Get the ship itself, with the lifetime of the board.
    pub fn ship(&self) -> &'a Ship {
        self.ship
    }
}

impl Deref for ShipRef<'_> {
    type Target = Ship;

    fn deref(&self) -> &Ship {
        self.ship
    }
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<ShipRef<'a>>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The ship reference for the ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<ShipRef<'a>> {
        self.ship
    }

    /// The occupant of this cell.
    pub fn occupant(&self) -> Occupant {
        match self.ship {
            Some(ship) => Occupant::Ship(ship.id),
            None => Occupant::Water,
        }
    }

    /// The symbol to draw for this cell: the deck's symbol if a ship is here, otherwise
    /// water.
    pub fn symbol(&self) -> Symbol {
        self.ship
            .and_then(|ship| ship.ship.get_deck(self.coord))
            .map_or(Symbol::Water, |deck| deck.symbol())
    }
}

/// Result of a shot on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The shot hit the last live deck of the ship with the given ID.
    Sunk(ShipId),
    /// The shot landed on a deck of the given ship which was already struck.
    AlreadyHit(ShipId),
    /// The shot landed on the given ship, which had already drowned.
    AlreadyDrowned(ShipId),
}

impl ShotOutcome {
    /// Combine the ID of the ship that was shot with the ship's status.
    pub fn from_status(ship: ShipId, status: FireStatus) -> Self {
        match status {
            FireStatus::Hit => ShotOutcome::Hit(ship),
            FireStatus::Sunk => ShotOutcome::Sunk(ship),
            FireStatus::AlreadyHit => ShotOutcome::AlreadyHit(ship),
            FireStatus::AlreadyDrowned => ShotOutcome::AlreadyDrowned(ship),
        }
    }

    /// Get the id of the ship that was shot.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id)
            | ShotOutcome::Sunk(id)
            | ShotOutcome::AlreadyHit(id)
            | ShotOutcome::AlreadyDrowned(id) => Some(id),
        }
    }

    /// Get the ship's status for this shot. `None` for a miss.
    pub fn status(&self) -> Option<FireStatus> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(_) => Some(FireStatus::Hit),
            ShotOutcome::Sunk(_) => Some(FireStatus::Sunk),
            ShotOutcome::AlreadyHit(_) => Some(FireStatus::AlreadyHit),
            ShotOutcome::AlreadyDrowned(_) => Some(FireStatus::AlreadyDrowned),
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status() {
            None => f.pad("Miss!"),
            Some(status) => fmt::Display::fmt(&status, f),
        }
    }
}

/// Represents the board: the ocean and every ship placed in it.
#[derive(Debug, Clone)]
pub struct Board {
    /// Occupant of every cell.
    grid: Grid,

    /// All ships, indexed by [`ShipId`].
    ships: Vec<Ship>,
}

impl Board {
    /// Build a standard 10x10 board with one ship per `(start, end)` pair.
    ///
    /// Fails if any pair is diagonal, runs off the board, or overlaps a ship from an
    /// earlier pair.
    pub fn new<I, C>(ships: I) -> Result<Self, PlaceError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        Self::with_dimensions(RectDimensions::default(), ships)
    }

    /// Build a board of the given dimensions with one ship per `(start, end)` pair.
    pub fn with_dimensions<I, C>(dim: RectDimensions, ships: I) -> Result<Self, PlaceError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        let mut board = Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        };
        for (start, end) in ships {
            board.place(start.into(), end.into()).map_err(|err| {
                warn!("{}", err);
                err
            })?;
        }
        debug!(
            "board {}x{} set up with {} ships",
            dim.rows(),
            dim.cols(),
            board.ships.len()
        );
        Ok(board)
    }

    /// Add a ship to the board, pointing every cell it covers at it.
    fn place(&mut self, start: Coordinate, end: Coordinate) -> Result<ShipId, PlaceError> {
        // A line between in-bounds endpoints stays in bounds, so this also caps the
        // number of decks built below.
        if !self.grid.dim.contains(&start) || !self.grid.dim.contains(&end) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, start, end));
        }
        let ship = Ship::new(start, end)?;
        for deck in ship.decks() {
            match self.grid.get(&deck.coord()) {
                None => {
                    return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, start, end));
                }
                Some(Occupant::Ship(_)) => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied,
                        start,
                        end,
                    ));
                }
                Some(Occupant::Water) => {}
            }
        }
        let id = ShipId::new(self.ships.len());
        // Already ensured that every deck is in bounds and on open water.
        for deck in ship.decks() {
            if let Some(cell) = self.grid.get_mut(&deck.coord()) {
                *cell = Occupant::Ship(id);
            }
        }
        self.ships.push(ship);
        Ok(id)
    }

    /// Get the [`RectDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.grid.dim
    }

    /// Returns true if every ship on the board has drowned.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_drowned())
    }

    /// Number of ships not yet drowned.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_drowned()).count()
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = ShipRef> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| ShipRef {
                id: ShipId::new(i),
                ship,
            })
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<ShipRef> {
        self.ships
            .get(id.index())
            .map(|ship| ShipRef { id, ship })
    }

    /// Get the occupant of the given coordinate. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn occupant(&self, coord: Coordinate) -> Option<Occupant> {
        self.grid.get(&coord)
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef> {
        self.occupant(coord).map(|occupant| self.cell_ref(coord, occupant))
    }

    /// Get the symbol to draw at the given coordinate. Returns `None` if the coordinate
    /// is out of bounds.
    pub fn symbol_at(&self, coord: Coordinate) -> Option<Symbol> {
        self.get_coord(coord).map(|cell| cell.symbol())
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        self.grid.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| self.cell_ref(coord, self.grid[&coord]))
        })
    }

    fn cell_ref(&self, coord: Coordinate, occupant: Occupant) -> CellRef {
        CellRef {
            coord,
            ship: match occupant {
                Occupant::Water => None,
                // Grid entries only ever hold IDs of ships in the arena.
                Occupant::Ship(id) => self.get_ship(id),
            },
        }
    }

    /// Fire a shot at the given coordinate.
    ///
    /// Coordinates off the board are rejected with [`CannotShootReason::OutOfBounds`]
    /// and change nothing. Repeated shots at struck decks or drowned ships are not
    /// errors; they come back as [`ShotOutcome::AlreadyHit`] and
    /// [`ShotOutcome::AlreadyDrowned`].
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let outcome = match self.grid.get(&coord) {
            None => return Err(self.reject(CannotShootReason::OutOfBounds, coord)),
            Some(Occupant::Water) => ShotOutcome::Miss,
            Some(Occupant::Ship(id)) => {
                let ship = &mut self.ships[id.index()];
                match ship.fire(coord) {
                    Ok(status) => ShotOutcome::from_status(id, status),
                    // The grid points at this ship only for cells covered by its decks.
                    Err(err) => unreachable!("ship {} at {}: {}", id, coord, err),
                }
            }
        };
        debug!("shot at {}: {:?}", coord, outcome);
        if let ShotOutcome::Sunk(id) = outcome {
            info!("ship {} sunk, {} afloat", id, self.ships_afloat());
        }
        Ok(outcome)
    }

    /// Fire at a signed `(row, col)` location. Negative components are rejected as out
    /// of bounds.
    pub fn fire_at(&mut self, row: i64, col: i64) -> Result<ShotOutcome, ShotError> {
        match Coordinate::try_from((row, col)) {
            Ok(coord) => self.fire(coord),
            Err(_) => Err(self.reject(
                CannotShootReason::OutOfBounds,
                format!("({}, {})", row, col),
            )),
        }
    }

    /// Fire at a location given as text, such as `"3,4"` or `"3 4"`.
    ///
    /// Text that is not a pair of integers is rejected as
    /// [`CannotShootReason::Malformed`]. Integers too large to store are a location that
    /// is not on the board, so they are rejected as [`CannotShootReason::OutOfBounds`].
    pub fn fire_str(&mut self, location: &str) -> Result<ShotOutcome, ShotError> {
        match coordinate::parse_signed_pair(location) {
            Ok((row, col)) => self.fire_at(row, col),
            Err(ParseCoordinateError::TooLarge(_)) => {
                Err(self.reject(CannotShootReason::OutOfBounds, location.trim()))
            }
            Err(err) => {
                debug!("could not parse {:?}: {}", location, err);
                Err(self.reject(CannotShootReason::Malformed, location))
            }
        }
    }

    /// Build and log the error for a rejected location.
    fn reject(&self, reason: CannotShootReason, location: impl fmt::Display) -> ShotError {
        let err = ShotError::new(reason, location.to_string(), &self.grid.dim);
        warn!("{}", err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_board() -> Board {
        Board::new(vec![((2, 2), (2, 4))]).unwrap()
    }

    #[test]
    fn scenario() {
        let mut board = scenario_board();
        let id = ShipId::new(0);
        assert_eq!(board.fire((2, 2).into()), Ok(ShotOutcome::Hit(id)));
        assert_eq!(board.fire((2, 2).into()), Ok(ShotOutcome::AlreadyHit(id)));
        assert_eq!(board.fire((2, 3).into()), Ok(ShotOutcome::Hit(id)));
        assert_eq!(board.fire((2, 4).into()), Ok(ShotOutcome::Sunk(id)));
        assert_eq!(board.fire((2, 4).into()), Ok(ShotOutcome::AlreadyDrowned(id)));
        assert_eq!(board.fire((5, 5).into()), Ok(ShotOutcome::Miss));
        assert!(board.defeated());
    }

    #[test]
    fn every_cell_has_one_occupant() {
        let board = Board::new(vec![((0, 0), (0, 3)), ((5, 9), (9, 9))]).unwrap();
        let cells: Vec<_> = board.iter_rows().flatten().collect();
        assert_eq!(cells.len(), 100);
        let occupied: Vec<_> = cells
            .iter()
            .filter_map(|cell| cell.ship().map(|ship| (cell.coord(), ship.id())))
            .collect();
        assert_eq!(occupied.len(), 4 + 5);
        for (coord, id) in occupied {
            assert!(board.get_ship(id).unwrap().contains(coord));
        }
        assert_eq!(board.occupant((1, 1).into()), Some(Occupant::Water));
        assert_eq!(
            board.occupant((7, 9).into()),
            Some(Occupant::Ship(ShipId::new(1)))
        );
        assert_eq!(board.occupant((10, 0).into()), None);
    }

    #[test]
    fn symbols_follow_deck_state() {
        let mut board = scenario_board();
        assert_eq!(board.symbol_at((0, 0).into()), Some(Symbol::Water));
        assert_eq!(board.symbol_at((2, 3).into()), Some(Symbol::Intact));
        board.fire((2, 3).into()).unwrap();
        assert_eq!(board.symbol_at((2, 3).into()), Some(Symbol::Hit));
        board.fire((2, 2).into()).unwrap();
        board.fire((2, 4).into()).unwrap();
        for col in 2..=4 {
            assert_eq!(board.symbol_at((2, col).into()), Some(Symbol::Sunk));
        }
        board.fire((0, 0).into()).unwrap();
        assert_eq!(board.symbol_at((0, 0).into()), Some(Symbol::Water));
        assert_eq!(board.symbol_at((0, 10).into()), None);
    }

    #[test]
    fn out_of_bounds_shots_are_rejected() {
        let mut board = scenario_board();
        let err = board.fire((10, 10).into()).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.location(), "(10, 10)");
        assert_eq!(
            err.to_string(),
            "location (10, 10) isn't correct, must be in range (0-9, 0-9)"
        );

        let err = board.fire_at(-1, 0).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.location(), "(-1, 0)");

        let err = board.fire_str("2").unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::Malformed);
        let err = board.fire_str("two, three").unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::Malformed);
        let err = board.fire_str("-3, 2").unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        let err = board.fire_str(" 99999999999999999999,0 ").unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.location(), "99999999999999999999,0");

        assert!(board
            .get_ship(ShipId::new(0))
            .unwrap()
            .decks()
            .iter()
            .all(|deck| deck.is_alive()));
    }

    #[test]
    fn fire_str_hits() {
        let mut board = scenario_board();
        assert_eq!(board.fire_str("2,2"), Ok(ShotOutcome::Hit(ShipId::new(0))));
        assert_eq!(board.fire_str(" 2 2 "), Ok(ShotOutcome::AlreadyHit(ShipId::new(0))));
    }

    #[test]
    fn placement_errors() {
        let err = Board::new(vec![((0, 0), (0, 3)), ((0, 2), (3, 2))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.placement(), ((0, 2).into(), (3, 2).into()));

        let err = Board::new(vec![((8, 8), (8, 11))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);

        let err = Board::new(vec![((1, 1), (2, 2))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NotAligned);
    }

    #[test]
    fn far_off_board_placement_is_out_of_bounds() {
        let err = Board::new(vec![((0, 0), (0, usize::MAX))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.placement(), ((0, 0).into(), (0, usize::MAX).into()));

        let err = Board::new(vec![((0, 0), (0, 1_000_000_000_000))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);

        let err = Board::new(vec![((usize::MAX, 3), (usize::MAX - 2, 3))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);

        // Diagonal and off the board.
        let err = Board::new(vec![((0, 0), (usize::MAX, usize::MAX))]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    }

    #[test]
    fn custom_dimensions() {
        let mut board =
            Board::with_dimensions(RectDimensions::new(3, 5), vec![((2, 0), (2, 4))]).unwrap();
        assert_eq!(board.iter_rows().count(), 3);
        assert_eq!(board.fire((2, 4).into()), Ok(ShotOutcome::Hit(ShipId::new(0))));
        let err = board.fire((3, 0).into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "location (3, 0) isn't correct, must be in range (0-2, 0-4)"
        );
    }

    #[test]
    fn empty_board_is_defeated() {
        let mut board = Board::new(Vec::<((usize, usize), (usize, usize))>::new()).unwrap();
        assert!(board.defeated());
        assert_eq!(board.fire((4, 4).into()), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn outcome_messages() {
        let id = ShipId::new(3);
        assert_eq!(ShotOutcome::Miss.to_string(), "Miss!");
        assert_eq!(ShotOutcome::Hit(id).to_string(), "Hit!");
        assert_eq!(ShotOutcome::Sunk(id).to_string(), "Sunk!");
        assert_eq!(ShotOutcome::Miss.ship(), None);
        assert_eq!(ShotOutcome::AlreadyDrowned(id).ship(), Some(id));
    }
}
