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

use std::collections::HashSet;

use log::{debug, trace};

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::Cell,
};

mod coordinate;
mod errors;
mod grid;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship without sinking it.
    Hit,
    /// The shot hit the last intact deck of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooting player moves again after this outcome.
    pub fn repeats_turn(self) -> bool {
        match self {
            ShotOutcome::Miss => false,
            ShotOutcome::Hit | ShotOutcome::Sunk => true,
        }
    }
}

/// Represents a single player's board: their fleet and their side of the ocean.
///
/// A board starts in the setup phase where ships are added with [`Board::add_ship`].
/// Every placed ship reserves the ring of cells around it so that no two ships ever
/// touch. [`Board::reset_occupied`] ends setup; from then on only [`Board::shot`]
/// changes the board.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell states shown to renderers.
    grid: Grid,

    /// Ships in the order they were added.
    ships: Vec<Ship>,

    /// Decks and surrounding rings of placed ships. Only used during setup.
    reserved: HashSet<Coordinate>,

    /// Cells that have been shot, or ringed off around a sunk ship.
    targeted: HashSet<Coordinate>,

    /// Number of ships that have been sunk.
    sunk: usize,

    /// Whether renderers should conceal ships that have not been hit.
    hidden: bool,

    /// Whether ships may still be added.
    setup: bool,
}

impl Board {
    /// Create an empty board with sides of the given length.
    ///
    /// Panics if `size` is 0 or if `size * size` overflows `usize`. Sizes that pass
    /// [`GameConfig::validate`](crate::GameConfig::validate) never panic.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be nonzero");
        Self {
            grid: Grid::new(size),
            ships: Vec::new(),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            sunk: 0,
            hidden: false,
            setup: true,
        }
    }

    /// Length of each side of the board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Whether ships are concealed when this board is rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether ships are concealed when this board is rendered. Does not affect play.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Get the state of the cell at the given coordinate, or `None` if it is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the cells of
    /// that row, left to right.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Cell>> {
        let size = self.size() as isize;
        (0..size).map(move |row| (0..size).map(move |col| self.grid[Coordinate::new(row, col)]))
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships that have been sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Whether the given cell has already been shot or ringed off around a wreck.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Whether ships may still be added to this board.
    pub fn in_setup(&self) -> bool {
        self.setup
    }

    /// Returns true if either axis of the coordinate lies outside the board.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.grid.try_linearize(&coord).is_none()
    }

    /// Mark the cells around every deck of `ship`, the decks themselves included.
    ///
    /// Without `commit` the ring is reserved so later ships cannot be placed there. With
    /// `commit` the ring is recorded as targeted and shown as [`Cell::Buffer`], which is
    /// how a sunk ship is fenced off. Cells already recorded are left alone.
    pub fn mark_buffer(&mut self, ship: &Ship, commit: bool) {
        for deck in ship.decks() {
            for coord in deck.neighborhood() {
                if self.is_out_of_bounds(coord) {
                    continue;
                }
                if commit {
                    if self.targeted.insert(coord) {
                        self.grid[coord] = Cell::Buffer;
                    }
                } else {
                    self.reserved.insert(coord);
                }
            }
        }
    }

    /// Add a ship to the board. Fails if any deck is off the board or lands on a cell
    /// occupied by, or touching, a ship that was already placed, or if setup is over.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if !self.setup {
            return Err(PlaceError::new(CannotPlaceReason::SetupFinished, ship));
        }
        if ship.len() > self.size() {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
        }
        for deck in ship.decks() {
            if self.is_out_of_bounds(deck) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
            }
            if self.reserved.contains(&deck) {
                return Err(PlaceError::new(CannotPlaceReason::Occupied, ship));
            }
        }
        // Already ensured that every deck is in bounds and free.
        for deck in ship.decks() {
            self.grid[deck] = Cell::Ship;
            self.reserved.insert(deck);
        }
        self.mark_buffer(&ship, false);
        trace!(
            "placed {}-deck ship at {} ({:?})",
            ship.len(),
            ship.bow(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Finish setup: forget placement reservations and stop accepting ships.
    pub fn reset_occupied(&mut self) {
        self.reserved.clear();
        self.setup = false;
    }

    /// Fire a shot at this board, returning why the shot was rejected or what it hit.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.targeted.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord));
        }

        let hit = self.ships.iter().position(|ship| ship.is_hit(coord));
        let outcome = match hit {
            None => {
                self.grid[coord] = Cell::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.grid[coord] = Cell::Hit;
                self.ships[idx].take_hit();
                if self.ships[idx].is_sunk() {
                    self.sunk += 1;
                    let wreck = self.ships[idx].clone();
                    self.mark_buffer(&wreck, true);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        debug!("shot at {} resolved as {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Returns true if every ship on this board has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk == self.ships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn ship(row: isize, col: isize, len: usize, orientation: Orientation) -> Ship {
        Ship::new(Coordinate::new(row, col), len, orientation)
    }

    #[test]
    fn bounds() {
        let board = Board::new(6);
        assert!(!board.is_out_of_bounds(Coordinate::new(0, 0)));
        assert!(!board.is_out_of_bounds(Coordinate::new(5, 5)));
        assert!(board.is_out_of_bounds(Coordinate::new(-1, 0)));
        assert!(board.is_out_of_bounds(Coordinate::new(0, 6)));
        assert!(board.is_out_of_bounds(Coordinate::new(6, -3)));
    }

    #[test]
    fn ship_longer_than_the_board_is_rejected() {
        let mut board = Board::new(6);
        for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
            let err = board
                .add_ship(ship(0, 0, isize::MAX as usize, orientation))
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
            let err = board.add_ship(ship(0, 0, 7, orientation)).unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        }
        assert!(board.ships().is_empty());
        board.add_ship(ship(0, 0, 6, Orientation::Vertical)).unwrap();
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    #[should_panic(expected = "board size overflows")]
    fn overflowing_size_panics() {
        Board::new(usize::MAX);
    }

    #[test]
    fn small_board_is_fully_buffered() {
        let mut board = Board::new(2);
        board
            .add_ship(ship(0, 0, 1, Orientation::Horizontal))
            .unwrap();
        for &(row, col) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
                let err = board.add_ship(ship(row, col, 1, orientation)).unwrap_err();
                assert_eq!(err.reason(), CannotPlaceReason::Occupied);
            }
        }
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn ship_off_the_edge_is_rejected() {
        let mut board = Board::new(6);
        let err = board
            .add_ship(ship(0, 4, 3, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        let err = board
            .add_ship(ship(-1, 0, 1, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(board.ships().is_empty());
        assert_eq!(board.cell(Coordinate::new(0, 4)), Some(Cell::Empty));
    }

    #[test]
    fn diagonal_contact_is_rejected_in_every_direction() {
        for &(drow, dcol) in &[(-1, -1), (-1, 1), (1, -1), (1, 1)] {
            let mut board = Board::new(6);
            board.add_ship(ship(2, 2, 1, Orientation::Vertical)).unwrap();
            let err = board
                .add_ship(ship(2 + drow, 2 + dcol, 1, Orientation::Vertical))
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::Occupied);
        }
    }

    #[test]
    fn ships_one_cell_apart_are_allowed() {
        let mut board = Board::new(6);
        board
            .add_ship(ship(0, 0, 3, Orientation::Horizontal))
            .unwrap();
        board
            .add_ship(ship(2, 0, 3, Orientation::Horizontal))
            .unwrap();
        assert_eq!(board.cell(Coordinate::new(1, 1)), Some(Cell::Empty));
        assert_eq!(board.cell(Coordinate::new(2, 2)), Some(Cell::Ship));
    }

    #[test]
    fn no_ships_after_setup() {
        let mut board = Board::new(6);
        board.reset_occupied();
        let err = board
            .add_ship(ship(0, 0, 1, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::SetupFinished);
        assert!(!board.in_setup());
    }

    #[test]
    fn single_deck_ship_sinks_and_defeats() {
        let mut board = Board::new(6);
        board.add_ship(ship(2, 2, 1, Orientation::Vertical)).unwrap();
        board.reset_occupied();

        assert_eq!(board.shot(Coordinate::new(2, 2)), Ok(ShotOutcome::Sunk));
        assert!(board.is_defeated());
        let err = board.shot(Coordinate::new(2, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
        assert_eq!(err.coord(), Coordinate::new(2, 2));
    }

    #[test]
    fn sinking_fences_off_the_wreck() {
        let mut board = Board::new(6);
        board
            .add_ship(ship(1, 1, 2, Orientation::Horizontal))
            .unwrap();
        board.add_ship(ship(4, 4, 1, Orientation::Vertical)).unwrap();
        board.reset_occupied();

        assert_eq!(board.shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Hit));
        assert!(!board.is_targeted(Coordinate::new(0, 0)));
        assert_eq!(board.shot(Coordinate::new(1, 2)), Ok(ShotOutcome::Sunk));
        assert!(!board.is_defeated());

        for row in 0..=2 {
            for col in 0..=3 {
                assert!(board.is_targeted(Coordinate::new(row, col)));
            }
        }
        assert_eq!(board.cell(Coordinate::new(0, 0)), Some(Cell::Buffer));
        assert_eq!(board.cell(Coordinate::new(2, 3)), Some(Cell::Buffer));
        assert_eq!(board.cell(Coordinate::new(1, 1)), Some(Cell::Hit));
        assert_eq!(board.cell(Coordinate::new(3, 3)), Some(Cell::Empty));

        let err = board.shot(Coordinate::new(2, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
    }

    #[test]
    fn miss_marks_the_cell() {
        let mut board = Board::new(6);
        board.add_ship(ship(0, 0, 1, Orientation::Vertical)).unwrap();
        board.reset_occupied();
        assert_eq!(board.shot(Coordinate::new(5, 5)), Ok(ShotOutcome::Miss));
        assert_eq!(board.cell(Coordinate::new(5, 5)), Some(Cell::Miss));
        assert_eq!(board.sunk_count(), 0);
        assert!(!board.is_defeated());
    }

    #[test]
    fn out_of_bounds_shots() {
        let mut board = Board::new(6);
        board.reset_occupied();
        for &(row, col) in &[(-1, 0), (0, -1), (6, 0), (0, 6), (100, 100)] {
            let err = board.shot(Coordinate::new(row, col)).unwrap_err();
            assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        }
    }

    #[test]
    fn reservations_do_not_count_as_shots() {
        let mut board = Board::new(6);
        board.add_ship(ship(0, 0, 1, Orientation::Vertical)).unwrap();
        board.reset_occupied();
        assert_eq!(board.shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn outcome_turn_repeat() {
        assert!(!ShotOutcome::Miss.repeats_turn());
        assert!(ShotOutcome::Hit.repeats_turn());
        assert!(ShotOutcome::Sunk.repeats_turn());
    }
}
