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

//! Square grid of cell states backing a [`Board`][crate::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::Coordinate;

/// State of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// A deck of a ship that has not been shot.
    Ship,
    /// A deck of a ship that has been shot.
    Hit,
    /// Open water that has been shot.
    Miss,
    /// Open water bordering a sunk ship. Counts as already targeted.
    Buffer,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Row-major storage for a square board.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Length of each side of the grid.
    pub(super) size: usize,
    /// Cells that make up this grid.
    cells: Box<[Cell]>,
}

impl Grid {
    /// Panics if `size * size` overflows `usize`.
    pub(super) fn new(size: usize) -> Self {
        let len = size.checked_mul(size).expect("board size overflows");
        let cells = vec![Cell::default(); len].into_boxed_slice();
        Self { size, cells }
    }

    /// Convert a coordinate to an index into `cells`. Returns `None` if the coordinate
    /// is out of bounds.
    pub(super) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        let size = self.size as isize;
        if (0..size).contains(&coord.row) && (0..size).contains(&coord.col) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
