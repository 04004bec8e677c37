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

/// Offsets of a cell and its eight surrounding cells.
const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The coordinates of a cell on the board. Zero-based; signed so that shots off either
/// edge of the board can be expressed and rejected by the [`Board`][crate::Board].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: isize,
    /// Column of the cell, counted from the left.
    pub col: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the coordinate shifted by the given row and column deltas.
    pub fn offset(self, drow: isize, dcol: isize) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// Iterate this coordinate together with the eight coordinates touching it,
    /// diagonals included. Does not check bounds.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD
            .iter()
            .map(move |&(drow, dcol)| self.offset(drow, dcol))
    }

    /// Returns true if the two coordinates are distinct and touch, including diagonally.
    pub fn touches(&self, other: &Coordinate) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
