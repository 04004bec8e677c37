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

//! Types used for defining ships and their placement.
#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use std::convert::TryFrom;

use crate::board::Coordinate;

/// Direction a ship extends in from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Decks extend to the right, along the bow's row.
    Horizontal,
    /// Decks extend downward, along the bow's column.
    Vertical,
}

impl Orientation {
    /// Row and column step between consecutive decks.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship made of `len` decks starting at its bow.
///
/// Only the remaining hit count changes once a ship exists; the deck positions are
/// always recomputed from the bow and orientation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    bow: Coordinate,
    len: usize,
    orientation: Orientation,
    hits_left: usize,
}

impl Ship {
    /// Construct an undamaged ship. Panics if `len` is 0 or does not fit in an `isize`.
    pub fn new(bow: Coordinate, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        assert!(
            isize::try_from(len).is_ok(),
            "ship length {} exceeds the coordinate range",
            len
        );
        Self {
            bow,
            len,
            orientation,
            hits_left: len,
        }
    }

    /// First deck of the ship.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of decks that have not been hit yet.
    pub fn hits_left(&self) -> usize {
        self.hits_left
    }

    /// Returns true once every deck has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_left == 0
    }

    /// Iterate the coordinates of the decks, bow first.
    pub fn decks(&self) -> impl Iterator<Item = Coordinate> {
        let (drow, dcol) = self.orientation.step();
        let bow = self.bow;
        // Ship::new keeps len within isize.
        (0..self.len as isize).map(move |i| bow.offset(drow * i, dcol * i))
    }

    /// Returns true if the given coordinate is one of this ship's decks.
    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.decks().any(|deck| deck == coord)
    }

    /// Record a hit on one of the decks.
    pub(crate) fn take_hit(&mut self) {
        self.hits_left = self.hits_left.saturating_sub(1);
    }
}
