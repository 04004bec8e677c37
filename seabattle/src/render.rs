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

//! Turning boards into text.
use std::fmt::{self, Write};

use crate::board::{Board, Cell};

/// Produces a displayable view of a board.
///
/// Implementations must not reveal ships that have not been hit when the board is
/// hidden. Hits, misses and wreck buffers look the same either way.
pub trait Renderer {
    /// Render the board.
    fn render(&self, board: &Board) -> String;
}

/// Renders a board as a grid of symbols with 1-based row and column numbers.
///
/// ```text
///    | 1 | 2 | 3 |
///  1 | ■ | O | X |
///  2 | O | T | . |
///  3 | O | O | O |
/// ```
#[derive(Debug, Copy, Clone)]
pub struct TextRenderer {
    /// Symbol for water nobody has fired at.
    pub water: char,
    /// Symbol for an intact deck on a visible board.
    pub ship: char,
    /// Symbol for a deck that has been hit.
    pub hit: char,
    /// Symbol for a shot that landed in water.
    pub miss: char,
    /// Symbol for the water ringing a sunk ship.
    pub buffer: char,
}

impl TextRenderer {
    /// Symbol shown for the cell given whether the board is hidden.
    pub fn symbol(&self, cell: Cell, hidden: bool) -> char {
        match cell {
            Cell::Empty => self.water,
            Cell::Ship if hidden => self.water,
            Cell::Ship => self.ship,
            Cell::Hit => self.hit,
            Cell::Miss => self.miss,
            Cell::Buffer => self.buffer,
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            water: 'O',
            ship: '■',
            hit: 'X',
            miss: 'T',
            buffer: '.',
        }
    }
}

impl TextRenderer {
    fn write_grid(&self, out: &mut String, board: &Board) -> fmt::Result {
        write!(out, "   |")?;
        for col in 1..=board.size() {
            write!(out, "{:^3}|", col)?;
        }
        for (row, cells) in board.rows().enumerate() {
            write!(out, "\n{:>2} |", row + 1)?;
            for cell in cells {
                write!(out, " {} |", self.symbol(cell, board.is_hidden()))?;
            }
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        self.write_grid(&mut out, board)
            .expect("String writes cannot fail");
        out
    }
}
