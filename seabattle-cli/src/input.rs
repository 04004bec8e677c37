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

//! Reading the human player's moves from the terminal.
use std::io::{self, BufRead, Write};

use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use seabattle::{Coordinate, MoveSource};

/// Reason a line of input is not a target.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TargetError {
    /// The line did not hold exactly two values.
    #[error("Enter two coordinates!")]
    WrongCount,
    /// One of the values is not a whole number. Holds the offending text.
    #[error("Coordinates must be numbers!")]
    NotANumber(String),
}

/// Parse a 1-based `row column` pair, separated by spaces or a comma, into a zero-based
/// [`Coordinate`]. Whether it lies on the board is up to the board.
pub fn parse_target(line: &str) -> Result<Coordinate, TargetError> {
    static TARGET: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<row>[^\s,]+)(?:\s*,\s*|\s+)
        (?P<col>[^\s,]+)$",
        )
        .expect("target pattern is valid")
    });
    static NUMBER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[0-9]+$").expect("number pattern is valid"));

    let captures = TARGET.captures(line.trim()).ok_or(TargetError::WrongCount)?;
    let mut coords = ["row", "col"].iter().map(|name| {
        let text = &captures[*name];
        if !NUMBER.is_match(text) {
            return Err(TargetError::NotANumber(text.to_owned()));
        }
        text.parse::<isize>()
            .map(|n| n - 1)
            .map_err(|_| TargetError::NotANumber(text.to_owned()))
    });
    let row = coords.next().ok_or(TargetError::WrongCount)??;
    let col = coords.next().ok_or(TargetError::WrongCount)??;
    Ok(Coordinate::new(row, col))
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    /// Create a reader that takes lines from `read`.
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` once the input is closed.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

/// Moves typed by the human player.
pub struct ConsoleMoves<B> {
    input: InputReader<B>,
}

impl<B: BufRead> ConsoleMoves<B> {
    /// Create a move source prompting on stdout and reading targets from `read`.
    pub fn new(read: B) -> Self {
        Self {
            input: InputReader::new(read),
        }
    }
}

impl<B: BufRead> MoveSource for ConsoleMoves<B> {
    fn next_move(&mut self) -> Option<Coordinate> {
        let read = self
            .input
            .read_input("Your move:", |line| match parse_target(line) {
                Ok(target) => Some(target),
                Err(err) => {
                    println!("{}", err);
                    None
                }
            });
        match read {
            Ok(target) => target,
            Err(err) => {
                error!("failed to read move: {}", err);
                None
            }
        }
    }
}
