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

//! Random fleet placement.
//!
//! Ships are placed greedily at random positions. An unlucky early placement can leave
//! no room for a later ship, so placement is retried at two levels: each ship gets a
//! budget of random tries, and a board whose ship runs out of tries is thrown away and
//! started over.

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, Coordinate},
    config::{ConfigError, GameConfig, BOARD_ATTEMPTS, SHIP_ATTEMPTS},
    ships::Ship,
};

/// Error returned when a fleet cannot be generated.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The configuration can never produce a valid board.
    #[error("invalid fleet configuration: {0}")]
    Config(#[from] ConfigError),
    /// Every board attempt ran out of room before the whole fleet was placed.
    #[error("could not fit fleet {manifest:?} on a {size}x{size} board after {attempts} attempts")]
    Unplaceable {
        /// Ship lengths that were requested.
        manifest: Vec<usize>,
        /// Side length of the board.
        size: usize,
        /// Number of boards that were tried.
        attempts: usize,
    },
}

/// Produces boards with a randomly placed fleet.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    config: GameConfig,
    ship_attempts: usize,
    board_attempts: usize,
}

impl FleetGenerator {
    /// Create a generator for the given board size and fleet.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ship_attempts: SHIP_ATTEMPTS,
            board_attempts: BOARD_ATTEMPTS,
        }
    }

    /// Set how many random placements a single ship gets before the board is abandoned.
    pub fn with_ship_attempts(mut self, attempts: usize) -> Self {
        self.ship_attempts = attempts;
        self
    }

    /// Set how many boards are tried before giving up.
    pub fn with_board_attempts(mut self, attempts: usize) -> Self {
        self.board_attempts = attempts;
        self
    }

    /// The configuration boards are generated for.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate a board holding every ship of the manifest, ready for play.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, FleetError> {
        self.config.validate()?;
        for attempt in 1..=self.board_attempts {
            if let Some(mut board) = self.try_board(rng) {
                debug!("placed fleet on board attempt {}", attempt);
                board.reset_occupied();
                return Ok(board);
            }
            trace!("board attempt {} ran out of room, starting over", attempt);
        }
        Err(FleetError::Unplaceable {
            manifest: self.config.manifest.clone(),
            size: self.config.size,
            attempts: self.board_attempts,
        })
    }

    /// Try to place the whole fleet on a fresh board. Returns `None` if some ship could
    /// not be placed within its budget.
    fn try_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.config.size);
        for &len in &self.config.manifest {
            let placed = (0..self.ship_attempts)
                .any(|_| board.add_ship(self.random_ship(len, rng)).is_ok());
            if !placed {
                trace!("no room for a {}-deck ship", len);
                return None;
            }
        }
        Some(board)
    }

    /// Pick a uniformly random bow and orientation for a ship of the given length.
    fn random_ship<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Ship {
        let size = self.config.size as isize;
        let bow = Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size));
        Ship::new(bow, len, rng.gen())
    }
}

impl Default for FleetGenerator {
    /// Generator for the standard fleet on the default board.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
