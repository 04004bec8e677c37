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

//! Game parameters: board size and fleet composition.

use thiserror::Error;

/// Side length of the board used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Ship lengths of the standard fleet, in placement order: one three-deck ship, two
/// two-deck ships and four single-deck ships.
pub const STANDARD_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Largest board side accepted by [`GameConfig::validate`].
pub const MAX_BOARD_SIZE: usize = 1024;

/// Random placements tried for a single ship before the whole board is abandoned.
pub const SHIP_ATTEMPTS: usize = 2000;

/// Fresh boards tried before a fleet is declared impossible to place.
pub const BOARD_ATTEMPTS: usize = 1000;

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The board must have at least one cell.
    #[error("board size must be at least 1")]
    ZeroSize,
    /// The board is too big to allocate.
    #[error("board size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// The fleet must contain at least one ship.
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,
    /// Every ship needs at least one deck.
    #[error("ship #{index} has zero length")]
    ZeroLength {
        /// Position of the ship in the manifest.
        index: usize,
    },
    /// A ship is longer than the side of the board.
    #[error("a {len}-deck ship does not fit on a {size}x{size} board")]
    ShipTooLong {
        /// Length of the offending ship.
        len: usize,
        /// Side length of the board.
        size: usize,
    },
}

/// Parameters shared by both players' boards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of each board.
    pub size: usize,
    /// Ship lengths every board must contain.
    pub manifest: Vec<usize>,
}

impl GameConfig {
    /// Create a config for the standard fleet on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            manifest: STANDARD_FLEET.to_vec(),
        }
    }

    /// Check that the board can hold at least every ship on its own.
    ///
    /// Passing does not guarantee that the whole fleet fits at once; that is only found
    /// out by trying to place it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::TooLarge {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.manifest.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (index, &len) in self.manifest.iter().enumerate() {
            if len == 0 {
                return Err(ConfigError::ZeroLength { index });
            }
            if len > self.size {
                return Err(ConfigError::ShipTooLong {
                    len,
                    size: self.size,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// The standard fleet on a 6x6 board.
    fn default() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.size, 6);
        assert_eq!(config.manifest, vec![3, 2, 2, 1, 1, 1, 1]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(GameConfig::with_size(0).validate(), Err(ConfigError::ZeroSize));
        assert_eq!(
            GameConfig::with_size(usize::MAX).validate(),
            Err(ConfigError::TooLarge {
                size: usize::MAX,
                max: MAX_BOARD_SIZE,
            })
        );
        assert_eq!(GameConfig::with_size(MAX_BOARD_SIZE).validate(), Ok(()));
        assert_eq!(
            GameConfig::with_size(2).validate(),
            Err(ConfigError::ShipTooLong { len: 3, size: 2 })
        );
        let config = GameConfig {
            size: 4,
            manifest: vec![],
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyFleet));
        let config = GameConfig {
            size: 4,
            manifest: vec![2, 0],
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLength { index: 1 }));
    }
}
