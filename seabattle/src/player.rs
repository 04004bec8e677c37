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

//! Players and the strategies that choose their targets.
use std::{collections::VecDeque, iter::FromIterator};

#[cfg(feature = "rng_gen")]
use rand::Rng;

use log::debug;

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    game::{GameError, Observer, Side},
};

/// Something that picks the next cell to fire at.
///
/// Strategies are told only the size of the rival board. Returning `None` means the
/// strategy has given up, for example because its input was closed, and ends the game.
pub trait Strategy {
    /// Choose the next target on a rival board with sides of length `size`.
    fn choose_target(&mut self, size: usize) -> Option<Coordinate>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_target(&mut self, size: usize) -> Option<Coordinate> {
        (**self).choose_target(size)
    }
}

/// External source of coordinates, such as a person at a keyboard.
///
/// Implementations are expected to keep asking until they have a well-formed coordinate.
/// Whether it is on the board is checked by the board itself.
pub trait MoveSource {
    /// Get the next coordinate, or `None` if no more input will arrive.
    fn next_move(&mut self) -> Option<Coordinate>;
}

/// A fixed queue of moves, handed out in order until it runs dry.
///
/// Useful for replaying a recorded game or driving an [`Interactive`] player without a
/// keyboard.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScriptedMoves {
    moves: VecDeque<Coordinate>,
}

impl ScriptedMoves {
    /// Moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl<C: Into<Coordinate>> FromIterator<C> for ScriptedMoves {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Option<Coordinate> {
        self.moves.pop_front()
    }
}

/// Strategy that fires wherever its [`MoveSource`] says.
#[derive(Debug)]
pub struct Interactive<M> {
    source: M,
}

impl<M: MoveSource> Interactive<M> {
    /// Create a strategy reading moves from `source`.
    pub fn new(source: M) -> Self {
        Self { source }
    }

    /// Extract the underlying move source.
    pub fn into_inner(self) -> M {
        self.source
    }
}

impl<M: MoveSource> Strategy for Interactive<M> {
    fn choose_target(&mut self, _size: usize) -> Option<Coordinate> {
        self.source.next_move()
    }
}

/// Strategy that fires at a uniformly random cell on the board. It keeps no memory of
/// earlier shots, so repeated targets are rejected by the board and simply redrawn.
#[cfg(feature = "rng_gen")]
#[derive(Debug)]
pub struct RandomStrategy<R> {
    rng: R,
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> RandomStrategy<R> {
    /// Create a strategy drawing targets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_target(&mut self, size: usize) -> Option<Coordinate> {
        let size = size as isize;
        Some(Coordinate::new(
            self.rng.gen_range(0, size),
            self.rng.gen_range(0, size),
        ))
    }
}

/// A participant in the game: their own board and the strategy they play with.
pub struct Player {
    board: Board,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Create a player owning `board` who picks targets with `strategy`.
    pub fn new<S: Strategy + 'static>(board: Board, strategy: S) -> Self {
        Self {
            board,
            strategy: Box::new(strategy),
        }
    }

    /// This player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to this player's own board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Play one shot against `rival`.
    ///
    /// Targets the board rejects are reported to `observer` and a new target is
    /// requested until one is accepted. The returned outcome tells whether the turn
    /// repeats.
    pub fn make_move(
        &mut self,
        side: Side,
        rival: &mut Board,
        observer: &mut dyn Observer,
    ) -> Result<ShotOutcome, GameError> {
        loop {
            let target = self
                .strategy
                .choose_target(rival.size())
                .ok_or(GameError::Aborted(side))?;
            match rival.shot(target) {
                Ok(outcome) => {
                    observer.shot_resolved(side, target, outcome);
                    return Ok(outcome);
                }
                Err(err) => {
                    debug!("{:?} shot rejected: {}", side, err);
                    observer.shot_rejected(side, &err);
                }
            }
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("board", &self.board)
            .finish()
    }
}
