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

//! Rules engine for a two-player sea battle game.
//!
//! Each player owns a square [`Board`] holding a fleet of straight [`Ship`]s that may
//! not touch each other, not even diagonally. Players take turns firing at the rival
//! board; a hit or a sinking earns another shot, a miss passes the turn, and the game
//! ends once one fleet is destroyed.
//!
//! The crate never performs I/O. Rendering goes through a [`Renderer`], human moves
//! come from a [`MoveSource`], and progress is reported to an [`Observer`].

pub use self::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, Cell, Coordinate, PlaceError, ShotError,
        ShotOutcome,
    },
    config::{
        ConfigError, GameConfig, BOARD_ATTEMPTS, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
        SHIP_ATTEMPTS, STANDARD_FLEET,
    },
    game::{Game, GameError, GameState, Observer, Side},
    player::{Interactive, MoveSource, Player, ScriptedMoves, Strategy},
    render::{Renderer, TextRenderer},
    ships::{Orientation, Ship},
};
#[cfg(feature = "rng_gen")]
pub use self::{
    fleet::{FleetError, FleetGenerator},
    player::RandomStrategy,
};

pub mod board;
pub mod config;
#[cfg(feature = "rng_gen")]
pub mod fleet;
pub mod game;
pub mod player;
pub mod render;
pub mod ships;
