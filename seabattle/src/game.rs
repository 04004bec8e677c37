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

//! The turn loop of a two-player game.
use log::{debug, info};
use thiserror::Error;

use crate::{
    board::{Board, Coordinate, ShotError, ShotOutcome},
    player::Player,
};

/// One of the two seats at the table. `Player` is the human, `Opponent` the computer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Get the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// State of the game between moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// The player moves next.
    PlayerTurn,
    /// The opponent moves next.
    OpponentTurn,
    /// The opponent's fleet is destroyed.
    PlayerWon,
    /// The player's fleet is destroyed.
    OpponentWon,
}

impl GameState {
    /// The state in which `side` moves next.
    pub fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => GameState::PlayerTurn,
            Side::Opponent => GameState::OpponentTurn,
        }
    }

    /// The side to move, or `None` once the game is over.
    pub fn active(self) -> Option<Side> {
        match self {
            GameState::PlayerTurn => Some(Side::Player),
            GameState::OpponentTurn => Some(Side::Opponent),
            GameState::PlayerWon | GameState::OpponentWon => None,
        }
    }

    /// The winning side, or `None` while the game is in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::PlayerWon => Some(Side::Player),
            GameState::OpponentWon => Some(Side::Opponent),
            GameState::PlayerTurn | GameState::OpponentTurn => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// Reasons the game loop stopped without a winner.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// A move was requested after the game ended.
    #[error("the game is already over")]
    AlreadyOver,
    /// The given side's strategy stopped producing targets.
    #[error("{0:?} gave up")]
    Aborted(Side),
}

/// Receives notifications as the game progresses. Every method does nothing by default.
pub trait Observer {
    /// Called before every move with both boards, the moment to render them.
    fn turn_started(&mut self, _side: Side, _player: &Board, _opponent: &Board) {}

    /// Called when a target chosen by `side` was refused by the rival board.
    fn shot_rejected(&mut self, _side: Side, _err: &ShotError) {}

    /// Called once a shot by `side` at `target` has been resolved.
    fn shot_resolved(&mut self, _side: Side, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Called once when a fleet has been destroyed.
    fn game_over(&mut self, _winner: Side) {}
}

/// Observer that ignores everything.
impl Observer for () {}

/// A game between the player and the opponent.
#[derive(Debug)]
pub struct Game {
    player: Player,
    opponent: Player,
    state: GameState,
}

impl Game {
    /// Start a game in which the player moves first.
    pub fn new(player: Player, opponent: Player) -> Self {
        Self::starting_with(player, opponent, Side::Player)
    }

    /// Start a game in which `first` moves first.
    pub fn starting_with(player: Player, opponent: Player, first: Side) -> Self {
        Self {
            player,
            opponent,
            state: GameState::turn_of(first),
        }
    }

    /// Current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The participant sitting on the given side.
    pub fn get_player(&self, side: Side) -> &Player {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Play a single move by the side whose turn it is and return the new state.
    pub fn step(&mut self, observer: &mut dyn Observer) -> Result<GameState, GameError> {
        let side = self.state.active().ok_or(GameError::AlreadyOver)?;
        observer.turn_started(side, self.player.board(), self.opponent.board());

        let (active, passive) = match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        };
        let outcome = active.make_move(side, passive.board_mut(), observer)?;

        self.state = if self.opponent.board().is_defeated() {
            GameState::PlayerWon
        } else if self.player.board().is_defeated() {
            GameState::OpponentWon
        } else if outcome.repeats_turn() {
            GameState::turn_of(side)
        } else {
            GameState::turn_of(side.opponent())
        };
        debug!("{:?} played {:?}, now {:?}", side, outcome, self.state);

        if let Some(winner) = self.state.winner() {
            info!("{:?} won", winner);
            observer.game_over(winner);
        }
        Ok(self.state)
    }

    /// Play moves until one fleet is destroyed and return the winner.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.step(observer)?.winner() {
                return Ok(winner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        player::{Interactive, ScriptedMoves},
        ships::{Orientation, Ship},
    };

    fn player(ships: &[(isize, isize, usize)], moves: &[(isize, isize)]) -> Player {
        let mut board = Board::new(6);
        for &(row, col, len) in ships {
            board
                .add_ship(Ship::new(Coordinate::new(row, col), len, Orientation::Horizontal))
                .unwrap();
        }
        board.reset_occupied();
        let moves: ScriptedMoves = moves.iter().copied().collect();
        Player::new(board, Interactive::new(moves))
    }

    #[test]
    fn miss_passes_the_turn() {
        let mut game = Game::new(
            player(&[(0, 0, 1)], &[(5, 5)]),
            player(&[(0, 0, 1)], &[(5, 5)]),
        );
        assert_eq!(game.step(&mut ()), Ok(GameState::OpponentTurn));
        assert_eq!(game.step(&mut ()), Ok(GameState::PlayerTurn));
    }

    #[test]
    fn hit_and_sink_keep_the_turn() {
        let mut game = Game::new(
            player(&[(0, 0, 1)], &[(3, 0), (3, 1), (0, 0)]),
            player(&[(3, 0, 2), (5, 5, 1)], &[]),
        );
        assert_eq!(game.step(&mut ()), Ok(GameState::PlayerTurn));
        assert_eq!(game.step(&mut ()), Ok(GameState::PlayerTurn));
        assert_eq!(game.step(&mut ()), Ok(GameState::OpponentTurn));
    }

    #[test]
    fn last_sinking_wins() {
        let mut game = Game::new(
            player(&[(0, 0, 1)], &[(2, 2)]),
            player(&[(2, 2, 1)], &[]),
        );
        assert_eq!(game.step(&mut ()), Ok(GameState::PlayerWon));
        assert_eq!(game.step(&mut ()), Err(GameError::AlreadyOver));
    }

    #[test]
    fn opponent_can_win() {
        let mut game = Game::starting_with(
            player(&[(4, 4, 2)], &[]),
            player(&[(0, 0, 1)], &[(4, 4), (4, 5)]),
            Side::Opponent,
        );
        assert_eq!(game.run(&mut ()), Ok(Side::Opponent));
        assert_eq!(game.state(), GameState::OpponentWon);
        assert!(game.get_player(Side::Player).board().is_defeated());
    }

    #[test]
    fn exhausted_input_aborts_the_run() {
        let mut game = Game::new(
            player(&[(0, 0, 1)], &[(5, 5)]),
            player(&[(0, 0, 1)], &[]),
        );
        assert_eq!(game.run(&mut ()), Err(GameError::Aborted(Side::Opponent)));
    }

    #[derive(Default)]
    struct Log {
        turns: Vec<Side>,
        winner: Option<Side>,
    }

    impl Observer for Log {
        fn turn_started(&mut self, side: Side, _player: &Board, _opponent: &Board) {
            self.turns.push(side);
        }

        fn game_over(&mut self, winner: Side) {
            self.winner = Some(winner);
        }
    }

    #[test]
    fn observer_sees_every_turn() {
        let mut game = Game::new(
            player(&[(0, 0, 1)], &[(5, 5), (2, 0), (2, 1)]),
            player(&[(2, 0, 2)], &[(4, 4)]),
        );
        let mut log = Log::default();
        assert_eq!(game.run(&mut log), Ok(Side::Player));
        assert_eq!(
            log.turns,
            vec![Side::Player, Side::Opponent, Side::Player, Side::Player]
        );
        assert_eq!(log.winner, Some(Side::Player));
    }
}
