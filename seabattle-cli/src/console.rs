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

//! Printing the game to the terminal.
use std::{
    fmt,
    io::{self, Write},
};

use log::{debug, warn};

use seabattle::{
    Board, CannotShootReason, Coordinate, Observer, Renderer, ShotError, ShotOutcome, Side,
    TextRenderer,
};

/// Horizontal rule printed between sections.
const RULE: &str = "--------------------";

/// Print the banner and the input rules.
pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "-----------")?;
    writeln!(out, "Sea  Battle")?;
    writeln!(out, "-----------")?;
    writeln!(out)?;
    writeln!(out, "How to enter a target:")?;
    writeln!(out, "----------------------")?;
    writeln!(out, " * the first number is the row,")?;
    writeln!(out, " * the second number is the column,")?;
    writeln!(out, " * separate them with a space.")?;
    writeln!(out)
}

/// Display helper that prints a coordinate the way the player types it.
struct OneBased(Coordinate);

impl fmt::Display for OneBased {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.0.row + 1, self.0.col + 1)
    }
}

/// What the player is told when a shot is rejected.
fn rejection_message(reason: CannotShootReason) -> &'static str {
    match reason {
        CannotShootReason::OutOfBounds => "Shot is outside the board!",
        CannotShootReason::AlreadyTargeted => "That cell was already targeted!",
    }
}

/// Observer that narrates the game to a terminal.
pub struct Console<W> {
    out: W,
    renderer: TextRenderer,
    verbose: bool,
}

impl<W: Write> Console<W> {
    /// Create a console writing to `out`. The computer's rejected shots are not shown.
    pub fn new(out: W) -> Self {
        Self {
            out,
            renderer: TextRenderer::default(),
            verbose: false,
        }
    }

    /// Also announce every shot the computer had rejected before one landed.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Extract the underlying writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    /// Write one line, logging instead of failing since observers cannot return errors.
    fn say(&mut self, line: fmt::Arguments) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            warn!("failed to write to the console: {}", err);
        }
    }
}

impl<W: Write> Observer for Console<W> {
    fn turn_started(&mut self, side: Side, player: &Board, opponent: &Board) {
        let own = self.renderer.render(player);
        let rival = self.renderer.render(opponent);
        self.say(format_args!("{}", RULE));
        self.say(format_args!("Your board:\n{}", own));
        self.say(format_args!("{}", RULE));
        self.say(format_args!("Computer's board:\n{}", rival));
        self.say(format_args!("{}", RULE));
        match side {
            Side::Player => self.say(format_args!("Your turn")),
            Side::Opponent => self.say(format_args!("Computer's turn")),
        }
    }

    fn shot_rejected(&mut self, side: Side, err: &ShotError) {
        if side == Side::Opponent {
            debug!("computer retries after {}", err);
            if !self.verbose {
                return;
            }
            self.say(format_args!("Computer fires at {}", OneBased(err.coord())));
        }
        self.say(format_args!("{}", rejection_message(err.reason())));
    }

    fn shot_resolved(&mut self, side: Side, target: Coordinate, outcome: ShotOutcome) {
        if side == Side::Opponent {
            self.say(format_args!("Computer fires at {}", OneBased(target)));
        }
        match outcome {
            ShotOutcome::Miss => self.say(format_args!("Miss!")),
            ShotOutcome::Hit => self.say(format_args!("Hit!")),
            ShotOutcome::Sunk => self.say(format_args!("Sunk!")),
        }
    }

    fn game_over(&mut self, winner: Side) {
        self.say(format_args!("{}", RULE));
        match winner {
            Side::Player => self.say(format_args!("You win!")),
            Side::Opponent => self.say(format_args!("The computer wins!")),
        }
    }
}

#[cfg(test)]
mod tests {
    use seabattle::{Orientation, Ship};

    use super::*;

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn narrates_shots_one_based() {
        let mut console = Console::new(Vec::new());
        console.shot_resolved(Side::Opponent, Coordinate::new(0, 4), ShotOutcome::Hit);
        console.shot_resolved(Side::Player, Coordinate::new(2, 2), ShotOutcome::Miss);
        assert_eq!(output(console), "Computer fires at 1 5\nHit!\nMiss!\n");
    }

    #[test]
    fn only_the_human_hears_about_rejected_shots() {
        let mut board = Board::new(3);
        board.reset_occupied();
        let err = board.shot(Coordinate::new(3, 0)).unwrap_err();

        let mut console = Console::new(Vec::new());
        console.shot_rejected(Side::Opponent, &err);
        console.shot_rejected(Side::Player, &err);
        assert_eq!(output(console), "Shot is outside the board!\n");
    }

    #[test]
    fn repeated_target_is_reported() {
        let mut board = Board::new(3);
        board.reset_occupied();
        board.shot(Coordinate::new(1, 1)).unwrap();
        let err = board.shot(Coordinate::new(1, 1)).unwrap_err();

        let mut console = Console::new(Vec::new());
        console.shot_rejected(Side::Player, &err);
        assert_eq!(output(console), "That cell was already targeted!\n");
    }

    #[test]
    fn verbose_console_shows_the_computers_misfires() {
        let mut board = Board::new(3);
        board.reset_occupied();
        board.shot(Coordinate::new(0, 2)).unwrap();
        let repeat = board.shot(Coordinate::new(0, 2)).unwrap_err();
        let off_board = board.shot(Coordinate::new(-1, 0)).unwrap_err();

        let mut console = Console::new(Vec::new()).with_verbose(true);
        console.shot_rejected(Side::Opponent, &repeat);
        console.shot_rejected(Side::Opponent, &off_board);
        console.shot_resolved(Side::Opponent, Coordinate::new(1, 1), ShotOutcome::Miss);
        assert_eq!(
            output(console),
            "Computer fires at 1 3\nThat cell was already targeted!\n\
             Computer fires at 0 1\nShot is outside the board!\n\
             Computer fires at 2 2\nMiss!\n"
        );
    }

    #[test]
    fn hides_the_computers_fleet() {
        let mut own = Board::new(2);
        own.add_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Vertical))
            .unwrap();
        let mut rival = own.clone();
        rival.set_hidden(true);

        let mut console = Console::new(Vec::new());
        console.turn_started(Side::Player, &own, &rival);
        let text = output(console);
        let (mine, theirs) = text.split_at(text.find("Computer's board").unwrap());
        assert!(mine.contains('■'));
        assert!(!theirs.contains('■'));
        assert!(theirs.ends_with("Your turn\n"));
    }

    #[test]
    fn announces_the_winner() {
        let mut console = Console::new(Vec::new());
        console.game_over(Side::Opponent);
        assert!(output(console).ends_with("The computer wins!\n"));
    }
}
