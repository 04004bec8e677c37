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

use std::io::{self, BufReader};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use seabattle::{
    FleetGenerator, Game, GameConfig, GameError, Interactive, Player, RandomStrategy, Side,
    DEFAULT_BOARD_SIZE,
};

use crate::{console::Console, input::ConsoleMoves};

mod console;
mod input;
mod logging;

fn main() -> anyhow::Result<()> {
    let default_size = DEFAULT_BOARD_SIZE.to_string();
    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line sea battle against the computer.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("length of each side of the board")
                .takes_value(true)
                .default_value(&default_size),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for fleet placement and the computer's moves")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("also show the computer's rejected shots"),
        )
        .get_matches();

    logging::init_logging();

    let size: usize = matches
        .value_of("size")
        .unwrap_or_default()
        .parse()
        .context("board size must be a positive number")?;
    let config = GameConfig::with_size(size);
    config.validate()?;

    let mut rng = match matches.value_of("seed") {
        Some(seed) => {
            let seed = seed.parse().context("seed must be a number")?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let first = choose_first(&matches, &mut rng);

    let generator = FleetGenerator::new(config);
    let own = generator
        .generate(&mut rng)
        .context("could not place your fleet")?;
    let mut rival = generator
        .generate(&mut rng)
        .context("could not place the computer's fleet")?;
    rival.set_hidden(true);

    let stdin = BufReader::new(io::stdin());
    let human = Player::new(own, Interactive::new(ConsoleMoves::new(stdin)));
    let bot = Player::new(
        rival,
        RandomStrategy::new(StdRng::seed_from_u64(rng.gen())),
    );

    console::welcome(&mut io::stdout())?;
    let mut game = Game::starting_with(human, bot, first);
    let mut console = Console::new(io::stdout()).with_verbose(matches.is_present("verbose"));
    match game.run(&mut console) {
        Ok(winner) => info!("game finished, {:?} won", winner),
        Err(GameError::Aborted(side)) => {
            info!("{:?} left the game", side);
            println!("Goodbye!");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Choose which [`Side`] moves first based on the command line, defaulting to the human.
fn choose_first(matches: &ArgMatches, rng: &mut impl Rng) -> Side {
    match matches
        .value_of("first_player")
        .map(|choice| choice.to_ascii_lowercase())
        .as_deref()
    {
        Some("computer") | Some("bot") => Side::Opponent,
        Some("random") | Some("rand") => {
            if rng.gen() {
                Side::Player
            } else {
                Side::Opponent
            }
        }
        _ => Side::Player,
    }
}
