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
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use env_logger::Env;
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use seabattle::{board::CellRef, random::random_board, Board, Coordinate, ShotOutcome, Symbol};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SEABATTLE_LOG";

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "error")).init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Fire at a hidden fleet until every ship is drowned.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("R1,C1-R2,C2")
                .help("place a ship between two cells instead of a random fleet; repeatable")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|v| parse_ship(&v).map(|_| ())),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random fleet layout")
                .takes_value(true)
                .conflicts_with("ship"),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("show intact decks on the board"),
        )
        .get_matches();

    let mut board = build_board(&matches)?;
    let mut reveal = matches.is_present("reveal");

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut board, &mut input, &mut reveal)
}

/// Build the board from `--ship` arguments, or a random standard fleet.
fn build_board(matches: &ArgMatches) -> io::Result<Board> {
    let board = match matches.values_of("ship") {
        Some(ships) => {
            let ships = ships
                .map(parse_ship)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            Board::new(ships).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?
        }
        None => {
            let mut rng = if matches.is_present("seed") {
                StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
            } else {
                StdRng::from_entropy()
            };
            random_board(&mut rng).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
        }
    };
    debug!("playing with {} ships", board.iter_ships().count());
    Ok(board)
}

/// Parse a ship given as `r1,c1-r2,c2`.
fn parse_ship(text: &str) -> Result<(Coordinate, Coordinate), String> {
    /// Matcher for a pair of endpoints.
    static SHIP: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)\s*
        (?P<r1>[0-9]+)\s*,\s*(?P<c1>[0-9]+)\s*
        -\s*
        (?P<r2>[0-9]+)\s*,\s*(?P<c2>[0-9]+)\s*$",
        )
        .expect("ship pattern is valid")
    });
    let captures = SHIP
        .captures(text)
        .ok_or_else(|| format!("invalid ship {:?}, expected r1,c1-r2,c2", text))?;
    let num = |name: &str| -> Result<usize, String> {
        captures[name]
            .parse()
            .map_err(|_| format!("invalid number {:?} in ship {:?}", &captures[name], text))
    };
    Ok((
        Coordinate::new(num("r1")?, num("c1")?),
        Coordinate::new(num("r2")?, num("c2")?),
    ))
}

/// A line of player input during the game.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    Fire(String),
    Show,
    Reveal,
    Help,
    Quit,
}

/// Read a command. Anything that is not a keyword is treated as a location to fire at.
fn parse_command(input: &str) -> Option<Command> {
    /// Matcher for an explicit fire command.
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:fire|shoot|f)\s+(?:(?:at|on)\s+)?(?P<loc>.+)$")
            .expect("fire pattern is valid")
    });
    Some(match input {
        "" => return None,
        "?" | "help" | "h" => Command::Help,
        "board" | "show" => Command::Show,
        "reveal" => Command::Reveal,
        "quit" | "exit" | "q" => Command::Quit,
        other => match FIRE.captures(other) {
            Some(captures) => Command::Fire(captures["loc"].to_owned()),
            None => Command::Fire(other.to_owned()),
        },
    })
}

/// Run the fire loop until every ship is drowned or the player quits.
fn play(
    board: &mut Board,
    input: &mut InputReader<impl BufRead>,
    reveal: &mut bool,
) -> io::Result<()> {
    println!();
    println!(
        "{} ships afloat. Type help or ? for commands.",
        board.ships_afloat()
    );
    let mut shots = 0;
    let mut wasted = 0;
    while !board.defeated() {
        println!();
        show_board(board, *reveal);
        println!();
        match input.read_input_lower("> ", parse_command)? {
            Command::Fire(location) => match board.fire_str(&location) {
                Ok(outcome) => {
                    shots += 1;
                    if outcome.status().map_or(false, |status| !status.is_fresh()) {
                        wasted += 1;
                    }
                    println!("{}", outcome);
                    if let ShotOutcome::Sunk(_) = outcome {
                        println!("{} ships afloat.", board.ships_afloat());
                    }
                }
                Err(err) => println!("{}", Capitalized(&err)),
            },
            Command::Show => {}
            Command::Reveal => *reveal = !*reveal,
            Command::Quit => return Ok(()),
            Command::Help => {
                println!(
                    "Available Commands:
    <row>,<col>         fire at the given cell, for example \"3,4\" or \"3 4\".
    fire <row>,<col>    same as above.
    board               show the board again.
    reveal              toggle showing intact decks.
    quit                leave the game.

Board symbols:
    {}  water or unknown
    {}  intact deck (only when revealed)
    {}  struck deck
    {}  deck of a drowned ship",
                    Symbol::Water,
                    Symbol::Intact,
                    Symbol::Hit,
                    Symbol::Sunk,
                );
            }
        }
    }
    println!();
    show_board(board, true);
    println!();
    println!(
        "All ships drowned in {} shots ({} on decks already struck).",
        shots, wasted
    );
    Ok(())
}

/// Symbol for a cell, hiding intact decks unless revealed.
fn cell_symbol(cell: &CellRef, reveal: bool) -> Symbol {
    match cell.symbol() {
        Symbol::Intact if !reveal => Symbol::Water,
        symbol => symbol,
    }
}

/// Print out the board by printing the grid with row and column numbers.
fn show_board(board: &Board, reveal: bool) {
    print!("   ");
    for i in 0..board.dimensions().cols() {
        print!("{:^3}", i);
    }
    println!();
    for (i, row) in board.iter_rows().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^3}", cell_symbol(&cell, reveal));
        }
        println!();
    }
}

/// Display helper that upper-cases the first letter of a message.
struct Capitalized<'a, T>(&'a T);

impl<T: fmt::Display> fmt::Display for Capitalized<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.0.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_arguments() {
        assert_eq!(
            parse_ship("2,2-2,4"),
            Ok((Coordinate::new(2, 2), Coordinate::new(2, 4)))
        );
        assert_eq!(
            parse_ship(" 0 , 9 - 3 , 9 "),
            Ok((Coordinate::new(0, 9), Coordinate::new(3, 9)))
        );
        assert!(parse_ship("2,2").is_err());
        assert!(parse_ship("a,2-2,4").is_err());
        assert!(parse_ship("99999999999999999999999,0-0,0").is_err());
    }

    #[test]
    fn commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("3,4"), Some(Command::Fire("3,4".to_owned())));
        assert_eq!(
            parse_command("fire at 3 4"),
            Some(Command::Fire("3 4".to_owned()))
        );
        assert_eq!(parse_command("xyz"), Some(Command::Fire("xyz".to_owned())));
    }

    #[test]
    fn hidden_board_hides_intact_decks() {
        let mut board = Board::new(vec![((0, 0), (0, 1))]).unwrap();
        let cell = board.get_coord((0, 1).into()).unwrap();
        assert_eq!(cell_symbol(&cell, false), Symbol::Water);
        assert_eq!(cell_symbol(&cell, true), Symbol::Intact);
        board.fire((0, 1).into()).unwrap();
        let cell = board.get_coord((0, 1).into()).unwrap();
        assert_eq!(cell_symbol(&cell, false), Symbol::Hit);
    }

    #[test]
    fn capitalizes_errors() {
        let mut board = Board::new(vec![((0, 0), (0, 1))]).unwrap();
        let err = board.fire_str("12,3").unwrap_err();
        assert_eq!(
            Capitalized(&err).to_string(),
            "Location (12, 3) isn't correct, must be in range (0-9, 0-9)"
        );
    }
}
