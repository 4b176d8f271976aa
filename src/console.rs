#![cfg(feature = "std")]

//! Token-driven command loop: build a fleet, then fire salvos at it.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::rngs::SmallRng;

use crate::{
    bearing::Bearing,
    common::ShipError,
    config::{FLEET_SIZE, SALVO_SIZE},
    fleet::Fleet,
    game::{Game, GameStats, ShotOutcome},
    position::Position,
    ship::Ship,
    ui,
};

const GOODBYE: &str = "Fair winds!";
const VICTORY: &str = "All ships sunk. The fleet is lost!";

/// Console commands, in Portuguese and in English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewFleet,
    RandomFleet,
    Status,
    Map,
    Salvo,
    Shots,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "nova" | "new" => Command::NewFleet,
            "aleatoria" | "random" => Command::RandomFleet,
            "estado" | "status" => Command::Status,
            "mapa" | "map" => Command::Map,
            "rajada" | "salvo" => Command::Salvo,
            "ver" | "shots" => Command::Shots,
            "desisto" | "quit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Result of reading a value from the token stream.
enum Input<T> {
    Value(T),
    /// A token that could not be parsed.
    Malformed(String),
    End,
}

/// Where the session goes after leaving a phase.
enum Flow {
    Play(Fleet),
    Quit,
}

/// Whitespace-separated tokens over a line reader.
struct Tokens<R> {
    read: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(read: R) -> Self {
        Self {
            read,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.read.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drop whatever is left of the current line.
    fn skip_line(&mut self) {
        self.pending.clear();
    }

    fn next_int(&mut self) -> io::Result<Input<i32>> {
        Ok(match self.next()? {
            None => Input::End,
            Some(token) => match token.parse() {
                Ok(n) => Input::Value(n),
                Err(_) => Input::Malformed(token),
            },
        })
    }
}

/// An interactive session. Output goes to `out`; diagnostics go through `log`.
pub struct Session<R, W> {
    input: Tokens<R>,
    out: W,
    rng: SmallRng,
    last_stats: Option<GameStats>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, rng: SmallRng) -> Self {
        Self {
            input: Tokens::new(input),
            out,
            rng,
            last_stats: None,
        }
    }

    /// Run until `quit` or end of input. Returns the statistics of the last
    /// game played, if any.
    pub fn run(mut self) -> anyhow::Result<Option<GameStats>> {
        let mut flow = self.setup()?;
        while let Flow::Play(mut fleet) = flow {
            flow = self.play(&mut fleet)?;
        }
        writeln!(self.out, "{}", GOODBYE)?;
        self.out.flush()?;
        Ok(self.last_stats)
    }

    /// Commands accepted before any fleet exists.
    fn setup(&mut self) -> anyhow::Result<Flow> {
        while let Some(word) = self.input.next()? {
            match Command::parse(&word) {
                Command::NewFleet => match self.read_fleet()? {
                    Some(fleet) => return Ok(Flow::Play(fleet)),
                    None => return Ok(Flow::Quit),
                },
                Command::RandomFleet => {
                    if let Some(fleet) = self.random_fleet()? {
                        return Ok(Flow::Play(fleet));
                    }
                }
                Command::Quit => return Ok(Flow::Quit),
                Command::Status | Command::Map | Command::Salvo | Command::Shots => {
                    writeln!(self.out, "No fleet yet. Use 'nova' or 'aleatoria' first.")?;
                }
                Command::Unknown(word) => self.unknown(&word)?,
            }
        }
        Ok(Flow::Quit)
    }

    /// Commands accepted while a game is running against `fleet`.
    fn play(&mut self, fleet: &mut Fleet) -> anyhow::Result<Flow> {
        let mut game = Game::new(fleet);
        self.last_stats = Some(game.stats());
        while let Some(word) = self.input.next()? {
            match Command::parse(&word) {
                Command::NewFleet => {
                    return Ok(match self.read_fleet()? {
                        Some(fleet) => Flow::Play(fleet),
                        None => Flow::Quit,
                    })
                }
                Command::RandomFleet => {
                    if let Some(fleet) = self.random_fleet()? {
                        return Ok(Flow::Play(fleet));
                    }
                }
                Command::Status => write!(self.out, "{}", ui::render_status(game.fleet()))?,
                Command::Map => write!(self.out, "{}", ui::render_fleet(game.fleet()))?,
                Command::Salvo => {
                    let more = self.salvo(&mut game)?;
                    self.last_stats = Some(game.stats());
                    if !more {
                        return Ok(Flow::Quit);
                    }
                }
                Command::Shots => write!(self.out, "{}", ui::render_shots(game.shots()))?,
                Command::Quit => return Ok(Flow::Quit),
                Command::Unknown(word) => self.unknown(&word)?,
            }
        }
        Ok(Flow::Quit)
    }

    /// Read ships until the fleet holds `FLEET_SIZE + 1` of them. Returns
    /// `None` if input ends first.
    fn read_fleet(&mut self) -> anyhow::Result<Option<Fleet>> {
        let mut fleet = Fleet::new();
        while fleet.len() <= FLEET_SIZE {
            match self.read_ship()? {
                Input::End => {
                    warn!("input ended while building a fleet");
                    return Ok(None);
                }
                Input::Malformed(token) => {
                    warn!("malformed ship description near {:?}", token);
                    self.input.skip_line();
                    writeln!(self.out, "Invalid coordinate: {}", token)?;
                }
                Input::Value(Err(ShipError::InvalidKind)) => {
                    writeln!(self.out, "Unknown ship!")?;
                }
                Input::Value(Err(ShipError::InvalidBearing)) => {
                    writeln!(self.out, "Invalid bearing!")?;
                }
                Input::Value(Ok(ship)) => {
                    if let Err(err) = fleet.add_ship(ship) {
                        let ship = err.ship();
                        writeln!(
                            self.out,
                            "Could not place {} {} {}: {}",
                            ship.category(),
                            ship.bearing(),
                            ship.anchor(),
                            err.reason()
                        )?;
                    }
                }
            }
        }
        info!("fleet of {} ships ready", fleet.len());
        writeln!(self.out, "{} ships added successfully!", fleet.len())?;
        Ok(Some(fleet))
    }

    fn random_fleet(&mut self) -> anyhow::Result<Option<Fleet>> {
        match Fleet::random(&mut self.rng) {
            Some(fleet) => {
                info!("random fleet of {} ships ready", fleet.len());
                writeln!(self.out, "{} ships placed at random!", fleet.len())?;
                Ok(Some(fleet))
            }
            None => {
                warn!("random fleet placement failed");
                writeln!(self.out, "Could not place a random fleet, try again.")?;
                Ok(None)
            }
        }
    }

    /// `kind row column bearing`
    fn read_ship(&mut self) -> io::Result<Input<Result<Ship, ShipError>>> {
        let Some(kind) = self.input.next()? else {
            return Ok(Input::End);
        };
        let anchor = match self.read_position()? {
            Input::Value(pos) => pos,
            Input::Malformed(token) => return Ok(Input::Malformed(token)),
            Input::End => return Ok(Input::End),
        };
        let Some(bearing) = self.input.next()? else {
            return Ok(Input::End);
        };
        let bearing = bearing.parse().unwrap_or(Bearing::Unknown);
        Ok(Input::Value(Ship::build(&kind, bearing, anchor)))
    }

    fn read_position(&mut self) -> io::Result<Input<Position>> {
        let row = match self.input.next_int()? {
            Input::Value(n) => n,
            Input::Malformed(token) => return Ok(Input::Malformed(token)),
            Input::End => return Ok(Input::End),
        };
        Ok(match self.input.next_int()? {
            Input::Value(column) => Input::Value(Position::new(row, column)),
            Input::Malformed(token) => Input::Malformed(token),
            Input::End => Input::End,
        })
    }

    /// Fire `SALVO_SIZE` shots and report. Returns `false` if input ended.
    fn salvo(&mut self, game: &mut Game<'_>) -> anyhow::Result<bool> {
        let mut more = true;
        for _ in 0..SALVO_SIZE {
            let pos = match self.read_position()? {
                Input::Value(pos) => pos,
                Input::Malformed(token) => {
                    warn!("malformed shot coordinate {:?}", token);
                    writeln!(self.out, "Invalid coordinate: {}", token)?;
                    continue;
                }
                Input::End => {
                    more = false;
                    break;
                }
            };
            if let ShotOutcome::Sunk(ship) = game.fire(pos) {
                info!("{} sunk at {}", ship, pos);
                writeln!(self.out, "You sank a {}!", ship.category())?;
            }
        }
        writeln!(
            self.out,
            "Hits: {} Invalid: {} Repeated: {} Remaining: {} ships.",
            game.hits(),
            game.invalid_shots(),
            game.repeated_shots(),
            game.remaining_ships()
        )?;
        if game.remaining_ships() == 0 {
            writeln!(self.out, "{}", VICTORY)?;
        }
        Ok(more)
    }

    fn unknown(&mut self, word: &str) -> io::Result<()> {
        warn!("unknown command {:?}", word);
        writeln!(self.out, "Unknown command: {}", word)
    }
}
