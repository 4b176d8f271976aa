//! Shot resolution against a fleet, with statistics.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Classification of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome<'a> {
    /// Outside the board; only counted.
    Invalid,
    /// Already fired at; only counted.
    Repeated,
    /// Open water.
    Miss,
    /// Struck a ship that is still floating.
    Hit(ShipKind),
    /// Struck the last intact cell of this ship.
    Sunk(&'a Ship),
}

impl<'a> ShotOutcome<'a> {
    /// The ship this shot sank, if any. A hit that leaves the ship afloat
    /// yields `None`, same as a miss.
    pub fn sunk(&self) -> Option<&'a Ship> {
        match self {
            ShotOutcome::Sunk(ship) => Some(ship),
            _ => None,
        }
    }

    /// True for hits, sinking or not.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_) | ShotOutcome::Sunk(_))
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// No valid shot recorded yet.
    Idle,
    /// Shots recorded and ships still floating.
    InProgress,
    /// Every ship sunk.
    Over,
}

/// Snapshot of the game counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameStats {
    pub shots: usize,
    pub hits: usize,
    pub invalid_shots: usize,
    pub repeated_shots: usize,
    pub sunk_ships: usize,
    pub remaining_ships: usize,
    pub status: GameStatus,
}

/// A match fired against one fleet. The fleet is borrowed for the whole game,
/// which therefore cannot outlive it.
#[derive(Debug)]
pub struct Game<'f> {
    fleet: &'f mut Fleet,
    shots: Vec<Position>,
    invalid_shots: usize,
    repeated_shots: usize,
    hits: usize,
    sunk_ships: usize,
}

impl<'f> Game<'f> {
    /// Start a game against `fleet`.
    pub fn new(fleet: &'f mut Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            invalid_shots: 0,
            repeated_shots: 0,
            hits: 0,
            sunk_ships: 0,
        }
    }

    /// The fleet under fire.
    pub fn fleet(&self) -> &Fleet {
        self.fleet
    }

    /// Fire at `pos` and classify the shot. Out-of-board and repeated shots
    /// are only counted and leave the rest of the state untouched.
    pub fn fire(&mut self, pos: Position) -> ShotOutcome<'_> {
        if !Self::valid_shot(&pos) {
            self.invalid_shots += 1;
            trace!("invalid shot at {}", pos);
            return ShotOutcome::Invalid;
        }
        if self.shots.contains(&pos) {
            self.repeated_shots += 1;
            trace!("repeated shot at {}", pos);
            return ShotOutcome::Repeated;
        }
        self.shots.push(Position::new(pos.row(), pos.column()));

        let Some(ship) = self.fleet.ship_at_mut(&pos) else {
            trace!("miss at {}", pos);
            return ShotOutcome::Miss;
        };
        ship.shoot(&pos);
        self.hits += 1;
        if ship.still_floating() {
            debug!("hit {} at {}", ship, pos);
            ShotOutcome::Hit(ship.kind())
        } else {
            self.sunk_ships += 1;
            debug!("sank {} at {}", ship, pos);
            ShotOutcome::Sunk(ship)
        }
    }

    /// Fire every position in turn, returning the kinds sunk along the way.
    pub fn fire_salvo<I>(&mut self, salvo: I) -> Vec<ShipKind>
    where
        I: IntoIterator<Item = Position>,
    {
        salvo
            .into_iter()
            .filter_map(|pos| self.fire(pos).sunk().map(Ship::kind))
            .collect()
    }

    /// Valid, non-repeated shots in firing order.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    /// Ships still floating, counted from the fleet on every call.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.floating_ships().len()
    }

    pub fn status(&self) -> GameStatus {
        if self.remaining_ships() == 0 {
            GameStatus::Over
        } else if self.shots.is_empty() {
            GameStatus::Idle
        } else {
            GameStatus::InProgress
        }
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            shots: self.shots.len(),
            hits: self.hits,
            invalid_shots: self.invalid_shots,
            repeated_shots: self.repeated_shots,
            sunk_ships: self.sunk_ships,
            remaining_ships: self.remaining_ships(),
            status: self.status(),
        }
    }

    fn valid_shot(pos: &Position) -> bool {
        (0..BOARD_SIZE).contains(&pos.row()) && (0..BOARD_SIZE).contains(&pos.column())
    }
}
