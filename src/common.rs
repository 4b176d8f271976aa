//! Error types shared by ship construction and fleet placement.

use core::fmt;

use crate::ship::Ship;

/// Errors returned when constructing a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// The bearing is `Unknown` or not usable for the ship kind.
    InvalidBearing,
    /// The category tag does not name any ship kind.
    InvalidKind,
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidBearing => write!(f, "Invalid bearing for ship"),
            ShipError::InvalidKind => write!(f, "Unknown ship type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}

/// Reason a fleet refused a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The fleet already holds more than `FLEET_SIZE` ships.
    FleetFull,
    /// Part of the ship's footprint lies outside the board.
    OutOfBounds,
    /// The ship overlaps or touches (diagonals included) another ship.
    TooClose,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::FleetFull => write!(f, "fleet is full"),
            Rejection::OutOfBounds => write!(f, "ship placement is out of bounds"),
            Rejection::TooClose => write!(f, "ship is too close to another ship"),
        }
    }
}

/// Error returned by `Fleet::add_ship`. Carries the rejected ship back to the
/// caller so it can be inspected or retried elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementError {
    reason: Rejection,
    ship: Ship,
}

impl PlacementError {
    pub(crate) fn new(reason: Rejection, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Why the ship was refused.
    pub fn reason(&self) -> Rejection {
        self.reason
    }

    /// The ship that was refused.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the refused ship.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {}: {}", self.ship, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
