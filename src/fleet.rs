//! A player's fleet: placement legality and spatial queries.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::bearing::Bearing;
use crate::common::{PlacementError, Rejection};
use crate::config::{BOARD_SIZE, FLEET_SIZE, STANDARD_FLEET};
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Attempts made to place a single ship at random before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;
/// Whole-fleet restarts made by [`Fleet::random`].
const FLEET_ATTEMPTS: usize = 1000;

/// Per-kind counts reported by [`Fleet::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct KindSummary {
    pub kind: ShipKind,
    pub total: usize,
    pub floating: usize,
}

/// Ships in placement order. No two ships touch, diagonals included, and
/// every ship lies fully on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// An empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Build a [`STANDARD_FLEET`] with random legal placements. Returns
    /// `None` only if every restart ran out of room.
    pub fn random<R: Rng>(rng: &mut R) -> Option<Self> {
        'restart: for attempt in 0..FLEET_ATTEMPTS {
            let mut fleet = Fleet::new();
            for (kind, count) in STANDARD_FLEET {
                for _ in 0..count {
                    match fleet.random_ship(rng, kind) {
                        Some(ship) => fleet.add_ship(ship).ok()?,
                        None => {
                            trace!("random fleet attempt {} ran out of room", attempt);
                            continue 'restart;
                        }
                    }
                }
            }
            return Some(fleet);
        }
        None
    }

    /// Find a random placement for a ship of `kind` that this fleet would
    /// accept. The fleet itself is not modified.
    pub fn random_ship<R: Rng>(&self, rng: &mut R, kind: ShipKind) -> Option<Ship> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let bearing = Bearing::VALID[rng.random_range(0..Bearing::VALID.len())];
            let anchor = Position::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            // Valid bearings always build.
            let Ok(ship) = Ship::new(kind, bearing, anchor) else {
                continue;
            };
            if self.check_placement(&ship).is_ok() {
                return Some(ship);
            }
        }
        None
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Decide whether `ship` would be admitted, without adding it.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), Rejection> {
        if self.ships.len() > FLEET_SIZE {
            return Err(Rejection::FleetFull);
        }
        if !Self::is_inside_board(ship) {
            return Err(Rejection::OutOfBounds);
        }
        if self.ships.iter().any(|other| other.too_close_to(ship)) {
            return Err(Rejection::TooClose);
        }
        Ok(())
    }

    /// Add `ship` if it passes [`Fleet::check_placement`]. On rejection the
    /// fleet is untouched and the ship is handed back inside the error.
    pub fn add_ship(&mut self, mut ship: Ship) -> Result<(), PlacementError> {
        if let Err(reason) = self.check_placement(&ship) {
            debug!("rejected {}: {}", ship, reason);
            return Err(PlacementError::new(reason, ship));
        }
        ship.occupy();
        debug!("placed {} ({} ships)", ship, self.ships.len() + 1);
        self.ships.push(ship);
        Ok(())
    }

    /// Ships of the given kind, in placement order.
    pub fn ships_like(&self, kind: ShipKind) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.kind() == kind).collect()
    }

    /// Ships with at least one cell not yet hit.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.still_floating()).collect()
    }

    /// First ship, in placement order, occupying `pos`.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(pos))
    }

    pub(crate) fn ship_at_mut(&mut self, pos: &Position) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(pos))
    }

    /// Total and floating counts for every ship kind, largest kind first.
    pub fn summary(&self) -> Vec<KindSummary> {
        ShipKind::ALL
            .iter()
            .rev()
            .map(|&kind| {
                let ships = self.ships_like(kind);
                KindSummary {
                    kind,
                    total: ships.len(),
                    floating: ships.iter().filter(|s| s.still_floating()).count(),
                }
            })
            .collect()
    }

    fn is_inside_board(ship: &Ship) -> bool {
        ship.left_most() >= 0
            && ship.right_most() < BOARD_SIZE
            && ship.top_most() >= 0
            && ship.bottom_most() < BOARD_SIZE
    }
}
