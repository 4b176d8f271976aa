//! Ship kinds, footprints and per-ship hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bearing::Bearing;
use crate::common::ShipError;
use crate::config::ship_kind_from_tag;
use crate::position::Position;

/// The five ship kinds of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipKind {
    Barge,
    Caravel,
    Carrack,
    Frigate,
    Galleon,
}

/// Galleon footprints as `(d_row, d_column)` offsets from the anchor.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Category name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Barge => "Barge",
            ShipKind::Caravel => "Caravel",
            ShipKind::Carrack => "Carrack",
            ShipKind::Frigate => "Frigate",
            ShipKind::Galleon => "Galleon",
        }
    }

    /// Portuguese console tag.
    pub const fn tag(self) -> &'static str {
        match self {
            ShipKind::Barge => "barca",
            ShipKind::Caravel => "caravela",
            ShipKind::Carrack => "nau",
            ShipKind::Frigate => "fragata",
            ShipKind::Galleon => "galeao",
        }
    }

    /// Footprint offsets for this kind facing `bearing`.
    fn footprint(self, bearing: Bearing) -> Result<Vec<(i32, i32)>, ShipError> {
        let size = self.size() as i32;
        let cells = match (self, bearing) {
            (_, Bearing::Unknown) => return Err(ShipError::InvalidBearing),
            (ShipKind::Galleon, Bearing::North) => GALLEON_NORTH.to_vec(),
            (ShipKind::Galleon, Bearing::South) => GALLEON_SOUTH.to_vec(),
            (ShipKind::Galleon, Bearing::East) => GALLEON_EAST.to_vec(),
            (ShipKind::Galleon, Bearing::West) => GALLEON_WEST.to_vec(),
            // Linear ships grow towards higher indices whichever way they
            // face along the axis.
            (_, Bearing::North | Bearing::South) => (0..size).map(|i| (i, 0)).collect(),
            (_, Bearing::East | Bearing::West) => (0..size).map(|i| (0, i)).collect(),
        };
        Ok(cells)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ship with a fixed footprint. The ship owns its positions; the only way
/// to mark one as hit is [`Ship::shoot`].
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    bearing: Bearing,
    anchor: Position,
    positions: Vec<Position>,
}

impl Ship {
    /// Build a ship of `kind` anchored at `anchor`, facing `bearing`.
    pub fn new(kind: ShipKind, bearing: Bearing, anchor: Position) -> Result<Self, ShipError> {
        let positions = kind
            .footprint(bearing)?
            .into_iter()
            .map(|(dr, dc)| anchor.offset(dr, dc))
            .collect();
        Ok(Ship {
            kind,
            bearing,
            anchor: Position::new(anchor.row(), anchor.column()),
            positions,
        })
    }

    /// Factory on a category tag (see [`ship_kind_from_tag`]).
    pub fn build(tag: &str, bearing: Bearing, anchor: Position) -> Result<Self, ShipError> {
        let kind = ship_kind_from_tag(tag).ok_or(ShipError::InvalidKind)?;
        Self::new(kind, bearing, anchor)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.name()
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// Position the footprint was computed from.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Occupied cells, in footprint order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn occupies(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p == pos)
    }

    /// True while at least one cell has not been hit.
    pub fn still_floating(&self) -> bool {
        self.positions.iter().any(|p| !p.is_hit())
    }

    pub fn hit_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_hit()).count()
    }

    /// True if any cell of `other` touches or overlaps this ship.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other.positions.iter().any(|p| self.too_close_to_position(p))
    }

    pub fn too_close_to_position(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p.is_adjacent_to(pos))
    }

    pub fn top_most(&self) -> i32 {
        self.positions.iter().map(Position::row).min().unwrap_or(self.anchor.row())
    }

    pub fn bottom_most(&self) -> i32 {
        self.positions.iter().map(Position::row).max().unwrap_or(self.anchor.row())
    }

    pub fn left_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::column)
            .min()
            .unwrap_or(self.anchor.column())
    }

    pub fn right_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::column)
            .max()
            .unwrap_or(self.anchor.column())
    }

    /// Record a shot at `pos`. Returns `true` if it struck this ship.
    pub fn shoot(&mut self, pos: &Position) -> bool {
        let mut struck = false;
        for cell in self.positions.iter_mut().filter(|p| **p == *pos) {
            cell.shoot();
            struck = true;
        }
        struck
    }

    /// Mark every cell as occupied once the ship joins a fleet.
    pub(crate) fn occupy(&mut self) {
        self.positions.iter_mut().for_each(Position::occupy);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, bearing: {:?}, anchor: {}, hits: {}/{} }}",
            self.kind,
            self.bearing,
            self.anchor,
            self.hit_count(),
            self.size(),
        )
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.kind, self.bearing, self.anchor)
    }
}
