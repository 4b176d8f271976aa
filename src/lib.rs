#![cfg_attr(not(feature = "std"), no_std)]

//! Fleet placement and shot resolution for a 10×10 naval battle.
//!
//! The engine (`Position`, `Ship`, `Fleet`, `Game`) is `no_std` + `alloc`.
//! The `std` feature adds text rendering, the console session and logging.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bearing;
mod common;
mod config;
mod fleet;
mod game;
mod position;
mod ship;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use bearing::Bearing;
pub use common::*;
pub use config::*;
pub use fleet::{Fleet, KindSummary};
pub use game::{Game, GameStats, GameStatus, ShotOutcome};
pub use position::Position;
pub use ship::{Ship, ShipKind};
#[cfg(feature = "std")]
pub use console::{Command, Session};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
