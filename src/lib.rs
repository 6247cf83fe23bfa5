#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod player;
mod report;
mod session;
mod ship;
mod turn;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use player::{RandomShooter, ScriptedSource, ShotSource};
#[cfg(feature = "std")]
pub use player::CliSource;
pub use report::*;
pub use session::*;
pub use ship::*;
pub use turn::*;
#[cfg(feature = "std")]
pub use ui::*;
