#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
