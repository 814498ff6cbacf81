//! Match configuration: grid dimension and ship roster.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

use crate::common::GameError;
use crate::ship::ShipType;

/// Dimension of the classic square grid.
pub const STANDARD_GRID_SIZE: u8 = 10;

/// The classic five-ship roster.
pub fn standard_fleet() -> Vec<ShipType> {
    vec![
        ShipType::new("Carrier", 5),
        ShipType::new("Battleship", 4),
        ShipType::new("Cruiser", 3),
        ShipType::new("Submarine", 3),
        ShipType::new("Destroyer", 2),
    ]
}

/// Validated match parameters: square grid dimension and the fleet each
/// player places before play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    grid_size: u8,
    fleet: Vec<ShipType>,
}

impl GameConfig {
    /// Build a configuration, rejecting rosters that could never be placed.
    pub fn new(grid_size: u8, fleet: Vec<ShipType>) -> Result<Self, GameError> {
        if grid_size == 0 {
            return Err(GameError::InvalidConfig("grid dimension must be at least one"));
        }
        if fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
        }
        if fleet.iter().any(|s| s.length() == 0) {
            return Err(GameError::InvalidConfig("ship length must be at least one"));
        }
        if fleet.iter().any(|s| s.length() > grid_size) {
            return Err(GameError::InvalidConfig("ship is longer than the grid"));
        }
        Ok(Self { grid_size, fleet })
    }

    /// Classic 10×10 configuration with the five standard ships.
    pub fn standard() -> Self {
        Self {
            grid_size: STANDARD_GRID_SIZE,
            fleet: standard_fleet(),
        }
    }

    /// Grid dimension (the grid is square).
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Ship roster each player places.
    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Total segment count across the fleet.
    pub fn total_segments(&self) -> usize {
        self.fleet.iter().map(|s| s.length() as usize).sum()
    }
}
