//! Common types for the combat core: shot outcomes and the error taxonomy.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Result of resolving a shot against a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot hit a ship segment without finishing the ship.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot finished the last unhit segment; carries the ship's class name.
    Sunk(String),
}

/// Errors returned by grid and coordinator operations.
///
/// Every variant is a recoverable validation failure: the operation that
/// produced it left all game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate or ship footprint falls outside the grid.
    OutOfBounds,
    /// Ship placement collides with an already-placed ship.
    OverlapConflict,
    /// The targeted cell has already been shot.
    AlreadyShot,
    /// Hit registered at a position that is not one of the ship's segments.
    InvalidSegment,
    /// Placement attempted after the grid has come under fire.
    PlacementClosed,
    /// No non-overlapping position found for the ship.
    UnableToPlaceShip,
    /// A match was started with a grid that has no ships.
    FleetNotPlaced,
    /// Action out of order for the current turn.
    IllegalTurn,
    /// Action attempted after a winner was decided.
    MatchOver,
    /// Rejected game configuration.
    InvalidConfig(&'static str),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the grid"),
            GameError::OverlapConflict => write!(f, "Ship placement overlaps another ship"),
            GameError::AlreadyShot => write!(f, "Cell has already been shot"),
            GameError::InvalidSegment => write!(f, "Position is not a segment of the ship"),
            GameError::PlacementClosed => write!(f, "Placement is closed once the grid is under fire"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::FleetNotPlaced => write!(f, "Grid has no ships placed"),
            GameError::IllegalTurn => write!(f, "Action is out of order for this turn"),
            GameError::MatchOver => write!(f, "The match is already over"),
            GameError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}
