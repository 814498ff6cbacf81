//! Turn coordinator: serializes play between two grids, exposes the one
//! legal action per turn, and derives the win condition.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::{format, string::String};

use crate::common::{GameError, ShotOutcome};
use crate::grid::Grid;
use crate::player::Player;

/// Position within the current turn.
///
/// A turn is one shot: `AwaitingShot` → [`Game::fire_shot`] →
/// `ShotResolved` → [`Game::end_turn`] → `AwaitingShot` for the other
/// player. A sink that empties the target grid ends the match instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    AwaitingShot,
    ShotResolved,
}

/// A match between exactly two players, each owning one grid.
///
/// All mutation flows through `fire_shot` and `end_turn`; the borrow
/// checker keeps the presentation layer on the read-only accessors.
#[derive(Debug)]
pub struct Game {
    grids: [Grid; 2],
    active: usize,
    turn: TurnState,
    winner: Option<usize>,
    sunk_notice: Option<String>,
    shots_fired: u32,
}

impl Game {
    /// Start a match. Both grids must already hold their fleets; the owner
    /// of `first` shoots first.
    pub fn new(first: Grid, second: Grid) -> Result<Self, GameError> {
        let mut grids = [first, second];
        if grids.iter().any(|g| g.ships().is_empty()) {
            return Err(GameError::FleetNotPlaced);
        }
        grids[0].set_active(true);
        grids[1].set_active(false);
        Ok(Game {
            grids,
            active: 0,
            turn: TurnState::AwaitingShot,
            winner: None,
            sunk_notice: None,
            shots_fired: 0,
        })
    }

    /// Fire at (`x`, `y`) on the opponent's grid.
    ///
    /// Legal exactly once per turn (`IllegalTurn` on a second attempt) and
    /// only while no winner is decided (`MatchOver`). On a sink, composes
    /// the notice for the presentation layer; on the sink that empties the
    /// target grid, the active player wins and the match ends.
    pub fn fire_shot(&mut self, x: u8, y: u8) -> Result<ShotOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::MatchOver);
        }
        if self.turn != TurnState::AwaitingShot {
            return Err(GameError::IllegalTurn);
        }
        let target = 1 - self.active;
        let outcome = self.grids[target].shoot(x, y)?;
        self.turn = TurnState::ShotResolved;
        self.shots_fired += 1;

        if let ShotOutcome::Sunk(ref ship) = outcome {
            let shooter = self.grids[self.active].player().name();
            self.sunk_notice = Some(format!("{} has sunk your {}", shooter, ship));
            if !self.grids[target].ships_remaining() {
                self.winner = Some(self.active);
                log::info!(
                    "{} wins after {} shots",
                    self.grids[self.active].player().name(),
                    self.shots_fired
                );
            }
        }
        Ok(outcome)
    }

    /// Pre-shot legality check for the input layer: `true` iff the match
    /// is still running and the target cell is in bounds and not yet
    /// viewable. Calling this before `fire_shot` keeps `AlreadyShot` and
    /// `OutOfBounds` from ever surfacing as user-facing errors.
    pub fn is_shootable(&self, x: u8, y: u8) -> bool {
        let target = &self.grids[1 - self.active];
        self.winner.is_none() && target.bounds_check(x, y) && !target.is_viewable(x, y)
    }

    /// Hand the turn to the other player.
    ///
    /// Legal only after this turn's shot resolved (`IllegalTurn`
    /// otherwise, `MatchOver` once a winner is decided). Swaps the grids'
    /// active flags and clears any pending sunk notice.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::MatchOver);
        }
        if self.turn != TurnState::ShotResolved {
            return Err(GameError::IllegalTurn);
        }
        self.grids[self.active].set_active(false);
        self.active = 1 - self.active;
        self.grids[self.active].set_active(true);
        self.turn = TurnState::AwaitingShot;
        self.sunk_notice = None;
        log::debug!("turn passes to {}", self.grids[self.active].player().name());
        Ok(())
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.grids[self.active].player()
    }

    /// The player being fired upon.
    pub fn opponent(&self) -> &Player {
        self.grids[1 - self.active].player()
    }

    /// The active player's own grid.
    pub fn active_grid(&self) -> &Grid {
        &self.grids[self.active]
    }

    /// The grid currently being fired upon.
    pub fn target_grid(&self) -> &Grid {
        &self.grids[1 - self.active]
    }

    /// Notification text for the most recent sink, until the turn ends.
    /// Display timing is the presentation layer's concern.
    pub fn sunk_notice(&self) -> Option<&str> {
        self.sunk_notice.as_deref()
    }

    /// The winner, once the match is decided.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|w| self.grids[w].player())
    }

    /// Whether a winner has been decided.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Where the current turn stands.
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    /// Total shots resolved across both players.
    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }
}
