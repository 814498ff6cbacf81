//! Per-player grid state: ship placement, shot resolution, and the
//! read-only queries the presentation layer renders from.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec, vec::Vec};
#[cfg(feature = "std")]
use std::{string::ToString, vec, vec::Vec};

use rand::Rng;

use crate::common::{GameError, ShotOutcome};
use crate::player::Player;
use crate::ship::{Orientation, Ship, ShipType};

/// One grid cell: the ship occupying it, if any, and whether it has been
/// shot. The shot flag is monotonic; nothing ever clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cell {
    ship: Option<usize>,
    shot: bool,
}

/// A player's square grid of cells, stored row-major.
///
/// Created empty and unshot; ships attach during the placement phase, and
/// the first incoming shot closes that phase for good. Mutation happens
/// only through [`Grid::place_ship`] and [`Grid::shoot`]; everything else
/// is a pure query, so a renderer can hold `&Grid` and never see a
/// half-updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    afloat: usize,
    player: Player,
    active: bool,
    under_fire: bool,
}

impl Grid {
    /// Create an empty grid of dimension `size` owned by `player`.
    pub fn new(size: u8, player: Player) -> Self {
        Grid {
            size,
            cells: vec![Cell::default(); size as usize * size as usize],
            ships: Vec::new(),
            afloat: 0,
            player,
            active: false,
            under_fire: false,
        }
    }

    fn index(&self, x: u8, y: u8) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Dimension of one side. The grid is square.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The player who owns this grid.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Whether (`x`, `y`) lies inside the grid.
    pub fn bounds_check(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size
    }

    /// Place a ship of `class` with its head at (`x`, `y`).
    ///
    /// Validates the full footprint before touching anything: every
    /// segment must be in bounds (`OutOfBounds`) and unclaimed
    /// (`OverlapConflict`), and the grid must not yet have come under
    /// fire (`PlacementClosed`). On failure the grid is unchanged.
    pub fn place_ship(
        &mut self,
        class: ShipType,
        x: u8,
        y: u8,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.under_fire {
            return Err(GameError::PlacementClosed);
        }
        let ship = Ship::new(class, x, y, orientation, self.size)?;
        if ship
            .cells()
            .any(|(cx, cy)| self.cells[self.index(cx, cy)].ship.is_some())
        {
            return Err(GameError::OverlapConflict);
        }
        let id = self.ships.len();
        for (cx, cy) in ship.cells() {
            let i = self.index(cx, cy);
            self.cells[i].ship = Some(id);
        }
        log::debug!(
            "{} placed at ({}, {}) {:?} on {}'s grid",
            ship.class().name(),
            x,
            y,
            orientation,
            self.player.name()
        );
        self.ships.push(ship);
        self.afloat += 1;
        Ok(())
    }

    /// Find a non-overlapping (`x`, `y`, orientation) for a ship of
    /// `class`, by bounded random retry.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        class: &ShipType,
    ) -> Result<(u8, u8, Orientation), GameError> {
        let len = class.length();
        if len == 0 || len > self.size {
            return Err(GameError::UnableToPlaceShip);
        }
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.size - len, self.size - 1),
                Orientation::Vertical => (self.size - 1, self.size - len),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let ship = Ship::new(class.clone(), x, y, orientation, self.size)?;
            if ship
                .cells()
                .all(|(cx, cy)| self.cells[self.index(cx, cy)].ship.is_none())
            {
                return Ok((x, y, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// Place every ship in `fleet` at a random position.
    pub fn place_fleet_random<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
    ) -> Result<(), GameError> {
        for class in fleet {
            let (x, y, orientation) = self.random_placement(rng, class)?;
            self.place_ship(class.clone(), x, y, orientation)?;
        }
        Ok(())
    }

    /// Resolve a shot at (`x`, `y`).
    ///
    /// Fails with `OutOfBounds` outside the grid and `AlreadyShot` on a
    /// resolved cell; re-shooting never changes state. Otherwise marks the
    /// cell shot and reports `Miss`, `Hit`, or `Sunk` when this shot
    /// finished the ship's last unhit segment.
    pub fn shoot(&mut self, x: u8, y: u8) -> Result<ShotOutcome, GameError> {
        if !self.bounds_check(x, y) {
            return Err(GameError::OutOfBounds);
        }
        let i = self.index(x, y);
        if self.cells[i].shot {
            return Err(GameError::AlreadyShot);
        }
        let outcome = match self.cells[i].ship {
            None => ShotOutcome::Miss,
            Some(s) => {
                self.ships[s].register_hit(x, y)?;
                if self.ships[s].is_sunk() {
                    self.afloat -= 1;
                    ShotOutcome::Sunk(self.ships[s].class().name().to_string())
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        self.cells[i].shot = true;
        self.under_fire = true;
        log::debug!(
            "shot at ({}, {}) on {}'s grid: {:?}",
            x,
            y,
            self.player.name(),
            outcome
        );
        Ok(outcome)
    }

    /// Whether the cell's content may be revealed to the opponent, i.e.
    /// whether it has been shot. Out-of-range coordinates read `false`.
    pub fn is_viewable(&self, x: u8, y: u8) -> bool {
        self.bounds_check(x, y) && self.cells[self.index(x, y)].shot
    }

    /// Whether a ship segment occupies the cell. Out-of-range coordinates
    /// read `false`.
    pub fn is_ship(&self, x: u8, y: u8) -> bool {
        self.bounds_check(x, y) && self.cells[self.index(x, y)].ship.is_some()
    }

    /// Category of the ship occupying (`x`, `y`), or `None` when the cell
    /// holds no ship.
    pub fn ship_type_at(&self, x: u8, y: u8) -> Option<&ShipType> {
        if !self.bounds_check(x, y) {
            return None;
        }
        self.cells[self.index(x, y)]
            .ship
            .map(|s| self.ships[s].class())
    }

    /// `true` while at least one placed ship has an unhit segment. Once
    /// this reads `false`, the grid's owner has lost.
    pub fn ships_remaining(&self) -> bool {
        self.afloat > 0
    }

    /// Ships placed on this grid, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether this grid's owner is the currently active player.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark this grid's owner active or inactive for the current turn.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
