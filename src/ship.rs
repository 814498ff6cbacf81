//! Ship classes and placed ships with per-segment damage tracking.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::common::GameError;

/// Orientation of a ship on the grid.
///
/// `Horizontal` runs along the x-axis, `Vertical` along the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Ship category: display name and segment count.
///
/// Categories are plain data so the roster can come from configuration
/// rather than a fixed table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipType {
    name: String,
    length: u8,
}

impl ShipType {
    /// Create a new ship category.
    pub fn new(name: impl Into<String>, length: u8) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Ship's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of segments.
    pub fn length(&self) -> u8 {
        self.length
    }
}

/// A ship placed on a grid, with one damage flag per segment.
///
/// Segment positions are computed once at construction and never change;
/// only the damage flags mutate afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipType,
    orientation: Orientation,
    cells: Vec<(u8, u8)>,
    hits: Vec<bool>,
}

impl Ship {
    /// Lay out a ship of `class` with its head at (`x`, `y`), extending
    /// along `orientation`, on a square grid of dimension `grid_size`.
    ///
    /// Fails with `OutOfBounds` when any computed segment would fall
    /// outside the grid.
    pub fn new(
        class: ShipType,
        x: u8,
        y: u8,
        orientation: Orientation,
        grid_size: u8,
    ) -> Result<Self, GameError> {
        let len = class.length();
        if len == 0 {
            return Err(GameError::InvalidConfig("ship length must be at least one"));
        }
        if x >= grid_size || y >= grid_size {
            return Err(GameError::OutOfBounds);
        }
        // far end checked in u16 so a head near 255 cannot wrap
        let reach = u16::from(len) - 1;
        let fits = match orientation {
            Orientation::Horizontal => u16::from(x) + reach < u16::from(grid_size),
            Orientation::Vertical => u16::from(y) + reach < u16::from(grid_size),
        };
        if !fits {
            return Err(GameError::OutOfBounds);
        }

        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (x + i, y),
                Orientation::Vertical => (x, y + i),
            })
            .collect::<Vec<_>>();
        let hits = cells.iter().map(|_| false).collect();
        Ok(Ship {
            class,
            orientation,
            cells,
            hits,
        })
    }

    /// Mark the segment at (`x`, `y`) as hit.
    ///
    /// Fails with `InvalidSegment` when the position is not one of this
    /// ship's segments. Re-marking an already-hit segment is harmless.
    pub fn register_hit(&mut self, x: u8, y: u8) -> Result<(), GameError> {
        match self.cells.iter().position(|&c| c == (x, y)) {
            Some(i) => {
                self.hits[i] = true;
                Ok(())
            }
            None => Err(GameError::InvalidSegment),
        }
    }

    /// `true` once every segment has been hit. Pure query.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Whether (`x`, `y`) is one of this ship's segments.
    pub fn contains(&self, x: u8, y: u8) -> bool {
        self.cells.iter().any(|&c| c == (x, y))
    }

    /// Segment positions in head-to-tail order.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells.iter().copied()
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// Ship's category.
    pub fn class(&self) -> &ShipType {
        &self.class
    }

    /// Head position (first segment).
    pub fn head(&self) -> (u8, u8) {
        self.cells[0]
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
