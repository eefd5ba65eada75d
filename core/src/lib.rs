#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;
pub use view::*;

mod cell;
mod error;
mod generator;
mod grid;
mod reveal;
mod types;
mod view;

/// Maximum row or column distance from the clicked cell that a reveal spreads to.
pub const DEFAULT_REVEAL_RADIUS: Coord = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord,
    pub bombs: CellCount,
    pub reveal_radius: Coord,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord, bombs: CellCount) -> Self {
        Self {
            size,
            bombs,
            reveal_radius: DEFAULT_REVEAL_RADIUS,
        }
    }

    pub fn new(size: Coord, bombs: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, bombs);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_reveal_radius(self, reveal_radius: Coord) -> Self {
        Self {
            reveal_radius,
            ..self
        }
    }

    /// A grid needs at least one cell and at least one cell that is not a bomb.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.bombs >= self.total_cells() {
            Err(GridError::InvalidConfiguration {
                size: self.size,
                bombs: self.bombs,
            })
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new_unchecked(12, 33)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    /// Flag toggles always change the grid.
    pub const fn has_update(self) -> bool {
        true
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Opened(CellCount),
    HitBomb,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Opened(_) => true,
            HitBomb => false,
        }
    }
}
