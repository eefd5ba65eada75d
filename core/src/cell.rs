use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};
use serde::{Deserialize, Serialize};

use crate::CellCount;

static NEXT_EPOCH: AtomicU32 = AtomicU32::new(1);

/// Hands out a fresh epoch for every grid built in this process.
pub(crate) fn next_epoch() -> u32 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Bomb,
    Empty,
    Opened,
}

impl CellState {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_opened(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Stable identity of a cell: the epoch of the grid that created it and the cell's 1-based
/// row-major ordinal within that grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    epoch: u32,
    ordinal: CellCount,
}

impl CellId {
    pub(crate) const fn new(epoch: u32, ordinal: CellCount) -> Self {
        Self { epoch, ordinal }
    }

    pub const fn epoch(self) -> u32 {
        self.epoch
    }

    pub const fn ordinal(self) -> CellCount {
        self.ordinal
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.epoch, self.ordinal)
    }
}

/// One grid unit. `id` and `label` are fixed when the grid is built; only the grid mutates
/// `state` and `is_flagged`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    label: u8,
    pub(crate) is_flagged: bool,
    pub(crate) state: CellState,
}

impl Cell {
    pub(crate) const fn new(id: CellId, state: CellState, label: u8) -> Self {
        Self {
            id,
            label,
            is_flagged: false,
            state,
        }
    }

    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Number of bombs among the 8 neighbors, always 0 for a bomb cell.
    pub const fn label(&self) -> u8 {
        self.label
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn state(&self) -> CellState {
        self.state
    }
}
