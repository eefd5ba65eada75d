use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A square board of cells, owned by the caller and mutated in place.
///
/// Every effective mutation bumps [`Grid::version`], so a presentation layer can tell when
/// to re-render without keeping its own copy of the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    config: GridConfig,
    epoch: u32,
    pub(crate) cells: Array2<Cell>,
    pub(crate) version: u64,
    pub(crate) opened_count: CellCount,
    flagged_count: CellCount,
}

impl Grid {
    /// Builds a fresh grid with bombs wherever `bomb_mask` is set and labels computed from it.
    ///
    /// `config.bombs` is replaced with the number of bombs actually in the mask.
    pub(crate) fn from_bomb_mask(config: GridConfig, bomb_mask: &Array2<bool>) -> Self {
        let epoch = next_epoch();
        let size = config.size;
        let bounds = (size, size);

        let cells = Array2::from_shape_fn((usize::from(size), usize::from(size)), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let id = CellId::new(epoch, index_of(coords, size) + 1);
            if bomb_mask[coords.to_nd_index()] {
                Cell::new(id, CellState::Bomb, 0)
            } else {
                let label = NeighborIter::adjacent(coords, bounds)
                    .filter(|&pos| bomb_mask[pos.to_nd_index()])
                    .count() as u8;
                Cell::new(id, CellState::Empty, label)
            }
        });

        let bombs = cells.iter().filter(|cell| cell.state.is_bomb()).count() as CellCount;

        Self {
            config: GridConfig { bombs, ..config },
            epoch,
            cells,
            version: 0,
            opened_count: 0,
            flagged_count: 0,
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn bomb_count(&self) -> CellCount {
        self.config.bombs
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Number of effective mutations applied since the grid was generated.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Epoch shared by the ids of every cell in this grid.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GridError::OutOfBounds { coords, size })
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    /// Row-major iterator over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn position_of(&self, id: CellId) -> Option<Coord2> {
        if id.epoch() != self.epoch || id.ordinal() == 0 || id.ordinal() > self.total_cells() {
            return None;
        }
        Some(coords_of(id.ordinal() - 1, self.size()))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_flagged = !cell.is_flagged;
        let outcome = if cell.is_flagged {
            self.flagged_count += 1;
            MarkOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            MarkOutcome::Unflagged
        };
        self.version += 1;

        log::trace!("flag toggled at {coords:?}: {outcome:?}");
        Ok(outcome)
    }

    pub fn toggle_flag_id(&mut self, id: CellId) -> Result<MarkOutcome> {
        let coords = self.position_of(id).ok_or(GridError::UnknownCell)?;
        self.toggle_flag(coords)
    }
}

/// Unchecked form of [`Grid`] as it arrives from a deserializer.
#[derive(Deserialize)]
struct RawGrid {
    config: GridConfig,
    epoch: u32,
    cells: Array2<Cell>,
    version: u64,
    opened_count: CellCount,
    flagged_count: CellCount,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    /// Rejects boards whose shape, ids, labels or counters do not match their cells.
    fn try_from(raw: RawGrid) -> Result<Self> {
        raw.config.validate()?;

        let size = raw.config.size;
        let bounds = (size, size);
        if raw.cells.dim() != (usize::from(size), usize::from(size)) {
            return Err(GridError::InvalidBoardShape);
        }

        let (mut bombs, mut opened, mut flagged): (CellCount, CellCount, CellCount) = (0, 0, 0);
        for ((row, col), cell) in raw.cells.indexed_iter() {
            let coords = (row as Coord, col as Coord);
            let label = if cell.state.is_bomb() {
                0
            } else {
                NeighborIter::adjacent(coords, bounds)
                    .filter(|&pos| raw.cells[pos.to_nd_index()].state.is_bomb())
                    .count() as u8
            };
            if cell.id() != CellId::new(raw.epoch, index_of(coords, size) + 1)
                || cell.label() != label
            {
                return Err(GridError::InconsistentGrid);
            }

            bombs += CellCount::from(cell.state.is_bomb());
            opened += CellCount::from(cell.state.is_opened());
            flagged += CellCount::from(cell.is_flagged);
        }

        if bombs != raw.config.bombs
            || opened != raw.opened_count
            || flagged != raw.flagged_count
        {
            return Err(GridError::InconsistentGrid);
        }

        Ok(Self {
            config: raw.config,
            epoch: raw.epoch,
            cells: raw.cells,
            version: raw.version,
            opened_count: raw.opened_count,
            flagged_count: raw.flagged_count,
        })
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
