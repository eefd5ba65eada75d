use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid configuration: {bombs} bombs on a {size}x{size} grid")]
    InvalidConfiguration { size: Coord, bombs: CellCount },
    #[error("Coordinates {coords:?} are outside a {size}x{size} grid")]
    OutOfBounds { coords: Coord2, size: Coord },
    #[error("Cell id does not belong to this grid")]
    UnknownCell,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board cells disagree with its ids, labels or counters")]
    InconsistentGrid,
}

pub type Result<T> = core::result::Result<T, GridError>;
