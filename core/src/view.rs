use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single cell should display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Flagged,
    Opened(u8),
    Bomb,
}

impl VisibleCell {
    const fn glyph(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Bomb => '*',
            Self::Opened(0) => '.',
            Self::Opened(count) => (b'0' + count) as char,
        }
    }
}

/// Read-only snapshot of a grid as a presentation layer should draw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    pub size: Coord,
    pub version: u64,
    pub cells: Array2<VisibleCell>,
}

impl GridView {
    /// With `reveal_bombs` every unflagged bomb is shown, otherwise bombs look hidden.
    pub fn from_grid(grid: &Grid, reveal_bombs: bool) -> Self {
        let cells = grid.cells.map(|cell| {
            if cell.is_flagged() {
                VisibleCell::Flagged
            } else {
                match cell.state() {
                    CellState::Opened => VisibleCell::Opened(cell.label()),
                    CellState::Bomb if reveal_bombs => VisibleCell::Bomb,
                    CellState::Bomb | CellState::Empty => VisibleCell::Hidden,
                }
            }
        });

        Self {
            size: grid.size(),
            version: grid.version(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<VisibleCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn grid(size: Coord, bombs: &[Coord2]) -> Grid {
        FixedGridGenerator::new(bombs)
            .generate(GridConfig::new_unchecked(size, 0))
            .unwrap()
    }

    #[test]
    fn hidden_board_shows_nothing() {
        let grid = grid(3, &[(1, 1)]);
        let view = GridView::from_grid(&grid, false);

        assert!(view.cells.iter().all(|&cell| cell == VisibleCell::Hidden));
        assert_eq!(view.to_string(), "###\n###\n###\n");
    }

    #[test]
    fn reveal_bombs_exposes_unflagged_bombs() {
        let mut grid = grid(3, &[(1, 1), (2, 2)]);
        grid.toggle_flag((2, 2)).unwrap();

        let view = GridView::from_grid(&grid, true);

        assert_eq!(view.cell_at((1, 1)), Some(VisibleCell::Bomb));
        assert_eq!(view.cell_at((2, 2)), Some(VisibleCell::Flagged));
        assert_eq!(view.cell_at((0, 0)), Some(VisibleCell::Hidden));
        assert_eq!(view.cell_at((3, 0)), None);
        assert_eq!(view.cell_at((0, 3)), None);
    }

    #[test]
    fn opened_cells_show_labels_and_flags_win() {
        let mut grid = grid(4, &[(0, 3)]);
        grid.reveal((3, 0)).unwrap();
        grid.toggle_flag((3, 0)).unwrap();

        let view = GridView::from_grid(&grid, false);

        assert_eq!(view.cell_at((0, 2)), Some(VisibleCell::Opened(1)));
        assert_eq!(view.cell_at((2, 2)), Some(VisibleCell::Opened(0)));
        assert_eq!(view.cell_at((3, 0)), Some(VisibleCell::Flagged));
        assert_eq!(view.version, grid.version());
        assert_eq!(view.to_string(), "..1#\n..11\n....\nF...\n");
    }

    #[test]
    fn view_serializes_to_json() {
        let mut grid = grid(2, &[(1, 1)]);
        grid.reveal((0, 0)).unwrap();

        let json = serde_json::to_value(GridView::from_grid(&grid, false)).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["version"], 1);
        assert_eq!(json["cells"]["data"][0]["Opened"], 1);
        assert_eq!(json["cells"]["data"][3], "Hidden");
    }
}
