use alloc::vec;

use crate::*;

impl Grid {
    /// Opens the cell at `start` and spreads orthogonally through unopened safe cells.
    ///
    /// The fill never enters bombs or already opened cells, and never goes further than
    /// `reveal_radius` rows or columns away from `start`. Flags do not stop it. Revealing a
    /// bomb directly changes nothing and reports [`RevealOutcome::HitBomb`].
    pub fn reveal(&mut self, start: Coord2) -> Result<RevealOutcome> {
        let start = self.validate_coords(start)?;

        let outcome = match self.cells[start.to_nd_index()].state {
            CellState::Bomb => RevealOutcome::HitBomb,
            CellState::Opened => RevealOutcome::NoChange,
            CellState::Empty => RevealOutcome::Opened(self.flood_open(start)),
        };
        if outcome.has_update() {
            self.version += 1;
        }

        log::trace!("reveal at {start:?}: {outcome:?}");
        Ok(outcome)
    }

    pub fn reveal_id(&mut self, id: CellId) -> Result<RevealOutcome> {
        let coords = self.position_of(id).ok_or(GridError::UnknownCell)?;
        self.reveal(coords)
    }

    fn flood_open(&mut self, start: Coord2) -> CellCount {
        let radius = self.config().reveal_radius;
        let bounds = (self.size(), self.size());
        let mut opened = 0;

        let mut to_visit = vec![start];
        while let Some(coords) = to_visit.pop() {
            if !within_radius(start, coords, radius) {
                continue;
            }

            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.state != CellState::Empty {
                continue;
            }
            cell.state = CellState::Opened;
            opened += 1;

            to_visit.extend(NeighborIter::orthogonal(coords, bounds));
        }

        self.opened_count += opened;
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::ops::RangeInclusive;

    fn grid(size: Coord, bombs: &[Coord2]) -> Grid {
        FixedGridGenerator::new(bombs)
            .generate(GridConfig::new_unchecked(size, 0))
            .unwrap()
    }

    fn opened(grid: &Grid) -> Vec<Coord2> {
        grid.iter()
            .filter(|(_, cell)| cell.state().is_opened())
            .map(|(coords, _)| coords)
            .collect()
    }

    fn square(rows: RangeInclusive<Coord>, cols: RangeInclusive<Coord>) -> Vec<Coord2> {
        rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
            .collect()
    }

    #[test]
    fn reveal_on_empty_board_opens_bounded_square() {
        let mut grid = grid(12, &[]);

        assert_eq!(grid.reveal((5, 5)), Ok(RevealOutcome::Opened(49)));
        assert_eq!(opened(&grid), square(2..=8, 2..=8));
        assert_eq!(grid.opened_count(), 49);
    }

    #[test]
    fn reveal_from_corner_is_clipped_to_board() {
        let mut grid = generate(GridConfig::new_unchecked(12, 0), 0).unwrap();

        assert_eq!(grid.reveal((0, 0)), Ok(RevealOutcome::Opened(16)));
        assert_eq!(opened(&grid), square(0..=3, 0..=3));
        assert!(square(0..=3, 0..=3)
            .into_iter()
            .all(|coords| grid[coords].state() != CellState::Empty));
    }

    #[test]
    fn reveal_radius_is_configurable() {
        let config = GridConfig::new_unchecked(9, 0).with_reveal_radius(1);
        let mut grid = FixedGridGenerator::new(&[]).generate(config).unwrap();

        assert_eq!(grid.reveal((4, 4)), Ok(RevealOutcome::Opened(9)));
        assert_eq!(opened(&grid), square(3..=5, 3..=5));
    }

    #[test]
    fn reveal_stops_at_bombs_and_never_opens_them() {
        // a wall of bombs on column 2 splits the board
        let wall: Vec<Coord2> = (0..5).map(|row| (row, 2)).collect();
        let mut grid = grid(5, &wall);

        assert_eq!(grid.reveal((2, 0)), Ok(RevealOutcome::Opened(10)));
        assert_eq!(opened(&grid), square(0..=4, 0..=1));
        assert!(wall.iter().all(|&coords| grid[coords].state() == CellState::Bomb));
    }

    #[test]
    fn fill_does_not_move_diagonally() {
        // (0, 0) is only diagonally connected to the rest of the board
        let mut grid = grid(3, &[(0, 1), (1, 0)]);

        assert_eq!(grid.reveal((0, 0)), Ok(RevealOutcome::Opened(1)));
        assert_eq!(grid[(1, 1)].state(), CellState::Empty);
    }

    #[test]
    fn fill_only_reaches_cells_connected_inside_the_radius() {
        // (0, 4) is inside the radius of (0, 0) but the only path to it leaves the square
        let mut bombs: Vec<Coord2> = (0..4).map(|row| (row, 3)).collect();
        bombs.push((4, 4));
        let config = GridConfig::new_unchecked(6, 0).with_reveal_radius(4);
        let mut grid = FixedGridGenerator::new(&bombs).generate(config).unwrap();

        grid.reveal((0, 0)).unwrap();
        assert_eq!(grid[(0, 4)].state(), CellState::Empty);
        assert_eq!(grid[(4, 3)].state(), CellState::Opened);
        assert_eq!(grid[(5, 3)].state(), CellState::Empty);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut grid = generate(GridConfig::default(), 42).unwrap();
        let safe = grid
            .iter()
            .find(|(_, cell)| !cell.state().is_bomb())
            .map(|(coords, _)| coords)
            .unwrap();

        assert!(grid.reveal(safe).unwrap().has_update());
        let snapshot = grid.clone();

        assert_eq!(grid.reveal(safe), Ok(RevealOutcome::NoChange));
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn reveal_on_bomb_changes_nothing() {
        let mut grid = grid(4, &[(1, 1)]);

        assert_eq!(grid.reveal((1, 1)), Ok(RevealOutcome::HitBomb));
        assert_eq!(grid[(1, 1)].state(), CellState::Bomb);
        assert_eq!(grid.version(), 0);
        assert!(opened(&grid).is_empty());
    }

    #[test]
    fn flagged_cells_are_still_opened() {
        let mut grid = grid(4, &[]);
        grid.toggle_flag((0, 1)).unwrap();
        grid.toggle_flag((0, 0)).unwrap();

        assert_eq!(grid.reveal((0, 0)), Ok(RevealOutcome::Opened(16)));
        assert_eq!(grid[(0, 1)].state(), CellState::Opened);
        assert!(grid[(0, 1)].is_flagged());
    }

    #[test]
    fn reveal_rejects_out_of_bounds_start() {
        let mut grid = grid(4, &[]);
        assert_eq!(
            grid.reveal((4, 0)),
            Err(GridError::OutOfBounds {
                coords: (4, 0),
                size: 4
            })
        );
        assert_eq!(grid.version(), 0);
    }

    #[test]
    fn reveal_never_opens_bombs_on_random_boards() {
        for seed in 0..20 {
            let mut grid = generate(GridConfig::new_unchecked(12, 60), seed).unwrap();
            for row in 0..12 {
                for col in 0..12 {
                    grid.reveal((row, col)).unwrap();
                }
            }
            assert_eq!(grid.opened_count(), grid.total_cells() - grid.bomb_count());
            assert!(grid
                .iter()
                .all(|(_, cell)| cell.state().is_bomb() || cell.state().is_opened()));
        }
    }

    #[test]
    fn reveal_by_id() {
        let mut grid = grid(6, &[(3, 3)]);
        let id = grid[(0, 0)].id();

        assert!(matches!(grid.reveal_id(id), Ok(RevealOutcome::Opened(_))));
        assert!(grid[(0, 0)].state().is_opened());

        let foreign = self::grid(6, &[])[(0, 0)].id();
        assert_eq!(grid.reveal_id(foreign), Err(GridError::UnknownCell));
    }

    #[test]
    fn version_moves_only_on_change() {
        let mut grid = grid(12, &[(6, 6)]);

        grid.reveal((0, 0)).unwrap();
        assert_eq!(grid.version(), 1);
        grid.reveal((0, 0)).unwrap();
        grid.reveal((6, 6)).unwrap();
        assert_eq!(grid.version(), 1);
        grid.reveal((11, 11)).unwrap();
        assert_eq!(grid.version(), 2);
    }
}
