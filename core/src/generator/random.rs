use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Uniformly random bomb placement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        use rand::prelude::*;

        config.validate()?;

        // shuffle every cell index and take the prefix, so placement always terminates
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();
        indices.shuffle(&mut rng);

        let size = config.size;
        let mut bomb_mask: Array2<bool> = Array2::default((size, size).to_nd_index());
        for &index in &indices[..usize::from(config.bombs)] {
            bomb_mask[coords_of(index, size).to_nd_index()] = true;
        }

        let grid = Grid::from_bomb_mask(config, &bomb_mask);
        log::debug!(
            "generated {size}x{size} grid with {bombs} bombs, seed: {seed}, epoch: {epoch}",
            bombs = grid.bomb_count(),
            seed = self.seed,
            epoch = grid.epoch(),
        );
        Ok(grid)
    }
}
