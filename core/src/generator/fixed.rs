use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Places bombs at exactly the given coordinates; duplicates collapse into one bomb.
///
/// The bomb count of the resulting grid comes from the layout, not from `config.bombs`.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGridGenerator {
    bomb_coords: Vec<Coord2>,
}

impl FixedGridGenerator {
    pub fn new(bomb_coords: &[Coord2]) -> Self {
        Self {
            bomb_coords: bomb_coords.to_vec(),
        }
    }
}

impl GridGenerator for FixedGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        let size = config.size;
        let mut bomb_mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for coords in self.bomb_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GridError::OutOfBounds { coords, size });
            }
            bomb_mask[coords.to_nd_index()] = true;
        }

        let bombs = bomb_mask.iter().filter(|&&is_bomb| is_bomb).count() as CellCount;
        GridConfig { bombs, ..config }.validate()?;

        let grid = Grid::from_bomb_mask(config, &bomb_mask);
        log::debug!(
            "built {size}x{size} grid from fixed layout with {bombs} bombs, epoch: {epoch}",
            epoch = grid.epoch(),
        );
        Ok(grid)
    }
}
