use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait GridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid>;
}

/// Generates a grid for `config` with bombs placed by a generator seeded with `seed`.
pub fn generate(config: GridConfig, seed: u64) -> Result<Grid> {
    RandomGridGenerator::new(seed).generate(config)
}
