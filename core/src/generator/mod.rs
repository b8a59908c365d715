use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Requested field shape for generated seeds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps the sides to at least [`MIN_SIDE`] and the mines to what fits.
    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let rows = rows.max(MIN_SIDE);
        let cols = cols.max(MIN_SIDE);
        let mines = mines.min(mult(rows, cols));
        Self::new_unchecked((rows, cols), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

pub trait MinefieldGenerator {
    fn generate(self, config: FieldConfig) -> Seed;
}
