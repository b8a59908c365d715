use alloc::vec::Vec;

use super::*;

/// Places mines uniformly at random, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSeedGenerator {
    seed: u64,
}

impl RandomSeedGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomSeedGenerator {
    fn generate(self, config: FieldConfig) -> Seed {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let total_cells = config.total_cells();
        let mines = if config.mines > total_cells {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        // partial shuffle, the first `mines` slots end up holding the picks
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells: Vec<CellCount> = (0..total_cells).collect();
        for i in 0..mines {
            let j = rng.random_range(i..total_cells);
            cells.swap(i as usize, j as usize);
        }
        let mut picked = cells;
        picked.truncate(mines as usize);
        picked.sort_unstable();

        let cols_count = CellCount::from(cols);
        let coords = picked
            .into_iter()
            .map(|index| {
                (
                    i64::from(index / cols_count),
                    i64::from(index % cols_count),
                )
            })
            .collect();

        log::debug!("Generated {rows}x{cols} seed with {mines} mines");
        Seed::new(i64::from(rows), i64::from(cols), coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, size: Coord2, mines: CellCount) -> Seed {
        RandomSeedGenerator::new(seed).generate(FieldConfig::new(size, mines))
    }

    #[test]
    fn places_the_requested_number_of_distinct_mines() {
        let seed = generate(7, (9, 9), 10);

        assert_eq!(seed.total_mines, 10);
        let mut mines = seed.mines.clone();
        mines.dedup();
        assert_eq!(mines.len(), 10);

        let engine = MinefieldEngine::from_seed(&seed).unwrap();
        assert_eq!(engine.total_mines(), 10);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(generate(42, (8, 12), 20), generate(42, (8, 12), 20));
    }

    #[test]
    fn config_clamps_sides_and_mines() {
        let config = FieldConfig::new((2, 7), 100);

        assert_eq!(config.size, (5, 7));
        assert_eq!(config.mines, 35);
    }

    #[test]
    fn full_field_and_empty_field() {
        let full = generate(1, (5, 5), 25);
        assert_eq!(full.mines.len(), 25);

        let empty = generate(1, (5, 5), 0);
        assert!(empty.mines.is_empty());
        assert_eq!(empty.rows, 5);
    }

    #[test]
    fn oversized_unchecked_config_is_capped() {
        let seed = RandomSeedGenerator::new(3).generate(FieldConfig::new_unchecked((5, 5), 40));
        assert_eq!(seed.total_mines, 25);
    }
}
