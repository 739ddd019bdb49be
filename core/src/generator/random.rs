use super::*;

/// Uniform placement by rejection sampling: draw random coordinates and keep the ones not taken yet.
///
/// Boards more than half full are sampled the other way around, starting full and clearing the safe cells, so the
/// expected number of draws stays low on dense boards.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, config: &BoardConfig) -> Result<Array2<bool>> {
        use rand::prelude::*;

        config.validate()?;

        let (width, height) = config.size;
        let invert = config.mines > config.total_cells() / 2;
        let (fill, mut remaining) = if invert {
            log::debug!(
                "Dense board ({} mines in {} cells), sampling safe cells instead",
                config.mines,
                config.total_cells()
            );
            (true, config.safe_cells())
        } else {
            (false, config.mines)
        };

        let mut mines = Array2::from_elem(config.size.grid_index(), fill);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut draws: u64 = 0;
        while remaining > 0 {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            draws += 1;
            let cell = &mut mines[coords.grid_index()];
            if *cell == fill {
                *cell = !fill;
                remaining -= 1;
            }
        }
        log::trace!("Placed {} mines in {} draws", config.mines, draws);

        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            let config = BoardConfig::classic();
            let mask = RandomPlacer::new(seed).place(&config).unwrap();

            assert_eq!(mask.dim(), (10, 10));
            assert_eq!(count_mines(&mask), 10);
        }
    }

    #[test]
    fn dense_boards_keep_exact_count() {
        let config = BoardConfig::new((5, 4), 19).unwrap();

        for seed in 0..16 {
            let mask = RandomPlacer::new(seed).place(&config).unwrap();
            assert_eq!(count_mines(&mask), 19);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::expert();

        let a = RandomPlacer::new(42).place(&config).unwrap();
        let b = RandomPlacer::new(42).place(&config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BoardConfig::new_unchecked((3, 3), 9);

        assert!(matches!(
            RandomPlacer::new(0).place(&config),
            Err(BoardError::InvalidConfiguration(_))
        ));
    }
}
