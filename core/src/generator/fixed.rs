use super::*;

/// Places mines at explicit coordinates, for prepared boards and reproducible scenarios.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPlacer<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedPlacer<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }

    /// Configuration of a board of `size` holding exactly these mines.
    pub fn config_for(size: Coord2, mines: &[Coord2]) -> Result<BoardConfig> {
        let mask = mask_from_coords(size, mines)?;
        let count = count_mines(&mask)
            .try_into()
            .map_err(|_| BoardError::InvalidConfiguration("too many mines"))?;
        BoardConfig::new(size, count)
    }
}

impl MinePlacer for FixedPlacer<'_> {
    fn place(self, config: &BoardConfig) -> Result<Array2<bool>> {
        config.validate()?;

        let mask = mask_from_coords(config.size, self.mines)?;
        if count_mines(&mask) != usize::from(config.mines) {
            log::warn!(
                "Fixed layout has {} distinct mines, configuration expects {}",
                count_mines(&mask),
                config.mines
            );
            return Err(BoardError::InvalidConfiguration(
                "mine coordinates do not match the mine count",
            ));
        }
        Ok(mask)
    }
}

fn mask_from_coords(size: Coord2, mines: &[Coord2]) -> Result<Array2<bool>> {
    let mut mask: Array2<bool> = Array2::default(size.grid_index());

    for &coords in mines {
        if coords.0 >= size.0 || coords.1 >= size.1 {
            return Err(BoardError::OutOfBounds);
        }
        mask[coords.grid_index()] = true;
    }

    Ok(mask)
}
