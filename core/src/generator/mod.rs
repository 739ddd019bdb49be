use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy deciding which cells of a board hold mines.
///
/// The returned mask has the configured shape and exactly `config.mines` cells set,
/// [`Board::initialize`] rejects anything else.
pub trait MinePlacer {
    fn place(self, config: &BoardConfig) -> Result<Array2<bool>>;
}

pub(crate) fn count_mines(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&is_mine| is_mine).count()
}
