#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod types;

/// Result of opening a cell.
///
/// Hitting a mine is an expected gameplay event and not an error, the caller reacts to it by calling
/// [`Board::reveal_all`] and ending the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenResult {
    Revealed,
    MineHit,
}

impl OpenResult {
    pub const fn is_mine_hit(self) -> bool {
        matches!(self, Self::MineHit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_hit_then_reveal_all() {
        let mut board = Board::with_mines((5, 5), &[(2, 2), (4, 0)]).unwrap();

        let result = board.open((2, 2)).unwrap();
        assert!(result.is_mine_hit());
        assert!(!board.is_complete());

        board.reveal_all();
        assert!(board.cells().all(|(_, view)| view.visible));
    }

    #[test]
    fn mark_three_times_returns_to_none() {
        let mut board = Board::new(BoardConfig::classic(), 7).unwrap();
        let markers = [
            board.mark((5, 5)).unwrap(),
            board.mark((5, 5)).unwrap(),
            board.mark((5, 5)).unwrap(),
        ];

        assert_eq!(
            markers,
            [Marker::Flagged, Marker::Questioned, Marker::None]
        );
    }

    #[test]
    fn classic_session_until_loss() {
        let mut board = Board::new(BoardConfig::classic(), 1234).unwrap();
        let mine = board
            .cells()
            .find(|(_, view)| view.has_mine)
            .map(|(coords, _)| coords)
            .unwrap();

        let safe: alloc::vec::Vec<Coord2> = board
            .cells()
            .filter(|(_, view)| !view.has_mine)
            .map(|(coords, _)| coords)
            .collect();
        for coords in safe {
            assert_eq!(board.open(coords), Ok(OpenResult::Revealed));
        }
        assert!(board.is_cleared());
        assert_eq!(board.state(), BoardState::Active);

        assert_eq!(board.open(mine), Ok(OpenResult::MineHit));
        assert_eq!(board.state(), BoardState::Lost);
    }
}
