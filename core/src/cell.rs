use serde::{Deserialize, Serialize};

/// Player annotation on a hidden cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    None,
    Flagged,
    Questioned,
}

impl Marker {
    /// Next marker in the `None -> Flagged -> Questioned -> None` cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Flagged,
            Self::Flagged => Self::Questioned,
            Self::Questioned => Self::None,
        }
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Canonical state of one grid position stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) visible: bool,
    pub(crate) marker: Marker,
}

impl Cell {
    pub(crate) const fn new(has_mine: bool) -> Self {
        Self {
            has_mine,
            visible: false,
            marker: Marker::None,
        }
    }
}

/// Read-only view of a cell, everything a renderer needs to paint it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub visible: bool,
    pub has_mine: bool,
    pub marker: Marker,
    pub adjacent_mines: u8,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        !self.visible
    }

    /// Whether a visible cell shows an exploded or uncovered mine.
    pub const fn shows_mine(self) -> bool {
        self.visible && self.has_mine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_cycles_through_all_states() {
        let mut marker = Marker::default();
        let mut seen = [Marker::None; 4];

        for slot in seen.iter_mut() {
            marker = marker.next();
            *slot = marker;
        }

        assert_eq!(
            seen,
            [
                Marker::Flagged,
                Marker::Questioned,
                Marker::None,
                Marker::Flagged
            ]
        );
    }

    #[test]
    fn new_cell_is_hidden_and_unmarked() {
        let cell = Cell::new(true);

        assert!(cell.has_mine);
        assert!(!cell.visible);
        assert_eq!(cell.marker, Marker::None);
    }
}
