use serde::{Deserialize, Serialize};

use crate::*;

/// Rule deciding when a successful open wins the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Won once every mined cell is visible, see [`Board::is_complete`].
    #[default]
    AllMinesVisible,
    /// Won once every cell without a mine is visible, see [`Board::is_cleared`].
    AllSafeCellsOpened,
}

/// Board dimensions and mine count.
///
/// Each axis is a [`Coord`], so boards are at most 255 x 255 cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
    #[serde(default)]
    pub win_condition: WinCondition,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            win_condition: WinCondition::AllMinesVisible,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON configuration such as `{"size": [10, 10], "mines": 10}`.
    ///
    /// Sizes beyond 255 per axis are reported as [`ConfigError::Invalid`], not as malformed input.
    pub fn from_json(text: &str) -> core::result::Result<Self, ConfigError> {
        let raw: RawBoardConfig = serde_json::from_str(text)?;
        Ok(raw.into_config()?)
    }

    pub const fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    /// Fixed 10x10 board with 10 mines.
    pub const fn classic() -> Self {
        Self::new_unchecked((10, 10), 10)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidConfiguration(
                "width and height must be positive",
            ));
        }
        if self.mines == 0 {
            return Err(BoardError::InvalidConfiguration(
                "at least one mine is required",
            ));
        }
        if self.mines >= self.total_cells() {
            return Err(BoardError::InvalidConfiguration(
                "mine count must be less than the number of cells",
            ));
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Fraction of cells holding a mine.
    pub fn density(&self) -> f32 {
        match self.total_cells() {
            0 => 0.0,
            total => f32::from(self.mines) / f32::from(total),
        }
    }
}

/// Text form of [`BoardConfig`] with wide integers, range checked on conversion.
#[derive(Deserialize)]
struct RawBoardConfig {
    size: (u64, u64),
    mines: u64,
    #[serde(default)]
    win_condition: WinCondition,
}

impl RawBoardConfig {
    fn into_config(self) -> Result<BoardConfig> {
        let axis = |len: u64| {
            Coord::try_from(len).map_err(|_| {
                BoardError::InvalidConfiguration("width and height must be at most 255")
            })
        };
        let size = (axis(self.size.0)?, axis(self.size.1)?);
        let mines = CellCount::try_from(self.mines).map_err(|_| {
            BoardError::InvalidConfiguration("mine count must be less than the number of cells")
        })?;
        Ok(BoardConfig::new(size, mines)?.with_win_condition(self.win_condition))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}
