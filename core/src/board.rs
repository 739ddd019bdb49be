use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Active
    }
}

/// The grid of one game session and the rules applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    revealed_safe: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Creates a board with randomly placed mines.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::initialize(config, RandomPlacer::new(seed))
    }

    /// Creates a board of `size` with mines exactly at `mines`.
    pub fn with_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let config = FixedPlacer::config_for(size, mines)?;
        Self::initialize(config, FixedPlacer::new(mines))
    }

    /// Allocates every cell hidden and unmarked, then seeds exactly `config.mines` mines with `placer`.
    pub fn initialize(config: BoardConfig, placer: impl MinePlacer) -> Result<Self> {
        config.validate()?;

        let mine_mask = placer.place(&config)?;
        if !dim_matches(mine_mask.dim(), config.size) {
            log::warn!(
                "Placer returned a {:?} grid, expected {:?}",
                mine_mask.dim(),
                config.size
            );
            return Err(BoardError::InvalidConfiguration(
                "mine layout does not match board size",
            ));
        }
        let placed = count_mines(&mine_mask);
        if placed != usize::from(config.mines) {
            log::warn!(
                "Placer returned {} mines, expected {}",
                placed,
                config.mines
            );
            return Err(BoardError::InvalidConfiguration(
                "mine layout does not match mine count",
            ));
        }

        log::debug!(
            "Initialized {}x{} board with {} mines",
            config.width(),
            config.height(),
            config.mines
        );
        Ok(Self {
            config,
            grid: mine_mask.mapv(Cell::new),
            revealed_safe: Saturating(0),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    /// Mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not accounted for by flags; negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count.0)
    }

    pub fn visible_count(&self) -> CellCount {
        let count = self.grid.iter().filter(|cell| cell.visible).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.config.size.0 && coords.1 < self.config.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.view(coords))
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        let (width, height) = self.config.size;
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(|coords| (coords, self.view(coords)))
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.adjacent_mine_count(coords))
    }

    /// True iff every mined cell is visible. Flags do not count.
    pub fn is_complete(&self) -> bool {
        self.grid.iter().all(|cell| !cell.has_mine || cell.visible)
    }

    /// True iff every cell without a mine is visible.
    pub fn is_cleared(&self) -> bool {
        self.revealed_safe.0 >= self.config.safe_cells()
    }

    /// Opens a cell, flooding through the zero-count region around it.
    ///
    /// Opening a cell that is already visible changes nothing and repeats its result, even on a finished board.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenResult> {
        let coords = self.validate_coords(coords)?;

        let cell = self.grid[coords.grid_index()];
        if cell.visible {
            return Ok(if cell.has_mine {
                OpenResult::MineHit
            } else {
                OpenResult::Revealed
            });
        }
        self.check_active()?;

        let cell = &mut self.grid[coords.grid_index()];
        if cell.has_mine {
            cell.visible = true;
            self.triggered_mine = Some(coords);
            self.state = BoardState::Lost;
            log::debug!("Mine hit at {:?}, board lost", coords);
            return Ok(OpenResult::MineHit);
        }

        let revealed = self.flood_reveal(coords);
        log::debug!("Opened {:?}, {} cells revealed", coords, revealed);

        if self.has_won() {
            self.state = BoardState::Won;
            log::debug!("Board won ({:?})", self.config.win_condition);
        }
        Ok(OpenResult::Revealed)
    }

    /// Cycles the marker of a hidden cell, returns the marker the cell ends up with.
    pub fn mark(&mut self, coords: Coord2) -> Result<Marker> {
        let coords = self.validate_coords(coords)?;

        let cell = self.grid[coords.grid_index()];
        if cell.visible {
            return Ok(cell.marker);
        }
        self.check_active()?;

        let cell = &mut self.grid[coords.grid_index()];
        let previous = cell.marker;
        cell.marker = previous.next();
        match (previous.is_flagged(), cell.marker.is_flagged()) {
            (false, true) => self.flagged_count += 1,
            (true, false) => self.flagged_count -= 1,
            _ => {}
        }
        Ok(cell.marker)
    }

    /// Makes every cell visible. Used to show the whole board once a session ends.
    pub fn reveal_all(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.visible = true;
        }
        self.revealed_safe = Saturating(self.config.safe_cells());
        log::debug!("Revealed whole board");
    }

    /// Reveals `start` and expands through every connected zero-count cell, numbered cells are revealed as the
    /// border of the region but not expanded.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut revealed = Saturating(0);
        let mut to_visit = Vec::from([start]);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.grid[visit_coords.grid_index()];
            if cell.visible || cell.has_mine {
                continue;
            }
            cell.visible = true;
            revealed += 1;

            let count = self.adjacent_mine_count(visit_coords);
            log::trace!("Revealed {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(Neighbors::new(visit_coords, self.config.size).filter(|&pos| {
                    let neighbor = self.grid[pos.grid_index()];
                    !neighbor.visible && !neighbor.has_mine
                }));
            }
        }

        self.revealed_safe += revealed.0;
        revealed.0
    }

    fn has_won(&self) -> bool {
        match self.config.win_condition {
            WinCondition::AllMinesVisible => self.is_complete(),
            WinCondition::AllSafeCellsOpened => self.is_cleared(),
        }
    }

    fn view(&self, coords: Coord2) -> CellView {
        let cell = self.grid[coords.grid_index()];
        CellView {
            visible: cell.visible,
            has_mine: cell.has_mine,
            marker: cell.marker,
            adjacent_mines: self.adjacent_mine_count(coords),
        }
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        Neighbors::new(coords, self.config.size)
            .filter(|&pos| self.grid[pos.grid_index()].has_mine)
            .fold(0, |count, _| count + 1)
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(BoardError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
