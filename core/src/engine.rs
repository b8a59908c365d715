use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single command did, as far as the driver needs to know.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TurnEffect {
    ShowHelp,
    ShowNoFog,
    Quit,
    /// Unknown command or coordinates outside the grid; no round was spent.
    Rejected,
    Revealed(RevealResult),
    Marked(MarkOutcome),
    Guessed(MarkOutcome),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Turn {
    pub effect: TurnEffect,
    pub state: EngineState,
}

impl Turn {
    /// Whether the driver should stop asking for commands.
    pub const fn is_terminal(&self) -> bool {
        matches!(self.effect, TurnEffect::Quit) || self.state.is_finished()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinefieldEngine {
    grid: Array2<Cell>,
    total_mines: CellCount,
    win_rule: WinRule,
    mine_blasted: bool,
    rounds_completed: Saturating<CellCount>,
}

impl MinefieldEngine {
    /// Builds the grid from raw seed values.
    ///
    /// `mines` must hold exactly `total_mines` distinct in-bounds coordinates.
    pub fn new(rows: i64, cols: i64, total_mines: i64, mines: &[(i64, i64)]) -> Result<Self> {
        let min_side = i64::from(MIN_SIDE);
        if rows < min_side || cols < min_side {
            return Err(GameError::InvalidDimensions);
        }
        let rows = Coord::try_from(rows).map_err(|_| GameError::InvalidDimensions)?;
        let cols = Coord::try_from(cols).map_err(|_| GameError::InvalidDimensions)?;
        let size = (rows, cols);

        let total_mines = CellCount::try_from(total_mines)
            .ok()
            .filter(|&count| count <= mult(rows, cols))
            .ok_or(GameError::InvalidMineCount)?;
        if usize::try_from(total_mines).ok() != Some(mines.len()) {
            return Err(GameError::InvalidMineCount);
        }

        let mut grid: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mines {
            let coords = checked_coords(coords, size).ok_or(GameError::InvalidMineCoordinate)?;
            let cell = &mut grid[coords.to_nd_index()];
            if cell.has_mine {
                return Err(GameError::DuplicateMineCoordinate);
            }
            *cell = Cell::mined();
        }

        log::debug!("Mine field ready: {rows}x{cols} with {total_mines} mines");
        Ok(Self {
            grid,
            total_mines,
            win_rule: WinRule::default(),
            mine_blasted: false,
            rounds_completed: Saturating(0),
        })
    }

    pub fn from_seed(seed: &Seed) -> Result<Self> {
        Self::new(seed.rows, seed.cols, seed.total_mines, &seed.mines)
    }

    pub fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.grid.dim();
        // Both sides were built from `Coord` values.
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn rounds_completed(&self) -> CellCount {
        self.rounds_completed.0
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()].view())
    }

    pub(crate) fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_adjacent_mines(coords))
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        // At most eight neighbours, so the count always fits.
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].has_mine)
            .count() as u8
    }

    pub fn state(&self) -> EngineState {
        if self.mine_blasted {
            EngineState::Lost
        } else if self.is_won() {
            EngineState::Won
        } else {
            EngineState::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn is_lost(&self) -> bool {
        self.mine_blasted
    }

    pub fn is_won(&self) -> bool {
        !self.mine_blasted && self.grid.iter().all(|cell| self.win_rule.is_settled(cell))
    }

    /// `rows * cols * 100 / rounds`, or zero before the first completed round.
    pub fn score(&self) -> f64 {
        match self.rounds_completed.0 {
            0 => 0.0,
            rounds => f64::from(self.total_cells()) * 100.0 / f64::from(rounds),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.validate_coords(coords)?;
        if self.is_finished() {
            return Ok(RevealResult::NoChange);
        }

        if self.grid[coords.to_nd_index()].has_mine {
            self.grid[coords.to_nd_index()].blasted = true;
            self.mine_blasted = true;
            log::debug!("Mine blasted at {coords:?}");
            return Ok(RevealResult::Blasted);
        }

        let adjacent = self.count_adjacent_mines(coords);
        let cell = &mut self.grid[coords.to_nd_index()];
        cell.visibility = Visibility::Revealed;
        cell.adjacent = Some(adjacent);
        self.rounds_completed += 1;
        log::trace!("Revealed {coords:?} with {adjacent} adjacent mines");

        if self.is_won() {
            log::debug!("All cells settled after {} rounds", self.rounds_completed);
        }
        Ok(RevealResult::Revealed)
    }

    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.annotate(coords, Visibility::Marked)
    }

    pub fn guess(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.annotate(coords, Visibility::Guessed)
    }

    fn annotate(&mut self, coords: Coord2, visibility: Visibility) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        self.rounds_completed += 1;
        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.visibility == visibility || cell.visibility.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }
        cell.visibility = visibility;
        log::trace!("{visibility:?} {coords:?}");
        Ok(MarkOutcome::Changed)
    }

    /// Runs one parsed command and reports what happened.
    ///
    /// Out-of-range coordinates and unknown commands are rejected without
    /// spending a round. Asking for help costs a round, the no-fog view does not.
    pub fn apply(&mut self, command: Command) -> Turn {
        use TurnEffect::*;

        let target = command
            .target()
            .and_then(|coords| checked_coords(coords, self.size()));

        let effect = match (command, target) {
            (Command::Help, _) => {
                if !self.is_finished() {
                    self.rounds_completed += 1;
                }
                ShowHelp
            }
            (Command::NoFog, _) => ShowNoFog,
            (Command::Quit, _) => Quit,
            (Command::Reveal { .. }, Some(coords)) => {
                self.reveal(coords).map_or(Rejected, Revealed)
            }
            (Command::Mark { .. }, Some(coords)) => self.mark(coords).map_or(Rejected, Marked),
            (Command::Guess { .. }, Some(coords)) => self.guess(coords).map_or(Rejected, Guessed),
            _ => {
                log::debug!("Rejected command {command:?}");
                Rejected
            }
        };

        Turn {
            effect,
            state: self.state(),
        }
    }
}
