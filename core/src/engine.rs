use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid state of a single game.
///
/// Mines are placed lazily by the first reveal (`revealed_count == 0`), away from the revealed
/// cell, using the board's seed. Out-of-bounds or refused moves are reported as
/// [`RevealOutcome::NoChange`] / [`MarkOutcome::NoChange`] and leave the board untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    flagged_count: CellCount,
    revealed_count: CellCount,
    exploded: bool,
    seed: u64,
}

impl Board {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let config = BoardConfig::new(config.size, config.mines);
        Self {
            config,
            cells: Array2::default(config.size.to_nd_index()),
            flagged_count: 0,
            revealed_count: 0,
            exploded: false,
            seed,
        }
    }

    /// Resets to the pre-game state for `config`.
    pub fn initialize(&mut self, config: BoardConfig, seed: u64) {
        *self = Self::new(config, seed);
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn mines_placed(&self) -> bool {
        self.revealed_count > 0
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.total_cells() - self.config.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(self.cells[coords.to_nd_index()])
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let Ok(coords) = self.validate_coords(coords) else {
            log::debug!("Reveal outside the board at {:?}", coords);
            return NoChange;
        };

        if self.revealed_count == 0 {
            self.place_mines(coords);
        }

        let cell = self.cells[coords.to_nd_index()];
        if !cell.is_hidden() {
            log::debug!("Refusing to reveal {:?} cell at {:?}", cell.state, coords);
            return NoChange;
        }

        self.flood_reveal(coords);

        if cell.has_mine {
            log::debug!("Mine hit at {:?}", coords);
            self.exploded = true;
            HitMine
        } else if !self.exploded && self.revealed_count == self.safe_cell_count() {
            log::debug!("All {} safe cells revealed", self.revealed_count);
            Won
        } else {
            Revealed
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;
        use MarkOutcome::*;

        let Ok(coords) = self.validate_coords(coords) else {
            log::debug!("Flag outside the board at {:?}", coords);
            return NoChange;
        };

        let cell = &mut self.cells[coords.to_nd_index()];
        match cell.state {
            Hidden => {
                cell.state = Flagged;
                self.flagged_count += 1;
            }
            Flagged => {
                cell.state = Hidden;
                self.flagged_count -= 1;
            }
            Revealed => return NoChange,
        }
        log::debug!("Toggled flag at {:?}, {} flagged", coords, self.flagged_count);
        Changed
    }

    pub fn render(&self) -> Array2<CellView> {
        self.cells.map(|&cell| {
            if self.exploded && cell.has_mine {
                CellView::Mine
            } else {
                match cell.state {
                    CellState::Hidden => CellView::Hidden,
                    CellState::Flagged => CellView::Flagged,
                    CellState::Revealed if cell.has_mine => CellView::Mine,
                    CellState::Revealed => CellView::Count(cell.adjacent_count),
                }
            }
        })
    }

    /// [`Board::render`] as one string of symbols per row.
    pub fn render_rows(&self) -> Vec<String> {
        self.render()
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|view| view.symbol()).collect())
            .collect()
    }

    pub fn status(&self) -> Status {
        Status {
            done: self.exploded || self.revealed_count == self.safe_cell_count(),
            exploded: self.exploded,
            rows: self.rows(),
            cols: self.cols(),
            flagged_count: self.flagged_count,
            revealed_count: self.revealed_count,
            mine_count: self.config.mines,
        }
    }

    /// Mine mask (`B`/`.`) next to the adjacent counts, one line per row.
    pub fn layout_dump(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| {
                let mut line: String = row
                    .iter()
                    .map(|cell| if cell.has_mine { 'B' } else { '.' })
                    .collect();
                line.push_str("  |  ");
                line.extend(
                    row.iter()
                        .map(|cell| CellView::Count(cell.adjacent_count).symbol()),
                );
                line
            })
            .collect()
    }

    fn place_mines(&mut self, first: Coord2) {
        let mines = MineSprinkler::new(self.seed).generate(self.config, first);
        self.config.mines = mines.len() as CellCount;
        for pos in mines {
            self.cells[pos.to_nd_index()].has_mine = true;
        }

        let counts = Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.adjacent_mine_count((row as Coord, col as Coord))
        });
        let mut cleared_flags = 0;
        Zip::from(&mut self.cells).and(&counts).for_each(|cell, &count| {
            if cell.is_flagged() {
                cell.state = CellState::Hidden;
                cleared_flags += 1;
            }
            cell.adjacent_count = count;
        });
        self.flagged_count -= cleared_flags;

        log::debug!(
            "Placed {} mines away from {:?} (seed {}), cleared {} flags",
            self.config.mines,
            first,
            self.seed,
            cleared_flags
        );
        if log::log_enabled!(log::Level::Debug) {
            for line in self.layout_dump() {
                log::debug!("{}", line);
            }
        }
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine)
            .count() as u8
    }

    /// Reveals `start` and, through zero-count cells, every hidden cell connected to it.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_hidden() {
                continue;
            }
            cell.state = CellState::Revealed;
            let expands = cell.adjacent_count == 0 && !cell.has_mine;
            self.revealed_count += 1;
            log::trace!("Revealed cell at {:?}", coords);

            if expands {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_hidden()),
                );
            }
        }
    }
}
