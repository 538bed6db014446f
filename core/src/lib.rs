#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a config that is always playable: at least one row and column, and no more
    /// mines than cells.
    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.min(mult(rows, cols));
        Self::new_unchecked((rows, cols), mines)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Snapshot of the board counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub done: bool,
    pub exploded: bool,
    pub rows: Coord,
    pub cols: Coord,
    pub flagged_count: CellCount,
    pub revealed_count: CellCount,
    pub mine_count: CellCount,
}

impl Status {
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match (self.done, self.exploded) {
            (_, true) => Some(GameOutcome::Lost),
            (true, false) => Some(GameOutcome::Won),
            (false, false) => None,
        }
    }

    /// Mines not yet accounted for by a flag; negative when over-flagged.
    pub const fn mines_left(&self) -> i64 {
        self.mine_count as i64 - self.flagged_count as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_mines_to_cells() {
        let config = BoardConfig::new((3, 3), 50);
        assert_eq!(config.mines, 9);
        assert_eq!(config.total_cells(), 9);
    }

    #[test]
    fn config_clamps_empty_dimensions() {
        let config = BoardConfig::new((0, 0), 0);
        assert_eq!(config.size, (1, 1));
        assert_eq!(config.mines, 0);
    }

    #[test]
    fn only_no_change_reports_no_update() {
        use RevealOutcome::*;
        assert!(!NoChange.has_update());
        assert!([Revealed, HitMine, Won].iter().all(|outcome| outcome.has_update()));
        assert!(!MarkOutcome::NoChange.has_update());
        assert!(MarkOutcome::Changed.has_update());
    }

    #[test]
    fn status_outcome_distinguishes_win_and_loss() {
        let mut status = Status {
            done: false,
            exploded: false,
            rows: 2,
            cols: 2,
            flagged_count: 3,
            revealed_count: 0,
            mine_count: 1,
        };
        assert_eq!(status.outcome(), None);
        assert_eq!(status.mines_left(), -2);

        status.done = true;
        assert_eq!(status.outcome(), Some(GameOutcome::Won));

        status.exploded = true;
        assert_eq!(status.outcome(), Some(GameOutcome::Lost));
    }
}
