use alloc::vec::Vec;

use crate::*;
pub use sprinkle::*;

mod sprinkle;

/// Chebyshev radius around the first revealed cell that never receives a mine.
pub const SAFE_RADIUS: Coord = 2;

pub trait MineGenerator {
    /// Picks distinct mine positions for `config`, keeping the area around `first` clear.
    ///
    /// May return fewer than `config.mines` positions when not enough cells are eligible.
    fn generate(self, config: BoardConfig, first: Coord2) -> Vec<Coord2>;
}
