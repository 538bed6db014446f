use super::*;

/// Uniform placement over every cell outside the safe zone around the first move.
///
/// Runs a partial Fisher-Yates shuffle over the eligible cells, so every subset of the
/// requested size is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct MineSprinkler {
    seed: u64,
}

impl MineSprinkler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn eligible_cells(&self, (rows, cols): Coord2, first: Coord2) -> Vec<Coord2> {
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&pos| chebyshev(pos, first) > SAFE_RADIUS)
            .collect()
    }
}

impl MineGenerator for MineSprinkler {
    fn generate(self, config: BoardConfig, first: Coord2) -> Vec<Coord2> {
        use rand::prelude::*;

        let mut eligible = self.eligible_cells(config.size, first);
        let requested = config.mines as usize;
        let count = requested.min(eligible.len());
        if count < requested {
            log::warn!(
                "Only {} cells are eligible for mines, requested {}",
                eligible.len(),
                requested
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in 0..count {
            let j = rng.random_range(i..eligible.len());
            eligible.swap(i, j);
        }
        eligible.truncate(count);
        eligible
    }
}
