use sweeper_core::*;
use web_time::Instant;

/// UI-owned controller around a single [`Board`].
///
/// Restarts and difficulty changes replace the board wholesale. The clock starts on the first
/// in-bounds reveal and stops once the board reports the game as done.
#[derive(Debug)]
pub struct Session {
    difficulty: Option<Difficulty>,
    config: BoardConfig,
    forced_seed: Option<u64>,
    board: Board,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl Session {
    pub fn new(difficulty: Difficulty, forced_seed: Option<u64>) -> Self {
        Self::build(Some(difficulty), difficulty.config(), forced_seed)
    }

    pub fn custom(config: BoardConfig, forced_seed: Option<u64>) -> Self {
        Self::build(None, config, forced_seed)
    }

    fn build(
        difficulty: Option<Difficulty>,
        config: BoardConfig,
        forced_seed: Option<u64>,
    ) -> Self {
        let seed = forced_seed.unwrap_or_else(rand::random);
        log::debug!("New {:?} board {:?}, seed {}", difficulty, config, seed);
        Self {
            difficulty,
            config,
            forced_seed,
            board: Board::new(config, seed),
            started_at: None,
            ended_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` for a custom board.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn restart(&mut self) {
        *self = Self::build(self.difficulty, self.config, self.forced_seed);
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        *self = Self::new(difficulty, self.forced_seed);
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.started_at.is_none() && self.board.validate_coords(coords).is_ok() {
            self.started_at = Some(Instant::now());
        }
        let outcome = self.board.reveal(coords);
        self.stop_clock_when_done();
        outcome
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        self.board.toggle_flag(coords)
    }

    pub fn status(&self) -> Status {
        self.board.status()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.status().outcome()
    }

    pub fn is_clock_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Whole seconds since the first reveal, frozen once the game is done.
    pub fn elapsed_secs(&self) -> u64 {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(Instant::now)
                .duration_since(started_at)
                .as_secs(),
            None => 0,
        }
    }

    fn stop_clock_when_done(&mut self) {
        if self.ended_at.is_none() && self.started_at.is_some() && self.board.status().done {
            let now = Instant::now();
            log::debug!(
                "Game finished after {:?}",
                now.duration_since(self.started_at.unwrap_or(now))
            );
            self.ended_at = Some(now);
        }
    }
}
