//! Game module - ties grid, cascade engine and selection together
//!
//! [`Match3Game`] is what a frontend drives. It owns the only [`TileGrid`],
//! the [`CascadeEngine`] that scores it, the [`SelectionController`] and the
//! tile source. Every pick resolves its cascade before returning; there is
//! no per-frame simulation.

use tracing::{debug, info, warn};

use crate::cascade::CascadeEngine;
use crate::config::BoardConfig;
use crate::error::{ConfigError, GridError};
use crate::grid::TileGrid;
use crate::moves::{find_valid_swap, has_valid_swap};
use crate::rng::{SimpleRng, TileSource};
use crate::selection::{PickOutcome, RejectReason, SelectionController, SwapOutcome};
use crate::snapshot::GameSnapshot;
use crate::types::{Coordinate, GameAction, TileEvent};

/// Board generations tried before settling for a board with no valid swap.
pub const BOARD_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone)]
pub struct Match3Game<S: TileSource = SimpleRng> {
    config: BoardConfig,
    grid: TileGrid,
    engine: CascadeEngine,
    selection: SelectionController,
    source: S,
    seed: u32,
    cursor: Coordinate,
    hint: Option<(Coordinate, Coordinate)>,
    last_delta: u64,
    last_multiplier: u64,
    last_reject: Option<RejectReason>,
    last_events: Vec<TileEvent>,
    /// Accepted swaps this episode.
    swaps: u32,
    /// Dead boards replaced this episode.
    reshuffles: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl Match3Game<SimpleRng> {
    /// Create a game with a freshly generated, settled board.
    pub fn new(config: BoardConfig, seed: u32) -> Result<Self, GridError> {
        let mut game = Self::with_source(config, SimpleRng::new(seed))?;
        game.seed = seed;
        Ok(game)
    }
}

impl<S: TileSource> Match3Game<S> {
    /// Create a game drawing tiles from `source`.
    pub fn with_source(config: BoardConfig, source: S) -> Result<Self, GridError> {
        config.validate()?;
        let mut game = Self::assemble(config, TileGrid::new(config.width, config.height), source);
        game.generate_board()?;
        Ok(game)
    }

    /// Start from a given board, as is. The board must match the
    /// configured shape; it is not settled.
    pub fn from_grid(config: BoardConfig, grid: TileGrid, source: S) -> Result<Self, GridError> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(ConfigError::GridShape {
                width: config.width,
                height: config.height,
                actual_width: grid.width(),
                actual_height: grid.height(),
            }
            .into());
        }
        Ok(Self::assemble(config, grid, source))
    }

    fn assemble(config: BoardConfig, grid: TileGrid, source: S) -> Self {
        Self {
            config,
            grid,
            engine: CascadeEngine::new(&config),
            selection: SelectionController::new(),
            source,
            seed: 0,
            cursor: Coordinate::new(config.width / 2, config.height / 2),
            hint: None,
            last_delta: 0,
            last_multiplier: 0,
            last_reject: None,
            last_events: Vec::new(),
            swaps: 0,
            reshuffles: 0,
            episode_id: 0,
        }
    }

    /// Fill the board with a settled arrangement that has a valid swap.
    fn generate_board(&mut self) -> Result<(), GridError> {
        let kinds = self.config.kinds();
        for attempt in 1..=BOARD_ATTEMPTS {
            self.grid.refill_all(kinds, &mut self.source);
            let settled = self.engine.settle(&mut self.grid, &mut self.source)?;
            if settled && has_valid_swap(&self.grid) {
                debug!(attempt, "board generated");
                return Ok(());
            }
        }
        warn!(
            attempts = BOARD_ATTEMPTS,
            "could not generate a playable board, keeping the last one"
        );
        Ok(())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.engine.score()
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selection.selected()
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    pub fn hint(&self) -> Option<(Coordinate, Coordinate)> {
        self.hint
    }

    pub fn last_events(&self) -> &[TileEvent] {
        &self.last_events
    }

    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Pick a cell: select it, or swap it with the current selection.
    ///
    /// An accepted swap that leaves no valid move behind replaces the board.
    pub fn pick(&mut self, at: Coordinate) -> Result<PickOutcome, GridError> {
        self.hint = None;
        let outcome =
            self.selection
                .pick(at, &mut self.grid, &mut self.engine, &mut self.source)?;

        match &outcome {
            PickOutcome::Selected(_) => {
                self.last_reject = None;
            }
            PickOutcome::Swapped(SwapOutcome::Rejected(reason)) => {
                self.last_reject = Some(*reason);
            }
            PickOutcome::Swapped(SwapOutcome::Accepted(report)) => {
                self.last_reject = None;
                self.last_delta = report.score_delta;
                self.last_multiplier = report.final_multiplier;
                self.last_events.clone_from(&report.events);
                self.swaps += 1;
                if !has_valid_swap(&self.grid) {
                    info!(swaps = self.swaps, "no valid swap left, regenerating board");
                    self.reshuffles += 1;
                    self.generate_board()?;
                }
            }
        }
        Ok(outcome)
    }

    /// Apply a keyboard action. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, GridError> {
        let Coordinate { column, row } = self.cursor;
        let changed = match action {
            GameAction::CursorLeft => self.move_cursor(column.saturating_sub(1), row),
            GameAction::CursorRight => self.move_cursor(column + 1, row),
            GameAction::CursorDown => self.move_cursor(column, row.saturating_sub(1)),
            GameAction::CursorUp => self.move_cursor(column, row + 1),
            GameAction::Pick => {
                self.pick(self.cursor)?;
                true
            }
            GameAction::Cancel => {
                let had = self.selection.selected().is_some();
                self.selection.clear();
                had
            }
            GameAction::Hint => {
                self.hint = find_valid_swap(&self.grid);
                self.hint.is_some()
            }
            GameAction::Restart => {
                self.restart()?;
                true
            }
        };
        Ok(changed)
    }

    fn move_cursor(&mut self, column: u16, row: u16) -> bool {
        let next = Coordinate::new(
            column.min(self.config.width - 1),
            row.min(self.config.height - 1),
        );
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// New board, zero score, next episode.
    pub fn restart(&mut self) -> Result<(), GridError> {
        self.engine.reset();
        self.selection.clear();
        self.cursor = Coordinate::new(self.config.width / 2, self.config.height / 2);
        self.hint = None;
        self.last_delta = 0;
        self.last_multiplier = 0;
        self.last_reject = None;
        self.last_events.clear();
        self.swaps = 0;
        self.reshuffles = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.generate_board()?;
        info!(episode = self.episode_id, "game restarted");
        Ok(())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.engine.score();
        out.last_delta = self.last_delta;
        out.last_multiplier = self.last_multiplier;
        out.last_reject = self.last_reject;
        out.selected = self.selection.selected();
        out.cursor = self.cursor;
        out.hint = self.hint;
        out.events.clone_from(&self.last_events);
        out.swaps = self.swaps;
        out.reshuffles = self.reshuffles;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_all_matches;
    use crate::rng::ScriptedTiles;
    use crate::types::TileType::*;

    fn c(column: u16, row: u16) -> Coordinate {
        Coordinate::new(column, row)
    }

    #[test]
    fn new_game_is_stable_and_playable() {
        let game = Match3Game::new(BoardConfig::default(), 12345).unwrap();
        assert!(game.grid().is_full());
        assert!(find_all_matches(game.grid()).is_empty());
        assert!(has_valid_swap(game.grid()));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn same_seed_same_board() {
        let a = Match3Game::new(BoardConfig::default(), 7).unwrap();
        let b = Match3Game::new(BoardConfig::default(), 7).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BoardConfig {
            width: 2,
            ..BoardConfig::default()
        };
        assert!(matches!(
            Match3Game::new(config, 1),
            Err(GridError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn from_grid_checks_shape() {
        let grid = TileGrid::from_letters(&["RGB", "GBR", "BRG"]).unwrap();
        let err =
            Match3Game::from_grid(BoardConfig::default(), grid, SimpleRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidConfiguration(ConfigError::GridShape {
                width: 5,
                height: 5,
                actual_width: 3,
                actual_height: 3,
            })
        );
    }

    #[test]
    fn cursor_stays_on_board() {
        let config = BoardConfig::new(3, 3, 4, 100).unwrap();
        let mut game = Match3Game::new(config, 3).unwrap();
        assert_eq!(game.cursor(), c(1, 1));

        assert!(game.apply_action(GameAction::CursorUp).unwrap());
        assert!(!game.apply_action(GameAction::CursorUp).unwrap());
        assert_eq!(game.cursor(), c(1, 2));

        game.apply_action(GameAction::CursorLeft).unwrap();
        assert!(!game.apply_action(GameAction::CursorLeft).unwrap());
        assert_eq!(game.cursor(), c(0, 2));
    }

    #[test]
    fn pick_then_cancel_drops_selection() {
        let mut game = Match3Game::new(BoardConfig::default(), 5).unwrap();
        game.apply_action(GameAction::Pick).unwrap();
        assert_eq!(game.selected(), Some(c(2, 2)));
        assert!(game.apply_action(GameAction::Cancel).unwrap());
        assert_eq!(game.selected(), None);
        assert!(!game.apply_action(GameAction::Cancel).unwrap());
    }

    #[test]
    fn following_the_hint_always_scores() {
        let mut game = Match3Game::new(BoardConfig::default(), 99).unwrap();
        for _ in 0..10 {
            assert!(game.apply_action(GameAction::Hint).unwrap());
            let (a, b) = game.hint().unwrap();
            game.pick(a).unwrap();
            let outcome = game.pick(b).unwrap();
            let PickOutcome::Swapped(swap) = outcome else {
                panic!("expected a swap, got {:?}", outcome);
            };
            assert!(swap.is_accepted());
            assert!(swap.score_delta() >= 600);
            assert!(find_all_matches(game.grid()).is_empty());
        }
        assert_eq!(game.swaps(), 10);
    }

    #[test]
    fn dead_board_after_cascade_is_replaced() {
        // The swap clears row 0; the refill leaves a Latin square with no move.
        let grid = TileGrid::from_letters(&["GBR", "BRR", "RRG"]).unwrap();
        let config = BoardConfig::new(3, 3, 3, 100).unwrap();
        let source = ScriptedTiles::new(vec![Red, Green, Blue]);
        let mut game = Match3Game::from_grid(config, grid, source).unwrap();

        game.pick(c(2, 0)).unwrap();
        let outcome = game.pick(c(2, 1)).unwrap();

        assert!(matches!(
            outcome,
            PickOutcome::Swapped(SwapOutcome::Accepted(ref r)) if r.score_delta == 600
        ));
        assert_eq!(game.reshuffles(), 1);
        assert_eq!(game.score(), 600);
    }

    #[test]
    fn restart_zeroes_score_and_bumps_episode() {
        let mut game = Match3Game::new(BoardConfig::default(), 11).unwrap();
        game.apply_action(GameAction::Hint).unwrap();
        let (a, b) = game.hint().unwrap();
        game.pick(a).unwrap();
        game.pick(b).unwrap();
        assert!(game.score() > 0);

        game.apply_action(GameAction::Restart).unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.swaps(), 0);
        assert_eq!(game.episode_id(), 1);
        assert!(find_all_matches(game.grid()).is_empty());
    }

    #[test]
    fn rejected_pick_is_recorded_in_snapshot() {
        let mut game = Match3Game::new(BoardConfig::default(), 21).unwrap();
        let before = game.grid().clone();
        game.pick(c(0, 0)).unwrap();
        game.pick(c(2, 2)).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.last_reject, Some(RejectReason::NotNeighboring));
        assert_eq!(snap.selected, None);
        assert_eq!(game.grid(), &before);
        assert_eq!(snap.cells.len(), 25);
        assert_eq!(snap.seed, 21);
    }

    #[test]
    fn reused_snapshot_drops_stale_state() {
        let mut snap = GameSnapshot::default();
        let mut big = Match3Game::new(BoardConfig::default(), 4).unwrap();
        big.apply_action(GameAction::Hint).unwrap();
        big.snapshot_into(&mut snap);
        assert!(snap.hint.is_some());

        let small = Match3Game::new(BoardConfig::new(3, 3, 4, 100).unwrap(), 4).unwrap();
        small.snapshot_into(&mut snap);
        assert_eq!(snap.hint, None);
        assert_eq!(snap.cells.len(), 9);
        assert_eq!(snap, small.snapshot());
    }
}
