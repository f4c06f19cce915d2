//! Cascade engine - the detect → clear → gravity → refill state machine
//!
//! One player swap triggers one cascade. The engine walks
//!
//! ```text
//! Idle → Detecting → Clearing → Gravity → Refilling ─┐
//!            ▲                                        │
//!            └────────────────────────────────────────┘
//! Detecting (no matches) → Stable
//! ```
//!
//! and resolves the whole thing synchronously: [`CascadeEngine::run`] drains
//! every pass before returning. [`CascadeEngine::step`] exposes single
//! transitions for tests and tooling.
//!
//! # Scoring
//!
//! The multiplier resets to 1 when a cascade begins and climbs by one for
//! every cell cleared, across passes. A cascade clearing `k` cells in total
//! therefore scores `increment * k * (k + 1) / 2`. Cleared cells are processed
//! in [`MatchSet`] discovery order (columns first, then rows).
//!
//! # Refill order
//!
//! Empty cells are refilled columns ascending, rows ascending within a
//! column, one [`TileSource`] draw per cell. Scripted sources rely on this.
//!
//! A cascade stops after [`CASCADE_PASS_LIMIT`] clearing passes even if the
//! board still holds runs; the report says so.

use tracing::{debug, trace, warn};

use crate::config::BoardConfig;
use crate::error::GridError;
use crate::gravity::apply_gravity;
use crate::grid::TileGrid;
use crate::matcher::{find_all_matches, MatchSet};
use crate::rng::TileSource;
use crate::types::{Coordinate, TileEvent, TileType};

/// Upper bound on in-place replacement passes when settling a new board.
pub const SETTLE_PASS_LIMIT: u32 = 256;

/// Upper bound on clearing passes in one player cascade. A tile source that
/// keeps refilling runs would otherwise never let the board come to rest.
pub const CASCADE_PASS_LIMIT: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadePhase {
    Idle,
    Detecting,
    Clearing,
    Gravity,
    Refilling,
    Stable,
}

/// Score bookkeeping carried across cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeState {
    /// Cumulative score for the whole game.
    pub score: u64,
    /// Current multiplier, always >= 1.
    pub multiplier: u64,
    /// True once the last cascade found no further matches.
    pub stable: bool,
}

impl Default for CascadeState {
    fn default() -> Self {
        Self {
            score: 0,
            multiplier: 1,
            stable: true,
        }
    }
}

/// Summary of one fully resolved cascade.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub score_delta: u64,
    pub cells_cleared: u32,
    /// Number of passes that cleared at least one match.
    pub passes: u32,
    /// Multiplier value when the cascade settled.
    pub final_multiplier: u64,
    /// Whether the grid changed at all.
    pub changed: bool,
    /// The cascade was cut off at [`CASCADE_PASS_LIMIT`]; the board may
    /// still hold matches.
    pub capped: bool,
    /// Clears, falls and spawns, in the order they happened.
    pub events: Vec<TileEvent>,
}

#[derive(Debug, Clone)]
pub struct CascadeEngine {
    score_increment: u64,
    kinds: &'static [TileType],
    phase: CascadePhase,
    state: CascadeState,
    pending_matches: MatchSet,
    pending_refill: Vec<Coordinate>,
    score_delta: u64,
    cells_cleared: u32,
    passes: u32,
    events: Vec<TileEvent>,
}

impl CascadeEngine {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            score_increment: config.score_increment as u64,
            kinds: config.kinds(),
            phase: CascadePhase::Idle,
            state: CascadeState::default(),
            pending_matches: MatchSet::default(),
            pending_refill: Vec::new(),
            score_delta: 0,
            cells_cleared: 0,
            passes: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    pub fn state(&self) -> CascadeState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn kinds(&self) -> &'static [TileType] {
        self.kinds
    }

    /// Zero the cumulative score (new game).
    pub fn reset(&mut self) {
        self.begin();
        self.phase = CascadePhase::Idle;
        self.state = CascadeState::default();
    }

    /// Start a new cascade: multiplier back to 1, delta back to 0.
    pub fn begin(&mut self) {
        self.phase = CascadePhase::Detecting;
        self.state.multiplier = 1;
        self.state.stable = false;
        self.pending_refill.clear();
        self.score_delta = 0;
        self.cells_cleared = 0;
        self.passes = 0;
        self.events.clear();
    }

    /// Perform one state transition and return the new phase.
    ///
    /// `Idle` and `Stable` are resting phases; stepping them does nothing.
    pub fn step(
        &mut self,
        grid: &mut TileGrid,
        source: &mut impl TileSource,
    ) -> Result<CascadePhase, GridError> {
        self.phase = match self.phase {
            CascadePhase::Idle | CascadePhase::Stable => self.phase,
            CascadePhase::Detecting => {
                self.pending_matches = find_all_matches(grid);
                if self.pending_matches.is_empty() {
                    self.state.stable = true;
                    CascadePhase::Stable
                } else {
                    self.passes += 1;
                    trace!(
                        pass = self.passes,
                        cells = self.pending_matches.len(),
                        "cascade pass"
                    );
                    CascadePhase::Clearing
                }
            }
            CascadePhase::Clearing => {
                self.clear_matches(grid)?;
                CascadePhase::Gravity
            }
            CascadePhase::Gravity => {
                let report = apply_gravity(grid)?;
                self.events
                    .extend(report.moves.into_iter().map(TileEvent::Moved));
                self.pending_refill = report.refill;
                CascadePhase::Refilling
            }
            CascadePhase::Refilling => {
                for at in std::mem::take(&mut self.pending_refill) {
                    let tile = TileGrid::random_tile(self.kinds, source);
                    grid.set(at, Some(tile))?;
                    self.events.push(TileEvent::Spawned { at, tile });
                }
                CascadePhase::Detecting
            }
        };
        Ok(self.phase)
    }

    fn clear_matches(&mut self, grid: &mut TileGrid) -> Result<(), GridError> {
        let matches = std::mem::take(&mut self.pending_matches);
        for at in matches.iter() {
            // Removal is idempotent per cell.
            let Some(tile) = grid.clear(at)? else {
                continue;
            };
            let points = self.score_increment.saturating_mul(self.state.multiplier);
            self.score_delta = self.score_delta.saturating_add(points);
            self.state.score = self.state.score.saturating_add(points);
            self.state.multiplier += 1;
            self.cells_cleared += 1;
            self.events.push(TileEvent::Cleared {
                at,
                tile,
                pass: self.passes,
            });
        }
        Ok(())
    }

    /// Resolve a full cascade on `grid`, starting at `Detecting`.
    pub fn run(
        &mut self,
        grid: &mut TileGrid,
        source: &mut impl TileSource,
    ) -> Result<CascadeReport, GridError> {
        self.begin();
        let mut capped = false;
        loop {
            match self.step(grid, source)? {
                CascadePhase::Stable => break,
                CascadePhase::Detecting if self.passes >= CASCADE_PASS_LIMIT => {
                    warn!(
                        passes = self.passes,
                        cleared = self.cells_cleared,
                        "cascade pass limit reached, stopping"
                    );
                    self.phase = CascadePhase::Stable;
                    capped = true;
                    break;
                }
                _ => {}
            }
        }

        let report = CascadeReport {
            score_delta: self.score_delta,
            cells_cleared: self.cells_cleared,
            passes: self.passes,
            final_multiplier: self.state.multiplier,
            changed: self.cells_cleared > 0,
            capped,
            events: std::mem::take(&mut self.events),
        };
        debug!(
            score_delta = report.score_delta,
            cleared = report.cells_cleared,
            passes = report.passes,
            score = self.state.score,
            "cascade settled"
        );
        Ok(report)
    }

    /// Remove pre-existing matches from a freshly generated board.
    ///
    /// Matched cells are redrawn in place (no gravity, no score) until the
    /// board holds no run. Returns `false` if [`SETTLE_PASS_LIMIT`] passes were
    /// not enough.
    pub fn settle(
        &self,
        grid: &mut TileGrid,
        source: &mut impl TileSource,
    ) -> Result<bool, GridError> {
        for pass in 0..SETTLE_PASS_LIMIT {
            let matches = find_all_matches(grid);
            if matches.is_empty() {
                trace!(passes = pass, "board settled");
                return Ok(true);
            }
            for at in matches.iter() {
                grid.set(at, Some(TileGrid::random_tile(self.kinds, source)))?;
            }
        }
        Ok(find_all_matches(grid).is_empty())
    }
}
