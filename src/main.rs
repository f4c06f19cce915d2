//! Terminal match-3 runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `tui_match3::term`. Every pick resolves its cascade
//! immediately; the loop only polls input and redraws.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_match3::core::{BoardConfig, GameSnapshot, Match3Game};
use tui_match3::input::{handle_key_event, pointer_pick, should_quit};
use tui_match3::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_match3::types::{
    DEFAULT_HEIGHT, DEFAULT_SCORE_INCREMENT, DEFAULT_TILE_KINDS, DEFAULT_WIDTH, TICK_MS,
};

/// Match-3 tile puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tui-match3",
    version,
    about = "Swap neighbouring tiles to line up three or more of a kind.",
    long_about = "Swap two neighbouring tiles to form a row or column of three or more \
        equal tiles. Matches are cleared, tiles above fall down and new tiles drop in; chain reactions keep \
        raising the multiplier.\n\n\
        CONTROLS:\n  Mouse       Click a tile, then a neighbour to swap\n  \
        Arrows/hjkl/wasd  Move cursor   Space/Enter  Pick   Esc  Cancel\n  \
        ?           Hint    r  Restart   q  Quit"
)]
struct Args {
    /// Board width in columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_name = "COLS")]
    width: u16,

    /// Board height in rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_name = "ROWS")]
    height: u16,

    /// Number of tile kinds in play (3-7).
    #[arg(long, default_value_t = DEFAULT_TILE_KINDS, value_name = "N")]
    kinds: u8,

    /// Points per cleared tile before the multiplier.
    #[arg(long, default_value_t = DEFAULT_SCORE_INCREMENT, value_name = "POINTS")]
    score_increment: u32,

    /// Seed for tile generation. Derived from the clock if not set.
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = BoardConfig::new(args.width, args.height, args.kinds, args.score_increment)
        .context("invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let game = Match3Game::new(config, seed)?;
    info!(
        width = config.width,
        height = config.height,
        kinds = config.tile_kinds,
        seed,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file; stdout belongs to the game screen.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: Match3Game) -> Result<()> {
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS as u64);

    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!(score = game.score(), swaps = game.swaps(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action)?;
                }
            }
            Event::Mouse(mouse) => {
                let Some((x, y)) = pointer_pick(mouse) else {
                    continue;
                };
                match view.cell_at(&snap, viewport, x, y) {
                    Some(at) => {
                        game.pick(at)?;
                    }
                    None => debug!(x, y, "click outside the board"),
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
            }
            _ => {}
        }
    }
}
