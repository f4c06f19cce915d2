use tui_match3::core::{BoardConfig, GameSnapshot, Match3Game};
use tui_match3::term::{AnchorY, GameView, Viewport};
use tui_match3::types::{Coordinate, TileType};

fn filled(width: u16, height: u16, tile: TileType) -> GameSnapshot {
    GameSnapshot {
        width,
        height,
        cells: vec![Some(tile); width as usize * height as usize],
        // Keep the cursor off the board so plain tiles render as blocks.
        cursor: Coordinate::new(u16::MAX, u16::MAX),
        ..GameSnapshot::default()
    }
}

fn screen_text(fb: &tui_match3::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Match3Game::new(BoardConfig::default(), 1).unwrap().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1: 5x5 board => 10x5, plus border => 12x7.
    let fb = view.render(&snap, Viewport::new(12, 7));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_row_zero_at_the_bottom() {
    let mut snap = filled(3, 3, TileType::Red);
    snap.cells[0] = None; // (0, 0)

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(8, 5));

    // Bottom board row is screen row 3; each cell is two chars wide.
    assert_eq!(fb.get(1, 3).unwrap().ch, '·');
    assert_eq!(fb.get(2, 3).unwrap().ch, '·');
    assert_eq!(fb.get(3, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
}

#[test]
fn term_view_highlights_selection_cursor_and_hint() {
    let mut snap = filled(3, 3, TileType::Blue);
    snap.selected = Some(Coordinate::new(0, 2));
    snap.cursor = Coordinate::new(1, 2);
    snap.hint = Some((Coordinate::new(0, 0), Coordinate::new(1, 0)));

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(8, 5));

    assert_eq!(fb.get(1, 1).unwrap().ch, '▓');
    assert_eq!(fb.get(3, 1).unwrap().ch, '▒');
    assert_eq!(fb.get(1, 3).unwrap().ch, '░');
    assert_eq!(fb.get(3, 3).unwrap().ch, '░');
    assert_eq!(fb.get(5, 3).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = filled(5, 5, TileType::Green);
    snap.score = 2800;
    snap.last_delta = 2200;
    snap.last_multiplier = 8;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(40, 12));

    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("2800"));
    assert!(all.contains("+2200"));
    assert!(all.contains("x8"));
}

#[test]
fn term_view_click_maps_back_to_the_game_cell() {
    let mut game = Match3Game::new(BoardConfig::default(), 3).unwrap();
    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 20);

    // Frame is 12x7, centred: origin (14, 6). Cell (1, 4) sits at x=17, y=7.
    let at = view.cell_at(&snap, vp, 17, 7).unwrap();
    assert_eq!(at, Coordinate::new(1, 4));
    assert_eq!(view.cell_at(&snap, vp, 14, 7), None);

    game.pick(at).unwrap();
    assert_eq!(game.selected(), Some(at));
}
