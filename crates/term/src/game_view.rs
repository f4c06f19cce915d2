//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse transform from a
//! screen cell back to a grid [`Coordinate`], which is how mouse clicks become
//! picks. Grid row 0 is drawn at the bottom of the frame.

use crate::core::{GameSnapshot, RejectReason};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coordinate, TileType};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const SELECTED_BG: Rgb = Rgb::new(235, 235, 235);

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame(&self, board_w: u16, board_h: u16, viewport: Viewport) -> Frame {
        let w = board_w.saturating_mul(self.cell_w).saturating_add(2);
        let h = board_h.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Top-left screen cell of grid cell `at`.
    fn origin(&self, frame: Frame, board_h: u16, at: Coordinate) -> (u16, u16) {
        let px = frame.x + 1 + at.column * self.cell_w;
        let py = frame.y + 1 + (board_h - 1 - at.row) * self.cell_h;
        (px, py)
    }

    /// Grid coordinate under screen cell `(x, y)`, or `None` outside the board.
    pub fn cell_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Coordinate> {
        if snap.width == 0 || snap.height == 0 {
            return None;
        }
        let frame = self.frame(snap.width, snap.height, viewport);
        let left = frame.x + 1;
        let top = frame.y + 1;
        if x < left || y < top {
            return None;
        }
        let column = (x - left) / self.cell_w;
        let from_top = (y - top) / self.cell_h;
        if column >= snap.width || from_top >= snap.height {
            return None;
        }
        Some(Coordinate::new(column, snap.height - 1 - from_top))
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        if snap.width == 0 || snap.height == 0 {
            return;
        }

        let frame = self.frame(snap.width, snap.height, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        self.draw_border(fb, frame, border);

        for row in 0..snap.height {
            for column in 0..snap.width {
                let at = Coordinate::new(column, row);
                self.draw_tile(fb, frame, snap, at);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        at: Coordinate,
    ) {
        let (px, py) = self.origin(frame, snap.height, at);
        let Some(tile) = snap.cell(at) else {
            let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
            return;
        };

        let fg = tile_color(tile);
        let (ch, style) = if snap.selected == Some(at) {
            ('▓', CellStyle::new(fg, SELECTED_BG).bold())
        } else if snap.cursor == at {
            ('▒', CellStyle::new(fg, CURSOR_BG).bold())
        } else if snap.is_hinted(at) {
            ('░', CellStyle::new(fg, BOARD_BG))
        } else {
            ('█', CellStyle::new(fg, BOARD_BG))
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LAST", label);
        y = y.saturating_add(1);
        fb.put_char(panel_x, y, '+', value);
        fb.put_u64(panel_x + 1, y, snap.last_delta, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MULT", label);
        y = y.saturating_add(1);
        fb.put_char(panel_x, y, 'x', value);
        fb.put_u64(panel_x + 1, y, snap.last_multiplier, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SWAPS", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.swaps as u64, value);
        y = y.saturating_add(2);

        if let Some(reason) = snap.last_reject {
            fb.put_str(panel_x, y, reject_text(reason), dim);
        } else if snap.hint.is_some() {
            fb.put_str(panel_x, y, "TRY ░░", dim);
        }
    }
}

fn tile_color(tile: TileType) -> Rgb {
    match tile {
        TileType::Red => Rgb::new(220, 80, 80),
        TileType::Orange => Rgb::new(255, 165, 0),
        TileType::Yellow => Rgb::new(240, 220, 80),
        TileType::Green => Rgb::new(100, 220, 120),
        TileType::Blue => Rgb::new(80, 120, 220),
        TileType::Purple => Rgb::new(200, 120, 220),
        TileType::White => Rgb::new(230, 230, 230),
    }
}

fn reject_text(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::OutOfBounds => "OFF BOARD",
        RejectReason::NotNeighboring => "NOT ADJACENT",
        RejectReason::NoMatch => "NO MATCH",
    }
}
