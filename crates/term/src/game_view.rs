//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

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

/// Board frame position inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
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

    /// Columns and rows needed for the board frame plus side panel
    pub fn min_viewport(&self, snap: &GameSnapshot) -> Viewport {
        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 * self.cell_h + 2;
        Viewport::new(frame_w + 2 + PANEL_MIN_WIDTH, frame_h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = snap.width as u16 * self.cell_w;
        let board_px_h = snap.height as u16 * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2 + 2 + PANEL_MIN_WIDTH) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_px_h + 2) / 2,
                AnchorY::Top => 0,
            },
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::default()));

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_board_cell(fb, frame, x as u16, y as u16, kind),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Active piece; rows above the board are not drawn.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if x >= 0 && (x as u8) < snap.width && y >= 0 && (y as u8) < snap.height {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, frame, snap.score);
        } else if snap.paused {
            let mid_y = frame.y.saturating_add(frame.h / 2);
            self.draw_centered(fb, frame, mid_y, "PAUSED", overlay_style());
            let hint = CellStyle::new(Rgb::new(180, 180, 180), Rgb::default());
            self.draw_centered(fb, frame, mid_y.saturating_add(1), "P to resume", hint);
        }
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        self.fill_cell_rect(fb, frame, x, y, '█', piece_style(kind));
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
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
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let shape = get_shape(snap.next, 0);
        for (dx, dy) in shape.cells() {
            fb.fill_rect(
                panel_x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                piece_style(snap.next),
            );
        }
        y = y.saturating_add(shape.height() as u16 * self.cell_h + 1);

        let hint = CellStyle::new(Rgb::new(140, 140, 150), Rgb::default()).dim();
        for line in ["P pause", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame, score: u32) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = overlay_style();
        self.draw_centered(fb, frame, mid_y.saturating_sub(1), "GAME OVER", style);

        // "SCORE " followed by the digits, centered as one string.
        let text_w = 6 + digit_count(score);
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let written = fb.put_str(x, mid_y, "SCORE ", style);
        fb.put_u32(x.saturating_add(written), mid_y, score, style);

        let hint = CellStyle::new(Rgb::new(180, 180, 180), Rgb::default());
        self.draw_centered(fb, frame, mid_y.saturating_add(1), "ENTER to restart", hint);
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold()
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(Rgb::from_hex(kind.color_hex()), PLAY_BG).bold()
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn piece_style_uses_kind_color() {
        assert_eq!(piece_style(PieceKind::I).fg, Rgb::new(0xFF, 0x99, 0x00));
        assert_eq!(piece_style(PieceKind::Z).fg, Rgb::new(0xFF, 0x6B, 0x6B));
    }

    #[test]
    fn min_viewport_fits_board_and_panel() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        assert_eq!(view.min_viewport(&snap), Viewport::new(22 + 2 + 12, 22));
    }
}
