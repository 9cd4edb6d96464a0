//! GameView: maps a core `GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The field already carries the
//! current piece and the ghost as marked cells, so drawing is a single pass.

use crate::core::{Cell, GameState};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{FigureId, Phase};

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

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 10;

/// Terminal view of one game.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());

        let field = state.field();
        let frame_w = to_u16(field.width())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = to_u16(field.height())
            .saturating_mul(self.cell_h)
            .saturating_add(2);

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        // Fields larger than the viewport are clipped at its right and bottom edges.
        for (row, cells) in field.rows().enumerate() {
            let py = to_u16(row)
                .saturating_mul(self.cell_h)
                .saturating_add(origin_y)
                .saturating_add(1);
            if py >= viewport.height {
                break;
            }
            for (col, cell) in cells.iter().enumerate() {
                let px = to_u16(col)
                    .saturating_mul(self.cell_w)
                    .saturating_add(origin_x)
                    .saturating_add(1);
                if px >= viewport.width {
                    break;
                }
                let (ch, style) = cell_glyph(cell);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, state, viewport, panel_x, origin_y);

        let overlay = match state.phase() {
            Phase::Intro => Some("PRESS R"),
            Phase::Paused => Some("PAUSED"),
            Phase::GameOver => Some("GAME OVER"),
            Phase::Playing => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y.saturating_add(1), state.score(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PIECES", label);
        fb.put_u32(panel_x, y.saturating_add(1), state.total_pieces_spawned(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        for (i, id) in state.next_queue().iter().enumerate() {
            let line = y.saturating_add(1).saturating_add(to_u16(i));
            if line >= viewport.height {
                break;
            }
            let style = Style::new(figure_color(id), Rgb::new(0, 0, 0)).bold();
            fb.put(panel_x, line, id.as_char(), style);
        }
    }
}

/// Terminal coordinates are `u16`; anything larger pins to the far edge.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn cell_glyph(cell: &Cell) -> (char, Style) {
    match cell.figure {
        None => ('·', Style::new(Rgb::new(90, 90, 100), FIELD_BG).dim()),
        Some(_) if cell.is_ghost => ('░', Style::new(Rgb::new(140, 140, 140), FIELD_BG).dim()),
        Some(id) => ('█', Style::new(figure_color(id), FIELD_BG).bold()),
    }
}

fn figure_color(id: FigureId) -> Rgb {
    match id {
        FigureId::I => Rgb::new(80, 220, 220),
        FigureId::O => Rgb::new(240, 220, 80),
        FigureId::T => Rgb::new(200, 120, 220),
        FigureId::S => Rgb::new(100, 220, 120),
        FigureId::Z => Rgb::new(220, 80, 80),
        FigureId::J => Rgb::new(80, 120, 220),
        FigureId::L => Rgb::new(255, 165, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);

    // Edges stop at the framebuffer; puts past it would be dropped anyway.
    for px in x.saturating_add(1)..right.min(fb.width()) {
        fb.put(px, y, '─', style);
        fb.put(px, bottom, '─', style);
    }
    for py in y.saturating_add(1)..bottom.min(fb.height()) {
        fb.put(x, py, '│', style);
        fb.put(right, py, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let ty = y.saturating_add(h / 2);
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(tx, ty, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, GameConfig, GameController};

    #[test]
    fn ghost_and_locked_cells_use_distinct_glyphs() {
        let locked = Cell::locked(FigureId::T);
        let ghost = Cell {
            is_ghost: true,
            ..locked
        };
        assert_eq!(cell_glyph(&locked).0, '█');
        assert_eq!(cell_glyph(&ghost).0, '░');
        assert_eq!(cell_glyph(&Cell::EMPTY).0, '·');
    }

    #[test]
    fn small_field_fits_exactly() {
        let config = GameConfig::default();
        let mut game = GameController::new(config, 1);
        game.restart();
        let state = game.state().with_field(Field::from_rows(&["..", "OO"]).unwrap());

        let fb = GameView::default().render(&state, Viewport::new(6, 4));
        assert_eq!(fb.row_text(0), "┌────┐");
        assert_eq!(fb.row_text(1), "│····│");
        assert_eq!(fb.row_text(2), "│████│");
        assert_eq!(fb.row_text(3), "└────┘");
    }
}
