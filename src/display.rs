//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable `Scene`. No game
//! logic is performed; this module only scales the logical surface onto the
//! terminal grid and translates sprites into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;
use space_invaders::scene::{Hud, Rgb, Scene, Sprite, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_TEXT: Color = Color::White;
const C_HEALTH_BAR: Color = Color::Green;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

/// Background stars redrawn at random every frame.
const STAR_COUNT: usize = 60;

/// Smallest terminal the playfield is drawn on.
const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 12;

/// Maps logical pixels onto the cells between the border lines.
///
/// Row 0 is the HUD, row 1 the top border, row `rows-2` the bottom border
/// and row `rows-1` the controls hint.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(scene: &Scene, cols: u16, rows: u16) -> Self {
        let inner_w = cols.saturating_sub(2).max(1) as f32;
        let inner_h = rows.saturating_sub(4).max(1) as f32;
        Self {
            cols,
            rows,
            sx: inner_w / scene.width,
            sy: inner_h / scene.height,
        }
    }

    fn first_col(&self) -> u16 {
        1
    }

    fn last_col(&self) -> u16 {
        self.cols.saturating_sub(2)
    }

    fn first_row(&self) -> u16 {
        2
    }

    fn last_row(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    /// Cell holding logical point `(x, y)`, or `None` outside the playfield.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.sx).floor() + self.first_col() as f32;
        let row = (y * self.sy).floor() + self.first_row() as f32;
        if col < self.first_col() as f32
            || col > self.last_col() as f32
            || row < self.first_row() as f32
            || row > self.last_row() as f32
        {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// How many cells wide a logical width is (at least one).
    fn span(&self, w: f32) -> usize {
        ((w * self.sx).round() as usize).max(1)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols`×`rows` terminal.
pub fn render<W: Write>(
    out: &mut W,
    scene: &Scene,
    cols: u16,
    rows: u16,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if cols < MIN_COLS || rows < MIN_ROWS {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::SetForegroundColor(C_GAME_OVER))?;
        out.queue(Print(format!(
            "Terminal too small ({cols}x{rows}), need {MIN_COLS}x{MIN_ROWS}"
        )))?;
        out.queue(style::ResetColor)?;
        return out.flush();
    }

    let view = Viewport::new(scene, cols, rows);

    draw_border(out, &view)?;
    draw_stars(out, &view, rng)?;
    for sprite in &scene.sprites {
        draw_sprite(out, &view, sprite)?;
    }
    draw_hud(out, &view, &scene.hud)?;
    draw_controls_hint(out, &view)?;

    if scene.hud.game_over {
        draw_game_over(out, &view, &scene.hud)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = view.rows.saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_stars<W: Write>(out: &mut W, view: &Viewport, rng: &mut impl Rng) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for _ in 0..STAR_COUNT {
        let col = rng.gen_range(view.first_col()..=view.last_col());
        let row = rng.gen_range(view.first_row()..=view.last_row());
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("·"))?;
    }
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Text for one sprite row `span` cells wide.
fn glyphs(kind: SpriteKind, span: usize) -> String {
    match kind {
        //  /██\   hull with swept wings
        SpriteKind::Player if span >= 3 => format!("/{}\\", "█".repeat(span - 2)),
        SpriteKind::Player => "▲".to_string(),
        //  «▼▼»   invader
        SpriteKind::Enemy if span >= 3 => format!("«{}»", "▼".repeat(span - 2)),
        SpriteKind::Enemy => "▼".to_string(),
        SpriteKind::PlayerBullet => "║".to_string(),
        SpriteKind::EnemyBullet => "↓".to_string(),
        SpriteKind::Particle => "*".to_string(),
        SpriteKind::PowerUp => "◉".to_string(),
    }
}

fn draw_sprite<W: Write>(out: &mut W, view: &Viewport, sprite: &Sprite) -> std::io::Result<()> {
    let rect = &sprite.rect;
    let single_cell = matches!(
        sprite.kind,
        SpriteKind::PlayerBullet
            | SpriteKind::EnemyBullet
            | SpriteKind::Particle
            | SpriteKind::PowerUp
    );

    // Box sprites may overshoot the left wall by a fraction of a pixel on
    // the frame the formation turns; pin them to the first column.
    let (x, span) = if single_cell {
        (rect.center_x(), 1)
    } else {
        (rect.x.max(0.0), view.span(rect.w))
    };
    let Some((col, row)) = view.cell(x, rect.center_y()) else {
        return Ok(());
    };

    // Clip at the right wall
    let room = (view.last_col() - col + 1) as usize;
    let text: String = glyphs(sprite.kind, span).chars().take(room).collect();

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(to_color(sprite.color)))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    let text = format!(
        "Score: {:<7} Level: {:<3} Health: {:<3}",
        hud.score, hud.level, hud.health
    );
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TEXT))?;
    out.queue(Print(&text))?;

    // Health bar, one block per point
    let bar_col = 2 + text.chars().count() as u16;
    let room = view.cols.saturating_sub(bar_col + 1) as usize;
    let blocks = (hud.health.max(0) as usize).min(room / 2);
    if blocks > 0 {
        out.queue(cursor::MoveTo(bar_col, 0))?;
        out.queue(style::SetForegroundColor(C_HEALTH_BAR))?;
        out.queue(Print("■ ".repeat(blocks)))?;
    }

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    let lines = [
        ("GAME OVER - Press R to Restart".to_string(), C_GAME_OVER),
        (format!("Final Score: {}  Level: {}", hud.score, hud.level), Color::Yellow),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use space_invaders::entities::Rect;
    use space_invaders::scene::YELLOW;

    fn scene_with(sprites: Vec<Sprite>) -> Scene {
        Scene {
            width: 800.0,
            height: 600.0,
            sprites,
            hud: Hud {
                score: 0,
                level: 1,
                health: 3,
                game_over: false,
            },
        }
    }

    fn enemy_at(x: f32) -> Sprite {
        Sprite {
            kind: SpriteKind::Enemy,
            rect: Rect::new(x, 100.0, 40.0, 30.0),
            color: YELLOW,
        }
    }

    fn frame_text(scene: &Scene) -> String {
        let mut out = Vec::new();
        render(&mut out, scene, 80, 24, &mut StdRng::seed_from_u64(5)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn enemy_past_left_wall_is_still_drawn() {
        let text = frame_text(&scene_with(vec![enemy_at(-0.5)]));
        assert!(text.contains("«▼▼»"));
    }

    #[test]
    fn enemy_at_left_wall_lands_in_first_column() {
        let flush = frame_text(&scene_with(vec![enemy_at(0.0)]));
        let past = frame_text(&scene_with(vec![enemy_at(-0.5)]));
        assert_eq!(flush, past);
    }
}
