/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session and HUD.  No game logic is performed; this module only
/// translates state into terminal commands.  The play field is measured in
/// logical pixels and scaled onto whatever terminal size is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use fresh_catch::entities::{Basket, Expression, FallingItem, Freshness, Outcome, ProduceKind};
use fresh_catch::{ControlsView, Effect, GameConfig, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_MESSAGE: Color = Color::White;
const C_BASKET: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;
const C_WIN: Color = Color::Green;
const C_LOSE: Color = Color::Red;

// ── UI surface ────────────────────────────────────────────────────────────────

/// What the UI shows besides the field.  Only changed through effects.
#[derive(Debug, Clone)]
pub struct Hud {
    pub score: i32,
    pub message: String,
    pub controls: ControlsView,
    pub last_outcome: Option<Outcome>,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            score: 0,
            message: String::new(),
            controls: ControlsView::StartScreen,
            last_outcome: None,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    /// Apply a UI effect.  Returns `false` for effects the HUD doesn't own.
    pub fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::Score(score) => self.score = *score,
            Effect::Message(text) => self.message = text.clone(),
            Effect::Controls(view) => {
                if *view != ControlsView::GameOver {
                    self.last_outcome = None;
                }
                self.controls = *view;
            }
            Effect::GameOver(outcome) => self.last_outcome = Some(*outcome),
            Effect::Render | Effect::ScheduleTick(_) => return false,
        }
        true
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct Sprite {
    glyph: &'static str,
    color: Color,
}

const SPRITES: &[(ProduceKind, Freshness, Sprite)] = &[
    (ProduceKind::Apple, Freshness::Fresh, Sprite { glyph: "(@)", color: Color::Red }),
    (ProduceKind::Apple, Freshness::Spoiled, Sprite { glyph: "(%)", color: Color::DarkRed }),
    (ProduceKind::Orange, Freshness::Fresh, Sprite { glyph: "(O)", color: Color::Yellow }),
    (ProduceKind::Orange, Freshness::Spoiled, Sprite { glyph: "(%)", color: Color::DarkYellow }),
    (ProduceKind::Broccoli, Freshness::Fresh, Sprite { glyph: "{♣}", color: Color::Green }),
    (ProduceKind::Broccoli, Freshness::Spoiled, Sprite { glyph: "{%}", color: Color::DarkGreen }),
    (ProduceKind::Tomato, Freshness::Fresh, Sprite { glyph: "(●)", color: Color::Red }),
    (ProduceKind::Tomato, Freshness::Spoiled, Sprite { glyph: "(%)", color: Color::DarkMagenta }),
];

/// Generic marker when a (kind, freshness) pair has no sprite.
fn fallback_sprite(freshness: Freshness) -> Sprite {
    match freshness {
        Freshness::Fresh => Sprite { glyph: "●", color: Color::Green },
        Freshness::Spoiled => Sprite { glyph: "●", color: Color::DarkYellow },
    }
}

fn table_sprite(kind: ProduceKind, freshness: Freshness) -> Option<Sprite> {
    SPRITES
        .iter()
        .find(|(k, f, _)| *k == kind && *f == freshness)
        .map(|(_, _, sprite)| *sprite)
}

fn sprite_for(item: &FallingItem) -> Sprite {
    table_sprite(item.kind, item.freshness).unwrap_or_else(|| fallback_sprite(item.freshness))
}

// ── Field → terminal mapping ──────────────────────────────────────────────────

/// Inner play area in terminal cells: columns 1..width-1, rows 2..height-2.
struct Viewport {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(width: u16, height: u16, config: &GameConfig) -> Self {
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / config.field_width,
            scale_y: rows as f32 / config.field_height,
        }
    }

    fn col(&self, x: f32) -> Option<u16> {
        let c = (x * self.scale_x).floor();
        (c >= 0.0 && c < self.cols as f32).then(|| 1 + c as u16)
    }

    fn row(&self, y: f32) -> Option<u16> {
        let r = (y * self.scale_y).floor();
        (r >= 0.0 && r < self.rows as f32).then(|| 2 + r as u16)
    }

    fn cells_wide(&self, w: f32) -> u16 {
        ((w * self.scale_x).round() as u16).max(3)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, session: &Session, hud: &Hud) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;

    match hud.controls {
        ControlsView::StartScreen => draw_start_screen(out, session.config(), width, height)?,
        _ => {
            let view = Viewport::new(width, height, session.config());
            draw_hud(out, hud, width)?;
            for item in session.items() {
                draw_item(out, &view, item)?;
            }
            draw_basket(out, &view, session.basket())?;
            match hud.controls {
                ControlsView::Paused => draw_paused(out, width, height)?,
                ControlsView::GameOver => draw_game_over(out, hud, width, height)?,
                _ => {}
            }
        }
    }
    draw_controls_hint(out, hud, height)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud, width: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}", hud.score)))?;

    if !hud.message.is_empty() && hud.controls != ControlsView::GameOver {
        let mx = (width / 2).saturating_sub(hud.message.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(mx, 0))?;
        out.queue(style::SetForegroundColor(C_MESSAGE))?;
        out.queue(Print(&hud.message))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_item<W: Write>(out: &mut W, view: &Viewport, item: &FallingItem) -> std::io::Result<()> {
    let sprite = sprite_for(item);
    let centre_x = item.x + item.width / 2.0;
    let centre_y = item.y + item.height / 2.0;
    let (Some(col), Some(row)) = (view.col(centre_x), view.row(centre_y)) else {
        return Ok(());
    };
    let half = sprite.glyph.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(col.saturating_sub(half).max(1), row))?;
    out.queue(style::SetForegroundColor(sprite.color))?;
    out.queue(Print(sprite.glyph))?;
    Ok(())
}

fn draw_basket<W: Write>(out: &mut W, view: &Viewport, basket: &Basket) -> std::io::Result<()> {
    // Two-row sprite, scaled to the basket's width:
    //   \~~~~~~~/     ← rim
    //    \ ^_^ /      ← face (happy) or  \ T_T /  (sad)
    let Some(col) = view.col(basket.x) else {
        return Ok(());
    };
    let Some(row) = view.row(basket.y) else {
        return Ok(());
    };
    let w = view.cells_wide(basket.width) as usize;
    let face = match basket.expression {
        Expression::Happy => "^_^",
        Expression::Sad => "T_T",
    };

    out.queue(style::SetForegroundColor(C_BASKET))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(format!("\\{}/", "~".repeat(w.saturating_sub(2)))))?;

    if row + 1 < 2 + view.rows {
        let inner = w.saturating_sub(4);
        let pad = inner.saturating_sub(face.len());
        let left = pad / 2;
        out.queue(cursor::MoveTo(col + 1, row + 1))?;
        out.queue(Print(format!(
            "\\{}{}{}/",
            " ".repeat(left),
            face,
            " ".repeat(pad - left)
        )))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }
    Ok(())
}

fn draw_start_screen<W: Write>(
    out: &mut W,
    config: &GameConfig,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let fresh_line = format!("Catch fresh produce: +{}", config.fresh_bonus);
    let spoiled_line = format!("Avoid spoiled produce (%): -{}", config.spoiled_penalty);
    let goal_line = format!(
        "Reach {} to win, fall to {} and you lose",
        config.win_score, config.lose_score
    );
    draw_centered(
        out,
        &[
            ("★  FRESH  CATCH  ★", Color::Green),
            ("", C_HINT),
            (fresh_line.as_str(), Color::Green),
            (spoiled_line.as_str(), Color::DarkYellow),
            (goal_line.as_str(), Color::White),
            ("", C_HINT),
            ("Press ENTER to start", Color::Cyan),
        ],
        width,
        height,
    )
}

fn draw_paused<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("╔════════════════╗", Color::Cyan),
            ("║     PAUSED     ║", Color::Cyan),
            ("╚════════════════╝", Color::Cyan),
            ("SPACE - Resume", Color::White),
        ],
        width,
        height,
    )
}

fn draw_game_over<W: Write>(out: &mut W, hud: &Hud, width: u16, height: u16) -> std::io::Result<()> {
    let color = match hud.last_outcome {
        Some(Outcome::Won) => C_WIN,
        _ => C_LOSE,
    };
    let score_line = format!("Final Score: {:>5}", hud.score);
    draw_centered(
        out,
        &[
            ("╔════════════════════╗", color),
            ("║     GAME  OVER     ║", color),
            ("╚════════════════════╝", color),
            (hud.message.as_str(), C_MESSAGE),
            (score_line.as_str(), C_HUD_SCORE),
            ("R - Back to start  Q - Quit", Color::White),
        ],
        width,
        height,
    )
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, hud: &Hud, height: u16) -> std::io::Result<()> {
    let hint = match hud.controls {
        ControlsView::StartScreen => "ENTER / S : Start   Q : Quit",
        ControlsView::Playing => "← → / A D : Move   SPACE : Pause   R : Restart   Q : Quit",
        ControlsView::Paused => "SPACE : Resume   R : Restart   Q : Quit",
        ControlsView::GameOver => "R : Back to start   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
