mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use display::Hud;
use fresh_catch::{Clock, Effect, GameConfig, InputSnapshot, MonotonicClock, Session, TickTicket};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn sample_input(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputSnapshot {
    InputSnapshot {
        left: any_held(
            key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: any_held(
            key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drives the session until the player quits.
///
/// Each frame: drain key events (one-shot control keys go straight to the
/// session), run the scheduled tick if there is one, then hand every effect
/// to the HUD / scheduler and redraw if anything visible changed.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let clock = MonotonicClock::new();
    let mut rng = thread_rng();
    let mut hud = Hud::new();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut next_tick: Option<TickTicket> = None;
    let mut frame: u64 = 0;

    display::render(out, session, &hud)?;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut effects: Vec<Effect> = Vec::new();
        let mut redraw = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let (code, kind, modifiers) = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => (code, kind, modifiers),
                Event::Resize(_, _) => {
                    redraw = true;
                    continue;
                }
                _ => continue,
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => effects.extend(session.pause_game()),
                        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
                            effects.extend(session.start_game(clock.now_ms()));
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            effects.extend(session.restart_game());
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Scheduled tick ────────────────────────────────────────────────────
        // A ticket voided by a pause/restart above is rejected by the session.
        if let Some(ticket) = next_tick.take() {
            let input = sample_input(&key_frame, frame);
            effects.extend(session.tick(ticket, clock.now_ms(), input, &mut rng));
        }

        for effect in &effects {
            match effect {
                Effect::ScheduleTick(ticket) => next_tick = Some(*ticket),
                Effect::Render => redraw = true,
                other => {
                    if let Effect::GameOver(outcome) = other {
                        log::info!("final score {} ({:?})", session.score(), outcome);
                    }
                    redraw |= hud.apply(other);
                }
            }
        }

        if redraw {
            display::render(out, session, &hud)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // stderr only; redirect it (`2>fresh_catch.log`) to keep the screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::load();
    let mut session = Session::new(config).map_err(|err| {
        log::error!("{err}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal error: {err}");
    }
    result
}
