mod display;

use std::collections::HashMap;
use std::io::{self, stdout, BufRead, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::compute::{init_state, step, TickInput};
use space_invaders::scene::snapshot;
use space_invaders::{Config, GameState};

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms at 60 Hz) are
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

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

/// Plain line-based menu shown before the terminal switches to raw mode.
fn show_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<MenuResult> {
    writeln!(out, "Space Invaders")?;
    writeln!(out, "Controls:")?;
    writeln!(out, "- Arrow keys / A D: Move")?;
    writeln!(out, "- Spacebar: Shoot")?;
    writeln!(out, "- R: Restart (when game over)")?;
    writeln!(out, "- Q / Esc: Quit")?;
    writeln!(out)?;
    write!(out, "Choose demo (1: Space Invaders Game, 2: Exit): ")?;
    out.flush()?;

    let mut choice = String::new();
    let read = input
        .read_line(&mut choice)
        .context("failed to read menu choice")?;

    // EOF counts as leaving
    if read == 0 {
        writeln!(out)?;
        return Ok(MenuResult::Quit);
    }
    if choice.trim() == "2" {
        writeln!(out, "You exit the game.")?;
        return Ok(MenuResult::Quit);
    }
    Ok(MenuResult::Start)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: every key press/repeat records the frame it was last seen in
/// `key_frame`. Directions count as held while fresh (or until a release
/// event on terminals that report them). Shoot and restart are
/// edge-triggered: only fresh `Press` events fire them.
fn game_loop<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_secs_f64(1.0 / config.tick_rate as f64);

    let mut state: GameState = init_state(config);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    log::info!(
        "session started: {}x{} @ {} Hz, seed {:?}",
        config.width,
        config.height,
        config.tick_rate,
        config.seed
    );

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut input = TickInput::default();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event::read().context("failed to read terminal event")?
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => input.shoot = true,
                        KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        input.left = any_held(
            &key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        input.right = any_held(
            &key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );

        state = step(&state, &input, &mut rng);

        let (cols, rows) = terminal::size().context("failed to query terminal size")?;
        display::render(out, &snapshot(&state), cols, rows, &mut rng)
            .context("failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Terminal session ──────────────────────────────────────────────────────────

/// Switches to the alternate screen, runs `body`, then restores the terminal
/// whether setup, the body, or neither failed. Raw mode must already be on;
/// it is turned off here too.
fn with_game_screen<W: Write>(
    out: &mut W,
    body: impl FnOnce(&mut W) -> Result<()>,
) -> Result<()> {
    let result = enter_game_screen(out).and_then(|keyboard_enhanced| {
        let result = body(out);
        if keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        result
    });

    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Returns whether the keyboard enhancement flags were accepted.
fn enter_game_screen<W: Write>(out: &mut W) -> Result<bool> {
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide).context("failed to hide the cursor")?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();

    let stdin = io::stdin();
    if let MenuResult::Quit = show_menu(&mut stdin.lock(), &mut stdout())? {
        return Ok(());
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
    with_game_screen(&mut out, |out| game_loop(out, &config))
}
