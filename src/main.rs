//! Terminal runner (default binary).
//!
//! Delivers a `Tick` every `--tick-ms` milliseconds and key commands in
//! between. Rendering goes through the framebuffer renderer in `stackfall::term`.
//!
//! ```text
//! stackfall [--seed N] [--width N] [--height N] [--next N] [--tick-ms N] [--record PATH]
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use stackfall::adapter::JsonLinesRecorder;
use stackfall::core::{FigureCatalog, GameConfig, GameController};
use stackfall::input::{map_key, pause_command, should_quit, KeyIntent};
use stackfall::term::{GameView, TerminalRenderer, Viewport};
use stackfall::types::{Command, DEFAULT_TICK_MS, FIELD_HEIGHT, FIELD_WIDTH, NEXT_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    seed: u64,
    width: usize,
    height: usize,
    next: usize,
    tick_ms: u64,
    record: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            next: NEXT_COUNT,
            tick_ms: DEFAULT_TICK_MS,
            record: None,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| anyhow!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--seed" => opts.seed = value()?.parse().context("--seed")?,
            "--width" => opts.width = value()?.parse().context("--width")?,
            "--height" => opts.height = value()?.parse().context("--height")?,
            "--next" => opts.next = value()?.parse().context("--next")?,
            "--tick-ms" => opts.tick_ms = value()?.parse().context("--tick-ms")?,
            "--record" => opts.record = Some(value()?),
            other => bail!("unknown argument: {other}"),
        }
    }

    if opts.tick_ms == 0 {
        bail!("--tick-ms must be positive");
    }
    Ok(opts)
}

fn main() -> Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;
    let config = GameConfig::new(opts.width, opts.height, opts.next, FigureCatalog::standard())
        .context("invalid game configuration")?;

    let mut game = GameController::new(config, opts.seed);
    let recorder = match &opts.record {
        Some(path) => {
            let recorder = Rc::new(RefCell::new(JsonLinesRecorder::create(path)?));
            game.subscribe(Box::new(Rc::clone(&recorder)));
            eprintln!("[stackfall] recording transitions to {path}");
            Some(recorder)
        }
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, Duration::from_millis(opts.tick_ms));

    // Always try to restore terminal state.
    let _ = term.exit();

    let state = game.state();
    eprintln!(
        "[stackfall] seed={} score={} pieces={} phase={}",
        opts.seed,
        state.score(),
        state.total_pieces_spawned(),
        state.phase().as_str()
    );
    if let Some(recorder) = recorder {
        let mut recorder = recorder.borrow_mut();
        match recorder.take_error() {
            Some(err) => eprintln!(
                "[stackfall] recording stopped after {} transitions: {err}",
                recorder.seq()
            ),
            None => eprintln!("[stackfall] recorded {} transitions", recorder.seq()),
        }
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameController, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game.state(), Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    let command = match map_key(key) {
                        Some(KeyIntent::Command(command)) => Some(command),
                        Some(KeyIntent::TogglePause) => pause_command(game.state().phase()),
                        None => None,
                    };
                    if let Some(command) = command {
                        game.dispatch(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.dispatch(Command::Tick);
        }
    }
}
