//! Controller module - the state machine over [`GameState`]
//!
//! [`transition`] is a pure function from (state, command) to the next state.
//! [`GameController`] owns the authoritative state together with the config,
//! the random source and the observers, and is the only thing that replaces
//! the state.
//!
//! # Phases
//!
//! ```text
//!  Intro ──Restart──▶ Playing ◀──SetPause(false)── Paused
//!                      │  ▲  ──SetPause(true)───▶
//!                      │  └──────Restart (from any phase)
//!                      └─spawn blocked─▶ GameOver
//! ```
//!
//! `Tick` and `Move` only act while playing; `SetPause` is ignored in the intro
//! and after game over. Ignored commands are not errors.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::is_colliding;
use crate::config::{ConfigError, GameConfig};
use crate::field::{Field, Markers};
use crate::game_state::GameState;
use crate::ghost::project;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::rows::clear_full_rows;
use crate::scoring::score_for;
use crate::types::{Command, Direction};

/// Receives every new snapshot produced by a [`GameController`]
///
/// Called once per command that changed the state, in subscription order.
/// Commands that were ignored notify nobody.
pub trait Observer {
    fn on_transition(&mut self, command: Command, state: &GameState);
}

/// Lets the caller keep a handle on an observer after subscribing it
impl<O: Observer + ?Sized> Observer for Rc<RefCell<O>> {
    fn on_transition(&mut self, command: Command, state: &GameState) {
        self.borrow_mut().on_transition(command, state);
    }
}

/// Next state for `command`, or a copy of `state` when the command is a no-op
///
/// `state` must fit `config` (see [`GameState::fits`]); a queued figure missing
/// from the catalog makes every draw a no-op.
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    command: Command,
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    apply(state, command, config, rng).unwrap_or_else(|| state.clone())
}

/// `None` means the command left the state unchanged
fn apply<R: Rng + ?Sized>(
    state: &GameState,
    command: Command,
    config: &GameConfig,
    rng: &mut R,
) -> Option<GameState> {
    match command {
        Command::Restart => restart(config, rng),
        Command::SetPause(value) => set_pause(state, value),
        Command::Tick => tick(state, config, rng),
        Command::Move(direction) => move_current(state, direction),
    }
}

/// Paint the ghost and then the current piece onto a marker-free field
fn with_active(field: Field, current: &Piece) -> Field {
    let ghost = project(&field, current);
    field
        .imprint(&ghost, Markers::GHOST)
        .imprint(current, Markers::CURRENT)
}

fn restart<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Option<GameState> {
    let (current, next_queue) = PieceQueue::new().draw_next(config, rng)?;
    let blank = Field::blank(config.field_width(), config.field_height());

    Some(GameState {
        field: with_active(blank, &current),
        current: Some(current),
        next_queue,
        score: 0,
        total_pieces_spawned: 0,
        in_game: true,
        paused: false,
        show_intro: false,
        game_over: false,
    })
}

fn set_pause(state: &GameState, value: bool) -> Option<GameState> {
    if state.game_over || state.show_intro {
        return None;
    }
    if state.paused == value && state.in_game == !value {
        return None;
    }

    Some(GameState {
        paused: value,
        in_game: !value,
        ..state.clone()
    })
}

fn tick<R: Rng + ?Sized>(state: &GameState, config: &GameConfig, rng: &mut R) -> Option<GameState> {
    if !state.in_game {
        return None;
    }
    let current = state.current.as_ref()?;
    let field = state.field.strip_markers();

    let candidate = current.shifted(1, 0);
    if !is_colliding(&field, &candidate) {
        let field = with_active(field, &candidate);
        return Some(state.with_board(field, candidate, state.next_queue.clone()));
    }

    // Lock where it stands, then clear and score.
    let locked = field.imprint(current, Markers::NONE);
    let (field, cleared) = clear_full_rows(&locked);
    let score = state.score.saturating_add(score_for(cleared));
    let total_pieces_spawned = state.total_pieces_spawned.saturating_add(1);

    let (next, next_queue) = state.next_queue.draw_next(config, rng)?;

    if is_colliding(&field, &next) {
        return Some(GameState {
            score,
            total_pieces_spawned,
            in_game: false,
            game_over: true,
            ..state.with_board(field, next, next_queue)
        });
    }

    let field = with_active(field, &next);
    Some(GameState {
        score,
        total_pieces_spawned,
        ..state.with_board(field, next, next_queue)
    })
}

fn move_current(state: &GameState, direction: Direction) -> Option<GameState> {
    if !state.in_game {
        return None;
    }
    let current = state.current.as_ref()?;
    let field = state.field.strip_markers();

    let moved = match direction {
        Direction::Up => current.rotated(),
        Direction::Left => current.shifted(0, -1),
        Direction::Right => current.shifted(0, 1),
        Direction::Down => current.clone(),
    };

    if moved == *current || is_colliding(&field, &moved) {
        return None;
    }

    let field = with_active(field, &moved);
    Some(state.with_board(field, moved, state.next_queue.clone()))
}

/// Owner of the authoritative game state
///
/// # Example
///
/// ```
/// use stackfall_core::{GameConfig, GameController};
/// use stackfall_types::{Command, Direction, Phase};
///
/// let mut game = GameController::new(GameConfig::default(), 12345);
/// assert_eq!(game.state().phase(), Phase::Intro);
///
/// game.dispatch(Command::Restart);
/// game.dispatch(Command::Move(Direction::Left));
/// game.dispatch(Command::Tick);
///
/// assert_eq!(game.state().phase(), Phase::Playing);
/// assert_eq!(game.state().score(), 0);
/// ```
pub struct GameController<R = StdRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    observers: Vec<Box<dyn Observer>>,
}

impl GameController<StdRng> {
    /// Controller in the intro phase, drawing figures from a seeded `StdRng`
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// Controller in the intro phase with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let state = GameState::intro(&config);
        Self {
            config,
            state,
            rng,
            observers: Vec::new(),
        }
    }

    /// Controller resuming from an existing snapshot
    ///
    /// The snapshot must come from the same configuration (field size, catalog
    /// and lookahead length); otherwise [`ConfigError::StateMismatch`].
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Result<Self, ConfigError> {
        if !state.fits(&config) {
            return Err(ConfigError::StateMismatch);
        }
        Ok(Self {
            config,
            state,
            rng,
            observers: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current snapshot
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Register an observer for future transitions
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Apply one command and return the resulting snapshot
    ///
    /// Observers hear about it only if the state changed.
    pub fn dispatch(&mut self, command: Command) -> &GameState {
        if let Some(next) = apply(&self.state, command, &self.config, &mut self.rng) {
            self.state = next;
            for observer in &mut self.observers {
                observer.on_transition(command, &self.state);
            }
        }
        &self.state
    }

    pub fn restart(&mut self) -> &GameState {
        self.dispatch(Command::Restart)
    }

    pub fn set_pause(&mut self, value: bool) -> &GameState {
        self.dispatch(Command::SetPause(value))
    }

    pub fn tick(&mut self) -> &GameState {
        self.dispatch(Command::Tick)
    }

    pub fn move_current(&mut self, direction: Direction) -> &GameState {
        self.dispatch(Command::Move(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Offset;
    use crate::types::{FigureId, Phase};

    fn playing(seed: u64) -> GameController {
        let mut game = GameController::new(GameConfig::default(), seed);
        game.restart();
        game
    }

    fn marked_cells(state: &GameState) -> (usize, usize) {
        let cells = state.field().cells();
        (
            cells.iter().filter(|c| c.is_current).count(),
            cells.iter().filter(|c| c.is_ghost).count(),
        )
    }

    #[test]
    fn restart_paints_current_and_ghost() {
        let game = playing(1);
        let state = game.state();

        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.in_game());
        assert_eq!(state.score(), 0);
        assert_eq!(state.total_pieces_spawned(), 0);
        assert_eq!(state.next_queue().len(), game.config().next_count());

        let current = state.current().unwrap();
        let visible = current.cells().filter(|&(row, _)| row >= 0).count();
        let (cur, ghost) = marked_cells(state);
        assert_eq!(cur, visible);
        assert_eq!(ghost, 4);
    }

    #[test]
    fn tick_moves_piece_down() {
        let mut game = playing(2);
        let before = game.state().current().unwrap().offset;
        game.tick();
        let after = game.state().current().unwrap().offset;
        assert_eq!(after, Offset::new(before.y + 1, before.x));
    }

    #[test]
    fn pause_blocks_ticks_and_moves() {
        let mut game = playing(3);
        game.set_pause(true);
        assert_eq!(game.state().phase(), Phase::Paused);
        assert!(!game.state().in_game());

        let frozen = game.snapshot();
        game.tick();
        game.move_current(Direction::Left);
        assert_eq!(game.state(), &frozen);

        game.set_pause(false);
        assert_eq!(game.state().phase(), Phase::Playing);
    }

    #[test]
    fn pause_ignored_in_intro() {
        let mut game = GameController::new(GameConfig::default(), 4);
        let intro = game.snapshot();
        game.set_pause(true);
        assert_eq!(game.state(), &intro);
        game.tick();
        assert_eq!(game.state(), &intro);
    }

    #[test]
    fn rotate_against_wall_is_rejected() {
        let config = GameConfig::default();
        let catalog = config.catalog().clone();
        let mut game = playing(5);

        // vertical I hugging the left wall; turning it back flat would poke out
        let upright = Piece::spawn(catalog.get(FigureId::I).unwrap(), 10).rotated();
        let staged = game.state().with_current(upright.shifted(5, -5));
        game = GameController::from_state(config, staged, StdRng::seed_from_u64(5)).unwrap();
        assert!(game.state().current().unwrap().cells().all(|(_, col)| col == 0));

        let before = game.snapshot();
        game.move_current(Direction::Up);
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn observers_hear_only_real_transitions() {
        #[derive(Default)]
        struct Counter(Vec<Command>);
        impl Observer for Counter {
            fn on_transition(&mut self, command: Command, _state: &GameState) {
                self.0.push(command);
            }
        }

        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut game = GameController::new(GameConfig::default(), 6);
        game.subscribe(Box::new(Rc::clone(&counter)));

        game.tick(); // intro: ignored
        game.restart();
        game.tick();
        game.set_pause(true);
        game.set_pause(true); // already paused: ignored

        assert_eq!(
            counter.borrow().0,
            vec![Command::Restart, Command::Tick, Command::SetPause(true)]
        );
    }

    #[test]
    fn transition_is_pure() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let start = transition(
            &GameState::intro(&config),
            Command::Restart,
            &config,
            &mut rng,
        );
        let copy = start.clone();

        let next = transition(&start, Command::Tick, &config, &mut rng);
        assert_eq!(start, copy);
        assert_ne!(next, start);
    }
}
