//! Game controller: owns one game state, translates presentation intents
//! into domain mutations, and notifies observers after every intent.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::clock::{GameClock, SystemClock};
use crate::domain::snapshot::{self, CardView, GameSnapshot};
use crate::domain::state::GameState;
use crate::domain::themes::Theme;
use crate::domain::CardId;
use crate::errors::domain::DomainError;

/// Payload-free state-change observer. Observers are expected to re-read the
/// snapshot after each call; no diff is provided.
pub type Observer = Box<dyn FnMut()>;

/// Owns exactly one [`GameState`] for its lifetime. All state changes flow
/// through [`choose`], [`shuffle`], and [`restart`]; readers take owned
/// snapshots, never a handle into internal storage.
///
/// [`choose`]: GameController::choose
/// [`shuffle`]: GameController::shuffle
/// [`restart`]: GameController::restart
pub struct GameController<C> {
    config: GameConfig,
    content_at: Box<dyn Fn(usize) -> C>,
    clock: Arc<dyn GameClock>,
    rng: ChaCha8Rng,
    state: GameState<C>,
    observers: Vec<Observer>,
}

impl GameController<String> {
    /// Controller backed by a glyph theme, one pair per glyph.
    pub fn from_theme(theme: Theme) -> Result<Self, DomainError> {
        let config = GameConfig::new(theme.pair_count());
        Self::new(config, move |pair_index| theme.content_at(pair_index))
    }
}

impl<C: Clone + PartialEq> GameController<C> {
    /// Controller on the real clock.
    ///
    /// `content_at` must be pure and deterministic over pair indices; it is
    /// kept for the lifetime of the controller and replayed on every restart.
    pub fn new<F>(config: GameConfig, content_at: F) -> Result<Self, DomainError>
    where
        F: Fn(usize) -> C + 'static,
    {
        Self::with_clock(config, content_at, Arc::new(SystemClock::new()))
    }

    /// Same as [`new`](GameController::new) with an explicit time source, for
    /// deterministic simulations.
    pub fn with_clock<F>(
        config: GameConfig,
        content_at: F,
        clock: Arc<dyn GameClock>,
    ) -> Result<Self, DomainError>
    where
        F: Fn(usize) -> C + 'static,
    {
        config.validate()?;

        let mut rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        info!(pair_count = config.pair_count, "starting new game");
        let state = GameState::new(
            config.pair_count,
            config.bonus_time_limit,
            &content_at,
            &mut rng,
        );

        Ok(Self {
            config,
            content_at: Box::new(content_at),
            clock,
            rng,
            state,
            observers: Vec::new(),
        })
    }

    /// Reveal a card. In-state no-ops (unknown id, re-tap, matched card)
    /// still notify, so observers can re-evaluate time-derived fields.
    pub fn choose(&mut self, id: CardId) {
        let now = self.clock.now();
        debug!(card_id = id, "choose intent");
        self.state.choose(id, now);
        self.notify();
    }

    /// Reorder the deck in place.
    pub fn shuffle(&mut self) {
        debug!("shuffle intent");
        self.state.shuffle(&mut self.rng);
        self.notify();
    }

    /// Discard the current game and deal a fresh deck from the same config
    /// and content source. Prior state is irrecoverable.
    pub fn restart(&mut self) {
        info!(pair_count = self.config.pair_count, "restart intent");
        let content_at = &self.content_at;
        self.state = GameState::new(
            self.config.pair_count,
            self.config.bonus_time_limit,
            |pair_index| content_at(pair_index),
            &mut self.rng,
        );
        self.notify();
    }

    /// Owned per-card views of the deck in play order.
    pub fn cards(&self) -> Vec<CardView<C>> {
        self.snapshot().cards
    }

    /// Owned snapshot of the whole deck at the clock's current time.
    pub fn snapshot(&self) -> GameSnapshot<C> {
        snapshot::snapshot(&self.state, self.clock.now())
    }

    /// Register a state-change observer. Observers run synchronously, in
    /// registration order, at the end of every intent.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}
