//! Game controller - owns the game state and serializes every change
//!
//! All mutation happens through `start`, `pick_color` and `tick`, called
//! from a single event loop. The front end never touches state directly: it
//! reads snapshots pushed to its observers.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::{
    config::GameConfig,
    engine::{Scheduler, TaskId},
    error::ConfigError,
    sequencing,
    tone::ToneEmitter,
};

use super::{
    color::Color,
    observer::Observer,
    playback::{Advance, Cue, Playback, Scheduled},
    sequence::{next_sequence, Sequence},
    state::{GameStatus, Judgement, Snapshot},
};

pub struct Game<E: ToneEmitter, R: Rng = StdRng> {
    config: GameConfig,
    tone_length: sequencing::Duration,
    status: GameStatus,
    sequence: Sequence,
    player_input: Vec<Color>,
    playback: Option<Playback>,
    scheduler: Scheduler<Cue>,
    /// The single outstanding playback cue, if any
    pending: Option<TaskId>,
    emitter: E,
    rng: R,
    observers: Vec<Box<dyn Observer>>,
}

impl<E: ToneEmitter> Game<E, StdRng> {
    /// Create a game seeded from the operating system's entropy source.
    pub fn from_entropy(config: GameConfig, emitter: E) -> Result<Self, ConfigError> {
        Self::new(config, emitter, StdRng::from_os_rng())
    }
}

impl<E: ToneEmitter, R: Rng> Game<E, R> {
    pub fn new(config: GameConfig, emitter: E, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tone_length: config.tone_duration(),
            config,
            status: GameStatus::Idle,
            sequence: Sequence::new(),
            player_input: Vec::new(),
            playback: None,
            scheduler: Scheduler::new(),
            pending: None,
            emitter,
            rng,
            observers: Vec::new(),
        })
    }

    /// Register an observer and send it the current state.
    pub fn subscribe(&mut self, mut observer: impl Observer + 'static) {
        observer.notify(&self.snapshot());
        self.observers.push(Box::new(observer));
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn player_input(&self) -> &[Color] {
        &self.player_input
    }

    pub fn cursor(&self) -> Option<usize> {
        self.playback.as_ref().and_then(Playback::cursor)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Virtual time the game has been ticked up to.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// When the next playback cue is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Whether a pick right now would be judged.
    pub fn accepts_input(&self) -> bool {
        match self.status {
            GameStatus::AwaitingInput => true,
            GameStatus::Replaying => {
                self.config.input_during_pulse
                    && self.playback.as_ref().is_some_and(Playback::input_open)
            }
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            sequence: self.sequence.as_slice().to_vec(),
            player_input: self.player_input.clone(),
            cursor: self.cursor(),
            input_open: self.playback.as_ref().is_some_and(Playback::input_open),
            accepts_input: self.accepts_input(),
        }
    }

    /// Start (or restart) a game: fresh one-color sequence, then playback.
    pub fn start(&mut self) {
        self.cancel_pending();
        self.sequence = next_sequence(&Sequence::new(), &mut self.rng);
        self.player_input.clear();
        if let Some(first) = self.sequence.get(0) {
            info!(first = %first, "game started");
        }
        self.begin_playback();
    }

    /// Judge one pick against the sequence.
    pub fn pick_color(&mut self, color: Color) -> Judgement {
        if !self.accepts_input() {
            trace!(color = %color, status = ?self.status, "pick ignored");
            return Judgement::Ignored;
        }

        // Audible feedback comes first, right or wrong
        self.sound(color);

        let mut attempt = self.player_input.clone();
        attempt.push(color);

        if !self.sequence.starts_with(&attempt) {
            self.game_over();
            return Judgement::Mismatch;
        }

        self.player_input = attempt;

        if self.player_input.len() == self.sequence.len() {
            self.sequence = next_sequence(&self.sequence, &mut self.rng);
            self.player_input.clear();
            self.begin_playback();
            return Judgement::RoundComplete;
        }

        self.notify();
        Judgement::Accepted
    }

    /// Advance virtual time to `now`, firing every cue that falls due.
    pub fn tick(&mut self, now: Duration) {
        while let Some(cue) = self.scheduler.pop_due(now) {
            self.pending = None;
            self.apply_cue(cue);
        }
    }

    /// Cancel outstanding playback and silence the emitter. Used when the
    /// front end shuts down mid-game.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.playback = None;
        self.emitter.silence();
    }

    fn begin_playback(&mut self) {
        self.cancel_pending();
        let playback = Playback::new(
            self.sequence.len(),
            self.config.step_interval(),
            self.config.reopen_after(),
        );
        let first = playback.first();
        self.playback = Some(playback);
        self.status = GameStatus::Replaying;
        debug!(len = self.sequence.len(), "round starting");
        self.schedule(first);
        self.notify();
    }

    fn apply_cue(&mut self, cue: Cue) {
        let advance = match self.playback.as_mut() {
            Some(playback) => playback.on_cue(cue),
            None => {
                warn!(?cue, "cue fired with no playback in progress");
                return;
            }
        };

        match advance {
            Advance::Pulse { index, next } => {
                if let Some(color) = self.sequence.get(index) {
                    debug!(index, color = %color, "pulse");
                    self.sound(color);
                }
                self.schedule(next);
            }
            Advance::Reopen { next } => self.schedule(next),
            Advance::Finished => {
                self.playback = None;
                self.status = GameStatus::AwaitingInput;
                debug!("playback finished, awaiting input");
            }
            Advance::Rejected => {
                warn!(?cue, "out-of-order cue rejected");
                return;
            }
        }

        self.notify();
    }

    fn game_over(&mut self) {
        let score = self.sequence.len().saturating_sub(1);
        info!(score, "game over");
        self.cancel_pending();
        self.playback = None;
        self.sequence.clear();
        self.player_input.clear();
        self.status = GameStatus::GameOver;
        self.notify();
    }

    fn schedule(&mut self, next: Scheduled) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(self.scheduler.schedule_in(next.delay, next.cue));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        debug_assert!(self.scheduler.is_empty());
    }

    fn sound(&mut self, color: Color) {
        let at = self.emitter.now();
        if let Err(err) = self.emitter.trigger(color.pitch(), self.tone_length, at) {
            warn!(color = %color, error = %err, "tone dropped");
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.notify(&snapshot);
        }
    }
}
