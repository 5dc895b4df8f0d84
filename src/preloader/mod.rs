pub mod particles;

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schedule::{Deadline, IntervalTimer};

pub use particles::Particle;

pub const MAX_PROGRESS: f32 = 100.;
const TICK_MS: u64 = 80;
const MIN_DISPLAY_MS: u64 = 1000;
const HIDE_GRACE_MS: u64 = 100;
const INCREMENT_MIN: f32 = 3.0;
const INCREMENT_MAX: f32 = 5.0;
// anything smaller could keep the preloader on screen for minutes
const SMALLEST_INCREMENT: f32 = 0.1;
const PARTICLE_COUNT: usize = 10;

/// Status line shown under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadPhase {
    Initializing,
    LoadingAssets,
    AlmostThere,
    Welcome,
}

impl LoadPhase {
    /// Lower progress bound of every phase, highest first.
    const THRESHOLDS: [(f32, LoadPhase); 4] = [
        (85., LoadPhase::Welcome),
        (50., LoadPhase::AlmostThere),
        (15., LoadPhase::LoadingAssets),
        (0., LoadPhase::Initializing),
    ];

    pub fn from_progress(progress: f32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| progress >= *threshold)
            .map(|(_, phase)| *phase)
            .unwrap_or(LoadPhase::Initializing)
    }

    pub fn text(&self) -> &'static str {
        match self {
            LoadPhase::Initializing => "Initializing...",
            LoadPhase::LoadingAssets => "Loading creative assets...",
            LoadPhase::AlmostThere => "Almost there...",
            LoadPhase::Welcome => "Welcome!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderState {
    /// Progress is still increasing on every tick.
    Running,
    /// Progress hit 100, waiting for the hide deadline.
    Completing,
    /// Completion was signalled, nothing runs anymore.
    Hidden,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PreloaderConfig {
    pub tick_ms: u64,
    pub min_display_ms: u64,
    pub grace_ms: u64,
    pub increment_min: f32,
    pub increment_max: f32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            min_display_ms: MIN_DISPLAY_MS,
            grace_ms: HIDE_GRACE_MS,
            increment_min: INCREMENT_MIN,
            increment_max: INCREMENT_MAX,
        }
    }
}

impl PreloaderConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    /// Increment bounds, forced positive and ordered.
    pub fn increment_range(&self) -> (f32, f32) {
        let low = if self.increment_min.is_finite() {
            self.increment_min.max(SMALLEST_INCREMENT)
        } else {
            INCREMENT_MIN
        };
        let high = if self.increment_max.is_finite() {
            self.increment_max.max(low)
        } else {
            low
        };
        (low, high)
    }
}

pub type CompletionCallback = Box<dyn FnOnce()>;

/// Synthetic loading screen. Progress grows by a random amount on every tick
/// until it reaches 100, then the preloader hides once it has been visible for
/// at least the minimum display duration and calls its completion callback.
pub struct Preloader {
    config: PreloaderConfig,
    progress: f32,
    phase: LoadPhase,
    state: PreloaderState,
    started_at: Instant,
    tick_timer: IntervalTimer,
    hide: Deadline,
    // dropped untaken when the preloader is unmounted before hiding
    on_complete: Option<CompletionCallback>,
    particles: Vec<Particle>,
}

impl Preloader {
    /// Mounts the preloader: records the start time and starts the tick timer.
    pub fn new(config: PreloaderConfig, now: Instant) -> Self {
        let mut tick_timer = IntervalTimer::new(config.tick());
        tick_timer.start(now);
        Self {
            config,
            progress: 0.,
            phase: LoadPhase::Initializing,
            state: PreloaderState::Running,
            started_at: now,
            tick_timer,
            hide: Deadline::default(),
            on_complete: None,
            particles: Vec::new(),
        }
    }

    pub fn with_completion(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    pub fn with_particles<R: Rng>(mut self, rng: &mut R) -> Self {
        self.particles = (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect();
        self
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn state(&self) -> PreloaderState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == PreloaderState::Hidden
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide.at()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_ticking(&self) -> bool {
        self.tick_timer.is_active()
    }

    /// Runs every tick that became due, then the hide deadline if it passed.
    /// Returns how long until something else is due, `None` once hidden.
    pub fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<Duration> {
        for _ in 0..self.tick_timer.due_ticks(now) {
            self.tick(now, rng);
        }

        if self.state == PreloaderState::Completing && self.hide.fire(now) {
            self.state = PreloaderState::Hidden;
            info!(
                "Preloader hidden after {} ms",
                now.duration_since(self.started_at).as_millis()
            );
            if let Some(on_complete) = self.on_complete.take() {
                on_complete();
            }
        }

        match self.state {
            PreloaderState::Running => self.tick_timer.until_next(now),
            PreloaderState::Completing => self
                .hide
                .at()
                .map(|at| at.saturating_duration_since(now)),
            PreloaderState::Hidden => None,
        }
    }

    /// Single tick handler invocation. Does nothing once progress reached 100.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        if self.state != PreloaderState::Running {
            return;
        }

        let (low, high) = self.config.increment_range();
        let increment = if high > low {
            rng.random_range(low..=high)
        } else {
            low
        };
        self.progress = (self.progress + increment).min(MAX_PROGRESS);
        self.phase = LoadPhase::from_progress(self.progress);

        if self.progress >= MAX_PROGRESS {
            self.tick_timer.cancel();
            self.begin_completing(now);
        }
    }

    fn begin_completing(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let hide_at = if elapsed >= self.config.min_display() {
            now + self.config.grace()
        } else {
            now + (self.config.min_display() - elapsed)
        };
        debug!(
            "Preloader reached 100% after {} ms, hiding in {} ms",
            elapsed.as_millis(),
            hide_at.duration_since(now).as_millis()
        );
        self.state = PreloaderState::Completing;
        self.hide.schedule(hide_at);
    }
}
