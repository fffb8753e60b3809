//! Starfield backdrop
//!
//! A bounded arena of decorative stars. Each star is spawned by a timer and
//! expires on its own after a fixed lifetime; nothing else depends on it.

use std::time::Duration;

use rand::Rng;

use crate::domain::services::timers::{TimerId, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarfieldSettings {
    /// Stars scattered over `initial_window` when the field starts
    pub initial: usize,
    pub initial_window: Duration,
    pub spawn_interval: Duration,
    pub lifetime: Duration,
    /// Arena capacity; spawns beyond it are dropped
    pub capacity: usize,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            initial: 50,
            initial_window: Duration::from_millis(2000),
            spawn_interval: Duration::from_millis(500),
            lifetime: Duration::from_millis(10_000),
            capacity: 96,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position as a fraction of the viewport width
    pub x: f32,
    /// Vertical position as a fraction of the viewport height
    pub y: f32,
    /// 1..=4
    pub size: u8,
    /// 0.2..0.7
    pub opacity: f32,
    pub twinkle_period: Duration,
    pub born: Duration,
    pub expires: Duration,
}

impl Star {
    fn random<R: Rng + ?Sized>(rng: &mut R, born: Duration, lifetime: Duration) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            size: rng.random_range(1..=4),
            opacity: rng.random_range(0.2..0.7),
            twinkle_period: Duration::from_millis(rng.random_range(2000..5000)),
            born,
            expires: born + lifetime,
        }
    }

    /// Twinkle between the base opacity and 0.8, once per period.
    pub fn brightness(&self, now: Duration) -> f32 {
        let period = self.twinkle_period.as_secs_f32().max(f32::EPSILON);
        let age = now.saturating_sub(self.born).as_secs_f32();
        let phase = (age / period).fract();
        let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        self.opacity + (0.8 - self.opacity).max(0.0) * wave
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StarTask {
    Spawn,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    settings: StarfieldSettings,
    stars: Vec<Star>,
    timers: TimerQueue<StarTask>,
    spawner: Option<TimerId>,
    running: bool,
    dropped: usize,
}

impl Starfield {
    pub fn new(settings: StarfieldSettings) -> Self {
        Self {
            settings,
            stars: Vec::with_capacity(settings.capacity),
            timers: TimerQueue::new(),
            spawner: None,
            running: false,
            dropped: 0,
        }
    }

    /// Schedule the initial burst and the repeating spawner.
    pub fn start<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) {
        if self.running {
            return;
        }
        self.running = true;
        self.timers.advance_to(now);

        let window = self.settings.initial_window.as_millis() as u64;
        // Spawns past capacity would be dropped anyway.
        for _ in 0..self.settings.initial.min(self.settings.capacity) {
            let offset = if window == 0 { 0 } else { rng.random_range(0..window) };
            self.timers
                .schedule_once(Duration::from_millis(offset), StarTask::Spawn);
        }
        self.spawner = Some(
            self.timers
                .schedule_repeating(self.settings.spawn_interval, StarTask::Spawn),
        );
    }

    /// Fire due spawns and drop expired stars.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) {
        while let Some((_, task)) = self.timers.pop_due(now) {
            match task {
                StarTask::Spawn => {
                    let at = self.timers.now();
                    self.expire(at);
                    self.spawn(at, rng);
                }
            }
        }
        self.timers.advance_to(now);
        self.expire(now);
    }

    /// Cancel every timer and release all stars. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.timers.clear();
        self.spawner = None;
        self.stars.clear();
        self.running = false;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity
    }

    /// Spawns dropped because the arena was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        let next_expiry = self.stars.iter().map(|s| s.expires).min();
        match (self.timers.next_due(), next_expiry) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn spawn<R: Rng + ?Sized>(&mut self, at: Duration, rng: &mut R) {
        if self.stars.len() >= self.settings.capacity {
            self.dropped += 1;
            return;
        }
        self.stars.push(Star::random(rng, at, self.settings.lifetime));
    }

    fn expire(&mut self, now: Duration) {
        self.stars.retain(|s| !s.is_expired(now));
    }
}
