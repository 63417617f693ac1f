//! Splash-then-main startup sequence.
//!
//! `Hidden → SplashShown → MainShown`, each transition happening once.
//! Time is passed in explicitly so the sequence can be driven by the UI's
//! frame clock and tested without sleeping.

use std::time::{Duration, Instant};

pub const SPLASH_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    Hidden,
    SplashShown,
    MainShown,
}

#[derive(Debug)]
pub struct StartupSequence {
    phase: StartupPhase,
    splash_started: Option<Instant>,
    delay: Duration,
}

impl Default for StartupSequence {
    fn default() -> Self {
        Self::new(SPLASH_DURATION)
    }
}

impl StartupSequence {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: StartupPhase::Hidden,
            splash_started: None,
            delay,
        }
    }

    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    /// Advance based on `now`. Returns the new phase if a transition happened.
    ///
    /// The first call shows the splash and starts the single-shot timer;
    /// the main window follows once the delay has fully elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<StartupPhase> {
        match self.phase {
            StartupPhase::Hidden => {
                self.splash_started = Some(now);
                self.phase = StartupPhase::SplashShown;
                log::debug!("Startup: splash shown");
            }
            StartupPhase::SplashShown => {
                let started = self.splash_started?;
                if now.saturating_duration_since(started) < self.delay {
                    return None;
                }
                self.phase = StartupPhase::MainShown;
                log::debug!("Startup: main window shown");
            }
            StartupPhase::MainShown => return None,
        }
        Some(self.phase)
    }

    /// Time left on the splash timer, `None` outside the splash phase.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match (self.phase, self.splash_started) {
            (StartupPhase::SplashShown, Some(started)) => {
                Some(self.delay.saturating_sub(now.saturating_duration_since(started)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let seq = StartupSequence::default();
        assert_eq!(seq.phase(), StartupPhase::Hidden);
        assert_eq!(seq.remaining(Instant::now()), None);
    }

    #[test]
    fn test_main_not_shown_before_delay() {
        let t0 = Instant::now();
        let mut seq = StartupSequence::default();
        assert_eq!(seq.tick(t0), Some(StartupPhase::SplashShown));
        assert_eq!(seq.tick(t0 + Duration::from_millis(4_999)), None);
        assert_eq!(seq.phase(), StartupPhase::SplashShown);
        assert_eq!(
            seq.remaining(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
        assert_eq!(seq.tick(t0 + SPLASH_DURATION), Some(StartupPhase::MainShown));
    }

    #[test]
    fn test_transitions_happen_once() {
        let t0 = Instant::now();
        let mut seq = StartupSequence::new(Duration::from_millis(10));
        let mut transitions = Vec::new();
        for ms in [0u64, 5, 10, 20, 1_000, 100_000] {
            if let Some(phase) = seq.tick(t0 + Duration::from_millis(ms)) {
                transitions.push(phase);
            }
        }
        assert_eq!(
            transitions,
            vec![StartupPhase::SplashShown, StartupPhase::MainShown]
        );
    }
}
