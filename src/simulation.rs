use std::time::{Duration, Instant};

use crate::core::{earliest_deadline, Periodic};
use crate::settings::{SpeedLevel, SpeedSettings};

/// Canonical rotation tick, ~60 Hz
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(16);
/// How often the settings file is re-read
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(5);

const FULL_TURN: f32 = 360.0;

/// Blade rotation in degrees, kept in [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RotationAngle(f32);

impl RotationAngle {
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.rem_euclid(FULL_TURN))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Advance by one tick at `speed` and wrap back into range
    pub fn advanced(self, speed: SpeedLevel) -> Self {
        let mut degrees = self.0 + speed.degrees_per_tick();
        if degrees >= FULL_TURN {
            degrees -= FULL_TURN;
        }
        Self(degrees)
    }
}

/// Everything the callbacks share. Each field has exactly one writer:
/// the rotation tick writes `angle`, the settings poll writes `speed`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurbineState {
    pub angle: RotationAngle,
    pub speed: SpeedLevel,
}

impl TurbineState {
    /// One rotation tick
    pub fn tick(&mut self) {
        self.angle = self.angle.advanced(self.speed);
    }
}

/// What a pass over the timers did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerOutcome {
    /// The angle moved and the frame must be repainted
    pub redraw: bool,
    /// The settings file was polled
    pub polled: bool,
}

/// Turbine state plus the two periodic tasks that mutate it
///
/// The run-loop calls [`Simulation::run_due`] whenever it wakes and sleeps
/// until [`Simulation::next_deadline`]. Both tasks run on the loop thread,
/// one after the other, so neither can observe a half-applied update.
#[derive(Debug)]
pub struct Simulation {
    state: TurbineState,
    settings: SpeedSettings,
    rotation: Periodic,
    poll: Periodic,
}

impl Simulation {
    /// Load the settings once, then schedule the first tick immediately and
    /// the first re-poll one poll period out
    pub fn start(
        settings: SpeedSettings,
        tick_period: Duration,
        poll_period: Duration,
        now: Instant,
    ) -> Self {
        let mut state = TurbineState::default();
        settings.poll(&mut state.speed);

        log::info!(
            "Rotation every {:?}, settings poll every {:?} from {}",
            tick_period,
            poll_period,
            settings.path().display()
        );

        Self {
            state,
            settings,
            rotation: Periodic::immediate(tick_period, now),
            poll: Periodic::delayed(poll_period, now),
        }
    }

    /// Fire whichever tasks are due at `now`
    pub fn run_due(&mut self, now: Instant) -> TimerOutcome {
        let mut outcome = TimerOutcome::default();

        if self.rotation.fire_if_due(now) {
            self.state.tick();
            outcome.redraw = true;
        }

        if self.poll.fire_if_due(now) {
            self.settings.poll(&mut self.state.speed);
            outcome.polled = true;
        }

        outcome
    }

    /// When the loop must wake up next
    pub fn next_deadline(&self) -> Instant {
        earliest_deadline([&self.rotation, &self.poll]).unwrap_or_else(|| self.rotation.next_due())
    }

    /// Snapshot for the renderer
    pub fn state(&self) -> TurbineState {
        self.state
    }
}
