//! CorePlugin wires global frame timing for the simulation.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

/// Fixed per-frame step fed to the gameplay systems. Using a nominal delta
/// instead of the raw frame delta keeps clock advancement and text reveal
/// smooth when the renderer stutters.
const NOMINAL_FRAME_DELTA: Duration = Duration::from_nanos(16_666_667);

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks the scaled simulation step derived from the nominal frame delta.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_real_delta: Duration,
    last_scaled_delta: Duration,
    elapsed: Duration,
    frames: u64,
}

impl SimulationClock {
    /// Creates a new clock with the provided time-scale multiplier.
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_real_delta: Duration::ZERO,
            last_scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// Sets the time-scale multiplier (clamped to a small positive minimum).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    /// Returns the current time-scale multiplier.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Last raw delta reported by Bevy's Time resource, kept for diagnostics.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// The step gameplay systems should consume this frame.
    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    /// Total scaled duration elapsed since the clock was initialised.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames ticked so far.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Records a frame: the real delta is stored for diagnostics while the
    /// scaled step is always derived from the nominal frame delta.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_scaled_delta = NOMINAL_FRAME_DELTA.mul_f32(self.time_scale);
        self.elapsed += self.last_scaled_delta;
        self.frames = self.frames.saturating_add(1);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers simulation timing systems and resources.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    /// Creates a CorePlugin with the provided time-scale multiplier.
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationClock::new(self.time_scale))
            .add_systems(Startup, log_startup_time_scale)
            .add_systems(Update, update_simulation_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_scaled_ticks);
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_time_scale(clock: Res<SimulationClock>) {
    info!(
        "CorePlugin initialised with time scale: {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    if timer.timer.tick(clock.last_scaled_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Sim elapsed: {:.2}s | scale: {:.3} | frame: {} | real dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.time_scale(),
            clock.frames(),
            clock.last_real_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_nominal_step_regardless_of_real_delta() {
        let mut clock = SimulationClock::new(1.0);
        clock.tick(Duration::from_secs_f32(0.25));

        assert_eq!(clock.last_real_delta(), Duration::from_secs_f32(0.25));
        assert_eq!(clock.last_scaled_delta(), NOMINAL_FRAME_DELTA);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn clock_scales_nominal_step_with_multiplier() {
        let mut clock = SimulationClock::new(2.0);
        clock.tick(Duration::from_secs_f32(0.016));

        assert_eq!(clock.last_scaled_delta(), NOMINAL_FRAME_DELTA.mul_f32(2.0));
        assert_eq!(clock.elapsed(), NOMINAL_FRAME_DELTA.mul_f32(2.0));
    }

    #[test]
    fn clock_clamps_min_time_scale() {
        let mut clock = SimulationClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);

        clock.set_time_scale(-5.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }
}
