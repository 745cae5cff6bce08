use crate::VehicleConfig;

/// Tracks the vehicle's speed and derives the instantaneous fuel draw.
///
/// The controller keeps its own copy of the engine state, toggled by
/// [`Engine`](crate::Engine), because consumption depends on it:
///
/// - Engine off: nothing is consumed, regardless of speed.
/// - Standing still: the idle consumption applies.
/// - Accelerating: the configured consumption band for the current speed applies.
/// - Rolling or braking: nothing is consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedController<'a> {
    config: &'a VehicleConfig,
    speed: u32,
    accelerating: bool,
    engine_running: bool,
}

impl<'a> SpeedController<'a> {
    /// Creates a controller at rest with the engine off.
    #[must_use]
    pub fn new(config: &'a VehicleConfig) -> Self {
        Self {
            config,
            speed: config.min_speed,
            accelerating: false,
            engine_running: false,
        }
    }

    /// Current speed in km/h.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Returns `true` if the last speed change was an increase.
    #[must_use]
    pub fn is_accelerating(&self) -> bool {
        self.accelerating
    }

    /// Litres drawn during the current second.
    #[must_use]
    pub fn consumption_rate(&self) -> f64 {
        if !self.engine_running {
            0.0
        } else if self.speed == 0 {
            self.config.idle_consumption
        } else if self.accelerating {
            self.config.consumption_at(self.speed)
        } else {
            0.0
        }
    }

    /// Sets the speed to `target`, capped at the maximum speed, and marks the
    /// controller as accelerating.
    pub fn increase_to(&mut self, target: u32) {
        self.speed = target.min(self.config.max_speed);
        self.accelerating = true;
    }

    /// Sets the speed to `target`, floored at the minimum speed, and clears
    /// the accelerating flag.
    ///
    /// The target is signed so callers can pass `speed - amount` directly.
    pub fn reduce_to(&mut self, target: i64) {
        let floor = i64::from(self.config.min_speed);
        let ceiling = i64::from(self.config.max_speed);
        let clamped = target.clamp(floor, ceiling);
        self.speed = u32::try_from(clamped).unwrap_or(self.config.min_speed);
        self.accelerating = false;
    }

    pub(crate) fn engine_start(&mut self) {
        self.engine_running = true;
    }

    pub(crate) fn engine_stop(&mut self) {
        self.engine_running = false;
    }
}
