mod scope;
mod window;

use tracing::trace;

use crate::VehicleConfig;

pub use scope::Scope;
pub use window::{ConsumptionWindow, WINDOW_SECONDS};

/// What the trip computer samples from the vehicle once per elapsed second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Current speed in km/h.
    pub speed: u32,

    /// Fuel drawn during this second, in litres.
    pub consumption_rate: f64,

    /// Current tank fill level, in litres.
    pub fill_level: f64,
}

/// The on-board computer aggregating driving statistics.
///
/// Each call to [`TripComputer::elapse_second`] folds one [`TickInput`] into
/// two independent scopes:
///
/// - The **trip** scope, cleared by [`TripComputer::trip_reset`] (and by
///   every engine stop).
/// - The **total** scope, cleared only by [`TripComputer::total_reset`].
///
/// The range estimate is shared by both scopes and is never reset.
/// It divides the fill level by the mean consumption of the last
/// [`WINDOW_SECONDS`] driving seconds.
#[derive(Debug)]
pub struct TripComputer {
    trip: Scope,
    total: Scope,
    actual_consumption_by_time: f64,
    actual_consumption_by_distance: f64,
    estimated_range: u32,
    window: ConsumptionWindow,
}

impl TripComputer {
    /// Creates a trip computer with empty scopes and a window seeded with the
    /// configured default consumption.
    #[must_use]
    pub fn new(config: &VehicleConfig) -> Self {
        Self {
            trip: Scope::default(),
            total: Scope::default(),
            actual_consumption_by_time: 0.0,
            actual_consumption_by_distance: f64::NAN,
            estimated_range: 0,
            window: ConsumptionWindow::filled_with(config.default_consumption),
        }
    }

    /// Statistics since the last trip reset.
    #[must_use]
    pub fn trip(&self) -> &Scope {
        &self.trip
    }

    /// Statistics since the last total reset.
    #[must_use]
    pub fn total(&self) -> &Scope {
        &self.total
    }

    /// Fuel drawn during the last elapsed second, in litres.
    #[must_use]
    pub fn actual_consumption_by_time(&self) -> f64 {
        self.actual_consumption_by_time
    }

    /// Instantaneous consumption in litres per 100 km.
    ///
    /// This is `NaN` until the current trip has seen a second of driving.
    /// Check with [`f64::is_nan`] before comparing or aggregating it.
    #[must_use]
    pub fn actual_consumption_by_distance(&self) -> f64 {
        self.actual_consumption_by_distance
    }

    /// Kilometres the remaining fuel lasts at the recent consumption.
    ///
    /// Saturates at [`u32::MAX`] when the window holds no consumption at all.
    #[must_use]
    pub fn estimated_range(&self) -> u32 {
        self.estimated_range
    }

    /// The samples behind [`TripComputer::estimated_range`].
    #[must_use]
    pub fn window(&self) -> &ConsumptionWindow {
        &self.window
    }

    /// Advances both scopes by one second.
    pub fn elapse_second(&mut self, input: TickInput) {
        let TickInput {
            speed,
            consumption_rate,
            fill_level,
        } = input;

        self.trip.add_real_second();
        self.total.add_real_second();
        self.actual_consumption_by_time = consumption_rate;

        let mut seconds_per_100_km = 0;
        if speed > 0 {
            seconds_per_100_km = 3600 * 100 / speed;
            let metres = 1000.0 * f64::from(speed) / 3600.0;
            self.trip.add_driving_second(metres);
            self.total.add_driving_second(metres);
        }

        self.actual_consumption_by_distance = if self.trip.driving_time() == 0 {
            f64::NAN
        } else {
            f64::from(seconds_per_100_km) * consumption_rate
        };

        let by_distance =
            Some(self.actual_consumption_by_distance).filter(|value| !value.is_nan());
        self.trip.add_consumption(consumption_rate, by_distance);
        self.total.add_consumption(consumption_rate, by_distance);

        if speed > 0 {
            self.window.push(consumption_rate * (3600.0 / f64::from(speed)));
        }
        // Saturating cast: an all-zero window yields u32::MAX.
        self.estimated_range = (fill_level / self.window.mean()).round_ties_even() as u32;

        self.trip.update_average_consumption_by_time();
        self.total.update_average_consumption_by_time();

        trace!(
            speed,
            consumption_rate,
            trip_real_time = self.trip.real_time(),
            total_real_time = self.total.real_time(),
            estimated_range = self.estimated_range,
            "trip computer tick"
        );
    }

    /// Clears the trip scope.
    ///
    /// The instantaneous consumption by distance returns to `NaN`.
    /// The total scope and the range estimate are left untouched.
    pub fn trip_reset(&mut self) {
        self.trip.reset();
        self.actual_consumption_by_distance = f64::NAN;
    }

    /// Clears the total scope, leaving the trip scope and range estimate untouched.
    pub fn total_reset(&mut self) {
        self.total.reset();
    }
}
