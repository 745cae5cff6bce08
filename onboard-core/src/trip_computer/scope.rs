use crate::rounding::round_to;

/// Accumulated statistics for one reset scope (trip or total).
///
/// Times are whole seconds, distances are fractional metres, and
/// consumptions are litres per second (by time) or litres per 100 km
/// (by distance).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scope {
    real_time: u32,
    driving_time: u32,
    driven_distance: f64,
    consumption_by_time_sum: f64,
    consumption_by_distance_sum: f64,
    average_consumption_by_time: f64,
}

impl Scope {
    /// Seconds elapsed with the trip computer ticking.
    #[must_use]
    pub fn real_time(&self) -> u32 {
        self.real_time
    }

    /// Seconds elapsed while moving.
    #[must_use]
    pub fn driving_time(&self) -> u32 {
        self.driving_time
    }

    /// Distance covered, in metres.
    #[must_use]
    pub fn driven_distance(&self) -> f64 {
        self.driven_distance
    }

    /// Mean speed over the driving time, in km/h.
    ///
    /// Zero until the first driving second.
    #[must_use]
    pub fn average_speed(&self) -> f64 {
        if self.driving_time == 0 {
            return 0.0;
        }
        (self.driven_distance / 1000.0) / (f64::from(self.driving_time) / 3600.0)
    }

    /// Mean consumption per elapsed second, in litres per second.
    #[must_use]
    pub fn average_consumption_by_time(&self) -> f64 {
        self.average_consumption_by_time
    }

    /// Mean of the per-second consumption by distance, in litres per 100 km,
    /// rounded to one decimal.
    ///
    /// Zero until the first driving second.
    #[must_use]
    pub fn average_consumption_by_distance(&self) -> f64 {
        if self.driving_time == 0 {
            return 0.0;
        }
        round_to(
            self.consumption_by_distance_sum / f64::from(self.driving_time),
            1,
        )
    }

    pub(super) fn add_real_second(&mut self) {
        self.real_time += 1;
    }

    pub(super) fn add_driving_second(&mut self, metres: f64) {
        self.driving_time += 1;
        self.driven_distance += metres;
    }

    pub(super) fn add_consumption(&mut self, by_time: f64, by_distance: Option<f64>) {
        self.consumption_by_time_sum += by_time;
        if let Some(by_distance) = by_distance {
            self.consumption_by_distance_sum += by_distance;
        }
    }

    pub(super) fn update_average_consumption_by_time(&mut self) {
        self.average_consumption_by_time = if self.real_time == 0 {
            0.0
        } else {
            self.consumption_by_time_sum / f64::from(self.real_time)
        };
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
