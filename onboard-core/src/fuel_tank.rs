use crate::VehicleConfig;

/// A bounded fuel reservoir.
///
/// The fill level always lies within `0..=max_fuel`.
/// Every input is clamped rather than rejected, so no operation can fail.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTank<'a> {
    config: &'a VehicleConfig,
    fill_level: f64,
}

impl<'a> FuelTank<'a> {
    /// Creates a tank holding `fill_level` litres, clamped to the tank's capacity.
    ///
    /// A NaN level is treated as an empty tank.
    #[must_use]
    pub fn new(config: &'a VehicleConfig, fill_level: f64) -> Self {
        let fill_level = if fill_level.is_nan() {
            0.0
        } else {
            fill_level.clamp(0.0, config.max_fuel)
        };
        Self { config, fill_level }
    }

    /// Current fill level in litres.
    #[must_use]
    pub fn fill_level(&self) -> f64 {
        self.fill_level
    }

    /// Returns `true` while the fill level is below the reserve threshold.
    #[must_use]
    pub fn is_on_reserve(&self) -> bool {
        self.fill_level < self.config.reserve_fuel
    }

    /// Returns `true` when the tank is filled to capacity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fill_level == self.config.max_fuel
    }

    /// Returns `true` once the tank has been drained completely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill_level == 0.0
    }

    /// Draws `litres` from the tank, stopping at empty.
    pub fn consume(&mut self, litres: f64) {
        self.fill_level = (self.fill_level - non_negative(litres)).max(0.0);
    }

    /// Adds `litres` to the tank, stopping at capacity.
    pub fn refuel(&mut self, litres: f64) {
        self.fill_level = (self.fill_level + non_negative(litres)).min(self.config.max_fuel);
    }
}

/// Treats negative and NaN quantities as zero.
fn non_negative(litres: f64) -> f64 {
    if litres > 0.0 { litres } else { 0.0 }
}
