use thiserror::Error;

/// Fuel drawn per second while accelerating within a band of speeds.
///
/// A band covers the closed range `min_speed..=max_speed` in km/h.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumptionBand {
    pub min_speed: u32,
    pub max_speed: u32,
    pub litres_per_second: f64,
}

impl ConsumptionBand {
    /// Creates a band covering `min_speed..=max_speed`.
    #[must_use]
    pub const fn new(min_speed: u32, max_speed: u32, litres_per_second: f64) -> Self {
        Self {
            min_speed,
            max_speed,
            litres_per_second,
        }
    }

    /// Returns `true` if `speed` falls within this band.
    #[must_use]
    pub fn contains(&self, speed: u32) -> bool {
        (self.min_speed..=self.max_speed).contains(&speed)
    }
}

/// Immutable constants shared by every component of a vehicle.
///
/// A single `VehicleConfig` is built once, validated, and then lent to each
/// component at construction. Fuel quantities are in litres, speeds in km/h,
/// and consumptions in litres per second unless noted otherwise.
///
/// With the `serde` feature enabled, missing fields fall back to
/// [`VehicleConfig::default`], so partial configuration files only need to
/// name the constants they override.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VehicleConfig {
    /// Tank capacity.
    pub max_fuel: f64,

    /// Fill level below which the tank reports running on reserve.
    pub reserve_fuel: f64,

    /// Initial fill level used by [`Vehicle::with_defaults`](crate::Vehicle::with_defaults).
    pub default_fuel: f64,

    /// Consumption while standing still with the engine running.
    pub idle_consumption: f64,

    /// Litres per km used to seed the range-estimation window.
    pub default_consumption: f64,

    pub min_speed: u32,
    pub max_speed: u32,

    pub min_acceleration: u32,
    pub max_acceleration: u32,
    pub default_acceleration: u32,

    /// Largest speed reduction a single brake call can apply.
    pub max_brake: u32,

    /// Speed lost per second while rolling without throttle or brake.
    pub freewheel_deceleration: u32,

    /// Consumption table applied while accelerating, ordered by speed.
    pub consumption_bands: Vec<ConsumptionBand>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_fuel: 60.0,
            reserve_fuel: 5.0,
            default_fuel: 20.0,
            idle_consumption: 0.0003,
            default_consumption: 4.8 / 100.0,
            min_speed: 0,
            max_speed: 250,
            min_acceleration: 5,
            max_acceleration: 20,
            default_acceleration: 10,
            max_brake: 10,
            freewheel_deceleration: 1,
            consumption_bands: vec![
                ConsumptionBand::new(1, 60, 0.0020),
                ConsumptionBand::new(61, 100, 0.0014),
                ConsumptionBand::new(101, 140, 0.0020),
                ConsumptionBand::new(141, 200, 0.0025),
                ConsumptionBand::new(201, 250, 0.0030),
            ],
        }
    }
}

/// Errors returned when a [`VehicleConfig`] is inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_fuel must be finite and positive, got {value}")]
    MaxFuel { value: f64 },

    #[error("`{field}` must lie within 0..={max_fuel} litres, got {value}")]
    FuelLevel {
        field: &'static str,
        value: f64,
        max_fuel: f64,
    },

    #[error("`{field}` must be finite and non-negative, got {value}")]
    Consumption { field: &'static str, value: f64 },

    #[error("speed bounds must satisfy 0 == min <= max, got {min}/{max}")]
    SpeedBounds { min: u32, max: u32 },

    #[error("acceleration bounds must satisfy 0 < min <= default <= max, got {min}/{default}/{max}")]
    AccelerationBounds { min: u32, default: u32, max: u32 },

    #[error("consumption band {index} ({min}..={max} km/h) is empty or outside the speed bounds")]
    BandRange { index: usize, min: u32, max: u32 },

    #[error("consumption band {index} overlaps or precedes the band before it")]
    BandOrder { index: usize },
}

impl VehicleConfig {
    /// Checks that all constants are mutually consistent.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_fuel.is_finite() || self.max_fuel <= 0.0 {
            return Err(ConfigError::MaxFuel {
                value: self.max_fuel,
            });
        }

        for (field, value) in [
            ("reserve_fuel", self.reserve_fuel),
            ("default_fuel", self.default_fuel),
        ] {
            if !(0.0..=self.max_fuel).contains(&value) {
                return Err(ConfigError::FuelLevel {
                    field,
                    value,
                    max_fuel: self.max_fuel,
                });
            }
        }

        for (field, value) in [
            ("idle_consumption", self.idle_consumption),
            ("default_consumption", self.default_consumption),
        ] {
            check_consumption(field, value)?;
        }

        if self.min_speed != 0 {
            return Err(ConfigError::SpeedBounds {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if self.min_acceleration == 0
            || self.min_acceleration > self.default_acceleration
            || self.default_acceleration > self.max_acceleration
        {
            return Err(ConfigError::AccelerationBounds {
                min: self.min_acceleration,
                default: self.default_acceleration,
                max: self.max_acceleration,
            });
        }

        let mut previous_max: Option<u32> = None;
        for (index, band) in self.consumption_bands.iter().enumerate() {
            if band.min_speed > band.max_speed
                || band.min_speed < self.min_speed
                || band.max_speed > self.max_speed
            {
                return Err(ConfigError::BandRange {
                    index,
                    min: band.min_speed,
                    max: band.max_speed,
                });
            }
            if previous_max.is_some_and(|max| band.min_speed <= max) {
                return Err(ConfigError::BandOrder { index });
            }
            check_consumption("consumption_bands", band.litres_per_second)?;
            previous_max = Some(band.max_speed);
        }

        Ok(())
    }

    /// Looks up the accelerating consumption for `speed`.
    ///
    /// Speeds outside every band consume nothing.
    #[must_use]
    pub fn consumption_at(&self, speed: u32) -> f64 {
        self.consumption_bands
            .iter()
            .find(|band| band.contains(speed))
            .map_or(0.0, |band| band.litres_per_second)
    }

    /// Clamps a requested maximum acceleration into the allowed bounds.
    #[must_use]
    pub fn clamp_acceleration(&self, acceleration: u32) -> u32 {
        acceleration.clamp(self.min_acceleration, self.max_acceleration)
    }
}

fn check_consumption(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Consumption { field, value })
    }
}
