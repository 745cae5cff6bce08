//! Read-only views formatting a [`Vehicle`]'s state for presentation.
//!
//! Views only round and convert units; they never change the vehicle.
//! Quantities are reported as [`uom`] SI types so callers choose the display
//! unit. Consumptions by distance are plain `f64` values in litres per
//! 100 km.

use std::fmt;

use uom::si::{
    f64::{Length, Time, Velocity, Volume, VolumeRate},
    length::kilometer,
    time::second,
    velocity::kilometer_per_hour,
    volume::liter,
    volume_rate::liter_per_second,
};

use crate::{FuelTank, Scope, TripComputer, Vehicle, rounding::round_to};

/// Fuel gauge: fill level to two decimals plus the warning lamps.
#[derive(Debug, Clone, Copy)]
pub struct FuelTankDisplay<'v> {
    tank: &'v FuelTank<'v>,
}

impl<'v> FuelTankDisplay<'v> {
    #[must_use]
    pub fn new(vehicle: &'v Vehicle<'_>) -> Self {
        Self {
            tank: vehicle.fuel_tank(),
        }
    }

    #[must_use]
    pub fn fill_level(&self) -> Volume {
        Volume::new::<liter>(round_to(self.tank.fill_level(), 2))
    }

    #[must_use]
    pub fn is_on_reserve(&self) -> bool {
        self.tank.is_on_reserve()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tank.is_complete()
    }
}

/// Speedometer.
#[derive(Debug, Clone, Copy)]
pub struct DrivingInformationDisplay {
    speed: u32,
}

impl DrivingInformationDisplay {
    #[must_use]
    pub fn new(vehicle: &Vehicle<'_>) -> Self {
        Self {
            speed: vehicle.speed(),
        }
    }

    #[must_use]
    pub fn actual_speed(&self) -> Velocity {
        Velocity::new::<kilometer_per_hour>(f64::from(self.speed))
    }
}

/// The trip computer's screen.
#[derive(Debug, Clone, Copy)]
pub struct OnBoardComputerDisplay<'v> {
    computer: &'v TripComputer,
    speed: u32,
}

impl<'v> OnBoardComputerDisplay<'v> {
    #[must_use]
    pub fn new(vehicle: &'v Vehicle<'_>) -> Self {
        Self {
            computer: vehicle.trip_computer(),
            speed: vehicle.speed(),
        }
    }

    /// Statistics since the last trip reset.
    #[must_use]
    pub fn trip(&self) -> ScopeDisplay<'v> {
        ScopeDisplay {
            scope: self.computer.trip(),
        }
    }

    /// Statistics since the last total reset.
    #[must_use]
    pub fn total(&self) -> ScopeDisplay<'v> {
        ScopeDisplay {
            scope: self.computer.total(),
        }
    }

    #[must_use]
    pub fn actual_speed(&self) -> Velocity {
        Velocity::new::<kilometer_per_hour>(f64::from(self.speed))
    }

    /// Fuel drawn during the last second, unrounded.
    #[must_use]
    pub fn actual_consumption_by_time(&self) -> VolumeRate {
        VolumeRate::new::<liter_per_second>(self.computer.actual_consumption_by_time())
    }

    /// Instantaneous litres per 100 km to one decimal.
    ///
    /// Returns `None` until the current trip has seen a second of driving.
    #[must_use]
    pub fn actual_consumption_by_distance(&self) -> Option<f64> {
        let value = self.computer.actual_consumption_by_distance();
        (!value.is_nan()).then(|| round_to(value, 1))
    }

    #[must_use]
    pub fn estimated_range(&self) -> Length {
        Length::new::<kilometer>(f64::from(self.computer.estimated_range()))
    }
}

/// One reset scope as shown on the trip computer.
#[derive(Debug, Clone, Copy)]
pub struct ScopeDisplay<'v> {
    scope: &'v Scope,
}

impl ScopeDisplay<'_> {
    #[must_use]
    pub fn real_time(&self) -> Time {
        Time::new::<second>(f64::from(self.scope.real_time()))
    }

    #[must_use]
    pub fn driving_time(&self) -> Time {
        Time::new::<second>(f64::from(self.scope.driving_time()))
    }

    /// Distance in whole metres, shown in kilometres to two decimals.
    #[must_use]
    pub fn driven_distance(&self) -> Length {
        let metres = self.scope.driven_distance().trunc();
        Length::new::<kilometer>(round_to(metres / 1000.0, 2))
    }

    /// Average speed to one decimal (km/h).
    #[must_use]
    pub fn average_speed(&self) -> Velocity {
        Velocity::new::<kilometer_per_hour>(round_to(self.scope.average_speed(), 1))
    }

    /// Average litres per second to five decimals.
    #[must_use]
    pub fn average_consumption_by_time(&self) -> VolumeRate {
        VolumeRate::new::<liter_per_second>(round_to(
            self.scope.average_consumption_by_time(),
            5,
        ))
    }

    /// Average litres per 100 km to one decimal.
    #[must_use]
    pub fn average_consumption_by_distance(&self) -> f64 {
        round_to(self.scope.average_consumption_by_distance(), 1)
    }
}

/// A printable snapshot of every display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub engine_running: bool,
    pub speed: Velocity,
    pub fill_level: Volume,
    pub on_reserve: bool,
    pub tank_full: bool,
    pub estimated_range: Length,
    pub consumption_by_time: VolumeRate,
    pub consumption_by_distance: Option<f64>,
    pub trip: ScopeReport,
    pub total: ScopeReport,
}

/// The per-scope part of a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeReport {
    pub real_time: Time,
    pub driving_time: Time,
    pub driven_distance: Length,
    pub average_speed: Velocity,
    pub average_consumption_by_time: VolumeRate,
    pub average_consumption_by_distance: f64,
}

impl Report {
    #[must_use]
    pub fn new(vehicle: &Vehicle<'_>) -> Self {
        let fuel = FuelTankDisplay::new(vehicle);
        let computer = OnBoardComputerDisplay::new(vehicle);

        Self {
            engine_running: vehicle.engine_is_running(),
            speed: DrivingInformationDisplay::new(vehicle).actual_speed(),
            fill_level: fuel.fill_level(),
            on_reserve: fuel.is_on_reserve(),
            tank_full: fuel.is_complete(),
            estimated_range: computer.estimated_range(),
            consumption_by_time: computer.actual_consumption_by_time(),
            consumption_by_distance: computer.actual_consumption_by_distance(),
            trip: ScopeReport::new(computer.trip()),
            total: ScopeReport::new(computer.total()),
        }
    }
}

impl ScopeReport {
    fn new(scope: ScopeDisplay<'_>) -> Self {
        Self {
            real_time: scope.real_time(),
            driving_time: scope.driving_time(),
            driven_distance: scope.driven_distance(),
            average_speed: scope.average_speed(),
            average_consumption_by_time: scope.average_consumption_by_time(),
            average_consumption_by_distance: scope.average_consumption_by_distance(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = if self.engine_running { "running" } else { "off" };
        writeln!(f, "engine       {engine}")?;
        writeln!(f, "speed        {:.0} km/h", self.speed.get::<kilometer_per_hour>())?;
        write!(f, "fuel         {:.2} L", self.fill_level.get::<liter>())?;
        if self.on_reserve {
            write!(f, " (reserve)")?;
        }
        if self.tank_full {
            write!(f, " (full)")?;
        }
        writeln!(f)?;
        writeln!(f, "range        {:.0} km", self.estimated_range.get::<kilometer>())?;
        write!(
            f,
            "consumption  {:.4} L/s, ",
            self.consumption_by_time.get::<liter_per_second>()
        )?;
        match self.consumption_by_distance {
            Some(value) => writeln!(f, "{value:.1} L/100km")?,
            None => writeln!(f, "- L/100km")?,
        }
        writeln!(f, "trip         {}", self.trip)?;
        write!(f, "total        {}", self.total)
    }
}

impl fmt::Display for ScopeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} s ({:.0} s driving), {:.2} km, {:.1} km/h, {:.5} L/s, {:.1} L/100km",
            self.real_time.get::<second>(),
            self.driving_time.get::<second>(),
            self.driven_distance.get::<kilometer>(),
            self.average_speed.get::<kilometer_per_hour>(),
            self.average_consumption_by_time.get::<liter_per_second>(),
            self.average_consumption_by_distance,
        )
    }
}
