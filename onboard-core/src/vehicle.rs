use tracing::{debug, info, warn};

use crate::{
    ConfigError, Engine, FuelTank, SpeedController, TickInput, TripComputer, VehicleConfig,
};

/// A vehicle driven one simulated second at a time.
///
/// The vehicle owns its fuel tank, speed controller, engine, and trip
/// computer. Each driving operation adjusts speed and fuel, then advances
/// the trip computer by one second if the engine is still running.
///
/// Driving operations ([`accelerate`], [`brake_by`], [`free_wheel`],
/// [`running_idle`]) are ignored while the engine is off.
/// Inputs are clamped, never rejected.
///
/// [`accelerate`]: Vehicle::accelerate
/// [`brake_by`]: Vehicle::brake_by
/// [`free_wheel`]: Vehicle::free_wheel
/// [`running_idle`]: Vehicle::running_idle
///
/// # Example
///
/// ```
/// use onboard_core::{Vehicle, VehicleConfig};
///
/// let config = VehicleConfig::default();
/// let mut vehicle = Vehicle::with_defaults(&config).unwrap();
///
/// vehicle.engine_start();
/// vehicle.accelerate(30);
/// assert_eq!(vehicle.speed(), 10);
///
/// vehicle.brake_by(25);
/// assert_eq!(vehicle.speed(), 0);
/// ```
#[derive(Debug)]
pub struct Vehicle<'a> {
    config: &'a VehicleConfig,
    fuel_tank: FuelTank<'a>,
    controller: SpeedController<'a>,
    engine: Engine,
    trip_computer: TripComputer,
    max_acceleration: u32,
}

impl<'a> Vehicle<'a> {
    /// Creates a vehicle with `fuel_level` litres in the tank and the given
    /// maximum acceleration per second.
    ///
    /// Both values are clamped to the limits in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is inconsistent.
    pub fn new(
        config: &'a VehicleConfig,
        fuel_level: f64,
        max_acceleration: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let max_acceleration = config.clamp_acceleration(max_acceleration);
        debug!(fuel_level, max_acceleration, "new vehicle");

        Ok(Self {
            config,
            fuel_tank: FuelTank::new(config, fuel_level),
            controller: SpeedController::new(config),
            engine: Engine::new(),
            trip_computer: TripComputer::new(config),
            max_acceleration,
        })
    }

    /// Creates a vehicle with `fuel_level` litres and the default acceleration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is inconsistent.
    pub fn with_fuel(config: &'a VehicleConfig, fuel_level: f64) -> Result<Self, ConfigError> {
        Self::new(config, fuel_level, config.default_acceleration)
    }

    /// Creates a vehicle with the default fuel level and acceleration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is inconsistent.
    pub fn with_defaults(config: &'a VehicleConfig) -> Result<Self, ConfigError> {
        Self::new(config, config.default_fuel, config.default_acceleration)
    }

    #[must_use]
    pub fn config(&self) -> &'a VehicleConfig {
        self.config
    }

    #[must_use]
    pub fn fuel_tank(&self) -> &FuelTank<'a> {
        &self.fuel_tank
    }

    #[must_use]
    pub fn speed_controller(&self) -> &SpeedController<'a> {
        &self.controller
    }

    #[must_use]
    pub fn trip_computer(&self) -> &TripComputer {
        &self.trip_computer
    }

    /// Current speed in km/h.
    #[must_use]
    pub fn speed(&self) -> u32 {
        self.controller.speed()
    }

    #[must_use]
    pub fn engine_is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Largest speed gain per second, after clamping.
    #[must_use]
    pub fn max_acceleration(&self) -> u32 {
        self.max_acceleration
    }

    /// Starts the engine.
    ///
    /// The trip computer first records one second of the pre-start state,
    /// whether or not the engine then starts. An empty tank keeps the
    /// engine off.
    pub fn engine_start(&mut self) {
        info!("engine start");
        self.tick();
        self.engine.start(&self.fuel_tank, &mut self.controller);
    }

    /// Stops the engine and resets the trip scope.
    ///
    /// If the engine was running, the trip computer records one final second
    /// first. Stopping a stopped engine only repeats the trip reset.
    pub fn engine_stop(&mut self) {
        info!("engine stop");
        let was_running = self.engine.is_running();
        self.engine.stop(&mut self.controller);
        if was_running {
            self.tick();
        }
        self.trip_computer.trip_reset();
    }

    /// Accelerates toward `target_speed` by at most the maximum acceleration.
    ///
    /// A target below the current speed lets the vehicle roll instead
    /// (see [`Vehicle::free_wheel`]).
    pub fn accelerate(&mut self, target_speed: u32) {
        debug!(target_speed, "accelerate");
        if !self.ensure_running("accelerate") {
            return;
        }

        let speed = self.controller.speed();
        if target_speed < speed {
            self.free_wheel();
            return;
        }

        let new_speed = target_speed.min(speed.saturating_add(self.max_acceleration));
        self.controller.increase_to(new_speed);
        self.consume_current_rate();
        self.elapse_second();
    }

    /// Brakes by `amount` km/h, limited to the maximum brake per second.
    pub fn brake_by(&mut self, amount: u32) {
        debug!(amount, "brake");
        if !self.ensure_running("brake") {
            return;
        }

        let reduction = amount.min(self.config.max_brake);
        let target = i64::from(self.controller.speed()) - i64::from(reduction);
        self.controller.reduce_to(target);
        self.elapse_second();
    }

    /// Rolls without throttle or brake, losing the free-wheel deceleration.
    ///
    /// Rolling to a stop continues as [`Vehicle::running_idle`].
    pub fn free_wheel(&mut self) {
        debug!("free wheel");
        if !self.ensure_running("free wheel") {
            return;
        }

        let target =
            i64::from(self.controller.speed()) - i64::from(self.config.freewheel_deceleration);
        self.controller.reduce_to(target);
        if self.controller.speed() == 0 {
            self.running_idle();
        } else {
            self.elapse_second();
        }
    }

    /// Lets one second pass without changing speed, drawing the current
    /// consumption (the idle consumption when standing still).
    pub fn running_idle(&mut self) {
        debug!("running idle");
        if !self.ensure_running("idle") {
            return;
        }

        self.consume_current_rate();
        self.elapse_second();
    }

    /// Adds `litres` to the tank, up to its capacity. No time passes.
    pub fn refuel(&mut self, litres: f64) {
        info!(litres, "refuel");
        self.fuel_tank.refuel(litres);
    }

    /// Clears the trip scope of the trip computer.
    pub fn trip_reset(&mut self) {
        debug!("trip reset");
        self.trip_computer.trip_reset();
    }

    /// Clears the total scope of the trip computer.
    pub fn total_reset(&mut self) {
        debug!("total reset");
        self.trip_computer.total_reset();
    }

    fn ensure_running(&self, operation: &'static str) -> bool {
        let running = self.engine.is_running();
        if !running {
            warn!(operation, "ignored: engine is not running");
        }
        running
    }

    fn consume_current_rate(&mut self) {
        let litres = self.controller.consumption_rate();
        self.engine.consume(litres, &mut self.fuel_tank, &mut self.controller);
    }

    /// Advances the trip computer if the engine is (still) running.
    fn elapse_second(&mut self) {
        if self.engine.is_running() {
            self.tick();
        }
    }

    fn tick(&mut self) {
        self.trip_computer.elapse_second(TickInput {
            speed: self.controller.speed(),
            consumption_rate: self.controller.consumption_rate(),
            fill_level: self.fuel_tank.fill_level(),
        });
    }
}
