use tracing::info;

use crate::{FuelTank, SpeedController};

/// The engine's on/off state.
///
/// The engine does not own the tank or the speed controller; the vehicle
/// lends them for each transition so both stay in step with the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    running: bool,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the engine unless the tank is empty.
    pub fn start(&mut self, tank: &FuelTank<'_>, controller: &mut SpeedController<'_>) {
        if tank.is_empty() {
            info!("engine start refused: tank is empty");
            return;
        }
        self.running = true;
        controller.engine_start();
    }

    /// Stops the engine. Stopping a stopped engine changes nothing.
    pub fn stop(&mut self, controller: &mut SpeedController<'_>) {
        self.running = false;
        controller.engine_stop();
    }

    /// Draws `litres` from the tank while running.
    ///
    /// The engine stalls when the draw empties the tank.
    pub fn consume(
        &mut self,
        litres: f64,
        tank: &mut FuelTank<'_>,
        controller: &mut SpeedController<'_>,
    ) {
        if !self.running {
            return;
        }
        tank.consume(litres);
        if tank.is_empty() {
            info!("engine stalled: tank is empty");
            self.stop(controller);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::VehicleConfig;

    #[test]
    fn refuses_to_start_with_empty_tank() {
        let config = VehicleConfig::default();
        let tank = FuelTank::new(&config, 0.0);
        let mut controller = SpeedController::new(&config);
        let mut engine = Engine::new();

        engine.start(&tank, &mut controller);
        assert!(!engine.is_running());
        assert_eq!(controller.consumption_rate(), 0.0);
    }

    #[test]
    fn start_enables_consumption() {
        let config = VehicleConfig::default();
        let tank = FuelTank::new(&config, 10.0);
        let mut controller = SpeedController::new(&config);
        let mut engine = Engine::new();

        engine.start(&tank, &mut controller);
        assert!(engine.is_running());
        assert_eq!(controller.consumption_rate(), 0.0003);
    }

    #[test]
    fn stop_is_idempotent() {
        let config = VehicleConfig::default();
        let tank = FuelTank::new(&config, 10.0);
        let mut controller = SpeedController::new(&config);
        let mut engine = Engine::new();

        engine.start(&tank, &mut controller);
        engine.stop(&mut controller);
        let once = (engine, controller.clone());
        engine.stop(&mut controller);

        assert_eq!((engine, controller), once);
    }

    #[test]
    fn consume_is_ignored_while_stopped() {
        let config = VehicleConfig::default();
        let mut tank = FuelTank::new(&config, 10.0);
        let mut controller = SpeedController::new(&config);
        let mut engine = Engine::new();

        engine.consume(1.0, &mut tank, &mut controller);
        assert_eq!(tank.fill_level(), 10.0);
    }

    #[test]
    fn stalls_when_tank_runs_dry() {
        let config = VehicleConfig::default();
        let mut tank = FuelTank::new(&config, 1.0);
        let mut controller = SpeedController::new(&config);
        let mut engine = Engine::new();

        engine.start(&tank, &mut controller);
        engine.consume(0.5, &mut tank, &mut controller);
        assert!(engine.is_running());

        engine.consume(0.5, &mut tank, &mut controller);
        assert!(tank.is_empty());
        assert!(!engine.is_running());
        assert_eq!(controller.consumption_rate(), 0.0);
    }
}
