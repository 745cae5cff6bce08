//! Properties that hold across arbitrary sequences of driver operations.

use onboard_core::{Vehicle, VehicleConfig, display::Report};

#[derive(Debug, Clone, Copy)]
enum Operation {
    Start,
    Stop,
    Accelerate(u32),
    Brake(u32),
    FreeWheel,
    Idle,
    Refuel(f64),
    TripReset,
    TotalReset,
}

impl Operation {
    fn apply(self, vehicle: &mut Vehicle<'_>) {
        match self {
            Self::Start => vehicle.engine_start(),
            Self::Stop => vehicle.engine_stop(),
            Self::Accelerate(target) => vehicle.accelerate(target),
            Self::Brake(amount) => vehicle.brake_by(amount),
            Self::FreeWheel => vehicle.free_wheel(),
            Self::Idle => vehicle.running_idle(),
            Self::Refuel(litres) => vehicle.refuel(litres),
            Self::TripReset => vehicle.trip_reset(),
            Self::TotalReset => vehicle.total_reset(),
        }
    }
}

/// A fixed pseudo-random operation sequence, weighted toward driving.
fn operations(seed: u64, count: usize) -> Vec<Operation> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };

    (0..count)
        .map(|_| match next() % 20 {
            0 => Operation::Start,
            1 => Operation::Stop,
            2..=8 => Operation::Accelerate(next() % 300),
            9..=11 => Operation::Brake(next() % 40),
            12..=14 => Operation::FreeWheel,
            15..=16 => Operation::Idle,
            17 => Operation::Refuel(f64::from(next() % 80) - 10.0),
            18 => Operation::TripReset,
            _ => Operation::TotalReset,
        })
        .collect()
}

fn assert_within_bounds(vehicle: &Vehicle<'_>, config: &VehicleConfig) {
    let speed = vehicle.speed();
    assert!(speed >= config.min_speed && speed <= config.max_speed);

    let fill_level = vehicle.fuel_tank().fill_level();
    assert!((0.0..=config.max_fuel).contains(&fill_level));

    let computer = vehicle.trip_computer();
    assert!(computer.trip().driving_time() <= computer.trip().real_time());
    assert!(computer.total().driving_time() <= computer.total().real_time());
    assert!(computer.trip().driven_distance() >= 0.0);
}

#[test]
fn speed_fuel_and_times_stay_in_bounds() {
    let config = VehicleConfig::default();

    for seed in 1..=8 {
        let mut vehicle = Vehicle::new(&config, 3.0, 20).unwrap();
        vehicle.engine_start();

        for operation in operations(seed, 2_000) {
            operation.apply(&mut vehicle);
            assert_within_bounds(&vehicle, &config);
        }
    }
}

#[test]
fn ignored_operations_leave_no_trace() {
    let config = VehicleConfig::default();
    let mut vehicle = Vehicle::with_defaults(&config).unwrap();
    let before = Report::new(&vehicle);

    for operation in [
        Operation::Accelerate(100),
        Operation::Brake(10),
        Operation::FreeWheel,
        Operation::Idle,
    ] {
        operation.apply(&mut vehicle);
    }

    assert_eq!(Report::new(&vehicle), before);
}

#[test]
fn stopping_twice_equals_stopping_once() {
    let config = VehicleConfig::default();
    let drive = operations(42, 300);

    let mut once = Vehicle::with_defaults(&config).unwrap();
    let mut twice = Vehicle::with_defaults(&config).unwrap();
    for vehicle in [&mut once, &mut twice] {
        vehicle.engine_start();
        for &operation in &drive {
            operation.apply(vehicle);
        }
        vehicle.engine_stop();
    }
    twice.engine_stop();

    assert_eq!(Report::new(&twice), Report::new(&once));
    assert_eq!(twice.trip_computer().total(), once.trip_computer().total());
    assert_eq!(
        twice.trip_computer().estimated_range(),
        once.trip_computer().estimated_range()
    );
}

#[test]
fn resets_touch_only_their_own_scope() {
    let config = VehicleConfig::default();

    for seed in 1..=4 {
        let mut vehicle = Vehicle::with_defaults(&config).unwrap();
        vehicle.engine_start();
        for operation in operations(seed, 500) {
            operation.apply(&mut vehicle);
        }

        let total = *vehicle.trip_computer().total();
        let range = vehicle.trip_computer().estimated_range();
        vehicle.trip_reset();
        assert_eq!(vehicle.trip_computer().total(), &total);
        assert_eq!(vehicle.trip_computer().estimated_range(), range);
        assert_eq!(vehicle.trip_computer().trip().real_time(), 0);

        let trip = *vehicle.trip_computer().trip();
        vehicle.total_reset();
        assert_eq!(vehicle.trip_computer().trip(), &trip);
        assert_eq!(vehicle.trip_computer().total().real_time(), 0);
    }
}

#[test]
fn refuel_never_overfills_or_drains() {
    let config = VehicleConfig::default();
    let mut vehicle = Vehicle::with_fuel(&config, 55.0).unwrap();

    vehicle.refuel(10.0);
    assert_eq!(vehicle.fuel_tank().fill_level(), config.max_fuel);
    assert!(vehicle.fuel_tank().is_complete());

    vehicle.refuel(-5.0);
    vehicle.refuel(f64::NAN);
    assert_eq!(vehicle.fuel_tank().fill_level(), config.max_fuel);
}

#[test]
fn empty_tank_ends_every_drive() {
    let config = VehicleConfig::default();
    let mut vehicle = Vehicle::with_fuel(&config, 0.05).unwrap();

    vehicle.engine_start();
    for _ in 0..1_000 {
        vehicle.accelerate(60);
    }

    assert!(!vehicle.engine_is_running());
    assert_eq!(vehicle.fuel_tank().fill_level(), 0.0);
    assert!(vehicle.fuel_tank().is_empty());
}
