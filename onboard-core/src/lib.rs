//! A step-driven model of a vehicle's propulsion and trip computer.
//!
//! A [`Vehicle`] is advanced one simulated second at a time by explicit
//! calls such as [`Vehicle::accelerate`] or [`Vehicle::brake_by`].
//! Each call adjusts speed and fuel, then lets the [`TripComputer`] fold one
//! second into its trip and total statistics.
//!
//! All constants live in a [`VehicleConfig`], validated once and lent to
//! every component. The [`display`] module provides read-only, rounded views.

mod config;
mod engine;
mod fuel_tank;
mod rounding;
mod speed_controller;
mod trip_computer;
mod vehicle;

pub mod display;

pub use config::{ConfigError, ConsumptionBand, VehicleConfig};
pub use engine::Engine;
pub use fuel_tank::FuelTank;
pub use speed_controller::SpeedController;
pub use trip_computer::{ConsumptionWindow, Scope, TickInput, TripComputer, WINDOW_SECONDS};
pub use vehicle::Vehicle;
