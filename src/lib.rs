pub mod app;
pub mod cli;
pub mod core;
pub mod display;
pub mod settings;
pub mod simulation;
pub mod turbine;
pub mod window;

pub use settings::{SettingsError, SpeedLevel, SpeedSettings};
pub use simulation::{RotationAngle, Simulation, TurbineState};
