//! # Asteroid Dash
//!
//! Fly toward a distant planet while dodging a field of asteroids.
//!
//! The ship drifts forward every frame; the player nudges it up, down, left
//! or right. Touch an asteroid and the game is lost, reach the planet and it
//! is won. Either way the game freezes with a message.
//!
//! Game rules live in [`flight`] and never touch the engine; [`app`] wires
//! them to the frame loop and [`scene`] mirrors them into the retained scene.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod field;
pub mod flight;
pub mod scene;

pub use app::DashApp;
pub use config::GameConfig;
pub use flight::{FlightRules, FlightState, Outcome, Phase, StepOutcome};
