#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
#[cfg(feature = "swift")]
pub mod bridge;
pub mod config;
pub mod cycle;
pub mod history;
pub mod inventory;
pub mod lift;
pub mod load_error;
pub mod loading;
pub mod plate;
pub mod profile;
pub mod program;
pub mod rest;
pub mod solver;
pub mod store;
pub mod target;
pub mod units;
pub mod workout;
pub mod workout_error;
