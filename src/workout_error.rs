use thiserror::Error;

use crate::{load_error::InventoryError, program::ProgramError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown lift {0}, expected press, deadlift, bench or squat.")]
    UnknownLift(String),
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error("Invalid plate inventory: {0}")]
    InvalidInventory(#[from] InventoryError),
    #[error("Training max must be a positive number of kilograms, got {0}.")]
    InvalidTrainingMax(f64),
}
