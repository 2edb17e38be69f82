pub mod cycles;
pub mod health;
pub mod predictions;
pub mod stats;
