pub mod health_score;
pub mod predictor;
pub mod stats;
pub mod validate;

pub use validate::DomainError;
