pub mod range;
pub mod sampler;
pub mod store;
pub mod weights;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid level range {min}..={max}: levels must satisfy 1 <= min <= max <= 6")]
    InvalidRange { min: u8, max: u8 },
    #[error("no entries fall inside the active level range")]
    EmptyRange,
    #[error("session timeline has no entries")]
    EmptyTimeline,
}
