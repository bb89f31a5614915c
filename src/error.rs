//! Input-domain errors. Every public entry point validates before computing,
//! so a returned error means no partial work was done.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("consumer index {value} outside [-6, 6]")]
    ConsumerIndex { value: i32 },

    #[error("trait bit must be 0 or 1, got {value}")]
    TraitBit { value: u8 },

    #[error("trial count {value} outside [1, 100]")]
    Trials { value: u32 },

    #[error("budget must be non-negative, got {value}")]
    Budget { value: i64 },

    #[error("bonus tier {value} outside [0, 2]")]
    BonusTier { value: u8 },

    #[error("invalid catalog: {detail}")]
    Catalog { detail: String },
}
