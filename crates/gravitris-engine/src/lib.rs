pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a piece seed string is not 32 hexadecimal characters.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("seed must be 32 hex characters, got {len}")]
    Length { len: usize },
    #[display("seed contains non-hexadecimal characters")]
    InvalidDigit,
}
