use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("input must be a valid number")]
    InvalidInput,

    #[error("exponent width must be between 1 and 10 bits (got {0})")]
    InvalidExponentWidth(u32),

    #[error("mantissa width must be between 1 and 10 bits (got {0})")]
    InvalidMantissaWidth(u32),
}
