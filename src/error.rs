//! Error types for the box-test adapter
//!
//! The register protocol itself has no error channel — the hardware only
//! distinguishes "result available" from "not yet available", so the test
//! operations return plain booleans. The errors here cover device
//! bring-up, the one place something can be rejected before it reaches
//! the hardware.

use std::fmt;

/// Result type for box-test adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Box-test adapter errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Register block base pointer is null
    NullRegisterBlock,

    /// Register block base pointer is not aligned for word access
    /// (carries the rejected address)
    MisalignedRegisterBlock(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NullRegisterBlock => write!(f, "Register block base is null"),
            Error::MisalignedRegisterBlock(addr) => {
                write!(f, "Register block base {addr:#x} is not word-aligned")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
