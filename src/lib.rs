//! Dense State-Vector Quantum Register
//!
//! This crate simulates an N-qubit register as a dense vector of 2^N complex
//! amplitudes. Gates are applied by embedding local 2x2 operators into the
//! full space with Kronecker products and multiplying the resulting matrix
//! into the state.

pub mod config;
pub mod error;
pub mod quantum;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::prelude::*;
}

pub use config::RegisterConfig;
pub use error::{RegisterError, Result};
pub use quantum::QuantumRegister;

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
