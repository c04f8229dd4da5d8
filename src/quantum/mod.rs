//! Dense state-vector quantum computing
//!
//! This module implements the state vector, the single-qubit operator
//! library with its tensor-product embedding, and the register that
//! applies gates to its state.

pub mod state;
pub mod gate;
pub mod register;

pub use state::StateVector;
pub use gate::{embed, embed_operator, identity, kron, StandardGate};
pub use register::QuantumRegister;

/// Re-export commonly used types
pub mod prelude {
    pub use super::{QuantumRegister, StandardGate, StateVector};
    pub use crate::config::RegisterConfig;
    pub use crate::error::{RegisterError, Result};
}
