// src/quantum/state.rs
//! Quantum state representation
//!
//! Amplitudes are stored little-endian: qubit 0 is the least significant
//! bit of the basis index, qubit N-1 the most significant. Ket labels in
//! the textual dump are printed big-endian (qubit N-1 leftmost).

use std::fmt::{self, Display};
use num_complex::Complex64;
use ndarray::{Array1, Array2};

use crate::error::{RegisterError, Result};

/// State vector representation of an N-qubit pure state
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    qubit_count: usize,

    /// The state vector as an array of complex amplitudes
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create the zero state |00...0⟩
    ///
    /// This is the tensor product of `qubit_count` copies of [1, 0],
    /// i.e. the first standard basis vector of length 2^qubit_count.
    pub fn zero_state(qubit_count: usize) -> Self {
        let mut amplitudes = Array1::zeros(1 << qubit_count);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        StateVector {
            qubit_count,
            amplitudes,
        }
    }

    /// Returns the number of qubits in this state
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Returns the dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Sum of squared magnitudes of all amplitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Apply a full-space operator, returning the new state
    pub fn apply_matrix(&self, matrix: &Array2<Complex64>) -> Result<Self> {
        let dim = self.dimension();

        if matrix.nrows() != dim {
            return Err(RegisterError::DimensionMismatch {
                expected: dim,
                actual: matrix.nrows(),
            });
        }
        if matrix.ncols() != dim {
            return Err(RegisterError::DimensionMismatch {
                expected: dim,
                actual: matrix.ncols(),
            });
        }

        Ok(StateVector {
            qubit_count: self.qubit_count,
            amplitudes: matrix.dot(&self.amplitudes),
        })
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            let bit_string = format!("{:0width$b}", i, width = self.qubit_count);
            writeln!(f, "  ({:.6}{:+.6}i) |{}⟩", amp.re, amp.im, bit_string)?;
        }

        Ok(())
    }
}
