// src/quantum/register.rs
//! Quantum register
//!
//! Owns a dense state vector and applies gates by building the full
//! 2^N x 2^N operator and multiplying it into the state. Every call
//! validates its qubit indices first and swaps in the new state only
//! once the multiply has succeeded, so a failed call leaves the state as it was.

use std::fmt::{self, Display};
use num_complex::Complex64;
use ndarray::{Array1, Array2};
use tracing::debug;

use crate::config::RegisterConfig;
use crate::error::{RegisterError, Result};
use super::gate::{embed_operator, StandardGate};
use super::state::StateVector;

/// An N-qubit register holding a pure state
#[derive(Clone, Debug)]
pub struct QuantumRegister {
    state: StateVector,
    config: RegisterConfig,
}

impl QuantumRegister {
    /// Create a register of `num_qubits` qubits in |00...0⟩
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, RegisterConfig::default())
    }

    /// Create a register with explicit limits and tolerances
    pub fn with_config(num_qubits: usize, config: RegisterConfig) -> Result<Self> {
        if num_qubits == 0 {
            return Err(RegisterError::invalid_argument(
                "qubit count must be a positive integer",
            ));
        }
        let max_qubits = config.effective_max_qubits();
        if num_qubits > max_qubits {
            return Err(RegisterError::invalid_argument(format!(
                "qubit count {} exceeds the maximum of {}",
                num_qubits, max_qubits
            )));
        }

        debug!(num_qubits, "creating register");

        Ok(QuantumRegister {
            state: StateVector::zero_state(num_qubits),
            config,
        })
    }

    /// Returns the number of qubits in the register
    pub fn num_qubits(&self) -> usize {
        self.state.qubit_count()
    }

    /// Returns the length of the state vector, 2^num_qubits
    pub fn dimension(&self) -> usize {
        self.state.dimension()
    }

    /// The amplitudes in little-endian index order
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        self.state.amplitudes()
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.state.norm_sqr()
    }

    /// Whether the norm is 1 within the configured tolerance
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < self.config.norm_tolerance
    }

    /// Return to |00...0⟩
    pub fn reset(&mut self) {
        self.state = StateVector::zero_state(self.num_qubits());
    }

    /// Build the full operator for a list of single-qubit placements.
    ///
    /// The result is the tensor product over qubits N-1 down to 0 of the
    /// placed 2x2 matrix, or the identity where nothing is placed. If a
    /// qubit is placed twice, the later placement wins. The register state
    /// is not touched.
    pub fn compose(
        &self,
        placements: &[(usize, Array2<Complex64>)],
    ) -> Result<Array2<Complex64>> {
        embed_operator(self.num_qubits(), placements)
    }

    /// Multiply a full-space operator into the state
    pub fn apply_operator(&mut self, operator: &Array2<Complex64>) -> Result<()> {
        self.state = self.state.apply_matrix(operator)?;
        Ok(())
    }

    /// Compose a product operator from placements and apply it
    pub fn apply_local(&mut self, placements: &[(usize, Array2<Complex64>)]) -> Result<()> {
        let operator = self.compose(placements)?;
        let qubits: Vec<usize> = placements.iter().map(|(q, _)| *q).collect();
        debug!(?qubits, "applying local operator");
        self.apply_operator(&operator)
    }

    /// Pauli-X (bit flip) on `target`
    pub fn px(&mut self, target: usize) -> Result<()> {
        self.apply_standard(StandardGate::X, target)
    }

    /// Pauli-Y on `target`
    pub fn py(&mut self, target: usize) -> Result<()> {
        self.apply_standard(StandardGate::Y, target)
    }

    /// Pauli-Z (phase flip) on `target`
    pub fn pz(&mut self, target: usize) -> Result<()> {
        self.apply_standard(StandardGate::Z, target)
    }

    /// Hadamard on `target`
    pub fn h(&mut self, target: usize) -> Result<()> {
        self.apply_standard(StandardGate::H, target)
    }

    /// Controlled-NOT: flips `target` when `control` is |1⟩
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.controlled(&[control], target, &StandardGate::X.matrix())
    }

    /// Apply `unitary` to `target` conditioned on every control being |1⟩.
    ///
    /// The operator is the sum, over every assignment of the control bits,
    /// of the product of the matching projectors on the controls with
    /// `unitary` on the target when all bits are 1 and the identity
    /// otherwise. With one control this is
    /// `|0⟩⟨0| ⊗ I + |1⟩⟨1| ⊗ U`.
    pub fn controlled(
        &mut self,
        controls: &[usize],
        target: usize,
        unitary: &Array2<Complex64>,
    ) -> Result<()> {
        let num_qubits = self.num_qubits();

        for &qubit in controls.iter().chain(std::iter::once(&target)) {
            if qubit >= num_qubits {
                return Err(RegisterError::index_out_of_range(qubit, num_qubits));
            }
        }
        for (i, &control) in controls.iter().enumerate() {
            if control == target {
                return Err(RegisterError::invalid_argument(format!(
                    "control qubit {} is also the target",
                    control
                )));
            }
            if controls[..i].contains(&control) {
                return Err(RegisterError::invalid_argument(format!(
                    "control qubit {} listed more than once",
                    control
                )));
            }
        }

        let proj0 = StandardGate::Proj0.matrix();
        let proj1 = StandardGate::Proj1.matrix();
        let all_set = (1usize << controls.len()) - 1;
        let dim = self.dimension();
        let mut operator = Array2::<Complex64>::zeros((dim, dim));

        for mask in 0..=all_set {
            let mut placements: Vec<(usize, Array2<Complex64>)> = controls
                .iter()
                .enumerate()
                .map(|(bit, &control)| {
                    let projector = if (mask >> bit) & 1 == 1 { &proj1 } else { &proj0 };
                    (control, projector.clone())
                })
                .collect();
            if mask == all_set {
                placements.push((target, unitary.clone()));
            }
            operator += &self.compose(&placements)?;
        }

        debug!(?controls, target, "applying controlled operator");
        self.apply_operator(&operator)
    }

    fn apply_standard(&mut self, gate: StandardGate, target: usize) -> Result<()> {
        let operator = self.compose(&[(target, gate.matrix())])?;
        debug!(gate = gate.name(), target, "applying gate");
        self.apply_operator(&operator)
    }
}

impl Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
