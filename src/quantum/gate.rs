// src/quantum/gate.rs
//! Single-qubit gate matrices and operator embedding
//!
//! A local operator is lifted into the full 2^N-dimensional space by placing
//! it in a per-qubit slot, filling the remaining slots with the identity and
//! folding the slots with the Kronecker product from qubit N-1 down to qubit 0.

use num_complex::Complex64;
use ndarray::{array, Array2};
use tracing::trace;

use crate::error::{RegisterError, Result};

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
}

/// Standard single-qubit operators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardGate {
    /// Identity gate
    I,

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,

    /// Projector onto |0⟩, i.e. |0⟩⟨0|
    Proj0,

    /// Projector onto |1⟩, i.e. |1⟩⟨1|
    Proj1,
}

impl StandardGate {
    /// Returns the 2x2 matrix of this operator
    pub fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            StandardGate::I => array![[ONE, ZERO], [ZERO, ONE]],
            StandardGate::X => array![[ZERO, ONE], [ONE, ZERO]],
            StandardGate::Y => array![[ZERO, -I], [I, ZERO]],
            StandardGate::Z => array![[ONE, ZERO], [ZERO, -ONE]],
            StandardGate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            },
            StandardGate::Proj0 => array![[ONE, ZERO], [ZERO, ZERO]],
            StandardGate::Proj1 => array![[ZERO, ZERO], [ZERO, ONE]],
        }
    }

    /// Returns a display name for this operator
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
            StandardGate::Proj0 => "|0⟩⟨0|",
            StandardGate::Proj1 => "|1⟩⟨1|",
        }
    }
}

/// The n x n identity matrix
pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::eye(dim)
}

/// Kronecker product a ⊗ b
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (n1, m1) = a.dim();
    let (n2, m2) = b.dim();

    let mut result = Array2::zeros((n1 * n2, m1 * m2));

    for i in 0..n1 {
        for j in 0..m1 {
            let factor = a[[i, j]];
            if factor == constants::ZERO {
                continue;
            }
            for k in 0..n2 {
                for l in 0..m2 {
                    result[[i * n2 + k, j * m2 + l]] = factor * b[[k, l]];
                }
            }
        }
    }

    result
}

/// Place elements into per-qubit slots and reduce them with `combine`.
///
/// Slots start as `identity_element`; each `(qubit, element)` placement
/// overwrites its slot, so if a qubit appears more than once the last
/// placement wins. The slots are then folded from qubit `num_qubits - 1`
/// (leftmost factor) down to qubit 0 (rightmost factor).
pub fn embed<T, F>(
    num_qubits: usize,
    placements: &[(usize, T)],
    identity_element: T,
    combine: F,
) -> Result<T>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    if num_qubits == 0 {
        return Err(RegisterError::invalid_argument(
            "cannot embed into a zero-qubit space",
        ));
    }

    let mut slots = vec![identity_element; num_qubits];
    for (qubit, element) in placements {
        if *qubit >= num_qubits {
            return Err(RegisterError::index_out_of_range(*qubit, num_qubits));
        }
        slots[*qubit] = element.clone();
    }

    let mut acc = slots[num_qubits - 1].clone();
    for slot in slots[..num_qubits - 1].iter().rev() {
        acc = combine(&acc, slot);
    }

    Ok(acc)
}

/// Build the full 2^N x 2^N operator for a set of single-qubit placements.
///
/// Unplaced qubits get the identity. Every placed matrix must be 2x2.
pub fn embed_operator(
    num_qubits: usize,
    placements: &[(usize, Array2<Complex64>)],
) -> Result<Array2<Complex64>> {
    for (qubit, matrix) in placements {
        if matrix.dim() != (2, 2) {
            return Err(RegisterError::invalid_argument(format!(
                "operator on qubit {} must be 2x2, got {}x{}",
                qubit,
                matrix.nrows(),
                matrix.ncols()
            )));
        }
    }

    trace!(num_qubits, placed = placements.len(), "embedding local operator");

    embed(num_qubits, placements, identity(2), kron)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrices_close(a: &Array2<Complex64>, b: &Array2<Complex64>) -> bool {
        a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < 1e-10)
    }

    #[test]
    fn test_kron_identity_x() {
        let result = kron(&identity(2), &StandardGate::X.matrix());
        let expected = array![
            [constants::ZERO, constants::ONE, constants::ZERO, constants::ZERO],
            [constants::ONE, constants::ZERO, constants::ZERO, constants::ZERO],
            [constants::ZERO, constants::ZERO, constants::ZERO, constants::ONE],
            [constants::ZERO, constants::ZERO, constants::ONE, constants::ZERO]
        ];
        assert!(matrices_close(&result, &expected));
    }

    #[test]
    fn test_embed_orders_most_significant_first() {
        let combine = |a: &String, b: &String| format!("{}{}", a, b);
        let placed = embed(
            3,
            &[(0, "a".to_string()), (2, "c".to_string())],
            "_".to_string(),
            combine,
        )
        .unwrap();
        assert_eq!(placed, "c_a");
    }

    #[test]
    fn test_embed_last_placement_wins() {
        let combine = |a: &String, b: &String| format!("{}{}", a, b);
        let placed = embed(
            2,
            &[(1, "x".to_string()), (1, "y".to_string())],
            "_".to_string(),
            combine,
        )
        .unwrap();
        assert_eq!(placed, "y_");
    }

    #[test]
    fn test_embed_rejects_out_of_range() {
        let err = embed(2, &[(2, 1u32)], 0u32, |a, b| a + b).unwrap_err();
        assert_eq!(err, RegisterError::index_out_of_range(2, 2));
    }

    #[test]
    fn test_embed_operator_single_qubit_is_local_matrix() {
        let h = StandardGate::H.matrix();
        let full = embed_operator(1, &[(0, h.clone())]).unwrap();
        assert!(matrices_close(&full, &h));
    }

    #[test]
    fn test_embed_operator_rejects_non_2x2() {
        let err = embed_operator(2, &[(0, identity(4))]).unwrap_err();
        assert!(matches!(err, RegisterError::InvalidArgument { .. }));
    }

    #[test]
    fn test_projectors_sum_to_identity() {
        let sum = StandardGate::Proj0.matrix() + StandardGate::Proj1.matrix();
        assert!(matrices_close(&sum, &StandardGate::I.matrix()));
    }

    #[test]
    fn test_hadamard_squares_to_identity() {
        let h = StandardGate::H.matrix();
        assert!(matrices_close(&h.dot(&h), &identity(2)));
    }
}
