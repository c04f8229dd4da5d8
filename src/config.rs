//! Register configuration

use serde::{Deserialize, Serialize};

/// Limits and tolerances applied by a [`QuantumRegister`](crate::quantum::QuantumRegister)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Largest qubit count accepted at construction.
    ///
    /// Every gate builds a dense 2^N x 2^N operator, so memory grows as 4^N.
    pub max_qubits: usize,

    /// Tolerance on |norm² - 1| used by `is_normalized`
    pub norm_tolerance: f64,
}

impl RegisterConfig {
    pub const DEFAULT_MAX_QUBITS: usize = 12;
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

    /// Ceiling applied regardless of `max_qubits`; past this the dense
    /// 4^N operator cannot be allocated.
    pub const HARD_MAX_QUBITS: usize = 30;

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// The limit actually enforced at construction
    pub fn effective_max_qubits(&self) -> usize {
        self.max_qubits.min(Self::HARD_MAX_QUBITS)
    }

    pub fn with_norm_tolerance(mut self, norm_tolerance: f64) -> Self {
        self.norm_tolerance = norm_tolerance;
        self
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            max_qubits: Self::DEFAULT_MAX_QUBITS,
            norm_tolerance: Self::DEFAULT_NORM_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: RegisterConfig = serde_json::from_str(r#"{"max_qubits": 5}"#).unwrap();
        assert_eq!(config.max_qubits, 5);
        assert_eq!(config.norm_tolerance, RegisterConfig::DEFAULT_NORM_TOLERANCE);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = RegisterConfig::default().with_norm_tolerance(1e-6);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("norm_tolerance"));
        let restored: RegisterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_effective_max_is_capped() {
        let config = RegisterConfig::default().with_max_qubits(usize::MAX);
        assert_eq!(config.effective_max_qubits(), RegisterConfig::HARD_MAX_QUBITS);
        assert_eq!(RegisterConfig::default().effective_max_qubits(), 12);
    }
}
