//! Error types for gate embedding and application.

use thiserror::Error;

/// Errors raised while building, validating or applying embedded gates.
///
/// Every variant is a caller mistake; nothing here is transient.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The number of supplied qubit indices differs from the gate's arity.
    #[error("tried to apply gate '{gate}' that operates on {expected} qubits to {actual} qubits")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// A qubit index lies outside `[0, total_qubits)`.
    #[error("qubit index ({index}) is outside of the total qubits ({total_qubits})")]
    QubitOutOfRange { index: usize, total_qubits: usize },

    /// A state's register size differs from the circuit's.
    #[error("circuit on {expected} qubits cannot run on a state of {actual} qubits")]
    RegisterSizeMismatch { expected: usize, actual: usize },

    /// The same qubit appears twice in one gate placement.
    #[error("qubit index ({index}) appears more than once in a gate placement")]
    DuplicateQubit { index: usize },

    /// A local basis map does not have one entry per local basis state.
    #[error("local basis map for {qubits} qubits needs {expected} entries, got {actual}")]
    MissingEntries {
        qubits: usize,
        expected: usize,
        actual: usize,
    },

    /// A product term carries the wrong number of per-qubit factors.
    #[error("local state {local_state}: expected {expected} factors, got {actual}")]
    FactorCount {
        local_state: usize,
        expected: usize,
        actual: usize,
    },

    /// A per-qubit factor is not a 2-dimensional vector.
    #[error("local state {local_state}: factor {factor} has dimension {dim} (must be 2)")]
    FactorDimension {
        local_state: usize,
        factor: usize,
        dim: usize,
    },

    /// A local basis map entry has no product terms at all.
    #[error("local state {local_state} has no product terms")]
    EmptyColumn { local_state: usize },

    /// A gate matrix is not square with a power-of-two side.
    #[error("gate matrix is {rows}x{cols}; expected a square 2^k x 2^k matrix")]
    InvalidMatrix { rows: usize, cols: usize },

    /// The Kronecker product of a map entry differs from the gate's column.
    #[error("local state {local_state}: Kronecker product deviates from the matrix column by {deviation:e}")]
    KroneckerMismatch { local_state: usize, deviation: f64 },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("invalid embedding config: {0}")]
    Config(#[from] serde_json::Error),
}

impl EmbedError {
    /// Create an arity mismatch error.
    pub fn arity_mismatch(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArityMismatch {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create an out-of-range qubit error.
    pub fn qubit_out_of_range(index: usize, total_qubits: usize) -> Self {
        Self::QubitOutOfRange {
            index,
            total_qubits,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EmbedError>;
