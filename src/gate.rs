use ndarray::{array, Array2};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

use crate::linalg::adjoint;

/// Quantum gate enum supporting named qubit gates and custom gates.
///
/// Matrices of multi-qubit gates are indexed by the local state in which
/// the first qubit argument is the most significant bit, so `CNOT` placed
/// on `[c, t]` is controlled by `c`.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    /// Phase gate: diag(1, e^(iθ)).
    Phase(f64),
    Rx(f64),
    Ry(f64),
    Rz(f64),
    /// √X gate: SqrtX² = X
    SqrtX,
    SWAP,
    /// √SWAP: half swaps its two qubits, SqrtSwap² = SWAP. Entangling.
    SqrtSwap,
    ISWAP,
    /// Controlled X, first argument is the control.
    CNOT,
    /// Controlled Z, symmetric in its arguments.
    CZ,
    Custom {
        matrix: Array2<Complex64>,
        label: String,
    },
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::I => write!(f, "I"),
            Gate::X => write!(f, "X"),
            Gate::Y => write!(f, "Y"),
            Gate::Z => write!(f, "Z"),
            Gate::H => write!(f, "H"),
            Gate::S => write!(f, "S"),
            Gate::T => write!(f, "T"),
            Gate::SqrtX => write!(f, "SqrtX"),
            Gate::SWAP => write!(f, "Swap"),
            Gate::SqrtSwap => write!(f, "sqrt(Swap)"),
            Gate::ISWAP => write!(f, "iSwap"),
            Gate::CNOT => write!(f, "CNOT"),
            Gate::CZ => write!(f, "CZ"),
            Gate::Phase(theta) => write!(f, "Phase({:.4})", theta),
            Gate::Rx(theta) => write!(f, "Rx({:.4})", theta),
            Gate::Ry(theta) => write!(f, "Ry({:.4})", theta),
            Gate::Rz(theta) => write!(f, "Rz({:.4})", theta),
            Gate::Custom { label, .. } => write!(f, "{}", label),
        }
    }
}

impl Gate {
    /// Wrap a literal matrix as a gate.
    pub fn custom(matrix: Array2<Complex64>, label: impl Into<String>) -> Self {
        Gate::Custom {
            matrix,
            label: label.into(),
        }
    }

    /// Returns the number of qubits the gate acts on.
    pub fn qubit_count(&self) -> usize {
        match self {
            Gate::SWAP | Gate::SqrtSwap | Gate::ISWAP | Gate::CNOT | Gate::CZ => 2,
            Gate::Custom { matrix, .. } => matrix.nrows().trailing_zeros() as usize,
            _ => 1,
        }
    }

    /// Returns whether the gate is its own adjoint.
    pub fn is_hermitian(&self) -> bool {
        matches!(
            self,
            Gate::I | Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::SWAP | Gate::CNOT | Gate::CZ
        )
    }

    /// Return the adjoint (conjugate transpose) of this gate.
    ///
    /// For unitary gates, the adjoint is also the inverse: U† U = I.
    pub fn dagger(&self) -> Self {
        match self {
            g if g.is_hermitian() => g.clone(),

            Gate::S => Gate::Phase(-FRAC_PI_2),
            Gate::T => Gate::Phase(-FRAC_PI_4),

            Gate::Rx(theta) => Gate::Rx(-theta),
            Gate::Ry(theta) => Gate::Ry(-theta),
            Gate::Rz(theta) => Gate::Rz(-theta),
            Gate::Phase(theta) => Gate::Phase(-theta),

            Gate::Custom { matrix, label } => Gate::Custom {
                matrix: adjoint(matrix),
                label: format!("{}†", label),
            },

            // SqrtX, SqrtSwap, ISWAP have no named inverse
            named => Gate::Custom {
                matrix: adjoint(&named.matrix()),
                label: format!("{}†", named),
            },
        }
    }

    /// Returns the gate's `2^k x 2^k` matrix.
    pub fn matrix(&self) -> Array2<Complex64> {
        let c = |re: f64, im: f64| Complex64::new(re, im);
        let zero = c(0.0, 0.0);
        let one = c(1.0, 0.0);

        match self {
            Gate::I => array![[one, zero], [zero, one]],
            Gate::X => array![[zero, one], [one, zero]],
            Gate::Y => array![[zero, c(0.0, -1.0)], [c(0.0, 1.0), zero]],
            Gate::Z => array![[one, zero], [zero, c(-1.0, 0.0)]],
            Gate::H => {
                let s = c(FRAC_1_SQRT_2, 0.0);
                array![[s, s], [s, -s]]
            }
            Gate::S => array![[one, zero], [zero, c(0.0, 1.0)]],
            Gate::T => array![[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            Gate::Phase(theta) => array![[one, zero], [zero, Complex64::from_polar(1.0, *theta)]],
            Gate::Rx(theta) => {
                let cos = c((theta / 2.0).cos(), 0.0);
                let neg_i_sin = c(0.0, -(theta / 2.0).sin());
                array![[cos, neg_i_sin], [neg_i_sin, cos]]
            }
            Gate::Ry(theta) => {
                let cos = c((theta / 2.0).cos(), 0.0);
                let sin = c((theta / 2.0).sin(), 0.0);
                array![[cos, -sin], [sin, cos]]
            }
            Gate::Rz(theta) => array![
                [Complex64::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex64::from_polar(1.0, theta / 2.0)]
            ],
            Gate::SqrtX => {
                // (1+i)/2 * [[1, -i], [-i, 1]]
                let f = c(0.5, 0.5);
                let g = c(0.5, -0.5);
                array![[f, g], [g, f]]
            }
            Gate::SWAP => array![
                [one, zero, zero, zero],
                [zero, zero, one, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one]
            ],
            Gate::SqrtSwap => {
                let p = c(0.5, 0.5);
                let m = c(0.5, -0.5);
                array![
                    [one, zero, zero, zero],
                    [zero, p, m, zero],
                    [zero, m, p, zero],
                    [zero, zero, zero, one]
                ]
            }
            Gate::ISWAP => {
                let i = c(0.0, 1.0);
                array![
                    [one, zero, zero, zero],
                    [zero, zero, i, zero],
                    [zero, i, zero, zero],
                    [zero, zero, zero, one]
                ]
            }
            Gate::CNOT => array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
                [zero, zero, one, zero]
            ],
            Gate::CZ => array![
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, one, zero],
                [zero, zero, zero, c(-1.0, 0.0)]
            ],
            Gate::Custom { matrix, .. } => matrix.clone(),
        }
    }
}
