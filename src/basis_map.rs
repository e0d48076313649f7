//! Local basis maps: the per-gate collaborator of the embedding builder.
//!
//! For a `k`-qubit gate, each local input state `s` in `[0, 2^k)` maps to
//! the column `s` of the gate's `2^k x 2^k` unitary, stored as one or more
//! product terms. A term is a list of `k` single-qubit kets ordered like the
//! gate's qubit arguments, and the column is the sum over terms of the
//! Kronecker product of each term's kets. Columns that are product states
//! (every permutation gate, every single-qubit gate, CNOT, ...) have exactly
//! one term. Entangling columns such as those of `sqrt(Swap)` are stored as
//! a short sum.
//!
//! The local index puts the gate's first qubit in the most significant bit,
//! which is what makes `kron(f_0, f_1, ..., f_{k-1})` line up with the
//! matrix column.

use ndarray::{Array1, Array2, ArrayView1};
use num_complex::Complex64;

use crate::bits::{get_bit, set_bit};
use crate::error::{EmbedError, Result};
use crate::linalg::{ket, ket_from, kron_all, max_deviation, within_tolerance, Ket};

/// The `k` per-qubit factors of one product term.
pub type Factors = Vec<Ket>;

/// Mapping from every local input state of a gate to its column, in
/// factorised form.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalBasisMap {
    qubit_count: usize,
    entries: Vec<Vec<Factors>>,
}

impl LocalBasisMap {
    /// Build a map from one factor list per local state.
    ///
    /// `columns[s]` must hold `qubit_count` 2-dimensional kets whose
    /// Kronecker product is column `s` of the gate.
    ///
    /// # Example
    /// ```
    /// use qubit_embed::basis_map::LocalBasisMap;
    /// use qubit_embed::linalg::ket;
    /// // bit flip: |0> -> |1>, |1> -> |0>
    /// let map = LocalBasisMap::from_product_columns(1, vec![vec![ket(1)], vec![ket(0)]]).unwrap();
    /// assert_eq!(map.qubit_count(), 1);
    /// assert_eq!(map.factors_of(0)[0][0], ket(1));
    /// ```
    pub fn from_product_columns(qubit_count: usize, columns: Vec<Factors>) -> Result<Self> {
        Self::from_terms(qubit_count, columns.into_iter().map(|f| vec![f]).collect())
    }

    /// Build a map whose entries may be sums of product terms.
    pub fn from_terms(qubit_count: usize, entries: Vec<Vec<Factors>>) -> Result<Self> {
        let expected = 1usize << qubit_count;
        if entries.len() != expected {
            return Err(EmbedError::MissingEntries {
                qubits: qubit_count,
                expected,
                actual: entries.len(),
            });
        }

        for (local_state, terms) in entries.iter().enumerate() {
            if terms.is_empty() {
                return Err(EmbedError::EmptyColumn { local_state });
            }
            for factors in terms {
                if factors.len() != qubit_count {
                    return Err(EmbedError::FactorCount {
                        local_state,
                        expected: qubit_count,
                        actual: factors.len(),
                    });
                }
                if let Some((factor, f)) = factors.iter().enumerate().find(|(_, f)| f.len() != 2) {
                    return Err(EmbedError::FactorDimension {
                        local_state,
                        factor,
                        dim: f.len(),
                    });
                }
            }
        }

        Ok(LocalBasisMap {
            qubit_count,
            entries,
        })
    }

    /// Derive a map from a literal `2^k x 2^k` gate matrix.
    ///
    /// Each column is first factorised as a product state around its
    /// largest amplitude; the factorisation is kept when its Kronecker
    /// product reproduces the column within `atol`. Otherwise the column is
    /// expanded over its nonzero basis amplitudes, one term per amplitude,
    /// which is always exact.
    pub fn from_matrix(matrix: &Array2<Complex64>, atol: f64) -> Result<Self> {
        let qubit_count = matrix_qubit_count(matrix)?;

        let entries: Vec<Vec<Factors>> = matrix
            .columns()
            .into_iter()
            .enumerate()
            .map(|(s, column)| match product_factors(&column, qubit_count, atol) {
                Some(factors) => vec![factors],
                None => {
                    let terms = basis_terms(&column, qubit_count);
                    tracing::trace!(local_state = s, terms = terms.len(), "entangled column expanded");
                    terms
                }
            })
            .collect();

        tracing::debug!(
            qubits = qubit_count,
            entangled_columns = entries.iter().filter(|t| t.len() > 1).count(),
            "derived local basis map"
        );
        Self::from_terms(qubit_count, entries)
    }

    /// Number of qubits the gate acts on.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Local dimension `2^k`.
    pub fn dim(&self) -> usize {
        self.entries.len()
    }

    /// Product terms of column `local_state`.
    ///
    /// For product-state columns this is a single factor list of `k` kets.
    pub fn factors_of(&self, local_state: usize) -> &[Factors] {
        &self.entries[local_state]
    }

    /// Whether column `local_state` is a single product term.
    pub fn is_product(&self, local_state: usize) -> bool {
        self.entries[local_state].len() == 1
    }

    /// Reassemble column `local_state` from its terms.
    pub fn column(&self, local_state: usize) -> Array1<Complex64> {
        let mut column = Array1::zeros(self.dim());
        for factors in &self.entries[local_state] {
            column += &kron_all(factors.iter());
        }
        column
    }

    /// Reassemble the full local matrix.
    pub fn to_matrix(&self) -> Array2<Complex64> {
        let dim = self.dim();
        let mut m = Array2::zeros((dim, dim));
        for s in 0..dim {
            m.column_mut(s).assign(&self.column(s));
        }
        m
    }

    /// Check the Kronecker invariant against the gate's literal matrix.
    ///
    /// The embedding builder relies on this invariant but never checks it;
    /// gate definitions call this from their tests.
    pub fn verify(&self, matrix: &Array2<Complex64>, atol: f64) -> Result<()> {
        let qubits = matrix_qubit_count(matrix)?;
        if qubits != self.qubit_count {
            return Err(EmbedError::InvalidMatrix {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        for (local_state, expected) in matrix.columns().into_iter().enumerate() {
            let deviation = max_deviation(&self.column(local_state).view(), &expected);
            if !within_tolerance(deviation, atol) {
                return Err(EmbedError::KroneckerMismatch {
                    local_state,
                    deviation,
                });
            }
        }
        Ok(())
    }
}

/// Number of qubits of a square `2^k x 2^k` matrix, `k >= 1`.
fn matrix_qubit_count(matrix: &Array2<Complex64>) -> Result<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols || rows < 2 || !rows.is_power_of_two() {
        return Err(EmbedError::InvalidMatrix { rows, cols });
    }
    Ok(rows.trailing_zeros() as usize)
}

/// Factorise `column` as a product of `k` kets, if it is one.
///
/// With pivot `p` the largest amplitude, factor `j` holds the two
/// amplitudes reached by flipping bit `j` of `p`, divided by `column[p]`
/// for every factor but the first, which carries the overall scale.
fn product_factors(column: &ArrayView1<Complex64>, k: usize, atol: f64) -> Option<Factors> {
    let (pivot, &pivot_amp) = column
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))?;

    if within_tolerance(pivot_amp.norm(), atol) {
        // zero column: one term whose first factor vanishes
        let mut factors: Factors = (0..k).map(|_| ket(0)).collect();
        factors[0] = Array1::zeros(2);
        return Some(factors);
    }

    let factors: Factors = (0..k)
        .map(|j| {
            let pos = k - 1 - j;
            let a0 = column[set_bit(pivot, pos, 0)];
            let a1 = column[set_bit(pivot, pos, 1)];
            if j == 0 {
                ket_from(a0, a1)
            } else {
                ket_from(a0 / pivot_amp, a1 / pivot_amp)
            }
        })
        .collect();

    let rebuilt = kron_all(factors.iter());
    within_tolerance(max_deviation(&rebuilt.view(), column), atol).then_some(factors)
}

/// Expand `column` over its nonzero basis amplitudes.
fn basis_terms(column: &ArrayView1<Complex64>, k: usize) -> Vec<Factors> {
    column
        .iter()
        .enumerate()
        .filter(|(_, amp)| **amp != Complex64::new(0.0, 0.0))
        .map(|(t, &amp)| {
            (0..k)
                .map(|j| {
                    let f = ket(get_bit(t, k, k - 1 - j));
                    if j == 0 {
                        f.mapv(|x| x * amp)
                    } else {
                        f
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_product_factors_of_basis_column() {
        // |10> in a 2-qubit local space = index 2
        let col = array![c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)];
        let f = product_factors(&col.view(), 2, 1e-12).unwrap();
        assert_eq!(f[0], ket(1));
        assert_eq!(f[1], ket(0));
    }

    #[test]
    fn test_product_factors_rejects_bell_column() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let col = array![c(s, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(s, 0.0)];
        assert!(product_factors(&col.view(), 2, 1e-12).is_none());
        let terms = basis_terms(&col.view(), 2);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1][1], ket(1));
    }

    #[test]
    fn test_zero_column_gets_one_vanishing_term() {
        let col = Array1::<Complex64>::zeros(4);
        let f = product_factors(&col.view(), 2, 1e-12).unwrap();
        assert!(kron_all(f.iter()).iter().all(|a| a.norm() == 0.0));
    }

    #[test]
    fn test_matrix_qubit_count() {
        assert_eq!(matrix_qubit_count(&Array2::zeros((8, 8))).unwrap(), 3);
        assert!(matrix_qubit_count(&Array2::zeros((3, 3))).is_err());
        assert!(matrix_qubit_count(&Array2::zeros((2, 4))).is_err());
        assert!(matrix_qubit_count(&Array2::zeros((1, 1))).is_err());
    }
}
