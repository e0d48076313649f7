//! Embedding a `k`-qubit gate into an `n`-qubit register.
//!
//! The `2^n x 2^n` operator is built one column at a time. Column `col` is
//! the image of basis state `col`: its bits on the gate's qubits select a
//! column of the local gate (through the [`LocalBasisMap`]), every other
//! qubit passes its own bit through as `|0>` or `|1>`, and the `n`
//! single-qubit vectors are joined by Kronecker products. Qubit `i` ends up
//! as bit `i` of the output index, so each new qubit is the more significant
//! factor of the running product.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::basis_map::LocalBasisMap;
use crate::bits::{extract_bits, get_bit};
use crate::config::EmbedConfig;
use crate::error::{EmbedError, Result};
use crate::linalg::{ket, kron, Ket};

/// Validated placement of a gate on a register.
///
/// Holds a direct-mapped table from register qubit to its position in the
/// gate's argument list, so the per-column lookup is O(1) per qubit.
#[derive(Debug, Clone)]
pub struct QubitLayout<'q> {
    total_qubits: usize,
    qubit_indices: &'q [usize],
    positions: Vec<Option<usize>>,
}

impl<'q> QubitLayout<'q> {
    /// Validate `qubit_indices` for a gate of arity `gate_arity`.
    ///
    /// Arity is checked first, then every index against `total_qubits`.
    pub fn new(
        gate: &str,
        gate_arity: usize,
        total_qubits: usize,
        qubit_indices: &'q [usize],
    ) -> Result<Self> {
        if qubit_indices.len() != gate_arity {
            return Err(EmbedError::arity_mismatch(
                gate,
                gate_arity,
                qubit_indices.len(),
            ));
        }
        if let Some(&index) = qubit_indices.iter().find(|&&q| q >= total_qubits) {
            return Err(EmbedError::qubit_out_of_range(index, total_qubits));
        }

        let mut positions = vec![None; total_qubits];
        for (j, &q) in qubit_indices.iter().enumerate() {
            positions[q] = Some(j);
        }

        Ok(QubitLayout {
            total_qubits,
            qubit_indices,
            positions,
        })
    }

    pub fn total_qubits(&self) -> usize {
        self.total_qubits
    }

    pub fn qubit_indices(&self) -> &[usize] {
        self.qubit_indices
    }

    /// Position of register qubit `qubit` in the gate's argument list.
    #[inline]
    pub fn position(&self, qubit: usize) -> Option<usize> {
        self.positions[qubit]
    }
}

/// Builds embedding matrices for one gate.
#[derive(Debug, Clone)]
pub struct GateMatrixBuilder<'a> {
    map: &'a LocalBasisMap,
    name: &'a str,
    parallel_threshold: usize,
}

impl<'a> GateMatrixBuilder<'a> {
    pub fn new(map: &'a LocalBasisMap) -> Self {
        GateMatrixBuilder {
            map,
            name: "gate",
            parallel_threshold: EmbedConfig::default().parallel_threshold,
        }
    }

    /// Name reported in arity errors.
    pub fn named(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Apply the relevant settings of `config`.
    pub fn with_config(mut self, config: &EmbedConfig) -> Self {
        self.parallel_threshold = config.parallel_threshold;
        self
    }

    /// Validate a placement of this builder's gate.
    pub fn layout<'q>(&self, total_qubits: usize, qubit_indices: &'q [usize]) -> Result<QubitLayout<'q>> {
        QubitLayout::new(self.name, self.map.qubit_count(), total_qubits, qubit_indices)
    }

    /// Column `col` of the embedding matrix.
    ///
    /// # Example
    /// ```
    /// use qubit_embed::basis_map::LocalBasisMap;
    /// use qubit_embed::embed::GateMatrixBuilder;
    /// use qubit_embed::linalg::ket;
    ///
    /// let flip = LocalBasisMap::from_product_columns(1, vec![vec![ket(1)], vec![ket(0)]]).unwrap();
    /// let builder = GateMatrixBuilder::new(&flip);
    /// let layout = builder.layout(2, &[1]).unwrap();
    /// // flipping qubit 1 sends |00> to index 0b10
    /// let column = builder.column(&layout, 0);
    /// assert_eq!(column[2].re, 1.0);
    /// ```
    pub fn column(&self, layout: &QubitLayout<'_>, col: usize) -> Array1<Complex64> {
        let n = layout.total_qubits();
        let local_state = extract_bits(col, n, layout.qubit_indices());
        let basis: [Ket; 2] = [ket(0), ket(1)];

        let mut terms = self.map.factors_of(local_state).iter().map(|factors| {
            (0..n).fold(Array1::from(vec![Complex64::new(1.0, 0.0)]), |acc, i| {
                let current = match layout.position(i) {
                    Some(j) => &factors[j],
                    None => &basis[get_bit(col, n, i)],
                };
                kron(&current.view(), &acc.view())
            })
        });

        let mut column = terms.next().unwrap_or_else(|| Array1::zeros(1 << n));
        for term in terms {
            column += &term;
        }
        column
    }

    /// Build the full `2^n x 2^n` embedding matrix for `qubit_indices`.
    ///
    /// Entry `[[row, col]]` is the amplitude that input basis state `col`
    /// contributes to output basis state `row`.
    pub fn build(&self, total_qubits: usize, qubit_indices: &[usize]) -> Result<Array2<Complex64>> {
        let layout = self.layout(total_qubits, qubit_indices)?;
        let _span = tracing::debug_span!(
            "create_gate_matrix",
            gate = self.name,
            total_qubits,
            qubits = ?qubit_indices
        )
        .entered();

        let dim = 1usize << total_qubits;
        let columns = self.columns(&layout, dim);

        let mut flat = Vec::with_capacity(dim * dim);
        for column in &columns {
            flat.extend(column.iter().copied());
        }
        // rows of `by_column` are the columns of the result
        let by_column = Array2::from_shape_vec((dim, dim), flat)?;
        tracing::debug!(dim, "assembled embedding matrix");
        Ok(by_column.reversed_axes().as_standard_layout().into_owned())
    }

    #[cfg(feature = "parallel")]
    fn columns(&self, layout: &QubitLayout<'_>, dim: usize) -> Vec<Array1<Complex64>> {
        use rayon::prelude::*;

        if dim >= self.parallel_threshold {
            (0..dim)
                .into_par_iter()
                .map(|col| self.column(layout, col))
                .collect()
        } else {
            (0..dim).map(|col| self.column(layout, col)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn columns(&self, layout: &QubitLayout<'_>, dim: usize) -> Vec<Array1<Complex64>> {
        (0..dim).map(|col| self.column(layout, col)).collect()
    }
}

/// Build the embedding matrix of `map` on `qubit_indices` of a
/// `total_qubits` register.
pub fn create_gate_matrix(
    map: &LocalBasisMap,
    total_qubits: usize,
    qubit_indices: &[usize],
) -> Result<Array2<Complex64>> {
    GateMatrixBuilder::new(map).build(total_qubits, qubit_indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_map() -> LocalBasisMap {
        LocalBasisMap::from_product_columns(1, vec![vec![ket(0)], vec![ket(1)]]).unwrap()
    }

    #[test]
    fn test_layout_positions() {
        let layout = QubitLayout::new("g", 2, 4, &[3, 1]).unwrap();
        assert_eq!(layout.position(3), Some(0));
        assert_eq!(layout.position(1), Some(1));
        assert_eq!(layout.position(0), None);
        assert_eq!(layout.position(2), None);
    }

    #[test]
    fn test_layout_checks_arity_before_range() {
        let err = QubitLayout::new("g", 2, 2, &[7]).unwrap_err();
        assert!(matches!(
            err,
            EmbedError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_column_of_identity_is_basis_vector() {
        let map = identity_map();
        let builder = GateMatrixBuilder::new(&map);
        let layout = builder.layout(3, &[1]).unwrap();
        for col in 0..8 {
            let column = builder.column(&layout, col);
            for row in 0..8 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(column[row], Complex64::new(expected, 0.0));
            }
        }
    }

    #[test]
    fn test_zero_qubit_register() {
        let map = LocalBasisMap::from_terms(0, vec![vec![vec![]]]).unwrap();
        let m = create_gate_matrix(&map, 0, &[]).unwrap();
        assert_eq!(m.dim(), (1, 1));
        assert_eq!(m[[0, 0]], Complex64::new(1.0, 0.0));
    }
}
