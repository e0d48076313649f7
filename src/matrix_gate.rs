//! Gates ready to be embedded: a [`Gate`] plus its derived [`LocalBasisMap`].

use ndarray::Array2;
use num_complex::Complex64;

use crate::apply::{apply, apply_streaming};
use crate::basis_map::LocalBasisMap;
use crate::config::{ApplyStrategy, EmbedConfig};
use crate::embed::GateMatrixBuilder;
use crate::error::Result;
use crate::gate::Gate;
use crate::state::State;

/// A gate whose local basis map has been derived once and is reused for
/// every application.
///
/// # Example
/// ```
/// use qubit_embed::{Gate, MatrixGate, State};
///
/// let x = MatrixGate::new(Gate::X).unwrap();
/// assert_eq!(x.qubit_count(), 1);
/// let out = x.apply(&State::zero_state(2), &[1]).unwrap();
/// assert_eq!(out.data[0b10].re, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGate {
    gate: Gate,
    symbol: String,
    map: LocalBasisMap,
    config: EmbedConfig,
}

impl MatrixGate {
    pub fn new(gate: Gate) -> Result<Self> {
        Self::with_config(gate, EmbedConfig::default())
    }

    pub fn with_config(gate: Gate, config: EmbedConfig) -> Result<Self> {
        let map = LocalBasisMap::from_matrix(&gate.matrix(), config.atol)?;
        let symbol = gate.to_string();
        Ok(MatrixGate {
            gate,
            symbol,
            map,
            config,
        })
    }

    /// Number of qubits this gate expects in every placement.
    pub fn qubit_count(&self) -> usize {
        self.map.qubit_count()
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn basis_map(&self) -> &LocalBasisMap {
        &self.map
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// The inverse gate, with the same config.
    pub fn dagger(&self) -> Result<Self> {
        Self::with_config(self.gate.dagger(), self.config.clone())
    }

    fn builder(&self) -> GateMatrixBuilder<'_> {
        GateMatrixBuilder::new(&self.map)
            .named(&self.symbol)
            .with_config(&self.config)
    }

    /// The `2^n x 2^n` operator acting as this gate on `qubit_indices`.
    pub fn create_gate_matrix(
        &self,
        total_qubits: usize,
        qubit_indices: &[usize],
    ) -> Result<Array2<Complex64>> {
        self.builder().build(total_qubits, qubit_indices)
    }

    /// Apply the gate to `state` on `qubit_indices`, returning a new state.
    pub fn apply(&self, state: &State, qubit_indices: &[usize]) -> Result<State> {
        match self.config.strategy {
            ApplyStrategy::Materialize => apply(&self.builder(), state, qubit_indices),
            ApplyStrategy::Streaming => apply_streaming(&self.builder(), state, qubit_indices),
        }
    }
}

impl TryFrom<Gate> for MatrixGate {
    type Error = crate::error::EmbedError;

    fn try_from(gate: Gate) -> Result<Self> {
        MatrixGate::new(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_follows_gate() {
        let g = MatrixGate::new(Gate::SqrtSwap).unwrap();
        assert_eq!(g.symbol(), "sqrt(Swap)");
        assert_eq!(g.qubit_count(), 2);
    }

    #[test]
    fn test_arity_error_names_gate() {
        let g = MatrixGate::new(Gate::CNOT).unwrap();
        let err = g.create_gate_matrix(3, &[0]).unwrap_err();
        assert!(err.to_string().contains("CNOT"));
    }

    #[test]
    fn test_invalid_custom_matrix() {
        let bad = Gate::custom(Array2::zeros((3, 3)), "bad");
        assert!(MatrixGate::new(bad).is_err());
    }

    #[test]
    fn test_accessors() {
        let config = EmbedConfig {
            strategy: ApplyStrategy::Streaming,
            ..EmbedConfig::default()
        };
        let g = MatrixGate::with_config(Gate::ISWAP, config.clone()).unwrap();
        assert_eq!(g.gate(), &Gate::ISWAP);
        assert_eq!(g.config(), &config);
        assert_eq!(g.basis_map().qubit_count(), 2);
        g.basis_map().verify(&Gate::ISWAP.matrix(), 1e-12).unwrap();
        assert_eq!(g.dagger().unwrap().config(), &config);
    }

    #[test]
    fn test_try_from_gate() {
        let g = MatrixGate::try_from(Gate::H).unwrap();
        assert_eq!(g.symbol(), "H");

        let bad: Result<MatrixGate> = Gate::custom(Array2::zeros((2, 4)), "bad").try_into();
        assert!(bad.is_err());
    }
}
