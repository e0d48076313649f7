use std::collections::HashSet;
use std::fmt;

use crate::error::{EmbedError, Result};
use crate::gate::Gate;
use crate::matrix_gate::MatrixGate;
use crate::state::State;

/// A gate placed at specific qubits of a register.
#[derive(Debug, Clone)]
pub struct PositionedGate {
    pub gate: Gate,
    pub locs: Vec<usize>,
}

impl PositionedGate {
    pub fn new(gate: Gate, locs: Vec<usize>) -> Self {
        PositionedGate { gate, locs }
    }
}

/// Place a gate on qubit locations, in the gate's argument order.
///
/// # Example
/// ```
/// use qubit_embed::circuit::put;
/// use qubit_embed::gate::Gate;
/// let pg = put(vec![2, 0], Gate::CNOT);
/// assert_eq!(pg.locs, vec![2, 0]);
/// ```
pub fn put(locs: Vec<usize>, gate: Gate) -> PositionedGate {
    PositionedGate::new(gate, locs)
}

/// A validated sequence of gates on a register of qubits.
///
/// Every gate's local basis map is derived once, at construction.
#[derive(Debug, Clone)]
pub struct Circuit {
    num_qubits: usize,
    elements: Vec<PositionedGate>,
    compiled: Vec<MatrixGate>,
}

impl Circuit {
    /// Creates a new Circuit with validation.
    ///
    /// # Errors
    /// Returns an `EmbedError` if a gate's arity does not match its
    /// locations, a location is out of range, a location repeats within one
    /// gate, or a custom matrix is not `2^k x 2^k`.
    pub fn new(num_qubits: usize, elements: Vec<PositionedGate>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(elements.len());

        for pg in &elements {
            let gate = MatrixGate::new(pg.gate.clone())?;

            // 1. arity, then range, same order as the embedding builder
            if pg.locs.len() != gate.qubit_count() {
                return Err(EmbedError::arity_mismatch(
                    gate.symbol(),
                    gate.qubit_count(),
                    pg.locs.len(),
                ));
            }
            if let Some(&loc) = pg.locs.iter().find(|&&loc| loc >= num_qubits) {
                return Err(EmbedError::qubit_out_of_range(loc, num_qubits));
            }

            // 2. distinct locations
            let mut seen = HashSet::new();
            if let Some(&loc) = pg.locs.iter().find(|&&loc| !seen.insert(loc)) {
                return Err(EmbedError::DuplicateQubit { index: loc });
            }

            compiled.push(gate);
        }

        Ok(Circuit {
            num_qubits,
            elements,
            compiled,
        })
    }

    /// Returns the number of qubits in the circuit.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn elements(&self) -> &[PositionedGate] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Run the circuit on `state`, one embedded gate after another.
    ///
    /// # Errors
    /// Returns `RegisterSizeMismatch` unless `state` holds exactly
    /// `2^num_qubits` amplitudes.
    pub fn run(&self, state: &State) -> Result<State> {
        if state.total_dim() != 1usize << self.num_qubits {
            return Err(EmbedError::RegisterSizeMismatch {
                expected: self.num_qubits,
                actual: state.num_qubits(),
            });
        }
        let _span = tracing::debug_span!("run_circuit", gates = self.len(), qubits = self.num_qubits).entered();
        self.elements
            .iter()
            .zip(&self.compiled)
            .try_fold(state.clone(), |current, (pg, gate)| gate.apply(&current, &pg.locs))
    }

    /// Return the adjoint circuit U†.
    ///
    /// Gates are reversed and each replaced by its adjoint, so running a
    /// circuit and then its dagger restores the input state.
    pub fn dagger(&self) -> Result<Self> {
        let elements = self
            .elements
            .iter()
            .rev()
            .map(|pg| PositionedGate::new(pg.gate.dagger(), pg.locs.clone()))
            .collect();
        Circuit::new(self.num_qubits, elements)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nqubits: {}", self.num_qubits)?;
        for (pg, gate) in self.elements.iter().zip(&self.compiled) {
            writeln!(f, "  {} @ q[{}]", gate.symbol(), format_locs(&pg.locs))?;
        }
        Ok(())
    }
}

fn format_locs(locs: &[usize]) -> String {
    locs.iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
