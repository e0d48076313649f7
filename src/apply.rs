use ndarray::Array1;
use num_complex::Complex64;

use crate::basis_map::LocalBasisMap;
use crate::embed::GateMatrixBuilder;
use crate::error::Result;
use crate::state::State;

/// Apply a gate to a state by building the full embedding matrix and
/// multiplying.
///
/// The register size is `floor(log2(state.total_dim()))`. The input is
/// left untouched and a new state is returned.
///
/// # Example
/// ```
/// use qubit_embed::apply::apply;
/// use qubit_embed::basis_map::LocalBasisMap;
/// use qubit_embed::embed::GateMatrixBuilder;
/// use qubit_embed::linalg::ket;
/// use qubit_embed::State;
///
/// let flip = LocalBasisMap::from_product_columns(1, vec![vec![ket(1)], vec![ket(0)]]).unwrap();
/// let builder = GateMatrixBuilder::new(&flip);
/// let out = apply(&builder, &State::zero_state(2), &[1]).unwrap();
/// // |00> with qubit 1 flipped is index 0b10
/// assert_eq!(out.data[2].re, 1.0);
/// ```
pub fn apply(builder: &GateMatrixBuilder<'_>, state: &State, qubit_indices: &[usize]) -> Result<State> {
    debug_assert!(state.total_dim().is_power_of_two());
    let total_qubits = state.num_qubits();
    let matrix = builder.build(total_qubits, qubit_indices)?;
    Ok(State {
        data: matrix.dot(&state.data),
    })
}

/// Apply a gate column by column without materialising the matrix.
///
/// Each input amplitude scales the image of its basis state, which is
/// added into the output. Zero amplitudes are skipped, so sparse states
/// only pay for their support.
pub fn apply_streaming(
    builder: &GateMatrixBuilder<'_>,
    state: &State,
    qubit_indices: &[usize],
) -> Result<State> {
    debug_assert!(state.total_dim().is_power_of_two());
    let total_qubits = state.num_qubits();
    let layout = builder.layout(total_qubits, qubit_indices)?;
    let _span = tracing::debug_span!("apply_streaming", total_qubits, qubits = ?qubit_indices).entered();

    let zero = Complex64::new(0.0, 0.0);
    let mut data = Array1::zeros(state.total_dim());
    for (col, &amp) in state.data.iter().enumerate() {
        if amp == zero {
            continue;
        }
        data.scaled_add(amp, &builder.column(&layout, col));
    }
    Ok(State { data })
}

/// Apply `map` to `state` on `qubit_indices` with default settings.
pub fn apply_map(map: &LocalBasisMap, state: &State, qubit_indices: &[usize]) -> Result<State> {
    apply(&GateMatrixBuilder::new(map), state, qubit_indices)
}
