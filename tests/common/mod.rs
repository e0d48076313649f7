//! Shared test utilities for qubit-embed integration tests.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use qubit_embed::gate::Gate;
use qubit_embed::state::State;

pub const ATOL: f64 = 1e-10;

#[allow(dead_code)]
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[allow(dead_code)]
pub fn assert_state_approx(result: &State, expected: &[Complex64]) {
    assert_eq!(result.data.len(), expected.len());
    for (i, (r, e)) in result.data.iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "State mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}

#[allow(dead_code)]
pub fn assert_matrix_approx(result: &Array2<Complex64>, expected: &Array2<Complex64>) {
    assert_eq!(result.dim(), expected.dim());
    for ((i, j), r) in result.indexed_iter() {
        let e = expected[[i, j]];
        assert!(
            (r - e).norm() < ATOL,
            "Matrix mismatch at [{}, {}]: got {:?}, expected {:?}",
            i,
            j,
            r,
            e
        );
    }
}

#[allow(dead_code)]
pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::from_diag(&Array1::from_elem(dim, c(1.0, 0.0)))
}

/// Every named gate, with fixed angles for the parameterised ones.
#[allow(dead_code)]
pub fn catalog() -> Vec<Gate> {
    vec![
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::T,
        Gate::Phase(0.7),
        Gate::Rx(0.3),
        Gate::Ry(1.1),
        Gate::Rz(-0.9),
        Gate::SqrtX,
        Gate::SWAP,
        Gate::SqrtSwap,
        Gate::ISWAP,
        Gate::CNOT,
        Gate::CZ,
    ]
}

/// Independent embedding: entry `[row, col]` is the gate entry between the
/// local states of `row` and `col` when both agree outside `locs`, else 0.
#[allow(dead_code)]
pub fn reference_embedding(
    gate: &Array2<Complex64>,
    num_qubits: usize,
    locs: &[usize],
) -> Array2<Complex64> {
    let dim = 1usize << num_qubits;
    let mask: usize = locs.iter().map(|&q| 1usize << q).sum();
    let local = |x: usize| {
        locs.iter()
            .fold(0usize, |acc, &q| (acc << 1) | ((x >> q) & 1))
    };

    let mut m = Array2::zeros((dim, dim));
    for row in 0..dim {
        for col in 0..dim {
            if row & !mask == col & !mask {
                m[[row, col]] = gate[[local(row), local(col)]];
            }
        }
    }
    m
}

/// A normalised random state on `num_qubits` qubits.
#[allow(dead_code)]
pub fn random_state(rng: &mut StdRng, num_qubits: usize) -> State {
    let data: Array1<Complex64> = (0..1usize << num_qubits)
        .map(|_| c(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm = data.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    State::new(data.mapv(|a| a / norm))
}

/// `k` distinct qubits of an `n`-qubit register in random order.
#[allow(dead_code)]
pub fn random_locs(rng: &mut StdRng, num_qubits: usize, k: usize) -> Vec<usize> {
    let mut qubits: Vec<usize> = (0..num_qubits).collect();
    qubits.shuffle(rng);
    qubits.truncate(k);
    qubits
}

/// Every ordered selection of `k` distinct qubits out of `n`.
#[allow(dead_code)]
pub fn all_placements(num_qubits: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for rest in all_placements(num_qubits, k - 1) {
        for q in 0..num_qubits {
            if !rest.contains(&q) {
                let mut locs = rest.clone();
                locs.push(q);
                out.push(locs);
            }
        }
    }
    out
}
