use ndarray::Array1;
use num_complex::Complex64;

/// Dense state vector of an `n`-qubit register.
///
/// Basis index bit `i` is the value of qubit `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub data: Array1<Complex64>,
}

impl State {
    /// Wrap an amplitude vector. Its length should be a power of two.
    pub fn new(data: Array1<Complex64>) -> Self {
        debug_assert!(
            data.len().is_power_of_two(),
            "state length {} is not a power of two",
            data.len()
        );
        State { data }
    }

    /// Creates |0...0> on `num_qubits` qubits.
    pub fn zero_state(num_qubits: usize) -> Self {
        Self::basis_state(num_qubits, 0)
    }

    /// Creates the computational basis state with index `index`.
    pub fn basis_state(num_qubits: usize, index: usize) -> Self {
        let total = 1usize << num_qubits;
        assert!(
            index < total,
            "basis index {} out of range for {} qubits",
            index,
            num_qubits
        );
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        State { data }
    }

    /// Creates the product state with qubit `i` set to `bits[i]`.
    pub fn product_state(bits: &[usize]) -> Self {
        let index = bits
            .iter()
            .enumerate()
            .fold(0usize, |acc, (i, &b)| crate::bits::set_bit(acc, i, b));
        Self::basis_state(bits.len(), index)
    }

    /// Number of qubits, `floor(log2(len))`.
    pub fn num_qubits(&self) -> usize {
        self.data.len().checked_ilog2().unwrap_or(0) as usize
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }
}

impl From<Vec<Complex64>> for State {
    fn from(amplitudes: Vec<Complex64>) -> Self {
        State::new(Array1::from(amplitudes))
    }
}
