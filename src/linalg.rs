//! Small linear-algebra helpers on top of `ndarray`.

use ndarray::{Array1, Array2, ArrayView1};
use num_complex::Complex64;

/// A single-qubit (2-dimensional) complex vector.
pub type Ket = Array1<Complex64>;

/// The computational basis ket for `bit`: `|0> = (1, 0)`, `|1> = (0, 1)`.
pub fn ket(bit: usize) -> Ket {
    debug_assert!(bit <= 1, "ket bit must be 0 or 1, got {}", bit);
    let mut k = Array1::zeros(2);
    k[bit] = Complex64::new(1.0, 0.0);
    k
}

/// A ket from two amplitudes.
pub fn ket_from(zero: Complex64, one: Complex64) -> Ket {
    Array1::from(vec![zero, one])
}

/// Kronecker product of two vectors.
///
/// Element `i * b.len() + j` of the result is `a[i] * b[j]`.
///
/// # Example
/// ```
/// use qubit_embed::linalg::{ket, kron};
/// let v = kron(&ket(1).view(), &ket(0).view());
/// // |1> ⊗ |0> = |10> = index 2
/// assert_eq!(v[2].re, 1.0);
/// ```
pub fn kron(a: &ArrayView1<Complex64>, b: &ArrayView1<Complex64>) -> Array1<Complex64> {
    let mut out = Array1::zeros(a.len() * b.len());
    for (i, &ai) in a.iter().enumerate() {
        if ai == Complex64::new(0.0, 0.0) {
            continue;
        }
        let base = i * b.len();
        for (j, &bj) in b.iter().enumerate() {
            out[base + j] = ai * bj;
        }
    }
    out
}

/// Kronecker product of a sequence of vectors, left to right.
///
/// An empty sequence gives the 1-element vector `[1]`.
pub fn kron_all<'a, I>(factors: I) -> Array1<Complex64>
where
    I: IntoIterator<Item = &'a Array1<Complex64>>,
{
    factors
        .into_iter()
        .fold(Array1::from(vec![Complex64::new(1.0, 0.0)]), |acc, f| {
            kron(&acc.view(), &f.view())
        })
}

/// Compute the conjugate transpose (adjoint) of a matrix.
pub fn adjoint(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|c| c.conj())
}

/// Largest elementwise deviation between two equally shaped vectors.
///
/// A NaN anywhere makes the result NaN, which fails every `<= atol` check.
pub fn max_deviation(a: &ArrayView1<Complex64>, b: &ArrayView1<Complex64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max })
}

/// Whether `deviation` is within `atol`. NaN never is.
#[inline]
pub fn within_tolerance(deviation: f64, atol: f64) -> bool {
    deviation <= atol
}

/// Check `U† U = I` within `atol`.
pub fn is_unitary(m: &Array2<Complex64>, atol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    let product = adjoint(m).dot(m);
    product.indexed_iter().all(|((i, j), &v)| {
        let expected = if i == j { 1.0 } else { 0.0 };
        within_tolerance((v - Complex64::new(expected, 0.0)).norm(), atol)
    })
}
