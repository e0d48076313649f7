use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use qubit_embed::state::State;

#[test]
fn test_zero_state() {
    let state = State::zero_state(2);
    assert_eq!(state.total_dim(), 4);
    assert_eq!(state.num_qubits(), 2);
    assert_eq!(state.data[0], Complex64::new(1.0, 0.0));
    for i in 1..4 {
        assert_eq!(state.data[i], Complex64::new(0.0, 0.0));
    }
}

#[test]
fn test_product_state_qubit_zero_is_lsb() {
    // q0 = 1, q1 = 0, q2 = 1 -> 0b101
    let state = State::product_state(&[1, 0, 1]);
    assert_eq!(state.total_dim(), 8);
    assert_eq!(state.data[0b101], Complex64::new(1.0, 0.0));
    assert_eq!(state, State::basis_state(3, 5));
}

#[test]
fn test_norm() {
    let s = 0.5;
    let state = State::from(vec![Complex64::new(s, 0.0); 4]);
    assert_abs_diff_eq!(state.norm(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_num_qubits_zero_register() {
    let state = State::zero_state(0);
    assert_eq!(state.total_dim(), 1);
    assert_eq!(state.num_qubits(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_basis_state_out_of_range() {
    State::basis_state(2, 4);
}
