//! Bit-level indexing between the global register basis and a gate's local basis.
//!
//! A basis state of an `n`-qubit register is an `n`-bit integer whose bit `i`
//! holds the value of qubit `i` (bit 0 is the least significant bit).
//! A gate acting on qubits `[q_0, ..., q_{k-1}]` sees a `k`-bit local state
//! in which `q_0` is the most significant bit.

/// Read the bit of `value` at `position`.
///
/// Returns 0 or 1. `position` must lie in `[0, total_bits)`.
///
/// # Example
/// ```
/// use qubit_embed::bits::get_bit;
/// // 0b110: qubit 0 = 0, qubit 1 = 1, qubit 2 = 1
/// assert_eq!(get_bit(0b110, 3, 0), 0);
/// assert_eq!(get_bit(0b110, 3, 1), 1);
/// assert_eq!(get_bit(0b110, 3, 2), 1);
/// ```
#[inline]
pub fn get_bit(value: usize, total_bits: usize, position: usize) -> usize {
    debug_assert!(
        position < total_bits,
        "bit position {} out of range for {} bits",
        position,
        total_bits
    );
    (value >> position) & 1
}

/// Return `value` with the bit at `position` set to `bit` (0 or 1).
///
/// # Example
/// ```
/// use qubit_embed::bits::set_bit;
/// assert_eq!(set_bit(0b000, 2, 1), 0b100);
/// assert_eq!(set_bit(0b111, 0, 0), 0b110);
/// ```
#[inline]
pub fn set_bit(value: usize, position: usize, bit: usize) -> usize {
    debug_assert!(bit <= 1, "bit value must be 0 or 1, got {}", bit);
    (value & !(1 << position)) | (bit << position)
}

/// Extract the local gate state from a global basis state.
///
/// Reads the bit at each position of `qubit_indices`, in the order given,
/// and packs them most-significant-first. The caller's order decides which
/// axis of the gate's local space each qubit maps to, so `[2, 0]` and
/// `[0, 2]` generally give different results.
///
/// # Example
/// ```
/// use qubit_embed::bits::extract_bits;
/// // global 0b101 (qubits 0 and 2 set, qubit 1 clear)
/// assert_eq!(extract_bits(0b101, 3, &[0, 1]), 0b10);
/// assert_eq!(extract_bits(0b101, 3, &[1, 0]), 0b01);
/// assert_eq!(extract_bits(0b101, 3, &[2, 1, 0]), 0b101);
/// ```
pub fn extract_bits(global_state: usize, total_qubits: usize, qubit_indices: &[usize]) -> usize {
    qubit_indices.iter().fold(0usize, |local, &q| {
        (local << 1) | get_bit(global_state, total_qubits, q)
    })
}
