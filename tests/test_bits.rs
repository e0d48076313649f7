use qubit_embed::bits::{extract_bits, get_bit, set_bit};

#[test]
fn test_get_bit_qubit_zero_is_lsb() {
    assert_eq!(get_bit(0b01, 2, 0), 1);
    assert_eq!(get_bit(0b01, 2, 1), 0);
    assert_eq!(get_bit(0b10, 2, 0), 0);
    assert_eq!(get_bit(0b10, 2, 1), 1);
}

#[test]
fn test_extract_single_qubit() {
    for global in 0..16 {
        for q in 0..4 {
            assert_eq!(extract_bits(global, 4, &[q]), (global >> q) & 1);
        }
    }
}

#[test]
fn test_extract_packs_first_index_most_significant() {
    // qubits: q0=1, q1=1, q2=0, q3=1
    let global = 0b1011;
    assert_eq!(extract_bits(global, 4, &[2, 3]), 0b01);
    assert_eq!(extract_bits(global, 4, &[3, 2]), 0b10);
    assert_eq!(extract_bits(global, 4, &[0, 2, 3]), 0b101);
    assert_eq!(extract_bits(global, 4, &[3, 2, 1, 0]), 0b1011);
    assert_eq!(extract_bits(global, 4, &[0, 1, 2, 3]), 0b1101);
}

#[test]
fn test_extract_unsorted_indices_follow_caller_order() {
    let global = 0b100; // only qubit 2 set
    assert_eq!(extract_bits(global, 3, &[2, 0]), 0b10);
    assert_eq!(extract_bits(global, 3, &[0, 2]), 0b01);
}

#[test]
fn test_set_bit_roundtrip() {
    for value in 0..32usize {
        for pos in 0..5 {
            for bit in 0..2 {
                let v = set_bit(value, pos, bit);
                assert_eq!(get_bit(v, 5, pos), bit);
                // other bits untouched
                assert_eq!(v & !(1 << pos), value & !(1 << pos));
            }
        }
    }
}
