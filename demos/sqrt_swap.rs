//! Half swap demo: two √SWAP gates exchange the states of two qubits,
//! one √SWAP alone leaves them entangled.

use qubit_embed::{put, Circuit, Gate, MatrixGate, State};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n = 3;
    // qubit 0 starts in |1>, the others in |0>
    let state = State::product_state(&[1, 0, 0]);

    let half = MatrixGate::new(Gate::SqrtSwap)?;
    println!("{} on q[0, 2] of {} qubits:", half.symbol(), n);
    let matrix = half.create_gate_matrix(n, &[0, 2])?;
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|a| format!("{:>11.2}", a)).collect();
        println!("  {}", cells.join(" "));
    }

    let once = half.apply(&state, &[0, 2])?;
    println!("\nafter one half swap:");
    for (i, amp) in once.data.iter().enumerate() {
        if amp.norm() > 1e-12 {
            println!("  |{:03b}>  {:.3}", i, amp);
        }
    }

    let circuit = Circuit::new(n, vec![put(vec![0, 2], Gate::SqrtSwap), put(vec![0, 2], Gate::SqrtSwap)])?;
    print!("\n{}", circuit);
    let swapped = circuit.run(&state)?;
    let (index, _) = swapped
        .data
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        .ok_or("empty state")?;
    println!("two half swaps move |{:03b}> to |{:03b}>", 1, index);
    Ok(())
}
