//! Grover search over a 3-qubit register, marking |111⟩.
//!
//! Run with: cargo run --example grover_search

use qsv_algorithms::{grover, optimal_grover_iterations};
use qsv_core::Result;

fn main() -> Result<()> {
    let num_qubits = 3;
    println!(
        "Searching {} states with {} Grover iterations",
        1 << num_qubits,
        optimal_grover_iterations(num_qubits)
    );

    let mut circuit = grover(num_qubits, |c| c.ccz(0, 1, 2).map(|_| ()), None)?;

    println!("\nProbabilities after amplification:");
    for (i, p) in circuit.probabilities().iter().enumerate() {
        println!("  |{:03b}⟩  {:.4}", i, p);
    }

    let counts = circuit.sample(1000)?;
    println!("\n{}", counts);
    Ok(())
}
