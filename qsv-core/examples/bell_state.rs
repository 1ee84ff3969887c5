//! Prepare a Bell pair, print the sampled histogram and the exact amplitudes.
//!
//! Run with: cargo run --example bell_state

use qsv_core::QuantumCircuit;

fn main() -> qsv_core::Result<()> {
    let mut circuit = QuantumCircuit::new(2)?;
    circuit.bell(0, 1)?;

    println!("Amplitudes after H(0), CX(0, 1):");
    for (i, amp) in circuit.state_vector().iter().enumerate() {
        println!("  |{:02b}⟩  {:.4} {:+.4}i", i, amp.re, amp.im);
    }

    let result = circuit.run(1000)?;
    println!("\n{}", result.counts);
    println!("Sampling took {:?}", result.execution_time);

    Ok(())
}
