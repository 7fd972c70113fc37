//! Sweep the measurement probability and chain length, printing the
//! steady-state half-chain entanglement entropy averaged over many circuits.

use itertools::iproduct;
use monitored_clifford::{ circuit::*, stab::StabState, SimResult };
use ndarray as nd;
use rayon::iter::{ IntoParallelIterator, ParallelIterator };

// average entropy over the last half of the circuit, then over trials
fn eval_entropy(n: usize, p: f64, avg: usize) -> SimResult<f64> {
    let depth = 4 * n;
    let config = CircuitConfig {
        depth,
        gates: GateConfig::Clifford,
        boundaries: BoundaryConfig::Periodic,
        measurement: MeasureConfig {
            prob: MeasProbConfig::Uniform(p),
            skip_reference: false,
        },
        record_gates: false,
    };
    let total: f64
        = (0..avg).into_par_iter()
        .map(|_| -> SimResult<f64> {
            let mut circuit = BrickworkCircuit::new(StabState::new(n), None);
            let rcd = circuit.run_dynamics(&config)?;
            let tail = rcd.entropy.len() / 2;
            Ok(
                rcd.entropy.iter().skip(tail)
                    .map(|s| *s as f64)
                    .sum::<f64>() / (rcd.entropy.len() - tail) as f64
            )
        })
        .collect::<SimResult<Vec<f64>>>()?
        .into_iter()
        .sum();
    Ok(total / avg as f64)
}

fn main() -> SimResult<()> {
    const AVG: usize = 200;

    let p_meas: nd::Array1<f64> = nd::Array1::linspace(0.0, 0.3, 13);
    let size: nd::Array1<usize> = (8..=32).step_by(8).collect();

    let total = p_meas.len() * size.len();
    eprint!("\r  0 / {} ", total);
    let mut entropy: nd::Array2<f64> = nd::Array2::zeros((size.len(), p_meas.len()));
    for (k, (i, j)) in iproduct!(0..size.len(), 0..p_meas.len()).enumerate() {
        entropy[[i, j]] = eval_entropy(size[i], p_meas[j], AVG)?;
        eprint!("\r  {} / {} ", k + 1, total);
    }
    eprintln!();

    println!("# size p_meas entropy");
    for ((i, j), s) in entropy.indexed_iter() {
        println!("{} {:.4} {:.6}", size[i], p_meas[j], s);
    }
    Ok(())
}
