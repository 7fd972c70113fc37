//! Mutual information between distant blocks of a chain under measurement
//! rates with quenched spatial disorder.

use itertools::Itertools;
use monitored_clifford::{ circuit::*, stab::StabState, SimResult };
use ndarray as nd;
use rand::{ rngs::StdRng, Rng, SeedableRng };
use rayon::iter::{ IntoParallelIterator, ParallelIterator };

// per-qubit probabilities drawn uniformly from p ± w / 2, clipped to [0, 1]
fn disordered_probs<R>(n: usize, p: f64, w: f64, rng: &mut R) -> Vec<f64>
where R: Rng + ?Sized
{
    (0..n)
        .map(|_| (p + w * (rng.gen::<f64>() - 0.5)).clamp(0.0, 1.0))
        .collect()
}

fn eval_mutinf(n: usize, p: f64, w: f64, avg: usize, seed: u64)
    -> SimResult<f64>
{
    let depth = 4 * n;
    let res: Vec<f64>
        = (0..avg).into_par_iter()
        .map(|k| -> SimResult<f64> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
            let config = CircuitConfig {
                depth,
                gates: GateConfig::Clifford,
                boundaries: BoundaryConfig::Periodic,
                measurement: MeasureConfig {
                    prob: MeasProbConfig::PerQubit(
                        disordered_probs(n, p, w, &mut rng)),
                    skip_reference: false,
                },
                record_gates: false,
            };
            let mut circuit = BrickworkCircuit::with_rng(StabState::new(n), rng);
            let rcd = circuit.run_dynamics(&config)?;
            let tail = 3 * rcd.mutinf.len() / 4;
            Ok(
                rcd.mutinf.iter().skip(tail)
                    .map(|i| *i as f64)
                    .sum::<f64>() / (rcd.mutinf.len() - tail) as f64
            )
        })
        .collect::<SimResult<Vec<f64>>>()?;
    Ok(res.into_iter().sum::<f64>() / avg as f64)
}

fn main() -> SimResult<()> {
    const AVG: usize = 100;
    const SEED: u64 = 10546;

    let size: nd::Array1<usize> = (5..=7_u32).map(|k| 2_usize.pow(k)).collect();
    let p_meas: nd::Array1<f64> = nd::Array1::linspace(0.05, 0.25, 9);
    let width: nd::Array1<f64> = nd::array![0.0, 0.1, 0.2];

    let mut count: usize = 0;
    let total = size.len() * p_meas.len() * width.len();
    eprint!("\r  0 / {} ", total);
    let rows: Vec<(usize, f64, f64, f64)>
        = size.iter()
        .cartesian_product(p_meas.iter())
        .cartesian_product(width.iter())
        .map(|((&n, &p), &w)| -> SimResult<(usize, f64, f64, f64)> {
            let mi = eval_mutinf(n, p, w, AVG, SEED)?;
            count += 1;
            eprint!("\r  {} / {} ", count, total);
            Ok((n, p, w, mi))
        })
        .collect::<SimResult<_>>()?;
    eprintln!();

    println!("# size p_meas width mutinf");
    for (n, p, w, mi) in rows {
        println!("{} {:.4} {:.2} {:.6}", n, p, w, mi);
    }
    Ok(())
}
