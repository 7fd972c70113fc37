//! Thermalize a chain without measurements, run a monitored circuit on the
//! result, then replay the recorded gates and outcomes and check that the
//! final states agree.

use monitored_clifford::{ circuit::*, stab::StabState, SimResult };

fn config(depth: usize, p: f64, record_gates: bool) -> CircuitConfig {
    CircuitConfig {
        depth,
        gates: GateConfig::DualUnitary,
        boundaries: BoundaryConfig::Periodic,
        measurement: MeasureConfig {
            prob: MeasProbConfig::Uniform(p),
            skip_reference: true,
        },
        record_gates,
    }
}

fn main() -> SimResult<()> {
    const N: usize = 32;
    const MC: usize = 100;

    let mut failures: usize = 0;
    for k in 0..MC {
        eprint!("\r {} ", k);
        let mut thermal = BrickworkCircuit::new(StabState::new(N), Some(k as u64));
        thermal.run(&config(2 * N, 0.0, false))?;
        let init = thermal.into_state();

        let conf = config(N, 0.15, true);
        let mut circuit = BrickworkCircuit::new(init.clone(), None);
        let record = circuit.run(&conf)?;
        let meas = record.meas.clone();
        let Some(replay) = record.into_replay() else { continue; };

        let mut replayed = BrickworkCircuit::new(init, None);
        let meas_replayed = replayed.run_replay(&conf, &replay)?;
        if meas != meas_replayed || circuit.state() != replayed.state() {
            failures += 1;
        }
    }
    eprintln!();
    println!("{} / {} replays reproduced the original circuit", MC - failures, MC);
    Ok(())
}
