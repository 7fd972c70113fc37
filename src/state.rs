//! Print the stabilizer generators and a few entropies of a small register as
//! it evolves through a brickwork circuit.
//!
//! Usage: `state [n] [zero|plus|mixed|bell] [p]`

use std::{ env, error::Error, fmt::Display, str::FromStr };
use monitored_clifford::{
    circuit::*,
    entropy::{ entanglement_entropy, mutual_information },
    stab::StabState,
    SimError,
};

// parse the argument at `pos` if present, reporting it by name on failure
fn arg<T>(args: &[String], pos: usize, name: &str, default: T)
    -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Display,
{
    match args.get(pos) {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e| {
            let msg = format!("invalid argument {} = {:?}: {}", name, s, e);
            Box::<dyn Error>::from(msg)
        }),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let n: usize = arg(&args, 1, "n", 6)?;
    if n < 2 { return Err(SimError::TooFewQubits(n).into()); }
    let kind = args.get(2).map(String::as_str).unwrap_or("zero");
    let p: f64 = arg(&args, 3, "p", 0.2)?;

    let state = StabState::init_str(n, kind)?;
    let config = CircuitConfig {
        depth: 1,
        gates: GateConfig::Clifford,
        boundaries: BoundaryConfig::Open,
        measurement: MeasureConfig {
            prob: MeasProbConfig::Uniform(p),
            skip_reference: false,
        },
        record_gates: true,
    };
    let mut circuit = BrickworkCircuit::new(state, Some(10546));
    for t in 0..=n {
        let state = circuit.state();
        println!("t={} rank={}", t, state.rank());
        println!("{:#}", state.as_group());
        println!(
            "S(left half) = {}, I(first, last) = {}",
            entanglement_entropy(state, 0..n / 2)?,
            mutual_information(state, [0], [n - 1])?,
        );
        if t < n {
            let record = circuit.run(&config)?;
            for (layer, gates) in record.gates.iter().flatten().enumerate() {
                println!("  gates[{}] = {:?}", layer, gates);
            }
        }
    }
    Ok(())
}
