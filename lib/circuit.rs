//! Abstractions for driving monitored brickwork circuits of random two-qubit
//! Cliffords and measuring measurement-induced phase transitions (MIPTs).
//!
//! Each time step of a circuit consists of two half-steps. The first applies a
//! two-qubit gate to every *even* bond, (1, 2), (3, 4), ..., and the second to
//! every *odd* bond, (0, 1), (2, 3), .... Each half-step is followed by a
//! sublayer of Z-basis measurements, except for the last, so that every
//! circuit ends on a unitary layer.
//!
//! # Example
//! ```
//! use monitored_clifford::{ circuit::*, stab::StabState };
//!
//! let config = CircuitConfig {
//!     depth: 8,
//!     gates: GateConfig::Clifford,
//!     boundaries: BoundaryConfig::Periodic,
//!     measurement: MeasureConfig {
//!         prob: MeasProbConfig::Uniform(0.1),
//!         skip_reference: false,
//!     },
//!     record_gates: true,
//! };
//! let mut circuit = BrickworkCircuit::new(StabState::new(8), Some(10546));
//! let record = circuit.run(&config).unwrap();
//! let final_state = circuit.into_state();
//!
//! // replaying the record reproduces the same state
//! let replay = record.into_replay().unwrap();
//! let mut circuit = BrickworkCircuit::new(StabState::new(8), None);
//! circuit.run_replay(&config, &replay).unwrap();
//! assert_eq!(circuit.state(), &final_state);
//! ```

use rand::{ rngs::StdRng, Rng, SeedableRng };
use crate::{
    clifford::{
        self,
        apply_random_two_qubit_clifford,
        apply_random_two_qubit_dual_unitary,
    },
    entropy::{ entanglement_entropy, mutual_information },
    error::{ SimError, SimResult },
    measure::measure_z,
    stab::{ Outcome, StabState },
};

/// A pair of qubit indices acted on by a single two-qubit gate.
pub type Bond = (usize, usize);

/// A single measurement sublayer: one entry per qubit, `None` where the qubit
/// was not measured.
pub type MeasLayer = Vec<Option<Outcome>>;

/// Measurement outcomes for each half-step of a circuit.
pub type MeasRecord = Vec<MeasLayer>;

/// A single gate layer: one entry per bond, `None` where no gate was applied.
pub type GateLayer = Vec<Option<usize>>;

/// Gate indices for each half-step of a circuit.
pub type GateRecord = Vec<GateLayer>;

/// Bond lists for the two alternating layers of a brickwork circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bonds {
    /// (0, 1), (2, 3), ...
    pub odd: Vec<Bond>,
    /// (1, 2), (3, 4), ...
    pub even: Vec<Bond>,
}

impl Bonds {
    /// Construct bond lists for a chain of `n` qubits.
    ///
    /// Under periodic boundaries, the wraparound bond (*n* - 1, 0) is added to
    /// the odd list if `n` is odd and to the even list otherwise.
    pub fn new(n: usize, boundaries: BoundaryConfig) -> Self {
        let mut odd: Vec<Bond> =
            (0..n.saturating_sub(1)).step_by(2).map(|k| (k, k + 1)).collect();
        let mut even: Vec<Bond> =
            (1..n.saturating_sub(1)).step_by(2).map(|k| (k, k + 1)).collect();
        if boundaries == BoundaryConfig::Periodic && n >= 2 {
            if n % 2 == 1 { odd.push((n - 1, 0)); } else { even.push((n - 1, 0)); }
        }
        Self { odd, even }
    }

    /// Return the bonds acted on in half-step `layer` (even bonds for even
    /// `layer`, odd bonds otherwise).
    pub fn layer(&self, layer: usize) -> &[Bond] {
        if layer % 2 == 0 { &self.even } else { &self.odd }
    }
}

/// Define the family of two-qubit gates drawn for each bond.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GateConfig {
    /// The full two-qubit Clifford group (11,520 elements).
    Clifford,
    /// The dual-unitary family (5,760 elements).
    DualUnitary,
}

impl GateConfig {
    /// Return the number of gates in the family.
    pub fn size(self) -> usize {
        match self {
            Self::Clifford => clifford::N_CLIFFORD,
            Self::DualUnitary => clifford::N_DUAL_UNITARY,
        }
    }

    /// Apply the gate with the given index to bond `(a, b)`, drawing a random
    /// index if none is given. Returns the index applied.
    pub fn apply<R>(
        self,
        state: &mut StabState,
        (a, b): Bond,
        index: Option<usize>,
        rng: &mut R,
    ) -> SimResult<usize>
    where R: Rng + ?Sized
    {
        match self {
            Self::Clifford
                => apply_random_two_qubit_clifford(state, a, b, index, rng),
            Self::DualUnitary
                => apply_random_two_qubit_dual_unitary(state, a, b, index, rng),
        }
    }
}

/// Boundary conditions on the qubit chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryConfig {
    Open,
    Periodic,
}

/// Define the conditions for when measurements are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureConfig {
    /// Application of measurements within a single sublayer.
    pub prob: MeasProbConfig,
    /// Never measure qubit 0, leaving it as an unmeasured reference.
    pub skip_reference: bool,
}

/// Define the probability with which each qubit is measured in a sublayer.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasProbConfig {
    /// Every qubit with the same probability.
    Uniform(f64),
    /// A fixed probability for each qubit.
    PerQubit(Vec<f64>),
}

impl MeasProbConfig {
    /// Return the measurement probability for qubit `k`.
    ///
    /// *Panics* if `self` is `PerQubit` and `k` is out of bounds.
    pub fn prob(&self, k: usize) -> f64 {
        match self {
            Self::Uniform(p) => *p,
            Self::PerQubit(ps) => ps[k],
        }
    }

    fn validate(&self, n: usize) -> SimResult<()> {
        let check = |p: f64| -> SimResult<()> {
            if (0.0..=1.0).contains(&p) {
                Ok(())
            } else {
                Err(SimError::InvalidProbability(p))
            }
        };
        match self {
            Self::Uniform(p) => check(*p),
            Self::PerQubit(ps) => {
                if ps.len() != n {
                    return Err(
                        SimError::ProbabilityLength { expected: n, got: ps.len() });
                }
                ps.iter().try_for_each(|p| check(*p))
            },
        }
    }
}

/// Top-level config for a circuit.
#[derive(Clone, Debug, PartialEq)]
pub struct CircuitConfig {
    /// Number of time steps, each consisting of two gate layers.
    pub depth: usize,
    /// Set the gate family to draw from.
    pub gates: GateConfig,
    /// Set the boundary conditions.
    pub boundaries: BoundaryConfig,
    /// Set conditions for measurements.
    pub measurement: MeasureConfig,
    /// Record the index of every gate applied.
    pub record_gates: bool,
}

impl CircuitConfig {
    /// Check that `self` describes a valid circuit on `n` qubits.
    pub fn validate(&self, n: usize) -> SimResult<()> {
        if n < 2 { return Err(SimError::TooFewQubits(n)); }
        if self.boundaries == BoundaryConfig::Periodic && n % 2 == 1 {
            return Err(SimError::OddPeriodic(n));
        }
        self.measurement.prob.validate(n)
    }
}

/// A previously recorded circuit to reproduce exactly.
///
/// Gates are applied where the recorded index is `Some`. Measurements are
/// performed where the recorded outcome is `Some`, and the recorded outcome is
/// used whenever the state does not already determine it. The last
/// measurement layer must be all `None`, since circuits end on a unitary
/// layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub gates: GateRecord,
    pub measurements: MeasRecord,
}

impl Replay {
    fn validate(&self, n: usize, config: &CircuitConfig, bonds: &Bonds)
        -> SimResult<()>
    {
        let layers = 2 * config.depth;
        if self.gates.len() != layers {
            return Err(SimError::ReplayLength {
                what: "gate", expected: layers, got: self.gates.len() });
        }
        if self.measurements.len() != layers {
            return Err(SimError::ReplayLength {
                what: "measurement",
                expected: layers,
                got: self.measurements.len(),
            });
        }
        let bound = config.gates.size();
        for (layer, gates) in self.gates.iter().enumerate() {
            let expected = bonds.layer(layer).len();
            if gates.len() != expected {
                return Err(SimError::ReplayLayerLength {
                    what: "gate", layer, expected, got: gates.len() });
            }
            if let Some(index) = gates.iter().flatten().find(|i| **i >= bound) {
                return Err(SimError::GateIndexOutOfRange { index: *index, bound });
            }
        }
        for (layer, meas) in self.measurements.iter().enumerate() {
            if meas.len() != n {
                return Err(SimError::ReplayLayerLength {
                    what: "measurement", layer, expected: n, got: meas.len() });
            }
        }
        if let Some(last) = self.measurements.last() {
            if let Some(qubit) = last.iter().position(Option::is_some) {
                return Err(SimError::ReplayFinalMeasurement { qubit });
            }
        }
        Ok(())
    }
}

/// Output of [`BrickworkCircuit::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitRecord {
    pub meas: MeasRecord,
    /// Present only if gate recording was requested.
    pub gates: Option<GateRecord>,
}

impl CircuitRecord {
    /// Convert to a [`Replay`], if gates were recorded.
    pub fn into_replay(self) -> Option<Replay> {
        self.gates.map(|gates| Replay { gates, measurements: self.meas })
    }
}

/// Output of [`BrickworkCircuit::run_dynamics`], with one observable entry per
/// half-step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicsRecord {
    pub meas: MeasRecord,
    /// Present only if gate recording was requested.
    pub gates: Option<GateRecord>,
    /// Entanglement entropy of the left half of the chain.
    pub entropy: Vec<usize>,
    /// Mutual information between two blocks of `max(1, n / 8)` qubits, one
    /// at each end of the left half.
    pub mutinf: Vec<isize>,
    /// Number of measurements performed.
    pub num_meas: Vec<usize>,
    /// Number of measurements whose outcome was already determined.
    pub num_det: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
struct Observables {
    entropy: Vec<usize>,
    mutinf: Vec<isize>,
    num_meas: Vec<usize>,
    num_det: Vec<usize>,
}

impl Observables {
    fn push(&mut self, state: &StabState, num_meas: usize, num_det: usize)
        -> SimResult<()>
    {
        let n = state.num_qubits();
        let half = n / 2;
        let b = (n / 8).max(1);
        self.entropy.push(entanglement_entropy(state, 0..half)?);
        self.mutinf.push(mutual_information(state, 0..b, half..half + b)?);
        self.num_meas.push(num_meas);
        self.num_det.push(num_det);
        Ok(())
    }
}

/// Main driver for running brickwork circuits of alternating unitary
/// evolution and measurement.
#[derive(Clone, Debug)]
pub struct BrickworkCircuit<R = StdRng> {
    state: StabState,
    rng: R,
}

impl BrickworkCircuit<StdRng> {
    /// Create a new `BrickworkCircuit` acting on `state`, optionally seeding
    /// the internal random number generator.
    pub fn new(state: StabState, seed: Option<u64>) -> Self {
        let rng
            = seed.map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self { state, rng }
    }
}

impl<R: Rng> BrickworkCircuit<R> {
    /// Create a new `BrickworkCircuit` acting on `state`, drawing all random
    /// numbers from `rng`.
    pub fn with_rng(state: StabState, rng: R) -> Self { Self { state, rng } }

    /// Return a reference to the current state.
    pub fn state(&self) -> &StabState { &self.state }

    /// Unwrap `self` into the current state.
    pub fn into_state(self) -> StabState { self.state }

    /// Return the number of qubits.
    pub fn n(&self) -> usize { self.state.num_qubits() }

    fn apply_layer(
        &mut self,
        gates: GateConfig,
        bonds: &[Bond],
        indices: Option<&[Option<usize>]>,
    ) -> SimResult<GateLayer>
    {
        let mut applied: GateLayer = Vec::with_capacity(bonds.len());
        for (j, bond) in bonds.iter().enumerate() {
            let index =
                match indices.map(|idx| idx[j]) {
                    Some(None) => { applied.push(None); continue; },
                    Some(recorded) => recorded,
                    None => None,
                };
            let index = gates.apply(&mut self.state, *bond, index, &mut self.rng)?;
            applied.push(Some(index));
        }
        Ok(applied)
    }

    // returns (number of measurements, number deterministic)
    fn measure_layer(&mut self, config: &MeasureConfig, buf: &mut MeasLayer)
        -> SimResult<(usize, usize)>
    {
        let mut num_meas: usize = 0;
        let mut num_det: usize = 0;
        let start = if config.skip_reference { 1 } else { 0 };
        for k in start..buf.len() {
            if self.rng.gen::<f64>() < config.prob.prob(k) {
                let m = measure_z(&mut self.state, k, None, &mut self.rng)?;
                buf[k] = Some(m.outcome);
                num_meas += 1;
                if m.deterministic { num_det += 1; }
            }
        }
        Ok((num_meas, num_det))
    }

    fn replay_layer(&mut self, decisions: &[Option<Outcome>], buf: &mut MeasLayer)
        -> SimResult<(usize, usize)>
    {
        let mut num_meas: usize = 0;
        let mut num_det: usize = 0;
        for (k, forced) in decisions.iter().enumerate() {
            if forced.is_none() { continue; }
            let m = measure_z(&mut self.state, k, *forced, &mut self.rng)?;
            buf[k] = Some(m.outcome);
            num_meas += 1;
            if m.deterministic { num_det += 1; }
        }
        Ok((num_meas, num_det))
    }

    fn do_run(
        &mut self,
        config: &CircuitConfig,
        replay: Option<&Replay>,
        mut gate_rcd: Option<&mut GateRecord>,
        mut obs: Option<&mut Observables>,
    ) -> SimResult<MeasRecord>
    {
        let n = self.n();
        config.validate(n)?;
        let bonds = Bonds::new(n, config.boundaries);
        if let Some(rep) = replay { rep.validate(n, config, &bonds)?; }

        let layers = 2 * config.depth;
        let mut meas: MeasRecord = Vec::with_capacity(layers);
        for layer in 0..layers {
            let indices = replay.map(|rep| rep.gates[layer].as_slice());
            let applied =
                self.apply_layer(config.gates, bonds.layer(layer), indices)?;
            if let Some(rcd) = gate_rcd.as_mut() { rcd.push(applied); }

            let mut outcomes: MeasLayer = vec![None; n];
            let (num_meas, num_det) =
                if layer + 1 == layers {
                    (0, 0)
                } else if let Some(rep) = replay {
                    self.replay_layer(&rep.measurements[layer], &mut outcomes)?
                } else {
                    self.measure_layer(&config.measurement, &mut outcomes)?
                };
            meas.push(outcomes);

            if let Some(rcd) = obs.as_mut() {
                rcd.push(&self.state, num_meas, num_det)?;
            }
        }
        Ok(meas)
    }

    /// Run a circuit with randomly drawn gates and measurements.
    ///
    /// Returns the measurement outcomes for every half-step, along with the
    /// applied gate indices if `config.record_gates` is set.
    pub fn run(&mut self, config: &CircuitConfig) -> SimResult<CircuitRecord> {
        let mut gates: GateRecord = Vec::new();
        let meas =
            self.do_run(
                config, None, config.record_gates.then_some(&mut gates), None)?;
        Ok(CircuitRecord { meas, gates: config.record_gates.then_some(gates) })
    }

    /// Reproduce a recorded circuit.
    ///
    /// `config.measurement` is ignored in favor of the recorded decisions. The
    /// record is checked in full against `config` and the state before
    /// anything is applied.
    pub fn run_replay(&mut self, config: &CircuitConfig, replay: &Replay)
        -> SimResult<MeasRecord>
    {
        self.do_run(config, Some(replay), None, None)
    }

    /// Like [`Self::run`], but additionally computing the half-chain entropy,
    /// a mutual information, and measurement counts after every half-step.
    pub fn run_dynamics(&mut self, config: &CircuitConfig)
        -> SimResult<DynamicsRecord>
    {
        let mut gates: GateRecord = Vec::new();
        let mut obs = Observables::default();
        let meas =
            self.do_run(
                config,
                None,
                config.record_gates.then_some(&mut gates),
                Some(&mut obs),
            )?;
        let Observables { entropy, mutinf, num_meas, num_det } = obs;
        Ok(DynamicsRecord {
            meas,
            gates: config.record_gates.then_some(gates),
            entropy,
            mutinf,
            num_meas,
            num_det,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use crate::stab::StateKind;

    fn config(depth: usize, p: f64, boundaries: BoundaryConfig) -> CircuitConfig {
        CircuitConfig {
            depth,
            gates: GateConfig::Clifford,
            boundaries,
            measurement: MeasureConfig {
                prob: MeasProbConfig::Uniform(p),
                skip_reference: false,
            },
            record_gates: true,
        }
    }

    #[test]
    fn bond_lists() {
        let b = Bonds::new(6, BoundaryConfig::Open);
        assert_eq!(b.odd, vec![(0, 1), (2, 3), (4, 5)]);
        assert_eq!(b.even, vec![(1, 2), (3, 4)]);

        let b = Bonds::new(5, BoundaryConfig::Periodic);
        assert_eq!(b.odd, vec![(0, 1), (2, 3), (4, 0)]);
        assert_eq!(b.even, vec![(1, 2), (3, 4)]);

        let b = Bonds::new(4, BoundaryConfig::Periodic);
        assert_eq!(b.odd, vec![(0, 1), (2, 3)]);
        assert_eq!(b.even, vec![(1, 2), (3, 0)]);
        assert_eq!(b.layer(0), b.even.as_slice());
        assert_eq!(b.layer(3), b.odd.as_slice());

        let b = Bonds::new(1, BoundaryConfig::Periodic);
        assert!(b.odd.is_empty() && b.even.is_empty());
    }

    #[test]
    fn validation() {
        let q = StabState::new(5);
        let mut circ = BrickworkCircuit::new(q.clone(), Some(10546));

        assert_eq!(
            circ.run(&config(2, 1.5, BoundaryConfig::Open)),
            Err(SimError::InvalidProbability(1.5)),
        );
        assert_eq!(
            circ.run(&config(2, 0.5, BoundaryConfig::Periodic)),
            Err(SimError::OddPeriodic(5)),
        );
        let mut conf = config(2, 0.5, BoundaryConfig::Open);
        conf.measurement.prob = MeasProbConfig::PerQubit(vec![0.1; 4]);
        assert_eq!(
            circ.run(&conf),
            Err(SimError::ProbabilityLength { expected: 5, got: 4 }),
        );
        conf.measurement.prob = MeasProbConfig::PerQubit(vec![0.1, 0.2, -0.1, 0.0, 1.0]);
        assert_eq!(circ.run(&conf), Err(SimError::InvalidProbability(-0.1)));

        let replay = Replay {
            gates: vec![vec![Some(0); 2]; 3],
            measurements: vec![vec![None; 5]; 4],
        };
        assert_eq!(
            circ.run_replay(&config(2, 0.0, BoundaryConfig::Open), &replay),
            Err(SimError::ReplayLength { what: "gate", expected: 4, got: 3 }),
        );
        let replay = Replay {
            gates: vec![vec![Some(0); 2], vec![Some(0); 3]],
            measurements: vec![vec![None; 5]; 2],
        };
        assert_eq!(
            circ.run_replay(&config(1, 0.0, BoundaryConfig::Open), &replay),
            Err(SimError::ReplayLayerLength {
                what: "gate", layer: 1, expected: 2, got: 3 }),
        );
        let replay = Replay {
            gates: vec![vec![Some(0); 2]; 2],
            measurements: vec![vec![None; 5], vec![None; 4]],
        };
        assert_eq!(
            circ.run_replay(&config(1, 0.0, BoundaryConfig::Open), &replay),
            Err(SimError::ReplayLayerLength {
                what: "measurement", layer: 1, expected: 5, got: 4 }),
        );
        let replay = Replay {
            gates: vec![vec![Some(11520); 2], vec![Some(0); 2]],
            measurements: vec![vec![None; 5]; 2],
        };
        assert_eq!(
            circ.run_replay(&config(1, 0.0, BoundaryConfig::Open), &replay),
            Err(SimError::GateIndexOutOfRange { index: 11520, bound: 11520 }),
        );
        let mut measurements = vec![vec![None; 5]; 2];
        measurements[1][3] = Some(Outcome::One);
        let replay = Replay { gates: vec![vec![Some(0); 2]; 2], measurements };
        assert_eq!(
            circ.run_replay(&config(1, 0.0, BoundaryConfig::Open), &replay),
            Err(SimError::ReplayFinalMeasurement { qubit: 3 }),
        );
        assert_eq!(circ.state(), &q);

        let mut circ = BrickworkCircuit::new(StabState::new(1), None);
        assert_eq!(
            circ.run(&config(1, 0.0, BoundaryConfig::Open)),
            Err(SimError::TooFewQubits(1)),
        );
    }

    #[test]
    fn identity_circuit() {
        let q = StabState::init(4, StateKind::Bell).unwrap();
        let bonds = Bonds::new(4, BoundaryConfig::Open);
        let replay = Replay {
            gates: vec![vec![Some(0); bonds.even.len()], vec![Some(0); bonds.odd.len()]],
            measurements: vec![vec![None; 4]; 2],
        };
        let mut circ = BrickworkCircuit::new(q.clone(), Some(10546));
        let meas = circ.run_replay(&config(1, 0.0, BoundaryConfig::Open), &replay)
            .unwrap();
        assert_eq!(circ.state(), &q);
        assert!(meas.iter().flatten().all(|m| m.is_none()));
        assert_eq!(meas.len(), 2);
    }

    #[test]
    fn measurement_layers() {
        let mut conf = config(3, 1.0, BoundaryConfig::Periodic);
        let mut circ = BrickworkCircuit::new(StabState::new(6), Some(10546));
        let record = circ.run(&conf).unwrap();
        assert_eq!(record.meas.len(), 6);
        let (last, rest) = record.meas.split_last().unwrap();
        assert!(last.iter().all(|m| m.is_none()));
        assert!(rest.iter().flatten().all(|m| m.is_some()));
        let gates = record.gates.unwrap();
        assert_eq!(gates.len(), 6);
        assert!(gates.iter().step_by(2).all(|l| l.len() == 3));

        conf.measurement.skip_reference = true;
        conf.record_gates = false;
        let dyn_rcd = circ.run_dynamics(&conf).unwrap();
        assert!(dyn_rcd.gates.is_none());
        assert!(dyn_rcd.meas.iter().all(|l| l[0].is_none()));
        assert_eq!(dyn_rcd.entropy.len(), 6);
        assert_eq!(dyn_rcd.num_meas[..5], [5; 5]);
        assert_eq!(dyn_rcd.num_meas[5], 0);
        assert!(dyn_rcd.num_det.iter().zip(&dyn_rcd.num_meas).all(|(d, m)| d <= m));
    }

    #[test]
    fn per_qubit_probabilities() {
        let mut conf = config(4, 0.0, BoundaryConfig::Open);
        conf.measurement.prob =
            MeasProbConfig::PerQubit(vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        let mut circ = BrickworkCircuit::new(StabState::new(6), Some(10546));
        let record = circ.run(&conf).unwrap();
        let (last, rest) = record.meas.split_last().unwrap();
        assert_eq!(rest.len(), 7);
        for layer in rest {
            let measured: Vec<bool> = layer.iter().map(Option::is_some).collect();
            assert_eq!(measured, [true, false, true, false, true, false]);
        }
        assert!(last.iter().all(Option::is_none));
    }

    #[test]
    fn mixed_state_purifies() {
        let mut conf = config(4, 1.0, BoundaryConfig::Open);
        conf.gates = GateConfig::DualUnitary;
        let mut circ = BrickworkCircuit::new(StabState::mixed(5), Some(10546));
        let dyn_rcd = circ.run_dynamics(&conf).unwrap();
        assert!(circ.state().is_pure());
        assert_eq!(dyn_rcd.num_det[0], 0);
    }

    proptest! {
        #[test]
        fn replay_reproduces_state(
            seed: u64,
            half in 1_usize..5,
            depth in 1_usize..6,
            p in 0.0_f64..=1.0,
            periodic: bool,
            dual: bool,
            mixed: bool,
        ) {
            let n = 2 * half;
            let mut conf = config(
                depth,
                p,
                if periodic { BoundaryConfig::Periodic } else { BoundaryConfig::Open },
            );
            if dual { conf.gates = GateConfig::DualUnitary; }
            let init =
                if mixed { StabState::mixed(n) } else { StabState::new(n) };

            let mut circ = BrickworkCircuit::new(init.clone(), Some(seed));
            let record = circ.run(&conf).unwrap();
            let meas = record.meas.clone();
            let replay = record.into_replay().unwrap();

            let mut circ2 =
                BrickworkCircuit::new(init, Some(seed.wrapping_add(1)));
            let meas2 = circ2.run_replay(&conf, &replay).unwrap();
            prop_assert_eq!(meas, meas2);
            prop_assert_eq!(circ.state(), circ2.state());
        }
    }
}
