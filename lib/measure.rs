//! Projective Z-basis measurement of single qubits.

use rand::Rng;
use crate::{
    error::{ SimError, SimResult },
    gate::Pauli,
    stab::{ NPauli, Outcome, Projection, StabState },
};

/// The result of a single measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub outcome: Outcome,
    /// `true` if the state already fixed the outcome before measuring.
    pub deterministic: bool,
}

/// Measure qubit `k` in the Z basis.
///
/// If the outcome is not fixed by the state, it is drawn as a fair coin flip
/// from `rng` unless `forced` is given, in which case `forced` is used and
/// nothing is drawn. `forced` is ignored for deterministic outcomes.
///
/// The maximally mixed state is handled separately: the post-measurement
/// state is rebuilt directly from the single generator ±Z<sub>*k*</sub>.
pub fn measure_z<R>(
    state: &mut StabState,
    k: usize,
    forced: Option<Outcome>,
    rng: &mut R,
) -> SimResult<Measurement>
where R: Rng + ?Sized
{
    let n = state.num_qubits();
    if k >= n { return Err(SimError::QubitOutOfRange(k, n)); }
    let rank = state.rank();
    if rank > n { return Err(SimError::InvalidRank { rank, n }); }
    if rank == 0 {
        let outcome = forced.unwrap_or_else(|| rng.gen::<bool>().into());
        let gen = NPauli::single(n, k, Pauli::Z, outcome.is_one());
        *state = StabState::from_rows(n, [gen])?;
        return Ok(Measurement { outcome, deterministic: false });
    }
    match state.project_z(k)? {
        Projection::Determined(outcome) => {
            Ok(Measurement { outcome, deterministic: true })
        },
        Projection::Undetermined(row) => {
            let outcome = forced.unwrap_or_else(|| rng.gen::<bool>().into());
            state.set_outcome(row, outcome);
            Ok(Measurement { outcome, deterministic: false })
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::{ rngs::StdRng, SeedableRng };
    use crate::{ clifford::apply_random_two_qubit_clifford, gate::G1 };

    #[test]
    fn basis_states() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut q = StabState::new(3);
        q.apply_gate(G1::X.on(2)).unwrap();
        let m0 = measure_z(&mut q, 0, Some(Outcome::One), &mut rng).unwrap();
        assert_eq!(m0, Measurement { outcome: Outcome::Zero, deterministic: true });
        let m2 = measure_z(&mut q, 2, None, &mut rng).unwrap();
        assert_eq!(m2, Measurement { outcome: Outcome::One, deterministic: true });
        assert_eq!(
            measure_z(&mut q, 3, None, &mut rng),
            Err(SimError::QubitOutOfRange(3, 3)),
        );
    }

    #[test]
    fn forced_outcomes() {
        let mut rng = StdRng::seed_from_u64(10546);
        for outcome in [Outcome::Zero, Outcome::One] {
            let mut q = StabState::new(2);
            q.apply_gate(G1::H.on(1)).unwrap();
            let m = measure_z(&mut q, 1, Some(outcome), &mut rng).unwrap();
            assert_eq!(m, Measurement { outcome, deterministic: false });
            let mut p = StabState::new(2);
            if outcome.is_one() { p.apply_gate(G1::X.on(1)).unwrap(); }
            assert_eq!(q.as_matrix(), p.as_matrix());
        }
    }

    #[test]
    fn maximally_mixed() {
        let mut rng = StdRng::seed_from_u64(10546);
        let mut q = StabState::mixed(4);
        let m = measure_z(&mut q, 2, Some(Outcome::One), &mut rng).unwrap();
        assert!(!m.deterministic);
        assert_eq!(q.rank(), 1);
        assert_eq!(q.row(0), NPauli::single(4, 2, Pauli::Z, true));
        let m = measure_z(&mut q, 2, None, &mut rng).unwrap();
        assert_eq!(m, Measurement { outcome: Outcome::One, deterministic: true });
        let m = measure_z(&mut q, 0, None, &mut rng).unwrap();
        assert!(!m.deterministic);
        assert_eq!(q.rank(), 2);
    }

    proptest! {
        #[test]
        fn idempotent(seed: u64, k in 0_usize..6, mixed: bool) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut q =
                if mixed { StabState::mixed(6) } else { StabState::new(6) };
            for a in [0, 2, 4, 1, 3] {
                apply_random_two_qubit_clifford(&mut q, a, a + 1, None, &mut rng)
                    .unwrap();
            }
            let m0 = measure_z(&mut q, k, None, &mut rng).unwrap();
            let m1 = measure_z(&mut q, k, None, &mut rng).unwrap();
            prop_assert_eq!(m0.outcome, m1.outcome);
            prop_assert!(m1.deterministic);
            prop_assert!(q.rank() <= 6);
        }
    }
}
