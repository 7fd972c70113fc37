//! Deterministic synthesis of one- and two-qubit Clifford gates from integer
//! indices.
//!
//! The 24 single-qubit Cliffords are enumerated as short products of π and π/2
//! rotations about X and Y, indexed from 1. Two-qubit Cliffords are indexed
//! from 0 to 11,519 by a local class (a pair of single-qubit Cliffords, 576
//! choices) followed by one of four entangling classes:
//!
//! | Indices          | Entangler | Corrections |
//! | :--------------- | :-------- | :---------- |
//! | 0 .. 576         | none      | no          |
//! | 576 .. 5760      | CX        | yes         |
//! | 5760 .. 10944    | iSWAP     | yes         |
//! | 10944 .. 11520   | SWAP      | no          |
//!
//! where the correction step applies single-qubit Clifford 8 or 9 (or nothing)
//! to each qubit independently, giving 9 correction patterns. The dual-unitary
//! family keeps only the iSWAP and SWAP classes and is indexed from 0 to 5759.

use rand::Rng;
use crate::{
    error::{ SimError, SimResult },
    gate::{ Gate, G1, G2 },
    stab::StabState,
};
use G1::{ SqrtX as SX, SqrtXInv as SXi, SqrtY as SY, SqrtYInv as SYi };

/// Number of single-qubit Clifford elements.
pub const N_SINGLE: usize = 24;
/// Number of local (product) two-qubit classes.
pub const N_LOCAL: usize = N_SINGLE * N_SINGLE;
/// Number of two-qubit Clifford elements.
pub const N_CLIFFORD: usize = 11520;
/// Number of elements in the dual-unitary family.
pub const N_DUAL_UNITARY: usize = 5760;

const CX_START: usize = N_LOCAL;
const ISWAP_START: usize = 5760;
const SWAP_START: usize = 10944;
const DU_SWAP_START: usize = 5184;

// corrections used by the CX and iSWAP classes
const CORRECTION_A: usize = 8;
const CORRECTION_B: usize = 9;

/// Single-qubit Clifford elements as gate sequences, in time order. Entry
/// `i - 1` holds index `i`.
pub static SINGLE_QUBIT_CLIFFORDS: [&[G1]; N_SINGLE] = [
    // Paulis
    &[],
    &[G1::X],
    &[G1::Y],
    &[G1::Y, G1::X],
    // 2π/3 rotations
    &[SX, SY],
    &[SX, SYi],
    &[SXi, SY],
    &[SXi, SYi],
    &[SY, SX],
    &[SY, SXi],
    &[SYi, SX],
    &[SYi, SXi],
    // π/2 rotations
    &[SX],
    &[SXi],
    &[SY],
    &[SYi],
    &[SXi, SY, SX],
    &[SXi, SYi, SX],
    // Hadamard-like
    &[G1::X, SY],
    &[G1::X, SYi],
    &[G1::Y, SX],
    &[G1::Y, SXi],
    &[SX, SY, SX],
    &[SXi, SY, SXi],
];

/// Return the gate sequence for single-qubit Clifford `index` (in `1..=24`)
/// acting on qubit `k`.
pub fn single_qubit_clifford(index: usize, k: usize) -> SimResult<Vec<Gate>> {
    if !(1..=N_SINGLE).contains(&index) {
        return Err(SimError::CliffordIndexOutOfRange(index));
    }
    Ok(SINGLE_QUBIT_CLIFFORDS[index - 1].iter().map(|g| g.on(k)).collect())
}

/// Apply single-qubit Clifford `index` (in `1..=24`) to qubit `k`.
pub fn apply_single_qubit_clifford(state: &mut StabState, index: usize, k: usize)
    -> SimResult<()>
{
    let gates = single_qubit_clifford(index, k)?;
    state.apply_circuit(&gates)?;
    Ok(())
}

// local prefix shared by every class
fn push_local(gates: &mut Vec<Gate>, index: usize, a: usize, b: usize)
    -> SimResult<()>
{
    let ind1 = index % N_LOCAL;
    gates.append(&mut single_qubit_clifford(ind1 / N_SINGLE + 1, a)?);
    gates.append(&mut single_qubit_clifford(ind1 % N_SINGLE + 1, b)?);
    Ok(())
}

// one of 9 correction patterns, `ind2` in 0..9
fn push_corrections(gates: &mut Vec<Gate>, ind2: usize, a: usize, b: usize)
    -> SimResult<()>
{
    for (i, k) in [(ind2 / 3 + 1, a), (ind2 % 3 + 1, b)] {
        match i {
            2 => { gates.append(&mut single_qubit_clifford(CORRECTION_A, k)?); },
            3 => { gates.append(&mut single_qubit_clifford(CORRECTION_B, k)?); },
            _ => { },
        }
    }
    Ok(())
}

/// Return the gate sequence for two-qubit Clifford `index` (in `0..11520`)
/// acting on qubits `a` and `b`.
pub fn two_qubit_clifford(index: usize, a: usize, b: usize)
    -> SimResult<Vec<Gate>>
{
    if index >= N_CLIFFORD {
        return Err(SimError::GateIndexOutOfRange { index, bound: N_CLIFFORD });
    }
    let mut gates: Vec<Gate> = Vec::with_capacity(12);
    push_local(&mut gates, index, a, b)?;
    if index < CX_START {
        // local only
    } else if index < ISWAP_START {
        gates.push(G2::CX.on(a, b));
        push_corrections(&mut gates, (index - CX_START) / N_LOCAL, a, b)?;
    } else if index < SWAP_START {
        gates.push(G2::ISwap.on(a, b));
        push_corrections(&mut gates, (index - ISWAP_START) / N_LOCAL, a, b)?;
    } else {
        gates.push(G2::Swap.on(a, b));
    }
    Ok(gates)
}

/// Return the gate sequence for dual-unitary element `index` (in `0..5760`)
/// acting on qubits `a` and `b`.
pub fn dual_unitary(index: usize, a: usize, b: usize) -> SimResult<Vec<Gate>> {
    if index >= N_DUAL_UNITARY {
        return Err(
            SimError::GateIndexOutOfRange { index, bound: N_DUAL_UNITARY });
    }
    let mut gates: Vec<Gate> = Vec::with_capacity(12);
    push_local(&mut gates, index, a, b)?;
    if index < DU_SWAP_START {
        gates.push(G2::ISwap.on(a, b));
        push_corrections(&mut gates, index / N_LOCAL, a, b)?;
    } else {
        gates.push(G2::Swap.on(a, b));
    }
    Ok(gates)
}

/// Sample a single-qubit Clifford index uniformly from `1..=24`.
pub fn sample_single_qubit_index<R>(rng: &mut R) -> usize
where R: Rng + ?Sized
{
    rng.gen_range(1..=N_SINGLE)
}

/// Sample a two-qubit Clifford index uniformly from `0..11520`.
pub fn sample_clifford_index<R>(rng: &mut R) -> usize
where R: Rng + ?Sized
{
    rng.gen_range(0..N_CLIFFORD)
}

/// Sample a dual-unitary index uniformly from `0..5760`.
pub fn sample_dual_unitary_index<R>(rng: &mut R) -> usize
where R: Rng + ?Sized
{
    rng.gen_range(0..N_DUAL_UNITARY)
}

/// Apply a two-qubit Clifford to qubits `a` and `b`, drawing the index from
/// `rng` if none is given. Returns the index applied.
pub fn apply_random_two_qubit_clifford<R>(
    state: &mut StabState,
    a: usize,
    b: usize,
    index: Option<usize>,
    rng: &mut R,
) -> SimResult<usize>
where R: Rng + ?Sized
{
    let index = index.unwrap_or_else(|| sample_clifford_index(rng));
    state.apply_circuit(&two_qubit_clifford(index, a, b)?)?;
    Ok(index)
}

/// Apply a dual-unitary gate to qubits `a` and `b`, drawing the index from
/// `rng` if none is given. Returns the index applied.
pub fn apply_random_two_qubit_dual_unitary<R>(
    state: &mut StabState,
    a: usize,
    b: usize,
    index: Option<usize>,
    rng: &mut R,
) -> SimResult<usize>
where R: Rng + ?Sized
{
    let index = index.unwrap_or_else(|| sample_dual_unitary_index(rng));
    state.apply_circuit(&dual_unitary(index, a, b)?)?;
    Ok(index)
}

#[cfg(test)]
mod test {
    use super::*;
    use rustc_hash::FxHashSet as HashSet;
    use crate::{ gate::Pauli, stab::NPauli };

    // images of X0, Z0, X1, Z1 under a gate sequence; these fix a Clifford up
    // to global phase
    fn conj_table(gates: &[Gate]) -> Vec<NPauli> {
        [Pauli::X, Pauli::Z].into_iter()
            .flat_map(|p| [(p, 0), (p, 1)])
            .map(|(p, k)| {
                let mut q =
                    StabState::from_rows(2, [NPauli::single(2, k, p, false)])
                    .unwrap();
                q.apply_circuit(gates).unwrap();
                q.row(0)
            })
            .collect()
    }

    #[test]
    fn single_qubit_distinct() {
        let tables: HashSet<Vec<NPauli>> =
            (1..=24)
            .map(|i| conj_table(&single_qubit_clifford(i, 0).unwrap()))
            .collect();
        assert_eq!(tables.len(), 24);
    }

    #[test]
    fn single_qubit_known_elements() {
        // index 1 is the identity
        let mut q = StabState::new(3);
        q.apply_gate(G1::H.on(1)).unwrap();
        let q0 = q.clone();
        apply_single_qubit_clifford(&mut q, 1, 1).unwrap();
        assert_eq!(q, q0);

        // index 2 twice is the identity, and once flips Z
        let mut q = StabState::from_rows(1, [
            NPauli::new(false, [Pauli::X])]).unwrap();
        let q0 = q.clone();
        apply_single_qubit_clifford(&mut q, 2, 0).unwrap();
        apply_single_qubit_clifford(&mut q, 2, 0).unwrap();
        assert_eq!(q, q0);
        let mut q = StabState::new(1);
        apply_single_qubit_clifford(&mut q, 2, 0).unwrap();
        assert_eq!(q.row(0), NPauli::new(true, [Pauli::Z]));

        assert_eq!(
            single_qubit_clifford(0, 0),
            Err(SimError::CliffordIndexOutOfRange(0)),
        );
        assert_eq!(
            single_qubit_clifford(25, 0),
            Err(SimError::CliffordIndexOutOfRange(25)),
        );
    }

    #[test]
    fn two_qubit_bijection() {
        let tables: HashSet<Vec<NPauli>> =
            (0..N_CLIFFORD)
            .map(|i| conj_table(&two_qubit_clifford(i, 0, 1).unwrap()))
            .collect();
        assert_eq!(tables.len(), N_CLIFFORD);
    }

    #[test]
    fn dual_unitary_bijection() {
        let tables: HashSet<Vec<NPauli>> =
            (0..N_DUAL_UNITARY)
            .map(|i| conj_table(&dual_unitary(i, 0, 1).unwrap()))
            .collect();
        assert_eq!(tables.len(), N_DUAL_UNITARY);
        assert!(
            (0..N_DUAL_UNITARY)
            .all(|i| dual_unitary(i, 0, 1).unwrap().iter().all(|g| !g.is_cx()))
        );
    }

    #[test]
    fn two_qubit_classes() {
        assert!(two_qubit_clifford(0, 0, 1).unwrap().is_empty());
        assert!(two_qubit_clifford(575, 0, 1).unwrap().iter().all(|g| g.is_q1()));
        assert!(two_qubit_clifford(576, 0, 1).unwrap().iter().any(|g| g.is_cx()));
        assert!(two_qubit_clifford(5760, 0, 1).unwrap().iter().any(|g| g.is_iswap()));
        assert!(two_qubit_clifford(10944, 0, 1).unwrap().iter().any(|g| g.is_swap()));
        assert!(dual_unitary(5184, 0, 1).unwrap().iter().any(|g| g.is_swap()));
        assert_eq!(
            two_qubit_clifford(N_CLIFFORD, 0, 1),
            Err(SimError::GateIndexOutOfRange { index: 11520, bound: 11520 }),
        );
        assert_eq!(
            dual_unitary(N_DUAL_UNITARY, 0, 1),
            Err(SimError::GateIndexOutOfRange { index: 5760, bound: 5760 }),
        );
    }

    #[test]
    fn out_of_range_qubits_leave_state() {
        let mut rng = rand::thread_rng();
        let mut q = StabState::new(2);
        let res = apply_random_two_qubit_clifford(&mut q, 0, 2, Some(600), &mut rng);
        assert_eq!(res, Err(SimError::QubitOutOfRange(2, 2)));
        assert_eq!(q, StabState::new(2));
        let idx =
            apply_random_two_qubit_dual_unitary(&mut q, 0, 1, None, &mut rng)
            .unwrap();
        assert!(idx < N_DUAL_UNITARY);
    }
}
