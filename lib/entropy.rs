//! Entanglement entropy of stabilizer states via symplectic row reduction.
//!
//! For a stabilizer state, the von Neumann entropy of a subsystem (in units of
//! log 2) is an integer fixed by the rank of the generators after restriction
//! to that subsystem. The restriction is held as a binary matrix whose first
//! half of columns are X-bits and second half Z-bits, one pair per qubit of the
//! subsystem, and is reduced column-by-column with a Pauli-aware elimination
//! that can consume up to two pivot rows per column.

use ndarray as nd;
use rustc_hash::FxHashSet as HashSet;
use crate::{
    error::{ SimError, SimResult },
    gate::Pauli,
    stab::StabState,
};

// the set of distinct non-identity Paulis found in one column, along with the
// first row carrying each of the first two
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ColNub {
    I,
    One(Pauli, usize),
    Two(Pauli, usize, Pauli, usize),
}

// which pivot row(s) must be added to clear a row's entry in the column
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Which { None, Left, Right, Both }

impl ColNub {
    fn push(&mut self, p: Pauli, k: usize) {
        match *self {
            Self::I => { *self = Self::One(p, k); },
            Self::One(p0, k0) if p0 != p => { *self = Self::Two(p0, k0, p, k); },
            _ => { },
        }
    }

    fn matches(&self, p: Pauli) -> Which {
        match *self {
            _ if p == Pauli::I => Which::None,
            Self::I => Which::None,
            Self::One(p0, _) => if p == p0 { Which::Left } else { Which::None },
            Self::Two(p0, _, p1, _) => {
                if p == p0 {
                    Which::Left
                } else if p == p1 {
                    Which::Right
                } else {
                    Which::Both
                }
            },
        }
    }
}

fn col_pauli(mat: &nd::Array2<bool>, i: usize, k: usize, nq: usize) -> Pauli {
    Pauli::from_xz(mat[[i, k]], mat[[i, k + nq]])
}

fn col_nub(mat: &nd::Array2<bool>, k: usize, skip: usize, nq: usize) -> ColNub {
    let mut nub = ColNub::I;
    for i in skip..mat.nrows() {
        let p = col_pauli(mat, i, k, nq);
        if p.is_nontrivial() { nub.push(p, i); }
        if matches!(nub, ColNub::Two(..)) { break; }
    }
    nub
}

fn row_swap(mat: &mut nd::Array2<bool>, a: usize, b: usize) {
    if a == b { return; }
    for j in 0..mat.ncols() { mat.swap([a, j], [b, j]); }
}

// add row a into row b, mod 2
fn row_add(mat: &mut nd::Array2<bool>, a: usize, b: usize) {
    for j in 0..mat.ncols() {
        let aj = mat[[a, j]];
        mat[[b, j]] ^= aj;
    }
}

/// Reduce a binary symplectic matrix to row echelon form, returning the number
/// of nonzero rows.
///
/// `mat` must have `2 * nq` columns, the first `nq` holding X-bits and the last
/// `nq` holding Z-bits, so that each row is a Pauli string on `nq` qubits.
/// Columns are processed one qubit at a time. If only one kind of Pauli occurs
/// among the remaining rows, the first such row becomes the pivot and clears
/// the others of that kind. If two or more kinds occur, the first rows of the
/// first two kinds become a pair of pivots; rows carrying the third kind are
/// cleared by adding both.
pub fn row_echelon(mat: &mut nd::Array2<bool>, nq: usize) -> usize {
    let nrows = mat.nrows();
    let mut col: usize = 0;
    let mut row: usize = 0;
    while col < nq && row < nrows {
        let nub = col_nub(mat, col, row, nq);
        match nub {
            ColNub::I => { },
            ColNub::One(_, k) => {
                row_swap(mat, k, row);
                for i in row + 1..nrows {
                    if nub.matches(col_pauli(mat, i, col, nq)) == Which::Left {
                        row_add(mat, row, i);
                    }
                }
                row += 1;
            },
            ColNub::Two(_, k0, _, k1) => {
                row_swap(mat, k0, row);
                row_swap(mat, k1, row + 1);
                for i in row + 2..nrows {
                    match nub.matches(col_pauli(mat, i, col, nq)) {
                        Which::None => { },
                        Which::Left => { row_add(mat, row, i); },
                        Which::Right => { row_add(mat, row + 1, i); },
                        Which::Both => {
                            row_add(mat, row, i);
                            row_add(mat, row + 1, i);
                        },
                    }
                }
                row += 2;
            },
        }
        col += 1;
    }
    mat.rows().into_iter()
        .filter(|r| r.iter().any(|b| *b))
        .count()
}

// X/Z bits of the generators restricted to `part`
fn restricted_generators(state: &StabState, part: &[usize])
    -> nd::Array2<bool>
{
    let na = part.len();
    let mut mat: nd::Array2<bool> = nd::Array2::from_elem((state.rank(), 2 * na), false);
    for i in 0..state.rank() {
        for (j, k) in part.iter().enumerate() {
            let (x, z) = state.pauli(i, *k).to_xz();
            mat[[i, j]] = x;
            mat[[i, j + na]] = z;
        }
    }
    mat
}

/// Compute the entanglement entropy of a subsystem (in units of log 2).
///
/// Duplicate qubit indices are ignored. For the maximally mixed state, every
/// qubit of the subsystem is fully uncertain and the result is the subsystem's
/// size. Otherwise the smaller of the subsystem and its complement is used,
/// and the result is `rank - r` for a mixed state or `r - |A|` for a pure one,
/// where `r` is the rank of the generators restricted to that part *A*.
pub fn entanglement_entropy<I>(state: &StabState, part: I) -> SimResult<usize>
where I: IntoIterator<Item = usize>
{
    let n = state.num_qubits();
    let part: HashSet<usize> = part.into_iter().collect();
    if let Some(k) = part.iter().find(|k| **k >= n) {
        return Err(SimError::QubitOutOfRange(*k, n));
    }
    let rank = state.rank();
    if rank > n { return Err(SimError::InvalidRank { rank, n }); }
    if rank == 0 { return Ok(part.len()); }
    let mut sub: Vec<usize> =
        if 2 * part.len() <= n {
            part.into_iter().collect()
        } else {
            (0..n).filter(|k| !part.contains(k)).collect()
        };
    sub.sort_unstable();
    let mut mat = restricted_generators(state, &sub);
    let rnk = row_echelon(&mut mat, sub.len());
    if rank < n {
        Ok(rank.saturating_sub(rnk))
    } else {
        Ok(rnk.saturating_sub(sub.len()))
    }
}

/// Compute the mutual information *S*(*A*) + *S*(*B*) - *S*(*AB*) between two
/// subsystems.
pub fn mutual_information<A, B>(state: &StabState, a: A, b: B)
    -> SimResult<isize>
where
    A: IntoIterator<Item = usize>,
    B: IntoIterator<Item = usize>,
{
    let a: HashSet<usize> = a.into_iter().collect();
    let b: HashSet<usize> = b.into_iter().collect();
    let s_a = entanglement_entropy(state, a.iter().copied())?;
    let s_b = entanglement_entropy(state, b.iter().copied())?;
    let s_ab = entanglement_entropy(state, a.union(&b).copied())?;
    Ok(s_a as isize + s_b as isize - s_ab as isize)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::{ rngs::StdRng, Rng, SeedableRng };
    use crate::{ gate::{ Pauli, G1, G2 }, stab::NPauli };

    fn bell_in_product(n: usize, i: usize) -> StabState {
        let mut q = StabState::new(n);
        q.apply_gate(G1::H.on(i)).unwrap();
        q.apply_gate(G2::CX.on(i, i + 1)).unwrap();
        q
    }

    fn random_pure(n: usize, depth: usize, seed: u64) -> StabState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut q = StabState::new(n);
        for _ in 0..depth {
            let k = rng.gen_range(0..n);
            let g = match rng.gen_range(0..3) {
                0 => G1::H.on(k),
                1 => G1::S.on(k),
                _ => {
                    let j = (k + rng.gen_range(1..n)) % n;
                    G2::CX.on(k, j)
                },
            };
            q.apply_gate(g).unwrap();
        }
        q
    }

    #[test]
    fn row_echelon_cases() {
        // columns: X0 X1 | Z0 Z1
        let mut mat = nd::array![
            [true,  true,  false, false], // XX
            [false, false, true,  true ], // ZZ
            [true,  true,  true,  true ], // YY
        ];
        assert_eq!(row_echelon(&mut mat, 2), 2);

        let mut mat = nd::array![
            [false, false, true,  false], // ZI
            [false, false, true,  false], // ZI
            [false, true,  false, false], // IX
        ];
        assert_eq!(row_echelon(&mut mat, 2), 2);

        let mut mat: nd::Array2<bool> = nd::Array2::from_elem((3, 4), false);
        assert_eq!(row_echelon(&mut mat, 2), 0);
    }

    #[test]
    fn product_state_has_zero_entropy() {
        let mut q = StabState::new(6);
        q.apply_gate(G1::X.on(2)).unwrap();
        q.apply_gate(G1::H.on(4)).unwrap();
        for mask in 0_usize..64 {
            let part = (0..6).filter(|k| mask & (1 << k) != 0);
            assert_eq!(entanglement_entropy(&q, part), Ok(0));
        }
    }

    #[test]
    fn mixed_state_entropy_is_size() {
        let q = StabState::mixed(5);
        for mask in 0_usize..32 {
            let part: Vec<usize> =
                (0..5).filter(|k| mask & (1 << k) != 0).collect();
            assert_eq!(entanglement_entropy(&q, part.clone()), Ok(part.len()));
        }
    }

    #[test]
    fn partially_mixed_entropy() {
        // Z0 fixed, qubits 1..4 maximally mixed
        let q = StabState::from_rows(4, [NPauli::single(4, 0, Pauli::Z, false)])
            .unwrap();
        assert_eq!(q.rank(), 1);
        assert_eq!(entanglement_entropy(&q, [0]), Ok(0));
        assert_eq!(entanglement_entropy(&q, [1]), Ok(1));
        assert_eq!(entanglement_entropy(&q, [0, 1]), Ok(0));
        // complement {3}
        assert_eq!(entanglement_entropy(&q, [0, 1, 2]), Ok(1));
    }

    #[test]
    fn bell_pair_entropy() {
        for i in 0..5 {
            let q = bell_in_product(6, i);
            assert_eq!(entanglement_entropy(&q, [i]), Ok(1));
            assert_eq!(entanglement_entropy(&q, [i + 1]), Ok(1));
            assert_eq!(entanglement_entropy(&q, [i, i + 1]), Ok(0));
            assert_eq!(mutual_information(&q, [i], [i + 1]), Ok(2));
        }
        let q = bell_in_product(4, 1);
        assert_eq!(entanglement_entropy(&q, [1, 1, 1]), Ok(1));
        assert_eq!(
            entanglement_entropy(&q, [4]), Err(SimError::QubitOutOfRange(4, 4)));
    }

    proptest! {
        #[test]
        fn complement_symmetry(
            n in 2_usize..10,
            depth in 0_usize..60,
            seed: u64,
            mask: u16,
        ) {
            let q = random_pure(n, depth, seed);
            let part: Vec<usize> =
                (0..n).filter(|k| mask & (1 << k) != 0).collect();
            let comp: Vec<usize> =
                (0..n).filter(|k| mask & (1 << k) == 0).collect();
            let s = entanglement_entropy(&q, part.clone()).unwrap();
            prop_assert_eq!(s, entanglement_entropy(&q, comp).unwrap());
            prop_assert!(s <= part.len().min(n - part.len()));
        }
    }
}
