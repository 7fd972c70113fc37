//! (Possibly mixed) *n*-qubit stabilizer states in the tableau representation.
//!
//! In the tableau representation, states are identified not by complex
//! amplitudes but by the set of *n*-qubit Pauli operators that stabilize them.
//! Each generator is stored as a row of a binary matrix, with the (*i*, *j*)-th
//! X- and Z-bits encoding the *j*-th Pauli of the *i*-th generator:
//!
//! | X-bit | Z-bit | Pauli |
//! | :---: | :---: | :---: |
//! | 0     | 0     | *I*   |
//! | 1     | 0     | *X*   |
//! | 1     | 1     | *Y*   |
//! | 0     | 1     | *Z*   |
//!
//! along with a phase for each row given as a power of the complex unit *i*.
//! Only real phases (±1) ever appear for a valid state.
//!
//! Unlike a pure-state tableau, the number of generators (the *rank*) may be
//! anywhere between 0 and *n*. A rank of *n* is a pure state, and a rank of 0
//! is the maximally mixed state. No destabilizers are kept; the sign of a
//! deterministic measurement is instead recovered by row-reducing the
//! generators (see [arXiv:quant-ph/0406196][tableau] for the pure-state
//! algorithm this is modeled after).
//!
//! Rows at or beyond the rank are always kept zeroed.
//!
//! # Example
//! ```
//! use monitored_clifford::{ gate::{ G1, G2 }, stab::StabState };
//!
//! // initialize a new state to ∣0000⟩
//! let mut stab = StabState::new(4);
//!
//! // generate a Bell state on qubits 0, 1
//! stab.apply_gate(G1::H.on(0)).unwrap();
//! stab.apply_gate(G2::CX.on(0, 1)).unwrap();
//!
//! // `#` formatter suppresses identities
//! println!("{:#}", stab.as_group());
//! // +XX..
//! // +ZZ..
//! // +..Z.
//! // +...Z
//! ```
//!
//! [tableau]: https://arxiv.org/abs/quant-ph/0406196

use std::{ fmt, str::FromStr };
use nalgebra as na;
use ndarray as nd;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use crate::{
    error::{ SimError, SimResult },
    gate::{ Gate, G1, G2, Pauli },
};

const PW: [u32; 32] = [ // PW[i] = 2^i
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768,
    65536, 131072, 262144, 524288, 1048576, 2097152, 4194304, 8388608, 16777216,
    33554432, 67108864, 134217728, 268435456, 536870912, 1073741824, 2147483648
];

/// The result of a single-qubit Z-basis measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// ∣0⟩, eigenvalue +1
    Zero = 0,
    /// ∣1⟩, eigenvalue -1
    One = 1,
}

impl Outcome {
    /// Returns `true` if `self` is `Zero`.
    pub fn is_zero(self) -> bool { matches!(self, Self::Zero) }

    /// Returns `true` if `self` is `One`.
    pub fn is_one(self) -> bool { matches!(self, Self::One) }

    /// Return the Z eigenvalue, +1 or -1.
    pub fn sign(self) -> i8 {
        match self {
            Self::Zero => 1,
            Self::One => -1,
        }
    }

    /// Convert from a Z eigenvalue; anything non-negative is taken as +1.
    pub fn from_sign(s: i8) -> Self {
        if s < 0 { Self::One } else { Self::Zero }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self { if b { Self::One } else { Self::Zero } }
}

impl From<Outcome> for bool {
    fn from(o: Outcome) -> Self { o.is_one() }
}

impl From<Outcome> for i8 {
    fn from(o: Outcome) -> Self { o.sign() }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "+1"),
            Self::One => write!(f, "-1"),
        }
    }
}

/// The result of projecting a state onto a Z eigenspace, generated by
/// [`StabState::project_z`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// The state already stabilizes ±Z; the outcome is fixed.
    Determined(Outcome),
    /// The outcome is undetermined. The generator at this row index has been
    /// set to +Z and its sign must be chosen with
    /// [`StabState::set_outcome`].
    Undetermined(usize),
}

/// A single *n*-qubit Pauli operator with a ±1 phase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NPauli {
    pub neg: bool,
    pub ops: Vec<Pauli>,
}

impl fmt::Display for NPauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.neg { "-" } else { "+" })?;
        self.ops.iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl NPauli {
    /// Create from a sign and a Pauli string.
    pub fn new<I>(neg: bool, ops: I) -> Self
    where I: IntoIterator<Item = Pauli>
    {
        Self { neg, ops: ops.into_iter().collect() }
    }

    /// Create from a sign and symplectic bit vectors, which must have equal
    /// lengths.
    pub fn from_xz(neg: bool, x: &[bool], z: &[bool]) -> SimResult<Self> {
        if x.len() != z.len() {
            return Err(SimError::RowLength {
                row: 0, expected: x.len(), got: z.len() });
        }
        let ops = x.iter().zip(z).map(|(xj, zj)| Pauli::from_xz(*xj, *zj));
        Ok(Self::new(neg, ops))
    }

    /// Create an operator acting as `p` on qubit `k` of `n` and trivially
    /// everywhere else.
    pub fn single(n: usize, k: usize, p: Pauli, neg: bool) -> Self {
        let mut ops = vec![Pauli::I; n];
        if let Some(op) = ops.get_mut(k) { *op = p; }
        Self { neg, ops }
    }

    /// Return the number of qubits.
    pub fn len(&self) -> usize { self.ops.len() }

    /// Return `true` if `self` acts on zero qubits.
    pub fn is_empty(&self) -> bool { self.ops.is_empty() }
}

/// The generators of a state's stabilizer group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StabGroup {
    pub stab: Vec<NPauli>,
}

impl fmt::Display for StabGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.stab.len();
        for (k, g) in self.stab.iter().enumerate() {
            fmt::Display::fmt(g, f)?;
            if k + 1 < m { writeln!(f)?; }
        }
        Ok(())
    }
}

/// Tag for one of a handful of simple initial states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// ∣0...0⟩
    Zero,
    /// ∣+...+⟩
    Plus,
    /// The maximally mixed state.
    Mixed,
    /// Bell pairs (∣00⟩ + ∣11⟩) / √2 on qubits (0, 1), (2, 3), ...
    Bell,
}

impl FromStr for StateKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "z" => Ok(Self::Zero),
            "plus" | "x" => Ok(Self::Plus),
            "mixed" | "maximally-mixed" => Ok(Self::Mixed),
            "bell" => Ok(Self::Bell),
            _ => Err(SimError::UnknownStateKind(s.to_string())),
        }
    }
}

/// A (possibly mixed) state of a finite register of qubits, identified by its
/// stabilizer group.
#[derive(Clone, Debug)]
pub struct StabState {
    pub(crate) n: usize,
    pub(crate) rank: usize,
    // `x` and `z` are bit arrays of size n × n; for space efficiency, the
    // columns are packed into u32s
    pub(crate) x: nd::Array2<u32>, // Pauli-X bits; size n × (floor(n / 32) + 1)
    pub(crate) z: nd::Array2<u32>, // Pauli-Z bits; size n × (floor(n / 32) + 1)
    pub(crate) r: nd::Array1<u8>, // Phases (0 for +1, 2 for -1); size n
    pub(crate) over32: usize, // = floor(n / 32) + 1
}

impl PartialEq for StabState {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self.rank == other.rank
            && (0..self.rank).all(|i| {
                self.r[i] == other.r[i]
                    && (0..self.over32).all(|j| {
                        self.x[[i, j]] == other.x[[i, j]]
                            && self.z[[i, j]] == other.z[[i, j]]
                    })
            })
    }
}

impl Eq for StabState { }

impl fmt::Display for StabState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_group(), f)
    }
}

impl StabState {
    /// Create a new pure stabilizer state of size `n` initialized to ∣0...0⟩.
    pub fn new(n: usize) -> Self {
        let mut q = Self::mixed(n);
        (0..n).for_each(|i| { q.row_set_z(i, i); });
        q.rank = n;
        q
    }

    /// Create a new maximally mixed state of size `n` (no generators).
    pub fn mixed(n: usize) -> Self {
        let over32: usize = (n >> 5) + 1;
        let x: nd::Array2<u32> = nd::Array2::zeros((n, over32));
        let z: nd::Array2<u32> = nd::Array2::zeros((n, over32));
        let r: nd::Array1<u8> = nd::Array1::zeros(n);
        Self { n, rank: 0, x, z, r, over32 }
    }

    /// Create a state of size `n` stabilized by a set of generators.
    ///
    /// Fails if any generator has the wrong length, if there are more than `n`
    /// of them, or if they are not mutually commuting and independent. An
    /// empty set gives the maximally mixed state.
    pub fn from_rows<I>(n: usize, rows: I) -> SimResult<Self>
    where I: IntoIterator<Item = NPauli>
    {
        let rows: Vec<NPauli> = rows.into_iter().collect();
        if rows.len() > n {
            return Err(SimError::TooManyRows { n, got: rows.len() });
        }
        if let Some((i, row)) =
            rows.iter().enumerate().find(|(_, row)| row.len() != n)
        {
            return Err(
                SimError::RowLength { row: i, expected: n, got: row.len() });
        }
        let mut q = Self::mixed(n);
        for (i, row) in rows.iter().enumerate() {
            for (k, p) in row.ops.iter().enumerate() { q.set_pauli(i, k, *p); }
            q.r[i] = if row.neg { 2 } else { 0 };
        }
        q.rank = rows.len();
        for a in 0..q.rank {
            for b in a + 1..q.rank {
                if !q.rows_commute(a, b) {
                    return Err(SimError::AnticommutingRows(a, b));
                }
            }
        }
        let mut check = q.clone();
        check.rref();
        if (0..check.rank).any(|i| check.row_is_identity(i)) {
            return Err(SimError::DependentRows);
        }
        Ok(q)
    }

    /// Create one of a few simple states of size `n`.
    pub fn init(n: usize, kind: StateKind) -> SimResult<Self> {
        match kind {
            StateKind::Zero => Ok(Self::new(n)),
            StateKind::Plus => {
                let mut q = Self::new(n);
                (0..n).for_each(|k| { q.apply_g1(G1::H, k); });
                Ok(q)
            },
            StateKind::Mixed => Ok(Self::mixed(n)),
            StateKind::Bell => {
                if n % 2 == 1 { return Err(SimError::BellOddQubits(n)); }
                let mut q = Self::new(n);
                (0..n).step_by(2).for_each(|a| {
                    q.apply_g1(G1::H, a).apply_cx(a, a + 1);
                });
                Ok(q)
            },
        }
    }

    /// Like [`Self::init`], but parsing the kind from a tag.
    pub fn init_str(n: usize, kind: &str) -> SimResult<Self> {
        Self::init(n, kind.parse()?)
    }

    /// Return the number of qubits.
    pub fn num_qubits(&self) -> usize { self.n }

    /// Return the number of independent generators.
    pub fn rank(&self) -> usize { self.rank }

    /// Return `true` if `self` is a pure state.
    pub fn is_pure(&self) -> bool { self.rank == self.n }

    /// Return `true` if `self` has no generators.
    pub fn is_maximally_mixed(&self) -> bool { self.rank == 0 }

    pub(crate) fn check_rank(&self) -> SimResult<()> {
        if self.rank > self.n || self.x.nrows() < self.rank {
            Err(SimError::InvalidRank { rank: self.rank, n: self.n })
        } else {
            Ok(())
        }
    }

    fn xbit(&self, i: usize, k: usize) -> bool {
        self.x[[i, k >> 5]] & PW[k & 31] != 0
    }

    fn zbit(&self, i: usize, k: usize) -> bool {
        self.z[[i, k >> 5]] & PW[k & 31] != 0
    }

    // bit in the c-th column of the full (X | Z) matrix
    fn col_bit(&self, i: usize, c: usize) -> bool {
        if c < self.n { self.xbit(i, c) } else { self.zbit(i, c - self.n) }
    }

    /// Return the Pauli operator of the `i`-th generator on the `k`-th qubit.
    ///
    /// Rows at or beyond the rank read as identities.
    ///
    /// *Panics* if `i` or `k` is not less than the number of qubits.
    pub fn pauli(&self, i: usize, k: usize) -> Pauli {
        Pauli::from_xz(self.xbit(i, k), self.zbit(i, k))
    }

    /// Return `true` if the `i`-th generator carries a -1 phase.
    pub fn is_negative(&self, i: usize) -> bool { self.r[i] == 2 }

    /// Return the `i`-th generator as an [`NPauli`].
    pub fn row(&self, i: usize) -> NPauli {
        NPauli::new(self.is_negative(i), (0..self.n).map(|k| self.pauli(i, k)))
    }

    fn set_pauli(&mut self, i: usize, k: usize, p: Pauli) {
        let k5: usize = k >> 5;
        let pw: u32 = PW[k & 31];
        let (x, z) = p.to_xz();
        if x { self.x[[i, k5]] |= pw; } else { self.x[[i, k5]] &= !pw; }
        if z { self.z[[i, k5]] |= pw; } else { self.z[[i, k5]] &= !pw; }
    }

    pub(crate) fn apply_g1(&mut self, g: G1, k: usize) -> &mut Self {
        if g == G1::I { return self; }
        for i in 0..self.rank {
            let (p, flip) = g.conj(self.pauli(i, k));
            self.set_pauli(i, k, p);
            if flip { self.r[i] = (self.r[i] + 2) % 4; }
        }
        self
    }

    pub(crate) fn apply_cx(&mut self, a: usize, b: usize) -> &mut Self {
        for i in 0..self.rank {
            let (xa, za) = self.pauli(i, a).to_xz();
            let (xb, zb) = self.pauli(i, b).to_xz();
            if xa && zb && !(xb ^ za) { self.r[i] = (self.r[i] + 2) % 4; }
            self.set_pauli(i, a, Pauli::from_xz(xa, za ^ zb));
            self.set_pauli(i, b, Pauli::from_xz(xb ^ xa, zb));
        }
        self
    }

    pub(crate) fn apply_cz(&mut self, a: usize, b: usize) -> &mut Self {
        self.apply_g1(G1::H, b).apply_cx(a, b).apply_g1(G1::H, b)
    }

    pub(crate) fn apply_swap(&mut self, a: usize, b: usize) -> &mut Self {
        for i in 0..self.rank {
            let pa = self.pauli(i, a);
            let pb = self.pauli(i, b);
            self.set_pauli(i, a, pb);
            self.set_pauli(i, b, pa);
        }
        self
    }

    // iSWAP = (S ⊗ S) SWAP CZ
    pub(crate) fn apply_iswap(&mut self, a: usize, b: usize) -> &mut Self {
        self.apply_cz(a, b)
            .apply_swap(a, b)
            .apply_g1(G1::S, a)
            .apply_g1(G1::S, b)
    }

    pub(crate) fn apply_g2(&mut self, g: G2, a: usize, b: usize) -> &mut Self {
        match g {
            G2::CX => self.apply_cx(a, b),
            G2::CZ => self.apply_cz(a, b),
            G2::ISwap => self.apply_iswap(a, b),
            G2::Swap => self.apply_swap(a, b),
        }
    }

    /// Perform the action of a gate.
    ///
    /// Fails if any qubit index is out of bounds, leaving `self` untouched.
    pub fn apply_gate(&mut self, gate: Gate) -> SimResult<&mut Self> {
        gate.check(self.n)?;
        match gate {
            Gate::Q1(g, k) => Ok(self.apply_g1(g, k)),
            Gate::Q2(g, a, b) => Ok(self.apply_g2(g, a, b)),
        }
    }

    /// Perform a series of gates.
    ///
    /// All gates are checked before any are applied.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> SimResult<&mut Self>
    where I: IntoIterator<Item = &'a Gate>
    {
        let gates: Vec<Gate> = gates.into_iter().copied().collect();
        gates.iter().try_for_each(|g| g.check(self.n))?;
        for g in gates {
            match g {
                Gate::Q1(g, k) => { self.apply_g1(g, k); },
                Gate::Q2(g, a, b) => { self.apply_g2(g, a, b); },
            }
        }
        Ok(self)
    }

    fn row_swap(&mut self, a: usize, b: usize) -> &mut Self {
        if a == b { return self; }
        for j in 0..self.over32 {
            self.x.swap([a, j], [b, j]);
            self.z.swap([a, j], [b, j]);
        }
        self.r.swap(a, b);
        self
    }

    // set row i equal to +Z on qubit k
    fn row_set_z(&mut self, k: usize, i: usize) -> &mut Self {
        self.x.row_mut(i).fill(0);
        self.z.row_mut(i).fill(0);
        self.r[i] = 0;
        self.z[[i, k >> 5]] = PW[k & 31];
        self
    }

    fn row_is_identity(&self, i: usize) -> bool {
        self.x.row(i).iter().all(|w| *w == 0)
            && self.z.row(i).iter().all(|w| *w == 0)
    }

    // return true if row i is exactly ±Z on qubit k
    fn row_is_z(&self, i: usize, k: usize) -> bool {
        let k5: usize = k >> 5;
        let pw: u32 = PW[k & 31];
        self.x.row(i).iter().all(|w| *w == 0)
            && self.z.row(i).iter().enumerate()
                .all(|(j, w)| if j == k5 { *w == pw } else { *w == 0 })
    }

    fn rows_commute(&self, a: usize, b: usize) -> bool {
        let mut acc: u32 = 0;
        for j in 0..self.over32 {
            acc += (
                (self.x[[a, j]] & self.z[[b, j]])
                ^ (self.z[[a, j]] & self.x[[b, j]])
            ).count_ones();
        }
        acc % 2 == 0
    }

    // return the phase (0, ..., 3) when row b is left-multiplied by row a
    fn row_mul_phase(&self, a: usize, b: usize) -> u8 {
        use Pauli::*;
        let mut e: i32 = 0;
        for k in 0..self.n {
            e += match (self.pauli(a, k), self.pauli(b, k)) {
                (X, Y) | (Y, Z) | (Z, X) => 1,
                (X, Z) | (Y, X) | (Z, Y) => -1,
                _ => 0,
            };
        }
        e = (e + i32::from(self.r[b]) + i32::from(self.r[a])).rem_euclid(4);
        e as u8
    }

    // left-multiply row b by row a
    fn row_mul(&mut self, a: usize, b: usize) -> &mut Self {
        self.r[b] = self.row_mul_phase(a, b);
        for j in 0..self.over32 {
            let xa = self.x[[a, j]];
            let za = self.z[[a, j]];
            self.x[[b, j]] ^= xa;
            self.z[[b, j]] ^= za;
        }
        self
    }

    // bring the generators into reduced row echelon form over the columns of
    // (X | Z); this changes the generating set but not the group
    fn rref(&mut self) {
        let mut i: usize = 0;
        for c in 0..2 * self.n {
            if i >= self.rank { break; }
            let Some(p) = (i..self.rank).find(|q| self.col_bit(*q, c))
                else { continue; };
            self.row_swap(p, i);
            for q in 0..self.rank {
                if q != i && self.col_bit(q, c) { self.row_mul(i, q); }
            }
            i += 1;
        }
    }

    /// Project onto an eigenspace of Z on qubit `k`.
    ///
    /// If some generator anticommutes with Z<sub>*k*</sub>, every other
    /// anticommuting generator is multiplied by it and it is then replaced by
    /// Z<sub>*k*</sub>. If all generators commute but Z<sub>*k*</sub> is not in
    /// the group (only possible for mixed states), Z<sub>*k*</sub> is appended
    /// as a new generator, increasing the rank by one. In both cases the sign
    /// of the new generator is left pending, and its row index is returned.
    /// Otherwise the outcome is read off from the group.
    pub fn project_z(&mut self, k: usize) -> SimResult<Projection> {
        if k >= self.n { return Err(SimError::QubitOutOfRange(k, self.n)); }
        self.check_rank()?;
        if let Some(p) = (0..self.rank).find(|i| self.xbit(*i, k)) {
            for i in p + 1..self.rank {
                if self.xbit(i, k) { self.row_mul(p, i); }
            }
            self.row_set_z(k, p);
            return Ok(Projection::Undetermined(p));
        }
        self.rref();
        if let Some(i) = (0..self.rank).find(|i| self.row_is_z(*i, k)) {
            return Ok(Projection::Determined(self.is_negative(i).into()));
        }
        let p = self.rank;
        if p >= self.n {
            return Err(SimError::InvalidRank { rank: p + 1, n: self.n });
        }
        self.row_set_z(k, p);
        self.rank += 1;
        Ok(Projection::Undetermined(p))
    }

    /// Fix the sign of the `i`-th generator so that it stabilizes the
    /// eigenspace of `outcome`.
    pub fn set_outcome(&mut self, i: usize, outcome: Outcome) -> &mut Self {
        self.r[i] = if outcome.is_one() { 2 } else { 0 };
        self
    }

    /// Convert `self` to a more human-readable generator list.
    pub fn as_group(&self) -> StabGroup {
        StabGroup { stab: (0..self.rank).map(|i| self.row(i)).collect() }
    }

    /// Construct a density matrix representation of `self`.
    ///
    /// Qubit 0 is the most significant in the computational basis ordering.
    /// The matrix has size 2<sup>*n*</sup>, so this is only useful for small
    /// registers.
    pub fn as_matrix(&self) -> na::DMatrix<C64> {
        let size = 2_usize.pow(self.n as u32);
        let id: na::DMatrix<C64> = na::DMatrix::identity(size, size);
        let mut acc: na::DMatrix<C64> = id.clone();
        let mut phase: C64;
        let mut row_acc: na::DMatrix<C64>;
        for i in 0..self.rank {
            phase =
                match self.r[i] % 4 {
                    0 => C64::from(1.0),
                    1 => C64::i(),
                    2 => C64::from(-1.0),
                    3 => -C64::i(),
                    _ => unreachable!(),
                };
            row_acc = na::DMatrix::from_element(1, 1, phase);
            for k in 0..self.n {
                row_acc =
                    match self.pauli(i, k) {
                        Pauli::I => row_acc.kronecker(Lazy::force(&PAULI_I)),
                        Pauli::X => row_acc.kronecker(Lazy::force(&PAULI_X)),
                        Pauli::Y => row_acc.kronecker(Lazy::force(&PAULI_Y)),
                        Pauli::Z => row_acc.kronecker(Lazy::force(&PAULI_Z)),
                    };
            }
            acc *= &id + &row_acc;
        }
        let tr = acc.trace();
        acc /= tr;
        acc
    }
}

/// A single-qubit identity matrix.
pub static PAULI_I: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::identity(2, 2));

/// A single-qubit Pauli *X* matrix.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut x = na::DMatrix::zeros(2, 2);
        x[(0, 1)] = C64::from(1.0);
        x[(1, 0)] = C64::from(1.0);
        x
    });

/// A single-qubit Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut y = na::DMatrix::zeros(2, 2);
        y[(0, 1)] = -C64::i();
        y[(1, 0)] =  C64::i();
        y
    });

/// A single-qubit Pauli *Z* matrix.
pub static PAULI_Z: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut z = na::DMatrix::zeros(2, 2);
        z[(0, 0)] = C64::from( 1.0);
        z[(1, 1)] = C64::from(-1.0);
        z
    });
