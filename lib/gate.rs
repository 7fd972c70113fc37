//! Elementary gates belonging to the one- and two-qubit Clifford groups.
//!
//! See also: <https://en.wikipedia.org/wiki/Clifford_gates>

use std::fmt;
use crate::error::{ SimError, SimResult };

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Pauli {
    /// Construct from a symplectic (X-bit, Z-bit) pair.
    pub fn from_xz(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Self::I,
            (true,  false) => Self::X,
            (true,  true ) => Self::Y,
            (false, true ) => Self::Z,
        }
    }

    /// Convert to a symplectic (X-bit, Z-bit) pair.
    pub fn to_xz(self) -> (bool, bool) {
        match self {
            Self::I => (false, false),
            Self::X => (true,  false),
            Self::Y => (true,  true ),
            Self::Z => (false, true ),
        }
    }

    /// Return `true` if `self` is not the identity.
    pub fn is_nontrivial(self) -> bool { !matches!(self, Self::I) }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::I) => true,
            (Self::I, _) => true,
            (a, b) => a == b,
        }
    }
}

/// Identifier for a single-qubit Clifford generator, without a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum G1 {
    /// Identity
    I,
    /// π rotation about X
    X,
    /// π rotation about Y
    Y,
    /// π rotation about Z
    Z,
    /// Hadamard
    H,
    /// π/2 rotation about Z
    S,
    /// -π/2 rotation about Z
    SInv,
    /// π/2 rotation about X
    SqrtX,
    /// -π/2 rotation about X
    SqrtXInv,
    /// π/2 rotation about Y
    SqrtY,
    /// -π/2 rotation about Y
    SqrtYInv,
}

impl G1 {
    /// Conjugate a single-qubit Pauli by `self`, returning the image *U P
    /// U*<sup>†</sup> along with `true` if the image picks up a minus sign.
    pub fn conj(self, p: Pauli) -> (Pauli, bool) {
        use Pauli::*;
        match (self, p) {
            (_, I) => (I, false),
            (Self::I, p) => (p, false),

            (Self::X, X) => (X, false),
            (Self::X, Y) => (Y, true),
            (Self::X, Z) => (Z, true),

            (Self::Y, X) => (X, true),
            (Self::Y, Y) => (Y, false),
            (Self::Y, Z) => (Z, true),

            (Self::Z, X) => (X, true),
            (Self::Z, Y) => (Y, true),
            (Self::Z, Z) => (Z, false),

            (Self::H, X) => (Z, false),
            (Self::H, Y) => (Y, true),
            (Self::H, Z) => (X, false),

            (Self::S, X) => (Y, false),
            (Self::S, Y) => (X, true),
            (Self::S, Z) => (Z, false),

            (Self::SInv, X) => (Y, true),
            (Self::SInv, Y) => (X, false),
            (Self::SInv, Z) => (Z, false),

            (Self::SqrtX, X) => (X, false),
            (Self::SqrtX, Y) => (Z, false),
            (Self::SqrtX, Z) => (Y, true),

            (Self::SqrtXInv, X) => (X, false),
            (Self::SqrtXInv, Y) => (Z, true),
            (Self::SqrtXInv, Z) => (Y, false),

            (Self::SqrtY, X) => (Z, true),
            (Self::SqrtY, Y) => (Y, false),
            (Self::SqrtY, Z) => (X, false),

            (Self::SqrtYInv, X) => (Z, false),
            (Self::SqrtYInv, Y) => (Y, false),
            (Self::SqrtYInv, Z) => (X, true),
        }
    }

    /// Return the inverse generator.
    pub fn inv(self) -> Self {
        match self {
            Self::S => Self::SInv,
            Self::SInv => Self::S,
            Self::SqrtX => Self::SqrtXInv,
            Self::SqrtXInv => Self::SqrtX,
            Self::SqrtY => Self::SqrtYInv,
            Self::SqrtYInv => Self::SqrtY,
            g => g,
        }
    }

    /// Attach a target qubit.
    pub fn on(self, k: usize) -> Gate { Gate::Q1(self, k) }
}

/// Identifier for a two-qubit Clifford generator, without targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum G2 {
    /// Z-controlled π rotation about X; the first qubit is the control.
    CX,
    /// Z-controlled π rotation about Z.
    CZ,
    /// Swap with an *i* phase on the exchanged ∣01⟩, ∣10⟩ components.
    ISwap,
    /// Swap
    Swap,
}

impl G2 {
    /// Attach target qubits.
    pub fn on(self, a: usize, b: usize) -> Gate { Gate::Q2(self, a, b) }
}

/// Description of a single gate acting on particular qubits of a register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// A single-qubit gate.
    Q1(G1, usize),
    /// A two-qubit gate.
    Q2(G2, usize, usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Q1(g, k) => write!(f, "{:?}({})", g, k),
            Self::Q2(g, a, b) => write!(f, "{:?}({}, {})", g, a, b),
        }
    }
}

impl Gate {
    /// Return `true` if `self` is a single-qubit gate.
    pub fn is_q1(&self) -> bool { matches!(self, Self::Q1(..)) }

    /// Return `true` if `self` is a two-qubit gate.
    pub fn is_q2(&self) -> bool { matches!(self, Self::Q2(..)) }

    /// Return `true` if `self` is a CNOT.
    pub fn is_cx(&self) -> bool { matches!(self, Self::Q2(G2::CX, ..)) }

    /// Return `true` if `self` is an iSWAP.
    pub fn is_iswap(&self) -> bool { matches!(self, Self::Q2(G2::ISwap, ..)) }

    /// Return `true` if `self` is a SWAP.
    pub fn is_swap(&self) -> bool { matches!(self, Self::Q2(G2::Swap, ..)) }

    /// Verify that all qubit indices are less than `n` and that two-qubit
    /// operands are distinct.
    pub fn check(&self, n: usize) -> SimResult<()> {
        match *self {
            Self::Q1(_, k) if k >= n => Err(SimError::QubitOutOfRange(k, n)),
            Self::Q2(_, a, _) if a >= n => Err(SimError::QubitOutOfRange(a, n)),
            Self::Q2(_, _, b) if b >= n => Err(SimError::QubitOutOfRange(b, n)),
            Self::Q2(_, a, b) if a == b => Err(SimError::RepeatedQubit(a)),
            _ => Ok(()),
        }
    }
}
