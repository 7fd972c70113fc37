//! Error types shared across the crate.
//!
//! Every variant except [`SimError::InvalidRank`] describes a bad argument and
//! is returned before any state is touched. `InvalidRank` signals a tableau
//! that has been corrupted somewhere upstream.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Returned when a measurement probability lies outside [0, 1].
    #[error("error in circuit config: measurement probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    /// Returned when a per-qubit probability vector does not have one entry
    /// per qubit.
    #[error("error in circuit config: expected {expected} per-qubit probabilities, got {got}")]
    ProbabilityLength { expected: usize, got: usize },

    /// Returned when periodic boundaries are requested for an odd number of
    /// qubits, where the wraparound pair would overlap another pair in the
    /// same layer.
    #[error("error in circuit config: periodic boundaries require an even number of qubits, got {0}")]
    OddPeriodic(usize),

    /// Returned when a circuit is requested on fewer than two qubits.
    #[error("error in circuit config: need at least 2 qubits, got {0}")]
    TooFewQubits(usize),

    /// Returned when a replay record does not contain exactly two layers per
    /// time step.
    #[error("error in replay: expected {expected} {what} layers, got {got}")]
    ReplayLength { what: &'static str, expected: usize, got: usize },

    /// Returned when a single replay layer has the wrong number of entries.
    #[error("error in replay: {what} layer {layer} has {got} entries, expected {expected}")]
    ReplayLayerLength {
        what: &'static str,
        layer: usize,
        expected: usize,
        got: usize,
    },

    /// Returned when a replay record asks for a measurement in the final
    /// sublayer, which is never measured.
    #[error("error in replay: measurement of qubit {qubit} requested in the final layer")]
    ReplayFinalMeasurement { qubit: usize },

    /// Returned when a two-qubit gate index falls outside its group.
    #[error("error in gate synthesis: gate index {index} is not in 0..{bound}")]
    GateIndexOutOfRange { index: usize, bound: usize },

    /// Returned when a single-qubit Clifford index is not in 1..=24.
    #[error("error in gate synthesis: single-qubit Clifford index {0} is not in 1..=24")]
    CliffordIndexOutOfRange(usize),

    /// Returned when parsing an unrecognized initial-state tag.
    #[error("error in state creation: unknown state kind {0:?}")]
    UnknownStateKind(String),

    /// Returned when a Bell-pair state is requested for an odd register.
    #[error("error in state creation: Bell pairs need an even number of qubits, got {0}")]
    BellOddQubits(usize),

    /// Returned when a qubit index is out of bounds.
    #[error("error in operation: invalid qubit index {0} for a register of {1} qubits")]
    QubitOutOfRange(usize, usize),

    /// Returned when a two-qubit operation names the same qubit twice.
    #[error("error in operation: two-qubit gate acts twice on qubit {0}")]
    RepeatedQubit(usize),

    /// Returned when a generator row does not have one entry per qubit.
    #[error("error in state creation: generator {row} has length {got}, expected {expected}")]
    RowLength { row: usize, expected: usize, got: usize },

    /// Returned when more generators than qubits are supplied.
    #[error("error in state creation: {got} generators supplied for {n} qubits")]
    TooManyRows { n: usize, got: usize },

    /// Returned when two supplied generators do not commute.
    #[error("error in state creation: generators {0} and {1} anticommute")]
    AnticommutingRows(usize, usize),

    /// Returned when the supplied generators are not independent.
    #[error("error in state creation: generators are not independent")]
    DependentRows,

    /// Returned when a tableau reports a rank outside 0..=n.
    #[error("invalid state: rank {rank} for {n} qubits")]
    InvalidRank { rank: usize, n: usize },
}

pub type SimResult<T> = Result<T, SimError>;
