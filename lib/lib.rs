//! Tools for simulating monitored random Clifford circuits and the
//! measurement-induced phase transitions they display.
//!
//! States are (possibly mixed) stabilizer states held as tableaus of Pauli
//! generators, so all operations are limited to Clifford-group transformations
//! and Z-basis projective measurements. Entanglement is quantified by the
//! integer-valued stabilizer entropy of sub-registers.
//!
//! - [`stab`]: stabilizer states, elementary gates, Z projections
//! - [`clifford`]: index-addressed one- and two-qubit Clifford gates
//! - [`measure`]: single-qubit Z measurements with optional forced outcomes
//! - [`entropy`]: entanglement entropy and mutual information
//! - [`circuit`]: brickwork circuits with measurements, records, and replay

pub mod error;
pub mod gate;
pub mod stab;
pub mod clifford;
pub mod measure;
pub mod entropy;
pub mod circuit;

pub use error::{ SimError, SimResult };
