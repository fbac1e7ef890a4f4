// Error types for the harness.
//
// Only `Unavailable` is ever recovered from (the registry drops the adapter).
// Everything else aborts the suite: a number measured around a broken heap
// is worse than no number.

use thiserror::Error;

use crate::Item;

/// Bad arguments to the workload generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
   #[error("workload size must be positive")]
   ZeroSize,
   #[error("unknown order pattern `{0}` (expected ascending, descending or random)")]
   UnknownOrder(String),
}

/// Failure reported by an adapter shim while it is in use.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
   #[error("{adapter}: extract called on an empty heap")]
   Exhausted { adapter: &'static str },
   #[error("{adapter}: native heap rejected the operation: {reason}")]
   Native { adapter: &'static str, reason: String },
}

/// The heap contract was observed to be broken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
   #[error("{adapter}: extracted {got:?} after {prev:?}, order is not non-decreasing")]
   OutOfOrder { adapter: &'static str, prev: Item, got: Item },
   #[error("{adapter}: size() reported {reported}, expected {expected}")]
   SizeMismatch { adapter: &'static str, reported: usize, expected: usize },
   #[error("{adapter}: drained {drained} items, expected {expected}")]
   CountMismatch { adapter: &'static str, drained: usize, expected: usize },
}

/// An adapter could not be initialised in this environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{adapter} unavailable: {reason}")]
pub struct Unavailable {
   pub adapter: &'static str,
   pub reason: String,
}

/// A configuration value could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{var}: cannot parse `{value}` as a size")]
   BadSize { var: &'static str, value: String },
   #[error("{var}: cannot parse `{value}` as a CPU index")]
   BadCpu { var: &'static str, value: String },
   #[error("{var}: {source}")]
   BadOrder { var: &'static str, source: WorkloadError },
   #[error("{var} is set but lists nothing")]
   Empty { var: &'static str },
   #[error("{var}: `{value}` repeats an earlier entry")]
   Duplicate { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum BenchError {
   #[error(transparent)]
   Workload(#[from] WorkloadError),
   #[error(transparent)]
   Adapter(#[from] AdapterError),
   #[error(transparent)]
   Contract(#[from] ContractError),
   #[error(transparent)]
   Config(#[from] ConfigError),
   #[error(transparent)]
   Unavailable(#[from] Unavailable),
}
