pub mod config;
pub mod error;
pub mod heaps;
pub mod pin;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suite;
pub mod workload;

pub use config::SuiteConfig;
pub use error::{AdapterError, BenchError, ContractError, Unavailable, WorkloadError};
pub use heaps::StdBinaryHeap;
#[cfg(feature = "priority-queue")]
pub use heaps::PriorityQueueHeap;
#[cfg(feature = "keyed-priority-queue")]
pub use heaps::KeyedHeap;
#[cfg(feature = "dary-heap")]
pub use heaps::QuaternaryHeap;
pub use registry::{AdapterKind, Registry};
pub use report::{Recorder, Reporter, TimingSample};
pub use suite::{BenchmarkCase, Operation, Suite};
pub use workload::{Generator, Order, Workload};

/// A single prioritised value pushed through a heap.
///
/// Ordering is the ordering of the wrapped integer; the smallest item is the
/// one every adapter must hand back first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(pub u64);

/// Common interface for all heaps under comparison.
///
/// One implementation per third-party heap. Nothing outside `heaps/` sees a
/// native heap API.
pub trait HeapAdapter: Sized + 'static {
   /// Stable name used in case names.
   const NAME: &'static str;

   /// Probe whether this heap can be used in the current environment.
   /// Called once by the registry, never per case.
   fn init() -> Result<(), Unavailable> {
      Ok(())
   }

   /// Build an empty heap.
   fn new() -> Self;

   fn insert(&mut self, item: Item) -> Result<(), AdapterError>;

   /// Remove and return the smallest item.
   fn extract(&mut self) -> Result<Item, AdapterError>;

   fn is_empty(&self) -> bool;
   fn len(&self) -> usize;
}
