// Adapter registry
//
// An `AdapterKind` is a runtime value standing for one `HeapAdapter` type:
// its name, its init probe and the runners monomorphised for it. The
// registry probes every known kind once and keeps the ones that came up.

use std::fmt;
use std::time::Duration;

use log::info;

use crate::{runner, BenchError, HeapAdapter, Item, Unavailable, Workload};

type InsertFn = fn(&Workload) -> Result<Duration, BenchError>;
type DrainFn = fn(&Workload, u64) -> Result<Duration, BenchError>;
type VerifyFn = fn(&Workload) -> Result<Vec<Item>, BenchError>;

#[derive(Clone, Copy)]
enum Probe {
   Init(fn() -> Result<(), Unavailable>),
   /// Known kind whose crate was not compiled in.
   CompiledOut(&'static str),
}

#[derive(Clone, Copy)]
struct Runners {
   insert: InsertFn,
   drain: DrainFn,
   verify: VerifyFn,
}

#[derive(Clone, Copy)]
pub struct AdapterKind {
   name: &'static str,
   probe: Probe,
   /// `None` for compiled-out kinds.
   runners: Option<Runners>,
}

impl AdapterKind {
   pub fn of<H: HeapAdapter>() -> Self {
      Self {
         name: H::NAME,
         probe: Probe::Init(H::init),
         runners: Some(Runners {
            insert: runner::run_insert::<H>,
            drain: runner::run_drain::<H>,
            verify: runner::verify::<H>,
         }),
      }
   }

   /// A kind that is known but whose cargo feature is disabled. Its probe
   /// fails and so does every runner.
   pub fn compiled_out(name: &'static str, feature: &'static str) -> Self {
      Self { name, probe: Probe::CompiledOut(feature), runners: None }
   }

   pub fn name(&self) -> &'static str {
      self.name
   }

   pub fn init(&self) -> Result<(), Unavailable> {
      match self.probe {
         Probe::Init(init) => init(),
         Probe::CompiledOut(feature) => Err(Unavailable {
            adapter: self.name,
            reason: format!("built without the `{feature}` feature"),
         }),
      }
   }

   fn runners(&self) -> Result<&Runners, BenchError> {
      match &self.runners {
         Some(runners) => Ok(runners),
         None => {
            let why = match self.init() {
               Err(why) => why,
               Ok(()) => Unavailable { adapter: self.name, reason: "no runners compiled in".into() },
            };
            Err(why.into())
         }
      }
   }

   pub fn run_insert(&self, workload: &Workload) -> Result<Duration, BenchError> {
      (self.runners()?.insert)(workload)
   }

   pub fn run_drain(&self, workload: &Workload, loops: u64) -> Result<Duration, BenchError> {
      (self.runners()?.drain)(workload, loops)
   }

   pub fn verify(&self, workload: &Workload) -> Result<Vec<Item>, BenchError> {
      (self.runners()?.verify)(workload)
   }
}

impl fmt::Debug for AdapterKind {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("AdapterKind").field("name", &self.name).finish_non_exhaustive()
   }
}

/// Every heap this crate knows how to drive, in a fixed order.
pub fn known_kinds() -> Vec<AdapterKind> {
   let mut kinds = vec![AdapterKind::of::<crate::StdBinaryHeap>()];

   #[cfg(feature = "priority-queue")]
   kinds.push(AdapterKind::of::<crate::PriorityQueueHeap>());
   #[cfg(not(feature = "priority-queue"))]
   kinds.push(AdapterKind::compiled_out("priority_queue::DoublePriorityQueue", "priority-queue"));

   #[cfg(feature = "keyed-priority-queue")]
   kinds.push(AdapterKind::of::<crate::KeyedHeap>());
   #[cfg(not(feature = "keyed-priority-queue"))]
   kinds.push(AdapterKind::compiled_out(
      "keyed_priority_queue::KeyedPriorityQueue",
      "keyed-priority-queue",
   ));

   #[cfg(feature = "dary-heap")]
   kinds.push(AdapterKind::of::<crate::QuaternaryHeap>());
   #[cfg(not(feature = "dary-heap"))]
   kinds.push(AdapterKind::compiled_out("dary_heap::QuaternaryHeap", "dary-heap"));

   kinds
}

/// Availability map built once at suite start and never changed after.
#[derive(Debug)]
pub struct Registry {
   available: Vec<AdapterKind>,
   skipped: Vec<Unavailable>,
}

impl Registry {
   /// Probe the built-in kinds.
   pub fn builtin() -> Self {
      Self::initialize(known_kinds())
   }

   /// Probe `kinds` in order. Failed probes are logged and dropped.
   pub fn initialize(kinds: impl IntoIterator<Item = AdapterKind>) -> Self {
      let mut available = Vec::new();
      let mut skipped = Vec::new();

      for kind in kinds {
         match kind.init() {
            Ok(()) => available.push(kind),
            Err(why) => {
               info!("skipping {why}");
               skipped.push(why);
            }
         }
      }

      Self { available, skipped }
   }

   pub fn available(&self) -> &[AdapterKind] {
      &self.available
   }

   pub fn skipped(&self) -> &[Unavailable] {
      &self.skipped
   }

   pub fn is_available(&self, name: &str) -> bool {
      self.available.iter().any(|k| k.name == name)
   }
}
