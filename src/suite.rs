// Suite driver
//
// Builds the case matrix {adapter × size × order} for insertion and
// {adapter × size} for removal, verifies every adapter against every
// workload, then submits the cases one at a time.

use std::fmt;

use log::{debug, info, warn};

use crate::config::format_size;
use crate::report::Reporter;
use crate::{pin, AdapterKind, BenchError, Generator, Order, Registry, SuiteConfig, Workload};

/// Removal always drains a heap filled from the cached random arrangement of
/// its size, the same one the random insertion cases use. Drains are
/// reported per extracted item (`inner_loops` = size).
pub const REMOVAL_ORDER: Order = Order::Random;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
   Insert,
   Remove,
}

impl fmt::Display for Operation {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(match self {
         Operation::Insert => "insert",
         Operation::Remove => "remove",
      })
   }
}

/// One (adapter, workload, operation) combination.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkCase<'s> {
   pub adapter: &'s AdapterKind,
   pub workload: &'s Workload,
   pub operation: Operation,
}

impl BenchmarkCase<'_> {
   /// `"<adapter> <operation>, <order>, N=<size>"`
   pub fn name(&self) -> String {
      format!(
         "{} {}, {}, N={}",
         self.adapter.name(),
         self.operation,
         self.workload.order(),
         format_size(self.workload.size())
      )
   }

   /// Hand the case to `reporter`.
   pub fn submit(&self, reporter: &mut dyn Reporter) -> Result<(), BenchError> {
      let name = self.name();
      let (adapter, workload) = (self.adapter, self.workload);
      debug!("submitting {name}");

      match self.operation {
         Operation::Insert => reporter.bench_single(&name, workload.size() as u64, &mut || {
            adapter.run_insert(workload)
         }),
         Operation::Remove => reporter.bench_loops(&name, workload.size() as u64, &mut |loops| {
            adapter.run_drain(workload, loops)
         }),
      }
   }
}

/// Owns the registry and every workload for the lifetime of a run.
#[derive(Debug)]
pub struct Suite {
   config: SuiteConfig,
   registry: Registry,
   /// `(size, order)` in config order; removal workloads are among them.
   workloads: Vec<Workload>,
}

impl Suite {
   /// Generate every workload up front. Bad sizes fail here, before
   /// anything is measured.
   pub fn new(config: SuiteConfig, registry: Registry) -> Result<Self, BenchError> {
      Self::with_generator(config, registry, &mut Generator::new())
   }

   pub fn with_generator(
      config: SuiteConfig,
      registry: Registry,
      generator: &mut Generator,
   ) -> Result<Self, BenchError> {
      let mut config = config;
      dedup_in_order(&mut config.sizes);
      dedup_in_order(&mut config.orders);

      let mut workloads = Vec::new();
      for &size in &config.sizes {
         let mut orders = config.orders.clone();
         if !orders.contains(&REMOVAL_ORDER) {
            orders.push(REMOVAL_ORDER);
         }
         for order in orders {
            workloads.push(generator.generate(size, order)?);
         }
      }

      info!(
         "suite: {} adapters ({} skipped), sizes {:?}, orders {:?}",
         registry.available().len(),
         registry.skipped().len(),
         config.sizes,
         config.orders
      );

      Ok(Self { config, registry, workloads })
   }

   pub fn registry(&self) -> &Registry {
      &self.registry
   }

   fn workload(&self, size: usize, order: Order) -> Option<&Workload> {
      self.workloads.iter().find(|w| w.size() == size && w.order() == order)
   }

   /// Every case in submission order: all insertion cases, then all
   /// removal cases, each grouped by adapter, then size, then order.
   pub fn cases(&self) -> Vec<BenchmarkCase<'_>> {
      let mut cases = Vec::new();

      for adapter in self.registry.available() {
         for &size in &self.config.sizes {
            for &order in &self.config.orders {
               if let Some(workload) = self.workload(size, order) {
                  cases.push(BenchmarkCase { adapter, workload, operation: Operation::Insert });
               }
            }
         }
      }

      for adapter in self.registry.available() {
         for &size in &self.config.sizes {
            if let Some(workload) = self.workload(size, REMOVAL_ORDER) {
               cases.push(BenchmarkCase { adapter, workload, operation: Operation::Remove });
            }
         }
      }

      cases
   }

   /// Untimed contract check of every available adapter on every workload.
   pub fn verify(&self) -> Result<(), BenchError> {
      for adapter in self.registry.available() {
         for workload in &self.workloads {
            adapter.verify(workload)?;
         }
         debug!("{} passed verification", adapter.name());
      }
      Ok(())
   }

   /// Verify, then submit every case sequentially. The first failure ends
   /// the run.
   pub fn run(&self, reporter: &mut dyn Reporter) -> Result<(), BenchError> {
      if let Some(cpu) = self.config.pin_cpu {
         match pin::pin_current_thread(cpu) {
            Ok(()) => info!("pinned to CPU {cpu}"),
            Err(e) => warn!("could not pin to CPU {cpu}: {e}"),
         }
      }

      self.verify()?;

      let cases = self.cases();
      info!("running {} cases", cases.len());
      for case in &cases {
         case.submit(reporter)?;
      }
      Ok(())
   }
}

// A repeated size or order would submit two cases under one name.
fn dedup_in_order<T: PartialEq + Copy + fmt::Debug>(list: &mut Vec<T>) {
   let mut seen: Vec<T> = Vec::with_capacity(list.len());
   list.retain(|v| {
      if seen.contains(v) {
         warn!("ignoring repeated {v:?}");
         false
      } else {
         seen.push(*v);
         true
      }
   });
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::{Recorder, StdBinaryHeap};

   fn small_suite(sizes: Vec<usize>, orders: Vec<Order>) -> Suite {
      let config = SuiteConfig { sizes, orders, pin_cpu: None };
      let registry = Registry::initialize([AdapterKind::of::<StdBinaryHeap>()]);
      Suite::with_generator(config, registry, &mut Generator::with_seed(11)).unwrap()
   }

   #[test]
   fn names_follow_the_pattern() {
      let suite = small_suite(vec![1_000], vec![Order::Ascending]);
      let names: Vec<String> = suite.cases().iter().map(BenchmarkCase::name).collect();
      assert_eq!(
         names,
         vec![
            "std::collections::BinaryHeap insert, ascending, N=1K",
            "std::collections::BinaryHeap remove, random, N=1K",
         ]
      );
   }

   #[test]
   fn matrix_shape() {
      let suite = small_suite(vec![10, 20], Order::ALL.to_vec());
      let cases = suite.cases();
      let inserts = cases.iter().filter(|c| c.operation == Operation::Insert).count();
      let removes = cases.iter().filter(|c| c.operation == Operation::Remove).count();
      assert_eq!(inserts, 2 * 3);
      assert_eq!(removes, 2);
   }

   #[test]
   fn removal_reuses_the_random_insertion_workload() {
      let suite = small_suite(vec![64], Order::ALL.to_vec());
      let cases = suite.cases();
      let random_insert = cases
         .iter()
         .find(|c| c.operation == Operation::Insert && c.workload.order() == Order::Random)
         .unwrap();
      let remove = cases.iter().find(|c| c.operation == Operation::Remove).unwrap();
      assert!(remove.workload.shares_items_with(random_insert.workload));
   }

   #[test]
   fn repeated_sizes_and_orders_give_unique_names() {
      let suite = small_suite(vec![1_000, 1_000, 20], vec![Order::Ascending, Order::Ascending]);
      let mut rec = Recorder::new(1);
      suite.run(&mut rec).unwrap();
      let mut names: Vec<&str> = rec.samples().iter().map(|(n, _)| n.as_str()).collect();
      assert_eq!(names.len(), 4);
      names.sort_unstable();
      names.dedup();
      assert_eq!(names.len(), 4);
   }

   #[test]
   fn zero_size_fails_at_construction() {
      let config = SuiteConfig { sizes: vec![10, 0], ..SuiteConfig::default() };
      let err = Suite::new(config, Registry::builtin()).unwrap_err();
      assert!(matches!(err, BenchError::Workload(crate::WorkloadError::ZeroSize)));
   }

   #[test]
   fn run_records_every_case() {
      let suite = small_suite(vec![50], vec![Order::Descending]);
      let mut rec = Recorder::new(2);
      suite.run(&mut rec).unwrap();
      let samples = rec.samples();
      assert_eq!(samples.len(), 2);
      assert_eq!(samples[0].1.inner_loops, 50);
      assert_eq!(samples[1].1.inner_loops, 50);
      assert!(samples.iter().all(|(_, s)| s.loops == 2));
   }
}
