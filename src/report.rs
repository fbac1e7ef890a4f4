// Reporting collaborator interface
//
// The suite only hands out named timing callbacks. Whoever implements
// `Reporter` decides how often to call them and what to do with the
// numbers.

use std::time::Duration;

use crate::BenchError;

/// Sink for named benchmark cases.
pub trait Reporter {
   /// A self-timed case: each call performs one unit of work, worth
   /// `elements` operations, and returns how long it took.
   fn bench_single(
      &mut self,
      name: &str,
      elements: u64,
      run: &mut dyn FnMut() -> Result<Duration, BenchError>,
   ) -> Result<(), BenchError>;

   /// A loop-timed case: `run(loops)` performs `loops` repetitions and
   /// returns their accumulated time. Each repetition is worth
   /// `inner_loops` operations.
   fn bench_loops(
      &mut self,
      name: &str,
      inner_loops: u64,
      run: &mut dyn FnMut(u64) -> Result<Duration, BenchError>,
   ) -> Result<(), BenchError>;
}

/// One measurement as handed to a reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
   pub loops: u64,
   pub inner_loops: u64,
   pub elapsed: Duration,
}

impl TimingSample {
   /// Elapsed time divided by `loops × inner_loops`.
   pub fn per_operation(&self) -> Duration {
      let ops = self.loops.saturating_mul(self.inner_loops);
      if ops == 0 {
         return Duration::ZERO;
      }
      let nanos = self.elapsed.as_nanos() / u128::from(ops);
      Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
   }
}

/*──────────────────────────  fixed-loop recorder  ─────────────────────────*/

/// Reporter that runs every case a fixed number of times and keeps the raw
/// samples. No calibration, no statistics.
#[derive(Debug)]
pub struct Recorder {
   loops: u64,
   samples: Vec<(String, TimingSample)>,
}

impl Recorder {
   pub fn new(loops: u64) -> Self {
      Self { loops, samples: Vec::new() }
   }

   pub fn samples(&self) -> &[(String, TimingSample)] {
      &self.samples
   }

   pub fn into_samples(self) -> Vec<(String, TimingSample)> {
      self.samples
   }
}

impl Reporter for Recorder {
   fn bench_single(
      &mut self,
      name: &str,
      elements: u64,
      run: &mut dyn FnMut() -> Result<Duration, BenchError>,
   ) -> Result<(), BenchError> {
      let mut elapsed = Duration::ZERO;
      for _ in 0..self.loops {
         elapsed += run()?;
      }
      self.samples.push((name.to_owned(), TimingSample { loops: self.loops, inner_loops: elements, elapsed }));
      Ok(())
   }

   fn bench_loops(
      &mut self,
      name: &str,
      inner_loops: u64,
      run: &mut dyn FnMut(u64) -> Result<Duration, BenchError>,
   ) -> Result<(), BenchError> {
      let elapsed = run(self.loops)?;
      self.samples.push((name.to_owned(), TimingSample { loops: self.loops, inner_loops, elapsed }));
      Ok(())
   }
}

/*───────────────────────────────  criterion  ──────────────────────────────*/

#[cfg(feature = "criterion")]
pub use self::criterion_reporter::CriterionReporter;

#[cfg(feature = "criterion")]
mod criterion_reporter {
   use std::time::Duration;

   use criterion::measurement::WallTime;
   use criterion::{BenchmarkGroup, Throughput};

   use super::Reporter;
   use crate::BenchError;

   /// Hands every case to a criterion benchmark group. Criterion owns
   /// calibration of the loop count, statistics and all output.
   pub struct CriterionReporter<'g, 'c> {
      group: &'g mut BenchmarkGroup<'c, WallTime>,
   }

   impl<'g, 'c> CriterionReporter<'g, 'c> {
      pub fn new(group: &'g mut BenchmarkGroup<'c, WallTime>) -> Self {
         Self { group }
      }
   }

   impl Reporter for CriterionReporter<'_, '_> {
      /// # Panics
      ///
      /// Panics if the case fails. Criterion gives its timing callbacks no
      /// way to return an error, and a broken adapter must not produce a
      /// number.
      fn bench_single(
         &mut self,
         name: &str,
         elements: u64,
         run: &mut dyn FnMut() -> Result<Duration, BenchError>,
      ) -> Result<(), BenchError> {
         self.group.throughput(Throughput::Elements(elements));
         self.group.bench_function(name, |b| {
            b.iter_custom(|iters| {
               let mut total = Duration::ZERO;
               for _ in 0..iters {
                  total += run().unwrap_or_else(|e| panic!("{name}: {e}"));
               }
               total
            })
         });
         Ok(())
      }

      /// # Panics
      ///
      /// Same as `bench_single`.
      fn bench_loops(
         &mut self,
         name: &str,
         inner_loops: u64,
         run: &mut dyn FnMut(u64) -> Result<Duration, BenchError>,
      ) -> Result<(), BenchError> {
         self.group.throughput(Throughput::Elements(inner_loops));
         self.group.bench_function(name, |b| {
            b.iter_custom(|iters| run(iters).unwrap_or_else(|e| panic!("{name}: {e}")))
         });
         Ok(())
      }
   }
}
