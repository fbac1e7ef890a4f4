// Case runners
//
// One parametric runner per operation, monomorphised per adapter so the
// timed loops never go through a vtable.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{BenchError, ContractError, HeapAdapter, Item, Workload};

/*──────────────────────────────  insertion  ───────────────────────────────*/

/// Time constructing a fresh heap and inserting every item of `workload` in
/// sequence order. Construction is charged to insertion. The populated heap
/// is dropped after the clock stops.
pub fn run_insert<H: HeapAdapter>(workload: &Workload) -> Result<Duration, BenchError> {
   let start = Instant::now();
   let mut heap = H::new();
   for &item in workload.items() {
      heap.insert(item)?;
   }
   let elapsed = start.elapsed();

   black_box(&heap);
   Ok(elapsed)
}

/*───────────────────────────  timing isolation  ───────────────────────────*/

/// Drain `loops` freshly populated heaps, timing only the drains.
///
/// Each repetition builds and fills its own heap with the clock stopped,
/// then runs `extract` until `is_empty()` with the clock running. Returns
/// the accumulated drain time; dividing by `loops` (and the caller's inner
/// multiplier) is the caller's business.
pub fn run_drain<H: HeapAdapter>(workload: &Workload, loops: u64) -> Result<Duration, BenchError> {
   let expected = workload.size();
   let mut total = Duration::ZERO;

   for _ in 0..loops {
      let mut heap = populate::<H>(workload)?;

      let mut drained = 0usize;
      let start = Instant::now();
      while !heap.is_empty() {
         black_box(heap.extract()?);
         drained += 1;
      }
      total += start.elapsed();

      if drained != expected {
         return Err(ContractError::CountMismatch { adapter: H::NAME, drained, expected }.into());
      }
   }

   Ok(total)
}

fn populate<H: HeapAdapter>(workload: &Workload) -> Result<H, BenchError> {
   let mut heap = H::new();
   for &item in workload.items() {
      heap.insert(item)?;
   }
   Ok(heap)
}

/*─────────────────────────────  verification  ─────────────────────────────*/

/// Untimed check of the heap contract over one workload.
///
/// Verifies `len()` after every insert and extract, that extraction is
/// non-decreasing, that exactly `size` items come back and that the heap
/// ends empty. Returns the extraction sequence.
pub fn verify<H: HeapAdapter>(workload: &Workload) -> Result<Vec<Item>, BenchError> {
   let expected = workload.size();
   let mut heap = H::new();
   check_len::<H>(&heap, 0)?;

   for (n, &item) in workload.items().iter().enumerate() {
      heap.insert(item)?;
      check_len::<H>(&heap, n + 1)?;
   }

   let mut out: Vec<Item> = Vec::with_capacity(expected);
   while !heap.is_empty() {
      let got = heap.extract()?;
      if let Some(&prev) = out.last() {
         if got < prev {
            return Err(ContractError::OutOfOrder { adapter: H::NAME, prev, got }.into());
         }
      }
      out.push(got);
      check_len::<H>(&heap, expected.saturating_sub(out.len()))?;
   }

   if out.len() != expected {
      return Err(ContractError::CountMismatch {
         adapter: H::NAME,
         drained: out.len(),
         expected,
      }
      .into());
   }
   Ok(out)
}

fn check_len<H: HeapAdapter>(heap: &H, expected: usize) -> Result<(), ContractError> {
   let reported = heap.len();
   if reported != expected {
      return Err(ContractError::SizeMismatch { adapter: H::NAME, reported, expected });
   }
   Ok(())
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::{Generator, Order, StdBinaryHeap};

   #[test]
   fn drain_with_zero_loops_is_free() {
      let w = Generator::with_seed(3).generate(100, Order::Random).unwrap();
      assert_eq!(run_drain::<StdBinaryHeap>(&w, 0).unwrap(), Duration::ZERO);
   }

   #[test]
   fn verify_reference_heap_on_every_order() {
      let mut g = Generator::with_seed(3);
      for order in Order::ALL {
         let w = g.generate(257, order).unwrap();
         let out = verify::<StdBinaryHeap>(&w).unwrap();
         assert_eq!(out.len(), 257);
         assert!(out.windows(2).all(|p| p[0] <= p[1]));
      }
   }
}
