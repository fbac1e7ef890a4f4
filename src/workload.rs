// Workload generator
//
// Ascending and descending workloads are plain ranges. The random workload
// for a size is shuffled once and cached, so every adapter asked for
// `(size, Random)` receives the very same arrangement.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Item, WorkloadError};

/// The arrangement in which items are presented for insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
   Ascending,
   Descending,
   Random,
}

impl Order {
   pub const ALL: [Order; 3] = [Order::Ascending, Order::Descending, Order::Random];

   pub fn as_str(self) -> &'static str {
      match self {
         Order::Ascending => "ascending",
         Order::Descending => "descending",
         Order::Random => "random",
      }
   }
}

impl fmt::Display for Order {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

impl FromStr for Order {
   type Err = WorkloadError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s.trim().to_ascii_lowercase().as_str() {
         "ascending" | "asc" => Ok(Order::Ascending),
         "descending" | "desc" => Ok(Order::Descending),
         "random" => Ok(Order::Random),
         _ => Err(WorkloadError::UnknownOrder(s.to_owned())),
      }
   }
}

/// A fixed sequence of distinct items in a declared order.
///
/// Cloning shares the underlying items.
#[derive(Debug, Clone)]
pub struct Workload {
   order: Order,
   items: Arc<[Item]>,
}

impl Workload {
   pub fn order(&self) -> Order {
      self.order
   }

   pub fn size(&self) -> usize {
      self.items.len()
   }

   pub fn items(&self) -> &[Item] {
      &self.items
   }

   /// True when both workloads hand out the same allocation, not merely
   /// equal contents.
   pub fn shares_items_with(&self, other: &Workload) -> bool {
      Arc::ptr_eq(&self.items, &other.items)
   }
}

/// Produces workloads and owns the per-size random arrangements.
#[derive(Debug)]
pub struct Generator {
   rng: SmallRng,
   random: HashMap<usize, Arc<[Item]>>,
}

impl Generator {
   /// Generator seeded from the OS; arrangements differ between runs.
   pub fn new() -> Self {
      Self::from_rng(SmallRng::from_os_rng())
   }

   /// Generator with a fixed seed, for reproducible arrangements.
   pub fn with_seed(seed: u64) -> Self {
      Self::from_rng(SmallRng::seed_from_u64(seed))
   }

   fn from_rng(rng: SmallRng) -> Self {
      Self { rng, random: HashMap::new() }
   }

   pub fn generate(&mut self, size: usize, order: Order) -> Result<Workload, WorkloadError> {
      if size == 0 {
         return Err(WorkloadError::ZeroSize);
      }

      let items: Arc<[Item]> = match order {
         Order::Ascending => ascending(size).collect(),
         Order::Descending => ascending(size).rev().collect(),
         Order::Random => {
            let rng = &mut self.rng;
            Arc::clone(self.random.entry(size).or_insert_with(|| {
               let mut items: Vec<Item> = ascending(size).collect();
               items.shuffle(rng);
               items.into()
            }))
         }
      };

      Ok(Workload { order, items })
   }
}

impl Default for Generator {
   fn default() -> Self {
      Self::new()
   }
}

fn ascending(size: usize) -> impl DoubleEndedIterator<Item = Item> {
   (0..size as u64).map(Item)
}

#[cfg(test)]
mod tests {
   use super::*;

   fn values(w: &Workload) -> Vec<u64> {
      w.items().iter().map(|i| i.0).collect()
   }

   #[test]
   fn zero_size_is_rejected() {
      let mut g = Generator::with_seed(1);
      for order in Order::ALL {
         assert_eq!(g.generate(0, order).unwrap_err(), WorkloadError::ZeroSize);
      }
   }

   #[test]
   fn monotonic_orders() {
      let mut g = Generator::with_seed(1);
      assert_eq!(values(&g.generate(5, Order::Ascending).unwrap()), vec![0, 1, 2, 3, 4]);
      assert_eq!(values(&g.generate(5, Order::Descending).unwrap()), vec![4, 3, 2, 1, 0]);
   }

   #[test]
   fn random_is_cached_per_size() {
      let mut g = Generator::with_seed(7);
      let a = g.generate(1_000, Order::Random).unwrap();
      let b = g.generate(1_000, Order::Random).unwrap();
      let other = g.generate(999, Order::Random).unwrap();
      assert!(a.shares_items_with(&b));
      assert!(!a.shares_items_with(&other));
   }

   #[test]
   fn parse_order_names() {
      assert_eq!("Ascending".parse::<Order>().unwrap(), Order::Ascending);
      assert_eq!(" desc ".parse::<Order>().unwrap(), Order::Descending);
      assert_eq!("random".parse::<Order>().unwrap(), Order::Random);
      assert_eq!(
         "sorted".parse::<Order>().unwrap_err(),
         WorkloadError::UnknownOrder("sorted".into())
      );
   }
}
