// std BinaryHeap: the reference adapter
//
// `BinaryHeap` is a max-heap; wrapping in `Reverse` turns `pop` into
// extract-min.

use crate::{AdapterError, HeapAdapter, Item};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Default)]
pub struct StdBinaryHeap {
   heap: BinaryHeap<Reverse<Item>>,
}

impl HeapAdapter for StdBinaryHeap {
   const NAME: &'static str = "std::collections::BinaryHeap";

   fn new() -> Self {
      Self { heap: BinaryHeap::new() }
   }

   #[inline]
   fn insert(&mut self, item: Item) -> Result<(), AdapterError> {
      self.heap.push(Reverse(item));
      Ok(())
   }

   #[inline]
   fn extract(&mut self) -> Result<Item, AdapterError> {
      match self.heap.pop() {
         Some(Reverse(item)) => Ok(item),
         None => Err(AdapterError::Exhausted { adapter: Self::NAME }),
      }
   }

   #[inline]
   fn is_empty(&self) -> bool {
      self.heap.is_empty()
   }

   #[inline]
   fn len(&self) -> usize {
      self.heap.len()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn extract_on_empty_is_an_error() {
      let mut h = StdBinaryHeap::new();
      assert_eq!(
         h.extract(),
         Err(AdapterError::Exhausted { adapter: StdBinaryHeap::NAME })
      );
   }

   #[test]
   fn duplicates_are_kept() {
      let mut h = StdBinaryHeap::new();
      for v in [3, 1, 3, 2, 1] {
         h.insert(Item(v)).unwrap();
      }
      assert_eq!(h.len(), 5);
      let drained: Vec<u64> = (0..5).map(|_| h.extract().unwrap().0).collect();
      assert_eq!(drained, vec![1, 1, 2, 3, 3]);
      assert!(h.is_empty());
   }
}
