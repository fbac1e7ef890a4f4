// dary_heap crate: 4-ary heap
//
// Same surface as std's BinaryHeap (max-heap), only the arity differs.

use crate::{AdapterError, HeapAdapter, Item};
use std::cmp::Reverse;

#[derive(Debug)]
pub struct QuaternaryHeap {
   heap: dary_heap::QuaternaryHeap<Reverse<Item>>,
}

impl HeapAdapter for QuaternaryHeap {
   const NAME: &'static str = "dary_heap::QuaternaryHeap";

   fn new() -> Self {
      Self { heap: dary_heap::QuaternaryHeap::new() }
   }

   #[inline]
   fn insert(&mut self, item: Item) -> Result<(), AdapterError> {
      self.heap.push(Reverse(item));
      Ok(())
   }

   #[inline]
   fn extract(&mut self) -> Result<Item, AdapterError> {
      self.heap
         .pop()
         .map(|Reverse(item)| item)
         .ok_or(AdapterError::Exhausted { adapter: Self::NAME })
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
