// keyed_priority_queue crate: KeyedPriorityQueue
//
// Max-heap keyed by a hashable key; same sequence-number trick as the
// priority-queue shim, with `Reverse` for extract-min.

use crate::{AdapterError, HeapAdapter, Item};
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

pub struct KeyedHeap {
   queue: KeyedPriorityQueue<u64, Reverse<Item>>,
   next_seq: u64,
}

impl HeapAdapter for KeyedHeap {
   const NAME: &'static str = "keyed_priority_queue::KeyedPriorityQueue";

   fn new() -> Self {
      Self { queue: KeyedPriorityQueue::new(), next_seq: 0 }
   }

   #[inline]
   fn insert(&mut self, item: Item) -> Result<(), AdapterError> {
      let seq = self.next_seq;
      self.next_seq += 1;
      if self.queue.push(seq, Reverse(item)).is_some() {
         return Err(AdapterError::Native {
            adapter: Self::NAME,
            reason: format!("sequence key {seq} already present"),
         });
      }
      Ok(())
   }

   #[inline]
   fn extract(&mut self) -> Result<Item, AdapterError> {
      match self.queue.pop() {
         Some((_, Reverse(item))) => Ok(item),
         None => Err(AdapterError::Exhausted { adapter: Self::NAME }),
      }
   }

   #[inline]
   fn is_empty(&self) -> bool {
      self.queue.is_empty()
   }

   #[inline]
   fn len(&self) -> usize {
      self.queue.len()
   }
}
