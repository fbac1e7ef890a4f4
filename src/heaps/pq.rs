// priority-queue crate: DoublePriorityQueue
//
// The crate is keyed: pushing an existing key only changes its priority.
// Items are therefore keyed by insertion sequence number so duplicate
// values never collapse into one entry.

use crate::{AdapterError, HeapAdapter, Item};
use priority_queue::DoublePriorityQueue;

pub struct PriorityQueueHeap {
   queue: DoublePriorityQueue<u64, Item>,
   next_seq: u64,
}

impl HeapAdapter for PriorityQueueHeap {
   const NAME: &'static str = "priority_queue::DoublePriorityQueue";

   fn new() -> Self {
      Self { queue: DoublePriorityQueue::new(), next_seq: 0 }
   }

   #[inline]
   fn insert(&mut self, item: Item) -> Result<(), AdapterError> {
      let seq = self.next_seq;
      self.next_seq += 1;
      match self.queue.push(seq, item) {
         None => Ok(()),
         Some(_) => Err(AdapterError::Native {
            adapter: Self::NAME,
            reason: format!("sequence key {seq} already present"),
         }),
      }
   }

   #[inline]
   fn extract(&mut self) -> Result<Item, AdapterError> {
      self.queue
         .pop_min()
         .map(|(_, item)| item)
         .ok_or(AdapterError::Exhausted { adapter: Self::NAME })
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
