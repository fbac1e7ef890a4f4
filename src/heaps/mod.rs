mod std_binary;
#[cfg(feature = "priority-queue")]
mod pq;
#[cfg(feature = "keyed-priority-queue")]
mod keyed;
#[cfg(feature = "dary-heap")]
mod dary;

pub use std_binary::StdBinaryHeap;
#[cfg(feature = "priority-queue")]
pub use pq::PriorityQueueHeap;
#[cfg(feature = "keyed-priority-queue")]
pub use keyed::KeyedHeap;
#[cfg(feature = "dary-heap")]
pub use dary::QuaternaryHeap;
