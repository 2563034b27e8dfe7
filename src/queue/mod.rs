//! Ready-queue data structures.
//!
//! - **`SortedList`**: stable, key-ordered singly linked list (priority scheduling)
//! - **`RingBuffer`**: fixed-capacity circular FIFO (round-robin scheduling)
//!
//! Both report underflow as `None` and never block.

mod ring_buffer;
mod sorted_list;

pub use ring_buffer::RingBuffer;
pub use sorted_list::{Iter, SortedList};
