//! Fixed-capacity circular FIFO.
//!
//! `front == None` marks the empty buffer; the buffer is full when the slot
//! after `rear` wraps onto `front`. Every one of the `capacity` slots is
//! usable.

/// Fixed-capacity circular queue.
///
/// A full buffer rejects `enqueue` and hands the item back, leaving its
/// contents untouched.
///
/// # Example
///
/// ```
/// use sched_sim::queue::RingBuffer;
///
/// let mut ring = RingBuffer::with_capacity(2);
/// assert!(ring.enqueue('a').is_ok());
/// assert!(ring.enqueue('b').is_ok());
/// assert_eq!(ring.enqueue('c'), Err('c'));
///
/// assert_eq!(ring.dequeue(), Some('a'));
/// assert_eq!(ring.dequeue(), Some('b'));
/// assert_eq!(ring.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    front: Option<usize>,
    rear: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer requires a non-zero capacity");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: None,
            rear: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.front == Some((self.rear + 1) % self.capacity())
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        match self.front {
            None => 0,
            Some(front) => (self.rear + self.capacity() - front) % self.capacity() + 1,
        }
    }

    /// Appends at the rear. Returns the item back if the buffer is full.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.rear = match self.front {
            None => {
                self.front = Some(0);
                0
            }
            Some(_) => (self.rear + 1) % self.capacity(),
        };
        self.slots[self.rear] = Some(item);
        Ok(())
    }

    /// Removes the front item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let front = self.front?;
        let item = self.slots[front].take();
        self.front = if front == self.rear {
            None
        } else {
            Some((front + 1) % self.capacity())
        };
        item
    }

    /// Borrows the front item.
    pub fn peek(&self) -> Option<&T> {
        self.front.and_then(|front| self.slots[front].as_ref())
    }
}
