//! Fixed-capacity circular buffer backing the window and tail adapters.

/// Circular store that overwrites the oldest entry once full.
///
/// `push` hands back the evicted element, which is what the
/// `all_but_last` split uses to stream the leading part of a sequence
/// while the buffer holds on to the trailing part.
pub struct RingBuffer<T> {
    slots: Vec<T>,
    cap: usize,
    next: usize,
    overflow: bool,
}

impl<T> RingBuffer<T> {
    pub fn new(cap: usize) -> Self {
        RingBuffer {
            slots: Vec::with_capacity(cap),
            cap,
            next: 0,
            overflow: false,
        }
    }

    /// Append an item, returning the evicted oldest element once the
    /// buffer has wrapped. A zero-capacity buffer evicts immediately.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.cap == 0 {
            self.overflow = true;
            return Some(item);
        }
        if self.slots.len() < self.cap {
            self.slots.push(item);
            None
        } else {
            let evicted = std::mem::replace(&mut self.slots[self.next], item);
            self.next = (self.next + 1) % self.cap;
            self.overflow = true;
            Some(evicted)
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.cap
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the buffer has wrapped at least once.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Drain the contents, oldest first, leaving the buffer empty.
    pub fn take_ordered(&mut self) -> Vec<T> {
        let mut slots = std::mem::take(&mut self.slots);
        slots.rotate_left(self.next);
        self.next = 0;
        self.overflow = false;
        slots
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Snapshot of the contents in arrival order.
    pub fn window(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.slots.len());
        out.extend_from_slice(&self.slots[self.next..]);
        out.extend_from_slice(&self.slots[..self.next]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::RingBuffer;

    #[test]
    fn fills_then_evicts_oldest() {
        let mut ring = RingBuffer::new(3);
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert!(ring.is_full());
        assert!(!ring.overflowed());
        assert_eq!(ring.push(4), Some(1));
        assert!(ring.overflowed());
        assert_eq!(ring.window(), vec![2, 3, 4]);
    }

    #[test]
    fn take_ordered_preserves_arrival_order() {
        let mut ring = RingBuffer::new(2);
        for i in 0..5 {
            ring.push(i);
        }
        assert_eq!(ring.take_ordered(), vec![3, 4]);
        assert!(ring.is_empty());
    }

    #[test]
    fn zero_capacity_evicts_immediately() {
        let mut ring = RingBuffer::new(0);
        assert_eq!(ring.push(7), Some(7));
        assert_eq!(ring.window(), Vec::<i32>::new());
    }
}
