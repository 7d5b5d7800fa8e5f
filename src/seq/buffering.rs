//! Buffering adapters: multi-consumer fan-out, sliding windows, tail
//! replay, leading/trailing splits, and cycling.
//!
//! These are the adapters whose contracts permit pulling more than one
//! upstream element per downstream `advance`, or materializing part of the
//! upstream. All shared state is `Rc<RefCell<…>>`, so every handle is
//! `!Send` and the single-threaded access discipline is enforced by the
//! compiler rather than by documentation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{trace, warn};

use crate::ring::RingBuffer;

use super::core::Sequence;

// ================================
// Tee
// ================================

struct TeeShared<S: Sequence> {
    source: S,
    queues: Vec<VecDeque<S::Item>>,
}

/// One consumer lane of a teed sequence.
///
/// Each lane owns a FIFO queue. Advancing a lane pops locally when its
/// queue is non-empty; otherwise one upstream element is pulled and a
/// clone is pushed to every lane's queue. The upstream therefore advances
/// at most once per distinct logical position no matter how unevenly the
/// lanes are driven, and memory held is proportional to the lag between
/// the fastest and slowest lane.
pub struct TeeHandle<S: Sequence> {
    shared: Rc<RefCell<TeeShared<S>>>,
    lane: usize,
    item: Option<S::Item>,
}

impl<S> Sequence for TeeHandle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        let mut guard = self.shared.borrow_mut();
        let shared = &mut *guard;
        if shared.queues[self.lane].is_empty() {
            if !shared.source.advance() {
                return false;
            }
            let value = shared.source.current();
            trace!("tee: fanning one upstream element out to {} lanes", shared.queues.len());
            for queue in &mut shared.queues {
                queue.push_back(value.clone());
            }
        }
        self.item = shared.queues[self.lane].pop_front();
        self.item.is_some()
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

fn tee_lanes<S: Sequence>(source: S, n: usize) -> Vec<TeeHandle<S>> {
    let shared = Rc::new(RefCell::new(TeeShared {
        source,
        queues: (0..n).map(|_| VecDeque::new()).collect(),
    }));
    (0..n)
        .map(|lane| TeeHandle { shared: Rc::clone(&shared), lane, item: None })
        .collect()
}

// ================================
// Windowed
// ================================

/// Sliding windows of the last `size` elements, one window per upstream
/// element once primed. Each yielded window is a fresh `Vec`.
pub struct Windowed<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) ring: RingBuffer<S::Item>,
    pub(crate) size: usize,
    pub(crate) primed: bool,
}

impl<S> Sequence for Windowed<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.size == 0 {
            return false;
        }
        if !self.primed {
            self.primed = true;
            for _ in 0..self.size {
                if !self.seq.advance() {
                    return false;
                }
                self.ring.push(self.seq.current());
            }
            return true;
        }
        if !self.seq.advance() {
            return false;
        }
        self.ring.push(self.seq.current());
        true
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.ring.window()
    }
}

/// Like [`Windowed`], but a too-short (or empty) upstream yields exactly
/// one window padded with trailing fillers.
pub struct WindowedWithFiller<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) ring: RingBuffer<S::Item>,
    pub(crate) size: usize,
    pub(crate) filler: S::Item,
    pub(crate) primed: bool,
    pub(crate) done: bool,
}

impl<S> Sequence for WindowedWithFiller<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.size == 0 || self.done {
            return false;
        }
        if !self.primed {
            self.primed = true;
            let mut got = 0;
            while got < self.size {
                if !self.seq.advance() {
                    break;
                }
                self.ring.push(self.seq.current());
                got += 1;
            }
            if got < self.size {
                for _ in got..self.size {
                    self.ring.push(self.filler.clone());
                }
                self.done = true;
            }
            return true;
        }
        if !self.seq.advance() {
            self.done = true;
            return false;
        }
        self.ring.push(self.seq.current());
        true
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.ring.window()
    }
}

// ================================
// Tail
// ================================

/// Drains a finite upstream into an n-slot ring buffer, then replays the
/// last ≤ n elements in original order.
pub struct Tail<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) size: usize,
    pub(crate) replay: Option<std::vec::IntoIter<S::Item>>,
    pub(crate) item: Option<S::Item>,
}

impl<S: Sequence> Sequence for Tail<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.replay.is_none() {
            let mut ring = RingBuffer::new(self.size);
            while self.seq.advance() {
                ring.push(self.seq.current());
            }
            self.replay = Some(ring.take_ordered().into_iter());
        }
        self.item = self.replay.as_mut().and_then(|replay| replay.next());
        self.item.is_some()
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

// ================================
// AllButLast
// ================================

struct SplitShared<S: Sequence> {
    source: S,
    ring: RingBuffer<S::Item>,
    keep: usize,
    primed: bool,
    source_done: bool,
}

impl<S: Sequence> SplitShared<S> {
    /// Fill the ring with the first `keep` elements. False when the
    /// source ran out before the ring filled.
    fn prime(&mut self) -> bool {
        if self.primed {
            return !self.source_done;
        }
        self.primed = true;
        for _ in 0..self.keep {
            if !self.source.advance() {
                self.source_done = true;
                return false;
            }
            self.ring.push(self.source.current());
        }
        true
    }
}

/// Every element except the final `keep`: each upstream pull displaces the
/// oldest held element out of the ring.
pub struct Leading<S: Sequence> {
    shared: Rc<RefCell<SplitShared<S>>>,
    item: Option<S::Item>,
}

impl<S: Sequence> Sequence for Leading<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        let mut guard = self.shared.borrow_mut();
        let shared = &mut *guard;
        if shared.source_done || !shared.prime() {
            return false;
        }
        if !shared.source.advance() {
            shared.source_done = true;
            return false;
        }
        let value = shared.source.current();
        self.item = shared.ring.push(value);
        self.item.is_some()
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

/// The final `keep` elements, replayed after the leading part finishes.
/// Advancing this first drives any unconsumed remainder of the leading
/// part to exhaustion (the leading part is meant to be consumed first).
pub struct Trailing<S: Sequence> {
    shared: Rc<RefCell<SplitShared<S>>>,
    replay: Option<std::vec::IntoIter<S::Item>>,
    item: Option<S::Item>,
}

impl<S: Sequence> Sequence for Trailing<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.replay.is_none() {
            let mut guard = self.shared.borrow_mut();
            let shared = &mut *guard;
            if shared.prime() {
                while shared.source.advance() {
                    shared.ring.push(shared.source.current());
                }
                shared.source_done = true;
            }
            self.replay = Some(shared.ring.take_ordered().into_iter());
        }
        self.item = self.replay.as_mut().and_then(|replay| replay.next());
        self.item.is_some()
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

// ================================
// Cycle
// ================================

/// Buffers a finite upstream on first pass, then replays it forever.
/// An empty upstream stays empty.
pub struct Cycle<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) buffer: Vec<S::Item>,
    pub(crate) consumed: bool,
    pub(crate) index: usize,
    pub(crate) item: Option<S::Item>,
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if !self.consumed {
            if self.seq.advance() {
                let value = self.seq.current();
                self.buffer.push(value.clone());
                self.item = Some(value);
                return true;
            }
            self.consumed = true;
        }
        if self.buffer.is_empty() {
            return false;
        }
        self.item = Some(self.buffer[self.index].clone());
        self.index = (self.index + 1) % self.buffer.len();
        true
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

// ================================
// Extension trait
// ================================

pub trait BufferingSequenceExt: Sequence + Sized {
    /// Fan this sequence out to `n` independently-paced consumers.
    ///
    /// Driving different lanes from different threads is impossible by
    /// construction: the handles share an `Rc` and are `!Send`.
    fn tee(self, n: usize) -> Vec<TeeHandle<Self>>
    where
        Self::Item: Clone,
    {
        tee_lanes(self, n)
    }

    /// Two-way [`tee`](Self::tee).
    fn tee2(self) -> (TeeHandle<Self>, TeeHandle<Self>)
    where
        Self::Item: Clone,
    {
        let mut lanes = tee_lanes(self, 2);
        let second = lanes.pop().expect("tee_lanes(2) yields two lanes");
        let first = lanes.pop().expect("tee_lanes(2) yields two lanes");
        (first, second)
    }

    /// Sliding windows of `size` elements. A shorter-than-`size` upstream
    /// (or `size == 0`) yields nothing.
    fn windowed(self, size: usize) -> Windowed<Self>
    where
        Self::Item: Clone,
    {
        if size == 0 {
            warn!("windowed: window size of zero, yielding empty sequence");
        }
        Windowed {
            seq: self,
            ring: RingBuffer::new(size),
            size,
            primed: false,
        }
    }

    /// Sliding windows that pad a too-short upstream with `filler`,
    /// always yielding at least one window (unless `size == 0`).
    fn windowed_with_filler(self, size: usize, filler: Self::Item) -> WindowedWithFiller<Self>
    where
        Self::Item: Clone,
    {
        if size == 0 {
            warn!("windowed_with_filler: window size of zero, yielding empty sequence");
        }
        WindowedWithFiller {
            seq: self,
            ring: RingBuffer::new(size),
            size,
            filler,
            primed: false,
            done: false,
        }
    }

    /// The last ≤ `n` elements of a finite sequence, in original order.
    fn tail(self, n: usize) -> Tail<Self> {
        Tail { seq: self, size: n, replay: None, item: None }
    }

    /// Split into everything-but-the-last-`n` and the-last-`n`.
    /// Consume the leading part first; for any `n` up to the input length
    /// the two parts' lengths sum to the input length.
    fn all_but_last(self, n: usize) -> (Leading<Self>, Trailing<Self>) {
        let shared = Rc::new(RefCell::new(SplitShared {
            source: self,
            ring: RingBuffer::new(n),
            keep: n,
            primed: false,
            source_done: false,
        }));
        (
            Leading { shared: Rc::clone(&shared), item: None },
            Trailing { shared, replay: None, item: None },
        )
    }

    /// Repeat a finite sequence forever.
    fn cycle(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        Cycle {
            seq: self,
            buffer: Vec::new(),
            consumed: false,
            index: 0,
            item: None,
        }
    }
}

impl<S: Sequence + Sized> BufferingSequenceExt for S {}
