//! Fair interleaving across N sequences of unequal length, plus the
//! separator adapters.

use std::fmt::Display;
use std::fmt::Write;

use super::core::Sequence;

// ================================
// RoundRobin
// ================================

/// One element per still-active sequence per lap, deactivating each
/// sequence the first time it is exhausted. The total output length is
/// the sum of all input lengths.
pub struct RoundRobin<S> {
    pub(crate) seqs: Vec<S>,
    pub(crate) active: Vec<bool>,
    pub(crate) cursor: usize,
    pub(crate) live: usize,
    pub(crate) lane: usize,
}

impl<S: Sequence> Sequence for RoundRobin<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        while self.live > 0 {
            let lane = self.cursor;
            self.cursor = (self.cursor + 1) % self.seqs.len();
            if !self.active[lane] {
                continue;
            }
            if self.seqs[lane].advance() {
                self.lane = lane;
                return true;
            }
            self.active[lane] = false;
            self.live -= 1;
        }
        false
    }

    fn current(&mut self) -> S::Item {
        self.seqs[self.lane].current()
    }
}

pub fn round_robin<S: Sequence>(seqs: Vec<S>) -> RoundRobin<S> {
    let live = seqs.len();
    RoundRobin {
        active: vec![true; live],
        seqs,
        cursor: 0,
        live,
        lane: 0,
    }
}

// ================================
// Interleave
// ================================

/// Lock-step interleave: one composite record per round, stopping at the
/// first exhausted input.
pub struct Interleave<S> {
    pub(crate) seqs: Vec<S>,
    pub(crate) done: bool,
}

impl<S: Sequence> Sequence for Interleave<S> {
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        for seq in &mut self.seqs {
            if !seq.advance() {
                self.done = true;
                return false;
            }
        }
        true
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.seqs.iter_mut().map(|seq| seq.current()).collect()
    }
}

pub fn interleave<S: Sequence>(seqs: Vec<S>) -> Interleave<S> {
    let done = seqs.is_empty();
    Interleave { seqs, done }
}

/// Lock-step interleave that keeps going while any input is live,
/// substituting `filler` for the exhausted ones.
pub struct InterleaveLongest<S: Sequence> {
    pub(crate) seqs: Vec<S>,
    pub(crate) filler: S::Item,
    pub(crate) exhausted: Vec<bool>,
    pub(crate) yielded: Vec<bool>,
    pub(crate) live: usize,
}

impl<S> Sequence for InterleaveLongest<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.live == 0 {
            return false;
        }
        let mut any = false;
        for lane in 0..self.seqs.len() {
            if self.exhausted[lane] {
                self.yielded[lane] = false;
                continue;
            }
            if self.seqs[lane].advance() {
                self.yielded[lane] = true;
                any = true;
            } else {
                self.exhausted[lane] = true;
                self.yielded[lane] = false;
                self.live -= 1;
            }
        }
        any
    }

    fn current(&mut self) -> Vec<S::Item> {
        let mut record = Vec::with_capacity(self.seqs.len());
        for lane in 0..self.seqs.len() {
            if self.yielded[lane] {
                record.push(self.seqs[lane].current());
            } else {
                record.push(self.filler.clone());
            }
        }
        record
    }
}

pub fn interleave_longest<S>(filler: S::Item, seqs: Vec<S>) -> InterleaveLongest<S>
where
    S: Sequence,
    S::Item: Clone,
{
    let live = seqs.len();
    InterleaveLongest {
        exhausted: vec![false; live],
        yielded: vec![false; live],
        seqs,
        filler,
        live,
    }
}

/// Element-wise lock-step interleave (the flattened rounds), stopping
/// mid-lap at the first exhausted input.
pub struct InterleaveFlat<S> {
    pub(crate) seqs: Vec<S>,
    pub(crate) cursor: usize,
    pub(crate) lane: usize,
    pub(crate) done: bool,
}

impl<S: Sequence> Sequence for InterleaveFlat<S> {
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done || self.seqs.is_empty() {
            return false;
        }
        let lane = self.cursor;
        self.cursor = (self.cursor + 1) % self.seqs.len();
        if self.seqs[lane].advance() {
            self.lane = lane;
            true
        } else {
            self.done = true;
            false
        }
    }

    fn current(&mut self) -> S::Item {
        self.seqs[self.lane].current()
    }
}

pub fn interleave_flat<S: Sequence>(seqs: Vec<S>) -> InterleaveFlat<S> {
    InterleaveFlat { seqs, cursor: 0, lane: 0, done: false }
}

// ================================
// Intersperse / join
// ================================

/// The separator between each pair of consecutive elements. Needs one
/// element of lookahead: a separator is only emitted once the next
/// element is known to exist.
pub struct Intersperse<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) sep: S::Item,
    pub(crate) pending: Option<S::Item>,
    pub(crate) item: Option<S::Item>,
    pub(crate) started: bool,
    pub(crate) done: bool,
}

impl<S> Sequence for Intersperse<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            if !self.seq.advance() {
                self.done = true;
                return false;
            }
            self.item = Some(self.seq.current());
            return true;
        }
        if let Some(held) = self.pending.take() {
            self.item = Some(held);
            return true;
        }
        if !self.seq.advance() {
            self.done = true;
            return false;
        }
        self.pending = Some(self.seq.current());
        self.item = Some(self.sep.clone());
        true
    }

    fn current(&mut self) -> S::Item {
        self.item.take().expect("current() called without a successful advance()")
    }
}

pub trait InterleaveSequenceExt: Sequence + Sized {
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse {
            seq: self,
            sep,
            pending: None,
            item: None,
            started: false,
            done: false,
        }
    }

    /// Render every element with `Display`, separated by `sep`.
    fn join(mut self, sep: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        let mut first = true;
        while self.advance() {
            if !first {
                out.push_str(sep);
            }
            let _ = write!(out, "{}", self.current());
            first = false;
        }
        out
    }
}

impl<S: Sequence + Sized> InterleaveSequenceExt for S {}
