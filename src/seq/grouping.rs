//! Adjacent-run grouping with one-element lookahead.
//!
//! The engine detects a run boundary by pulling one element past the run,
//! so every emitted group is fully materialized rather than a live view
//! into the upstream cursor; the next run never aliases the previous
//! group's contents.

use log::warn;

use super::core::Sequence;

/// Key projector paired with a custom equality predicate, decoupling
/// grouping from native `PartialEq` (approximate or domain-specific
/// equivalence included).
pub struct Key<F, E> {
    pub(crate) create: F,
    pub(crate) equal: E,
}

impl<F, E> Key<F, E> {
    pub fn new<T, K>(create: F, equal: E) -> Self
    where
        F: FnMut(&T) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        Key { create, equal }
    }
}

/// A materialized maximal run of elements sharing one derived key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<T, K> {
    pub key: K,
    pub items: Vec<T>,
}

pub struct GroupByKey<S: Sequence, F, E, K> {
    pub(crate) seq: S,
    pub(crate) key: Key<F, E>,
    pub(crate) pending: Option<(S::Item, K)>,
    pub(crate) done: bool,
    pub(crate) group: Option<Group<S::Item, K>>,
}

impl<S, F, E, K> Sequence for GroupByKey<S, F, E, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    E: FnMut(&K, &K) -> bool,
{
    type Item = Group<S::Item, K>;

    fn advance(&mut self) -> bool {
        let (first, run_key) = match self.pending.take() {
            Some(lookahead) => lookahead,
            None => {
                if self.done || !self.seq.advance() {
                    self.done = true;
                    return false;
                }
                let item = self.seq.current();
                let key = (self.key.create)(&item);
                (item, key)
            }
        };
        let mut items = vec![first];
        loop {
            if !self.seq.advance() {
                self.done = true;
                break;
            }
            let item = self.seq.current();
            let key = (self.key.create)(&item);
            if (self.key.equal)(&key, &run_key) {
                items.push(item);
            } else {
                self.pending = Some((item, key));
                break;
            }
        }
        self.group = Some(Group { key: run_key, items });
        true
    }

    fn current(&mut self) -> Self::Item {
        self.group.take().expect("current() called without a successful advance()")
    }
}

/// [`GroupByKey`] projecting each element to its own (cloned) value and
/// comparing with `PartialEq`.
pub type GroupByValue<S> = GroupByKey<
    S,
    fn(&<S as Sequence>::Item) -> <S as Sequence>::Item,
    fn(&<S as Sequence>::Item, &<S as Sequence>::Item) -> bool,
    <S as Sequence>::Item,
>;

fn clone_value<T: Clone>(value: &T) -> T {
    value.clone()
}

fn values_equal<K: PartialEq>(a: &K, b: &K) -> bool {
    a == b
}

/// Same engine as [`GroupByKey`], yielding the raw runs without keys.
pub struct ChunkBy<S: Sequence, F, K> {
    pub(crate) inner: GroupByKey<S, F, fn(&K, &K) -> bool, K>,
}

impl<S, F, K> Sequence for ChunkBy<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.inner.current().items
    }
}

/// Non-overlapping chunks of `size`; the last chunk may be short.
pub struct Chunked<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) size: usize,
    pub(crate) chunk: Option<Vec<S::Item>>,
    pub(crate) done: bool,
}

impl<S: Sequence> Sequence for Chunked<S> {
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.size == 0 || self.done {
            return false;
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            if !self.seq.advance() {
                self.done = true;
                break;
            }
            chunk.push(self.seq.current());
        }
        if chunk.is_empty() {
            return false;
        }
        self.chunk = Some(chunk);
        true
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.chunk.take().expect("current() called without a successful advance()")
    }
}

pub trait GroupingSequenceExt: Sequence + Sized {
    /// Maximal consecutive runs whose derived keys are pairwise equal,
    /// in input order.
    fn group_by_key<F, E, K>(self, key: Key<F, E>) -> GroupByKey<Self, F, E, K>
    where
        F: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        GroupByKey { seq: self, key, pending: None, done: false, group: None }
    }

    fn group_by_value(self) -> GroupByValue<Self>
    where
        Self::Item: Clone + PartialEq,
    {
        self.group_by_key(Key::new(
            clone_value::<Self::Item> as fn(&Self::Item) -> Self::Item,
            values_equal::<Self::Item> as fn(&Self::Item, &Self::Item) -> bool,
        ))
    }

    /// Adjacent runs keyed by `f`, yielded as raw element vectors.
    fn chunk_by<F, K>(self, f: F) -> ChunkBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        ChunkBy {
            inner: GroupByKey {
                seq: self,
                key: Key { create: f, equal: values_equal::<K> },
                pending: None,
                done: false,
                group: None,
            },
        }
    }

    /// Non-overlapping chunks of `size` elements; `size == 0` yields
    /// nothing.
    fn chunked(self, size: usize) -> Chunked<Self> {
        if size == 0 {
            warn!("chunked: chunk size of zero, yielding empty sequence");
        }
        Chunked { seq: self, size, chunk: None, done: false }
    }

    /// True iff grouping the whole input produces at most one group.
    /// Vacuously true for an empty sequence.
    fn all_equal_value(self) -> bool
    where
        Self::Item: Clone + PartialEq,
    {
        let mut groups = self.group_by_value();
        groups.advance();
        !groups.advance()
    }

    /// [`all_equal_value`](Self::all_equal_value) under a custom key.
    fn all_equal_by_key<F, E, K>(self, key: Key<F, E>) -> bool
    where
        F: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        let mut groups = self.group_by_key(key);
        groups.advance();
        !groups.advance()
    }
}

impl<S: Sequence + Sized> GroupingSequenceExt for S {}
