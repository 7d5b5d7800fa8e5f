//! Lazy, pull-based sequence combinators.
//!
//! Everything here is built on the two-operation [`Sequence`] protocol in
//! [`core`]; the remaining modules group the adapters by the kind of state
//! they carry, from the O(1) core through the buffering, grouping,
//! combinatorial, and interleaving engines.

pub mod adapters;
pub mod buffering;
pub mod combinatorial;
pub mod constructors;
pub mod core;
pub mod grouping;
pub mod interleave;

// Re-export the protocol and extension traits
pub use self::core::{BoxSequence, Sequence, SequenceExt};

// Re-export core adapters
pub use self::core::{Chain, FilterIn, FilterOut, Flatten, Map, Skip, Slice, Take};

// Re-export constructors
pub use self::constructors::{
    count, count_by, empty, from_fn, from_fn_safe, from_iter, from_slice, int_range, literal,
    once, range, repeat, repeat_n, repeat_with, tabulate, Count, Empty, FromFn, FromIter,
    FromSlice, Once, Range, Repeat, RepeatWith,
};

// Re-export single-pass adapters
pub use self::adapters::{
    chain_many, AdapterSequenceExt, ChainMany, Compress, Enumerate, Fuse, Pairwise, Scan,
    SkipWhile, TakeWhile, Zip, ZipLongest,
};

// Re-export buffering adapters
pub use self::buffering::{
    BufferingSequenceExt, Cycle, Leading, Tail, TeeHandle, Trailing, Windowed,
    WindowedWithFiller,
};

// Re-export the grouping engine
pub use self::grouping::{
    ChunkBy, Chunked, Group, GroupByKey, GroupByValue, GroupingSequenceExt, Key,
};

// Re-export combinatorial generators
pub use self::combinatorial::{
    index_permutations, permutations_of, product, safe_permutations_of, IndexPermutations,
    PermutationsOf, Product, SafePermutationsOf,
};

// Re-export the interleaving engine
pub use self::interleave::{
    interleave, interleave_flat, interleave_longest, round_robin, Interleave, InterleaveFlat,
    InterleaveLongest, InterleaveSequenceExt, Intersperse, RoundRobin,
};
