use pullseq::literal;
use pullseq::predicate::{greater_than, less_than, not};
use pullseq::*;

#[test]
fn test_zip() {
    let got = literal![1, 2, 3].zip(literal!["a", "b", "c"]).to_vec();
    assert_eq!(got, vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_zip_stops_at_shortest() {
    let got = literal![1, 2, 3].zip(literal!["a"]).to_vec();
    assert_eq!(got, vec![(1, "a")]);
}

#[test]
fn test_zip_longest() {
    let got = literal![1, 2, 3].zip_longest(literal!["a"], (0, "b")).to_vec();
    assert_eq!(got, vec![(1, "a"), (2, "b"), (3, "b")]);
}

#[test]
fn test_zip_longest_fills_first_side() {
    let got = literal![1].zip_longest(literal!["a", "b", "c"], (0, "z")).to_vec();
    assert_eq!(got, vec![(1, "a"), (0, "b"), (0, "c")]);
}

#[test]
fn test_scan() {
    let got = literal![1, 2, 3, 4, 5].scan(|a, b| a + b).to_vec();
    assert_eq!(got, vec![1, 3, 6, 10, 15]);
}

#[test]
fn test_scan_empty() {
    assert_eq!(empty::<i32>().scan(|a, b| a + b).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_take_while() {
    let got = int_range(10).take_while(less_than(5)).to_vec();
    assert_eq!(got, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_skip_while() {
    let got = int_range(10).skip_while(not(greater_than(4))).to_vec();
    assert_eq!(got, vec![5, 6, 7, 8, 9]);
}

#[test]
fn test_enumerate() {
    let got = literal!["a", "b", "c"].enumerate().to_vec();
    assert_eq!(got, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn test_compress() {
    let got = literal![1, 2, 3, 4, 5, 6]
        .compress(literal![true, false, false, true, true])
        .to_vec();
    assert_eq!(got, vec![1, 4, 5]);
}

#[test]
fn test_pairwise() {
    let got = literal![1, 2, 3, 4].pairwise().to_vec();
    assert_eq!(got, vec![(1, 2), (2, 3), (3, 4)]);
}

#[test]
fn test_pairwise_short_inputs_are_empty() {
    assert_eq!(literal![1].pairwise().to_vec(), Vec::<(i32, i32)>::new());
    assert_eq!(empty::<i32>().pairwise().to_vec(), Vec::<(i32, i32)>::new());
}

#[test]
fn test_fuse() {
    // A raw source that flip-flops; fused it stays exhausted.
    let mut on = true;
    let mut seq = from_fn(move || {
        on = !on;
        if on {
            Some(1)
        } else {
            None
        }
    })
    .fuse();
    assert!(!seq.advance());
    assert!(!seq.advance());
    assert!(!seq.advance());
}

#[test]
fn test_prefix_suffix() {
    assert_eq!(literal![3, 4].prefix(vec![1, 2]).to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(literal![1, 2].suffix(vec![3, 4]).to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_predicate_combinators() {
    use pullseq::predicate::{all_of, and, any_of, equal_to, or, BoxPredicate};

    let even = |n: &i64| n % 2 == 0;
    let got = int_range(20)
        .filter_in(and(even, greater_than(10)))
        .to_vec();
    assert_eq!(got, vec![12, 14, 16, 18]);

    let got = int_range(6).filter_in(or(equal_to(1), equal_to(4))).to_vec();
    assert_eq!(got, vec![1, 4]);

    let preds: Vec<BoxPredicate<i64>> = vec![Box::new(less_than(8)), Box::new(even)];
    assert_eq!(int_range(20).filter_in(all_of(preds)).to_vec(), vec![0, 2, 4, 6]);

    let preds: Vec<BoxPredicate<i64>> = vec![Box::new(less_than(2)), Box::new(greater_than(17))];
    assert_eq!(int_range(20).filter_in(any_of(preds)).to_vec(), vec![0, 1, 18, 19]);
}
