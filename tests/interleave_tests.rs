use pullseq::literal;
use pullseq::*;

#[test]
fn test_round_robin_rotates_lanes() {
    let got = round_robin(vec![
        literal![1, 2, 3].boxed(),
        literal![10, 20].boxed(),
        literal![100].boxed(),
    ])
    .to_vec();
    assert_eq!(got, vec![1, 10, 100, 2, 20, 3]);
}

#[test]
fn test_round_robin_length_is_sum_of_inputs() {
    let seqs: Vec<Range> = vec![int_range(5), int_range(2), int_range(7)];
    assert_eq!(round_robin(seqs).length(), 14);
}

#[test]
fn test_round_robin_of_nothing_is_empty() {
    assert_eq!(round_robin(Vec::<Range>::new()).to_vec(), Vec::<i64>::new());
}

#[test]
fn test_interleave_lock_step() {
    let got = interleave(vec![literal![1, 2, 3], literal![10, 20]]).to_vec();
    assert_eq!(got, vec![vec![1, 10], vec![2, 20]]);
}

#[test]
fn test_interleave_longest_pads_exhausted_lanes() {
    let got = interleave_longest(0, vec![literal![1, 2, 3], literal![10, 20]]).to_vec();
    assert_eq!(got, vec![vec![1, 10], vec![2, 20], vec![3, 0]]);
}

#[test]
fn test_interleave_longest_text_columns() {
    // Laying out ragged columns side by side, blank-padded.
    let blank = "      ".to_string();
    let left = literal!["jan".to_string(), "feb".to_string(), "mar".to_string()];
    let right = literal!["apr".to_string()];
    let rows = interleave_longest(blank, vec![left.boxed(), right.boxed()]).to_vec();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["jan".to_string(), "apr".to_string()]);
    assert_eq!(rows[1], vec!["feb".to_string(), "      ".to_string()]);
    assert_eq!(rows[2], vec!["mar".to_string(), "      ".to_string()]);
}

#[test]
fn test_interleave_flat_reconstructs_split_stream() {
    let evens = int_range(10).filter_in(|n| n % 2 == 0);
    let odds = int_range(10).filter_out(|n| n % 2 == 0);
    let got = interleave_flat(vec![evens.boxed(), odds.boxed()]).to_vec();
    assert_eq!(got, int_range(10).to_vec());
}

#[test]
fn test_interleave_flat_stops_at_first_exhausted() {
    let got = interleave_flat(vec![literal![1, 2, 3].boxed(), literal![10].boxed()]).to_vec();
    assert_eq!(got, vec![1, 10, 2]);
}

#[test]
fn test_intersperse() {
    assert_eq!(literal![1, 2, 3].intersperse(5).to_vec(), vec![1, 5, 2, 5, 3]);
    assert_eq!(literal![7].intersperse(5).to_vec(), vec![7]);
    assert_eq!(empty::<i32>().intersperse(5).to_vec(), Vec::<i32>::new());
}

#[test]
fn test_join() {
    assert_eq!(literal!["a", "b", "c"].join("-"), "a-b-c");
    assert_eq!(int_range(4).join(", "), "0, 1, 2, 3");
    assert_eq!(empty::<i32>().join("-"), "");
}
