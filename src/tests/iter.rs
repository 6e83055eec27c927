use super::*;

#[test]
fn test_iter1() {
    let mut mm = MinMaxHeap::new();
    mm.push(1);
    mm.push(2);
    mm.push(3);
    let mut iter = mm.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter2() {
    let heap: Heap<i32> = (0..100).collect();
    for i in &heap {
        if !(0..100).contains(i) {
            panic!("Iterator returned invalid value: {}", i);
        }
    }
    assert_eq!(heap.iter().count(), 100);
}

#[test]
fn drain_sorted_empties() {
    let mut heap = Heap::from(vec![4, 1, 3]);
    let mut drain = heap.drain_sorted();
    assert_eq!(drain.len(), 3);
    assert_eq!(drain.next(), Some(1));
    drop(drain);
    assert!(heap.is_empty());
}

#[test]
fn drain_both_ends() {
    let mut mm = MinMaxHeap::from(vec![5, 3, 8, 1, 9, 2]);
    let low: Vec<_> = mm.drain_min().take(2).collect();
    assert_eq!(low, vec![1, 2]);
    assert!(mm.is_empty());

    let mut mm = MinMaxHeap::from(vec![5, 3, 8, 1, 9, 2]);
    let mut iter = mm.clone().into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(9));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 5, 8]);
    assert_eq!(mm.drain_max().collect::<Vec<_>>(), vec![9, 8, 5, 3, 2, 1]);
}

#[test]
fn into_vec_keeps_every_element() {
    let values = shuffled(100, 8);
    let mut buffer = MinMaxHeap::from(values.clone()).into_vec();
    buffer.sort();
    let mut expected = values.clone();
    expected.sort();
    assert_eq!(buffer, expected);
    let mut buffer = Heap::from(values).into_vec();
    buffer.sort();
    assert_eq!(buffer, expected);
}
