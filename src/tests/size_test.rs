use super::*;

#[test]
fn empty() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::default();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.check_invariants(), None);
    let heap: Heap<i32> = Heap::default();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
}

#[test]
fn count_follows_operations() {
    let mut mm = MinMaxHeap::with_capacity(8);
    let mut heap = Heap::with_capacity(8);
    assert!(mm.capacity() >= 8);
    for i in 0..50 {
        mm.push(i);
        heap.push(i);
        assert_eq!(mm.len(), i + 1);
        assert_eq!(heap.len(), i + 1);
    }
    mm.pop_min();
    assert_eq!(mm.len(), 49);
    mm.pop_max();
    assert_eq!(mm.len(), 48);
    heap.pop();
    assert_eq!(heap.len(), 49);
}

#[test]
fn three() {
    let mut mm = MinMaxHeap::new();
    mm.push(1);
    mm.push(2);
    mm.push(3);
    assert_eq!(mm.len(), 3);
    // pop max
    mm.pop_max();
    assert_eq!(mm.len(), 2);
    // pop min
    mm.pop_min();
    assert_eq!(mm.len(), 1);
    // pop max
    mm.pop_max();
    assert_eq!(mm.len(), 0);
    assert!(mm.pop_min().is_none());
    assert_eq!(mm.len(), 0);
}

#[test]
fn clear() {
    let mut mm = MinMaxHeap::from(vec![1, 2, 3]);
    mm.clear();
    assert!(mm.is_empty());
    let mut heap = Heap::from(vec![1, 2, 3]);
    heap.clear();
    assert!(heap.is_empty());
}
