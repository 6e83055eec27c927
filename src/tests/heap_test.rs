use super::*;

#[test]
fn drain_example() {
    let heap = Heap::from(vec![5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.check_invariants(), None);
    let drained: Vec<_> = heap.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn sort_equivalence() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in [0, 1, 2, 3, 10, 100, 1000] {
        let values: Vec<i32> = (0..size).map(|_| rand::Rng::gen_range(&mut rng, -50..50)).collect();
        let mut expected = values.clone();
        expected.sort();
        let heap = Heap::from(values);
        assert!(heap.validate().is_ok());
        assert_eq!(heap.into_sorted_vec(), expected);
    }
}

#[test]
fn init_vs_push() {
    let values = shuffled(10_000, 1);
    let mut bulk = Heap::from(values.as_slice());
    let mut pushed = Heap::new();
    for &value in &values {
        pushed.push(value);
    }
    assert_eq!(pushed.check_invariants(), None);
    while let Some(value) = bulk.pop() {
        assert_eq!(Some(value), pushed.pop());
    }
    assert!(pushed.is_empty());
}

#[test]
fn construction_paths_agree() {
    let values = shuffled(257, 2);
    let from_vec = Heap::from(values.clone());
    let from_slice = Heap::from(values.as_slice());
    let from_iter: Heap<u64> = values.iter().copied().collect();
    assert_eq!(from_vec.as_slice(), from_slice.as_slice());
    assert_eq!(from_vec.as_slice(), from_iter.as_slice());
    let array = Heap::from([4, 2, 6, 1]);
    assert_eq!(array.peek(), Some(&1));
}

#[test]
fn clone_is_independent() {
    let mut heap = Heap::from(vec![3, 1, 2]);
    let copy = heap.clone();
    assert_eq!(heap.pop(), Some(1));
    heap.push(0);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.into_sorted_vec(), vec![1, 2, 3]);
    assert_eq!(heap.into_sorted_vec(), vec![0, 2, 3]);
}

#[test]
fn invariants_hold_while_mixing() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut heap = Heap::new();
    for _ in 0..10_000 {
        if rand::Rng::gen_bool(&mut rng, 0.6) {
            heap.push(rand::Rng::gen_range(&mut rng, 0..1000));
        } else {
            heap.pop();
        }
        assert_eq!(heap.check_invariants(), None);
    }
}

#[test]
fn broken_heap_is_reported() {
    let heap = Heap { contents: vec![1, 5, 3, 4] };
    assert_eq!(heap.check_invariants(), Some(Position::new(3)));
    assert_eq!(heap.validate(), Err(HeapErr::InvariantBroken(Position::new(3))));
    assert_eq!(heap.validate().unwrap_err().to_string(), "invariants broken at 3");
}

#[test]
fn extend_pushes() {
    let mut heap = Heap::from(vec![5]);
    heap.extend(vec![3, 9]);
    heap.extend(&[1, 7]);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.check_invariants(), None);
}
