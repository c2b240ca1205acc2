//! Worked push/pop scenarios and the laws they illustrate

use ringfence::RingBuffer;

fn contents<const N: usize>(buffer: &RingBuffer<i32, N>) -> Vec<i32> {
    (0..buffer.len()).map(|i| buffer[i]).collect()
}

#[test]
fn test_fill_to_capacity() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
    buffer.push_back(1);
    buffer.push_back(2);
    buffer.push_back(3);
    assert_eq!(buffer[0], 1);
    assert_eq!(buffer[1], 2);
    assert_eq!(buffer[2], 3);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_one_push_past_capacity() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
    for v in [1, 2, 3, 99] {
        buffer.push_back(v);
    }
    assert_eq!(buffer[0], 2);
    assert_eq!(buffer[1], 3);
    assert_eq!(buffer[2], 99);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_full_window_replaced() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
    for v in [1, 2, 3, 99, 100, 101] {
        buffer.push_back(v);
    }
    assert_eq!(contents(&buffer), vec![99, 100, 101]);
}

#[test]
fn test_single_value_fill_then_push() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::filled(42);
    assert_eq!(buffer.len(), 3);
    assert_eq!(contents(&buffer), vec![42, 42, 42]);

    buffer.push_back(9);
    assert_eq!(buffer[0], 42);
    assert_eq!(buffer[1], 42);
    assert_eq!(buffer[2], 9);
}

#[test]
fn test_partial_prefill_then_push() {
    let mut buffer = RingBuffer::<i32, 5>::from_values([1, 2, 3]).unwrap();
    assert_eq!(buffer.len(), 3);
    buffer.push_back(99);
    buffer.push_back(100);
    assert_eq!(buffer[3], 99);
    assert_eq!(buffer[4], 100);
    assert_eq!(buffer.len(), 5);
    assert_eq!(contents(&buffer), vec![1, 2, 3, 99, 100]);
}

#[test]
fn test_pop_until_empty_and_beyond() {
    let mut buffer = RingBuffer::<i32, 3>::from_values([1, 2, 3]).unwrap();
    assert_eq!(buffer.pop_back(), Some(3));
    assert_eq!(buffer.pop_back(), Some(2));
    assert_eq!(buffer.pop_back(), Some(1));
    assert!(buffer.is_empty());

    assert_eq!(buffer.pop_back(), None);
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn test_clear_then_refill() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
    buffer.push_back(2);
    buffer.clear();
    assert_eq!(buffer.len(), 0);

    buffer.push_back(10);
    buffer.push_back(20);
    buffer.push_back(30);
    assert_eq!(contents(&buffer), vec![10, 20, 30]);
}

#[test]
fn test_clear_after_wrap_restarts_window() {
    let mut buffer: RingBuffer<i32, 3> = RingBuffer::new();
    for v in 1..=5 {
        buffer.push_back(v);
    }
    buffer.clear();
    buffer.push_back(7);
    assert_eq!(contents(&buffer), vec![7]);
    assert_eq!(buffer.front(), buffer.back());
}

#[test]
fn test_pop_then_push_restores_contents() {
    let mut buffer = RingBuffer::<i32, 4>::from_values([1, 2, 3]).unwrap();
    let before = buffer.clone();
    let popped = buffer.pop_back().unwrap();
    buffer.push_back(popped);
    assert_eq!(buffer, before);
}

#[test]
fn test_pop_never_resurrects_overwritten_values() {
    let mut buffer: RingBuffer<i32, 2> = RingBuffer::new();
    for v in [1, 2, 3] {
        buffer.push_back(v);
    }
    assert_eq!(buffer.pop_back(), Some(3));
    assert_eq!(buffer.pop_back(), Some(2));
    assert_eq!(buffer.pop_back(), None);
}

#[test]
fn test_capacity_one_always_holds_latest() {
    let mut buffer: RingBuffer<i32, 1> = RingBuffer::new();
    assert_eq!(buffer.push_back(1), None);
    assert_eq!(buffer.push_back(2), Some(1));
    assert_eq!(buffer.push_back(3), Some(2));
    assert_eq!(contents(&buffer), vec![3]);
}
