#![no_main]

use libfuzzer_sys::fuzz_target;
use ringfence::RingBuffer;
use std::collections::VecDeque;

const CAP: usize = 7;

// Each input byte is one operation. The low two bits pick push (0, 1), pop (2)
// or index lookup (3); the upper six bits are the pushed value or looked-up
// index. A lookup of index 0 also clears the buffer afterwards.
fuzz_target!(|data: &[u8]| {
    let mut buffer: RingBuffer<u8, CAP> = RingBuffer::new();
    let mut model: VecDeque<u8> = VecDeque::with_capacity(CAP);

    for &byte in data {
        let arg = byte >> 2;
        match byte & 0b11 {
            0 | 1 => {
                let expected = if model.len() == CAP {
                    model.pop_front()
                } else {
                    None
                };
                model.push_back(arg);
                assert_eq!(buffer.push_back(arg), expected);
            }
            2 => assert_eq!(buffer.pop_back(), model.pop_back()),
            _ => {
                let index = arg as usize;
                assert_eq!(buffer.get(index), model.get(index));
                assert_eq!(buffer.at(index).is_ok(), index < model.len());
                if arg == 0 {
                    buffer.clear();
                    model.clear();
                }
            }
        }
        assert_eq!(buffer.len(), model.len());
        assert!(buffer.len() <= buffer.capacity());
    }
});
