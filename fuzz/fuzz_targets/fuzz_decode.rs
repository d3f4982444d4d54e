//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary bytes to `disassemble` and checks that the listing is
//! contiguous and every instruction formats.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{disassemble, Memory};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let mut memory = Memory::new();
    memory.load(input.start_address, &input.bytes);

    let instructions = disassemble(&memory, input.start_address, input.bytes.len());

    let mut expected_address = input.start_address;
    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!((1..=3).contains(&instr.size_bytes));
        assert!(!instr.to_string().is_empty());
        expected_address = instr.next_address();
    }
});
