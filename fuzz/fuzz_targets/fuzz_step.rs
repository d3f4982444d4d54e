//! Fuzz target for instruction execution.
//!
//! Builds an arbitrary processor state around a short instruction stream
//! and runs a few steps. Execution must never panic, and every successful
//! step must report a cycle count within the documented range.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{ProcessorState, Status};

#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Page at $4000 for absolute operands
    main_memory: [u8; 256],
    brk_vector: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
    pc: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = ProcessorState::new();

    cpu.load(0x0000, &input.memory.zero_page);
    cpu.load(0x0100, &input.memory.stack_page);
    cpu.load(0x4000, &input.memory.main_memory);
    cpu.load(0xFFFE, &input.memory.brk_vector.to_le_bytes());
    cpu.load(input.pc, &input.memory.program);

    cpu.a = input.registers.a;
    cpu.x = input.registers.x;
    cpu.y = input.registers.y;
    cpu.sp = input.registers.sp;
    cpu.set_status(input.registers.status);
    cpu.pc = input.pc;

    for _ in 0..8 {
        let before = cpu.cycles;
        match cpu.step() {
            Ok(cycles) => {
                assert!((2..=7).contains(&cycles));
                assert_eq!(cpu.cycles, before + cycles as u64);
            }
            Err(_) => {
                assert_eq!(cpu.cycles, before);
                break;
            }
        }
        assert!(cpu.flag(Status::UNUSED));
        assert!(!cpu.flag(Status::BREAK));
    }
});
