//! # 6502 Instruction-Set Simulator
//!
//! A cycle-aware simulator for the documented MOS 6502 instruction set,
//! executing against a flat 64KB memory image.
//!
//! This crate provides the processor state, an addressing-mode resolver, the
//! flag-setting ALU primitives and a table-driven dispatcher that maps every
//! opcode byte to a mnemonic, addressing mode, base cycle cost and handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{ProcessorState, Status, DEFAULT_LOAD_ADDRESS};
//!
//! let mut cpu = ProcessorState::new();
//!
//! // LDA #$10; ADC #$20; STA $0200
//! cpu.load(DEFAULT_LOAD_ADDRESS, &[0xA9, 0x10, 0x69, 0x20, 0x8D, 0x00, 0x02]);
//! cpu.pc = DEFAULT_LOAD_ADDRESS;
//!
//! let mut cycles = 0;
//! for _ in 0..3 {
//!     cycles += cpu.step().unwrap() as u64;
//! }
//!
//! assert_eq!(cpu.memory.read(0x0200), 0x30);
//! assert_eq!(cycles, 8);
//! assert!(!cpu.flag(Status::CARRY));
//! ```
//!
//! ## Architecture
//!
//! - **Single owner**: all mutable state lives in [`ProcessorState`]; handlers
//!   receive it by exclusive reference
//! - **Table-driven**: [`OPCODE_TABLE`] is the single source of truth for
//!   decoding, cycle costs and disassembly
//! - **No bus errors**: every address is mapped, so execution can only fail
//!   on an unknown opcode
//! - **Deterministic**: no clocks, threads or I/O in the execution path;
//!   real-time pacing is left to the driver via [`Clock`]
//!
//! ## Modules
//!
//! - `cpu` - Processor state and the fetch-decode-execute step
//! - `memory` - Flat 64KB memory image
//! - `status` - Packed status register flags
//! - `addressing` - Addressing modes and operand resolution
//! - `alu` - Flag-setting arithmetic and logic primitives
//! - `opcodes` - Opcode table and handler dispatch
//! - `disassembler` - Instruction decoding and assembler-syntax formatting
//! - `clock` - Cycle and wall-clock conversion

pub mod addressing;
pub mod alu;
pub mod clock;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Resolved};
pub use clock::{Clock, DEFAULT_LOAD_ADDRESS};
pub use cpu::ProcessorState;
pub use disassembler::{decode, disassemble, Instruction};
pub use memory::Memory;
pub use opcodes::{lookup, Handler, InstructionDescriptor, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur while decoding an instruction.
///
/// Both are fatal to the current step; the caller decides whether to stop
/// or to skip ahead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The opcode byte has no entry in the opcode table.
    ///
    /// `pc` is the address the opcode was fetched from.
    #[error("opcode ${opcode:02X} at ${pc:04X} is not implemented")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /// A table entry pairs a handler with an addressing mode it cannot
    /// operate in.
    #[error("opcode ${opcode:02X} cannot execute in {mode:?} addressing mode")]
    UnresolvedAddressingMode { opcode: u8, mode: AddressingMode },
}
