//! 6502 Disassembler Module
//!
//! Converts machine code in a [`Memory`] image into assembly text. Used by
//! the trace log in [`ProcessorState::step`](crate::ProcessorState::step) and
//! available to drivers that want a listing.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::opcodes::{lookup, InstructionDescriptor};
use crate::Memory;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub mode: AddressingMode,

    /// Raw operand, little-endian. Only the low byte is meaningful for
    /// one-byte operands.
    pub operand: u16,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing and branch penalties)
    pub base_cycles: u8,
}

impl Instruction {
    pub fn new(
        address: u16,
        opcode: u8,
        descriptor: &InstructionDescriptor,
        operand: u16,
    ) -> Self {
        Self {
            address,
            opcode,
            mnemonic: descriptor.mnemonic,
            mode: descriptor.mode,
            operand,
            size_bytes: descriptor.size_bytes(),
            base_cycles: descriptor.base_cycles,
        }
    }

    /// Address of the instruction that follows this one.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes as u16)
    }

    /// Destination of a relative branch, measured from the next instruction.
    pub fn branch_target(&self) -> Option<u16> {
        match self.mode {
            AddressingMode::Relative => {
                let offset = self.operand as u8 as i8;
                Some(self.next_address().wrapping_add_signed(offset as i16))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;

        let zp = self.operand as u8;
        let abs = self.operand;

        match self.mode {
            Implied => write!(f, "{}", self.mnemonic),
            Accumulator => write!(f, "{} A", self.mnemonic),
            Immediate => write!(f, "{} #${:02X}", self.mnemonic, zp),
            ZeroPage => write!(f, "{} ${:02X}", self.mnemonic, zp),
            ZeroPageX => write!(f, "{} ${:02X},X", self.mnemonic, zp),
            ZeroPageY => write!(f, "{} ${:02X},Y", self.mnemonic, zp),
            Absolute => write!(f, "{} ${:04X}", self.mnemonic, abs),
            AbsoluteX => write!(f, "{} ${:04X},X", self.mnemonic, abs),
            AbsoluteY => write!(f, "{} ${:04X},Y", self.mnemonic, abs),
            Indirect => write!(f, "{} (${:04X})", self.mnemonic, abs),
            IndexedIndirectX => write!(f, "{} (${:02X},X)", self.mnemonic, zp),
            IndirectIndexedY => write!(f, "{} (${:02X}),Y", self.mnemonic, zp),
            Relative => {
                let target = self.branch_target().unwrap_or(self.address);
                write!(f, "{} ${:04X}", self.mnemonic, target)
            }
        }
    }
}

/// Decodes the instruction at `address` without touching processor state.
///
/// Returns `None` for opcodes with no table entry. Operand bytes are read
/// with 16-bit wraparound.
pub fn decode(memory: &Memory, address: u16) -> Option<Instruction> {
    let opcode = memory.read(address);
    let descriptor = lookup(opcode)?;

    let operand_addr = address.wrapping_add(1);
    let operand = match descriptor.mode.operand_len() {
        0 => 0,
        1 => memory.read(operand_addr) as u16,
        _ => memory.read_u16(operand_addr),
    };

    Some(Instruction::new(address, opcode, descriptor, operand))
}

/// Disassembles up to `count` instructions starting at `start`.
///
/// Stops early at the first opcode with no table entry.
pub fn disassemble(memory: &Memory, start: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = start;

    for _ in 0..count {
        match decode(memory, address) {
            Some(instruction) => {
                address = instruction.next_address();
                instructions.push(instruction);
            }
            None => break,
        }
    }

    instructions
}
