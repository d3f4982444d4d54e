//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns raw operand bytes into either a value or an effective address.
//!
//! Resolution never fails: every computation wraps (8-bit within the zero
//! page, 16-bit elsewhere) and the whole address space is always mapped.
//! Alongside the address, the resolver reports whether indexing carried into
//! a new page so the dispatcher can charge the extra cycle.

use crate::memory::page;
use crate::ProcessorState;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes follow an opcode
/// and how the CPU turns them into the value or address an instruction
/// operates on.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndexedIndirectX, IndirectIndexedY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. +1 cycle on page cross for reads.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. +1 cycle on page cross for reads.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// (ZP + X) then dereference; the pointer never leaves the zero page.
    ///
    /// Example: LDA ($40,X)
    IndexedIndirectX,

    /// Dereference ZP pointer then + Y. +1 cycle on page cross for reads.
    ///
    /// Example: LDA ($40),Y
    IndirectIndexedY,

    /// Signed 8-bit offset from the address of the next instruction.
    ///
    /// Example: BEQ label
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::IndexedIndirectX
            | Self::IndirectIndexedY
            | Self::Relative => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 2,
        }
    }

    /// True for modes that name a location in memory.
    pub const fn is_memory(self) -> bool {
        matches!(
            self,
            Self::ZeroPage
                | Self::ZeroPageX
                | Self::ZeroPageY
                | Self::Absolute
                | Self::AbsoluteX
                | Self::AbsoluteY
                | Self::Indirect
                | Self::IndexedIndirectX
                | Self::IndirectIndexedY
        )
    }
}

/// The result of resolving an instruction's operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// Implied and Accumulator modes carry no operand.
    None,

    /// Immediate mode: the operand byte is the value.
    Value(u8),

    /// An effective memory address.
    Address {
        /// Address the instruction operates on
        addr: u16,
        /// Whether indexing carried into a different page
        page_crossed: bool,
    },

    /// A branch destination (Relative mode).
    Branch {
        /// Destination if the branch is taken
        target: u16,
        /// Whether the destination lies on a different page than the next instruction
        page_crossed: bool,
    },
}

/// Resolves an operand for `mode`.
///
/// `operand` holds the raw operand bytes already fetched from the
/// instruction stream (little-endian for two-byte operands; only the low byte
/// is meaningful for one-byte operands). `state.pc` must already point past
/// the operand, which is where relative branches are measured from.
pub fn resolve(state: &ProcessorState, mode: AddressingMode, operand: u16) -> Resolved {
    let zp = operand as u8;

    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => Resolved::None,
        AddressingMode::Immediate => Resolved::Value(zp),
        AddressingMode::ZeroPage => direct(zp as u16),
        AddressingMode::ZeroPageX => direct(zero_page_indexed(zp, state.x)),
        AddressingMode::ZeroPageY => direct(zero_page_indexed(zp, state.y)),
        AddressingMode::Absolute => direct(operand),
        AddressingMode::AbsoluteX => {
            let (addr, page_crossed) = absolute_indexed(operand, state.x);
            Resolved::Address { addr, page_crossed }
        }
        AddressingMode::AbsoluteY => {
            let (addr, page_crossed) = absolute_indexed(operand, state.y);
            Resolved::Address { addr, page_crossed }
        }
        AddressingMode::Indirect => direct(state.memory.read_u16(operand)),
        AddressingMode::IndexedIndirectX => direct(indexed_indirect(state, zp)),
        AddressingMode::IndirectIndexedY => {
            let (addr, page_crossed) = indirect_indexed(state, zp);
            Resolved::Address { addr, page_crossed }
        }
        AddressingMode::Relative => {
            let (target, page_crossed) = relative(state.pc, zp as i8);
            Resolved::Branch {
                target,
                page_crossed,
            }
        }
    }
}

fn direct(addr: u16) -> Resolved {
    Resolved::Address {
        addr,
        page_crossed: false,
    }
}

/// Zero Page,X / Zero Page,Y: `(base + index) mod 256`.
///
/// The carry is discarded, so `$FF,X` with X=2 lands on $0001, never $0101.
pub const fn zero_page_indexed(base: u8, index: u8) -> u16 {
    base.wrapping_add(index) as u16
}

/// Absolute,X / Absolute,Y with 16-bit wraparound.
///
/// Returns the effective address and whether its page differs from the
/// base address's page.
pub const fn absolute_indexed(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, page(base) != page(addr))
}

/// (Indirect,X): the pointer lives at `(zp + X) mod 256`, and its high
/// byte is fetched from the next zero-page byte, again wrapping mod 256.
pub fn indexed_indirect(state: &ProcessorState, zp: u8) -> u16 {
    state.memory.read_zero_page_u16(zp.wrapping_add(state.x))
}

/// (Indirect),Y: read the pointer at `zp` and `zp + 1` as two sequential
/// bytes, then add Y with 16-bit carry.
///
/// Returns the effective address and whether adding Y crossed a page.
pub fn indirect_indexed(state: &ProcessorState, zp: u8) -> (u16, bool) {
    let base = state.memory.read_u16(zp as u16);
    absolute_indexed(base, state.y)
}

/// Branch destination `pc + offset`, with `pc` already past the operand.
///
/// Returns the destination and whether it lies on a different page from `pc`.
pub const fn relative(pc: u16, offset: i8) -> (u16, bool) {
    let target = pc.wrapping_add_signed(offset as i16);
    (target, page(pc) != page(target))
}
