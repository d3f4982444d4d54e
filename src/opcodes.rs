//! # Opcode Table
//!
//! This module contains the 256-entry opcode table that maps every opcode
//! byte to its instruction descriptor, and the [`Handler`] sum type that ties
//! each descriptor to its implementation.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values map to `None` and decode as
//! [`DecodeError::UnimplementedOpcode`](crate::DecodeError::UnimplementedOpcode).
//!
//! Handlers are grouped by what they need from the addressing stage rather
//! than by mode, so one routine serves every mode of an instruction:
//!
//! | Handler   | Signature                       | Accepted modes                      |
//! |-----------|---------------------------------|-------------------------------------|
//! | `Implied` | `fn(&mut ProcessorState)`       | Implied, Accumulator                |
//! | `Read`    | `fn(&mut ProcessorState, u8)`   | Immediate and every data mode       |
//! | `Address` | `fn(&mut ProcessorState, u16)`  | every memory mode incl. Indirect    |
//! | `Branch`  | `fn(&ProcessorState) -> bool`   | Relative                            |

use std::fmt;

use crate::addressing::{AddressingMode, Resolved};
use crate::instructions::{
    arithmetic, branches, control, flags, inc_dec, load_store, logic, shifts, stack, transfer,
};
use crate::ProcessorState;

/// A strongly-typed reference to an instruction's implementation.
#[derive(Clone, Copy)]
pub enum Handler {
    /// Needs no operand: implied instructions and accumulator shifts.
    Implied(fn(&mut ProcessorState)),

    /// Consumes an operand value, either the immediate byte or the byte read
    /// from the effective address. Reads pay the page-crossing penalty.
    Read(fn(&mut ProcessorState, u8)),

    /// Acts on an effective address: stores, read-modify-write and jumps.
    /// Cycle counts are fixed; no page-crossing penalty applies.
    Address(fn(&mut ProcessorState, u16)),

    /// Branch condition. Returns true if the branch is taken.
    Branch(fn(&ProcessorState) -> bool),
}

impl Handler {
    /// Returns true if this handler can be driven by `mode`.
    pub fn accepts(&self, mode: AddressingMode) -> bool {
        match self {
            Handler::Implied(_) => {
                matches!(mode, AddressingMode::Implied | AddressingMode::Accumulator)
            }
            Handler::Read(_) => {
                mode == AddressingMode::Immediate
                    || (mode.is_memory() && mode != AddressingMode::Indirect)
            }
            Handler::Address(_) => mode.is_memory(),
            Handler::Branch(_) => mode == AddressingMode::Relative,
        }
    }

    /// Runs the handler against a resolved operand.
    ///
    /// Returns the cycles to add on top of the base count, or `None` if the
    /// operand does not fit this handler's signature.
    pub(crate) fn execute(self, cpu: &mut ProcessorState, operand: Resolved) -> Option<u8> {
        match (self, operand) {
            (Handler::Implied(f), Resolved::None) => {
                f(cpu);
                Some(0)
            }
            (Handler::Read(f), Resolved::Value(value)) => {
                f(cpu, value);
                Some(0)
            }
            (Handler::Read(f), Resolved::Address { addr, page_crossed }) => {
                let value = cpu.memory.read(addr);
                f(cpu, value);
                Some(page_crossed as u8)
            }
            (Handler::Address(f), Resolved::Address { addr, .. }) => {
                f(cpu, addr);
                Some(0)
            }
            (
                Handler::Branch(condition),
                Resolved::Branch {
                    target,
                    page_crossed,
                },
            ) => {
                let taken = condition(cpu);
                Some(branches::take_branch(cpu, taken, target, page_crossed))
            }
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Handler::Implied(_) => "Implied",
            Handler::Read(_) => "Read",
            Handler::Address(_) => "Address",
            Handler::Branch(_) => "Branch",
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{}", self.kind())
    }
}

/// Immutable description of one defined opcode.
///
/// # Examples
///
/// ```
/// use sim6502::{lookup, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda = lookup(0xA9).unwrap();
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.mode, AddressingMode::Immediate);
/// assert_eq!(lda.base_cycles, 2);
/// assert_eq!(lda.size_bytes(), 2);
///
/// // Undocumented opcodes have no descriptor
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InstructionDescriptor {
    /// Instruction mnemonic (e.g., "LDA", "STA").
    pub mnemonic: &'static str,

    /// Addressing mode for this opcode.
    pub mode: AddressingMode,

    /// Documented minimum cycle cost, before page-crossing or branch penalties.
    pub base_cycles: u8,

    /// Implementation, typed by what it needs from the addressing stage.
    pub handler: Handler,
}

impl InstructionDescriptor {
    /// Total instruction length in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_len()
    }
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    base_cycles: u8,
    handler: Handler,
) -> Option<InstructionDescriptor> {
    Some(InstructionDescriptor {
        mnemonic,
        mode,
        base_cycles,
        handler,
    })
}

/// Returns the descriptor for `opcode`, or `None` if it is undocumented.
pub fn lookup(opcode: u8) -> Option<&'static InstructionDescriptor> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

use AddressingMode as Mode;
use Handler::{Address, Branch, Implied, Read};

/// Complete opcode table indexed by opcode byte value.
///
/// Built once at compile time and read-only thereafter.
pub static OPCODE_TABLE: [Option<InstructionDescriptor>; 256] = [
    op("BRK", Mode::Implied, 7, Implied(control::brk)), // 0x00
    op("ORA", Mode::IndexedIndirectX, 6, Read(logic::ora)), // 0x01
    None, // 0x02
    None, // 0x03
    None, // 0x04
    op("ORA", Mode::ZeroPage, 3, Read(logic::ora)), // 0x05
    op("ASL", Mode::ZeroPage, 5, Address(shifts::asl)), // 0x06
    None, // 0x07
    op("PHP", Mode::Implied, 3, Implied(stack::php)), // 0x08
    op("ORA", Mode::Immediate, 2, Read(logic::ora)), // 0x09
    op("ASL", Mode::Accumulator, 2, Implied(shifts::asl_accumulator)), // 0x0A
    None, // 0x0B
    None, // 0x0C
    op("ORA", Mode::Absolute, 4, Read(logic::ora)), // 0x0D
    op("ASL", Mode::Absolute, 6, Address(shifts::asl)), // 0x0E
    None, // 0x0F
    op("BPL", Mode::Relative, 2, Branch(branches::bpl)), // 0x10
    op("ORA", Mode::IndirectIndexedY, 5, Read(logic::ora)), // 0x11
    None, // 0x12
    None, // 0x13
    None, // 0x14
    op("ORA", Mode::ZeroPageX, 4, Read(logic::ora)), // 0x15
    op("ASL", Mode::ZeroPageX, 6, Address(shifts::asl)), // 0x16
    None, // 0x17
    op("CLC", Mode::Implied, 2, Implied(flags::clc)), // 0x18
    op("ORA", Mode::AbsoluteY, 4, Read(logic::ora)), // 0x19
    None, // 0x1A
    None, // 0x1B
    None, // 0x1C
    op("ORA", Mode::AbsoluteX, 4, Read(logic::ora)), // 0x1D
    op("ASL", Mode::AbsoluteX, 7, Address(shifts::asl)), // 0x1E
    None, // 0x1F
    op("JSR", Mode::Absolute, 6, Address(control::jsr)), // 0x20
    op("AND", Mode::IndexedIndirectX, 6, Read(logic::and)), // 0x21
    None, // 0x22
    None, // 0x23
    op("BIT", Mode::ZeroPage, 3, Read(logic::bit)), // 0x24
    op("AND", Mode::ZeroPage, 3, Read(logic::and)), // 0x25
    op("ROL", Mode::ZeroPage, 5, Address(shifts::rol)), // 0x26
    None, // 0x27
    op("PLP", Mode::Implied, 4, Implied(stack::plp)), // 0x28
    op("AND", Mode::Immediate, 2, Read(logic::and)), // 0x29
    op("ROL", Mode::Accumulator, 2, Implied(shifts::rol_accumulator)), // 0x2A
    None, // 0x2B
    op("BIT", Mode::Absolute, 4, Read(logic::bit)), // 0x2C
    op("AND", Mode::Absolute, 4, Read(logic::and)), // 0x2D
    op("ROL", Mode::Absolute, 6, Address(shifts::rol)), // 0x2E
    None, // 0x2F
    op("BMI", Mode::Relative, 2, Branch(branches::bmi)), // 0x30
    op("AND", Mode::IndirectIndexedY, 5, Read(logic::and)), // 0x31
    None, // 0x32
    None, // 0x33
    None, // 0x34
    op("AND", Mode::ZeroPageX, 4, Read(logic::and)), // 0x35
    op("ROL", Mode::ZeroPageX, 6, Address(shifts::rol)), // 0x36
    None, // 0x37
    op("SEC", Mode::Implied, 2, Implied(flags::sec)), // 0x38
    op("AND", Mode::AbsoluteY, 4, Read(logic::and)), // 0x39
    None, // 0x3A
    None, // 0x3B
    None, // 0x3C
    op("AND", Mode::AbsoluteX, 4, Read(logic::and)), // 0x3D
    op("ROL", Mode::AbsoluteX, 7, Address(shifts::rol)), // 0x3E
    None, // 0x3F
    op("RTI", Mode::Implied, 6, Implied(control::rti)), // 0x40
    op("EOR", Mode::IndexedIndirectX, 6, Read(logic::eor)), // 0x41
    None, // 0x42
    None, // 0x43
    None, // 0x44
    op("EOR", Mode::ZeroPage, 3, Read(logic::eor)), // 0x45
    op("LSR", Mode::ZeroPage, 5, Address(shifts::lsr)), // 0x46
    None, // 0x47
    op("PHA", Mode::Implied, 3, Implied(stack::pha)), // 0x48
    op("EOR", Mode::Immediate, 2, Read(logic::eor)), // 0x49
    op("LSR", Mode::Accumulator, 2, Implied(shifts::lsr_accumulator)), // 0x4A
    None, // 0x4B
    op("JMP", Mode::Absolute, 3, Address(control::jmp)), // 0x4C
    op("EOR", Mode::Absolute, 4, Read(logic::eor)), // 0x4D
    op("LSR", Mode::Absolute, 6, Address(shifts::lsr)), // 0x4E
    None, // 0x4F
    op("BVC", Mode::Relative, 2, Branch(branches::bvc)), // 0x50
    op("EOR", Mode::IndirectIndexedY, 5, Read(logic::eor)), // 0x51
    None, // 0x52
    None, // 0x53
    None, // 0x54
    op("EOR", Mode::ZeroPageX, 4, Read(logic::eor)), // 0x55
    op("LSR", Mode::ZeroPageX, 6, Address(shifts::lsr)), // 0x56
    None, // 0x57
    op("CLI", Mode::Implied, 2, Implied(flags::cli)), // 0x58
    op("EOR", Mode::AbsoluteY, 4, Read(logic::eor)), // 0x59
    None, // 0x5A
    None, // 0x5B
    None, // 0x5C
    op("EOR", Mode::AbsoluteX, 4, Read(logic::eor)), // 0x5D
    op("LSR", Mode::AbsoluteX, 7, Address(shifts::lsr)), // 0x5E
    None, // 0x5F
    op("RTS", Mode::Implied, 6, Implied(control::rts)), // 0x60
    op("ADC", Mode::IndexedIndirectX, 6, Read(arithmetic::adc)), // 0x61
    None, // 0x62
    None, // 0x63
    None, // 0x64
    op("ADC", Mode::ZeroPage, 3, Read(arithmetic::adc)), // 0x65
    op("ROR", Mode::ZeroPage, 5, Address(shifts::ror)), // 0x66
    None, // 0x67
    op("PLA", Mode::Implied, 4, Implied(stack::pla)), // 0x68
    op("ADC", Mode::Immediate, 2, Read(arithmetic::adc)), // 0x69
    op("ROR", Mode::Accumulator, 2, Implied(shifts::ror_accumulator)), // 0x6A
    None, // 0x6B
    op("JMP", Mode::Indirect, 5, Address(control::jmp)), // 0x6C
    op("ADC", Mode::Absolute, 4, Read(arithmetic::adc)), // 0x6D
    op("ROR", Mode::Absolute, 6, Address(shifts::ror)), // 0x6E
    None, // 0x6F
    op("BVS", Mode::Relative, 2, Branch(branches::bvs)), // 0x70
    op("ADC", Mode::IndirectIndexedY, 5, Read(arithmetic::adc)), // 0x71
    None, // 0x72
    None, // 0x73
    None, // 0x74
    op("ADC", Mode::ZeroPageX, 4, Read(arithmetic::adc)), // 0x75
    op("ROR", Mode::ZeroPageX, 6, Address(shifts::ror)), // 0x76
    None, // 0x77
    op("SEI", Mode::Implied, 2, Implied(flags::sei)), // 0x78
    op("ADC", Mode::AbsoluteY, 4, Read(arithmetic::adc)), // 0x79
    None, // 0x7A
    None, // 0x7B
    None, // 0x7C
    op("ADC", Mode::AbsoluteX, 4, Read(arithmetic::adc)), // 0x7D
    op("ROR", Mode::AbsoluteX, 7, Address(shifts::ror)), // 0x7E
    None, // 0x7F
    None, // 0x80
    op("STA", Mode::IndexedIndirectX, 6, Address(load_store::sta)), // 0x81
    None, // 0x82
    None, // 0x83
    op("STY", Mode::ZeroPage, 3, Address(load_store::sty)), // 0x84
    op("STA", Mode::ZeroPage, 3, Address(load_store::sta)), // 0x85
    op("STX", Mode::ZeroPage, 3, Address(load_store::stx)), // 0x86
    None, // 0x87
    op("DEY", Mode::Implied, 2, Implied(inc_dec::dey)), // 0x88
    None, // 0x89
    op("TXA", Mode::Implied, 2, Implied(transfer::txa)), // 0x8A
    None, // 0x8B
    op("STY", Mode::Absolute, 4, Address(load_store::sty)), // 0x8C
    op("STA", Mode::Absolute, 4, Address(load_store::sta)), // 0x8D
    op("STX", Mode::Absolute, 4, Address(load_store::stx)), // 0x8E
    None, // 0x8F
    op("BCC", Mode::Relative, 2, Branch(branches::bcc)), // 0x90
    op("STA", Mode::IndirectIndexedY, 6, Address(load_store::sta)), // 0x91
    None, // 0x92
    None, // 0x93
    op("STY", Mode::ZeroPageX, 4, Address(load_store::sty)), // 0x94
    op("STA", Mode::ZeroPageX, 4, Address(load_store::sta)), // 0x95
    op("STX", Mode::ZeroPageY, 4, Address(load_store::stx)), // 0x96
    None, // 0x97
    op("TYA", Mode::Implied, 2, Implied(transfer::tya)), // 0x98
    op("STA", Mode::AbsoluteY, 5, Address(load_store::sta)), // 0x99
    op("TXS", Mode::Implied, 2, Implied(transfer::txs)), // 0x9A
    None, // 0x9B
    None, // 0x9C
    op("STA", Mode::AbsoluteX, 5, Address(load_store::sta)), // 0x9D
    None, // 0x9E
    None, // 0x9F
    op("LDY", Mode::Immediate, 2, Read(load_store::ldy)), // 0xA0
    op("LDA", Mode::IndexedIndirectX, 6, Read(load_store::lda)), // 0xA1
    op("LDX", Mode::Immediate, 2, Read(load_store::ldx)), // 0xA2
    None, // 0xA3
    op("LDY", Mode::ZeroPage, 3, Read(load_store::ldy)), // 0xA4
    op("LDA", Mode::ZeroPage, 3, Read(load_store::lda)), // 0xA5
    op("LDX", Mode::ZeroPage, 3, Read(load_store::ldx)), // 0xA6
    None, // 0xA7
    op("TAY", Mode::Implied, 2, Implied(transfer::tay)), // 0xA8
    op("LDA", Mode::Immediate, 2, Read(load_store::lda)), // 0xA9
    op("TAX", Mode::Implied, 2, Implied(transfer::tax)), // 0xAA
    None, // 0xAB
    op("LDY", Mode::Absolute, 4, Read(load_store::ldy)), // 0xAC
    op("LDA", Mode::Absolute, 4, Read(load_store::lda)), // 0xAD
    op("LDX", Mode::Absolute, 4, Read(load_store::ldx)), // 0xAE
    None, // 0xAF
    op("BCS", Mode::Relative, 2, Branch(branches::bcs)), // 0xB0
    op("LDA", Mode::IndirectIndexedY, 5, Read(load_store::lda)), // 0xB1
    None, // 0xB2
    None, // 0xB3
    op("LDY", Mode::ZeroPageX, 4, Read(load_store::ldy)), // 0xB4
    op("LDA", Mode::ZeroPageX, 4, Read(load_store::lda)), // 0xB5
    op("LDX", Mode::ZeroPageY, 4, Read(load_store::ldx)), // 0xB6
    None, // 0xB7
    op("CLV", Mode::Implied, 2, Implied(flags::clv)), // 0xB8
    op("LDA", Mode::AbsoluteY, 4, Read(load_store::lda)), // 0xB9
    op("TSX", Mode::Implied, 2, Implied(transfer::tsx)), // 0xBA
    None, // 0xBB
    op("LDY", Mode::AbsoluteX, 4, Read(load_store::ldy)), // 0xBC
    op("LDA", Mode::AbsoluteX, 4, Read(load_store::lda)), // 0xBD
    op("LDX", Mode::AbsoluteY, 4, Read(load_store::ldx)), // 0xBE
    None, // 0xBF
    op("CPY", Mode::Immediate, 2, Read(arithmetic::cpy)), // 0xC0
    op("CMP", Mode::IndexedIndirectX, 6, Read(arithmetic::cmp)), // 0xC1
    None, // 0xC2
    None, // 0xC3
    op("CPY", Mode::ZeroPage, 3, Read(arithmetic::cpy)), // 0xC4
    op("CMP", Mode::ZeroPage, 3, Read(arithmetic::cmp)), // 0xC5
    op("DEC", Mode::ZeroPage, 5, Address(inc_dec::dec)), // 0xC6
    None, // 0xC7
    op("INY", Mode::Implied, 2, Implied(inc_dec::iny)), // 0xC8
    op("CMP", Mode::Immediate, 2, Read(arithmetic::cmp)), // 0xC9
    op("DEX", Mode::Implied, 2, Implied(inc_dec::dex)), // 0xCA
    None, // 0xCB
    op("CPY", Mode::Absolute, 4, Read(arithmetic::cpy)), // 0xCC
    op("CMP", Mode::Absolute, 4, Read(arithmetic::cmp)), // 0xCD
    op("DEC", Mode::Absolute, 6, Address(inc_dec::dec)), // 0xCE
    None, // 0xCF
    op("BNE", Mode::Relative, 2, Branch(branches::bne)), // 0xD0
    op("CMP", Mode::IndirectIndexedY, 5, Read(arithmetic::cmp)), // 0xD1
    None, // 0xD2
    None, // 0xD3
    None, // 0xD4
    op("CMP", Mode::ZeroPageX, 4, Read(arithmetic::cmp)), // 0xD5
    op("DEC", Mode::ZeroPageX, 6, Address(inc_dec::dec)), // 0xD6
    None, // 0xD7
    op("CLD", Mode::Implied, 2, Implied(flags::cld)), // 0xD8
    op("CMP", Mode::AbsoluteY, 4, Read(arithmetic::cmp)), // 0xD9
    None, // 0xDA
    None, // 0xDB
    None, // 0xDC
    op("CMP", Mode::AbsoluteX, 4, Read(arithmetic::cmp)), // 0xDD
    op("DEC", Mode::AbsoluteX, 7, Address(inc_dec::dec)), // 0xDE
    None, // 0xDF
    op("CPX", Mode::Immediate, 2, Read(arithmetic::cpx)), // 0xE0
    op("SBC", Mode::IndexedIndirectX, 6, Read(arithmetic::sbc)), // 0xE1
    None, // 0xE2
    None, // 0xE3
    op("CPX", Mode::ZeroPage, 3, Read(arithmetic::cpx)), // 0xE4
    op("SBC", Mode::ZeroPage, 3, Read(arithmetic::sbc)), // 0xE5
    op("INC", Mode::ZeroPage, 5, Address(inc_dec::inc)), // 0xE6
    None, // 0xE7
    op("INX", Mode::Implied, 2, Implied(inc_dec::inx)), // 0xE8
    op("SBC", Mode::Immediate, 2, Read(arithmetic::sbc)), // 0xE9
    op("NOP", Mode::Implied, 2, Implied(control::nop)), // 0xEA
    None, // 0xEB
    op("CPX", Mode::Absolute, 4, Read(arithmetic::cpx)), // 0xEC
    op("SBC", Mode::Absolute, 4, Read(arithmetic::sbc)), // 0xED
    op("INC", Mode::Absolute, 6, Address(inc_dec::inc)), // 0xEE
    None, // 0xEF
    op("BEQ", Mode::Relative, 2, Branch(branches::beq)), // 0xF0
    op("SBC", Mode::IndirectIndexedY, 5, Read(arithmetic::sbc)), // 0xF1
    None, // 0xF2
    None, // 0xF3
    None, // 0xF4
    op("SBC", Mode::ZeroPageX, 4, Read(arithmetic::sbc)), // 0xF5
    op("INC", Mode::ZeroPageX, 6, Address(inc_dec::inc)), // 0xF6
    None, // 0xF7
    op("SED", Mode::Implied, 2, Implied(flags::sed)), // 0xF8
    op("SBC", Mode::AbsoluteY, 4, Read(arithmetic::sbc)), // 0xF9
    None, // 0xFA
    None, // 0xFB
    None, // 0xFC
    op("SBC", Mode::AbsoluteX, 4, Read(arithmetic::sbc)), // 0xFD
    op("INC", Mode::AbsoluteX, 7, Address(inc_dec::inc)), // 0xFE
    None, // 0xFF
];
