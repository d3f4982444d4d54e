//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Break
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! JSR/RTS split the return address across two stack bytes, high byte pushed
//! first, so RTS pulls the low byte first.

use crate::{ProcessorState, Status};

/// Vector BRK loads PC from (low byte at $FFFE, high byte at $FFFF).
const BRK_VECTOR: u16 = 0xFFFE;

/// JMP: sets PC to `addr`.
///
/// For JMP ($nnnn) the resolver has already dereferenced the pointer. No
/// flags or stack are affected.
pub(crate) fn jmp(cpu: &mut ProcessorState, addr: u16) {
    cpu.pc = addr;
}

/// JSR: pushes the return address minus one, then jumps to `addr`.
///
/// On entry PC already points past the 3-byte JSR, so the pushed word is
/// the address of JSR's last byte. RTS adds the one back.
pub(crate) fn jsr(cpu: &mut ProcessorState, addr: u16) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_address);
    cpu.pc = addr;
}

/// RTS: pulls the return address (low byte, then high) and resumes after it.
pub(crate) fn rts(cpu: &mut ProcessorState) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
}

/// BRK: software break.
///
/// 1. Pushes PC+1 (high byte, then low): BRK's second byte is padding
/// 2. Pushes the status register with B and bit 5 set
/// 3. Sets the I (interrupt disable) flag
/// 4. Loads PC from the vector at $FFFE/$FFFF (little-endian)
///
/// The live B flag is not changed; only the pushed copy carries it.
pub(crate) fn brk(cpu: &mut ProcessorState) {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_u16(return_address);
    cpu.push(cpu.sr.pushed());
    cpu.sr.insert(Status::INTERRUPT_DISABLE);
    cpu.pc = cpu.memory.read_u16(BRK_VECTOR);
}

/// RTI: pulls the status register (B ignored, bit 5 forced), then PC.
///
/// Unlike RTS the pulled PC is used as-is.
pub(crate) fn rti(cpu: &mut ProcessorState) {
    let status = cpu.pull();
    cpu.sr = Status::from_pulled(status);
    cpu.pc = cpu.pull_u16();
}

pub(crate) fn nop(_cpu: &mut ProcessorState) {}
