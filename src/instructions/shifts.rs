//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each exists in an accumulator form and a read-modify-write memory form.
//! C receives the bit shifted out; Z and N reflect the result.

use crate::alu;
use crate::{ProcessorState, Status};

/// Reads `addr`, applies `op`, writes the result back.
fn modify(cpu: &mut ProcessorState, addr: u16, op: fn(&mut Status, u8) -> u8) {
    let value = cpu.memory.read(addr);
    let result = op(&mut cpu.sr, value);
    cpu.memory.write(addr, result);
}

/// ASL A
pub(crate) fn asl_accumulator(cpu: &mut ProcessorState) {
    cpu.a = alu::shift_left(&mut cpu.sr, cpu.a);
}

/// ASL on memory: bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn asl(cpu: &mut ProcessorState, addr: u16) {
    modify(cpu, addr, alu::shift_left);
}

/// LSR A
pub(crate) fn lsr_accumulator(cpu: &mut ProcessorState) {
    cpu.a = alu::shift_right(&mut cpu.sr, cpu.a);
}

/// LSR on memory: bit 0 goes to C, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn lsr(cpu: &mut ProcessorState, addr: u16) {
    modify(cpu, addr, alu::shift_right);
}

/// ROL A
pub(crate) fn rol_accumulator(cpu: &mut ProcessorState) {
    cpu.a = alu::rotate_left(&mut cpu.sr, cpu.a);
}

/// ROL on memory: the old C enters bit 0, bit 7 goes to C.
pub(crate) fn rol(cpu: &mut ProcessorState, addr: u16) {
    modify(cpu, addr, alu::rotate_left);
}

/// ROR A
pub(crate) fn ror_accumulator(cpu: &mut ProcessorState) {
    cpu.a = alu::rotate_right(&mut cpu.sr, cpu.a);
}

/// ROR on memory: the old C enters bit 7, bit 0 goes to C.
pub(crate) fn ror(cpu: &mut ProcessorState, addr: u16) {
    modify(cpu, addr, alu::rotate_right);
}
