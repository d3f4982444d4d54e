//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX, INY: Increment X / Y
//! - DEX, DEY: Decrement X / Y
//!
//! All wrap modulo 256 and update Z and N. Carry is never touched.

use crate::alu;
use crate::ProcessorState;

/// INC: adds one to the value held at `addr`.
pub(crate) fn inc(cpu: &mut ProcessorState, addr: u16) {
    let value = cpu.memory.read(addr);
    let result = alu::increment(&mut cpu.sr, value);
    cpu.memory.write(addr, result);
}

/// DEC: subtracts one from the value held at `addr`.
pub(crate) fn dec(cpu: &mut ProcessorState, addr: u16) {
    let value = cpu.memory.read(addr);
    let result = alu::decrement(&mut cpu.sr, value);
    cpu.memory.write(addr, result);
}

pub(crate) fn inx(cpu: &mut ProcessorState) {
    cpu.x = alu::increment(&mut cpu.sr, cpu.x);
}

pub(crate) fn iny(cpu: &mut ProcessorState) {
    cpu.y = alu::increment(&mut cpu.sr, cpu.y);
}

pub(crate) fn dex(cpu: &mut ProcessorState) {
    cpu.x = alu::decrement(&mut cpu.sr, cpu.x);
}

pub(crate) fn dey(cpu: &mut ProcessorState) {
    cpu.y = alu::decrement(&mut cpu.sr, cpu.y);
}
