//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update Z and N from the loaded value. Stores affect no flags.

use crate::ProcessorState;

/// LDA: loads `value` into the accumulator.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn lda(cpu: &mut ProcessorState, value: u8) {
    cpu.a = value;
    cpu.sr.set_zn(value);
}

/// LDX: loads `value` into X. Flags as for LDA.
pub(crate) fn ldx(cpu: &mut ProcessorState, value: u8) {
    cpu.x = value;
    cpu.sr.set_zn(value);
}

/// LDY: loads `value` into Y. Flags as for LDA.
pub(crate) fn ldy(cpu: &mut ProcessorState, value: u8) {
    cpu.y = value;
    cpu.sr.set_zn(value);
}

/// STA: stores the accumulator at `addr`.
pub(crate) fn sta(cpu: &mut ProcessorState, addr: u16) {
    cpu.memory.write(addr, cpu.a);
}

pub(crate) fn stx(cpu: &mut ProcessorState, addr: u16) {
    cpu.memory.write(addr, cpu.x);
}

pub(crate) fn sty(cpu: &mut ProcessorState, addr: u16) {
    cpu.memory.write(addr, cpu.y);
}
