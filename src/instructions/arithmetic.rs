//! # Arithmetic and Compare Instructions
//!
//! This module implements:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - CMP: Compare Accumulator
//! - CPX: Compare X Register
//! - CPY: Compare Y Register
//!
//! ADC and SBC honour the decimal flag; see [`crate::alu::add_with_carry`].

use crate::alu;
use crate::ProcessorState;

/// ADC: `A = A + value + C`.
///
/// # Flag Behavior
///
/// - Carry (C): Set on unsigned overflow (or decimal carry in BCD mode)
/// - Zero (Z): Set if the result is 0
/// - Overflow (V): Set on signed overflow
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn adc(cpu: &mut ProcessorState, value: u8) {
    cpu.a = alu::add_with_carry(&mut cpu.sr, cpu.a, value);
}

/// SBC: `A = A - value - (1 - C)`. Flags as for ADC; C clear means a
/// borrow occurred.
pub(crate) fn sbc(cpu: &mut ProcessorState, value: u8) {
    cpu.a = alu::subtract_with_carry(&mut cpu.sr, cpu.a, value);
}

/// CMP: compares the accumulator with `value`.
pub(crate) fn cmp(cpu: &mut ProcessorState, value: u8) {
    alu::compare(&mut cpu.sr, cpu.a, value);
}

pub(crate) fn cpx(cpu: &mut ProcessorState, value: u8) {
    alu::compare(&mut cpu.sr, cpu.x, value);
}

pub(crate) fn cpy(cpu: &mut ProcessorState, value: u8) {
    alu::compare(&mut cpu.sr, cpu.y, value);
}
