//! # Logical Instructions
//!
//! This module implements bitwise operations against the accumulator:
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test

use crate::alu;
use crate::ProcessorState;

/// AND: `A = A & value`. Updates Z and N.
pub(crate) fn and(cpu: &mut ProcessorState, value: u8) {
    cpu.a &= value;
    cpu.sr.set_zn(cpu.a);
}

/// ORA: `A = A | value`. Updates Z and N.
pub(crate) fn ora(cpu: &mut ProcessorState, value: u8) {
    cpu.a |= value;
    cpu.sr.set_zn(cpu.a);
}

/// EOR: `A = A ^ value`. Updates Z and N.
pub(crate) fn eor(cpu: &mut ProcessorState, value: u8) {
    cpu.a ^= value;
    cpu.sr.set_zn(cpu.a);
}

/// BIT: tests `value` against the accumulator without modifying it.
///
/// Only the zero page and absolute forms exist on the NMOS part.
///
/// # Flag Behavior
///
/// - Negative (N): Copied from bit 7 of `value`
/// - Overflow (V): Copied from bit 6 of `value`
/// - Zero (Z): Set if `value & A == 0`
pub(crate) fn bit(cpu: &mut ProcessorState, value: u8) {
    alu::bit_test(&mut cpu.sr, cpu.a, value);
}
