//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / Set Carry
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLV: Clear Overflow
//!
//! These instructions use implied addressing and execute in 2 cycles.
//! Each touches exactly one flag.

use crate::{ProcessorState, Status};

pub(crate) fn clc(cpu: &mut ProcessorState) {
    cpu.sr.remove(Status::CARRY);
}

pub(crate) fn sec(cpu: &mut ProcessorState) {
    cpu.sr.insert(Status::CARRY);
}

pub(crate) fn cli(cpu: &mut ProcessorState) {
    cpu.sr.remove(Status::INTERRUPT_DISABLE);
}

pub(crate) fn sei(cpu: &mut ProcessorState) {
    cpu.sr.insert(Status::INTERRUPT_DISABLE);
}

pub(crate) fn cld(cpu: &mut ProcessorState) {
    cpu.sr.remove(Status::DECIMAL);
}

pub(crate) fn sed(cpu: &mut ProcessorState) {
    cpu.sr.insert(Status::DECIMAL);
}

/// CLV. There is no SEV; V is only set by ADC, SBC, BIT, PLP and RTI.
pub(crate) fn clv(cpu: &mut ProcessorState) {
    cpu.sr.remove(Status::OVERFLOW);
}
