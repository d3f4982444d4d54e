//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All except TXS update Z and N from the destination register.

use crate::alu;
use crate::ProcessorState;

pub(crate) fn tax(cpu: &mut ProcessorState) {
    cpu.x = alu::transfer(&mut cpu.sr, cpu.a);
}

pub(crate) fn tay(cpu: &mut ProcessorState) {
    cpu.y = alu::transfer(&mut cpu.sr, cpu.a);
}

pub(crate) fn txa(cpu: &mut ProcessorState) {
    cpu.a = alu::transfer(&mut cpu.sr, cpu.x);
}

pub(crate) fn tya(cpu: &mut ProcessorState) {
    cpu.a = alu::transfer(&mut cpu.sr, cpu.y);
}

/// TSX: copies SP into X and updates Z and N.
pub(crate) fn tsx(cpu: &mut ProcessorState) {
    cpu.x = alu::transfer(&mut cpu.sr, cpu.sp);
}

/// TXS: copies X into SP. Unlike the other transfers, no flag is touched.
pub(crate) fn txs(cpu: &mut ProcessorState) {
    cpu.sp = cpu.x;
}
