//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BNE / BEQ: Branch if Not Equal / Equal (Z)
//! - BPL / BMI: Branch if Plus / Minus (N)
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! Each branch is just a condition on the status register; the shared
//! [`take_branch`] moves PC and works out the timing. No flags are affected.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::{ProcessorState, Status};

/// Applies a resolved branch and returns the cycles to add to the base 2.
///
/// `target` and `page_crossed` come from relative addressing, measured from
/// the address of the next instruction (PC after the operand fetch).
pub(crate) fn take_branch(
    cpu: &mut ProcessorState,
    taken: bool,
    target: u16,
    page_crossed: bool,
) -> u8 {
    if !taken {
        return 0;
    }

    cpu.pc = target;
    if page_crossed {
        2
    } else {
        1
    }
}

pub(crate) fn bcc(cpu: &ProcessorState) -> bool {
    !cpu.sr.contains(Status::CARRY)
}

pub(crate) fn bcs(cpu: &ProcessorState) -> bool {
    cpu.sr.contains(Status::CARRY)
}

pub(crate) fn bne(cpu: &ProcessorState) -> bool {
    !cpu.sr.contains(Status::ZERO)
}

pub(crate) fn beq(cpu: &ProcessorState) -> bool {
    cpu.sr.contains(Status::ZERO)
}

pub(crate) fn bpl(cpu: &ProcessorState) -> bool {
    !cpu.sr.contains(Status::NEGATIVE)
}

pub(crate) fn bmi(cpu: &ProcessorState) -> bool {
    cpu.sr.contains(Status::NEGATIVE)
}

pub(crate) fn bvc(cpu: &ProcessorState) -> bool {
    !cpu.sr.contains(Status::OVERFLOW)
}

pub(crate) fn bvs(cpu: &ProcessorState) -> bool {
    cpu.sr.contains(Status::OVERFLOW)
}
