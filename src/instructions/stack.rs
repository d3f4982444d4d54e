//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives at 0x0100-0x01FF and grows downward. SP wraps modulo
//! 256 with no overflow or underflow detection, exactly like the hardware.

use crate::{ProcessorState, Status};

/// PHA: writes A to 0x0100 | SP, then decrements SP. Flags: none.
pub(crate) fn pha(cpu: &mut ProcessorState) {
    cpu.push(cpu.a);
}

/// PHP: pushes the status register with B and bit 5 set.
pub(crate) fn php(cpu: &mut ProcessorState) {
    cpu.push(cpu.sr.pushed());
}

/// PLA: increments SP, loads A from the stack. Updates Z and N.
pub(crate) fn pla(cpu: &mut ProcessorState) {
    cpu.a = cpu.pull();
    cpu.sr.set_zn(cpu.a);
}

/// PLP: pulls the status register. B is ignored and bit 5 stays set.
pub(crate) fn plp(cpu: &mut ProcessorState) {
    let value = cpu.pull();
    cpu.sr = Status::from_pulled(value);
}
