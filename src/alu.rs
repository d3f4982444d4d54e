//! # Flag/ALU Primitives
//!
//! Shared arithmetic and flag-update routines used by several instruction
//! handlers. Each primitive takes the status register and its input
//! operands, updates the flags it documents, and returns the 8-bit result
//! (if any). None of them can fail: every computation wraps.

use crate::Status;

/// Add with carry: `A + operand + C`.
///
/// In binary mode:
/// - C: set if the unsigned sum exceeds 255
/// - Z, N: from the 8-bit result
/// - V: set if both inputs share a sign and the result's sign differs,
///   i.e. `(A ^ result) & (operand ^ result) & 0x80 != 0`
///
/// With D set both inputs are packed BCD. The result is re-normalized to
/// valid BCD digits, C reports a decimal carry out of the high digit, Z and
/// N reflect the corrected result and V is derived from the binary sum.
///
/// # Examples
///
/// ```
/// use sim6502::{alu, Status};
///
/// let mut sr = Status::power_on();
/// assert_eq!(alu::add_with_carry(&mut sr, 0x50, 0x50), 0xA0);
/// assert!(sr.contains(Status::OVERFLOW));
///
/// sr.insert(Status::DECIMAL);
/// sr.remove(Status::CARRY);
/// assert_eq!(alu::add_with_carry(&mut sr, 0x59, 0x01), 0x60);
/// ```
pub fn add_with_carry(sr: &mut Status, a: u8, operand: u8) -> u8 {
    let carry_in = sr.contains(Status::CARRY) as u8;
    let sum = a as u16 + operand as u16 + carry_in as u16;
    let binary = sum as u8;

    sr.set(
        Status::OVERFLOW,
        (a ^ binary) & (operand ^ binary) & 0x80 != 0,
    );

    if sr.contains(Status::DECIMAL) {
        let (result, carry) = decimal_add(a, operand, carry_in);
        sr.set(Status::CARRY, carry);
        sr.set_zn(result);
        return result;
    }

    sr.set(Status::CARRY, sum > 0xFF);
    sr.set_zn(binary);
    binary
}

/// Subtract with carry: `A - operand - (1 - C)`.
///
/// Computed as `A + !operand + C`, so C, Z, N and V follow the same
/// derivation as [`add_with_carry`]; C set afterwards means no borrow
/// occurred. With D set the result is corrected back to packed BCD.
pub fn subtract_with_carry(sr: &mut Status, a: u8, operand: u8) -> u8 {
    if !sr.contains(Status::DECIMAL) {
        return add_with_carry(sr, a, !operand);
    }

    let carry_in = sr.contains(Status::CARRY) as u8;
    let sum = a as u16 + (!operand) as u16 + carry_in as u16;
    let binary = sum as u8;

    sr.set(
        Status::OVERFLOW,
        (a ^ binary) & (!operand ^ binary) & 0x80 != 0,
    );
    sr.set(Status::CARRY, sum > 0xFF);

    let result = decimal_sub(a, operand, carry_in);
    sr.set_zn(result);
    result
}

/// Packed-BCD addition. Returns the corrected result and the decimal carry.
fn decimal_add(a: u8, operand: u8, carry_in: u8) -> (u8, bool) {
    let mut lo = (a & 0x0F) + (operand & 0x0F) + carry_in;
    let mut hi = (a >> 4) + (operand >> 4);

    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }
    if hi > 0x09 {
        hi += 0x06;
    }

    ((hi << 4) | (lo & 0x0F), hi > 0x0F)
}

/// Packed-BCD subtraction with borrow `1 - carry_in`.
fn decimal_sub(a: u8, operand: u8, carry_in: u8) -> u8 {
    let mut lo = (a & 0x0F) as i16 - (operand & 0x0F) as i16 - (1 - carry_in as i16);
    let mut hi = (a >> 4) as i16 - (operand >> 4) as i16;

    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8
}

/// Converts a packed-BCD byte (e.g. `0x59`) to its decimal value (59).
///
/// Nibbles above 9 are taken at face value.
pub const fn bcd_to_decimal(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Converts a decimal value in 0..=99 to packed BCD (59 becomes `0x59`).
pub const fn decimal_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Compare (CMP/CPX/CPY): `register - operand` without storing the result.
///
/// - C: set if `operand <= register` (unsigned)
/// - Z: set if equal
/// - N: bit 7 of the wrapped difference
pub fn compare(sr: &mut Status, register: u8, operand: u8) {
    let diff = register.wrapping_sub(operand);
    sr.set(Status::CARRY, register >= operand);
    sr.set_zn(diff);
}

/// ASL: shift left, bit 7 into C, 0 into bit 0.
pub fn shift_left(sr: &mut Status, value: u8) -> u8 {
    let result = value << 1;
    sr.set(Status::CARRY, value & 0x80 != 0);
    sr.set_zn(result);
    result
}

/// LSR: shift right, bit 0 into C, 0 into bit 7.
pub fn shift_right(sr: &mut Status, value: u8) -> u8 {
    let result = value >> 1;
    sr.set(Status::CARRY, value & 0x01 != 0);
    sr.set_zn(result);
    result
}

/// ROL: rotate left through carry.
pub fn rotate_left(sr: &mut Status, value: u8) -> u8 {
    let carry_in = sr.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;
    sr.set(Status::CARRY, value & 0x80 != 0);
    sr.set_zn(result);
    result
}

/// ROR: rotate right through carry.
pub fn rotate_right(sr: &mut Status, value: u8) -> u8 {
    let carry_in = sr.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);
    sr.set(Status::CARRY, value & 0x01 != 0);
    sr.set_zn(result);
    result
}

/// Increment with 8-bit wraparound. Updates N/Z, never C.
pub fn increment(sr: &mut Status, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    sr.set_zn(result);
    result
}

/// Decrement with 8-bit wraparound. Updates N/Z, never C.
pub fn decrement(sr: &mut Status, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    sr.set_zn(result);
    result
}

/// BIT: N and V copied from bits 7 and 6 of the operand, Z set if
/// `operand & A == 0`. The accumulator is not modified.
pub fn bit_test(sr: &mut Status, a: u8, operand: u8) {
    sr.set(Status::NEGATIVE, operand & 0x80 != 0);
    sr.set(Status::OVERFLOW, operand & 0x40 != 0);
    sr.set(Status::ZERO, operand & a == 0);
}

/// Register transfer: returns `value` for the destination and updates N/Z
/// from it. TXS does not go through here since it touches no flag.
pub fn transfer(sr: &mut Status, value: u8) -> u8 {
    sr.set_zn(value);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(flags: Status) -> Status {
        Status::power_on() | flags
    }

    #[test]
    fn test_adc_binary_flags() {
        let mut sr = status(Status::empty());
        assert_eq!(add_with_carry(&mut sr, 0x01, 0xFF), 0x00);
        assert!(sr.contains(Status::CARRY));
        assert!(sr.contains(Status::ZERO));
        assert!(!sr.contains(Status::OVERFLOW));

        let mut sr = status(Status::CARRY);
        assert_eq!(add_with_carry(&mut sr, 0x10, 0x05), 0x16);
        assert!(!sr.contains(Status::CARRY));
    }

    #[test]
    fn test_adc_overflow_uses_both_operands() {
        // 0x10 + 0x80 = 0x90: the result's sign differs from A, but the
        // operands had different signs so this is not an overflow
        let mut sr = status(Status::empty());
        assert_eq!(add_with_carry(&mut sr, 0x10, 0x80), 0x90);
        assert!(!sr.contains(Status::OVERFLOW));

        // 0x80 + 0x80 = 0x00 with carry: negative + negative = positive
        let mut sr = status(Status::empty());
        assert_eq!(add_with_carry(&mut sr, 0x80, 0x80), 0x00);
        assert!(sr.contains(Status::OVERFLOW));
        assert!(sr.contains(Status::CARRY));
    }

    #[test]
    fn test_adc_decimal() {
        let mut sr = status(Status::DECIMAL);
        assert_eq!(add_with_carry(&mut sr, 0x59, 0x01), 0x60);
        assert!(!sr.contains(Status::CARRY));

        let mut sr = status(Status::DECIMAL);
        assert_eq!(add_with_carry(&mut sr, 0x99, 0x01), 0x00);
        assert!(sr.contains(Status::CARRY));
        assert!(sr.contains(Status::ZERO));

        let mut sr = status(Status::DECIMAL | Status::CARRY);
        assert_eq!(add_with_carry(&mut sr, 0x25, 0x48), 0x74);
        assert!(!sr.contains(Status::CARRY));
    }

    #[test]
    fn test_sbc_binary() {
        let mut sr = status(Status::CARRY);
        assert_eq!(subtract_with_carry(&mut sr, 0x50, 0x30), 0x20);
        assert!(sr.contains(Status::CARRY));

        let mut sr = status(Status::CARRY);
        assert_eq!(subtract_with_carry(&mut sr, 0x00, 0x01), 0xFF);
        assert!(!sr.contains(Status::CARRY));
        assert!(sr.contains(Status::NEGATIVE));

        // 0x80 - 0x01 = 0x7F: negative - positive = positive, overflow
        let mut sr = status(Status::CARRY);
        assert_eq!(subtract_with_carry(&mut sr, 0x80, 0x01), 0x7F);
        assert!(sr.contains(Status::OVERFLOW));
    }

    #[test]
    fn test_sbc_decimal() {
        let mut sr = status(Status::DECIMAL | Status::CARRY);
        assert_eq!(subtract_with_carry(&mut sr, 0x50, 0x01), 0x49);
        assert!(sr.contains(Status::CARRY));

        let mut sr = status(Status::DECIMAL | Status::CARRY);
        assert_eq!(subtract_with_carry(&mut sr, 0x00, 0x01), 0x99);
        assert!(!sr.contains(Status::CARRY));

        // Borrow in: 0x42 - 0x12 - 1 = 0x29
        let mut sr = status(Status::DECIMAL);
        assert_eq!(subtract_with_carry(&mut sr, 0x42, 0x12), 0x29);
        assert!(sr.contains(Status::CARRY));
    }

    #[test]
    fn test_bcd_conversions() {
        assert_eq!(bcd_to_decimal(0x59), 59);
        assert_eq!(bcd_to_decimal(0x00), 0);
        assert_eq!(decimal_to_bcd(59), 0x59);
        assert_eq!(decimal_to_bcd(99), 0x99);
        for n in 0..=99 {
            assert_eq!(bcd_to_decimal(decimal_to_bcd(n)), n);
        }
    }

    #[test]
    fn test_compare() {
        let mut sr = status(Status::empty());
        compare(&mut sr, 0x20, 0x20);
        assert!(sr.contains(Status::ZERO | Status::CARRY));
        assert!(!sr.contains(Status::NEGATIVE));

        compare(&mut sr, 0x20, 0x21);
        assert!(!sr.contains(Status::ZERO));
        assert!(!sr.contains(Status::CARRY));
        assert!(sr.contains(Status::NEGATIVE));

        compare(&mut sr, 0x20, 0x19);
        assert!(!sr.contains(Status::ZERO));
        assert!(sr.contains(Status::CARRY));
        assert!(!sr.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_shifts_and_rotates() {
        let mut sr = status(Status::empty());
        assert_eq!(shift_left(&mut sr, 0x81), 0x02);
        assert!(sr.contains(Status::CARRY));

        assert_eq!(shift_right(&mut sr, 0x01), 0x00);
        assert!(sr.contains(Status::CARRY));
        assert!(sr.contains(Status::ZERO));

        // C=1 feeds into bit 0
        assert_eq!(rotate_left(&mut sr, 0x40), 0x81);
        assert!(!sr.contains(Status::CARRY));
        assert!(sr.contains(Status::NEGATIVE));

        sr.insert(Status::CARRY);
        assert_eq!(rotate_right(&mut sr, 0x02), 0x81);
        assert!(!sr.contains(Status::CARRY));
    }

    #[test]
    fn test_inc_dec_leave_carry_alone() {
        let mut sr = status(Status::CARRY);
        assert_eq!(increment(&mut sr, 0xFF), 0x00);
        assert!(sr.contains(Status::ZERO));
        assert!(sr.contains(Status::CARRY));

        let mut sr = status(Status::empty());
        assert_eq!(decrement(&mut sr, 0x00), 0xFF);
        assert!(sr.contains(Status::NEGATIVE));
        assert!(!sr.contains(Status::CARRY));
    }

    #[test]
    fn test_bit_test() {
        let mut sr = status(Status::empty());
        bit_test(&mut sr, 0x01, 0xC0);
        assert!(sr.contains(Status::NEGATIVE));
        assert!(sr.contains(Status::OVERFLOW));
        assert!(sr.contains(Status::ZERO));

        bit_test(&mut sr, 0x01, 0x01);
        assert!(!sr.contains(Status::NEGATIVE));
        assert!(!sr.contains(Status::OVERFLOW));
        assert!(!sr.contains(Status::ZERO));
    }
}
