//! # Status Register
//!
//! The 6502 packs its processor flags into a single byte (NV-BDIZC):
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Packed processor status register.
    ///
    /// Bit 5 is hard-wired high on real silicon. Every constructor in this
    /// crate keeps it set, and instruction handlers only ever insert or
    /// remove the named flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::Status;
    ///
    /// let sr = Status::power_on();
    /// assert_eq!(sr.bits(), 0b0010_0000);
    /// assert!(!sr.contains(Status::CARRY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Set if bit 7 of the last result is 1.
        const NEGATIVE = 0b1000_0000;
        /// Set on signed overflow.
        const OVERFLOW = 0b0100_0000;
        /// Unused bit, always reads as 1.
        const UNUSED = 0b0010_0000;
        /// Break. Only meaningful in copies of the status pushed to the stack.
        const BREAK = 0b0001_0000;
        /// Decimal mode (BCD arithmetic for ADC/SBC).
        const DECIMAL = 0b0000_1000;
        /// Interrupt disable.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Set if the last result is zero.
        const ZERO = 0b0000_0010;
        /// Set on unsigned overflow, or when no borrow occurred.
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// All flags clear except the always-set bit 5.
    pub const fn power_on() -> Self {
        Self::UNUSED
    }

    /// Builds a status register from a byte pulled off the stack.
    ///
    /// B is not a physical flag, so it is dropped; bit 5 is forced high.
    pub fn from_pulled(value: u8) -> Self {
        Self::from_bits_retain(value)
            .difference(Self::BREAK)
            .union(Self::UNUSED)
    }

    /// The byte PHP and BRK push: the live flags with B and bit 5 set.
    pub fn pushed(self) -> u8 {
        self.union(Self::BREAK | Self::UNUSED).bits()
    }

    /// Updates Z and N from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::power_on()
    }
}
