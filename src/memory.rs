//! # Memory Image
//!
//! The simulated machine sees a single linear 64KB address space with no
//! banking and no memory-mapped devices. Conceptually it is 256 pages of 256
//! bytes:
//!
//! - Page 0 (0x0000-0x00FF): zero page, used by the compact addressing modes
//! - Page 1 (0x0100-0x01FF): hardware stack
//!
//! ## Design Principles
//!
//! - No bus errors: every 16-bit address is mapped, reads and writes always succeed
//! - One flat representation: `page`/`offset` are helpers over the flat index,
//!   never a second storage layout

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Returns the page number (high byte) of an address.
#[inline]
pub const fn page(addr: u16) -> u8 {
    (addr >> 8) as u8
}

/// Returns the offset of an address within its page (low byte).
#[inline]
pub const fn offset(addr: u16) -> u8 {
    addr as u8
}

/// Flat 64KB memory image.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use sim6502::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.read_u16(0x1234), 0x0042);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a memory image with every byte zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Reads a byte from the specified 16-bit address.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes a byte to the specified 16-bit address.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian word; the high byte comes from `addr + 1`
    /// with 16-bit wraparound.
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian pointer stored in the zero page.
    ///
    /// The high byte is fetched from `(zp + 1) mod 256`, so a pointer at
    /// $FF takes its high byte from $00 rather than $0100.
    pub fn read_zero_page_u16(&self, zp: u8) -> u16 {
        let lo = self.read(zp as u16) as u16;
        let hi = self.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Copies `bytes` into memory starting at `base`.
    ///
    /// Writes past 0xFFFF wrap around to 0x0000. Existing contents are
    /// overwritten without any overlap checks.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Returns the whole image as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_bytes", &used)
            .finish()
    }
}
