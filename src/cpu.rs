//! # Processor State and Execution
//!
//! This module contains [`ProcessorState`], the single mutable entity of the
//! simulator, and the fetch-decode-execute step that drives it.
//!
//! ## Processor State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit, advanced by every byte fetched during decode
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register** (SR): packed NV-BDIZC flags, bit 5 always set
//! - **Memory**: flat 64KB image
//! - **Cycle counter**: u64 running total of cycles reported by `step`
//!
//! ## Execution Model
//!
//! - `step()`: fetch, decode and execute one instruction, returning its cycle cost
//! - `run_for_cycles()`: execute whole instructions until a cycle budget is spent
//!
//! Execution is fully synchronous. Converting cycles into wall-clock delays
//! is left to the caller (see [`crate::Clock`]).

use log::{debug, trace, warn};

use crate::addressing;
use crate::disassembler::Instruction;
use crate::memory::STACK_BASE;
use crate::opcodes::lookup;
use crate::{DecodeError, Memory, Status};

/// Complete state of a simulated 6502.
///
/// Fields are public: the driver loads programs and inspects results by
/// touching them directly. Instruction handlers only ever mutate the
/// registers, flags and the memory cells their instruction names.
///
/// # Examples
///
/// ```
/// use sim6502::ProcessorState;
///
/// let mut cpu = ProcessorState::new();
/// cpu.load(0x4000, &[0xA9, 0x42]); // LDA #$42
/// cpu.pc = 0x4000;
///
/// let cycles = cpu.step().unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a, 0x42);
/// assert_eq!(cpu.pc, 0x4002);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessorState {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Status register
    pub sr: Status,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// 64KB memory image
    pub memory: Memory,

    /// Total cycles reported by `step` since the last reset
    pub cycles: u64,
}

impl ProcessorState {
    /// Creates a processor in the reset state.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sr: Status::power_on(),
            sp: 0xFF,
            pc: 0x0000,
            memory: Memory::new(),
            cycles: 0,
        }
    }

    /// Reinitializes every register and flag and zeroes all memory.
    ///
    /// - A, X, Y = 0
    /// - SP = 0xFF
    /// - SR = 0x20 (all flags clear, bit 5 set)
    /// - PC = 0x0000
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sr = Status::power_on();
        self.sp = 0xFF;
        self.pc = 0x0000;
        self.memory.clear();
        self.cycles = 0;
        debug!("processor reset");
    }

    /// Writes `bytes` into memory starting at `base`.
    ///
    /// No overlap check is made against existing content and PC is left
    /// untouched; the caller points PC at the entry point.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        self.memory.load(base, bytes);
        debug!("loaded {} bytes at ${:04X}", bytes.len(), base);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC (PC advances)
    /// 2. Look it up in the opcode table
    /// 3. Fetch 0, 1 or 2 operand bytes for its addressing mode (PC advances)
    /// 4. Resolve the operand to a value or effective address
    /// 5. Run the handler
    ///
    /// The returned count is the descriptor's base cycles plus any
    /// page-crossing or branch-taken penalty; it is also added to
    /// [`cycles`](Self::cycles).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnimplementedOpcode`] if the opcode has no descriptor.
    ///   PC has advanced past the opcode byte and nothing else changed.
    /// - [`DecodeError::UnresolvedAddressingMode`] if a descriptor pairs a
    ///   handler with a mode it cannot accept. Never produced by the built-in
    ///   table.
    pub fn step(&mut self) -> Result<u8, DecodeError> {
        let address = self.pc;
        let opcode = self.fetch_u8();

        let descriptor = lookup(opcode).ok_or_else(|| {
            warn!("unimplemented opcode ${:02X} at ${:04X}", opcode, address);
            DecodeError::UnimplementedOpcode {
                opcode,
                pc: address,
            }
        })?;

        if !descriptor.handler.accepts(descriptor.mode) {
            return Err(DecodeError::UnresolvedAddressingMode {
                opcode,
                mode: descriptor.mode,
            });
        }

        let operand = match descriptor.mode.operand_len() {
            0 => 0,
            1 => self.fetch_u8() as u16,
            _ => self.fetch_u16(),
        };

        let resolved = addressing::resolve(self, descriptor.mode, operand);
        let penalty = descriptor.handler.execute(self, resolved).ok_or(
            DecodeError::UnresolvedAddressingMode {
                opcode,
                mode: descriptor.mode,
            },
        )?;

        let cycles = descriptor.base_cycles + penalty;
        self.cycles += cycles as u64;

        if log::log_enabled!(log::Level::Trace) {
            let instruction = Instruction::new(address, opcode, descriptor, operand);
            trace!("${:04X}  {}  ({} cycles)", address, instruction, cycles);
        }

        Ok(cycles)
    }

    /// Runs whole instructions until at least `cycle_budget` cycles elapse.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget
    /// by up to one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::ProcessorState;
    ///
    /// let mut cpu = ProcessorState::new();
    /// cpu.load(0x4000, &[0xEA; 16]); // NOPs, 2 cycles each
    /// cpu.pc = 0x4000;
    ///
    /// assert_eq!(cpu.run_for_cycles(9).unwrap(), 10);
    /// assert_eq!(cpu.pc, 0x4005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, DecodeError> {
        let mut consumed = 0;

        while consumed < cycle_budget {
            consumed += self.step()? as u64;
        }

        Ok(consumed)
    }

    /// Returns the status register as a packed byte (bit 5 always set).
    pub fn status(&self) -> u8 {
        (self.sr | Status::UNUSED).bits()
    }

    /// Replaces the status register from a packed byte.
    ///
    /// Bit 5 is forced on and B is ignored, as when the byte is pulled by
    /// PLP or RTI.
    pub fn set_status(&mut self, value: u8) {
        self.sr = Status::from_pulled(value);
    }

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.sr.contains(flag)
    }

    /// Sets or clears `flag`. Bit 5 cannot be cleared.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.sr.set(flag, value);
        self.sr.insert(Status::UNUSED);
    }

    // ========== Instruction Stream ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_u8(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_u16(&mut self) -> u16 {
        let lo = self.fetch_u8() as u16;
        let hi = self.fetch_u8() as u16;
        (hi << 8) | lo
    }

    // ========== Stack ==========

    /// Writes `value` to `0x0100 + SP`, then decrements SP (wrapping).
    pub fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads `0x0100 + SP`.
    pub fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian in memory.
    pub fn push_u16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word low byte first.
    pub fn pull_u16(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }
}

impl Default for ProcessorState {
    fn default() -> Self {
        Self::new()
    }
}
