//! # 6502 Instruction Implementations
//!
//! Instruction handlers, organized by category. Each handler is a standalone
//! function taking the processor state plus whatever its addressing stage
//! produced (nothing, an operand value, an effective address, or nothing but
//! a branch condition). Handlers never advance PC past the instruction or
//! count cycles; the dispatcher in [`crate::cpu`] does both.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **logic**: AND, ORA, EOR, BIT
//! - **arithmetic**: ADC, SBC, CMP, CPX, CPY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod arithmetic;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod logic;
pub mod shifts;
pub mod stack;
pub mod transfer;
