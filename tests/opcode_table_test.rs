//! Integration tests for the opcode table.

use sim6502::{lookup, AddressingMode, Handler, OPCODE_TABLE};

#[test]
fn test_table_has_256_entries() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_documented_opcode_count() {
    let defined = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
    assert_eq!(defined, 151);
}

#[test]
fn test_mnemonic_count() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE
        .iter()
        .flatten()
        .map(|d| d.mnemonic)
        .collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_every_descriptor_is_dispatchable() {
    for (opcode, descriptor) in OPCODE_TABLE.iter().enumerate() {
        if let Some(d) = descriptor {
            assert!(
                d.handler.accepts(d.mode),
                "opcode ${:02X} ({}) pairs {:?} with {:?}",
                opcode,
                d.mnemonic,
                d.handler,
                d.mode
            );
        }
    }
}

#[test]
fn test_base_cycles_in_range() {
    for descriptor in OPCODE_TABLE.iter().flatten() {
        assert!(
            (2..=7).contains(&descriptor.base_cycles),
            "{} {:?} has {} cycles",
            descriptor.mnemonic,
            descriptor.mode,
            descriptor.base_cycles
        );
    }
}

#[test]
fn test_spot_check_descriptors() {
    let cases = [
        (0x00, "BRK", AddressingMode::Implied, 7),
        (0x0A, "ASL", AddressingMode::Accumulator, 2),
        (0x20, "JSR", AddressingMode::Absolute, 6),
        (0x6C, "JMP", AddressingMode::Indirect, 5),
        (0x91, "STA", AddressingMode::IndirectIndexedY, 6),
        (0xB6, "LDX", AddressingMode::ZeroPageY, 4),
        (0xBE, "LDX", AddressingMode::AbsoluteY, 4),
        (0xD0, "BNE", AddressingMode::Relative, 2),
        (0xFE, "INC", AddressingMode::AbsoluteX, 7),
    ];

    for (opcode, mnemonic, mode, cycles) in cases {
        let d = lookup(opcode).unwrap();
        assert_eq!(d.mnemonic, mnemonic);
        assert_eq!(d.mode, mode);
        assert_eq!(d.base_cycles, cycles);
    }
}

#[test]
fn test_handler_kinds_follow_instruction_class() {
    assert!(matches!(lookup(0xA9).unwrap().handler, Handler::Read(_)));
    assert!(matches!(lookup(0x8D).unwrap().handler, Handler::Address(_)));
    assert!(matches!(lookup(0xEA).unwrap().handler, Handler::Implied(_)));
    assert!(matches!(lookup(0xF0).unwrap().handler, Handler::Branch(_)));
}

#[test]
fn test_undocumented_opcodes_absent() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x9C, 0xEB, 0xFF] {
        assert!(lookup(opcode).is_none(), "${:02X}", opcode);
    }
}

#[test]
fn test_size_bytes_follow_mode() {
    for descriptor in OPCODE_TABLE.iter().flatten() {
        assert_eq!(
            descriptor.size_bytes(),
            1 + descriptor.mode.operand_len()
        );
    }
}
